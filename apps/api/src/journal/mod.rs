// Journal: per-user entries, created and listed newest-first.
// Listings are cached per user; creating an entry invalidates the caller's cache.

pub mod actions;
pub mod cache;
pub mod handlers;
pub mod store;
