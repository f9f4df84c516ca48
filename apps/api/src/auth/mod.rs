// Session validation for all authenticated routes.
// Tokens are issued by the external auth provider; this service only reads
// them from request headers and resolves them against the shared session table.

pub mod extractor;
pub mod store;

pub use extractor::{CurrentUser, MaybeUser};
pub use store::{PgSessionProvider, SessionProvider};
