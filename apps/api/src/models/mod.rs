pub mod chat;
pub mod journal;
pub mod user;
