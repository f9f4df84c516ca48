// Static wellness content: health advice, mental-peace techniques, daily insight.
// Served without authentication; nothing here touches the database or the LLM.

pub mod catalog;
pub mod handlers;
