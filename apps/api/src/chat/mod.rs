// Chat pipeline: crisis scan → language detection → translation → Gemini
// completion → translation back → persistence.
// All LLM calls go through llm_client — no direct Gemini calls here.

pub mod crisis;
pub mod handlers;
pub mod language;
pub mod pipeline;
pub mod prompts;
pub mod store;
