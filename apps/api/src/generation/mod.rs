// Site generation: theme table, prompt composition, and the retrying content generator.
// All LLM calls go through llm_client — no direct provider calls here.

pub mod composer;
pub mod generator;
pub mod handlers;
pub mod prompts;
pub mod themes;
