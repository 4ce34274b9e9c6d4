// Structured skills-gap flow: constrain the model to a JSON report and
// deserialize it directly instead of scraping free text.
// All LLM calls go through llm_client — no direct Groq calls here.

pub mod handlers;
pub mod models;
pub mod prompts;
