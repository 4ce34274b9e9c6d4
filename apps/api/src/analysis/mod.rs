// Free-text analysis flow: prompt the model for a two-section plain-text
// answer, then recover structure with the section extractor.
// All LLM calls go through llm_client — no direct Groq calls here.

pub mod audit;
pub mod extractor;
pub mod handlers;
pub mod prompts;
