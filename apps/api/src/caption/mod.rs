// AI caption generation for headlines.
// All model calls go through llm_client; no direct Gemini calls here.

pub mod handlers;
