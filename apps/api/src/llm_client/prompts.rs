// Prompt templates for caption generation.

/// Caption request. `{headline}` is replaced verbatim, inside double quotes.
pub const CAPTION_PROMPT_TEMPLATE: &str =
    "Write a short social media description with hashtags for this headline: \"{headline}\"";

pub fn caption_prompt(headline: &str) -> String {
    CAPTION_PROMPT_TEMPLATE.replace("{headline}", headline)
}
