// Cross-cutting prompt fragments shared by every suggestion variant.
// Each service that needs LLM calls defines its own prompts.rs alongside it;
// this file holds only the fragments reused across them.

/// Output contract appended to every bridge/word suggestion system prompt.
/// These constrain the MODEL, not the server: the post-processor only trims
/// whitespace and trailing punctuation, and never validates length.
pub const SUGGESTION_OUTPUT_RULES: &str = "\
    Return ONLY the suggested words — 5 to 7 words, no more. \
    Do NOT end with punctuation. \
    Do NOT explain, apologize, or add commentary. \
    If the thought already feels complete, return an empty string.";

/// System prompt fragment that enforces JSON-only output for structured calls.
pub const JSON_ONLY_SYSTEM: &str = "You are a precise, structured assistant. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";
