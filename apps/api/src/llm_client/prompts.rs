// Cross-cutting prompt fragments. Feature prompts live in their own prompts.rs.

/// Appended to every system prompt that expects prose back.
pub const PLAIN_TEXT_INSTRUCTION: &str = "Respond with plain text only. \
    Do NOT use markdown, headings, bullet points or code fences. \
    Do NOT add preambles such as 'Sure' or 'Here is'.";
