use once_cell::sync::Lazy;
use regex::Regex;

// Reasoning models sometimes emit their scratchpad ahead of the answer.
static THINK_TAG_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"<think>[\s\S]*?</think>|<think\s*/>").unwrap());

static THINKING_TAG_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"<thinking>[\s\S]*?</thinking>").unwrap());

static REASONING_TAG_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"<reasoning>[\s\S]*?</reasoning>").unwrap());

/// Normalizes raw provider output into the text returned to the client.
/// Only the reasoning blocks and the surrounding whitespace are removed.
pub fn clean_translation(raw: &str) -> String {
    let cleaned = THINK_TAG_PATTERN.replace_all(raw, "");
    let cleaned = THINKING_TAG_PATTERN.replace_all(&cleaned, "");
    let cleaned = REASONING_TAG_PATTERN.replace_all(&cleaned, "");

    cleaned.trim().to_string()
}
