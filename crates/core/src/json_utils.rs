//! JSON helpers for model output.

/// Strip a markdown code fence around JSON content, if present.
///
/// Models asked for bare JSON sometimes answer with `` ```json ... ``` ``;
/// any language tag after the opening fence is discarded.
#[must_use]
pub fn strip_markdown_json(content: &str) -> &str {
    let trimmed = content.trim();
    let Some(inner) = trimmed.strip_prefix("```").and_then(|s| s.strip_suffix("```")) else {
        return trimmed;
    };
    match inner.split_once('\n') {
        Some((_lang, body)) => body.trim(),
        None => inner.trim(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_json_block() {
        let input = "```json\n[{\"description\": \"call\"}]\n```";
        assert_eq!(strip_markdown_json(input), "[{\"description\": \"call\"}]");
    }

    #[test]
    fn test_strip_plain_block() {
        let input = "```\n[]\n```";
        assert_eq!(strip_markdown_json(input), "[]");
    }

    #[test]
    fn test_no_block() {
        assert_eq!(strip_markdown_json("  [] \n"), "[]");
    }

    #[test]
    fn test_single_line_fence() {
        assert_eq!(strip_markdown_json("```[]```"), "[]");
    }
}
