use once_cell::sync::Lazy;
use regex::Regex;

const MAX_VISIBLE_CHARS: usize = 100;

static SENSITIVE_PATTERNS: Lazy<Vec<(Regex, &'static str)>> = Lazy::new(|| {
    [
        (r"(?i)bearer\s+[a-zA-Z0-9\-_.]+", "Bearer [REDACTED]"),
        (
            r#"(?i)api[_-]?key["']?\s*[:=]\s*["']?[a-zA-Z0-9\-_]+"#,
            "api_key=[REDACTED]",
        ),
        (r"sk-[a-zA-Z0-9\-_]{8,}", "sk-[REDACTED]"),
    ]
    .into_iter()
    .filter_map(|(pattern, replacement)| Regex::new(pattern).ok().map(|re| (re, replacement)))
    .collect()
});

/// Shorten user-supplied text and redact credentials before it reaches a log line.
pub fn sanitize_for_log(input: &str) -> String {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return "[EMPTY]".to_string();
    }

    let total = trimmed.chars().count();
    let visible = if total > MAX_VISIBLE_CHARS {
        let head: String = trimmed.chars().take(MAX_VISIBLE_CHARS).collect();
        format!("{}... ({} chars total)", head, total)
    } else {
        trimmed.to_string()
    };

    SENSITIVE_PATTERNS
        .iter()
        .fold(visible, |text, (re, replacement)| {
            re.replace_all(&text, *replacement).into_owned()
        })
}
