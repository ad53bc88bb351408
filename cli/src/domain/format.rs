//! Rendering of raw agent-runtime output for the terminal.
//!
//! Pure functions only. The formatter never fails: input it cannot make sense
//! of is passed through verbatim.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;
use serde_json::Value;

/// Fields that may carry an agent's answer, in lookup order.
const ANSWER_KEYS: &[&str] = &["content", "result", "response", "message", "output", "text"];

/// Opening of the answer text inside a runtime CLI transcript. Group 1 is the
/// run of backslashes escaping the quotes, i.e. the nesting depth.
static TEXT_MARKER_RE: LazyLock<Regex> = LazyLock::new(|| {
    #[allow(clippy::expect_used)]
    Regex::new(r#"(\\*)"text\\*"\s*:\s*\\*""#).expect("valid regex")
});

/// Separator left between streamed byte-string chunks once the transcript is
/// unwrapped onto one line.
static CHUNK_JOIN_RE: LazyLock<Regex> = LazyLock::new(|| {
    #[allow(clippy::expect_used)]
    Regex::new(r#"'"\s*,\s*"b'"#).expect("valid regex")
});

/// How the output was interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FormatKind {
    /// A JSON document or line-delimited JSON records.
    Structured,
    /// Answer text recovered from an escaped runtime CLI transcript.
    Transcript,
    /// Not understood; returned unchanged.
    Passthrough,
}

/// Terminal-ready rendering of one runtime response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Formatted {
    pub text: String,
    pub kind: FormatKind,
}

/// Format raw runtime output.
///
/// Tries, in order: a single JSON document, line-delimited JSON, the runtime
/// CLI transcript, and finally verbatim passthrough.
#[must_use]
pub fn format_output(raw: &str) -> Formatted {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Formatted {
            text: String::new(),
            kind: FormatKind::Passthrough,
        };
    }

    if let Ok(value) = serde_json::from_str::<Value>(trimmed) {
        return Formatted {
            text: render_value(&value),
            kind: FormatKind::Structured,
        };
    }

    if let Some(records) = parse_records(trimmed) {
        let text = records
            .iter()
            .map(render_value)
            .collect::<Vec<_>>()
            .join("\n");
        return Formatted {
            text,
            kind: FormatKind::Structured,
        };
    }

    if let Some(text) = decode_transcript(raw) {
        return Formatted {
            text,
            kind: FormatKind::Transcript,
        };
    }

    Formatted {
        text: raw.to_string(),
        kind: FormatKind::Passthrough,
    }
}

/// Extract the agent's answer text from a structured response.
///
/// Understands the shapes the agents return: a bare string, an assistant
/// message (`{"role", "content": [{"text"}]}`), and wrappers such as
/// `{"result": ...}`, `{"response": ...}` or `{"message": ...}`. Strings that
/// hold a Python bytes literal or a nested JSON document are unwrapped.
#[must_use]
pub fn answer_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(nested_text(s)),
        Value::Array(items) => array_text(items),
        Value::Object(map) => ANSWER_KEYS
            .iter()
            .filter_map(|key| map.get(*key))
            .find_map(answer_text),
        _ => None,
    }
}

fn render_value(value: &Value) -> String {
    match answer_text(value) {
        Some(text) if !text.trim().is_empty() => text.trim().to_string(),
        _ => serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string()),
    }
}

fn parse_records(input: &str) -> Option<Vec<Value>> {
    input
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| serde_json::from_str::<Value>(line).ok())
        .collect()
}

fn array_text(items: &[Value]) -> Option<String> {
    // Streamed responses are lists of byte-string chunks that only form a
    // document once concatenated; a chunk may end mid-escape.
    let bodies: Option<Vec<&str>> = items
        .iter()
        .map(|item| item.as_str().and_then(bytes_literal_body))
        .collect();
    if let Some(bodies) = bodies.filter(|b| !b.is_empty()) {
        return Some(nested_text(&unescape_once(&bodies.concat())));
    }

    let texts: Vec<String> = items.iter().filter_map(answer_text).collect();
    (!texts.is_empty()).then(|| texts.join("\n"))
}

fn nested_text(s: &str) -> String {
    let decoded = match bytes_literal_body(s) {
        Some(body) => unescape_once(body),
        None => s.to_string(),
    };
    let candidate = decoded.trim();
    if (candidate.starts_with('{') || candidate.starts_with('['))
        && let Ok(value) = serde_json::from_str::<Value>(candidate)
        && let Some(text) = answer_text(&value)
    {
        return text;
    }
    decoded
}

/// Body of a Python bytes literal (`b'...'`), if `s` is one.
fn bytes_literal_body(s: &str) -> Option<&str> {
    let s = s.trim();
    s.strip_prefix("b'")
        .and_then(|rest| rest.strip_suffix('\''))
        .or_else(|| s.strip_prefix("b\"").and_then(|rest| rest.strip_suffix('"')))
}

/// Recover the answer text from a runtime CLI transcript, where the agent's
/// JSON reply is wrapped in byte-string chunks inside another JSON document.
fn decode_transcript(raw: &str) -> Option<String> {
    let flat: String = raw.chars().filter(|c| *c != '\n' && *c != '\r').collect();
    let flat = CHUNK_JOIN_RE.replace_all(&flat, "").into_owned();

    let caps = TEXT_MARKER_RE.captures(&flat)?;
    let marker = caps.get(0)?;
    let depth = caps.get(1).map_or(0, |m| m.as_str().len());
    let body = &flat[marker.end()..];
    let content = &body[..closing_quote(body, depth).unwrap_or(body.len())];

    // Byte-string literals escape backslashes but not double quotes, which
    // adds one unescaping pass that the marker depth does not reveal.
    let in_bytes_literal = flat[..marker.start()].contains("b'");
    let passes = depth + 1 + usize::from(in_bytes_literal && depth > 0);

    let mut text = content.to_string();
    for _ in 0..passes {
        text = unescape_once(&text);
    }
    let text = text.trim();
    (!text.is_empty()).then(|| text.to_string())
}

/// Byte offset of the backslash run that closes a string escaped `depth`
/// times: a quote preceded by exactly `depth` backslashes.
fn closing_quote(body: &str, depth: usize) -> Option<usize> {
    let mut run = 0usize;
    for (idx, ch) in body.char_indices() {
        match ch {
            '\\' => run += 1,
            '"' if run == depth => return Some(idx - depth),
            _ => run = 0,
        }
    }
    None
}

/// Undo one level of backslash escaping.
///
/// Handles the JSON escapes, `\'`, and runs of `\xHH` byte escapes which are
/// decoded together as UTF-8 (kept verbatim when they are not valid UTF-8).
/// Unknown escapes are kept as-is.
#[must_use]
pub fn unescape_once(s: &str) -> String {
    let chars: Vec<char> = s.chars().collect();
    let mut out = String::with_capacity(s.len());
    let mut i = 0;

    while i < chars.len() {
        if chars[i] != '\\' || i + 1 >= chars.len() {
            out.push(chars[i]);
            i += 1;
            continue;
        }
        match chars[i + 1] {
            'n' => out.push('\n'),
            't' => out.push('\t'),
            'r' => out.push('\r'),
            '"' => out.push('"'),
            '\'' => out.push('\''),
            '\\' => out.push('\\'),
            '/' => out.push('/'),
            'u' => {
                if let Some((ch, used)) = unicode_escape(&chars[i..]) {
                    out.push(ch);
                    i += used;
                    continue;
                }
                out.push_str("\\u");
            }
            'x' => {
                let start = i;
                let mut bytes = Vec::new();
                while let Some(b) = hex_byte(&chars[i..]) {
                    bytes.push(b);
                    i += 4;
                }
                if bytes.is_empty() {
                    out.push_str("\\x");
                } else {
                    match String::from_utf8(bytes) {
                        Ok(decoded) => out.push_str(&decoded),
                        Err(_) => out.extend(&chars[start..i]),
                    }
                    continue;
                }
            }
            other => {
                out.push('\\');
                out.push(other);
            }
        }
        i += 2;
    }
    out
}

/// `\xHH` at the start of `chars`.
fn hex_byte(chars: &[char]) -> Option<u8> {
    match chars {
        ['\\', 'x', hi, lo, ..] => {
            let hi = hi.to_digit(16)?;
            let lo = lo.to_digit(16)?;
            u8::try_from(hi * 16 + lo).ok()
        }
        _ => None,
    }
}

/// `\uXXXX` (or a surrogate pair of them) at the start of `chars`.
/// Returns the character and the number of chars consumed.
fn unicode_escape(chars: &[char]) -> Option<(char, usize)> {
    let unit = |at: usize| -> Option<u32> {
        if chars.get(at) != Some(&'\\') || chars.get(at + 1) != Some(&'u') {
            return None;
        }
        let hex: String = chars.get(at + 2..at + 6)?.iter().collect();
        u32::from_str_radix(&hex, 16).ok()
    };

    let first = unit(0)?;
    if (0xD800..0xDC00).contains(&first) {
        if let Some(second) = unit(6).filter(|s| (0xDC00..0xE000).contains(s)) {
            let code = 0x10000 + ((first - 0xD800) << 10) + (second - 0xDC00);
            return char::from_u32(code).map(|c| (c, 12));
        }
        return Some((char::REPLACEMENT_CHARACTER, 6));
    }
    Some((char::from_u32(first).unwrap_or(char::REPLACEMENT_CHARACTER), 6))
}
