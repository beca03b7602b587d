//! Front matter parsing and serialization.
//!
//! A stored document is a `---`-delimited metadata block followed by a
//! markdown body:
//!
//! ```text
//! ---
//! title: Hello
//! tags: [rust, blog]
//! ---
//!
//! body text
//! ```
//!
//! Parsing is permissive by design: lines without a colon are skipped,
//! a document without an opening delimiter is all body, and nothing in
//! here ever returns an error. Serialization performs no escaping of
//! values containing `:`, `[`, quotes, or newlines; documents are
//! expected to stay within the shape the editor produces.

use regex::Regex;
use std::sync::LazyLock;

/// Matches the metadata block at the start of a document: an opening
/// delimiter line, the block, a closing delimiter line, and the
/// whitespace run that separates it from the body.
static FRONT_MATTER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)\A---\s*\n(.*?)\n---\s*\n").expect("valid regex"));

// ============================================================================
// Types
// ============================================================================

/// A single front matter value: a plain string or a `[a, b, c]` list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Scalar(String),
    List(Vec<String>),
}

/// An insertion-ordered set of front matter entries.
///
/// Serialization emits keys in the order they were pushed, so the codec
/// round-trips a parsed block without reordering it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrontMatter {
    entries: Vec<(String, Value)>,
}

impl FrontMatter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry, keeping insertion order.
    pub fn push(&mut self, key: impl Into<String>, value: Value) {
        self.entries.push((key.into(), value));
    }

    pub fn push_scalar(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.push(key, Value::Scalar(value.into()));
    }

    pub fn push_list(&mut self, key: impl Into<String>, values: Vec<String>) {
        self.push(key, Value::List(values));
    }

    /// Scalar value for `key`, if present and scalar.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.iter().find_map(|(k, v)| match v {
            Value::Scalar(s) if k == key => Some(s.as_str()),
            _ => None,
        })
    }

    /// List value for `key`, if present and a list.
    pub fn get_list(&self, key: &str) -> Option<&[String]> {
        self.entries.iter().find_map(|(k, v)| match v {
            Value::List(items) if k == key => Some(items.as_slice()),
            _ => None,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &(String, Value)> {
        self.entries.iter()
    }
}

// ============================================================================
// Parsing
// ============================================================================

/// Whether `raw` starts with a front matter block.
pub fn has_front_matter(raw: &str) -> bool {
    FRONT_MATTER_RE.is_match(raw)
}

/// Split a raw document into metadata and body.
///
/// Without an opening delimiter the metadata is empty and the entire
/// input is the body. Inside the block, each line is split on its first
/// `:`; the value is trimmed and one layer of surrounding matching
/// quotes (`'` or `"`) is stripped. A trimmed value of the form
/// `[a, b, c]` becomes a list, with the same trim-and-unquote applied
/// per element. Lines without a colon are skipped.
pub fn parse(raw: &str) -> (FrontMatter, String) {
    let Some(captures) = FRONT_MATTER_RE.captures(raw) else {
        return (FrontMatter::new(), raw.to_owned());
    };

    let block = captures.get(1).map_or("", |m| m.as_str());
    let body = raw[captures.get(0).map_or(0, |m| m.end())..].to_owned();

    let mut front_matter = FrontMatter::new();
    for line in block.lines() {
        let Some(colon) = line.find(':') else {
            continue;
        };
        let key = line[..colon].trim();
        let value = strip_quotes(line[colon + 1..].trim());

        if value.starts_with('[') && value.ends_with(']') {
            let items = value[1..value.len() - 1]
                .split(',')
                .map(|item| strip_quotes(item.trim()).to_owned())
                .collect();
            front_matter.push_list(key, items);
        } else {
            front_matter.push_scalar(key, value);
        }
    }

    (front_matter, body)
}

/// Strip one layer of surrounding matching quotes.
fn strip_quotes(value: &str) -> &str {
    let bytes = value.as_bytes();
    if bytes.len() >= 2
        && (bytes[0] == b'"' || bytes[0] == b'\'')
        && bytes[bytes.len() - 1] == bytes[0]
    {
        &value[1..value.len() - 1]
    } else {
        value
    }
}

// ============================================================================
// Serialization
// ============================================================================

/// Render metadata and body back into document form.
///
/// Emits the delimiter, each entry in insertion order (lists as
/// `key: [a, b, c]`), the closing delimiter, a blank line, then the
/// body verbatim.
pub fn render(front_matter: &FrontMatter, body: &str) -> String {
    let mut out = String::from("---\n");
    for (key, value) in front_matter.iter() {
        match value {
            Value::Scalar(s) => {
                out.push_str(key);
                out.push_str(": ");
                out.push_str(s);
            }
            Value::List(items) => {
                out.push_str(key);
                out.push_str(": [");
                out.push_str(&items.join(", "));
                out.push(']');
            }
        }
        out.push('\n');
    }
    out.push_str("---\n\n");
    out.push_str(body);
    out
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_scalars_and_lists() {
        let raw = "---\ntitle: Hello World\ntags: [rust, blog, cli]\n---\n\n# Hello\n";
        let (fm, body) = parse(raw);

        assert_eq!(fm.get("title"), Some("Hello World"));
        assert_eq!(
            fm.get_list("tags"),
            Some(&["rust".to_owned(), "blog".to_owned(), "cli".to_owned()][..])
        );
        assert_eq!(body, "# Hello\n");
    }

    #[test]
    fn test_parse_preserves_key_order() {
        let raw = "---\nb: 2\na: 1\nc: 3\n---\nbody";
        let (fm, _) = parse(raw);
        let keys: Vec<&str> = fm.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, vec!["b", "a", "c"]);
    }

    #[test]
    fn test_parse_strips_matching_quotes() {
        let raw = "---\ntitle: \"Quoted Title\"\nsubtitle: 'single'\nodd: \"mismatched'\n---\nx";
        let (fm, _) = parse(raw);
        assert_eq!(fm.get("title"), Some("Quoted Title"));
        assert_eq!(fm.get("subtitle"), Some("single"));
        // Mismatched quotes are left alone.
        assert_eq!(fm.get("odd"), Some("\"mismatched'"));
    }

    #[test]
    fn test_parse_quoted_list_elements() {
        let raw = "---\ntags: [\"a\", 'b', c]\n---\nx";
        let (fm, _) = parse(raw);
        assert_eq!(
            fm.get_list("tags"),
            Some(&["a".to_owned(), "b".to_owned(), "c".to_owned()][..])
        );
    }

    #[test]
    fn test_parse_skips_lines_without_colon() {
        let raw = "---\ntitle: ok\nthis line has no separator\n---\nbody";
        let (fm, body) = parse(raw);
        assert_eq!(fm.len(), 1);
        assert_eq!(fm.get("title"), Some("ok"));
        assert_eq!(body, "body");
    }

    #[test]
    fn test_parse_without_delimiter_is_all_body() {
        let raw = "# Just a heading\n\nNo metadata here.";
        let (fm, body) = parse(raw);
        assert!(fm.is_empty());
        assert_eq!(body, raw);
    }

    #[test]
    fn test_parse_empty_block() {
        let raw = "---\n\n---\n\nThe body.";
        let (fm, body) = parse(raw);
        assert!(fm.is_empty());
        assert_eq!(body, "The body.");
    }

    #[test]
    fn test_parse_value_containing_colon() {
        let raw = "---\ncover: https://example.com/a.png\n---\nx";
        let (fm, _) = parse(raw);
        assert_eq!(fm.get("cover"), Some("https://example.com/a.png"));
    }

    #[test]
    fn test_render_layout() {
        let mut fm = FrontMatter::new();
        fm.push_scalar("title", "Hi");
        fm.push_list("tags", vec!["a".into(), "b".into()]);

        let text = render(&fm, "# Hi\n");
        assert_eq!(text, "---\ntitle: Hi\ntags: [a, b]\n---\n\n# Hi\n");
    }

    #[test]
    fn test_round_trip() {
        let mut fm = FrontMatter::new();
        fm.push_scalar("id", "abc123def");
        fm.push_scalar("title", "Round Trip");
        fm.push_list("tags", vec!["one".into(), "two".into()]);
        fm.push_scalar("excerpt", "A short summary.");
        let body = "# Round Trip\n\nSome **markdown** body.\n";

        let (parsed, parsed_body) = parse(&render(&fm, body));
        assert_eq!(parsed, fm);
        assert_eq!(parsed_body, body);
    }

    #[test]
    fn test_has_front_matter() {
        assert!(has_front_matter("---\na: 1\n---\nbody"));
        assert!(!has_front_matter("# heading only"));
        assert!(!has_front_matter("--- not a delimiter line"));
    }
}
