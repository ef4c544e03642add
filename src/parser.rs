use std::collections::HashMap;
use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

/// Leading `---` delimited block; the body between the markers is group 1.
/// Two adjacent marker lines (`---\n---`) do not form a block.
static FRONTMATTER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)\A---\r?\n(.*?)\r?\n---(?:\r?\n|\z)")
        .expect("frontmatter regex must compile")
});

/// A frontmatter value after coercion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum FrontmatterValue {
    /// Plain trimmed string.
    Text(String),
    /// Exactly `true` or `false`.
    Bool(bool),
    /// A `[a, b, c]` list.
    List(Vec<String>),
}

impl FrontmatterValue {
    /// Returns the string value, if this is [`FrontmatterValue::Text`].
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    fn coerce(raw: &str) -> Self {
        if let Some(inner) = raw.strip_prefix('[').and_then(|r| r.strip_suffix(']')) {
            if inner.trim().is_empty() {
                return Self::List(Vec::new());
            }
            return Self::List(inner.split(',').map(|s| s.trim().to_string()).collect());
        }
        match raw {
            "true" => Self::Bool(true),
            "false" => Self::Bool(false),
            _ => Self::Text(raw.to_string()),
        }
    }
}

impl fmt::Display for FrontmatterValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => write!(f, "{s}"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::List(items) => write!(f, "[{}]", items.join(", ")),
        }
    }
}

/// Flat key-value mapping parsed from a frontmatter block.
pub type Frontmatter = HashMap<String, FrontmatterValue>;

/// Extract the frontmatter block at the very start of `content`.
///
/// Returns `None` when the document does not open with a `---` line followed
/// by a closing `---` line. Each `key: value` line is split on its first
/// colon; lines without a colon, or starting with one, are skipped.
#[must_use]
pub fn parse_frontmatter(content: &str) -> Option<Frontmatter> {
    let caps = FRONTMATTER_RE.captures(content)?;
    let block = caps.get(1).map_or("", |m| m.as_str());

    let mut map = Frontmatter::new();
    for line in block.lines() {
        let Some(idx) = line.find(':') else {
            continue;
        };
        if idx == 0 {
            continue;
        }
        let key = line[..idx].trim();
        let value = line[idx + 1..].trim();
        map.insert(key.to_string(), FrontmatterValue::coerce(value));
    }
    Some(map)
}

/// Returns `true` if `content` contains the second-level heading `## {title}`.
///
/// Literal substring match; `##  Definition` (two spaces) does not count.
#[must_use]
pub fn has_section(content: &str, title: &str) -> bool {
    content.contains(&format!("## {title}"))
}
