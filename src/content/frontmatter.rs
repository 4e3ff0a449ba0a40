//! Front-matter parsing
//!
//! Content files open with a small block delimited by `---` lines holding
//! `key: value` pairs and `key:` headers followed by `- item` lines. This is
//! a deliberately tiny subset of YAML: no nesting, no multi-line scalars and
//! no escapes.

use indexmap::IndexMap;
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

lazy_static! {
    static ref BLOCK_RE: Regex = Regex::new(r"\A---\r?\n((?s).*?)\r?\n---").unwrap();
}

/// A single front-matter value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Flag(bool),
    Number(f64),
    Text(String),
    List(Vec<String>),
}

impl FieldValue {
    /// Coerce a non-empty raw scalar: strip one pair of matching quotes,
    /// then try boolean, then number, then fall back to text.
    pub fn coerce(raw: &str) -> Self {
        let value = strip_quotes(raw);
        match value {
            "true" => FieldValue::Flag(true),
            "false" => FieldValue::Flag(false),
            _ => match value.parse::<f64>() {
                Ok(n) if n.is_finite() => FieldValue::Number(n),
                _ => FieldValue::Text(value.to_string()),
            },
        }
    }

    /// Serialize as it would appear after `key: ` in a block
    fn to_scalar_source(&self) -> Option<String> {
        match self {
            FieldValue::Flag(b) => Some(b.to_string()),
            FieldValue::Number(n) => Some(n.to_string()),
            FieldValue::Text(s) if needs_quoting(s) => Some(format!("\"{}\"", s)),
            FieldValue::Text(s) => Some(s.clone()),
            FieldValue::List(_) => None,
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Flag(b) => write!(f, "{}", b),
            FieldValue::Number(n) => write!(f, "{}", n),
            FieldValue::Text(s) => f.write_str(s),
            FieldValue::List(items) => f.write_str(&items.join(", ")),
        }
    }
}

fn strip_quotes(value: &str) -> &str {
    for quote in ['"', '\''] {
        if value.len() >= 2 && value.starts_with(quote) && value.ends_with(quote) {
            return &value[1..value.len() - 1];
        }
    }
    value
}

fn needs_quoting(s: &str) -> bool {
    s.is_empty()
        || s != s.trim()
        || s.starts_with(['"', '\''])
        || s.ends_with(['"', '\''])
}

/// Fields parsed out of one front-matter block, in source order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContentRecord {
    fields: IndexMap<String, FieldValue>,
}

impl ContentRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a field. A repeated key replaces the value in place.
    pub fn insert(&mut self, key: impl Into<String>, value: FieldValue) {
        self.fields.insert(key.into(), value);
    }

    pub fn get(&self, key: &str) -> Option<&FieldValue> {
        self.fields.get(key)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    fn push_item(&mut self, key: &str, item: &str) {
        match self.fields.get_mut(key) {
            Some(FieldValue::List(items)) => items.push(item.to_string()),
            _ => self.insert(key, FieldValue::List(vec![item.to_string()])),
        }
    }

    /// Scalar field as a string. Numbers and booleans are rendered back to
    /// their source text; lists yield `None`.
    pub fn text(&self, key: &str) -> Option<String> {
        match self.get(key)? {
            FieldValue::List(_) => None,
            value => Some(value.to_string()),
        }
    }

    pub fn number(&self, key: &str) -> Option<f64> {
        match self.get(key)? {
            FieldValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn flag(&self, key: &str) -> Option<bool> {
        match self.get(key)? {
            FieldValue::Flag(b) => Some(*b),
            _ => None,
        }
    }

    pub fn list(&self, key: &str) -> Option<Vec<String>> {
        match self.get(key)? {
            FieldValue::List(items) => Some(items.clone()),
            _ => None,
        }
    }

    /// Sort key: the numeric `order` field, 0 when absent or not a number
    pub fn order(&self) -> f64 {
        self.number("order").unwrap_or(0.0)
    }

    /// Render the record back into block syntax, delimiters included
    pub fn to_front_matter(&self) -> String {
        let mut out = String::from("---\n");
        for (key, value) in &self.fields {
            match value {
                FieldValue::List(items) => {
                    out.push_str(key);
                    out.push_str(":\n");
                    for item in items {
                        out.push_str("  - ");
                        out.push_str(item);
                        out.push('\n');
                    }
                }
                scalar => {
                    if let Some(src) = scalar.to_scalar_source() {
                        out.push_str(&format!("{}: {}\n", key, src));
                    }
                }
            }
        }
        out.push_str("---\n");
        out
    }
}

/// Line parser state
#[derive(Debug, Clone, PartialEq)]
enum ParseState {
    TopLevel,
    InArray(String),
}

/// Front-matter block plus the markdown that follows it
#[derive(Debug, Clone, Default)]
pub struct FrontMatter {
    pub record: ContentRecord,
    pub body: String,
}

impl FrontMatter {
    /// Parse front-matter from content string.
    ///
    /// Content without a leading block yields an empty record and the whole
    /// text as body; this never fails.
    pub fn parse(content: &str) -> Self {
        let content = content.trim_start_matches('\u{feff}');

        let Some(caps) = BLOCK_RE.captures(content) else {
            return Self {
                record: ContentRecord::new(),
                body: content.to_string(),
            };
        };

        let block = caps.get(1).map(|m| m.as_str()).unwrap_or_default();
        let end = caps.get(0).map(|m| m.end()).unwrap_or_default();
        let body = content[end..].trim_start_matches(['\n', '\r']);

        Self {
            record: parse_block(block),
            body: body.to_string(),
        }
    }
}

/// Parse the lines between the delimiters
pub fn parse_block(block: &str) -> ContentRecord {
    let mut record = ContentRecord::new();
    let mut state = ParseState::TopLevel;
    for line in block.lines() {
        state = step(&mut record, state, line);
    }
    record
}

fn step(record: &mut ContentRecord, state: ParseState, line: &str) -> ParseState {
    let trimmed = line.trim();

    if let Some(item) = trimmed.strip_prefix('-') {
        if let ParseState::InArray(field) = &state {
            record.push_item(field, item.trim());
        }
        return state;
    }

    let Some((key, raw)) = line.split_once(':') else {
        return state;
    };
    let key = key.trim();
    if key.is_empty() {
        return state;
    }

    let raw = raw.trim();
    if raw.is_empty() {
        record.insert(key, FieldValue::List(Vec::new()));
        ParseState::InArray(key.to_string())
    } else {
        record.insert(key, FieldValue::coerce(raw));
        ParseState::TopLevel
    }
}
