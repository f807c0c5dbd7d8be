//! Keyword/value configuration records in dictionary format.
//!
//! Boundary conditions are configured and persisted as dictionaries: an
//! ordered list of `keyword value;` entries, optionally nested.
//!
//! # File Format
//!
//! ```text
//! // inlet patch
//! inlet
//! {
//!     type                parabolicVelocity;
//!     peakMagnitude       2;
//!     flowDirection       (1 0 0);
//!     transverseDirection (0 1 0);
//!     initialValue        uniform (0 0 0);
//! }
//! ```
//!
//! Supported values:
//! - scalars (`2`, `-1.5e-3`) and words (`parabolicVelocity`)
//! - parenthesised number lists; exactly three numbers form a vector
//! - `uniform (x y z)` and `nonuniform List<vector> N ( (x y z) ... )` fields
//! - `{ ... }` sub-dictionaries
//!
//! `//` line comments and `/* ... */` block comments are skipped.

use std::fmt;
use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::types::Vec3;

/// Error type for dictionary reading and parsing.
#[derive(Debug, Error)]
pub enum DictionaryError {
    /// File I/O error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Parse error with line number
    #[error("Parse error at line {line}: {message}")]
    ParseError { line: usize, message: String },
}

/// A required entry is missing or does not have the expected form.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum ConfigurationError {
    #[error("Missing required entry '{key}'")]
    MissingEntry { key: String },

    #[error("Entry '{key}' should be a {expected}, found {found}")]
    TypeMismatch {
        key: String,
        expected: &'static str,
        found: String,
    },

    #[error("Entry '{key}' has {found} values, expected {expected}")]
    SizeMismatch {
        key: String,
        expected: usize,
        found: usize,
    },

    #[error("Unknown boundary condition type '{0}'")]
    UnknownType(String),
}

/// Per-face vector field as written in a dictionary.
#[derive(Clone, Debug, PartialEq)]
pub enum FieldValue {
    /// Same value on every face.
    Uniform(Vec3),
    /// One value per face.
    NonUniform(Vec<Vec3>),
}

impl FieldValue {
    /// Expand to `n_faces` values.
    ///
    /// A non-uniform field must already have exactly `n_faces` entries.
    pub fn expand(&self, key: &str, n_faces: usize) -> Result<Vec<Vec3>, ConfigurationError> {
        match self {
            FieldValue::Uniform(v) => Ok(vec![*v; n_faces]),
            FieldValue::NonUniform(values) if values.len() == n_faces => Ok(values.clone()),
            FieldValue::NonUniform(values) => Err(ConfigurationError::SizeMismatch {
                key: key.to_string(),
                expected: n_faces,
                found: values.len(),
            }),
        }
    }
}

/// A single dictionary value.
#[derive(Clone, Debug, PartialEq)]
pub enum Entry {
    Scalar(f64),
    Word(String),
    Vector(Vec3),
    /// Number list that is not a 3-vector.
    List(Vec<f64>),
    Field(FieldValue),
    Dict(Dictionary),
}

impl Entry {
    /// Short description of the entry's form, for error messages.
    pub fn kind(&self) -> String {
        match self {
            Entry::Scalar(_) => "scalar".into(),
            Entry::Word(w) => format!("word '{w}'"),
            Entry::Vector(_) => "vector".into(),
            Entry::List(l) => format!("list of {} scalars", l.len()),
            Entry::Field(FieldValue::Uniform(_)) => "uniform field".into(),
            Entry::Field(FieldValue::NonUniform(v)) => {
                format!("non-uniform field of {} vectors", v.len())
            }
            Entry::Dict(_) => "sub-dictionary".into(),
        }
    }
}

impl From<f64> for Entry {
    fn from(v: f64) -> Self {
        Entry::Scalar(v)
    }
}

impl From<Vec3> for Entry {
    fn from(v: Vec3) -> Self {
        Entry::Vector(v)
    }
}

impl From<&str> for Entry {
    fn from(w: &str) -> Self {
        Entry::Word(w.to_string())
    }
}

impl From<FieldValue> for Entry {
    fn from(f: FieldValue) -> Self {
        Entry::Field(f)
    }
}

impl From<Dictionary> for Entry {
    fn from(d: Dictionary) -> Self {
        Entry::Dict(d)
    }
}

/// Ordered keyword/value record.
///
/// Keys are unique; inserting an existing key replaces its value in place,
/// so write order stays stable.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Dictionary {
    entries: Vec<(String, Entry)>,
}

impl Dictionary {
    /// Create an empty dictionary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over `(key, entry)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Entry)> {
        self.entries.iter().map(|(k, e)| (k.as_str(), e))
    }

    /// Keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    /// Check if a key is present.
    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Get an entry by key.
    pub fn get(&self, key: &str) -> Option<&Entry> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, e)| e)
    }

    /// Insert or replace an entry.
    pub fn insert(&mut self, key: impl Into<String>, entry: impl Into<Entry>) {
        let key = key.into();
        let entry = entry.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, existing)) => *existing = entry,
            None => self.entries.push((key, entry)),
        }
    }

    /// Builder-style insert.
    pub fn with(mut self, key: impl Into<String>, entry: impl Into<Entry>) -> Self {
        self.insert(key, entry);
        self
    }

    /// Remove an entry, returning it if present.
    pub fn remove(&mut self, key: &str) -> Option<Entry> {
        let idx = self.entries.iter().position(|(k, _)| k == key)?;
        Some(self.entries.remove(idx).1)
    }

    /// First of `keys` that is present, with its entry.
    pub fn find_any<'a>(&self, keys: &[&'a str]) -> Option<(&'a str, &Entry)> {
        keys.iter()
            .find_map(|&k| self.get(k).map(|entry| (k, entry)))
    }

    /// Get a required entry.
    pub fn lookup(&self, key: &str) -> Result<&Entry, ConfigurationError> {
        self.get(key).ok_or_else(|| ConfigurationError::MissingEntry {
            key: key.to_string(),
        })
    }

    /// Get a required scalar entry.
    pub fn lookup_scalar(&self, key: &str) -> Result<f64, ConfigurationError> {
        match self.lookup(key)? {
            Entry::Scalar(v) => Ok(*v),
            other => Err(mismatch(key, "scalar", other)),
        }
    }

    /// Get a required vector entry.
    pub fn lookup_vector(&self, key: &str) -> Result<Vec3, ConfigurationError> {
        match self.lookup(key)? {
            Entry::Vector(v) => Ok(*v),
            other => Err(mismatch(key, "vector", other)),
        }
    }

    /// Get a required word entry.
    pub fn lookup_word(&self, key: &str) -> Result<&str, ConfigurationError> {
        match self.lookup(key)? {
            Entry::Word(w) => Ok(w),
            other => Err(mismatch(key, "word", other)),
        }
    }

    /// Get a required field entry.
    pub fn lookup_field(&self, key: &str) -> Result<&FieldValue, ConfigurationError> {
        match self.lookup(key)? {
            Entry::Field(f) => Ok(f),
            other => Err(mismatch(key, "field", other)),
        }
    }

    /// Get a required sub-dictionary.
    pub fn lookup_dict(&self, key: &str) -> Result<&Dictionary, ConfigurationError> {
        match self.lookup(key)? {
            Entry::Dict(d) => Ok(d),
            other => Err(mismatch(key, "sub-dictionary", other)),
        }
    }

    fn write_indented(&self, f: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
        let pad = "    ".repeat(depth);
        for (key, entry) in &self.entries {
            match entry {
                Entry::Dict(d) => {
                    writeln!(f, "{pad}{key}")?;
                    writeln!(f, "{pad}{{")?;
                    d.write_indented(f, depth + 1)?;
                    writeln!(f, "{pad}}}")?;
                }
                Entry::Field(FieldValue::NonUniform(values)) => {
                    writeln!(f, "{pad}{key:<15} nonuniform List<vector> {}", values.len())?;
                    writeln!(f, "{pad}(")?;
                    for v in values {
                        writeln!(f, "{pad}{v}")?;
                    }
                    writeln!(f, "{pad})")?;
                    writeln!(f, "{pad};")?;
                }
                Entry::Field(FieldValue::Uniform(v)) => {
                    writeln!(f, "{pad}{key:<15} uniform {v};")?;
                }
                Entry::Scalar(v) => writeln!(f, "{pad}{key:<15} {v};")?,
                Entry::Word(w) => writeln!(f, "{pad}{key:<15} {w};")?,
                Entry::Vector(v) => writeln!(f, "{pad}{key:<15} {v};")?,
                Entry::List(l) => {
                    let items: Vec<String> = l.iter().map(|x| x.to_string()).collect();
                    writeln!(f, "{pad}{key:<15} ({});", items.join(" "))?;
                }
            }
        }
        Ok(())
    }
}

fn mismatch(key: &str, expected: &'static str, found: &Entry) -> ConfigurationError {
    ConfigurationError::TypeMismatch {
        key: key.to_string(),
        expected,
        found: found.kind(),
    }
}

/// Written in the same format [`parse_dictionary`] reads.
impl fmt::Display for Dictionary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_indented(f, 0)
    }
}

// =============================================================================
// Tokenizer
// =============================================================================

#[derive(Clone, Debug, PartialEq)]
enum TokenKind {
    Word(String),
    LParen,
    RParen,
    LBrace,
    RBrace,
    Semicolon,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Word(w) => write!(f, "'{w}'"),
            TokenKind::LParen => write!(f, "'('"),
            TokenKind::RParen => write!(f, "')'"),
            TokenKind::LBrace => write!(f, "'{{'"),
            TokenKind::RBrace => write!(f, "'}}'"),
            TokenKind::Semicolon => write!(f, "';'"),
        }
    }
}

#[derive(Clone, Debug)]
struct Token {
    kind: TokenKind,
    line: usize,
}

fn parse_error(line: usize, message: impl Into<String>) -> DictionaryError {
    DictionaryError::ParseError {
        line,
        message: message.into(),
    }
}

fn tokenize(content: &str) -> Result<Vec<Token>, DictionaryError> {
    let mut tokens = Vec::new();
    let mut chars = content.chars().peekable();
    let mut line = 1;

    while let Some(c) = chars.next() {
        match c {
            '\n' => line += 1,
            c if c.is_whitespace() => {}
            '(' | ')' | '{' | '}' | ';' => {
                let kind = match c {
                    '(' => TokenKind::LParen,
                    ')' => TokenKind::RParen,
                    '{' => TokenKind::LBrace,
                    '}' => TokenKind::RBrace,
                    _ => TokenKind::Semicolon,
                };
                tokens.push(Token { kind, line });
            }
            '/' if chars.peek() == Some(&'/') => {
                for c in chars.by_ref() {
                    if c == '\n' {
                        line += 1;
                        break;
                    }
                }
            }
            '/' if chars.peek() == Some(&'*') => {
                let start = line;
                chars.next();
                let mut prev = '\0';
                let mut closed = false;
                for c in chars.by_ref() {
                    if c == '\n' {
                        line += 1;
                    }
                    if prev == '*' && c == '/' {
                        closed = true;
                        break;
                    }
                    prev = c;
                }
                if !closed {
                    return Err(parse_error(start, "Unterminated block comment"));
                }
            }
            '"' => {
                let start = line;
                let mut word = String::new();
                let mut closed = false;
                for c in chars.by_ref() {
                    if c == '"' {
                        closed = true;
                        break;
                    }
                    if c == '\n' {
                        line += 1;
                    }
                    word.push(c);
                }
                if !closed {
                    return Err(parse_error(start, "Unterminated string"));
                }
                tokens.push(Token {
                    kind: TokenKind::Word(word),
                    line: start,
                });
            }
            c => {
                let mut word = String::from(c);
                while let Some(&next) = chars.peek() {
                    if next.is_whitespace() || "(){};".contains(next) {
                        break;
                    }
                    word.push(next);
                    chars.next();
                }
                tokens.push(Token {
                    kind: TokenKind::Word(word),
                    line,
                });
            }
        }
    }

    Ok(tokens)
}

// =============================================================================
// Parser
// =============================================================================

struct Parser {
    tokens: Vec<Token>,
    pos: usize,
}

impl Parser {
    fn next(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.pos).cloned();
        self.pos += 1;
        token
    }

    fn peek(&self) -> Option<&TokenKind> {
        self.tokens.get(self.pos).map(|t| &t.kind)
    }

    fn remaining(&self) -> usize {
        self.tokens.len().saturating_sub(self.pos)
    }

    fn last_line(&self) -> usize {
        self.tokens.last().map(|t| t.line).unwrap_or(1)
    }

    /// Parse entries until end of input (top level) or a closing brace.
    fn parse_entries(&mut self, opened_at: Option<usize>) -> Result<Dictionary, DictionaryError> {
        let mut dict = Dictionary::new();

        loop {
            let Some(token) = self.next() else {
                return match opened_at {
                    Some(line) => Err(parse_error(
                        line,
                        "Sub-dictionary is not closed with '}'",
                    )),
                    None => Ok(dict),
                };
            };

            match token.kind {
                TokenKind::RBrace if opened_at.is_some() => return Ok(dict),
                TokenKind::Semicolon => continue,
                TokenKind::Word(key) => {
                    if self.peek() == Some(&TokenKind::LBrace) {
                        self.next();
                        let sub = self.parse_entries(Some(token.line))?;
                        dict.insert(key, Entry::Dict(sub));
                    } else {
                        let entry = self.parse_value(&key, token.line)?;
                        match self.next() {
                            Some(Token {
                                kind: TokenKind::Semicolon,
                                ..
                            }) => {}
                            Some(t) => {
                                return Err(parse_error(
                                    t.line,
                                    format!("Expected ';' after entry '{key}', found {}", t.kind),
                                ))
                            }
                            None => {
                                return Err(parse_error(
                                    self.last_line(),
                                    format!("Expected ';' after entry '{key}'"),
                                ))
                            }
                        }
                        dict.insert(key, entry);
                    }
                }
                other => {
                    return Err(parse_error(
                        token.line,
                        format!("Expected keyword, found {other}"),
                    ))
                }
            }
        }
    }

    fn parse_value(&mut self, key: &str, key_line: usize) -> Result<Entry, DictionaryError> {
        let token = self
            .next()
            .ok_or_else(|| parse_error(key_line, format!("Missing value for '{key}'")))?;

        match token.kind {
            TokenKind::Word(w) if w == "uniform" => match self.parse_value(key, token.line)? {
                Entry::Vector(v) => Ok(Entry::Field(FieldValue::Uniform(v))),
                other => Err(parse_error(
                    token.line,
                    format!("Uniform value of '{key}' must be a vector, found {}", other.kind()),
                )),
            },
            TokenKind::Word(w) if w == "nonuniform" => self.parse_nonuniform(key, token.line),
            TokenKind::Word(w) => Ok(match w.parse::<f64>() {
                Ok(v) => Entry::Scalar(v),
                Err(_) => Entry::Word(w),
            }),
            TokenKind::LParen => {
                let values = self.parse_number_list(token.line)?;
                Ok(match values.as_slice() {
                    [x, y, z] => Entry::Vector(Vec3::new(*x, *y, *z)),
                    _ => Entry::List(values),
                })
            }
            other => Err(parse_error(
                token.line,
                format!("Missing value for '{key}', found {other}"),
            )),
        }
    }

    /// Numbers up to the closing parenthesis; the opening one is consumed.
    fn parse_number_list(&mut self, open_line: usize) -> Result<Vec<f64>, DictionaryError> {
        let mut values = Vec::new();
        loop {
            match self.next() {
                Some(Token {
                    kind: TokenKind::RParen,
                    ..
                }) => return Ok(values),
                Some(Token {
                    kind: TokenKind::Word(w),
                    line,
                }) => {
                    let v = w
                        .parse::<f64>()
                        .map_err(|_| parse_error(line, format!("Invalid number '{w}'")))?;
                    values.push(v);
                }
                Some(t) => {
                    return Err(parse_error(t.line, format!("Expected number, found {}", t.kind)))
                }
                None => return Err(parse_error(open_line, "List is not closed with ')'")),
            }
        }
    }

    fn parse_nonuniform(&mut self, key: &str, line: usize) -> Result<Entry, DictionaryError> {
        match self.next() {
            Some(Token {
                kind: TokenKind::Word(w),
                ..
            }) if w == "List<vector>" => {}
            Some(t) => {
                return Err(parse_error(
                    t.line,
                    format!("Unsupported field type {} for '{key}'", t.kind),
                ))
            }
            None => return Err(parse_error(line, format!("Missing field type for '{key}'"))),
        }

        let mut declared = None;
        if let Some(TokenKind::Word(w)) = self.peek() {
            let n = w
                .parse::<usize>()
                .map_err(|_| parse_error(line, format!("Invalid list size '{w}'")))?;
            declared = Some(n);
            self.next();
        }

        match self.next() {
            Some(Token {
                kind: TokenKind::LParen,
                ..
            }) => {}
            _ => return Err(parse_error(line, format!("Expected '(' in field '{key}'"))),
        }

        // Declared size is untrusted; every vector spans at least five tokens
        let mut values = Vec::with_capacity(declared.unwrap_or(0).min(self.remaining() / 5));
        loop {
            match self.next() {
                Some(Token {
                    kind: TokenKind::RParen,
                    ..
                }) => break,
                Some(Token {
                    kind: TokenKind::LParen,
                    line,
                }) => match self.parse_number_list(line)?.as_slice() {
                    [x, y, z] => values.push(Vec3::new(*x, *y, *z)),
                    other => {
                        return Err(parse_error(
                            line,
                            format!("Expected vector of 3 values, found {}", other.len()),
                        ))
                    }
                },
                Some(t) => {
                    return Err(parse_error(t.line, format!("Expected vector, found {}", t.kind)))
                }
                None => return Err(parse_error(line, format!("Field '{key}' is not closed"))),
            }
        }

        if let Some(n) = declared {
            if n != values.len() {
                return Err(parse_error(
                    line,
                    format!("Field '{key}' declares {n} values but lists {}", values.len()),
                ));
            }
        }

        Ok(Entry::Field(FieldValue::NonUniform(values)))
    }
}

/// Parse a dictionary from a string.
///
/// # Example
///
/// ```
/// use parabolic_velocity::io::parse_dictionary;
///
/// let dict = parse_dictionary("peakMagnitude 2; flowDirection (1 0 0);").unwrap();
/// assert_eq!(dict.lookup_scalar("peakMagnitude").unwrap(), 2.0);
/// ```
pub fn parse_dictionary(content: &str) -> Result<Dictionary, DictionaryError> {
    let tokens = tokenize(content)?;
    Parser { tokens, pos: 0 }.parse_entries(None)
}

/// Read a dictionary file.
pub fn read_dictionary_file(path: &Path) -> Result<Dictionary, DictionaryError> {
    let content = fs::read_to_string(path)?;
    parse_dictionary(&content)
}

/// Write a dictionary file.
pub fn write_dictionary_file(path: &Path, dict: &Dictionary) -> Result<(), DictionaryError> {
    fs::write(path, dict.to_string())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_scalars_words_vectors() {
        let content = r#"
type            parabolicVelocity;
peakMagnitude   -1.5e-1;
flowDirection   (1 0 0);
weights         (1 2);
"#;
        let dict = parse_dictionary(content).unwrap();

        assert_eq!(dict.len(), 4);
        assert_eq!(dict.lookup_word("type").unwrap(), "parabolicVelocity");
        assert_eq!(dict.lookup_scalar("peakMagnitude").unwrap(), -0.15);
        assert_eq!(
            dict.lookup_vector("flowDirection").unwrap(),
            Vec3::new(1.0, 0.0, 0.0)
        );
        assert_eq!(dict.get("weights"), Some(&Entry::List(vec![1.0, 2.0])));
    }

    #[test]
    fn test_parse_comments() {
        let content = r#"
// line comment
a 1; /* block
comment */ b 2;
"#;
        let dict = parse_dictionary(content).unwrap();
        assert_eq!(dict.keys().collect::<Vec<_>>(), vec!["a", "b"]);
    }

    #[test]
    fn test_parse_fields() {
        let content = r#"
u0 uniform (4 0 0);
u1 nonuniform List<vector> 2
(
(1 0 0)
(2 0 0)
)
;
"#;
        let dict = parse_dictionary(content).unwrap();

        assert_eq!(
            dict.lookup_field("u0").unwrap(),
            &FieldValue::Uniform(Vec3::new(4.0, 0.0, 0.0))
        );
        assert_eq!(
            dict.lookup_field("u1").unwrap(),
            &FieldValue::NonUniform(vec![Vec3::new(1.0, 0.0, 0.0), Vec3::new(2.0, 0.0, 0.0)])
        );
    }

    #[test]
    fn test_parse_subdictionary() {
        let content = r#"
inlet
{
    type fixedValue;
    value uniform (1 2 3);
}
"#;
        let dict = parse_dictionary(content).unwrap();
        let inlet = dict.lookup_dict("inlet").unwrap();
        assert_eq!(inlet.lookup_word("type").unwrap(), "fixedValue");
    }

    #[test]
    fn test_parse_errors_report_line() {
        let err = parse_dictionary("a 1;\nb (1 x 0);").unwrap_err();
        match err {
            DictionaryError::ParseError { line, .. } => assert_eq!(line, 2),
            other => panic!("unexpected error: {other}"),
        }

        assert!(parse_dictionary("a 1").is_err());
        assert!(parse_dictionary("a;").is_err());
        assert!(parse_dictionary("inlet { a 1;").is_err());
        assert!(parse_dictionary("a (1 2 3;").is_err());
        assert!(parse_dictionary("}").is_err());
        assert!(parse_dictionary("/* open").is_err());
        assert!(parse_dictionary("u nonuniform List<vector> 3 ((1 0 0));").is_err());
        assert!(parse_dictionary("u uniform 3;").is_err());
    }

    #[test]
    fn test_parse_oversized_list_header() {
        let result = parse_dictionary("v nonuniform List<vector> 18446744073709551615 ();");
        assert!(matches!(result, Err(DictionaryError::ParseError { line: 1, .. })));

        assert!(parse_dictionary("v nonuniform List<vector> 1000000000000 ((1 0 0));").is_err());
        assert!(parse_dictionary("v nonuniform List<vector> 99999999999999999999 ();").is_err());
    }

    #[test]
    fn test_lookup_errors() {
        let dict = parse_dictionary("a 1; v (1 2);").unwrap();

        assert_eq!(
            dict.lookup_vector("missing"),
            Err(ConfigurationError::MissingEntry {
                key: "missing".into()
            })
        );
        assert!(matches!(
            dict.lookup_vector("a"),
            Err(ConfigurationError::TypeMismatch { expected: "vector", .. })
        ));
        assert!(matches!(
            dict.lookup_vector("v"),
            Err(ConfigurationError::TypeMismatch { .. })
        ));
    }

    #[test]
    fn test_insert_replaces_in_place() {
        let mut dict = Dictionary::new().with("a", 1.0).with("b", 2.0);
        dict.insert("a", 3.0);

        assert_eq!(dict.keys().collect::<Vec<_>>(), vec!["a", "b"]);
        assert_eq!(dict.lookup_scalar("a").unwrap(), 3.0);
        assert_eq!(dict.remove("a"), Some(Entry::Scalar(3.0)));
        assert!(!dict.contains("a"));
    }

    #[test]
    fn test_find_any() {
        let dict = Dictionary::new().with("n", Vec3::new(1.0, 0.0, 0.0));
        let (key, _) = dict.find_any(&["flowDirection", "n"]).unwrap();
        assert_eq!(key, "n");
        assert!(dict.find_any(&["y"]).is_none());
    }

    #[test]
    fn test_display_round_trip() {
        let dict = Dictionary::new()
            .with("type", "parabolicVelocity")
            .with("peakMagnitude", 0.1 + 0.2)
            .with("flowDirection", Vec3::new(1.0 / 3.0, 0.0, -2.0))
            .with("coeffs", Entry::List(vec![1.0, 2.5]))
            .with(
                "value",
                FieldValue::NonUniform(vec![Vec3::new(0.5, 0.0, 0.0), Vec3::ZERO]),
            )
            .with(
                "inlet",
                Dictionary::new().with("initialValue", FieldValue::Uniform(Vec3::ZERO)),
            );

        let reparsed = parse_dictionary(&dict.to_string()).unwrap();
        assert_eq!(reparsed, dict);
    }

    #[test]
    fn test_expand_field() {
        let uniform = FieldValue::Uniform(Vec3::new(1.0, 0.0, 0.0));
        assert_eq!(uniform.expand("value", 3).unwrap().len(), 3);

        let listed = FieldValue::NonUniform(vec![Vec3::ZERO; 2]);
        assert!(listed.expand("value", 2).is_ok());
        assert_eq!(
            listed.expand("value", 3),
            Err(ConfigurationError::SizeMismatch {
                key: "value".into(),
                expected: 3,
                found: 2
            })
        );
    }

    #[test]
    fn test_read_write_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "peakMagnitude 2;").unwrap();
        writeln!(file, "flowDirection (1 0 0);").unwrap();

        let dict = read_dictionary_file(file.path()).unwrap();
        assert_eq!(dict.lookup_scalar("peakMagnitude").unwrap(), 2.0);

        let out = NamedTempFile::new().unwrap();
        write_dictionary_file(out.path(), &dict).unwrap();
        assert_eq!(read_dictionary_file(out.path()).unwrap(), dict);
    }

    #[test]
    fn test_read_missing_file() {
        let result = read_dictionary_file(Path::new("/nonexistent/boundaryField"));
        assert!(matches!(result, Err(DictionaryError::IoError(_))));
    }
}
