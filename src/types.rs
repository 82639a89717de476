use std::fmt::{self, Write as _};

use chrono::NaiveDateTime;
use serde::Serialize;

/// Values that can be stored in a database row or used as query parameters.
///
/// The same enum is used for bound parameters and for the cells of a result set:
/// ```rust
/// use pet_meals::prelude::*;
///
/// let params = vec![
///     RowValues::Int(1),
///     RowValues::Text("Czaruś".into()),
///     RowValues::from("cat"),
/// ];
/// # let _ = params;
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum RowValues {
    /// Integer value (64-bit)
    Int(i64),
    /// Floating point value (64-bit)
    Float(f64),
    /// Text/string value
    Text(String),
    /// Boolean value, stored as 0/1
    Bool(bool),
    /// Timestamp value, stored as text
    Timestamp(NaiveDateTime),
    /// NULL value
    Null,
    /// Binary data
    Blob(Vec<u8>),
}

impl RowValues {
    /// Check if this value is NULL
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    #[must_use]
    pub fn as_int(&self) -> Option<&i64> {
        if let RowValues::Int(value) = self {
            Some(value)
        } else {
            None
        }
    }

    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        if let RowValues::Text(value) = self {
            Some(value)
        } else {
            None
        }
    }

    #[must_use]
    pub fn as_bool(&self) -> Option<&bool> {
        if let RowValues::Bool(value) = self {
            return Some(value);
        } else if let Some(i) = self.as_int() {
            if *i == 1 {
                return Some(&true);
            } else if *i == 0 {
                return Some(&false);
            }
        }
        None
    }

    #[must_use]
    pub fn as_timestamp(&self) -> Option<NaiveDateTime> {
        if let RowValues::Timestamp(value) = self {
            return Some(*value);
        } else if let Some(s) = self.as_text() {
            // Try "YYYY-MM-DD HH:MM:SS"
            if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S") {
                return Some(dt);
            }
            // Try "YYYY-MM-DD HH:MM:SS.SSS"
            if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S%.3f") {
                return Some(dt);
            }
        }
        None
    }

    #[must_use]
    pub fn as_float(&self) -> Option<f64> {
        if let RowValues::Float(value) = self {
            Some(*value)
        } else {
            None
        }
    }

    #[must_use]
    pub fn as_blob(&self) -> Option<&[u8]> {
        if let RowValues::Blob(bytes) = self {
            Some(bytes)
        } else {
            None
        }
    }
}

/// Renders the value the way it reads in a result tuple: text quoted, NULL as `None`.
impl fmt::Display for RowValues {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RowValues::Int(i) => write!(f, "{i}"),
            // Debug keeps the fractional part of whole floats: `1.0`, not `1`.
            RowValues::Float(x) => write!(f, "{x:?}"),
            RowValues::Text(s) => write_quoted(f, s),
            RowValues::Bool(b) => write!(f, "{}", i64::from(*b)),
            RowValues::Timestamp(dt) => write!(f, "'{}'", dt.format("%F %T%.f")),
            RowValues::Null => f.write_str("None"),
            RowValues::Blob(bytes) => write!(f, "<{} bytes>", bytes.len()),
        }
    }
}

/// Single quotes unless the text holds a `'` and no `"`, escaping whatever would end the literal.
fn write_quoted(f: &mut fmt::Formatter<'_>, s: &str) -> fmt::Result {
    let quote = if s.contains('\'') && !s.contains('"') {
        '"'
    } else {
        '\''
    };
    f.write_char(quote)?;
    for c in s.chars() {
        match c {
            '\\' => f.write_str("\\\\")?,
            '\n' => f.write_str("\\n")?,
            '\r' => f.write_str("\\r")?,
            '\t' => f.write_str("\\t")?,
            c if c == quote => {
                f.write_char('\\')?;
                f.write_char(c)?;
            }
            c => f.write_char(c)?,
        }
    }
    f.write_char(quote)
}

impl From<i64> for RowValues {
    fn from(value: i64) -> Self {
        RowValues::Int(value)
    }
}

impl From<i32> for RowValues {
    fn from(value: i32) -> Self {
        RowValues::Int(i64::from(value))
    }
}

impl From<f64> for RowValues {
    fn from(value: f64) -> Self {
        RowValues::Float(value)
    }
}

impl From<bool> for RowValues {
    fn from(value: bool) -> Self {
        RowValues::Bool(value)
    }
}

impl From<&str> for RowValues {
    fn from(value: &str) -> Self {
        RowValues::Text(value.to_string())
    }
}

impl From<String> for RowValues {
    fn from(value: String) -> Self {
        RowValues::Text(value)
    }
}

impl From<NaiveDateTime> for RowValues {
    fn from(value: NaiveDateTime) -> Self {
        RowValues::Timestamp(value)
    }
}

impl From<Vec<u8>> for RowValues {
    fn from(value: Vec<u8>) -> Self {
        RowValues::Blob(value)
    }
}

impl<T: Into<RowValues>> From<Option<T>> for RowValues {
    fn from(value: Option<T>) -> Self {
        value.map_or(RowValues::Null, Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_parses_as_timestamp() {
        let value = RowValues::from("2023-09-12 20:00:00");
        let dt = value.as_timestamp().expect("timestamp");
        assert_eq!(dt.format("%F %T").to_string(), "2023-09-12 20:00:00");
        assert!(RowValues::from("supper").as_timestamp().is_none());
    }

    #[test]
    fn int_reads_as_bool() {
        assert_eq!(RowValues::Int(1).as_bool(), Some(&true));
        assert_eq!(RowValues::Int(0).as_bool(), Some(&false));
        assert_eq!(RowValues::Int(2).as_bool(), None);
    }

    #[test]
    fn display_matches_tuple_rendering() {
        assert_eq!(RowValues::Int(7).to_string(), "7");
        assert_eq!(RowValues::from("45g").to_string(), "'45g'");
        assert_eq!(RowValues::from(None::<String>).to_string(), "None");
        assert_eq!(RowValues::Float(1.0).to_string(), "1.0");
        assert_eq!(RowValues::Float(2.5).to_string(), "2.5");
    }

    #[test]
    fn display_picks_quote_like_a_tuple_repr() {
        assert_eq!(RowValues::from("O'Malley").to_string(), r#""O'Malley""#);
        assert_eq!(RowValues::from(r#"say "hi""#).to_string(), r#"'say "hi"'"#);
        assert_eq!(RowValues::from(r#"it's "x""#).to_string(), r#"'it\'s "x"'"#);
        assert_eq!(RowValues::from("a\\b\n").to_string(), r"'a\\b\n'");
    }

    #[test]
    fn serializes_untagged() {
        let json = serde_json::to_string(&vec![
            RowValues::Int(1),
            RowValues::from("cat"),
            RowValues::Null,
        ])
        .expect("json");
        assert_eq!(json, r#"[1,"cat",null]"#);
    }
}
