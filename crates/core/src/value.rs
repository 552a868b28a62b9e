//! Property values accepted by element constructors.

use crate::error::HtmlError;
use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime};
use indexmap::IndexMap;
use std::fmt;

/// A string that is already valid HTML and must never be escaped again.
///
/// Use with care: anything wrapped here reaches the output verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RawHtml(String);

impl RawHtml {
    /// Returns the wrapped markup.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the marker and returns the markup.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for RawHtml {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for RawHtml {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Wraps pre-escaped HTML so it bypasses auto-escaping.
///
/// # Examples
///
/// ```
/// use zenhtml_core::{raw, Element};
///
/// let node = Element::new("div").child(raw("<b>safe</b>")).build().unwrap();
/// assert_eq!(node.to_html(), "<div><b>safe</b></div>");
/// ```
pub fn raw(value: impl Into<String>) -> RawHtml {
    RawHtml(value.into())
}

impl TryFrom<PropValue> for RawHtml {
    type Error = HtmlError;

    fn try_from(value: PropValue) -> Result<Self, Self::Error> {
        match value {
            PropValue::Str(s) => Ok(RawHtml(s)),
            PropValue::Raw(r) => Ok(r),
            other => Err(HtmlError::RawNotString(other.kind().to_string())),
        }
    }
}

/// A property value before normalization.
///
/// Scalars become attribute strings, `Bool` controls presence, `List` is
/// only meaningful for `class`, and `Map` only for `dataset` and `style`.
#[derive(Debug, Clone, PartialEq)]
pub enum PropValue {
    /// Absent value; the property is dropped.
    Null,
    /// Presence flag for boolean attributes.
    Bool(bool),
    /// Integer, rendered with its decimal form.
    Int(i64),
    /// Float, rendered with its natural form.
    Float(f64),
    /// Plain text, escaped at render time.
    Str(String),
    /// Pre-escaped markup.
    Raw(RawHtml),
    /// Calendar date.
    Date(NaiveDate),
    /// Local date and time.
    DateTime(NaiveDateTime),
    /// Date and time with a UTC offset.
    DateTimeOffset(DateTime<FixedOffset>),
    /// Time of day.
    Time(NaiveTime),
    /// Ordered sequence (class lists).
    List(Vec<PropValue>),
    /// Ordered key/value pairs (dataset and style).
    Map(Vec<(String, PropValue)>),
}

impl PropValue {
    /// Builds a `Map` value from key/value pairs, keeping their order.
    pub fn map<K, V>(entries: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<PropValue>,
    {
        PropValue::Map(
            entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    /// Builds a `List` value.
    pub fn list<V: Into<PropValue>>(items: impl IntoIterator<Item = V>) -> Self {
        PropValue::List(items.into_iter().map(Into::into).collect())
    }

    /// Short name of the variant, used in error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            PropValue::Null => "null",
            PropValue::Bool(_) => "bool",
            PropValue::Int(_) => "int",
            PropValue::Float(_) => "float",
            PropValue::Str(_) => "str",
            PropValue::Raw(_) => "raw",
            PropValue::Date(_) => "date",
            PropValue::DateTime(_) | PropValue::DateTimeOffset(_) => "datetime",
            PropValue::Time(_) => "time",
            PropValue::List(_) => "list",
            PropValue::Map(_) => "map",
        }
    }

    /// Returns true for `Null`.
    pub fn is_null(&self) -> bool {
        matches!(self, PropValue::Null)
    }

    /// Text content for `Str` and `Raw`, which both count as strings.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            PropValue::Str(s) => Some(s),
            PropValue::Raw(r) => Some(r.as_str()),
            _ => None,
        }
    }
}

impl From<&str> for PropValue {
    fn from(value: &str) -> Self {
        PropValue::Str(value.to_string())
    }
}

impl From<String> for PropValue {
    fn from(value: String) -> Self {
        PropValue::Str(value)
    }
}

impl From<&String> for PropValue {
    fn from(value: &String) -> Self {
        PropValue::Str(value.clone())
    }
}

impl From<bool> for PropValue {
    fn from(value: bool) -> Self {
        PropValue::Bool(value)
    }
}

macro_rules! impl_from_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for PropValue {
                fn from(value: $t) -> Self {
                    PropValue::Int(i64::from(value))
                }
            }
        )*
    };
}

impl_from_int!(i8, i16, i32, i64, u8, u16, u32);

impl From<f32> for PropValue {
    fn from(value: f32) -> Self {
        PropValue::Float(f64::from(value))
    }
}

impl From<f64> for PropValue {
    fn from(value: f64) -> Self {
        PropValue::Float(value)
    }
}

impl From<RawHtml> for PropValue {
    fn from(value: RawHtml) -> Self {
        PropValue::Raw(value)
    }
}

impl From<NaiveDate> for PropValue {
    fn from(value: NaiveDate) -> Self {
        PropValue::Date(value)
    }
}

impl From<NaiveDateTime> for PropValue {
    fn from(value: NaiveDateTime) -> Self {
        PropValue::DateTime(value)
    }
}

impl From<DateTime<FixedOffset>> for PropValue {
    fn from(value: DateTime<FixedOffset>) -> Self {
        PropValue::DateTimeOffset(value)
    }
}

impl From<NaiveTime> for PropValue {
    fn from(value: NaiveTime) -> Self {
        PropValue::Time(value)
    }
}

impl<T: Into<PropValue>> From<Option<T>> for PropValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(PropValue::Null, Into::into)
    }
}

impl<T: Into<PropValue>> From<Vec<T>> for PropValue {
    fn from(value: Vec<T>) -> Self {
        PropValue::list(value)
    }
}

impl From<serde_json::Value> for PropValue {
    fn from(value: serde_json::Value) -> Self {
        use serde_json::Value as JsonValue;
        match value {
            JsonValue::Null => PropValue::Null,
            JsonValue::Bool(b) => PropValue::Bool(b),
            JsonValue::Number(n) => match n.as_i64() {
                Some(i) => PropValue::Int(i),
                None => PropValue::Float(n.as_f64().unwrap_or(f64::NAN)),
            },
            JsonValue::String(s) => PropValue::Str(s),
            JsonValue::Array(items) => PropValue::List(items.into_iter().map(Into::into).collect()),
            JsonValue::Object(entries) => {
                PropValue::Map(entries.into_iter().map(|(k, v)| (k, v.into())).collect())
            }
        }
    }
}

/// Ordered property bag keyed by property name.
///
/// Setting a name twice keeps its first position and the last value, the way
/// keyword arguments behave.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Props {
    entries: IndexMap<String, PropValue>,
}

impl Props {
    /// Creates an empty property bag.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a property, returning the bag for chaining.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<PropValue>) -> Self {
        self.set(name, value);
        self
    }

    /// Sets a property in place.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<PropValue>) {
        self.entries.insert(name.into(), value.into());
    }

    /// Looks up a property by its name as given.
    pub fn get(&self, name: &str) -> Option<&PropValue> {
        self.entries.get(name)
    }

    /// Removes a property, keeping the order of the rest.
    pub fn remove(&mut self, name: &str) -> Option<PropValue> {
        self.entries.shift_remove(name)
    }

    /// Number of properties.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no property was set.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &PropValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl<K, V> FromIterator<(K, V)> for Props
where
    K: Into<String>,
    V: Into<PropValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut props = Props::new();
        for (k, v) in iter {
            props.set(k, v);
        }
        props
    }
}

impl IntoIterator for Props {
    type Item = (String, PropValue);
    type IntoIter = indexmap::map::IntoIter<String, PropValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn props_keep_first_position_on_overwrite() {
        let props = Props::new()
            .with("id", "a")
            .with("title", "t")
            .with("id", "b");
        let keys: Vec<_> = props.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["id", "title"]);
        assert_eq!(props.get("id"), Some(&PropValue::from("b")));
    }

    #[test]
    fn option_none_is_null() {
        let value: PropValue = Option::<&str>::None.into();
        assert!(value.is_null());
        assert_eq!(PropValue::from(Some(3)), PropValue::Int(3));
    }

    #[test]
    fn json_values_convert_in_order() {
        let value = PropValue::from(json!({"b": 1, "a": [true, null, "x"]}));
        assert_eq!(
            value,
            PropValue::Map(vec![
                ("b".into(), PropValue::Int(1)),
                (
                    "a".into(),
                    PropValue::List(vec![
                        PropValue::Bool(true),
                        PropValue::Null,
                        PropValue::Str("x".into())
                    ])
                ),
            ])
        );
    }

    #[test]
    fn raw_rejects_non_strings() {
        assert_eq!(
            RawHtml::try_from(PropValue::Int(1)),
            Err(HtmlError::RawNotString("int".into()))
        );
        assert_eq!(
            RawHtml::try_from(PropValue::from("<b>")).map(RawHtml::into_string),
            Ok("<b>".to_string())
        );
    }
}
