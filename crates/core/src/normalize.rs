//! Property name and value normalization.
//!
//! Turns caller-facing property names (`fontSize`, `http_equiv`, `class_`)
//! into HTML attribute names and typed values into attribute strings, and
//! expands the `class`, `dataset` and `style` shorthands.

use crate::error::HtmlError;
use crate::node::AttrValue;
use crate::value::{PropValue, Props};
use indexmap::IndexMap;
use once_cell::sync::Lazy;
use regex::Regex;

/// Property names that stand in for reserved words.
pub const PROP_NAME_MAP: [(&str, &str); 4] = [
    ("for_", "for"),
    ("class_", "class"),
    ("async_", "async"),
    ("as_", "as"),
];

static UPPER_RUN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"([A-Z]+)([A-Z][a-z])").expect("upper-run pattern is a valid regex")
});
static LOWER_UPPER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"([a-z0-9])([A-Z])").expect("lower-upper pattern is a valid regex")
});

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Replaces `__` with `:` when a word character sits on either side.
fn namespace_colons(s: &str) -> String {
    let chars: Vec<char> = s.chars().collect();
    let mut out = String::with_capacity(s.len());
    let mut i = 0;
    while i < chars.len() {
        if chars[i] == '_' && chars.get(i + 1) == Some(&'_') {
            let before = i > 0 && is_word_char(chars[i - 1]);
            let after = chars.get(i + 2).is_some_and(|c| is_word_char(*c));
            if before || after {
                out.push(':');
                i += 2;
                continue;
            }
        }
        out.push(chars[i]);
        i += 1;
    }
    out
}

/// Converts a property name to its HTML attribute name.
///
/// # Examples
///
/// ```
/// use zenhtml_core::normalize::html_name;
///
/// assert_eq!(html_name("fontSize"), "font-size");
/// assert_eq!(html_name("XMLHttp"), "xml-http");
/// assert_eq!(html_name("http_equiv"), "http-equiv");
/// assert_eq!(html_name("grid__templateColumns"), "grid:template-columns");
/// assert_eq!(html_name("for_"), "for");
/// ```
pub fn html_name(name: &str) -> String {
    if let Some((_, mapped)) = PROP_NAME_MAP.iter().find(|(prop, _)| *prop == name) {
        return mapped.to_string();
    }
    let s = UPPER_RUN.replace_all(name, "${1}-${2}");
    let s = LOWER_UPPER.replace_all(&s, "${1}-${2}");
    namespace_colons(&s).replace('_', "-").to_lowercase()
}

/// String form of a scalar value. Composite values, booleans and null have none.
pub fn scalar_text(value: &PropValue) -> Option<String> {
    match value {
        PropValue::Str(s) => Some(s.clone()),
        PropValue::Raw(r) => Some(r.as_str().to_string()),
        PropValue::Int(i) => Some(i.to_string()),
        PropValue::Float(f) => Some(f.to_string()),
        PropValue::Date(d) => Some(d.format("%Y-%m-%d").to_string()),
        PropValue::DateTime(dt) => Some(dt.format("%Y-%m-%dT%H:%M:%S").to_string()),
        PropValue::DateTimeOffset(dt) => Some(dt.format("%Y-%m-%dT%H:%M:%S%:z").to_string()),
        PropValue::Time(t) => Some(t.format("%H:%M:%S").to_string()),
        PropValue::Null | PropValue::Bool(_) | PropValue::List(_) | PropValue::Map(_) => None,
    }
}

/// Converts a validated property value to its stored attribute form.
///
/// Returns `None` for values that leave no trace: null and `false`.
pub fn attr_value(attr: &str, value: PropValue) -> Result<Option<AttrValue>, HtmlError> {
    match value {
        PropValue::Null | PropValue::Bool(false) => Ok(None),
        PropValue::Bool(true) => Ok(Some(AttrValue::Flag)),
        PropValue::Raw(r) => Ok(Some(AttrValue::Raw(r))),
        PropValue::Str(s) => Ok(Some(AttrValue::Text(s))),
        ref other @ (PropValue::List(_) | PropValue::Map(_)) => Err(HtmlError::UnsupportedValue {
            attr: attr.to_string(),
            kind: other.kind(),
        }),
        other => Ok(scalar_text(&other).map(AttrValue::Text)),
    }
}

/// Normalizes a `class` value: a string is kept, a sequence is trimmed and
/// joined with single spaces, skipping nulls and empty entries.
///
/// # Examples
///
/// ```
/// use zenhtml_core::normalize::class_value;
/// use zenhtml_core::PropValue;
///
/// let classes = PropValue::List(vec![
///     "foo".into(),
///     PropValue::Null,
///     " bar ".into(),
///     "baz".into(),
/// ]);
/// assert_eq!(class_value(classes).unwrap(), PropValue::from("foo bar baz"));
/// ```
pub fn class_value(value: PropValue) -> Result<PropValue, HtmlError> {
    match value {
        PropValue::Null | PropValue::Str(_) | PropValue::Raw(_) => Ok(value),
        PropValue::List(items) => {
            let mut classes = Vec::with_capacity(items.len());
            for item in &items {
                match item {
                    PropValue::Null => continue,
                    PropValue::Str(_) | PropValue::Raw(_) => {
                        let token = item.as_text().unwrap_or_default().trim();
                        if !token.is_empty() {
                            classes.push(token);
                        }
                    }
                    other => return Err(HtmlError::InvalidClassEntry(other.kind().to_string())),
                }
            }
            Ok(PropValue::Str(classes.join(" ")))
        }
        other => Err(HtmlError::InvalidClass(other.kind().to_string())),
    }
}

/// Expands a `dataset` mapping into `data-*` properties.
///
/// Booleans become the literal strings `"true"` / `"false"`; null entries are
/// skipped.
pub fn expand_dataset(value: PropValue) -> Result<Vec<(String, PropValue)>, HtmlError> {
    let entries = match value {
        PropValue::Null => return Ok(Vec::new()),
        PropValue::Map(entries) => entries,
        other => return Err(HtmlError::InvalidDataset(other.kind().to_string())),
    };

    let mut expanded = Vec::with_capacity(entries.len());
    for (key, value) in entries {
        let name = format!("data-{}", html_name(&key));
        let value = match value {
            PropValue::Null => continue,
            PropValue::Bool(b) => PropValue::Str(b.to_string()),
            PropValue::Raw(r) => PropValue::Raw(r),
            ref other @ (PropValue::List(_) | PropValue::Map(_)) => {
                return Err(HtmlError::InvalidDataset(format!(
                    "{} value for key '{}'",
                    other.kind(),
                    key
                )));
            }
            other => PropValue::Str(scalar_text(&other).unwrap_or_default()),
        };
        expanded.push((name, value));
    }
    Ok(expanded)
}

/// Flattens a `style` mapping into a single declaration string.
///
/// # Examples
///
/// ```
/// use zenhtml_core::normalize::style_value;
/// use zenhtml_core::PropValue;
///
/// let style = PropValue::map([
///     ("fontSize", PropValue::from("12px")),
///     ("display", PropValue::Null),
///     ("marginTop", PropValue::from(0)),
/// ]);
/// assert_eq!(
///     style_value(style).unwrap(),
///     PropValue::from("font-size: 12px; margin-top: 0")
/// );
/// ```
pub fn style_value(value: PropValue) -> Result<PropValue, HtmlError> {
    match value {
        PropValue::Null | PropValue::Str(_) | PropValue::Raw(_) => Ok(value),
        PropValue::Map(entries) => {
            let mut declarations = Vec::with_capacity(entries.len());
            for (key, value) in entries {
                let text = match &value {
                    PropValue::Null => continue,
                    PropValue::Bool(b) => b.to_string(),
                    PropValue::List(_) | PropValue::Map(_) => {
                        return Err(HtmlError::InvalidStyle(format!(
                            "{} value for key '{}'",
                            value.kind(),
                            key
                        )));
                    }
                    other => scalar_text(other).unwrap_or_default(),
                };
                declarations.push(format!("{}: {}", html_name(&key), text));
            }
            Ok(PropValue::Str(declarations.join("; ")))
        }
        other => Err(HtmlError::InvalidStyle(other.kind().to_string())),
    }
}

/// Resolves a property bag into candidate attributes keyed by HTML name.
///
/// Shorthands are expanded in place, so `data-*` entries and `style` keep the
/// position of the property that produced them. Null properties are skipped.
/// When two properties resolve to the same name (`class` and `class_`), the
/// later one wins while the first position is kept.
pub fn resolve(props: Props) -> Result<IndexMap<String, PropValue>, HtmlError> {
    let mut candidates: IndexMap<String, PropValue> = IndexMap::with_capacity(props.len());
    for (key, value) in props {
        match key.as_str() {
            "dataset" => {
                for (name, value) in expand_dataset(value)? {
                    candidates.insert(name, value);
                }
                continue;
            }
            "class" | "class_" => {
                let value = class_value(value)?;
                if !value.is_null() {
                    candidates.insert("class".to_string(), value);
                }
                continue;
            }
            "style" => {
                let value = style_value(value)?;
                if !value.is_null() {
                    candidates.insert("style".to_string(), value);
                }
                continue;
            }
            _ => {}
        }
        if value.is_null() {
            continue;
        }
        candidates.insert(html_name(&key), value);
    }
    Ok(candidates)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::raw;
    use chrono::{FixedOffset, NaiveDate, NaiveTime, TimeZone};

    #[test]
    fn names_follow_kebab_rules() {
        let cases = [
            ("fontSize", "font-size"),
            ("ariaLabel", "aria-label"),
            ("http_equiv", "http-equiv"),
            ("grid__templateColumns", "grid:template-columns"),
            ("XMLHttp", "xml-http"),
            ("dataName", "data-name"),
            ("h1Title", "h1-title"),
            ("class_", "class"),
            ("as_", "as"),
            ("async_", "async"),
        ];
        for (input, expected) in cases {
            assert_eq!(html_name(input), expected, "input {input:?}");
        }
    }

    #[test]
    fn names_are_idempotent_on_kebab_case() {
        for name in ["font-size", "aria-label", "data-foo-bar", "grid:template-columns", "for"] {
            assert_eq!(html_name(name), name);
            assert_eq!(html_name(&html_name(name)), html_name(name));
        }
    }

    #[test]
    fn lone_double_underscore_is_not_a_namespace() {
        assert_eq!(html_name("__"), "--");
        assert_eq!(html_name("xlink__href"), "xlink:href");
    }

    #[test]
    fn dates_and_times_keep_seconds() {
        let dt = NaiveDate::from_ymd_opt(2024, 1, 2)
            .unwrap()
            .and_hms_micro_opt(3, 4, 5, 123_456)
            .unwrap();
        assert_eq!(scalar_text(&dt.into()).unwrap(), "2024-01-02T03:04:05");

        let time = NaiveTime::from_hms_opt(12, 30, 45).unwrap();
        assert_eq!(scalar_text(&time.into()).unwrap(), "12:30:45");

        let date = NaiveDate::from_ymd_opt(2024, 12, 31).unwrap();
        assert_eq!(scalar_text(&date.into()).unwrap(), "2024-12-31");

        let tz = FixedOffset::east_opt(9 * 3600).unwrap();
        let aware = tz.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap();
        assert_eq!(
            scalar_text(&aware.into()).unwrap(),
            "2024-01-02T03:04:05+09:00"
        );
    }

    #[test]
    fn attr_values_drop_false_and_null() {
        assert_eq!(attr_value("hidden", PropValue::Bool(false)).unwrap(), None);
        assert_eq!(attr_value("title", PropValue::Null).unwrap(), None);
        assert_eq!(
            attr_value("hidden", PropValue::Bool(true)).unwrap(),
            Some(AttrValue::Flag)
        );
        assert_eq!(
            attr_value("size", PropValue::Int(8)).unwrap(),
            Some(AttrValue::Text("8".into()))
        );
        assert!(matches!(
            attr_value("title", PropValue::list(["a"])),
            Err(HtmlError::UnsupportedValue { .. })
        ));
    }

    #[test]
    fn class_rejects_non_string_entries() {
        let err = class_value(PropValue::List(vec!["foo".into(), PropValue::Int(1)])).unwrap_err();
        assert_eq!(err, HtmlError::InvalidClassEntry("int".into()));
        assert_eq!(
            class_value(PropValue::Int(1)).unwrap_err(),
            HtmlError::InvalidClass("int".into())
        );
    }

    #[test]
    fn dataset_stringifies_booleans() {
        let expanded = expand_dataset(PropValue::map([
            ("flag", PropValue::Bool(true)),
            ("count", PropValue::Int(1)),
            ("fooBar", PropValue::from("baz")),
            ("skip", PropValue::Null),
        ]))
        .unwrap();
        assert_eq!(
            expanded,
            vec![
                ("data-flag".to_string(), PropValue::from("true")),
                ("data-count".to_string(), PropValue::from("1")),
                ("data-foo-bar".to_string(), PropValue::from("baz")),
            ]
        );
    }

    #[test]
    fn dataset_must_be_a_mapping() {
        assert_eq!(
            expand_dataset(PropValue::list(["not", "dict"])).unwrap_err(),
            HtmlError::InvalidDataset("list".into())
        );
    }

    #[test]
    fn style_string_passes_through_and_other_types_fail() {
        assert_eq!(
            style_value(PropValue::from("color: red")).unwrap(),
            PropValue::from("color: red")
        );
        assert_eq!(
            style_value(raw("a: b").into()).unwrap(),
            PropValue::Raw(raw("a: b"))
        );
        assert_eq!(
            style_value(PropValue::Int(123)).unwrap_err(),
            HtmlError::InvalidStyle("int".into())
        );
    }

    #[test]
    fn resolve_expands_in_place() {
        let props = Props::new()
            .with("id", "root")
            .with("dataset", PropValue::map([("a", "1"), ("b", "2")]))
            .with("style", PropValue::map([("fontSize", "12px")]))
            .with("title", PropValue::Null)
            .with("ariaLabel", "x");
        let resolved = resolve(props).unwrap();
        let names: Vec<_> = resolved.keys().map(String::as_str).collect();
        assert_eq!(names, ["id", "data-a", "data-b", "style", "aria-label"]);
    }

    #[test]
    fn later_class_spelling_wins() {
        let props = Props::new()
            .with("class", "first")
            .with("id", "x")
            .with("class_", PropValue::list(["second", "third"]));
        let resolved = resolve(props).unwrap();
        let entries: Vec<_> = resolved.iter().collect();
        assert_eq!(entries[0].0, "class");
        assert_eq!(entries[0].1, &PropValue::from("second third"));
        assert_eq!(entries.len(), 2);
    }
}
