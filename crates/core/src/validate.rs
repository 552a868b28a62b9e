//! Schema validation of candidate attributes.
//!
//! The validator walks the resolved attribute map of one element against its
//! [`TagRule`]. In strict mode the first violation is returned as an error;
//! in lenient mode repairable violations are logged, recorded in a
//! [`ValidationReport`] and the offending input is dropped.

use crate::config::{LOG_TARGET, Options};
use crate::error::{HtmlError, ValidationReport, Violation};
use crate::schema::{TagRule, TagSchema, is_void};
use crate::value::PropValue;
use html_escape::decode_html_entities;
use indexmap::IndexMap;
use std::borrow::Cow;
use std::collections::BTreeSet;

/// Result of validating one element.
#[derive(Debug, Clone, PartialEq)]
pub struct Validated {
    /// Attributes that survived validation, in first-seen order
    pub attributes: IndexMap<String, PropValue>,
    /// What lenient mode repaired
    pub report: ValidationReport,
}

/// Checks candidate attributes against a tag schema.
#[derive(Debug, Clone, Copy)]
pub struct Validator<'a> {
    schema: &'a TagSchema,
    options: Options,
}

impl<'a> Validator<'a> {
    /// Create a validator over `schema` using `options`.
    pub fn new(schema: &'a TagSchema, options: Options) -> Self {
        Self { schema, options }
    }

    /// Validates `candidates` for `tag`.
    ///
    /// Candidates are keyed by final HTML name. Missing required attributes
    /// are an error in every mode; a required attribute that was supplied but
    /// dropped for a bad value counts as provided.
    pub fn validate(
        &self,
        tag: &str,
        candidates: IndexMap<String, PropValue>,
        has_children: bool,
    ) -> Result<Validated, HtmlError> {
        let mut report = ValidationReport::new();

        if has_children && is_void(tag) {
            self.handle(
                Violation::VoidChildren {
                    tag: tag.to_string(),
                },
                &mut report,
            )?;
            report.discard_children = true;
        }

        let Some(rule) = self.schema.rule(tag) else {
            log::debug!(target: LOG_TARGET, "no schema rule for <{tag}>, attributes unchecked");
            return Ok(Validated {
                attributes: candidates,
                report,
            });
        };

        let mut provided = BTreeSet::new();
        let mut attributes = IndexMap::with_capacity(candidates.len());
        for (name, value) in candidates {
            if value.is_null() {
                continue;
            }
            provided.insert(name.clone());
            match check_attribute(tag, rule, &name, &value) {
                None => {
                    attributes.insert(name, value);
                }
                Some(violation) => self.handle(violation, &mut report)?,
            }
        }

        let missing: Vec<String> = rule
            .required
            .iter()
            .filter(|name| !provided.contains(*name))
            .cloned()
            .collect();
        if !missing.is_empty() {
            return Err(Violation::MissingRequired {
                tag: tag.to_string(),
                missing,
            }
            .into());
        }

        Ok(Validated { attributes, report })
    }

    /// Strict: return the violation. Lenient: log and record it.
    fn handle(&self, violation: Violation, report: &mut ValidationReport) -> Result<(), HtmlError> {
        if self.options.is_strict() {
            return Err(violation.into());
        }
        log::warn!(target: LOG_TARGET, "{violation}");
        report.add(violation);
        Ok(())
    }
}

/// First violation a single attribute commits, if any.
fn check_attribute(tag: &str, rule: &TagRule, name: &str, value: &PropValue) -> Option<Violation> {
    if let Some(allowed) = rule.choices_for(name) {
        let Some(text) = value.as_text() else {
            return Some(Violation::NotAString {
                tag: tag.to_string(),
                attr: name.to_string(),
            });
        };
        // Raw markup is compared by the text it renders as.
        let text = match value {
            PropValue::Raw(_) => decode_html_entities(text),
            _ => Cow::Borrowed(text),
        };
        if !allowed.iter().any(|choice| *choice == *text) {
            return Some(Violation::NotAChoice {
                tag: tag.to_string(),
                attr: name.to_string(),
                value: text.to_string(),
                allowed: allowed.to_vec(),
            });
        }
    }
    if rule.is_boolean(name) && !matches!(value, PropValue::Bool(_)) {
        return Some(Violation::NotABool {
            tag: tag.to_string(),
            attr: name.to_string(),
        });
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::raw;

    fn candidates(entries: &[(&str, PropValue)]) -> IndexMap<String, PropValue> {
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }

    #[test]
    fn strict_rejects_unknown_choice() {
        let validator = Validator::new(TagSchema::standard(), Options::strict());
        let err = validator
            .validate("button", candidates(&[("type", "invalid".into())]), false)
            .unwrap_err();
        assert!(matches!(
            err.violation(),
            Some(Violation::NotAChoice { attr, .. }) if attr == "type"
        ));
    }

    #[test]
    fn lenient_drops_and_keeps_the_rest() {
        let validator = Validator::new(TagSchema::standard(), Options::lenient());
        let validated = validator
            .validate(
                "input",
                candidates(&[
                    ("type", "invalid".into()),
                    ("checked", "yes".into()),
                    ("id", "field".into()),
                ]),
                false,
            )
            .unwrap();
        let names: Vec<_> = validated.attributes.keys().map(String::as_str).collect();
        assert_eq!(names, ["id"]);
        assert_eq!(validated.report.count(), 2);
        assert!(!validated.report.discard_children);
    }

    #[test]
    fn choices_need_strings() {
        let validator = Validator::new(TagSchema::standard(), Options::strict());
        let err = validator
            .validate("a", candidates(&[("target", PropValue::Int(1))]), false)
            .unwrap_err();
        assert_eq!(
            err,
            HtmlError::Violation(Violation::NotAString {
                tag: "a".into(),
                attr: "target".into()
            })
        );
    }

    #[test]
    fn required_is_an_error_even_when_lenient() {
        let validator = Validator::new(TagSchema::standard(), Options::lenient());
        let err = validator
            .validate("img", candidates(&[("alt", "x".into())]), false)
            .unwrap_err();
        assert_eq!(err.to_string(), "<img> missing required attributes: src");
    }

    #[test]
    fn dropped_required_attribute_still_counts_as_provided() {
        let validator = Validator::new(TagSchema::standard(), Options::lenient());
        let validated = validator
            .validate(
                "track",
                candidates(&[("kind", "bogus".into()), ("src", "/a.vtt".into())]),
                false,
            )
            .unwrap();
        let names: Vec<_> = validated.attributes.keys().map(String::as_str).collect();
        assert_eq!(names, ["src"]);
        assert_eq!(validated.report.count(), 1);

        let schema = TagSchema::from_json(
            r#"{"x-toggle": {"props": [{"flag": {"kind": "bool", "required": true}}]}}"#,
        )
        .unwrap();
        let validated = Validator::new(&schema, Options::lenient())
            .validate("x-toggle", candidates(&[("flag", "yes".into())]), false)
            .unwrap();
        assert!(validated.attributes.is_empty());
        assert_eq!(validated.report.count(), 1);
    }

    #[test]
    fn raw_choices_compare_decoded_text() {
        let schema = TagSchema::from_json(
            r#"{"x-tab": {"props": [{"mode": {"kind": "choices", "values": ["a&b", "c"]}}]}}"#,
        )
        .unwrap();
        let validator = Validator::new(&schema, Options::strict());
        let accepted = validator
            .validate("x-tab", candidates(&[("mode", raw("a&amp;b").into())]), false)
            .unwrap();
        assert_eq!(accepted.attributes.len(), 1);
        assert!(validator
            .validate("x-tab", candidates(&[("mode", "a&amp;b".into())]), false)
            .is_err());
    }

    #[test]
    fn void_children_are_discarded_when_lenient() {
        let validator = Validator::new(TagSchema::standard(), Options::lenient());
        let validated = validator.validate("br", IndexMap::new(), true).unwrap();
        assert!(validated.report.discard_children);

        let strict = Validator::new(TagSchema::standard(), Options::strict());
        assert_eq!(
            strict.validate("br", IndexMap::new(), true).unwrap_err(),
            HtmlError::Violation(Violation::VoidChildren { tag: "br".into() })
        );
    }

    #[test]
    fn unknown_tags_pass_through() {
        let validator = Validator::new(TagSchema::standard(), Options::strict());
        let validated = validator
            .validate("my-widget", candidates(&[("type", "anything".into())]), true)
            .unwrap();
        assert_eq!(validated.attributes.len(), 1);
        assert!(!validated.report.has_violations());
    }
}
