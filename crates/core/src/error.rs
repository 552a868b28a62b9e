use thiserror::Error;

/// A single schema violation found while validating an element.
///
/// Violations are the data-driven failures: in strict mode they are returned
/// as errors, in lenient mode the repairable ones are logged and the offending
/// attribute or children are dropped.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Violation {
    /// A void element was given children.
    #[error("Void element <{tag}> cannot have children")]
    VoidChildren {
        /// Tag name
        tag: String,
    },
    /// An enumerated attribute received a non-string value.
    #[error("Attribute '{attr}' on <{tag}> must be str")]
    NotAString {
        /// Tag name
        tag: String,
        /// Final HTML attribute name
        attr: String,
    },
    /// An enumerated attribute received a value outside its permitted set.
    #[error("Attribute '{attr}' on <{tag}> must be one of {allowed:?}: {value:?}")]
    NotAChoice {
        /// Tag name
        tag: String,
        /// Final HTML attribute name
        attr: String,
        /// Rejected value
        value: String,
        /// Permitted values in declaration order
        allowed: Vec<String>,
    },
    /// A boolean attribute received a non-boolean value.
    #[error("Attribute '{attr}' on <{tag}> must be bool")]
    NotABool {
        /// Tag name
        tag: String,
        /// Final HTML attribute name
        attr: String,
    },
    /// One or more required attributes were not supplied.
    #[error("<{tag}> missing required attributes: {}", .missing.join(", "))]
    MissingRequired {
        /// Tag name
        tag: String,
        /// Missing attribute names, sorted
        missing: Vec<String>,
    },
}

impl Violation {
    /// Tag of the element the violation was found on.
    pub fn tag(&self) -> &str {
        match self {
            Violation::VoidChildren { tag }
            | Violation::NotAString { tag, .. }
            | Violation::NotAChoice { tag, .. }
            | Violation::NotABool { tag, .. }
            | Violation::MissingRequired { tag, .. } => tag,
        }
    }

    /// Attribute the violation concerns, if any.
    pub fn attribute(&self) -> Option<&str> {
        match self {
            Violation::NotAString { attr, .. }
            | Violation::NotAChoice { attr, .. }
            | Violation::NotABool { attr, .. } => Some(attr),
            Violation::VoidChildren { .. } | Violation::MissingRequired { .. } => None,
        }
    }

    /// Whether lenient mode can repair this violation by dropping input.
    ///
    /// Missing required attributes have no substitute value and are never
    /// repaired.
    pub fn is_repairable(&self) -> bool {
        !matches!(self, Violation::MissingRequired { .. })
    }
}

/// Errors returned while constructing an element.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HtmlError {
    /// Children were passed both positionally and through `children`.
    #[error("Provide children either positionally or via 'children' keyword, not both")]
    ChildrenConflict,
    /// A child value is not text, raw HTML, an element or a sequence of those.
    #[error("Invalid child type: {0}")]
    InvalidChild(String),
    /// `class` was neither a string nor a sequence.
    #[error("class must be str or iterable of str values, got {0}")]
    InvalidClass(String),
    /// A `class` sequence contained something other than a string or null.
    #[error("class iterable entries must be str, got {0}")]
    InvalidClassEntry(String),
    /// `dataset` was not a mapping, or held a composite value.
    #[error("dataset must be dict: {0}")]
    InvalidDataset(String),
    /// `style` was neither a mapping nor a string, or held a composite value.
    #[error("style must be dict or str: {0}")]
    InvalidStyle(String),
    /// A plain attribute received a list or mapping.
    #[error("Attribute '{attr}' cannot hold a {kind} value")]
    UnsupportedValue {
        /// Final HTML attribute name
        attr: String,
        /// Kind of the rejected value
        kind: &'static str,
    },
    /// `raw` was given something other than a string.
    #[error("RAW_STR value must be a string, got {0}")]
    RawNotString(String),
    /// Structured input could not be turned back into an element.
    #[error("Invalid structured node: {0}")]
    InvalidStructure(String),
    /// Schema configuration could not be parsed.
    #[error("Invalid tag schema: {0}")]
    InvalidSchema(String),
    /// A schema violation surfaced as an error.
    #[error(transparent)]
    Violation(#[from] Violation),
}

impl HtmlError {
    /// Returns the underlying violation for schema errors.
    pub fn violation(&self) -> Option<&Violation> {
        match self {
            HtmlError::Violation(v) => Some(v),
            _ => None,
        }
    }

    /// Structural errors indicate misuse and are never relaxed by lenient mode.
    pub fn is_structural(&self) -> bool {
        !matches!(self, HtmlError::Violation(_))
    }
}

/// Violations recorded (and repaired) while validating one element.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    /// Violations in the order they were found
    pub violations: Vec<Violation>,
    /// Whether the caller must discard the element's children
    pub discard_children: bool,
}

impl ValidationReport {
    /// Create an empty report
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a violation
    pub fn add(&mut self, violation: Violation) {
        self.violations.push(violation);
    }

    /// Check if anything was recorded
    pub fn has_violations(&self) -> bool {
        !self.violations.is_empty()
    }

    /// Number of recorded violations
    pub fn count(&self) -> usize {
        self.violations.len()
    }

    /// Iterate over the recorded violations
    pub fn iter(&self) -> impl Iterator<Item = &Violation> {
        self.violations.iter()
    }
}
