//! Validation mode and the process-wide default.

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicBool, Ordering};

/// Log target used for every record the library emits.
pub const LOG_TARGET: &str = "zenhtml";

static STRICT_VALIDATION: AtomicBool = AtomicBool::new(true);

/// Sets the process-wide validation mode used by [`Options::from_global`].
///
/// This is a configuration-time switch: flip it once at startup, not while
/// other threads are building elements.
pub fn set_strict_validation(strict: bool) {
    STRICT_VALIDATION.store(strict, Ordering::Relaxed);
}

/// Returns the process-wide validation mode (strict unless opted out).
pub fn strict_validation() -> bool {
    STRICT_VALIDATION.load(Ordering::Relaxed)
}

/// Options controlling how schema violations are handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Options {
    /// When true, schema violations are returned as errors.
    /// When false, they are logged and the offending input is dropped.
    #[serde(default = "default_strict_validation")]
    pub strict_validation: bool,
}

fn default_strict_validation() -> bool {
    true
}

impl Options {
    /// Violations are errors.
    pub const fn strict() -> Self {
        Self {
            strict_validation: true,
        }
    }

    /// Violations are logged and repaired where possible.
    pub const fn lenient() -> Self {
        Self {
            strict_validation: false,
        }
    }

    /// Snapshot of the process-wide mode.
    pub fn from_global() -> Self {
        Self {
            strict_validation: strict_validation(),
        }
    }

    /// Returns whether violations are errors.
    pub fn is_strict(&self) -> bool {
        self.strict_validation
    }
}

impl Default for Options {
    fn default() -> Self {
        Self {
            strict_validation: default_strict_validation(),
        }
    }
}
