//! `${{TOKEN}}` path/title templates.
//!
//! # Responsibility
//! - Hold immutable template strings loaded from settings.
//! - Substitute placeholders through a `TokenSource`.
//!
//! # Invariants
//! - Resolution is pure: the same template and token source always yield
//!   the same text.
//! - Resolution never fails; unresolved placeholders stay verbatim and are
//!   reported in `Resolution::unresolved`.
//! - Substituted text is never scanned again for placeholders.

mod resolver;
mod tokens;

use crate::format::DateFormatter;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

pub use resolver::{resolve, Resolution, Unresolved, UnresolvedReason};
pub use tokens::{
    DateTokens, NavigatedTokens, TokenSource, NAVIGATED_DAY_TOKEN, NAVIGATED_MONTH_TOKEN,
};

/// Immutable template string with zero or more `${{TOKEN}}` placeholders.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Template(String);

impl Template {
    pub fn new(source: impl Into<String>) -> Self {
        Self(source.into())
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Resolves all placeholders against `source`.
    pub fn resolve(&self, source: &impl TokenSource) -> Resolution {
        resolve(self, source)
    }

    /// Renders the template for `today`, as shown next to a settings field.
    pub fn preview(&self, formatter: &dyn DateFormatter, today: NaiveDate) -> Resolution {
        resolve(self, &DateTokens::new(formatter, today))
    }
}

impl Display for Template {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Template {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for Template {
    fn from(value: String) -> Self {
        Self(value)
    }
}
