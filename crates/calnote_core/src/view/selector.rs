//! Picker models shown above each view.

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectorOption {
    pub value: i32,
    pub label: String,
    pub active: bool,
}

/// Ordered picker options with at most one active entry.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Selector {
    pub options: Vec<SelectorOption>,
}

impl Selector {
    /// Builds one option per value, marking `active`.
    pub fn from_values(
        values: impl IntoIterator<Item = i32>,
        active: i32,
        mut label: impl FnMut(i32) -> String,
    ) -> Self {
        let options = values
            .into_iter()
            .map(|value| SelectorOption {
                value,
                label: label(value),
                active: value == active,
            })
            .collect();
        Self { options }
    }

    /// Zero-padded two-digit labels, as used by day and week pickers.
    pub fn padded(values: impl IntoIterator<Item = i32>, active: i32) -> Self {
        Self::from_values(values, active, |value| format!("{value:02}"))
    }

    pub fn active(&self) -> Option<&SelectorOption> {
        self.options.iter().find(|option| option.active)
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }
}
