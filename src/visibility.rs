//! Show/hide decisions, kept free of any DOM access.

use serde::{Deserialize, Serialize};

/// Status values that ask the operator for a location or reason.
pub const DEFAULT_TRIGGER_STATUSES: [&str; 3] = ["Missing", "Red Tag", "Not Returned"];

/// Inline display state of an accordion body.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DisplayState {
    Shown,
    Hidden,
}

impl DisplayState {
    /// Only an explicit `block` counts as shown; unset or anything else is hidden.
    pub fn from_inline(display: &str) -> Self {
        if display.trim() == "block" {
            DisplayState::Shown
        } else {
            DisplayState::Hidden
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            DisplayState::Shown => DisplayState::Hidden,
            DisplayState::Hidden => DisplayState::Shown,
        }
    }

    pub fn as_css(self) -> &'static str {
        match self {
            DisplayState::Shown => "block",
            DisplayState::Hidden => "none",
        }
    }
}

/// Next inline display value for a body after its header is clicked.
pub fn toggled_display(current: &str) -> &'static str {
    DisplayState::from_inline(current).toggled().as_css()
}

/// Visibility of an item block's conditional inputs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Visibility {
    Visible,
    Hidden,
}

/// Status values that reveal the conditional inputs. Exact, case-sensitive match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TriggerSet(Vec<String>);

impl TriggerSet {
    pub fn new<I, S>(statuses: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut values: Vec<String> = Vec::new();
        for status in statuses {
            let status = status.into();
            if !values.contains(&status) {
                values.push(status);
            }
        }
        TriggerSet(values)
    }

    pub fn contains(&self, value: &str) -> bool {
        self.0.iter().any(|status| status == value)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl Default for TriggerSet {
    fn default() -> Self {
        TriggerSet::new(DEFAULT_TRIGGER_STATUSES)
    }
}

/// Decide the conditional container's visibility from the selected status value.
pub fn conditional_visibility(value: &str, triggers: &TriggerSet) -> Visibility {
    if triggers.contains(value) {
        Visibility::Visible
    } else {
        Visibility::Hidden
    }
}
