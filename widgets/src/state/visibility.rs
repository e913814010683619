//! Show/hide rule for a field that only applies to some roles.
//!
//! DESIGN
//! ======
//! The general user form and the admin change form differ only in how the
//! field's layout group is found. [`ConditionalField`] captures the field ids,
//! an ordered list of [`GroupLocator`]s (first match wins), and the
//! [`VisibilityRule`], so a single implementation serves both pages.

#[cfg(test)]
#[path = "visibility_test.rs"]
mod visibility_test;

/// Marker substrings that make the dependent group visible.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VisibilityRule {
    /// Case-sensitive; any one match is enough.
    pub markers: &'static [&'static str],
}

/// Outcome of evaluating a [`VisibilityRule`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Visibility {
    Shown,
    /// Hidden groups also have their field value cleared.
    Hidden,
}

impl Visibility {
    /// Inline `display` value for the group.
    #[must_use]
    pub fn display(self) -> &'static str {
        match self {
            Self::Shown => "",
            Self::Hidden => "none",
        }
    }

    #[must_use]
    pub fn clears_field(self) -> bool {
        matches!(self, Self::Hidden)
    }
}

impl VisibilityRule {
    /// Decide visibility from the selected option's display text.
    ///
    /// No selection behaves like an option with empty text.
    #[must_use]
    pub fn evaluate(&self, selected_text: Option<&str>) -> Visibility {
        let text = selected_text.unwrap_or_default();
        if self.markers.iter().any(|m| text.contains(m)) {
            Visibility::Shown
        } else {
            Visibility::Hidden
        }
    }
}

/// How to find the element that wraps the dependent field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GroupLocator {
    /// Closest ancestor of the field matching `selector`.
    FieldAncestor { selector: &'static str },
    /// First element matching `row`, then its closest ancestor-or-self matching `closest`.
    Row { row: &'static str, closest: &'static str },
}

/// A dependent field driven by a controlling `<select>`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ConditionalField {
    pub controller_id: &'static str,
    pub field_id: &'static str,
    pub locators: &'static [GroupLocator],
    pub rule: VisibilityRule,
}

/// Flip an inline `display` value between hidden and `block`.
#[must_use]
pub fn toggled_display(current: &str) -> &'static str {
    if current == "none" { "block" } else { "none" }
}
