//! Form validation state.

/// Validity of a single named form field at check time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldValidity {
    /// Field name
    pub name: String,
    /// Whether the field currently passes its constraints
    pub valid: bool,
}

impl FieldValidity {
    /// Create a field validity record.
    pub fn new(name: impl Into<String>, valid: bool) -> Self {
        Self {
            name: name.into(),
            valid,
        }
    }
}

/// The first invalid field, in form order. This is the field a blocked
/// submit should focus and scroll to.
pub fn first_invalid(fields: &[FieldValidity]) -> Option<&FieldValidity> {
    fields.iter().find(|f| !f.valid)
}

/// Check whether submission may proceed.
pub fn form_is_valid(fields: &[FieldValidity]) -> bool {
    first_invalid(fields).is_none()
}

/// Visual validation state applied to a field after it loses focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationState {
    /// Field passes its constraints
    Valid,
    /// Field fails its constraints
    Invalid,
}

impl ValidationState {
    /// Classify from a validity check result.
    pub fn from_valid(valid: bool) -> Self {
        if valid {
            ValidationState::Valid
        } else {
            ValidationState::Invalid
        }
    }

    /// CSS class to apply for this state.
    pub fn css_class(self) -> &'static str {
        match self {
            ValidationState::Valid => "is-valid",
            ValidationState::Invalid => "is-invalid",
        }
    }

    /// CSS class of the opposite state, to be removed when this one is
    /// applied. The two classes never coexist on a field.
    pub fn removed_class(self) -> &'static str {
        match self {
            ValidationState::Valid => "is-invalid",
            ValidationState::Invalid => "is-valid",
        }
    }
}
