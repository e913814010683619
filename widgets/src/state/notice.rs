//! Floating notices shown after a status change.

#[cfg(test)]
#[path = "notice_test.rs"]
mod notice_test;

/// Bootstrap contextual color of a notice.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Danger,
}

impl NoticeKind {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Danger => "danger",
        }
    }
}

/// A dismissible alert pinned to the top of the viewport.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    #[must_use]
    pub fn success(message: impl Into<String>) -> Self {
        Self { kind: NoticeKind::Success, message: message.into() }
    }

    #[must_use]
    pub fn danger(message: impl Into<String>) -> Self {
        Self { kind: NoticeKind::Danger, message: message.into() }
    }

    /// `class` attribute of the alert element.
    #[must_use]
    pub fn class(&self) -> String {
        format!(
            "alert alert-{} alert-dismissible fade show position-fixed top-0 start-50 translate-middle-x mt-3",
            self.kind.as_str()
        )
    }
}
