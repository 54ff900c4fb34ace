//! Transient user-facing status messages.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Severity of a [`Notice`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoticeKind {
    Error,
    Info,
    Success,
    Warning,
}

impl fmt::Display for NoticeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Error => write!(f, "error"),
            Self::Info => write!(f, "info"),
            Self::Success => write!(f, "success"),
            Self::Warning => write!(f, "warning"),
        }
    }
}

/// A status message produced by a storefront transition.
///
/// Notices are the whole error-reporting surface of the storefront: no
/// transition fails, it sets a notice instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
}

impl Notice {
    /// Create a notice of the given kind.
    #[must_use]
    pub fn new(kind: NoticeKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }

    #[must_use]
    pub fn error(text: impl Into<String>) -> Self {
        Self::new(NoticeKind::Error, text)
    }

    #[must_use]
    pub fn info(text: impl Into<String>) -> Self {
        Self::new(NoticeKind::Info, text)
    }

    #[must_use]
    pub fn success(text: impl Into<String>) -> Self {
        Self::new(NoticeKind::Success, text)
    }

    #[must_use]
    pub fn warning(text: impl Into<String>) -> Self {
        Self::new(NoticeKind::Warning, text)
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.kind, self.text)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors_set_kind() {
        assert_eq!(Notice::error("x").kind, NoticeKind::Error);
        assert_eq!(Notice::info("x").kind, NoticeKind::Info);
        assert_eq!(Notice::success("x").kind, NoticeKind::Success);
        assert_eq!(Notice::warning("x").kind, NoticeKind::Warning);
    }

    #[test]
    fn test_display() {
        let notice = Notice::warning("Sign in first");
        assert_eq!(notice.to_string(), "[warning] Sign in first");
    }

    #[test]
    fn test_display_matches_serde_name() {
        for kind in [
            NoticeKind::Error,
            NoticeKind::Info,
            NoticeKind::Success,
            NoticeKind::Warning,
        ] {
            assert_eq!(serde_json::to_value(kind).unwrap(), kind.to_string());
        }
    }

    #[test]
    fn test_serde_kind_is_snake_case() {
        let json = serde_json::to_value(Notice::success("Signed in")).unwrap();
        assert_eq!(json["kind"], "success");
        assert_eq!(json["text"], "Signed in");
    }
}
