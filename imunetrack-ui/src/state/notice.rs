//! Toast notices
//!
//! What the toast shows and for how long, derived from outcomes and
//! [`AppError`]s.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use imunetrack::AppError;

static NEXT_ID: AtomicU64 = AtomicU64::new(1);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    /// The action worked but something after it did not
    Warning,
    Error,
    /// Form input was rejected; one line per problem
    Validation,
    /// The stored login is gone and the user is being sent to log in
    SessionExpired,
}

impl NoticeKind {
    pub fn title(&self) -> Option<&'static str> {
        match self {
            NoticeKind::Validation => Some("Please check the form"),
            NoticeKind::SessionExpired => Some("Your session has ended"),
            _ => None,
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            NoticeKind::Success => "✓",
            NoticeKind::Warning => "!",
            NoticeKind::Error => "✕",
            NoticeKind::Validation => "✎",
            NoticeKind::SessionExpired => "⏏",
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            NoticeKind::Success => "bg-green-600",
            NoticeKind::Warning => "bg-amber-500",
            NoticeKind::Error => "bg-red-600",
            NoticeKind::Validation => "bg-orange-600",
            NoticeKind::SessionExpired => "bg-gray-800",
        }
    }

    /// How long the toast stays up
    pub fn lifetime(&self) -> Duration {
        match self {
            NoticeKind::Success => Duration::from_secs(3),
            NoticeKind::SessionExpired => Duration::from_secs(4),
            _ => Duration::from_secs(5),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    /// Distinguishes notices with the same text, so a timer only clears
    /// the toast it was started for
    pub id: u64,
    pub kind: NoticeKind,
    pub lines: Vec<String>,
}

impl Notice {
    pub fn new(kind: NoticeKind, lines: Vec<String>) -> Self {
        Self {
            id: NEXT_ID.fetch_add(1, Ordering::Relaxed),
            kind,
            lines,
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(NoticeKind::Success, vec![message.into()])
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(NoticeKind::Warning, vec![message.into()])
    }

    pub fn from_error(err: &AppError) -> Self {
        let kind = if err.requires_login() {
            NoticeKind::SessionExpired
        } else if matches!(err, AppError::Validation(_)) {
            NoticeKind::Validation
        } else {
            NoticeKind::Error
        };
        Self::new(kind, err.messages())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use imunetrack::validation::ValidationErrors;
    use imunetrack::ApiError;

    #[test]
    fn test_notice_kind_from_error() {
        let expired = Notice::from_error(&AppError::from(ApiError::SessionExpired));
        assert_eq!(expired.kind, NoticeKind::SessionExpired);
        assert_eq!(Notice::from_error(&AppError::NotAuthenticated).kind, NoticeKind::SessionExpired);

        let invalid = Notice::from_error(&AppError::from(ValidationErrors(vec![
            "Name is required".to_string(),
            "Invalid email".to_string(),
        ])));
        assert_eq!(invalid.kind, NoticeKind::Validation);
        assert_eq!(invalid.lines.len(), 2);

        let forbidden = Notice::from_error(&AppError::Forbidden);
        assert_eq!(forbidden.kind, NoticeKind::Error);
        assert_eq!(forbidden.lines, vec!["Administrator access required"]);
    }

    #[test]
    fn test_notices_get_distinct_ids() {
        let first = Notice::success("Profile saved");
        let second = Notice::success("Profile saved");
        assert_ne!(first.id, second.id);
        assert_eq!(first.lines, second.lines);
    }

    #[test]
    fn test_success_clears_sooner_than_errors() {
        assert!(NoticeKind::Success.lifetime() < NoticeKind::Error.lifetime());
        assert_eq!(NoticeKind::Validation.title(), Some("Please check the form"));
        assert_eq!(NoticeKind::Success.title(), None);
    }
}
