// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Human-readable error messages for first-time filers.
//
// Most customers on the platform have never dealt with a compliance portal
// before. Every technical error is mapped to plain English with a clear
// suggestion, and a severity level drives the UI presentation.

use crate::error::ShineError;

/// Severity of an error from the user's perspective.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Network blip or server hiccup; we can retry automatically.
    Transient,
    /// User must do something (sign in, fix a field, pick another file).
    ActionRequired,
    /// Cannot be fixed by retrying or user action.
    Permanent,
}

/// A human-readable error with plain English message and actionable suggestion.
#[derive(Debug, Clone)]
pub struct HumanError {
    /// Plain English summary (shown as a heading).
    pub message: String,
    /// What the user should try (shown as body text).
    pub suggestion: String,
    /// Whether the system should auto-retry.
    pub retriable: bool,
    /// Severity level (drives icon/colour in UI).
    pub severity: Severity,
}

/// Convert a `ShineError` into a `HumanError` suitable for end users.
pub fn humanize_error(err: &ShineError) -> HumanError {
    match err {
        // -- Backend API --
        ShineError::Api { status, message } => humanize_api_status(*status, message),

        ShineError::Network(_) => HumanError {
            message: "We can't reach ShineFiling right now.".into(),
            suggestion: "Check your internet connection, then try again.".into(),
            retriable: true,
            severity: Severity::Transient,
        },

        ShineError::InvalidResponse(_) => HumanError {
            message: "The server sent something we didn't understand.".into(),
            suggestion: "Try again in a moment. If this keeps happening, please report it.".into(),
            retriable: true,
            severity: Severity::Transient,
        },

        // -- Account --
        ShineError::AuthRejected(_) => HumanError {
            message: "We couldn't sign you in.".into(),
            suggestion: "Check your email address and password, then try again.".into(),
            retriable: false,
            severity: Severity::ActionRequired,
        },

        ShineError::OtpRejected(_) => HumanError {
            message: "That verification code didn't match.".into(),
            suggestion: "Check the 6-digit code we emailed you and enter it again. Codes expire after a few minutes.".into(),
            retriable: false,
            severity: Severity::ActionRequired,
        },

        ShineError::NotSignedIn => HumanError {
            message: "You're not signed in.".into(),
            suggestion: "Sign in to see your filings, documents, and payments.".into(),
            retriable: false,
            severity: Severity::ActionRequired,
        },

        // -- Storage --
        ShineError::Database(_) => HumanError {
            message: "The app's data storage had a problem.".into(),
            suggestion: "Try closing and reopening the app. Your account data lives on the server and is safe.".into(),
            retriable: true,
            severity: Severity::Transient,
        },

        ShineError::Io(io_err) => {
            if io_err.kind() == std::io::ErrorKind::NotFound {
                HumanError {
                    message: "The file couldn't be found.".into(),
                    suggestion: "It may have been moved or deleted. Try choosing the file again.".into(),
                    retriable: false,
                    severity: Severity::ActionRequired,
                }
            } else if io_err.kind() == std::io::ErrorKind::PermissionDenied {
                HumanError {
                    message: "The app doesn't have permission to read that file.".into(),
                    suggestion: "Check the file permissions, or try copying the file to a different location first.".into(),
                    retriable: false,
                    severity: Severity::ActionRequired,
                }
            } else {
                HumanError {
                    message: "There was a problem reading or writing a file.".into(),
                    suggestion: "Try again. If this keeps happening, your device's storage may be full.".into(),
                    retriable: true,
                    severity: Severity::Transient,
                }
            }
        }

        ShineError::Serialization(_) => HumanError {
            message: "The app had an internal data problem.".into(),
            suggestion: "Try again. If this keeps happening, please report it.".into(),
            retriable: true,
            severity: Severity::Transient,
        },

        // -- Input --
        ShineError::InvalidInput(detail) => HumanError {
            message: "Please check what you entered.".into(),
            suggestion: detail.clone(),
            retriable: false,
            severity: Severity::ActionRequired,
        },
    }
}

/// Map an HTTP status from the backend into a human-readable message.
fn humanize_api_status(status: u16, message: &str) -> HumanError {
    match status {
        401 | 403 => HumanError {
            message: "Your session has expired.".into(),
            suggestion: "Please sign in again to continue.".into(),
            retriable: false,
            severity: Severity::ActionRequired,
        },
        404 => HumanError {
            message: "That item isn't on the server any more.".into(),
            suggestion: "It may have been removed. Go back and refresh the list.".into(),
            retriable: false,
            severity: Severity::Permanent,
        },
        409 => HumanError {
            message: "Someone else changed this at the same time.".into(),
            suggestion: "Refresh the page and apply your change again.".into(),
            retriable: false,
            severity: Severity::ActionRequired,
        },
        408 | 429 => HumanError {
            message: "The server is busy right now.".into(),
            suggestion: "Wait a few seconds and try again.".into(),
            retriable: true,
            severity: Severity::Transient,
        },
        422 => HumanError {
            message: "The server couldn't accept what you entered.".into(),
            suggestion: format!("Check the form and try again. ({message})"),
            retriable: false,
            severity: Severity::ActionRequired,
        },
        500..=599 => HumanError {
            message: "ShineFiling had a problem on our side.".into(),
            suggestion: "This isn't your fault. Wait a moment and try again.".into(),
            retriable: true,
            severity: Severity::Transient,
        },
        _ => HumanError {
            message: "The request didn't go through.".into(),
            suggestion: format!("Try again. (Detail: {message})"),
            retriable: true,
            severity: Severity::Transient,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn network_error_is_transient() {
        let err = ShineError::Network("connection timed out".into());
        let human = humanize_error(&err);
        assert_eq!(human.severity, Severity::Transient);
        assert!(human.retriable);
    }

    #[test]
    fn not_signed_in_is_action_required() {
        let human = humanize_error(&ShineError::NotSignedIn);
        assert_eq!(human.severity, Severity::ActionRequired);
        assert!(!human.retriable);
    }

    #[test]
    fn expired_session_is_action_required() {
        let err = ShineError::Api {
            status: 401,
            message: "token expired".into(),
        };
        let human = humanize_error(&err);
        assert_eq!(human.severity, Severity::ActionRequired);
        assert!(!human.retriable);
    }

    #[test]
    fn server_errors_are_retriable() {
        let err = ShineError::Api {
            status: 503,
            message: "upstream unavailable".into(),
        };
        let human = humanize_error(&err);
        assert_eq!(human.severity, Severity::Transient);
        assert!(human.retriable);
    }

    #[test]
    fn missing_resource_is_permanent() {
        let err = ShineError::Api {
            status: 404,
            message: "no such service".into(),
        };
        let human = humanize_error(&err);
        assert_eq!(human.severity, Severity::Permanent);
    }

    #[test]
    fn rejected_otp_is_action_required() {
        let err = ShineError::OtpRejected("code mismatch".into());
        let human = humanize_error(&err);
        assert_eq!(human.severity, Severity::ActionRequired);
        assert!(!human.retriable);
    }
}
