// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// State machine behind the sign-in / sign-up modal.
//
// The modal itself only renders fields and calls the backend; every legal
// transition lives here so the flow can be tested without a UI.

/// Which credential flow the modal is running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthMode {
    Login,
    Signup,
}

/// Step within the current flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthStep {
    /// Collecting email/password (and name/phone for sign-up).
    Details,
    /// Collecting the emailed verification code (sign-up only).
    Otp,
}

/// What the modal should do after a successful transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthAdvance {
    /// Keep the modal open on the new step.
    Stay,
    /// Dismiss the modal; the flow is finished.
    Close,
}

/// Current state of the auth modal.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthFlow {
    pub mode: AuthMode,
    pub step: AuthStep,
    /// Failure message from the last submit, cleared on success or mode switch.
    pub error: Option<String>,
    /// Informational banner, e.g. after OTP verification.
    pub banner: Option<String>,
}

impl AuthFlow {
    pub fn new(mode: AuthMode) -> Self {
        Self {
            mode,
            step: AuthStep::Details,
            error: None,
            banner: None,
        }
    }

    /// Switch between sign-in and sign-up. Always returns to the details
    /// step and drops any stale messages.
    pub fn switch_mode(&mut self, mode: AuthMode) {
        self.mode = mode;
        self.step = AuthStep::Details;
        self.error = None;
        self.banner = None;
    }

    /// The details submit succeeded on the backend.
    ///
    /// Sign-in is complete at this point; sign-up advances to OTP entry.
    pub fn details_accepted(&mut self) -> AuthAdvance {
        self.error = None;
        match self.mode {
            AuthMode::Login => AuthAdvance::Close,
            AuthMode::Signup => {
                self.step = AuthStep::Otp;
                AuthAdvance::Stay
            }
        }
    }

    /// The details submit was rejected. Stays on the same step.
    pub fn details_rejected(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
    }

    /// The OTP was verified. Returns the flow to sign-in so the user can
    /// enter their new credentials, with a confirmation banner.
    pub fn otp_verified(&mut self) -> AuthAdvance {
        self.mode = AuthMode::Login;
        self.step = AuthStep::Details;
        self.error = None;
        self.banner = Some("Account verified. Please sign in.".into());
        AuthAdvance::Stay
    }

    /// The OTP was rejected. Stays on the OTP step for another attempt.
    pub fn otp_rejected(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_success_closes_the_modal() {
        let mut flow = AuthFlow::new(AuthMode::Login);
        assert_eq!(flow.details_accepted(), AuthAdvance::Close);
        assert!(flow.error.is_none());
    }

    #[test]
    fn login_failure_stays_with_error() {
        let mut flow = AuthFlow::new(AuthMode::Login);
        flow.details_rejected("wrong password");
        assert_eq!(flow.mode, AuthMode::Login);
        assert_eq!(flow.step, AuthStep::Details);
        assert_eq!(flow.error.as_deref(), Some("wrong password"));
    }

    #[test]
    fn signup_success_advances_to_otp() {
        let mut flow = AuthFlow::new(AuthMode::Signup);
        assert_eq!(flow.details_accepted(), AuthAdvance::Stay);
        assert_eq!(flow.step, AuthStep::Otp);
    }

    #[test]
    fn otp_success_returns_to_login_with_banner() {
        let mut flow = AuthFlow::new(AuthMode::Signup);
        flow.details_accepted();
        assert_eq!(flow.otp_verified(), AuthAdvance::Stay);
        assert_eq!(flow.mode, AuthMode::Login);
        assert_eq!(flow.step, AuthStep::Details);
        assert!(flow.banner.is_some());
        assert!(flow.error.is_none());
    }

    #[test]
    fn otp_failure_stays_on_otp_step() {
        let mut flow = AuthFlow::new(AuthMode::Signup);
        flow.details_accepted();
        flow.otp_rejected("code expired");
        assert_eq!(flow.step, AuthStep::Otp);
        assert_eq!(flow.error.as_deref(), Some("code expired"));
    }

    #[test]
    fn switching_mode_resets_step_and_messages() {
        let mut flow = AuthFlow::new(AuthMode::Signup);
        flow.details_accepted();
        flow.otp_rejected("code expired");
        flow.switch_mode(AuthMode::Login);
        assert_eq!(flow.step, AuthStep::Details);
        assert!(flow.error.is_none());
        assert!(flow.banner.is_none());
    }

    #[test]
    fn error_clears_on_successful_retry() {
        let mut flow = AuthFlow::new(AuthMode::Login);
        flow.details_rejected("wrong password");
        assert_eq!(flow.details_accepted(), AuthAdvance::Close);
        assert!(flow.error.is_none());
    }
}
