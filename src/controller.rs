// src/controller.rs
use crate::models::{RequestState, Role, SignupDraft, SignupRequest};
use crate::notify::Notifier;
use crate::services::signup::SignupGateway;
use crate::utils::validation::validate_draft;
use std::sync::Mutex;
use tracing::{info, warn};

pub const ADMIN_SIGNUP_BLOCKED: &str = "Admin accounts cannot be created through self-signup";
pub const SIGNUP_SUCCESS: &str = "Signup successful!";
pub const SIGNUP_FAILED: &str = "Signup failed, please try again";

/// How a submit attempt ended. Notifications already carry the
/// user-facing wording; this lets callers branch without parsing it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Dropped because another submission was in flight.
    InFlight,
    /// Draft failed validation; nothing was sent.
    Invalid,
    /// Admin self-signup is blocked by policy; nothing was sent.
    PolicyBlocked,
    /// The service accepted the signup and returned a password.
    Completed,
    /// The request was sent but failed (transport error or non-2xx).
    Failed,
}

/// Mediates between raw form input, the validation pass, and a single
/// outbound signup request. At most one request is in flight per
/// controller instance; re-entrant submits are dropped silently.
pub struct SignupController<G, N> {
    gateway: G,
    notifier: N,
    state: Mutex<RequestState>,
    password: Mutex<Option<String>>,
}

impl<G: SignupGateway, N: Notifier> SignupController<G, N> {
    pub fn new(gateway: G, notifier: N) -> Self {
        Self {
            gateway,
            notifier,
            state: Mutex::new(RequestState::Idle),
            password: Mutex::new(None),
        }
    }

    pub fn state(&self) -> RequestState {
        *self.state.lock().unwrap()
    }

    /// Password returned by the last successful signup, if any.
    pub fn generated_password(&self) -> Option<String> {
        self.password.lock().unwrap().clone()
    }

    /// Runs one submit attempt: guard, validation, policy check, then
    /// a single network request. Every exit path leaves the controller
    /// Idle and ready for another attempt.
    pub async fn submit(&self, draft: &SignupDraft) -> SubmitOutcome {
        if self.state() == RequestState::Submitting {
            return SubmitOutcome::InFlight;
        }

        // Validation failures and the policy block never transition
        // through Submitting.
        let errors = validate_draft(draft);
        if !errors.is_empty() {
            for error in &errors {
                self.notifier.error(error.message);
            }
            return SubmitOutcome::Invalid;
        }

        if draft.role == Some(Role::Admin) {
            info!("blocked admin self-signup attempt");
            self.notifier.error(ADMIN_SIGNUP_BLOCKED);
            return SubmitOutcome::PolicyBlocked;
        }

        {
            let mut state = self.state.lock().unwrap();
            if *state == RequestState::Submitting {
                return SubmitOutcome::InFlight;
            }
            *state = RequestState::Submitting;
        }

        let request = SignupRequest::from_draft(draft);
        let outcome = match self.gateway.signup(&request).await {
            Ok(response) => {
                info!("signup accepted for {}", request.email);
                *self.password.lock().unwrap() = Some(response.password);
                self.notifier.success(SIGNUP_SUCCESS);
                SubmitOutcome::Completed
            }
            Err(e) => {
                warn!("signup request failed: {:#}", e);
                self.notifier.error(SIGNUP_FAILED);
                SubmitOutcome::Failed
            }
        };

        *self.state.lock().unwrap() = RequestState::Idle;
        outcome
    }
}
