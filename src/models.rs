// src/models.rs
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const MAX_EMAIL_LEN: usize = 50;
pub const MIN_NAME_LEN: usize = 1;
pub const MAX_NAME_LEN: usize = 100;
pub const MIN_REGNO_LEN: usize = 4;
pub const MAX_REGNO_LEN: usize = 20;

/// Account role selected on the signup form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Admin,
}

impl FromStr for Role {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "user" => Ok(Role::User),
            "admin" => Ok(Role::Admin),
            _ => Err(()),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::User => write!(f, "user"),
            Role::Admin => write!(f, "admin"),
        }
    }
}

/// In-progress form input. Validated only when submitted, discarded
/// once the request completes.
#[derive(Debug, Clone, Default)]
pub struct SignupDraft {
    pub email: String,
    pub name: String,
    pub regno: String,
    pub role: Option<Role>,
}

/// Whether a submission is currently in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestState {
    Idle,
    Submitting,
}

// Request/Response types

/// Wire body for POST /user/signup.
///
/// The renamed marker field is an opaque discriminator the signup
/// service requires verbatim; its name and value are part of the
/// remote contract and must not be changed without the service owner.
#[derive(Debug, Serialize)]
pub struct SignupRequest {
    pub email: String,
    pub name: String,
    pub reg_no: String,
    #[serde(rename = "fuck_you")]
    pub client_marker: &'static str,
}

pub const CLIENT_MARKER: &str = "cooking";

impl SignupRequest {
    /// Builds the wire body from a validated draft, trimming
    /// leading/trailing whitespace from every field.
    pub fn from_draft(draft: &SignupDraft) -> Self {
        Self {
            email: draft.email.trim().to_string(),
            name: draft.name.trim().to_string(),
            reg_no: draft.regno.trim().to_string(),
            client_marker: CLIENT_MARKER,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct SignupResponse {
    pub password: String,
}
