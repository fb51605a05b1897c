// src/services/signup.rs
use crate::config::Config;
use crate::models::{SignupRequest, SignupResponse};
use anyhow::{anyhow, Context};
use std::time::Duration;
use tracing::debug;

/// Remote signup endpoint, abstracted so the controller can be tested
/// against a mock instead of a live service.
pub trait SignupGateway {
    fn signup(
        &self,
        request: &SignupRequest,
    ) -> impl std::future::Future<Output = anyhow::Result<SignupResponse>> + Send;
}

impl<G: SignupGateway + Send + Sync> SignupGateway for std::sync::Arc<G> {
    async fn signup(&self, request: &SignupRequest) -> anyhow::Result<SignupResponse> {
        (**self).signup(request).await
    }
}

/// HTTP client for the account-provisioning service.
pub struct HttpSignupService {
    client: reqwest::Client,
    signup_url: String,
}

impl HttpSignupService {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .context("failed to build HTTP client")?;

        Ok(Self {
            client,
            signup_url: config.signup_url(),
        })
    }
}

impl SignupGateway for HttpSignupService {
    async fn signup(&self, request: &SignupRequest) -> anyhow::Result<SignupResponse> {
        debug!("POST {}", self.signup_url);

        let response = self
            .client
            .post(&self.signup_url)
            .json(request)
            .send()
            .await
            .context("signup request failed")?;

        let status = response.status();
        if !status.is_success() {
            return Err(anyhow!("signup service returned {}", status));
        }

        response
            .json::<SignupResponse>()
            .await
            .context("signup service returned an unexpected body")
    }
}
