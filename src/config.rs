// src/config.rs
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Config {
    pub base_url: String,
    pub scratch_dir: PathBuf,
    pub request_timeout_secs: u64,
}

impl Config {
    pub fn from_env() -> Result<Self, Box<dyn std::error::Error>> {
        let base_url = std::env::var("SIGNUP_BASE_URL")
            .map_err(|_| "SIGNUP_BASE_URL environment variable must be set")?;

        let parsed = url::Url::parse(&base_url)
            .map_err(|e| format!("SIGNUP_BASE_URL is not a valid URL: {}", e))?;
        if parsed.scheme() != "http" && parsed.scheme() != "https" {
            return Err("SIGNUP_BASE_URL must use http or https".into());
        }

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            scratch_dir: std::env::var("SIGNUP_SCRATCH_DIR")
                .unwrap_or_else(|_| ".signup-scratch".to_string())
                .into(),
            request_timeout_secs: std::env::var("SIGNUP_TIMEOUT_SECS")
                .unwrap_or_else(|_| "30".to_string())
                .parse()?,
        })
    }

    pub fn signup_url(&self) -> String {
        format!("{}/user/signup", self.base_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signup_url_appends_endpoint_path() {
        let config = Config {
            base_url: "https://api.example.edu".to_string(),
            scratch_dir: ".signup-scratch".into(),
            request_timeout_secs: 30,
        };
        assert_eq!(config.signup_url(), "https://api.example.edu/user/signup");
    }
}
