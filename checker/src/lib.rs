use common::{BreachVerdict, DomainVerdict};
use eyre::WrapErr;
use tracing::info;

pub mod config;
pub mod hibp;
pub mod reachability;
pub mod report;
mod safe_browsing;

pub use config::Config;

/// What to check. Inputs are trimmed and otherwise passed through untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckRequest {
    pub email: String,
    pub domain: String,
}

impl CheckRequest {
    pub fn new(email: &str, domain: &str) -> Self {
        Self {
            email: email.trim().to_owned(),
            domain: domain.trim().to_owned(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckReport {
    pub breach: BreachVerdict,
    pub domain: DomainVerdict,
}

#[derive(derivative::Derivative)]
#[derivative(Debug)]
pub struct Checker {
    #[derivative(Debug="ignore")]
    http: reqwest::Client,
    config: Config,
}

impl Checker {
    pub fn new(config: Config) -> common::Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent(config.user_agent.as_str())
            .build()
            .wrap_err("failed to build http client")?;

        Ok(Self { http, config })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub async fn check_email(&self, email: &str) -> BreachVerdict {
        hibp::check_email(&self.http, &self.config, email).await
    }

    pub async fn check_domain(&self, domain: &str) -> DomainVerdict {
        reachability::check_domain(&self.http, &self.config, domain).await
    }

    /// Runs both checks, one after the other.
    pub async fn run(&self, request: &CheckRequest) -> CheckReport {
        let breach = self.check_email(&request.email).await;
        info!(%breach, "breach check done");
        let domain = self.check_domain(&request.domain).await;
        info!(%domain, "domain check done");

        CheckReport { breach, domain }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_is_trimmed_only() {
        let req = CheckRequest::new("  Alice@Example.COM\t", "\nnot a domain  ");
        assert_eq!(req.email, "Alice@Example.COM");
        assert_eq!(req.domain, "not a domain");

        let req = CheckRequest::new("   ", "");
        assert_eq!(req.email, "");
        assert_eq!(req.domain, "");
    }
}
