use common::{DomainVerdict, UnreachableReason};
use tracing::{debug, info, warn};

use crate::{config::Config, safe_browsing};

/// Probes `http://{domain}` and, if it answers, either looks it up in Safe
/// Browsing (when an API key is configured) or points at the public report page.
pub async fn check_domain(client: &reqwest::Client, config: &Config, domain: &str) -> DomainVerdict {
    let url = format!("http://{}", domain);

    if let Err(reason) = probe(client, config, &url).await {
        info!(%url, %reason, "domain unreachable");
        return DomainVerdict::Unreachable(reason);
    }

    let api_key = match &config.safe_browsing_api_key {
        Some(key) => key,
        None => return DomainVerdict::ManualReviewRequired { report_url: report_url(config, domain) },
    };

    match safe_browsing::find_threats(client, &config.safe_browsing_url, api_key, &url).await {
        Ok(threats) if threats.is_empty() => DomainVerdict::Safe,
        Ok(threats) => DomainVerdict::Unsafe { threats },
        Err(e) => {
            warn!("threat lookup failed: {}", e);
            DomainVerdict::Reachable { reason: e.to_string() }
        }
    }
}

/// Any response counts, whatever its status.
pub async fn probe(client: &reqwest::Client, config: &Config, url: &str) -> Result<(), UnreachableReason> {
    match client.get(url).timeout(config.domain_timeout()).send().await {
        Ok(resp) => {
            debug!(status = %resp.status(), "domain answered");
            Ok(())
        },
        Err(e) if e.is_timeout() => Err(UnreachableReason::Timeout),
        Err(e) if e.is_connect() => Err(UnreachableReason::Connect),
        Err(e) => Err(UnreachableReason::Other(e.to_string())),
    }
}

/// Public Safe Browsing status page for `domain`, for a human to finish the check.
pub fn report_url(config: &Config, domain: &str) -> String {
    let mut url = config.transparency_report_url.clone();
    url.query_pairs_mut().append_pair("url", domain);
    url.into()
}
