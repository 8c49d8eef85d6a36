use common::{crypto::RangeHash, BreachVerdict, Error};
use eyre::WrapErr;
use reqwest::Method;
use tracing::{debug, warn};

use crate::config::Config;

/// Looks `email` up in the breach corpus. Only the first 5 hex characters of
/// its SHA-1 are sent; failures come back as `Inconclusive`.
pub async fn check_email(client: &reqwest::Client, config: &Config, email: &str) -> BreachVerdict {
    match lookup(client, config, &RangeHash::of(email)).await {
        Ok(verdict) => verdict,
        Err(e) => {
            warn!("breach lookup failed: {}", e);
            BreachVerdict::Inconclusive(e.to_string())
        }
    }
}

pub async fn lookup(client: &reqwest::Client, config: &Config, hash: &RangeHash) -> common::Result<BreachVerdict> {
    let url = format!("{}{}", config.range_url, hash.prefix);
    debug!(prefix = %hash.prefix, "querying range api");

    let mut req = client.request(Method::GET, &url);
    if config.add_padding {
        req = req.header("Add-Padding", "true");
    }
    if let Some(timeout) = config.breach_timeout() {
        req = req.timeout(timeout);
    }

    let resp = req.send().await.wrap_err("range request failed")?;

    match resp.status() {
        status if status.is_success() => {
            let body = resp.text().await.wrap_err("failed to read range response")?;
            parse_range_response(&body, hash)
        },
        status => Err(Error::UnexpectedStatus(status.as_u16())),
    }
}

/// Scans `SUFFIX:COUNT` lines for our suffix. A match with a count of 0 is a
/// padding decoy.
pub fn parse_range_response(body: &str, hash: &RangeHash) -> common::Result<BreachVerdict> {
    for line in body.lines().map(str::trim).filter(|l| !l.is_empty()) {
        let (suffix, count) = line.split_once(':')
            .ok_or_else(|| Error::MalformedRangeLine(line.to_owned()))?;

        if hash.matches_suffix(suffix) {
            let count = count.trim().parse::<u64>()
                .map_err(|_| Error::MalformedRangeLine(line.to_owned()))?;
            return Ok(match count {
                0 => BreachVerdict::NotFound,
                n => BreachVerdict::Found(n),
            });
        }
    }
    Ok(BreachVerdict::NotFound)
}
