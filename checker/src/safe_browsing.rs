//! Minimal client for the Safe Browsing v4 `threatMatches:find` endpoint.

use common::{consts, Error};
use eyre::WrapErr;
use serde::{Deserialize, Serialize};
use tracing::debug;
use url::Url;

const THREAT_TYPES: &[&str] = &["MALWARE", "SOCIAL_ENGINEERING", "UNWANTED_SOFTWARE", "POTENTIALLY_HARMFUL_APPLICATION"];
const PLATFORM_TYPES: &[&str] = &["ANY_PLATFORM"];
const THREAT_ENTRY_TYPES: &[&str] = &["URL"];

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
struct FindThreatMatches<'a> {
    client: ClientInfo<'a>,
    threat_info: ThreatInfo<'a>,
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
struct ClientInfo<'a> {
    client_id: &'a str,
    client_version: &'a str,
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
struct ThreatInfo<'a> {
    threat_types: &'a [&'a str],
    platform_types: &'a [&'a str],
    threat_entry_types: &'a [&'a str],
    threat_entries: Vec<ThreatEntry<'a>>,
}

#[derive(Serialize, Debug)]
struct ThreatEntry<'a> {
    url: &'a str,
}

// the service answers `{}` when nothing matches
#[derive(Deserialize, Debug, Default)]
struct FindThreatMatchesResp {
    #[serde(default)]
    matches: Vec<ThreatMatch>,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct ThreatMatch {
    threat_type: String,
}

/// Returns the distinct threat types listed for `url`, empty when it is clean.
pub async fn find_threats(client: &reqwest::Client, endpoint: &Url, api_key: &str, url: &str) -> common::Result<Vec<String>> {
    let mut endpoint = endpoint.clone();
    endpoint.query_pairs_mut().append_pair("key", api_key);

    let body = FindThreatMatches {
        client: ClientInfo {
            client_id: consts::CLIENT_ID,
            client_version: env!("CARGO_PKG_VERSION"),
        },
        threat_info: ThreatInfo {
            threat_types: THREAT_TYPES,
            platform_types: PLATFORM_TYPES,
            threat_entry_types: THREAT_ENTRY_TYPES,
            threat_entries: vec![ThreatEntry { url }],
        },
    };

    let resp = client.post(endpoint)
        .json(&body)
        .send().await
        .wrap_err("threat lookup request failed")?;

    let status = resp.status();
    if !status.is_success() {
        return Err(Error::UnexpectedStatus(status.as_u16()));
    }

    let resp: FindThreatMatchesResp = resp.json().await.wrap_err("failed to decode threat lookup response")?;
    debug!(matches = resp.matches.len(), "threat lookup done");

    let mut threats: Vec<_> = resp.matches.into_iter().map(|m| m.threat_type).collect();
    threats.sort();
    threats.dedup();
    Ok(threats)
}
