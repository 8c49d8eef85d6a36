use std::{fs, io, path::Path, time::Duration};

use common::{consts, Error};
use derivative::Derivative;
use eyre::{eyre, WrapErr};
use serde::Deserialize;
use tracing::debug;
use url::Url;

#[derive(Deserialize, Derivative, Clone, PartialEq)]
#[derivative(Debug)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// the hash prefix is appended as-is
    pub range_url: String,
    pub user_agent: String,
    /// asks the range service to mix decoy lines (count 0) into its answer
    pub add_padding: bool,
    pub breach_timeout_secs: Option<u64>,
    pub domain_timeout_secs: u64,
    pub transparency_report_url: Url,
    pub safe_browsing_url: Url,
    #[derivative(Debug="ignore")]
    pub safe_browsing_api_key: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            range_url: consts::RANGE_API_URL.to_owned(),
            user_agent: consts::USER_AGENT.to_owned(),
            add_padding: true,
            breach_timeout_secs: None,
            domain_timeout_secs: consts::DOMAIN_TIMEOUT_SECS,
            transparency_report_url: Url::parse(consts::TRANSPARENCY_REPORT_URL).expect("hard-coded url"),
            safe_browsing_url: Url::parse(consts::SAFE_BROWSING_URL).expect("hard-coded url"),
            safe_browsing_api_key: None,
        }
    }
}

impl Config {
    /// Loads the file named by `PWNCHECK_CONFIG`, or `pwncheck.toml` from the
    /// working directory. Only the latter may be missing.
    pub fn load() -> common::Result<Self> {
        let config = match std::env::var_os(consts::CONFIG_PATH_ENV) {
            Some(path) => Self::load_from(Path::new(&path))?,
            None => match Self::load_from(Path::new(consts::CONFIG_PATH)) {
                Err(Error::Config(e)) if is_not_found(&e) => {
                    debug!("no {} found, using defaults", consts::CONFIG_PATH);
                    Self::default()
                }
                r => r?,
            },
        };

        Ok(config.with_api_key(std::env::var(consts::SAFE_BROWSING_KEY_ENV).ok()))
    }

    pub fn load_from(path: &Path) -> common::Result<Self> {
        let buf = fs::read_to_string(path)
            .wrap_err_with(|| format!("failed to read {}", path.display()))
            .map_err(Error::Config)?;
        Self::from_toml(&buf)
    }

    pub fn from_toml(s: &str) -> common::Result<Self> {
        let config: Self = toml::from_str(s).map_err(|e| Error::Config(eyre!(e)))?;
        Ok(config.with_api_key(None))
    }

    /// An empty key counts as no key.
    pub fn with_api_key(mut self, key: Option<String>) -> Self {
        if let Some(key) = key {
            self.safe_browsing_api_key = Some(key);
        }
        self.safe_browsing_api_key = self.safe_browsing_api_key.filter(|k| !k.trim().is_empty());
        self
    }

    pub fn breach_timeout(&self) -> Option<Duration> {
        self.breach_timeout_secs.map(Duration::from_secs)
    }

    pub fn domain_timeout(&self) -> Duration {
        Duration::from_secs(self.domain_timeout_secs)
    }
}

fn is_not_found(e: &eyre::Report) -> bool {
    e.chain()
        .filter_map(|c| c.downcast_ref::<io::Error>())
        .any(|e| e.kind() == io::ErrorKind::NotFound)
}
