pub const RANGE_API_URL: &str = "https://api.pwnedpasswords.com/range/";
pub const TRANSPARENCY_REPORT_URL: &str = "https://transparencyreport.google.com/safe-browsing/search";
pub const SAFE_BROWSING_URL: &str = "https://safebrowsing.googleapis.com/v4/threatMatches:find";
pub const CLIENT_ID: &str = "pwncheck";
pub const USER_AGENT: &str = concat!("pwncheck/", env!("CARGO_PKG_VERSION"));

pub const DOMAIN_TIMEOUT_SECS: u64 = 5;

pub const CONFIG_PATH: &str = "pwncheck.toml";
pub const CONFIG_PATH_ENV: &str = "PWNCHECK_CONFIG";
pub const SAFE_BROWSING_KEY_ENV: &str = "PWNCHECK_SAFE_BROWSING_KEY";

pub const HASH_PREFIX_LEN: usize = 5;
pub const HASH_HEX_LEN: usize = 40; // SHA-1 is 160 bits
