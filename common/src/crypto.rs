use data_encoding::HEXUPPER;
use sha1::{Digest, Sha1};

use crate::consts::{HASH_HEX_LEN, HASH_PREFIX_LEN};

/// SHA-1 of a secret split for a k-anonymity range query: only `prefix` ever
/// leaves the machine, `suffix` is matched locally against the service's answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RangeHash {
    pub prefix: String,
    pub suffix: String,
}

impl RangeHash {
    pub fn of(secret: &str) -> Self {
        let hash = HEXUPPER.encode(Sha1::digest(secret.as_bytes()).as_slice());
        debug_assert_eq!(hash.len(), HASH_HEX_LEN);

        let (prefix, suffix) = hash.split_at(HASH_PREFIX_LEN);
        Self {
            prefix: prefix.to_owned(),
            suffix: suffix.to_owned(),
        }
    }

    pub fn full(&self) -> String {
        format!("{}{}", self.prefix, self.suffix)
    }

    /// Compares a suffix as returned by the service. The service is not
    /// guaranteed to answer in uppercase.
    pub fn matches_suffix(&self, candidate: &str) -> bool {
        candidate.trim().to_uppercase() == self.suffix
    }
}
