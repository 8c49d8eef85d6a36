use derive_more::Display;

/// Outcome of the k-anonymity breach lookup.
#[derive(Debug, Display, Clone, PartialEq, Eq)]
pub enum BreachVerdict {
    #[display("found in breaches")]
    Found(u64), // occurrences reported by the service
    #[display("clean")]
    NotFound,
    /// The lookup failed, nothing can be said about the email.
    #[display("inconclusive ({_0})")]
    Inconclusive(String),
}

impl BreachVerdict {
    pub fn is_authoritative(&self) -> bool {
        !matches!(self, BreachVerdict::Inconclusive(_))
    }
}

#[derive(Debug, Display, Clone, PartialEq, Eq)]
pub enum UnreachableReason {
    #[display("timed out")]
    Timeout,
    #[display("connection failed")]
    Connect,
    #[display("{_0}")]
    Other(String),
}

/// Outcome of the domain check.
///
/// Without a Safe Browsing API key the check can only tell whether the host
/// answers, and hands back the page where a human can finish the job.
#[derive(Debug, Display, Clone, PartialEq, Eq)]
pub enum DomainVerdict {
    #[display("manual review required")]
    ManualReviewRequired { report_url: String },
    #[display("unreachable ({_0})")]
    Unreachable(UnreachableReason),
    /// Host answered but the threat lookup failed.
    #[display("reachable, threat lookup failed ({reason})")]
    Reachable { reason: String },
    #[display("safe")]
    Safe,
    #[display("unsafe ({})", threats.join(", "))]
    Unsafe { threats: Vec<String> },
}

impl DomainVerdict {
    pub fn is_reachable(&self) -> bool {
        !matches!(self, DomainVerdict::Unreachable(_))
    }
}
