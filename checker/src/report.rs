//! Console rendering of check results.

use std::fmt;

use common::{BreachVerdict, DomainVerdict};

use crate::{CheckReport, CheckRequest};

pub const TITLE: &str = "Email Breach & Safe Browsing Checker";

pub fn separator() -> String {
    "=".repeat(50)
}

pub fn banner() -> String {
    format!("{sep}\n{}\n{sep}", TITLE, sep = separator())
}

pub fn breach_progress(email: &str) -> String {
    format!("\n[+] Checking email '{}' against known breaches...", email)
}

pub fn domain_progress(domain: &str) -> String {
    format!("\n[+] Checking domain '{}' with Safe Browsing...", domain)
}

pub fn breach_lines(verdict: &BreachVerdict) -> Vec<String> {
    match verdict {
        BreachVerdict::Found(count) => vec![format!("[!] BREACH FOUND! Email appears in {} breaches!", count)],
        BreachVerdict::NotFound => vec!["[ok] Email not found in known breaches".to_owned()],
        BreachVerdict::Inconclusive(reason) => vec![
            format!("[?] Error while checking email: {}", reason),
            "[?] The result is unknown, not clean".to_owned(),
        ],
    }
}

pub fn domain_lines(verdict: &DomainVerdict) -> Vec<String> {
    match verdict {
        DomainVerdict::ManualReviewRequired { report_url } => vec![
            "[i] Domain is reachable. A Safe Browsing API key is required for a full check.".to_owned(),
            format!("[i] A full check can be done here: {}", report_url),
        ],
        DomainVerdict::Unreachable(reason) => vec![format!("[!] Domain is unreachable or blocked ({})", reason)],
        DomainVerdict::Reachable { reason } => vec![
            "[i] Domain is reachable.".to_owned(),
            format!("[?] Safe Browsing lookup failed: {}", reason),
        ],
        DomainVerdict::Safe => vec!["[ok] Domain is reachable and not listed by Safe Browsing".to_owned()],
        DomainVerdict::Unsafe { threats } => vec![format!("[!] Domain is listed by Safe Browsing: {}", threats.join(", "))],
    }
}

/// The closing results block.
pub struct Summary<'a> {
    pub request: &'a CheckRequest,
    pub report: &'a CheckReport,
}

impl<'a> Summary<'a> {
    pub fn new(request: &'a CheckRequest, report: &'a CheckReport) -> Self {
        Self { request, report }
    }
}

impl fmt::Display for Summary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "\n{}", separator())?;
        writeln!(f, "RESULTS:")?;
        writeln!(f, "Email: {} - {}", self.request.email, self.report.breach)?;
        writeln!(f, "Domain: {} - {}", self.request.domain, self.report.domain)?;
        writeln!(f, "{}", separator())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::UnreachableReason;

    #[test]
    fn banner_is_framed() {
        let banner = banner();
        let lines: Vec<_> = banner.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0].len(), 50);
        assert_eq!(lines[1], TITLE);
        assert_eq!(lines[0], lines[2]);
    }

    #[test]
    fn summary_block() {
        let request = CheckRequest::new("  a@b.c ", "b.c\n");
        let report = CheckReport {
            breach: BreachVerdict::Found(12),
            domain: DomainVerdict::Unreachable(UnreachableReason::Connect),
        };
        let expected = format!(
            "\n{sep}\nRESULTS:\nEmail: a@b.c - found in breaches\nDomain: b.c - unreachable (connection failed)\n{sep}\n",
            sep = "=".repeat(50)
        );
        assert_eq!(Summary::new(&request, &report).to_string(), expected);
    }

    #[test]
    fn clean_and_manual_review() {
        let request = CheckRequest::new("a@b.c", "b.c");
        let report = CheckReport {
            breach: BreachVerdict::NotFound,
            domain: DomainVerdict::ManualReviewRequired { report_url: "https://x/?url=b.c".into() },
        };
        let summary = Summary::new(&request, &report).to_string();
        assert!(summary.contains("Email: a@b.c - clean\n"));
        assert!(summary.contains("Domain: b.c - manual review required\n"));
    }

    #[test]
    fn inconclusive_is_never_reported_clean() {
        let lines = breach_lines(&BreachVerdict::Inconclusive("range request failed".into()));
        assert!(lines.iter().all(|l| !l.contains("not found")));
        assert!(lines[0].contains("range request failed"));
    }

    #[test]
    fn manual_review_prints_report_link() {
        let lines = domain_lines(&DomainVerdict::ManualReviewRequired { report_url: "https://x/?url=b.c".into() });
        assert_eq!(lines.len(), 2);
        assert!(lines[1].ends_with("https://x/?url=b.c"));
    }
}
