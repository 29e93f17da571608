//! Scan reporting
//!
//! One report per enhancement pass. A container the scan cannot wire is
//! counted and skipped; it never aborts the rest of the pass.

use serde::{Deserialize, Serialize};

/// Summary of one enhancement pass, returned to the caller
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnhanceReport {
    /// Containers matched by the container selector
    pub containers: usize,
    /// Containers that received a control
    pub installed: usize,
    /// Containers the scan could not wire
    pub skipped: usize,
}

impl EnhanceReport {
    /// Start a report for a scan that matched `containers` elements
    pub fn new(containers: usize) -> Self {
        Self {
            containers,
            installed: 0,
            skipped: 0,
        }
    }

    /// Record a container that received a control
    pub fn record_installed(&mut self) {
        self.installed += 1;
    }

    /// Record a container the scan could not wire
    pub fn record_skipped(&mut self) {
        self.skipped += 1;
    }

    /// Every matched container is either installed or skipped
    pub fn is_consistent(&self) -> bool {
        self.containers == self.installed + self.skipped
    }

    /// Log the scan summary and return the finished report
    pub fn finish(self) -> Self {
        tracing::debug!(
            containers = self.containers,
            installed = self.installed,
            skipped = self.skipped,
            "code block scan complete"
        );
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counters() {
        let mut report = EnhanceReport::new(3);
        report.record_installed();
        report.record_installed();
        report.record_skipped();
        assert_eq!(report.containers, 3);
        assert_eq!(report.installed, 2);
        assert_eq!(report.skipped, 1);
        assert!(report.is_consistent());
    }

    #[test]
    fn test_zero_match_report() {
        let report = EnhanceReport::new(0).finish();
        assert_eq!(report, EnhanceReport::default());
        assert!(report.is_consistent());
    }

    #[test]
    fn test_inconsistent_when_a_container_is_unaccounted() {
        let mut report = EnhanceReport::new(2);
        report.record_installed();
        assert!(!report.is_consistent());
    }

    #[test]
    fn test_serializes_camel_case() {
        let mut report = EnhanceReport::new(1);
        report.record_installed();
        let json = serde_json::to_string(&report).unwrap();
        assert_eq!(json, r#"{"containers":1,"installed":1,"skipped":0}"#);

        let back: EnhanceReport = serde_json::from_str(&json).unwrap();
        assert_eq!(back, report);
    }
}
