//! Report aggregation
//!
//! Merges detector output, orders it by severity and summarizes counts.
//! Pure computation: the same issue list always produces the same report.

use serde::{Deserialize, Serialize};
use std::fmt::Write as _;

use crate::types::{ConflictIssue, IssueType, Severity};

/// Per-type issue counts; every type is always present
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeCounts {
    pub multiple_outfits: usize,
    pub item_conflict: usize,
    pub missing_data: usize,
}

impl TypeCounts {
    pub fn get(&self, issue_type: IssueType) -> usize {
        match issue_type {
            IssueType::MultipleOutfits => self.multiple_outfits,
            IssueType::ItemConflict => self.item_conflict,
            IssueType::MissingData => self.missing_data,
        }
    }

    fn bump(&mut self, issue_type: IssueType) {
        match issue_type {
            IssueType::MultipleOutfits => self.multiple_outfits += 1,
            IssueType::ItemConflict => self.item_conflict += 1,
            IssueType::MissingData => self.missing_data += 1,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportSummary {
    pub total: usize,
    pub high: usize,
    pub medium: usize,
    pub low: usize,
    pub by_type: TypeCounts,
}

impl ReportSummary {
    pub fn count(&self, severity: Severity) -> usize {
        match severity {
            Severity::High => self.high,
            Severity::Medium => self.medium,
            Severity::Low => self.low,
        }
    }
}

/// Result of a continuity check
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ConsistencyReport {
    /// Ordered high → medium → low, detection order within a tier
    pub issues: Vec<ConflictIssue>,
    pub summary: ReportSummary,
}

impl ConsistencyReport {
    /// Build a report from issues in detection order
    pub fn from_issues(mut issues: Vec<ConflictIssue>) -> Self {
        // sort_by_key is stable
        issues.sort_by_key(|issue| issue.severity.rank());

        let mut summary = ReportSummary {
            total: issues.len(),
            ..ReportSummary::default()
        };
        for issue in &issues {
            match issue.severity {
                Severity::High => summary.high += 1,
                Severity::Medium => summary.medium += 1,
                Severity::Low => summary.low += 1,
            }
            summary.by_type.bump(issue.issue_type);
        }

        Self { issues, summary }
    }

    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }

    pub fn issues_of_type(&self, issue_type: IssueType) -> impl Iterator<Item = &ConflictIssue> {
        self.issues.iter().filter(move |i| i.issue_type == issue_type)
    }

    /// Severity of the first issue, which is the most severe after sorting
    pub fn highest_severity(&self) -> Option<Severity> {
        self.issues.first().map(|i| i.severity)
    }

    pub fn has_issues_at_or_above(&self, threshold: Severity) -> bool {
        self.highest_severity()
            .is_some_and(|severity| severity.is_at_least(threshold))
    }

    /// One-line human summary
    pub fn summary_message(&self) -> String {
        let s = &self.summary;
        if s.total == 0 {
            return "Continuity check passed: no issues found".to_string();
        }

        if s.high > 0 {
            format!(
                "Continuity check failed: {} high-severity issue(s), {} total",
                s.high, s.total
            )
        } else if s.medium > 0 {
            format!(
                "Continuity check warning: {} medium-severity issue(s), {} total",
                s.medium, s.total
            )
        } else {
            format!(
                "Continuity check passed with {} low-severity issue(s)",
                s.low
            )
        }
    }

    /// Plain text rendering: summary line, then one line per issue
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{}", self.summary_message());
        for issue in &self.issues {
            let _ = writeln!(
                out,
                "[{}] {}: {} (entries: {})",
                issue.severity,
                issue.issue_type,
                issue.message,
                issue.entry_ids().join(", ")
            );
        }
        out
    }
}

/// Merge per-detector outputs, given in detection order
pub fn aggregate<I>(groups: I) -> ConsistencyReport
where
    I: IntoIterator<Item = Vec<ConflictIssue>>,
{
    ConsistencyReport::from_issues(groups.into_iter().flatten().collect())
}
