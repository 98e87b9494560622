//! Render: maps a `ScanResult` plus lock state to the view-model the UI displays.
//!
//! Locked views carry only the verdict and percentage; the detailed feedback is
//! attached once the payment gate is open.

mod html;

use serde::{Deserialize, Serialize};

use crate::engine::{FeedbackFragment, ScanResult, SubScore, Verdict};

pub use html::feedback_to_html;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LockState {
    Locked,
    Unlocked,
}

/// Monthly usage figures shown next to an unlocked report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UsageNotice {
    pub monthly_scans: u64,
    pub threshold: u64,
}

impl UsageNotice {
    /// Warning text once the month's detailed scans exceed the threshold.
    pub fn warning(&self) -> Option<String> {
        (self.monthly_scans > self.threshold).then(|| {
            format!(
                "You've performed {} detailed scans this month. If you're a consultant or business, consider our Pro Suite for optimized usage and features!",
                self.monthly_scans
            )
        })
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ScanDetails {
    pub sub_scores: Vec<SubScore>,
    pub fragments: Vec<FeedbackFragment>,
    pub feedback_html: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usage_warning: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ScanView {
    pub verdict: Verdict,
    pub percentage: String,
    /// e.g. "72.40% Match"
    pub match_label: String,
    pub passed: bool,
    pub locked: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<ScanDetails>,
}

pub fn render_scan(result: &ScanResult, lock: LockState, usage: Option<UsageNotice>) -> ScanView {
    let details = match lock {
        LockState::Locked => None,
        LockState::Unlocked => Some(ScanDetails {
            sub_scores: result.sub_scores.clone(),
            fragments: result.feedback.clone(),
            feedback_html: feedback_to_html(&result.feedback),
            usage_warning: usage.and_then(|u| u.warning()),
        }),
    };

    ScanView {
        verdict: result.verdict,
        percentage: result.percentage.clone(),
        match_label: format!("{}% Match", result.percentage),
        passed: result.verdict == Verdict::Pass,
        locked: lock == LockState::Locked,
        details,
    }
}
