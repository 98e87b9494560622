//! Feedback and score types shared by every analyzer and the aggregator.

use serde::{Deserialize, Serialize};

/// The five analyzers, in the fixed order they run and report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnalyzerKind {
    KeywordAlignment,
    JobTitleMatch,
    SectionLabeling,
    LocationEligibility,
    FormattingReadability,
}

impl AnalyzerKind {
    pub const ALL: [AnalyzerKind; 5] = [
        AnalyzerKind::KeywordAlignment,
        AnalyzerKind::JobTitleMatch,
        AnalyzerKind::SectionLabeling,
        AnalyzerKind::LocationEligibility,
        AnalyzerKind::FormattingReadability,
    ];

    /// Numbered heading shown above the analyzer's feedback.
    pub fn heading(self) -> &'static str {
        match self {
            AnalyzerKind::KeywordAlignment => "1. Keyword Alignment",
            AnalyzerKind::JobTitleMatch => "2. Job Title and Role Context",
            AnalyzerKind::SectionLabeling => "3. Section Labeling and Structure",
            AnalyzerKind::LocationEligibility => "4. Location and Eligibility",
            AnalyzerKind::FormattingReadability => "5. Formatting / Readability",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Neutral,
    Success,
    Warning,
    Danger,
}

/// A sub-score in `[0, 100]`, tagged with the analyzer that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SubScore {
    pub analyzer: AnalyzerKind,
    pub value: f64,
}

impl SubScore {
    /// Clamps into `[0, 100]`. NaN collapses to 0.
    pub fn new(analyzer: AnalyzerKind, value: f64) -> Self {
        let value = if value.is_nan() {
            0.0
        } else {
            value.clamp(0.0, 100.0)
        };
        Self { analyzer, value }
    }
}

/// One severity-tagged paragraph of feedback.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedbackBlock {
    pub severity: Severity,
    /// Short bold prefix, e.g. "Action Needed".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub text: String,
}

impl FeedbackBlock {
    pub fn new(severity: Severity, text: impl Into<String>) -> Self {
        Self {
            severity,
            label: None,
            text: text.into(),
        }
    }

    pub fn labeled(severity: Severity, label: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            severity,
            label: Some(label.into()),
            text: text.into(),
        }
    }
}

/// All feedback emitted by a single analyzer, in emission order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedbackFragment {
    pub analyzer: AnalyzerKind,
    pub heading: String,
    pub blocks: Vec<FeedbackBlock>,
}

impl FeedbackFragment {
    pub fn new(analyzer: AnalyzerKind) -> Self {
        Self {
            analyzer,
            heading: analyzer.heading().to_string(),
            blocks: Vec::new(),
        }
    }

    pub fn push(&mut self, block: FeedbackBlock) {
        self.blocks.push(block);
    }
}

/// What one analyzer hands back to the aggregator.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalyzerReport {
    pub score: SubScore,
    pub fragment: FeedbackFragment,
}

impl AnalyzerReport {
    pub fn new(analyzer: AnalyzerKind, value: f64, fragment: FeedbackFragment) -> Self {
        Self {
            score: SubScore::new(analyzer, value),
            fragment,
        }
    }
}
