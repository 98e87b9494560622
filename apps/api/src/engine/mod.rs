// ATS scoring engine.
// Pure and deterministic: no I/O, no clock, no state between calls.
// Five analyzers run in fixed order over one ScanContext; the aggregator joins them.

pub mod aggregator;
pub mod feedback;
pub mod formatting;
pub mod keyword;
pub mod location;
pub mod patterns;
pub mod sections;
pub mod title;
pub mod tokenizer;

use serde::{Deserialize, Serialize};

pub use aggregator::{analyze, ScanResult, Verdict};
pub use feedback::{AnalyzerKind, AnalyzerReport, FeedbackBlock, FeedbackFragment, Severity, SubScore};

use crate::engine::tokenizer::TokenBag;

/// The two free-form texts a scan compares.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisInput {
    pub resume_text: String,
    pub job_text: String,
}

impl AnalysisInput {
    pub fn new(resume_text: impl Into<String>, job_text: impl Into<String>) -> Self {
        Self {
            resume_text: resume_text.into(),
            job_text: job_text.into(),
        }
    }
}

/// Normalized views of one `AnalysisInput`, built once and shared by every analyzer.
#[derive(Debug, Clone)]
pub struct ScanContext<'a> {
    pub resume_text: &'a str,
    pub job_text: &'a str,
    pub resume_lower: String,
    pub resume_tokens: TokenBag,
    pub job_tokens: TokenBag,
}

impl<'a> ScanContext<'a> {
    pub fn new(resume_text: &'a str, job_text: &'a str) -> Self {
        Self {
            resume_text,
            job_text,
            resume_lower: resume_text.to_lowercase(),
            resume_tokens: TokenBag::from_text(resume_text),
            job_tokens: TokenBag::from_text(job_text),
        }
    }

    pub fn from_input(input: &'a AnalysisInput) -> Self {
        Self::new(&input.resume_text, &input.job_text)
    }
}

/// One scoring criterion. Implementations must be total: any input yields a report.
pub trait Analyzer: Send + Sync {
    fn kind(&self) -> AnalyzerKind;
    fn analyze(&self, ctx: &ScanContext<'_>) -> AnalyzerReport;
}
