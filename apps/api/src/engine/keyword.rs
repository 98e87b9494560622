//! Keyword alignment: lexical overlap between job and resume tokens.
//!
//! Matching is exact-token and case-insensitive: no stemming, no partial match.
//! Repeated job tokens are counted every time they recur.

use std::collections::HashSet;

use tracing::debug;

use crate::engine::feedback::{
    AnalyzerKind, AnalyzerReport, FeedbackBlock, FeedbackFragment, Severity,
};
use crate::engine::tokenizer::TokenBag;
use crate::engine::{Analyzer, ScanContext};

const MAX_MISSING_KEYWORDS: usize = 5;
const LOW_MATCH_THRESHOLD: f64 = 30.0;
const STRONG_MATCH_THRESHOLD: f64 = 70.0;

/// Raw numbers behind the keyword sub-score.
#[derive(Debug, Clone, PartialEq)]
pub struct KeywordAlignment {
    pub matched: usize,
    pub total: usize,
    pub percentage: f64,
    /// Distinct unmatched job tokens longer than two characters, first-seen order, at most five.
    pub missing: Vec<String>,
}

pub fn measure_alignment(job: &TokenBag, resume: &TokenBag) -> KeywordAlignment {
    let total = job.len();
    let mut matched = 0;
    let mut seen = HashSet::new();
    let mut missing = Vec::new();

    for token in job.tokens() {
        let found = resume.contains(token);
        if found {
            matched += 1;
        }
        if !found
            && token.chars().count() > 2
            && seen.insert(token.as_str())
            && missing.len() < MAX_MISSING_KEYWORDS
        {
            missing.push(token.clone());
        }
    }

    let percentage = if job.is_empty() {
        0.0
    } else {
        matched as f64 / total as f64 * 100.0
    };

    KeywordAlignment {
        matched,
        total,
        percentage,
        missing,
    }
}

pub struct KeywordAnalyzer;

impl Analyzer for KeywordAnalyzer {
    fn kind(&self) -> AnalyzerKind {
        AnalyzerKind::KeywordAlignment
    }

    fn analyze(&self, ctx: &ScanContext<'_>) -> AnalyzerReport {
        let alignment = measure_alignment(&ctx.job_tokens, &ctx.resume_tokens);
        debug!(
            matched = alignment.matched,
            total = alignment.total,
            "keyword alignment measured"
        );
        let fragment = build_feedback(&alignment);
        AnalyzerReport::new(self.kind(), alignment.percentage, fragment)
    }
}

fn build_feedback(alignment: &KeywordAlignment) -> FeedbackFragment {
    let mut fragment = FeedbackFragment::new(AnalyzerKind::KeywordAlignment);
    let pct = alignment.percentage;

    fragment.push(FeedbackBlock::new(
        Severity::Neutral,
        format!(
            "Your resume matched approximately {pct:.2}% of the keywords in the job description."
        ),
    ));

    let tier = if pct < LOW_MATCH_THRESHOLD {
        FeedbackBlock::labeled(
            Severity::Danger,
            "Action Needed",
            "Your overall keyword match is low. Review the job description and integrate more relevant terms naturally into your resume.",
        )
    } else if pct < STRONG_MATCH_THRESHOLD {
        FeedbackBlock::labeled(
            Severity::Warning,
            "Good Start",
            "Your keyword match is decent, but there's room for improvement.",
        )
    } else {
        FeedbackBlock::labeled(
            Severity::Success,
            "Excellent",
            "Your keyword match is strong for ATS!",
        )
    };
    fragment.push(tier);

    if !alignment.missing.is_empty() {
        fragment.push(FeedbackBlock::labeled(
            Severity::Neutral,
            "Missing Keywords",
            format!(
                "Consider adding these relevant terms: {}.",
                alignment.missing.join(", ")
            ),
        ));
    }

    fragment
}
