//! Title match: does the resume reflect the job's stated title?
//!
//! Binary score: 100 when any title variant appears in the resume, else 0.

use crate::engine::feedback::{
    AnalyzerKind, AnalyzerReport, FeedbackBlock, FeedbackFragment, Severity,
};
use crate::engine::patterns::{JOB_TITLE_RE, ROLE_SWAPS, TITLE_QUALIFIER_STRIPS};
use crate::engine::{Analyzer, ScanContext};

/// The trimmed, lower-cased `Job Title:` line, or an empty string when absent.
pub fn extract_job_title(job_text: &str) -> String {
    JOB_TITLE_RE
        .captures(job_text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_lowercase())
        .unwrap_or_default()
}

/// Replaces every `a` with `b` and every `b` with `a` in one pass.
fn swap_terms(text: &str, a: &str, b: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while !rest.is_empty() {
        if let Some(tail) = rest.strip_prefix(a) {
            out.push_str(b);
            rest = tail;
        } else if let Some(tail) = rest.strip_prefix(b) {
            out.push_str(a);
            rest = tail;
        } else {
            let mut chars = rest.chars();
            if let Some(c) = chars.next() {
                out.push(c);
            }
            rest = chars.as_str();
        }
    }
    out
}

/// Title variants tolerated by the matcher, literal title first, duplicates and
/// empty strings removed.
pub fn title_variants(title: &str) -> Vec<String> {
    let title = title.trim().to_lowercase();
    if title.is_empty() {
        return Vec::new();
    }

    let mut bases = vec![title.clone()];
    for strip in TITLE_QUALIFIER_STRIPS.iter() {
        bases.push(strip.replace(&title, "").trim().to_string());
    }

    let mut variants: Vec<String> = Vec::new();
    for base in &bases {
        let mut forms = vec![base.clone()];
        forms.extend(ROLE_SWAPS.iter().map(|(a, b)| swap_terms(base, a, b)));
        for form in forms {
            if !form.is_empty() && !variants.contains(&form) {
                variants.push(form);
            }
        }
    }
    variants
}

pub struct TitleAnalyzer;

impl Analyzer for TitleAnalyzer {
    fn kind(&self) -> AnalyzerKind {
        AnalyzerKind::JobTitleMatch
    }

    fn analyze(&self, ctx: &ScanContext<'_>) -> AnalyzerReport {
        let job_title = extract_job_title(ctx.job_text);
        let present = title_variants(&job_title)
            .iter()
            .any(|v| ctx.resume_lower.contains(v.as_str()));

        let mut fragment = FeedbackFragment::new(self.kind());
        let score = if present {
            fragment.push(FeedbackBlock::new(
                Severity::Success,
                "Your resume appears to align well with the job title and role context. This is crucial for ATS!",
            ));
            100.0
        } else {
            fragment.push(FeedbackBlock::labeled(
                Severity::Danger,
                "Action Needed",
                format!(
                    "The job title \"{job_title}\" (or close variants) was not strongly detected in your resume's summary or experience sections. Ensure your resume clearly reflects the target role."
                ),
            ));
            0.0
        };

        AnalyzerReport::new(self.kind(), score, fragment)
    }
}
