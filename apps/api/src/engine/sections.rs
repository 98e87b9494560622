//! Section labeling: standard resume headers vs "creative" header phrasing.
//!
//! Per-section feedback comes from standard-header matching alone, while any
//! creative phrase forces the score to 0. The two can disagree on purpose.

use crate::engine::feedback::{
    AnalyzerKind, AnalyzerReport, FeedbackBlock, FeedbackFragment, Severity,
};
use crate::engine::patterns::{CREATIVE_SECTION_PHRASES, STANDARD_SECTIONS};
use crate::engine::{Analyzer, ScanContext};

#[derive(Debug, Clone, PartialEq)]
pub struct SectionFinding {
    pub label: &'static str,
    pub found: bool,
}

/// Tests each standard section against the raw resume text, in table order.
pub fn detect_standard_sections(resume_text: &str) -> Vec<SectionFinding> {
    STANDARD_SECTIONS
        .iter()
        .map(|section| SectionFinding {
            label: section.label,
            found: section.regex.is_match(resume_text),
        })
        .collect()
}

/// Creative phrases present in the lower-cased resume, in table order.
pub fn detect_creative_phrases(resume_lower: &str) -> Vec<&'static str> {
    CREATIVE_SECTION_PHRASES
        .iter()
        .copied()
        .filter(|phrase| resume_lower.contains(phrase))
        .collect()
}

pub struct SectionAnalyzer;

impl Analyzer for SectionAnalyzer {
    fn kind(&self) -> AnalyzerKind {
        AnalyzerKind::SectionLabeling
    }

    fn analyze(&self, ctx: &ScanContext<'_>) -> AnalyzerReport {
        let findings = detect_standard_sections(ctx.resume_text);
        let creative = detect_creative_phrases(&ctx.resume_lower);
        let mut fragment = FeedbackFragment::new(self.kind());

        for finding in &findings {
            let block = if finding.found {
                FeedbackBlock::new(
                    Severity::Success,
                    format!("\"{}\" section found with standard heading.", finding.label),
                )
            } else {
                FeedbackBlock::labeled(
                    Severity::Danger,
                    "Formatting Alert",
                    format!(
                        "\"{}\" section not clearly found with a standard heading. This can hurt ATS parsing.",
                        finding.label
                    ),
                )
            };
            fragment.push(block);
        }

        let score = if creative.is_empty() {
            let found = findings.iter().filter(|f| f.found).count();
            found as f64 / findings.len() as f64 * 100.0
        } else {
            fragment.push(FeedbackBlock::labeled(
                Severity::Danger,
                "Critical Formatting Alert",
                format!(
                    "Detected non-standard section headings or phrases like \"{}\". ATS systems strongly prefer standard labels (e.g., \"Experience\", \"Education\", \"Skills\"). This significantly lowers parseability.",
                    creative.join("\", \"")
                ),
            ));
            0.0
        };

        AnalyzerReport::new(self.kind(), score, fragment)
    }
}
