//! Formatting / readability: dense experience text, emoji and symbol usage, ampersands.

use crate::engine::feedback::{
    AnalyzerKind, AnalyzerReport, FeedbackBlock, FeedbackFragment, Severity,
};
use crate::engine::patterns::{
    is_problematic_symbol, AMPERSAND_LIMIT, CLEAR_STRUCTURE_RE, EXPERIENCE_START_RE,
    SECTION_BOUNDARY_RE,
};
use crate::engine::{Analyzer, ScanContext};

const BASELINE_SCORE: f64 = 100.0;
const DENSE_TEXT_PENALTY: f64 = 50.0;
const AMPERSAND_PENALTY: f64 = 20.0;

/// The experience block: from the first experience-type header up to the next
/// standard header word, or to the end of the text.
pub fn experience_section(resume_text: &str) -> Option<&str> {
    let start = EXPERIENCE_START_RE.find(resume_text)?;
    let rest = &resume_text[start.end()..];
    let end = SECTION_BOUNDARY_RE
        .find(rest)
        .map(|m| start.end() + m.start())
        .unwrap_or(resume_text.len());
    Some(&resume_text[start.start()..end])
}

pub fn has_clear_structure(section: &str) -> bool {
    CLEAR_STRUCTURE_RE.is_match(section)
}

pub fn contains_problematic_symbols(text: &str) -> bool {
    text.chars().any(is_problematic_symbol)
}

pub fn count_ampersands(text: &str) -> usize {
    text.matches('&').count()
}

pub struct FormattingAnalyzer;

impl Analyzer for FormattingAnalyzer {
    fn kind(&self) -> AnalyzerKind {
        AnalyzerKind::FormattingReadability
    }

    fn analyze(&self, ctx: &ScanContext<'_>) -> AnalyzerReport {
        let text = ctx.resume_text;
        let mut fragment = FeedbackFragment::new(self.kind());
        let mut score = BASELINE_SCORE;

        match experience_section(text) {
            Some(section) if has_clear_structure(section) => {
                fragment.push(FeedbackBlock::new(
                    Severity::Success,
                    "Experience section appears to have clear line breaks/bullet points.",
                ));
            }
            Some(_) => {
                score -= DENSE_TEXT_PENALTY;
                fragment.push(FeedbackBlock::labeled(
                    Severity::Danger,
                    "Critical Alert (Dense Text)",
                    "Your experience section appears to be a dense block of text without clear bullet points or line breaks. ATS systems struggle to parse unstructured content.",
                ));
            }
            // A missing section is not necessarily bad formatting.
            None => {
                fragment.push(FeedbackBlock::new(
                    Severity::Neutral,
                    "Could not definitively assess experience section formatting. Ensure it is clearly structured with bullet points.",
                ));
            }
        }

        if contains_problematic_symbols(text) {
            score = 0.0;
            fragment.push(FeedbackBlock::labeled(
                Severity::Danger,
                "Critical Alert (Symbols/Emojis)",
                "Your resume contains emojis or other complex/unreadable symbols. These are highly problematic for ATS and should be removed entirely.",
            ));
        } else if count_ampersands(text) > AMPERSAND_LIMIT {
            score -= AMPERSAND_PENALTY;
            fragment.push(FeedbackBlock::labeled(
                Severity::Warning,
                "Suggestion (Symbols)",
                "Your resume contains several ampersands (&). While some are fine, excessive use can sometimes confuse older ATS. Consider using \"and\" instead.",
            ));
        } else {
            fragment.push(FeedbackBlock::new(
                Severity::Success,
                "No problematic emojis or excessive symbols detected.",
            ));
        }

        AnalyzerReport::new(self.kind(), score.max(0.0), fragment)
    }
}
