//! Location and work-eligibility detection. Two independent 50-point halves.

use crate::engine::feedback::{
    AnalyzerKind, AnalyzerReport, FeedbackBlock, FeedbackFragment, Severity,
};
use crate::engine::patterns::{ELIGIBILITY_RE, LOCATION_RE};
use crate::engine::{Analyzer, ScanContext};

const LOCATION_POINTS: f64 = 50.0;
const ELIGIBILITY_POINTS: f64 = 50.0;

/// The trimmed, lower-cased `Location:` line, or an empty string when absent.
pub fn extract_job_location(job_text: &str) -> String {
    LOCATION_RE
        .captures(job_text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_lowercase())
        .unwrap_or_default()
}

pub fn has_work_eligibility(resume_lower: &str) -> bool {
    ELIGIBILITY_RE.is_match(resume_lower)
}

pub struct LocationEligibilityAnalyzer;

impl Analyzer for LocationEligibilityAnalyzer {
    fn kind(&self) -> AnalyzerKind {
        AnalyzerKind::LocationEligibility
    }

    fn analyze(&self, ctx: &ScanContext<'_>) -> AnalyzerReport {
        let mut fragment = FeedbackFragment::new(self.kind());
        let mut score = 0.0;

        let location = extract_job_location(ctx.job_text);
        if location.is_empty() {
            fragment.push(FeedbackBlock::new(
                Severity::Neutral,
                "Job description did not specify a clear location for direct matching.",
            ));
        } else if ctx.resume_lower.contains(location.as_str()) {
            score += LOCATION_POINTS;
            fragment.push(FeedbackBlock::new(
                Severity::Success,
                format!("Job location \"{location}\" found in your resume."),
            ));
        } else {
            fragment.push(FeedbackBlock::labeled(
                Severity::Warning,
                "Suggestion",
                format!(
                    "The job description mentions \"{location}\". Ensure your resume clearly states your location if relevant, especially for local roles."
                ),
            ));
        }

        if has_work_eligibility(&ctx.resume_lower) {
            score += ELIGIBILITY_POINTS;
            fragment.push(FeedbackBlock::new(
                Severity::Success,
                "Work eligibility/authorization phrases detected. Good for ATS!",
            ));
        } else {
            fragment.push(FeedbackBlock::labeled(
                Severity::Warning,
                "Suggestion",
                "For roles requiring specific work authorization, consider adding a phrase like \"Authorized to work in [Country]\" to your resume.",
            ));
        }

        AnalyzerReport::new(self.kind(), score, fragment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn analyze(resume: &str, job: &str) -> AnalyzerReport {
        LocationEligibilityAnalyzer.analyze(&ScanContext::new(resume, job))
    }

    #[test]
    fn test_location_and_eligibility_full_score() {
        let report = analyze(
            "Based in Austin, TX. US Citizen.",
            "Job Title: Analyst\nLocation: Austin, TX\n",
        );
        assert_eq!(report.score.value, 100.0);
        assert_eq!(report.fragment.blocks[0].severity, Severity::Success);
        assert_eq!(report.fragment.blocks[1].severity, Severity::Success);
    }

    #[test]
    fn test_unspecified_location_is_neutral_without_penalty() {
        let report = analyze("Authorized to work in the US", "Job Title: Analyst");
        assert_eq!(report.score.value, 50.0);
        assert_eq!(report.fragment.blocks[0].severity, Severity::Neutral);
        assert!(report.fragment.blocks[0].text.contains("did not specify"));
    }

    #[test]
    fn test_unspecified_location_without_eligibility_scores_zero() {
        let report = analyze("Jane Doe", "Job Title: Analyst");
        assert_eq!(report.score.value, 0.0);
        assert_eq!(report.fragment.blocks[1].severity, Severity::Warning);
    }

    #[test]
    fn test_location_mismatch_warns() {
        let report = analyze("Lives in Boston", "Location: Seattle, WA");
        assert_eq!(report.score.value, 0.0);
        assert_eq!(report.fragment.blocks[0].severity, Severity::Warning);
        assert!(report.fragment.blocks[0].text.contains("seattle, wa"));
    }

    #[test]
    fn test_whitespace_after_colon_may_span_newline() {
        assert_eq!(extract_job_location("Location:   \nJob Title: X"), "job title: x");
        assert_eq!(extract_job_location("Location:"), "");
    }
}
