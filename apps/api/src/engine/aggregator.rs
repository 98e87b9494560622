//! Aggregator: runs the five analyzers and folds their reports into a `ScanResult`.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::engine::feedback::{AnalyzerKind, AnalyzerReport, FeedbackFragment, SubScore};
use crate::engine::formatting::FormattingAnalyzer;
use crate::engine::keyword::KeywordAnalyzer;
use crate::engine::location::LocationEligibilityAnalyzer;
use crate::engine::sections::SectionAnalyzer;
use crate::engine::title::TitleAnalyzer;
use crate::engine::{AnalysisInput, Analyzer, ScanContext};

const PASS_THRESHOLD: f64 = 50.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    #[serde(rename = "PASS")]
    Pass,
    #[serde(rename = "FAIL")]
    Fail,
}

impl Verdict {
    pub fn as_str(self) -> &'static str {
        match self {
            Verdict::Pass => "PASS",
            Verdict::Fail => "FAIL",
        }
    }
}

/// Final output of one scan. Immutable; nothing about it is persisted by the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScanResult {
    pub verdict: Verdict,
    /// Mean of the five sub-scores, always two decimal places.
    pub percentage: String,
    pub sub_scores: Vec<SubScore>,
    pub feedback: Vec<FeedbackFragment>,
}

/// The analyzers in reporting order. Reports are joined in this order regardless
/// of how they are evaluated.
const ANALYZERS: [&dyn Analyzer; 5] = [
    &KeywordAnalyzer,
    &TitleAnalyzer,
    &SectionAnalyzer,
    &LocationEligibilityAnalyzer,
    &FormattingAnalyzer,
];

/// Scores a resume against a job description. Total over all string inputs.
pub fn analyze(input: &AnalysisInput) -> ScanResult {
    let ctx = ScanContext::from_input(input);
    let reports: Vec<AnalyzerReport> = ANALYZERS.iter().map(|a| a.analyze(&ctx)).collect();
    aggregate(reports)
}

/// Rounds half away from zero to cents.
fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

pub(crate) fn aggregate(reports: Vec<AnalyzerReport>) -> ScanResult {
    debug_assert!(reports
        .iter()
        .map(|r| r.score.analyzer)
        .eq(AnalyzerKind::ALL));
    let count = reports.len().max(1) as f64;
    let total: f64 = reports.iter().map(|r| r.score.value).sum();
    let overall = round_to_cents(total / count);

    let verdict = if overall >= PASS_THRESHOLD {
        Verdict::Pass
    } else {
        Verdict::Fail
    };

    for report in &reports {
        debug!(analyzer = ?report.score.analyzer, score = report.score.value, "sub-score");
    }
    debug!(overall, verdict = verdict.as_str(), "scan aggregated");

    let (sub_scores, feedback): (Vec<SubScore>, Vec<FeedbackFragment>) = reports
        .into_iter()
        .map(|r| (r.score, r.fragment))
        .unzip();

    ScanResult {
        verdict,
        percentage: format!("{overall:.2}"),
        sub_scores,
        feedback,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn report(kind: AnalyzerKind, value: f64) -> AnalyzerReport {
        AnalyzerReport::new(kind, value, FeedbackFragment::new(kind))
    }

    fn reports(values: [f64; 5]) -> Vec<AnalyzerReport> {
        AnalyzerKind::ALL
            .iter()
            .zip(values)
            .map(|(kind, v)| report(*kind, v))
            .collect()
    }

    fn sub_score(result: &ScanResult, kind: AnalyzerKind) -> f64 {
        result
            .sub_scores
            .iter()
            .find(|s| s.analyzer == kind)
            .unwrap()
            .value
    }

    const FULL_RESUME: &str = "Jane Doe\n\
        Contact\njane@example.com | Austin, TX\n\
        Summary\nSenior data analyst. Authorized to work in the US.\n\
        Experience\nAcme Corp\n- Built SQL pipelines in Python\n- Led dashboards\n\
        Education\nBS Statistics\n\
        Skills\nSQL Python Tableau\n\
        Certifications\nTableau Desktop Specialist";

    const FULL_JOB: &str = "Job Title: Senior Data Analyst\nLocation: Austin, TX\nSQL Python Tableau";

    #[test]
    fn test_all_fifty_is_pass_at_boundary() {
        let result = aggregate(reports([50.0; 5]));
        assert_eq!(result.percentage, "50.00");
        assert_eq!(result.verdict, Verdict::Pass);
    }

    #[test]
    fn test_just_below_fifty_fails() {
        let result = aggregate(reports([50.0, 50.0, 50.0, 50.0, 49.9]));
        assert_eq!(result.percentage, "49.98");
        assert_eq!(result.verdict, Verdict::Fail);
    }

    #[test]
    fn test_percentage_rounds_half_away_from_zero() {
        // mean = 0.125
        let result = aggregate(reports([0.625, 0.0, 0.0, 0.0, 0.0]));
        assert_eq!(result.percentage, "0.13");
    }

    #[test]
    fn test_empty_job_text_never_panics() {
        let result = analyze(&AnalysisInput::new("anything", ""));
        assert_eq!(sub_score(&result, AnalyzerKind::KeywordAlignment), 0.0);
        assert_eq!(result.feedback.len(), 5);
    }

    #[test]
    fn test_empty_inputs_fail_gracefully() {
        let result = analyze(&AnalysisInput::default());
        // only formatting keeps its baseline: no experience section, no symbols
        assert_eq!(result.percentage, "20.00");
        assert_eq!(result.verdict, Verdict::Fail);
    }

    #[test]
    fn test_feedback_follows_analyzer_order() {
        let result = analyze(&AnalysisInput::new(FULL_RESUME, FULL_JOB));
        let order: Vec<_> = result.feedback.iter().map(|f| f.analyzer).collect();
        assert_eq!(order, AnalyzerKind::ALL.to_vec());
        let score_order: Vec<_> = result.sub_scores.iter().map(|s| s.analyzer).collect();
        assert_eq!(score_order, AnalyzerKind::ALL.to_vec());
    }

    #[test]
    fn test_strong_resume_passes() {
        let result = analyze(&AnalysisInput::new(FULL_RESUME, FULL_JOB));
        assert_eq!(sub_score(&result, AnalyzerKind::JobTitleMatch), 100.0);
        assert_eq!(sub_score(&result, AnalyzerKind::SectionLabeling), 100.0);
        assert_eq!(sub_score(&result, AnalyzerKind::LocationEligibility), 100.0);
        assert_eq!(sub_score(&result, AnalyzerKind::FormattingReadability), 100.0);
        assert_eq!(result.verdict, Verdict::Pass);
    }

    #[test]
    fn test_emoji_zeroes_formatting_only() {
        let resume = format!("{FULL_RESUME}\n🙂");
        let result = analyze(&AnalysisInput::new(resume, FULL_JOB));
        assert_eq!(sub_score(&result, AnalyzerKind::FormattingReadability), 0.0);
        assert_eq!(sub_score(&result, AnalyzerKind::SectionLabeling), 100.0);
        let formatting = &result.feedback[4];
        assert!(formatting
            .blocks
            .iter()
            .any(|b| b.label.as_deref() == Some("Critical Alert (Symbols/Emojis)")));
    }

    #[test]
    fn test_creative_header_zeroes_sections() {
        let resume = format!("{FULL_RESUME}\nMy Toolbox\nVim");
        let result = analyze(&AnalysisInput::new(resume, FULL_JOB));
        assert_eq!(sub_score(&result, AnalyzerKind::SectionLabeling), 0.0);
    }

    #[test]
    fn test_no_location_line_only_eligibility_counts() {
        let job = "Job Title: Senior Data Analyst\nSQL Python";
        let result = analyze(&AnalysisInput::new(FULL_RESUME, job));
        assert_eq!(sub_score(&result, AnalyzerKind::LocationEligibility), 50.0);
        let blocks = &result.feedback[3].blocks;
        assert_eq!(blocks[0].severity, crate::engine::Severity::Neutral);
    }

    #[test]
    fn test_verdict_serializes_upper_case() {
        let result = aggregate(reports([100.0; 5]));
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["verdict"], "PASS");
        assert_eq!(json["percentage"], "100.00");
    }

    proptest! {
        #[test]
        fn prop_scores_bounded_and_verdict_consistent(
            resume in "(?s).{0,300}",
            job in "(?s).{0,300}",
        ) {
            let result = analyze(&AnalysisInput::new(resume, job));
            prop_assert_eq!(result.sub_scores.len(), 5);
            for s in &result.sub_scores {
                prop_assert!((0.0..=100.0).contains(&s.value));
            }
            let pct: f64 = result.percentage.parse().unwrap();
            prop_assert!((0.0..=100.0).contains(&pct));
            prop_assert_eq!(result.percentage.split('.').nth(1).map(str::len), Some(2));
            prop_assert_eq!(result.verdict == Verdict::Pass, pct >= 50.0);
        }

        #[test]
        fn prop_analysis_is_idempotent(
            resume in "(?s).{0,300}",
            job in "(?s).{0,300}",
        ) {
            let input = AnalysisInput::new(resume, job);
            prop_assert_eq!(analyze(&input), analyze(&input));
        }

        #[test]
        fn prop_symbol_always_zeroes_formatting(
            body in "[a-z\n\\-& ]{0,200}",
        ) {
            let resume = format!("Experience\n- {body}\u{1F642}");
            let result = analyze(&AnalysisInput::new(resume, "Job Title: Analyst"));
            prop_assert_eq!(sub_score(&result, AnalyzerKind::FormattingReadability), 0.0);
        }
    }
}
