//! Axum route handlers for the Scan API.

use axum::{extract::State, Json};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::engine::{analyze, AnalysisInput};
use crate::errors::AppError;
use crate::render::{render_scan, ScanView, UsageNotice};
use crate::scan::session::ScanSession;
use crate::state::AppState;
use crate::usage::MonthKey;

const MISSING_INFORMATION: &str = "Missing Information: Please paste or upload your resume content and paste the job description to run the scan.";

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ScanRequest {
    pub resume_text: String,
    pub job_text: String,
}

#[derive(Debug, Serialize)]
pub struct ScanResponse {
    pub scan_id: Uuid,
    #[serde(flatten)]
    pub view: ScanView,
}

impl ScanRequest {
    /// Both texts must contain something besides whitespace. The engine would
    /// accept blanks, but a blank scan is never what the user meant.
    fn into_input(self) -> Result<AnalysisInput, AppError> {
        if self.resume_text.trim().is_empty() || self.job_text.trim().is_empty() {
            return Err(AppError::Validation(MISSING_INFORMATION.to_string()));
        }
        Ok(AnalysisInput::new(self.resume_text, self.job_text))
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/scan
///
/// Free tier: verdict and percentage only. Detailed feedback stays locked.
pub async fn handle_scan(Json(request): Json<ScanRequest>) -> Result<Json<ScanResponse>, AppError> {
    let input = request.into_input()?;
    let scan_id = Uuid::new_v4();

    let mut session = ScanSession::new();
    let lock = session.lock_state();
    let result = session.record_scan(analyze(&input));

    info!(
        %scan_id,
        verdict = result.verdict.as_str(),
        percentage = %result.percentage,
        "free scan completed"
    );

    Ok(Json(ScanResponse {
        scan_id,
        view: render_scan(result, lock, None),
    }))
}

/// POST /api/v1/scan/unlock
///
/// Simulated payment confirmation. The engine is re-run on the same inputs
/// (it is idempotent), the detailed report is returned, and this month's
/// detailed-scan counter is bumped after the notice is computed.
pub async fn handle_unlock(
    State(state): State<AppState>,
    Json(request): Json<ScanRequest>,
) -> Result<Json<ScanResponse>, AppError> {
    let input = request.into_input()?;
    let scan_id = Uuid::new_v4();
    let month = MonthKey::from_date(Utc::now().date_naive());

    let mut session = ScanSession::new();
    session.confirm_payment();
    let lock = session.lock_state();
    let result = session.record_scan(analyze(&input));

    let notice = UsageNotice {
        monthly_scans: state.usage.read(&month).await?,
        threshold: state.config.usage_warning_threshold,
    };
    let view = render_scan(result, lock, Some(notice));

    let count = state.usage.increment(&month).await?;
    info!(
        %scan_id,
        %month,
        detailed_scans = count,
        verdict = result.verdict.as_str(),
        percentage = %result.percentage,
        "detailed scan unlocked"
    );

    Ok(Json(ScanResponse { scan_id, view }))
}
