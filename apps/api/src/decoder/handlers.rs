use axum::Json;
use serde::{Deserialize, Serialize};

use crate::decoder::analyzer::{analyze, AnalysisResult};

#[derive(Deserialize)]
pub struct AnalyzeRequest {
    /// Typically a role's title, description, and requirements joined by
    /// newlines, but any text is accepted.
    pub text: String,
}

/// Analysis plus the display tokens for the rating, so clients render the
/// badge without knowing the band thresholds.
#[derive(Serialize)]
pub struct AnalyzeResponse {
    #[serde(flatten)]
    pub result: AnalysisResult,
    pub rating_label: &'static str,
    pub rating_color: &'static str,
}

/// POST /api/v1/decoder/analyze
///
/// The analyzer is total; every input produces a well-formed result, so
/// this handler cannot fail.
pub async fn handle_analyze(Json(req): Json<AnalyzeRequest>) -> Json<AnalyzeResponse> {
    let result = analyze(&req.text);
    Json(AnalyzeResponse {
        rating_label: result.rating.label(),
        rating_color: result.rating.color(),
        result,
    })
}
