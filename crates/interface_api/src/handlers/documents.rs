//! Document handlers

use axum::Json;
use domain_documents::{classify_and_extract, DocumentAnalysis};
use validator::Validate;

use crate::dto::documents::AnalyzeDocumentRequest;
use crate::error::ApiError;

/// Classifies a text and extracts its fields
pub async fn analyze_document(
    Json(request): Json<AnalyzeDocumentRequest>,
) -> Result<Json<DocumentAnalysis>, ApiError> {
    request.validate()?;
    Ok(Json(classify_and_extract(&request.text)))
}
