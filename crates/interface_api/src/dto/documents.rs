//! Document DTOs

use serde::Deserialize;
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct AnalyzeDocumentRequest {
    #[validate(length(max = 100_000))]
    pub text: String,
}
