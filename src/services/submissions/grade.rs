use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use mongodb::bson::oid::ObjectId;

use super::SubmissionService;
use crate::models::submissions::requests::GradeSubmissionRequest;
use crate::models::{ApiResponse, ErrorCode, UpdateOutcome};
use crate::storage::UpdatePolicy;

/// 批改提交：覆盖 given_mark / feedback / status
pub async fn grade_submission(
    service: &SubmissionService,
    request: &HttpRequest,
    submission_id: ObjectId,
    req: GradeSubmissionRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    let upsert = UpdatePolicy::from_request(request).upsert;

    let set = match req.into_set_document() {
        Ok(set) => set,
        Err(e) => {
            return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                ErrorCode::InvalidPayload,
                format!("Invalid grading payload: {e}"),
            )));
        }
    };

    match storage.update_submission(submission_id, set, upsert).await {
        Ok(ack) if ack.outcome == UpdateOutcome::NotFound => {
            Ok(HttpResponse::NotFound().json(ApiResponse::error(
                ErrorCode::SubmissionNotFound,
                ack,
                "Submission not found",
            )))
        }
        Ok(ack) => {
            tracing::info!(
                "Submission {} graded, outcome: {:?}",
                submission_id,
                ack.outcome
            );
            Ok(HttpResponse::Ok().json(ack))
        }
        Err(e) => {
            tracing::error!("Failed to grade submission {}: {}", submission_id, e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::DatabaseError,
                    format!("Failed to grade submission: {e}"),
                )),
            )
        }
    }
}
