use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::SubmissionService;
use super::enrich::enrich_with_assignments;
use crate::models::submissions::entities::PENDING_STATUS;
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::document::documents_to_json;

/// 列出状态为 Pending 的提交，并附带作业标题与分值
pub async fn list_pending_submissions(
    service: &SubmissionService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let result = match storage.list_submissions_by_status(PENDING_STATUS).await {
        Ok(submissions) => enrich_with_assignments(storage.as_ref(), submissions).await,
        Err(e) => Err(e),
    };

    match result {
        Ok(submissions) => Ok(HttpResponse::Ok().json(documents_to_json(submissions))),
        Err(e) => {
            tracing::error!("Failed to list pending submissions: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::DatabaseError,
                    format!("Failed to list pending submissions: {e}"),
                )),
            )
        }
    }
}
