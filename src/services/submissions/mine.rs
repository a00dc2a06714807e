use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::SubmissionService;
use super::enrich::enrich_with_assignments;
use crate::middlewares::RequireJWT;
use crate::middlewares::require_jwt::UNAUTHORIZED_MESSAGE;
use crate::models::submissions::requests::MySubmissionQuery;
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::document::documents_to_json;

pub const FORBIDDEN_MESSAGE: &str = "forbidden access";

/// 列出当前会话用户的提交
///
/// 查询参数中的邮箱必须与会话 Claims 中的邮箱一致。
pub async fn list_my_submissions(
    service: &SubmissionService,
    request: &HttpRequest,
    query: MySubmissionQuery,
) -> ActixResult<HttpResponse> {
    let Some(claims) = RequireJWT::extract_claims(request) else {
        return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::Unauthorized,
            UNAUTHORIZED_MESSAGE,
        )));
    };

    let email = match (query.email, claims.email()) {
        (Some(requested), Some(owner)) if requested == owner => requested,
        (requested, owner) => {
            tracing::warn!(
                "Rejected submission listing for {:?}, session belongs to {:?}",
                requested,
                owner
            );
            return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
                ErrorCode::Forbidden,
                FORBIDDEN_MESSAGE,
            )));
        }
    };

    let storage = service.get_storage(request);
    let result = match storage.list_submissions_by_email(&email).await {
        Ok(submissions) => enrich_with_assignments(storage.as_ref(), submissions).await,
        Err(e) => Err(e),
    };

    match result {
        Ok(submissions) => Ok(HttpResponse::Ok().json(documents_to_json(submissions))),
        Err(e) => {
            tracing::error!("Failed to list submissions for {}: {}", email, e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::DatabaseError,
                    format!("Failed to list submissions: {e}"),
                )),
            )
        }
    }
}
