use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::AssignmentService;
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::document::documents_to_json;

/// 列出全部作业，不分页不筛选
pub async fn list_assignments(
    service: &AssignmentService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_assignments().await {
        Ok(assignments) => Ok(HttpResponse::Ok().json(documents_to_json(assignments))),
        Err(e) => {
            tracing::error!("Failed to list assignments: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::DatabaseError,
                    format!("Failed to list assignments: {e}"),
                )),
            )
        }
    }
}
