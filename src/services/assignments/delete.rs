use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use mongodb::bson::oid::ObjectId;

use super::AssignmentService;
use crate::models::{ApiResponse, ErrorCode};

/// 删除作业，未命中时返回 deletedCount 为 0 的确认
pub async fn delete_assignment(
    service: &AssignmentService,
    request: &HttpRequest,
    assignment_id: ObjectId,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.delete_assignment(assignment_id).await {
        Ok(ack) => {
            tracing::info!(
                "Assignment {} delete acknowledged, {} document(s) removed",
                assignment_id,
                ack.deleted_count
            );
            Ok(HttpResponse::Ok().json(ack))
        }
        Err(e) => {
            tracing::error!("Failed to delete assignment {}: {}", assignment_id, e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::DatabaseError,
                    format!("Failed to delete assignment: {e}"),
                )),
            )
        }
    }
}
