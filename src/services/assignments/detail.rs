use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use mongodb::bson::oid::ObjectId;
use serde_json::Value;

use super::AssignmentService;
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::document::document_to_json;

/// 获取作业详情，不存在时返回 `null`
pub async fn get_assignment(
    service: &AssignmentService,
    request: &HttpRequest,
    assignment_id: ObjectId,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_assignment_by_id(assignment_id).await {
        Ok(Some(assignment)) => Ok(HttpResponse::Ok().json(document_to_json(assignment))),
        Ok(None) => {
            tracing::debug!("Assignment {} not found", assignment_id);
            Ok(HttpResponse::Ok().json(Value::Null))
        }
        Err(e) => {
            tracing::error!("Failed to query assignment {}: {}", assignment_id, e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::DatabaseError,
                    format!("Failed to query assignment: {e}"),
                )),
            )
        }
    }
}
