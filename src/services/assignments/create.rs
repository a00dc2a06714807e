use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::AssignmentService;
use crate::models::common::JsonObject;
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::document::json_object_to_document;

pub async fn create_assignment(
    service: &AssignmentService,
    request: &HttpRequest,
    body: JsonObject,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 不做字段校验，原样写入
    let document = match json_object_to_document(body) {
        Ok(document) => document,
        Err(e) => {
            return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                ErrorCode::InvalidPayload,
                format!("Invalid assignment payload: {e}"),
            )));
        }
    };

    match storage.create_assignment(document).await {
        Ok(ack) => {
            tracing::info!("Assignment {} created", ack.inserted_id);
            Ok(HttpResponse::Ok().json(ack))
        }
        Err(e) => {
            tracing::error!("Failed to create assignment: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::DatabaseError,
                    format!("Failed to create assignment: {e}"),
                )),
            )
        }
    }
}
