use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::SubmissionService;
use crate::models::common::JsonObject;
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::document::json_object_to_document;

pub async fn create_submission(
    service: &SubmissionService,
    request: &HttpRequest,
    body: JsonObject,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let document = match json_object_to_document(body) {
        Ok(document) => document,
        Err(e) => {
            return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                ErrorCode::InvalidPayload,
                format!("Invalid submission payload: {e}"),
            )));
        }
    };

    match storage.create_submission(document).await {
        Ok(ack) => {
            tracing::info!("Submission {} created", ack.inserted_id);
            Ok(HttpResponse::Ok().json(ack))
        }
        Err(e) => {
            tracing::error!("Failed to create submission: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::DatabaseError,
                    format!("Failed to create submission: {e}"),
                )),
            )
        }
    }
}
