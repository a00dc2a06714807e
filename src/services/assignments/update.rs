use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use mongodb::bson::oid::ObjectId;

use super::AssignmentService;
use crate::models::assignments::requests::UpdateAssignmentRequest;
use crate::models::{ApiResponse, ErrorCode, UpdateOutcome};
use crate::storage::UpdatePolicy;

pub async fn update_assignment(
    service: &AssignmentService,
    request: &HttpRequest,
    assignment_id: ObjectId,
    req: UpdateAssignmentRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    let upsert = UpdatePolicy::from_request(request).upsert;

    let set = match req.into_set_document() {
        Ok(set) => set,
        Err(e) => {
            return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                ErrorCode::InvalidPayload,
                format!("Invalid assignment payload: {e}"),
            )));
        }
    };

    match storage.update_assignment(assignment_id, set, upsert).await {
        Ok(ack) => match ack.outcome {
            UpdateOutcome::NotFound => Ok(HttpResponse::NotFound().json(ApiResponse::error(
                ErrorCode::AssignmentNotFound,
                ack,
                "Assignment not found",
            ))),
            outcome => {
                tracing::info!("Assignment {} update outcome: {:?}", assignment_id, outcome);
                Ok(HttpResponse::Ok().json(ack))
            }
        },
        Err(e) => {
            tracing::error!("Failed to update assignment {}: {}", assignment_id, e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::DatabaseError,
                    format!("Failed to update assignment: {e}"),
                )),
            )
        }
    }
}
