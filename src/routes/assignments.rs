use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::models::assignments::requests::UpdateAssignmentRequest;
use crate::models::common::JsonObject;
use crate::services::AssignmentService;
use crate::utils::SafeObjectId;

// 懒加载的全局 AssignmentService 实例
static ASSIGNMENT_SERVICE: Lazy<AssignmentService> = Lazy::new(AssignmentService::new_lazy);

// 列出作业
pub async fn list_assignments(req: HttpRequest) -> ActixResult<HttpResponse> {
    ASSIGNMENT_SERVICE.list_assignments(&req).await
}

// 创建作业
pub async fn create_assignment(
    req: HttpRequest,
    body: web::Json<JsonObject>,
) -> ActixResult<HttpResponse> {
    ASSIGNMENT_SERVICE
        .create_assignment(&req, body.into_inner())
        .await
}

// 获取作业详情
pub async fn get_assignment(req: HttpRequest, path: SafeObjectId) -> ActixResult<HttpResponse> {
    ASSIGNMENT_SERVICE.get_assignment(&req, path.0).await
}

// 更新作业
pub async fn update_assignment(
    req: HttpRequest,
    path: SafeObjectId,
    body: web::Json<UpdateAssignmentRequest>,
) -> ActixResult<HttpResponse> {
    ASSIGNMENT_SERVICE
        .update_assignment(&req, path.0, body.into_inner())
        .await
}

// 删除作业
pub async fn delete_assignment(req: HttpRequest, path: SafeObjectId) -> ActixResult<HttpResponse> {
    ASSIGNMENT_SERVICE.delete_assignment(&req, path.0).await
}

// 配置路由
pub fn configure_assignment_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/assignments")
            .service(
                web::resource("")
                    .route(web::get().to(list_assignments))
                    .route(web::post().to(create_assignment)),
            )
            .service(
                web::resource("/{id}")
                    .route(web::get().to(get_assignment))
                    .route(web::put().to(update_assignment))
                    .route(web::delete().to(delete_assignment)),
            ),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::failing_storage::FailingStorage;
    use crate::storage::memory_storage::MemoryStorage;
    use crate::storage::{Storage, UpdatePolicy};
    use crate::utils::json_error_handler;
    use actix_web::{App, http::StatusCode, test};
    use mongodb::bson::oid::ObjectId;
    use serde_json::{Value, json};
    use std::sync::Arc;

    fn memory_storage() -> Arc<dyn Storage> {
        Arc::new(MemoryStorage::new())
    }

    #[actix_web::test]
    async fn test_create_then_get() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(memory_storage()))
                .configure(configure_assignment_routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/assignments")
            .set_json(json!({ "title": "Algebra 1", "marks": 100, "email": "t@x.com" }))
            .to_request();
        let ack: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(ack["acknowledged"], true);
        let id = ack["insertedId"].as_str().unwrap().to_string();
        assert_eq!(id.len(), 24);

        let req = test::TestRequest::get()
            .uri(&format!("/assignments/{id}"))
            .to_request();
        let assignment: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(assignment["_id"], id);
        assert_eq!(assignment["title"], "Algebra 1");
        assert_eq!(assignment["marks"], 100);
        assert_eq!(assignment["email"], "t@x.com");

        let req = test::TestRequest::get().uri("/assignments").to_request();
        let all: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(all.as_array().map(Vec::len), Some(1));
    }

    #[actix_web::test]
    async fn test_delete_then_get_returns_null() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(memory_storage()))
                .configure(configure_assignment_routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/assignments")
            .set_json(json!({ "title": "Essay" }))
            .to_request();
        let ack: Value = test::call_and_read_body_json(&app, req).await;
        let id = ack["insertedId"].as_str().unwrap().to_string();

        let req = test::TestRequest::delete()
            .uri(&format!("/assignments/{id}"))
            .to_request();
        let deleted: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(deleted, json!({ "acknowledged": true, "deletedCount": 1 }));

        let req = test::TestRequest::get()
            .uri(&format!("/assignments/{id}"))
            .to_request();
        let assignment: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(assignment, Value::Null);

        let req = test::TestRequest::delete()
            .uri(&format!("/assignments/{id}"))
            .to_request();
        let deleted: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(deleted["deletedCount"], 0);
    }

    #[actix_web::test]
    async fn test_update_unknown_id_inserts_whitelisted_fields() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(memory_storage()))
                .configure(configure_assignment_routes),
        )
        .await;
        let id = ObjectId::new().to_hex();

        let req = test::TestRequest::put()
            .uri(&format!("/assignments/{id}"))
            .set_json(json!({ "title": "Geometry", "marks": 50, "owner": "mallory" }))
            .to_request();
        let ack: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(ack["matchedCount"], 0);
        assert_eq!(ack["upsertedCount"], 1);
        assert_eq!(ack["upsertedId"], id);
        assert_eq!(ack["outcome"], "inserted");

        let req = test::TestRequest::get()
            .uri(&format!("/assignments/{id}"))
            .to_request();
        let assignment: Value = test::call_and_read_body_json(&app, req).await;
        let mut keys: Vec<&str> = assignment
            .as_object()
            .unwrap()
            .keys()
            .map(String::as_str)
            .collect();
        keys.sort_unstable();
        assert_eq!(
            keys,
            [
                "_id",
                "date",
                "description",
                "difficulty",
                "email",
                "image",
                "marks",
                "title"
            ]
        );
        assert_eq!(assignment["title"], "Geometry");
        assert_eq!(assignment["description"], Value::Null);
    }

    #[actix_web::test]
    async fn test_update_existing_assignment() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(memory_storage()))
                .configure(configure_assignment_routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/assignments")
            .set_json(json!({ "title": "Draft", "marks": 10 }))
            .to_request();
        let ack: Value = test::call_and_read_body_json(&app, req).await;
        let id = ack["insertedId"].as_str().unwrap().to_string();

        let req = test::TestRequest::put()
            .uri(&format!("/assignments/{id}"))
            .set_json(json!({ "title": "Final", "marks": 10 }))
            .to_request();
        let ack: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(ack["matchedCount"], 1);
        assert_eq!(ack["modifiedCount"], 1);
        assert_eq!(ack["upsertedId"], Value::Null);
        assert_eq!(ack["outcome"], "updated");
    }

    #[actix_web::test]
    async fn test_malformed_id_is_bad_request() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(memory_storage()))
                .configure(configure_assignment_routes),
        )
        .await;

        for req in [
            test::TestRequest::get().uri("/assignments/not-an-id"),
            test::TestRequest::delete().uri("/assignments/1234"),
        ] {
            let resp = test::call_service(&app, req.to_request()).await;
            assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        }
    }

    #[actix_web::test]
    async fn test_update_unknown_id_without_upsert_is_not_found() {
        let storage = memory_storage();
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(storage.clone()))
                .app_data(web::Data::new(UpdatePolicy { upsert: false }))
                .configure(configure_assignment_routes),
        )
        .await;
        let id = ObjectId::new().to_hex();

        let req = test::TestRequest::put()
            .uri(&format!("/assignments/{id}"))
            .set_json(json!({ "title": "Geometry" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["code"], 3000);
        assert_eq!(body["data"]["outcome"], "not_found");
        assert_eq!(body["data"]["matchedCount"], 0);
        assert!(storage.list_assignments().await.unwrap().is_empty());
    }

    #[actix_web::test]
    async fn test_malformed_json_uses_payload_envelope() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(memory_storage()))
                .app_data(web::JsonConfig::default().error_handler(json_error_handler))
                .configure(configure_assignment_routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/assignments")
            .insert_header(("content-type", "application/json"))
            .set_payload("{\"title\": ")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["code"], 1002);
        assert!(body["message"].as_str().unwrap().starts_with("Invalid JSON payload"));
    }

    #[actix_web::test]
    async fn test_store_failure_is_internal_error() {
        let storage: Arc<dyn Storage> = Arc::new(FailingStorage);
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(storage))
                .configure(configure_assignment_routes),
        )
        .await;
        let id = ObjectId::new().to_hex();

        for req in [
            test::TestRequest::get().uri("/assignments"),
            test::TestRequest::get().uri(&format!("/assignments/{id}")),
            test::TestRequest::delete().uri(&format!("/assignments/{id}")),
            test::TestRequest::post()
                .uri("/assignments")
                .set_json(json!({ "title": "Essay" })),
            test::TestRequest::put()
                .uri(&format!("/assignments/{id}"))
                .set_json(json!({ "title": "Essay" })),
        ] {
            let resp = test::call_service(&app, req.to_request()).await;
            assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

            let body: Value = test::read_body_json(resp).await;
            assert_eq!(body["code"], 5001);
            assert!(body["message"].as_str().unwrap().contains("connection reset"));
        }
    }
}
