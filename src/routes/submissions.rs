use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares::RequireJWT;
use crate::models::common::JsonObject;
use crate::models::submissions::requests::{GradeSubmissionRequest, MySubmissionQuery};
use crate::services::SubmissionService;
use crate::utils::SafeObjectId;

// 懒加载的全局 SubmissionService 实例
static SUBMISSION_SERVICE: Lazy<SubmissionService> = Lazy::new(SubmissionService::new_lazy);

// 提交作业
pub async fn create_submission(
    req: HttpRequest,
    body: web::Json<JsonObject>,
) -> ActixResult<HttpResponse> {
    SUBMISSION_SERVICE
        .create_submission(&req, body.into_inner())
        .await
}

// 待批改提交
pub async fn list_pending_submissions(req: HttpRequest) -> ActixResult<HttpResponse> {
    SUBMISSION_SERVICE.list_pending_submissions(&req).await
}

// 我的提交
pub async fn list_my_submissions(
    req: HttpRequest,
    query: web::Query<MySubmissionQuery>,
) -> ActixResult<HttpResponse> {
    SUBMISSION_SERVICE
        .list_my_submissions(&req, query.into_inner())
        .await
}

// 批改提交
pub async fn grade_submission(
    req: HttpRequest,
    path: SafeObjectId,
    body: web::Json<GradeSubmissionRequest>,
) -> ActixResult<HttpResponse> {
    SUBMISSION_SERVICE
        .grade_submission(&req, path.0, body.into_inner())
        .await
}

// 配置路由
pub fn configure_submission_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/assignment-submission")
            .route(web::get().to(list_pending_submissions))
            .route(web::post().to(create_submission)),
    )
    .service(
        web::resource("/assignment-submission/{id}").route(web::patch().to(grade_submission)),
    )
    // 仅此路由需要会话认证
    .service(
        web::resource("/my-submission")
            .wrap(RequireJWT)
            .route(web::get().to(list_my_submissions)),
    );
}
