use actix_web::{HttpResponse, Result as ActixResult, web};

pub const ROOT_MESSAGE: &str = "Study Circle is running";

pub async fn root() -> ActixResult<HttpResponse> {
    Ok(HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .body(ROOT_MESSAGE))
}

// 配置路由
pub fn configure_system_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(root));
}
