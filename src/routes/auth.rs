use actix_web::{HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::models::auth::requests::IssueTokenRequest;
use crate::services::AuthService;

// 懒加载的全局 AuthService 实例
static AUTH_SERVICE: Lazy<AuthService> = Lazy::new(AuthService::new_lazy);

pub async fn issue_token(payload: web::Json<IssueTokenRequest>) -> ActixResult<HttpResponse> {
    AUTH_SERVICE.issue_token(payload.into_inner()).await
}

pub async fn logout() -> ActixResult<HttpResponse> {
    AUTH_SERVICE.logout().await
}

// 配置路由
pub fn configure_auth_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/jwt", web::post().to(issue_token))
        .route("/logout", web::post().to(logout));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::utils::jwt::JwtUtils;
    use actix_web::{App, http::StatusCode, test};
    use serde_json::{Value, json};

    #[actix_web::test]
    async fn test_issue_token_sets_verifiable_cookie() {
        let app = test::init_service(App::new().configure(configure_auth_routes)).await;

        let req = test::TestRequest::post()
            .uri("/jwt")
            .set_json(json!({ "email": "t@x.com" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let cookie_name = &AppConfig::get().jwt.cookie_name;
        let cookie = resp
            .response()
            .cookies()
            .find(|cookie| cookie.name() == cookie_name)
            .expect("session cookie should be set");
        assert_eq!(cookie.http_only(), Some(true));
        assert_eq!(cookie.path(), Some("/"));

        let claims = JwtUtils::verify_session_token(cookie.value()).unwrap();
        assert_eq!(claims.email(), Some("t@x.com"));

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, json!({ "success": true }));
    }

    #[actix_web::test]
    async fn test_non_object_payload_rejected() {
        let app = test::init_service(App::new().configure(configure_auth_routes)).await;

        let req = test::TestRequest::post()
            .uri("/jwt")
            .set_json(json!(["t@x.com"]))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_logout_clears_cookie() {
        let app = test::init_service(App::new().configure(configure_auth_routes)).await;

        let req = test::TestRequest::post().uri("/logout").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let cookie_name = &AppConfig::get().jwt.cookie_name;
        let cookie = resp
            .response()
            .cookies()
            .find(|cookie| cookie.name() == cookie_name)
            .expect("expired cookie should be set");
        assert_eq!(cookie.value(), "");
        assert_eq!(
            cookie.max_age(),
            Some(actix_web::cookie::time::Duration::seconds(0))
        );

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], true);
    }
}
