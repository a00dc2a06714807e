pub mod logout;
pub mod token;

use actix_web::{HttpResponse, Result as ActixResult};

use crate::config::AppConfig;
use crate::models::auth::requests::IssueTokenRequest;

pub struct AuthService;

impl AuthService {
    pub fn new_lazy() -> Self {
        Self
    }

    pub(crate) fn get_config(&self) -> &AppConfig {
        AppConfig::get()
    }

    // 签发会话令牌
    pub async fn issue_token(&self, payload: IssueTokenRequest) -> ActixResult<HttpResponse> {
        token::handle_issue_token(self, payload).await
    }

    // 注销
    pub async fn logout(&self) -> ActixResult<HttpResponse> {
        logout::handle_logout().await
    }
}
