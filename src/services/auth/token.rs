use actix_web::{HttpResponse, Result as ActixResult};

use crate::models::auth::requests::IssueTokenRequest;
use crate::models::{ApiResponse, ErrorCode, SuccessResponse};
use crate::utils::jwt::JwtUtils;

use super::AuthService;

/// 处理会话令牌签发
///
/// 请求体原样作为 Claims 签名，不校验调用方身份。
pub async fn handle_issue_token(
    service: &AuthService,
    payload: IssueTokenRequest,
) -> ActixResult<HttpResponse> {
    let config = service.get_config();
    let email = payload
        .get("email")
        .and_then(|email| email.as_str())
        .map(str::to_owned);

    match JwtUtils::issue_session_token(payload) {
        Ok(token) => {
            tracing::info!(
                "Issued session token for {:?}, valid for {} minutes",
                email,
                config.jwt.token_expiry
            );

            Ok(HttpResponse::Ok()
                .cookie(JwtUtils::create_session_cookie(&token))
                .json(SuccessResponse::ok()))
        }
        Err(e) => {
            tracing::error!("Failed to sign session token: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::TokenIssueFailed,
                    "Unable to issue session token",
                )),
            )
        }
    }
}
