/*!
 * 会话令牌认证中间件
 *
 * 从 Cookie 中读取会话令牌并验证签名与有效期，验证通过后将 Claims
 * 存入请求扩展，供后续处理程序使用。
 *
 * ## 使用方法
 *
 * ```rust,ignore
 * use actix_web::web;
 * use crate::middlewares::RequireJWT;
 *
 * cfg.service(
 *     web::resource("/my-submission")
 *         .wrap(RequireJWT)
 *         .route(web::get().to(list_my_submissions)),
 * );
 *
 * async fn list_my_submissions(req: HttpRequest) -> ActixResult<HttpResponse> {
 *     let claims = RequireJWT::extract_claims(&req);
 *     // ...
 * }
 * ```
 *
 * ## 认证流程
 *
 * 1. 客户端携带 `token` Cookie（由 `POST /jwt` 签发）
 * 2. Cookie 缺失，返回 401
 * 3. 签名或有效期验证失败，返回 401
 * 4. 验证通过，Claims 存入请求扩展，继续处理请求
 *
 * ## 配置
 *
 * 密钥来自 `JWT_SECRET`，Cookie 名称来自 `jwt.cookie_name`。
 */

use crate::models::{ApiResponse, ErrorCode};
use crate::utils::jwt::{JwtUtils, SessionClaims};
use actix_service::{Service, Transform};
use actix_web::{
    Error, HttpMessage, HttpResponse,
    body::EitherBody,
    dev::{ServiceRequest, ServiceResponse},
    http::StatusCode,
    http::header::CONTENT_TYPE,
};
use futures_util::future::{LocalBoxFuture, Ready, ready};
use std::rc::Rc;
use tracing::{debug, info};

pub const UNAUTHORIZED_MESSAGE: &str = "Unauthorized access";

#[derive(Clone)]
pub struct RequireJWT;

// 辅助函数：创建错误响应
fn create_error_response(status: StatusCode, message: &str) -> HttpResponse {
    match status {
        StatusCode::NO_CONTENT => HttpResponse::build(status)
            .insert_header((CONTENT_TYPE, "text/plain; charset=utf-8"))
            .finish(),
        _ => HttpResponse::build(status)
            .insert_header((CONTENT_TYPE, "application/json; charset=utf-8"))
            .json(ApiResponse::<()>::error_empty(
                ErrorCode::Unauthorized,
                message,
            )),
    }
}

// 辅助函数：提取并验证会话令牌
fn extract_and_validate_token(req: &ServiceRequest) -> Result<SessionClaims, String> {
    let token = JwtUtils::extract_session_token(req.request())
        .ok_or_else(|| "Missing session cookie".to_string())?;

    JwtUtils::verify_session_token(&token).map_err(|err| {
        info!("Session token validation failed: {}", err);
        "Invalid session token".to_string()
    })
}

impl<S, B> Transform<S, ServiceRequest> for RequireJWT
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = RequireJWTMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RequireJWTMiddleware {
            service: Rc::new(service),
        }))
    }
}

pub struct RequireJWTMiddleware<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for RequireJWTMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(
        &self,
        ctx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let srv = self.service.clone();
        Box::pin(async move {
            // 处理 OPTIONS 请求
            if req.method() == actix_web::http::Method::OPTIONS {
                return Ok(req.into_response(
                    create_error_response(StatusCode::NO_CONTENT, "").map_into_right_body(),
                ));
            }

            match extract_and_validate_token(&req) {
                Ok(claims) => {
                    debug!(
                        "Session authentication successful for email: {:?}",
                        claims.email()
                    );
                    req.extensions_mut().insert(claims);
                    let res = srv.call(req).await?.map_into_left_body();
                    Ok(res)
                }
                Err(err) => {
                    info!(
                        "Session authentication failed for request to {}: {}",
                        req.path(),
                        err
                    );
                    Ok(req.into_response(
                        create_error_response(StatusCode::UNAUTHORIZED, UNAUTHORIZED_MESSAGE)
                            .map_into_right_body(),
                    ))
                }
            }
        })
    }
}

// 辅助函数：从请求中提取会话信息
impl RequireJWT {
    /// 从请求扩展中提取会话 Claims
    /// 此函数应该在应用了RequireJWT中间件的路由处理程序中使用
    pub fn extract_claims(req: &actix_web::HttpRequest) -> Option<SessionClaims> {
        req.extensions().get::<SessionClaims>().cloned()
    }
}
