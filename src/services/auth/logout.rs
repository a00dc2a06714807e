use actix_web::{HttpResponse, Result as ActixResult};

use crate::models::SuccessResponse;
use crate::utils::jwt::JwtUtils;

/// 处理用户登出
/// 无论请求是否携带 Cookie，都下发过期的空 Cookie 并返回成功
pub async fn handle_logout() -> ActixResult<HttpResponse> {
    // max_age=0 会让浏览器删除该 cookie
    let empty_cookie = JwtUtils::create_empty_session_cookie();

    Ok(HttpResponse::Ok()
        .cookie(empty_cookie)
        .json(SuccessResponse::ok()))
}
