//! 路径参数提取器
//!
//! 将路径中的十六进制字符串解析为 ObjectId，解析失败时直接返回 400，
//! 不会进入处理函数。

use actix_web::{HttpRequest, HttpResponse, error::InternalError};
use mongodb::bson::oid::ObjectId;

use crate::models::{ApiResponse, ErrorCode};

/// 从路径参数解析 ObjectId
pub fn parse_object_id_param(req: &HttpRequest, param: &str) -> Result<ObjectId, actix_web::Error> {
    let raw = req.match_info().get(param).unwrap_or_default();

    ObjectId::parse_str(raw).map_err(|e| {
        tracing::debug!("Invalid object id in path parameter {}: {} ({})", param, raw, e);
        InternalError::from_response(
            e,
            HttpResponse::BadRequest().json(ApiResponse::error_empty(
                ErrorCode::InvalidObjectId,
                format!("Invalid id: {raw}"),
            )),
        )
        .into()
    })
}

/// 定义 ObjectId 路径参数提取器
#[macro_export]
macro_rules! define_safe_object_id_extractor {
    ($name:ident, $param:literal) => {
        #[derive(Debug, Clone, Copy)]
        pub struct $name(pub mongodb::bson::oid::ObjectId);

        impl actix_web::FromRequest for $name {
            type Error = actix_web::Error;
            type Future = std::future::Ready<Result<Self, Self::Error>>;

            fn from_request(
                req: &actix_web::HttpRequest,
                _: &mut actix_web::dev::Payload,
            ) -> Self::Future {
                std::future::ready(
                    $crate::utils::extractor::parse_object_id_param(req, $param).map($name),
                )
            }
        }
    };
}

define_safe_object_id_extractor!(SafeObjectId, "id");

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;

    #[test]
    fn test_parse_valid_object_id() {
        let id = ObjectId::new();
        let req = TestRequest::default()
            .param("id", id.to_hex())
            .to_http_request();
        assert_eq!(parse_object_id_param(&req, "id").unwrap(), id);
    }

    #[test]
    fn test_parse_invalid_object_id() {
        let req = TestRequest::default()
            .param("id", "not-a-valid-id")
            .to_http_request();
        let err = parse_object_id_param(&req, "id").unwrap_err();
        assert_eq!(
            err.as_response_error().status_code(),
            actix_web::http::StatusCode::BAD_REQUEST
        );
    }
}
