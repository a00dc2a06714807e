use crate::config::{AppConfig, JwtConfig};
use crate::errors::Result;
use crate::models::common::JsonObject;
use actix_web::cookie::{Cookie, SameSite};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use serde_json::Value;

// 会话令牌 Claims 结构体
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionClaims {
    pub exp: usize, // Expiration time (时间戳)
    pub iat: usize, // Issued at (签发时间)
    #[serde(flatten)]
    pub extra: JsonObject, // 调用方提交的字段，原样保留（含 email）
}

impl SessionClaims {
    /// 由调用方提交的对象构造 Claims
    ///
    /// 调用方提供的 `exp` / `iat` 会被服务端的值覆盖。
    pub fn from_payload(mut payload: JsonObject, expiry: chrono::Duration) -> Self {
        let now = chrono::Utc::now();
        payload.remove("exp");
        payload.remove("iat");

        Self {
            exp: (now + expiry).timestamp() as usize,
            iat: now.timestamp() as usize,
            extra: payload,
        }
    }

    /// 调用方声明的邮箱，非字符串时视为缺失
    pub fn email(&self) -> Option<&str> {
        self.extra.get("email").and_then(Value::as_str)
    }
}

pub struct JwtUtils;

impl JwtUtils {
    fn config() -> &'static JwtConfig {
        &AppConfig::get().jwt
    }

    /// 使用指定密钥签名
    pub fn encode_with_secret(claims: &SessionClaims, secret: &str) -> Result<String> {
        let encoding_key = EncodingKey::from_secret(secret.as_ref());
        Ok(encode(&Header::default(), claims, &encoding_key)?)
    }

    /// 使用指定密钥验证签名与有效期
    pub fn verify_with_secret(
        token: &str,
        secret: &str,
    ) -> std::result::Result<SessionClaims, jsonwebtoken::errors::Error> {
        let decoding_key = DecodingKey::from_secret(secret.as_ref());
        let validation = Validation::default();

        decode::<SessionClaims>(token, &decoding_key, &validation)
            .map(|token_data| token_data.claims)
    }

    /// 为调用方提交的对象签发会话令牌
    pub fn issue_session_token(payload: JsonObject) -> Result<String> {
        let config = Self::config();
        let claims =
            SessionClaims::from_payload(payload, chrono::Duration::minutes(config.token_expiry));
        Self::encode_with_secret(&claims, &config.secret)
    }

    // 验证会话令牌
    pub fn verify_session_token(
        token: &str,
    ) -> std::result::Result<SessionClaims, jsonwebtoken::errors::Error> {
        Self::verify_with_secret(token, &Self::config().secret)
    }

    /// 会话 Cookie 的 Secure / SameSite 属性随部署环境变化
    fn cookie_attributes(production: bool) -> (bool, SameSite) {
        if production {
            (true, SameSite::None)
        } else {
            (false, SameSite::Strict)
        }
    }

    /// 创建会话令牌 Cookie
    pub fn create_session_cookie(token: &str) -> Cookie<'static> {
        let config = AppConfig::get();
        let (secure, same_site) = Self::cookie_attributes(config.is_production());
        Cookie::build(config.jwt.cookie_name.clone(), token.to_string())
            .path("/")
            .same_site(same_site)
            .http_only(true)
            .secure(secure)
            .finish()
    }

    /// 创建空的会话 Cookie（用于注销）
    pub fn create_empty_session_cookie() -> Cookie<'static> {
        let config = AppConfig::get();
        let (secure, same_site) = Self::cookie_attributes(config.is_production());
        Cookie::build(config.jwt.cookie_name.clone(), "")
            .path("/")
            .max_age(actix_web::cookie::time::Duration::seconds(0))
            .same_site(same_site)
            .http_only(true)
            .secure(secure)
            .finish()
    }

    /// 从请求中提取会话令牌
    pub fn extract_session_token(req: &actix_web::HttpRequest) -> Option<String> {
        req.cookie(&Self::config().cookie_name)
            .map(|cookie| cookie.value().to_string())
            .filter(|token| !token.is_empty())
    }
}
