use crate::models::common::JsonObject;

/// 签发会话令牌的请求体
///
/// 任意 JSON 对象，约定包含 `email` 字段，原样作为令牌声明签名。
pub type IssueTokenRequest = JsonObject;
