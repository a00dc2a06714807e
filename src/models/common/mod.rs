pub mod acknowledgement;
pub mod error_code;
pub mod response;

/// 客户端提交的任意 JSON 对象
pub type JsonObject = serde_json::Map<String, serde_json::Value>;
