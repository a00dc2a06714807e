use serde::{Deserialize, Serialize};

/// 业务错误码
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[repr(i32)]
pub enum ErrorCode {
    // 请求错误
    BadRequest = 1000,
    InvalidObjectId = 1001,
    InvalidPayload = 1002,

    // 认证与授权
    Unauthorized = 2000,
    Forbidden = 2001,
    TokenIssueFailed = 2002,

    // 资源
    AssignmentNotFound = 3000,
    SubmissionNotFound = 3001,

    // 服务端
    DatabaseError = 5001,
}
