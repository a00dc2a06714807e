use mongodb::bson::Document;
use serde::Deserialize;
use serde_json::Value;

use crate::errors::Result;
use crate::utils::document::set_document;

/// 批改请求
#[derive(Debug, Default, Deserialize)]
pub struct GradeSubmissionRequest {
    pub given_mark: Option<Value>,
    pub feedback: Option<Value>,
    pub status: Option<Value>,
}

impl GradeSubmissionRequest {
    pub fn into_set_document(self) -> Result<Document> {
        set_document([
            ("given_mark", self.given_mark),
            ("feedback", self.feedback),
            ("status", self.status),
        ])
    }
}

/// 我的提交查询参数
#[derive(Debug, Clone, Deserialize)]
pub struct MySubmissionQuery {
    pub email: Option<String>,
}
