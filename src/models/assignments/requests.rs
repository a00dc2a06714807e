use mongodb::bson::Document;
use serde::Deserialize;
use serde_json::Value;

use super::entities::ASSIGNMENT_UPDATABLE_FIELDS;
use crate::errors::Result;
use crate::utils::document::set_document;

/// 更新作业请求
///
/// 仅接收白名单字段，其余字段在反序列化时被丢弃。
#[derive(Debug, Default, Deserialize)]
pub struct UpdateAssignmentRequest {
    pub title: Option<Value>,
    pub description: Option<Value>,
    pub marks: Option<Value>,
    pub image: Option<Value>,
    pub difficulty: Option<Value>,
    pub date: Option<Value>,
    pub email: Option<Value>,
}

impl UpdateAssignmentRequest {
    /// 转换为 `$set` 文档，未提供的字段写为 null
    pub fn into_set_document(self) -> Result<Document> {
        // 值的顺序与 ASSIGNMENT_UPDATABLE_FIELDS 一致
        let values = [
            self.title,
            self.description,
            self.marks,
            self.image,
            self.difficulty,
            self.date,
            self.email,
        ];
        set_document(ASSIGNMENT_UPDATABLE_FIELDS.into_iter().zip(values))
    }
}
