//! 存储写操作的确认结果
//!
//! 字段命名与 MongoDB 驱动返回的确认保持一致 (camelCase)，
//! 更新确认额外携带显式的 `outcome`，区分更新、插入与未命中。

use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// 插入确认
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertAcknowledgement {
    pub acknowledged: bool,
    pub inserted_id: String,
}

impl InsertAcknowledgement {
    pub fn new(inserted_id: ObjectId) -> Self {
        Self {
            acknowledged: true,
            inserted_id: inserted_id.to_hex(),
        }
    }
}

/// 按 ID 更新的实际结果
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UpdateOutcome {
    Updated,
    Inserted,
    NotFound,
}

/// 更新确认
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAcknowledgement {
    pub acknowledged: bool,
    pub matched_count: u64,
    pub modified_count: u64,
    pub upserted_count: u64,
    pub upserted_id: Option<String>,
    pub outcome: UpdateOutcome,
}

impl UpdateAcknowledgement {
    /// 根据驱动计数推导结果：有 upserted_id 即为插入，命中即为更新，否则未命中
    pub fn from_counts(matched_count: u64, modified_count: u64, upserted_id: Option<ObjectId>) -> Self {
        let outcome = match (&upserted_id, matched_count) {
            (Some(_), _) => UpdateOutcome::Inserted,
            (None, 0) => UpdateOutcome::NotFound,
            (None, _) => UpdateOutcome::Updated,
        };

        Self {
            acknowledged: true,
            matched_count,
            modified_count,
            upserted_count: u64::from(upserted_id.is_some()),
            upserted_id: upserted_id.map(|id| id.to_hex()),
            outcome,
        }
    }
}

/// 删除确认
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteAcknowledgement {
    pub acknowledged: bool,
    pub deleted_count: u64,
}

impl DeleteAcknowledgement {
    pub fn new(deleted_count: u64) -> Self {
        Self {
            acknowledged: true,
            deleted_count,
        }
    }
}
