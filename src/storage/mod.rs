use std::sync::Arc;

use mongodb::bson::{Document, oid::ObjectId};
use tracing::warn;

use crate::config::AppConfig;
use crate::errors::{Result, StudyCircleError};
use crate::models::{DeleteAcknowledgement, InsertAcknowledgement, UpdateAcknowledgement};

#[cfg(test)]
pub(crate) mod failing_storage;
pub mod memory_storage;
pub mod mongo_storage;
pub mod register;

/// 按 ID 更新未命中时的处理策略
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UpdatePolicy {
    pub upsert: bool,
}

impl UpdatePolicy {
    pub fn from_config() -> Self {
        Self {
            upsert: AppConfig::get().database.upsert_on_update,
        }
    }

    /// 优先使用应用注入的策略，未注入时回退到配置
    pub fn from_request(request: &actix_web::HttpRequest) -> Self {
        request
            .app_data::<actix_web::web::Data<UpdatePolicy>>()
            .map(|policy| ***policy)
            .unwrap_or_else(Self::from_config)
    }
}

/// 文档存储抽象
///
/// 作业与提交均以原始 BSON 文档形式存取，存储层不做模式约束。
#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    /// 作业管理方法
    // 创建作业（原样写入）
    async fn create_assignment(&self, assignment: Document) -> Result<InsertAcknowledgement>;
    // 列出全部作业
    async fn list_assignments(&self) -> Result<Vec<Document>>;
    // 通过ID获取作业
    async fn get_assignment_by_id(&self, id: ObjectId) -> Result<Option<Document>>;
    // 批量获取作业，结果顺序不保证
    async fn get_assignments_by_ids(&self, ids: &[ObjectId]) -> Result<Vec<Document>>;
    // 按ID覆盖字段，upsert 为 true 时未命中则插入
    async fn update_assignment(
        &self,
        id: ObjectId,
        set: Document,
        upsert: bool,
    ) -> Result<UpdateAcknowledgement>;
    // 删除作业
    async fn delete_assignment(&self, id: ObjectId) -> Result<DeleteAcknowledgement>;

    /// 提交管理方法
    // 创建提交（原样写入）
    async fn create_submission(&self, submission: Document) -> Result<InsertAcknowledgement>;
    // 按状态列出提交
    async fn list_submissions_by_status(&self, status: &str) -> Result<Vec<Document>>;
    // 按提交者邮箱列出提交
    async fn list_submissions_by_email(&self, email: &str) -> Result<Vec<Document>>;
    // 按ID覆盖批改字段
    async fn update_submission(
        &self,
        id: ObjectId,
        set: Document,
        upsert: bool,
    ) -> Result<UpdateAcknowledgement>;
}

/// 根据配置的后端名称创建存储实例
pub async fn create_storage() -> Result<Arc<dyn Storage>> {
    let backend = &AppConfig::get().database.backend;

    warn!("Attempting to create {} storage backend", backend);

    let constructor = register::get_storage_plugin(backend).ok_or_else(|| {
        StudyCircleError::storage_plugin_not_found(format!(
            "Storage backend '{backend}' not found in registry"
        ))
    })?;

    let storage = constructor().await?;
    Ok(Arc::from(storage))
}
