//! MongoDB 存储实现
//!
//! 启动时建立一个长期存活的客户端，集合句柄共享其连接池。

mod assignments;
mod submissions;

use crate::config::AppConfig;
use crate::errors::{Result, StudyCircleError};
use mongodb::bson::{Document, doc, oid::ObjectId};
use mongodb::options::{ClientOptions, ServerApi, ServerApiVersion};
use mongodb::{Client, Collection};
use std::time::Duration;
use tracing::info;

/// MongoDB 存储实现
#[derive(Clone)]
pub struct MongoStorage {
    pub(crate) assignments: Collection<Document>,
    pub(crate) submissions: Collection<Document>,
}

impl MongoStorage {
    /// 创建新的 MongoDB 存储实例
    pub async fn new_async() -> Result<Self> {
        let config = AppConfig::get();
        let uri = config.database_uri();

        let mut options = ClientOptions::parse(&uri)
            .await
            .map_err(|e| StudyCircleError::database_config(format!("MongoDB URI 解析失败: {e}")))?;

        // Stable API v1，严格模式
        options.server_api = Some(
            ServerApi::builder()
                .version(ServerApiVersion::V1)
                .strict(true)
                .deprecation_errors(true)
                .build(),
        );
        options.connect_timeout = Some(Duration::from_secs(config.database.timeout));
        options.server_selection_timeout = Some(Duration::from_secs(config.database.timeout));
        if options.app_name.is_none() {
            options.app_name = Some(config.app.system_name.clone());
        }

        let client = Client::with_options(options).map_err(|e| {
            StudyCircleError::database_connection(format!("无法创建 MongoDB 客户端: {e}"))
        })?;

        // 发送 ping 确认连接可用
        client
            .database("admin")
            .run_command(doc! { "ping": 1 })
            .await
            .map_err(|e| StudyCircleError::database_connection(format!("无法连接到 MongoDB: {e}")))?;

        info!(
            "Pinged MongoDB deployment, using database {}",
            config.database.name
        );

        let database = client.database(&config.database.name);
        Ok(Self {
            assignments: database.collection(&config.database.assignments_collection),
            submissions: database.collection(&config.database.submissions_collection),
        })
    }
}

// Storage trait 实现
use crate::models::{DeleteAcknowledgement, InsertAcknowledgement, UpdateAcknowledgement};
use crate::storage::Storage;
use async_trait::async_trait;

#[async_trait]
impl Storage for MongoStorage {
    // 作业模块
    async fn create_assignment(&self, assignment: Document) -> Result<InsertAcknowledgement> {
        self.create_assignment_impl(assignment).await
    }

    async fn list_assignments(&self) -> Result<Vec<Document>> {
        self.list_assignments_impl().await
    }

    async fn get_assignment_by_id(&self, id: ObjectId) -> Result<Option<Document>> {
        self.get_assignment_by_id_impl(id).await
    }

    async fn get_assignments_by_ids(&self, ids: &[ObjectId]) -> Result<Vec<Document>> {
        self.get_assignments_by_ids_impl(ids).await
    }

    async fn update_assignment(
        &self,
        id: ObjectId,
        set: Document,
        upsert: bool,
    ) -> Result<UpdateAcknowledgement> {
        self.update_assignment_impl(id, set, upsert).await
    }

    async fn delete_assignment(&self, id: ObjectId) -> Result<DeleteAcknowledgement> {
        self.delete_assignment_impl(id).await
    }

    // 提交模块
    async fn create_submission(&self, submission: Document) -> Result<InsertAcknowledgement> {
        self.create_submission_impl(submission).await
    }

    async fn list_submissions_by_status(&self, status: &str) -> Result<Vec<Document>> {
        self.list_submissions_by_status_impl(status).await
    }

    async fn list_submissions_by_email(&self, email: &str) -> Result<Vec<Document>> {
        self.list_submissions_by_email_impl(email).await
    }

    async fn update_submission(
        &self,
        id: ObjectId,
        set: Document,
        upsert: bool,
    ) -> Result<UpdateAcknowledgement> {
        self.update_submission_impl(id, set, upsert).await
    }
}
