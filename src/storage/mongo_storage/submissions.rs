//! 提交存储操作

use super::MongoStorage;
use crate::errors::{Result, StudyCircleError};
use crate::models::submissions::entities::{STATUS_FIELD, SUBMITTER_EMAIL_FIELD};
use crate::models::{InsertAcknowledgement, UpdateAcknowledgement};
use crate::utils::document::with_generated_id;
use futures_util::TryStreamExt;
use mongodb::bson::{Document, doc, oid::ObjectId};

impl MongoStorage {
    /// 创建提交
    pub async fn create_submission_impl(
        &self,
        submission: Document,
    ) -> Result<InsertAcknowledgement> {
        let (id, document) = with_generated_id(submission);

        self.submissions
            .insert_one(document)
            .await
            .map_err(|e| StudyCircleError::database_operation(format!("创建提交失败: {e}")))?;

        Ok(InsertAcknowledgement::new(id))
    }

    async fn find_submissions(&self, filter: Document) -> Result<Vec<Document>> {
        let cursor = self
            .submissions
            .find(filter)
            .await
            .map_err(|e| StudyCircleError::database_operation(format!("查询提交失败: {e}")))?;

        cursor
            .try_collect()
            .await
            .map_err(|e| StudyCircleError::database_operation(format!("读取提交失败: {e}")))
    }

    /// 按状态列出提交
    pub async fn list_submissions_by_status_impl(&self, status: &str) -> Result<Vec<Document>> {
        self.find_submissions(doc! { STATUS_FIELD: status }).await
    }

    /// 按提交者邮箱列出提交
    pub async fn list_submissions_by_email_impl(&self, email: &str) -> Result<Vec<Document>> {
        self.find_submissions(doc! { SUBMITTER_EMAIL_FIELD: email })
            .await
    }

    /// 更新提交（批改）
    pub async fn update_submission_impl(
        &self,
        id: ObjectId,
        set: Document,
        upsert: bool,
    ) -> Result<UpdateAcknowledgement> {
        let result = self
            .submissions
            .update_one(doc! { "_id": id }, doc! { "$set": set })
            .upsert(upsert)
            .await
            .map_err(|e| StudyCircleError::database_operation(format!("更新提交失败: {e}")))?;

        Ok(UpdateAcknowledgement::from_counts(
            result.matched_count,
            result.modified_count,
            result.upserted_id.and_then(|id| id.as_object_id()),
        ))
    }
}
