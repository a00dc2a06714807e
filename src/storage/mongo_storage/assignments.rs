//! 作业存储操作

use super::MongoStorage;
use crate::errors::{Result, StudyCircleError};
use crate::models::{DeleteAcknowledgement, InsertAcknowledgement, UpdateAcknowledgement};
use crate::utils::document::with_generated_id;
use futures_util::TryStreamExt;
use mongodb::bson::{Document, doc, oid::ObjectId};

impl MongoStorage {
    /// 创建作业
    pub async fn create_assignment_impl(
        &self,
        assignment: Document,
    ) -> Result<InsertAcknowledgement> {
        let (id, document) = with_generated_id(assignment);

        self.assignments
            .insert_one(document)
            .await
            .map_err(|e| StudyCircleError::database_operation(format!("创建作业失败: {e}")))?;

        Ok(InsertAcknowledgement::new(id))
    }

    /// 列出全部作业
    pub async fn list_assignments_impl(&self) -> Result<Vec<Document>> {
        let cursor = self
            .assignments
            .find(doc! {})
            .await
            .map_err(|e| StudyCircleError::database_operation(format!("查询作业列表失败: {e}")))?;

        cursor
            .try_collect()
            .await
            .map_err(|e| StudyCircleError::database_operation(format!("读取作业列表失败: {e}")))
    }

    /// 通过 ID 获取作业
    pub async fn get_assignment_by_id_impl(&self, id: ObjectId) -> Result<Option<Document>> {
        self.assignments
            .find_one(doc! { "_id": id })
            .await
            .map_err(|e| StudyCircleError::database_operation(format!("查询作业失败: {e}")))
    }

    /// 批量获取作业
    pub async fn get_assignments_by_ids_impl(&self, ids: &[ObjectId]) -> Result<Vec<Document>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let cursor = self
            .assignments
            .find(doc! { "_id": { "$in": ids.to_vec() } })
            .await
            .map_err(|e| StudyCircleError::database_operation(format!("批量查询作业失败: {e}")))?;

        cursor
            .try_collect()
            .await
            .map_err(|e| StudyCircleError::database_operation(format!("读取作业失败: {e}")))
    }

    /// 更新作业
    pub async fn update_assignment_impl(
        &self,
        id: ObjectId,
        set: Document,
        upsert: bool,
    ) -> Result<UpdateAcknowledgement> {
        let result = self
            .assignments
            .update_one(doc! { "_id": id }, doc! { "$set": set })
            .upsert(upsert)
            .await
            .map_err(|e| StudyCircleError::database_operation(format!("更新作业失败: {e}")))?;

        Ok(UpdateAcknowledgement::from_counts(
            result.matched_count,
            result.modified_count,
            result.upserted_id.and_then(|id| id.as_object_id()),
        ))
    }

    /// 删除作业
    pub async fn delete_assignment_impl(&self, id: ObjectId) -> Result<DeleteAcknowledgement> {
        let result = self
            .assignments
            .delete_one(doc! { "_id": id })
            .await
            .map_err(|e| StudyCircleError::database_operation(format!("删除作业失败: {e}")))?;

        Ok(DeleteAcknowledgement::new(result.deleted_count))
    }
}
