//! 内存存储实现
//!
//! 用于本地开发与测试，语义与 MongoDB 后端保持一致：ID 由存储生成，
//! 更新只覆盖 `$set` 中的字段，upsert 未命中时以过滤 ID 插入新文档。

use std::collections::BTreeMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;
use mongodb::bson::{Bson, Document, doc, oid::ObjectId};
use tracing::debug;

use crate::errors::{Result, StudyCircleError};
use crate::models::submissions::entities::{STATUS_FIELD, SUBMITTER_EMAIL_FIELD};
use crate::models::{DeleteAcknowledgement, InsertAcknowledgement, UpdateAcknowledgement};
use crate::storage::Storage;
use crate::utils::document::with_generated_id;

// 按 ObjectId 排序；upsert 插入的文档使用调用方给出的 ID，可能排在任意位置
type Collection = BTreeMap<ObjectId, Document>;

#[derive(Default)]
pub struct MemoryStorage {
    assignments: RwLock<Collection>,
    submissions: RwLock<Collection>,
}

fn read(collection: &RwLock<Collection>) -> Result<RwLockReadGuard<'_, Collection>> {
    collection
        .read()
        .map_err(|_| StudyCircleError::database_operation("内存存储锁已损坏"))
}

fn write(collection: &RwLock<Collection>) -> Result<RwLockWriteGuard<'_, Collection>> {
    collection
        .write()
        .map_err(|_| StudyCircleError::database_operation("内存存储锁已损坏"))
}

impl MemoryStorage {
    pub fn new() -> Self {
        debug!("MemoryStorage initialized");
        Self::default()
    }

    fn insert(collection: &RwLock<Collection>, document: Document) -> Result<InsertAcknowledgement> {
        let (id, document) = with_generated_id(document);
        write(collection)?.insert(id, document);
        Ok(InsertAcknowledgement::new(id))
    }

    fn find<F>(collection: &RwLock<Collection>, predicate: F) -> Result<Vec<Document>>
    where
        F: Fn(&Document) -> bool,
    {
        Ok(read(collection)?
            .values()
            .filter(|document| predicate(document))
            .cloned()
            .collect())
    }

    fn update(
        collection: &RwLock<Collection>,
        id: ObjectId,
        set: Document,
        upsert: bool,
    ) -> Result<UpdateAcknowledgement> {
        let mut collection = write(collection)?;

        if let Some(existing) = collection.get_mut(&id) {
            let mut modified = false;
            for (key, value) in set {
                if existing.get(&key) != Some(&value) {
                    existing.insert(key, value);
                    modified = true;
                }
            }
            return Ok(UpdateAcknowledgement::from_counts(1, u64::from(modified), None));
        }

        if !upsert {
            return Ok(UpdateAcknowledgement::from_counts(0, 0, None));
        }

        let mut document = doc! { "_id": id };
        for (key, value) in set {
            document.insert(key, value);
        }
        collection.insert(id, document);
        Ok(UpdateAcknowledgement::from_counts(0, 0, Some(id)))
    }
}

#[async_trait]
impl Storage for MemoryStorage {
    async fn create_assignment(&self, assignment: Document) -> Result<InsertAcknowledgement> {
        Self::insert(&self.assignments, assignment)
    }

    async fn list_assignments(&self) -> Result<Vec<Document>> {
        Self::find(&self.assignments, |_| true)
    }

    async fn get_assignment_by_id(&self, id: ObjectId) -> Result<Option<Document>> {
        Ok(read(&self.assignments)?.get(&id).cloned())
    }

    async fn get_assignments_by_ids(&self, ids: &[ObjectId]) -> Result<Vec<Document>> {
        let assignments = read(&self.assignments)?;
        Ok(ids
            .iter()
            .filter_map(|id| assignments.get(id).cloned())
            .collect())
    }

    async fn update_assignment(
        &self,
        id: ObjectId,
        set: Document,
        upsert: bool,
    ) -> Result<UpdateAcknowledgement> {
        Self::update(&self.assignments, id, set, upsert)
    }

    async fn delete_assignment(&self, id: ObjectId) -> Result<DeleteAcknowledgement> {
        let removed = write(&self.assignments)?.remove(&id);
        Ok(DeleteAcknowledgement::new(u64::from(removed.is_some())))
    }

    async fn create_submission(&self, submission: Document) -> Result<InsertAcknowledgement> {
        Self::insert(&self.submissions, submission)
    }

    async fn list_submissions_by_status(&self, status: &str) -> Result<Vec<Document>> {
        Self::find(&self.submissions, |submission| {
            matches!(submission.get(STATUS_FIELD), Some(Bson::String(s)) if s == status)
        })
    }

    async fn list_submissions_by_email(&self, email: &str) -> Result<Vec<Document>> {
        Self::find(&self.submissions, |submission| {
            matches!(submission.get(SUBMITTER_EMAIL_FIELD), Some(Bson::String(s)) if s == email)
        })
    }

    async fn update_submission(
        &self,
        id: ObjectId,
        set: Document,
        upsert: bool,
    ) -> Result<UpdateAcknowledgement> {
        Self::update(&self.submissions, id, set, upsert)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[actix_web::test]
    async fn test_insert_and_get_assignment() {
        let storage = MemoryStorage::new();
        let ack = storage
            .create_assignment(doc! { "title": "Algebra 1", "marks": 100 })
            .await
            .unwrap();

        let id = ObjectId::parse_str(&ack.inserted_id).unwrap();
        let stored = storage.get_assignment_by_id(id).await.unwrap().unwrap();
        assert_eq!(stored.get_object_id("_id").unwrap(), id);
        assert_eq!(stored.get_str("title").unwrap(), "Algebra 1");
        assert_eq!(storage.list_assignments().await.unwrap().len(), 1);
    }

    #[actix_web::test]
    async fn test_update_counts_modifications() {
        let storage = MemoryStorage::new();
        let ack = storage
            .create_assignment(doc! { "title": "Essay" })
            .await
            .unwrap();
        let id = ObjectId::parse_str(&ack.inserted_id).unwrap();

        let first = storage
            .update_assignment(id, doc! { "title": "Essay v2" }, true)
            .await
            .unwrap();
        assert_eq!((first.matched_count, first.modified_count), (1, 1));

        let same = storage
            .update_assignment(id, doc! { "title": "Essay v2" }, true)
            .await
            .unwrap();
        assert_eq!((same.matched_count, same.modified_count), (1, 0));
    }

    #[actix_web::test]
    async fn test_update_without_upsert_leaves_store_untouched() {
        let storage = MemoryStorage::new();
        let ack = storage
            .update_submission(ObjectId::new(), doc! { "status": "Graded" }, false)
            .await
            .unwrap();
        assert_eq!(ack.matched_count, 0);
        assert!(ack.upserted_id.is_none());
        assert!(
            storage
                .list_submissions_by_status("Graded")
                .await
                .unwrap()
                .is_empty()
        );
    }

    #[actix_web::test]
    async fn test_delete_reports_count() {
        let storage = MemoryStorage::new();
        let ack = storage.create_assignment(doc! {}).await.unwrap();
        let id = ObjectId::parse_str(&ack.inserted_id).unwrap();

        assert_eq!(storage.delete_assignment(id).await.unwrap().deleted_count, 1);
        assert_eq!(storage.delete_assignment(id).await.unwrap().deleted_count, 0);
    }
}
