//! 所有操作都失败的存储，用于验证存储错误的响应

use async_trait::async_trait;
use mongodb::bson::{Document, oid::ObjectId};

use crate::errors::{Result, StudyCircleError};
use crate::models::{DeleteAcknowledgement, InsertAcknowledgement, UpdateAcknowledgement};
use crate::storage::Storage;

pub struct FailingStorage;

fn unavailable<T>() -> Result<T> {
    Err(StudyCircleError::database_operation("connection reset by peer"))
}

#[async_trait]
impl Storage for FailingStorage {
    async fn create_assignment(&self, _document: Document) -> Result<InsertAcknowledgement> {
        unavailable()
    }

    async fn list_assignments(&self) -> Result<Vec<Document>> {
        unavailable()
    }

    async fn get_assignment_by_id(&self, _id: ObjectId) -> Result<Option<Document>> {
        unavailable()
    }

    async fn get_assignments_by_ids(&self, _ids: &[ObjectId]) -> Result<Vec<Document>> {
        unavailable()
    }

    async fn update_assignment(
        &self,
        _id: ObjectId,
        _document: Document,
        _upsert: bool,
    ) -> Result<UpdateAcknowledgement> {
        unavailable()
    }

    async fn delete_assignment(&self, _id: ObjectId) -> Result<DeleteAcknowledgement> {
        unavailable()
    }

    async fn create_submission(&self, _document: Document) -> Result<InsertAcknowledgement> {
        unavailable()
    }

    async fn list_submissions_by_status(&self, _value: &str) -> Result<Vec<Document>> {
        unavailable()
    }

    async fn list_submissions_by_email(&self, _value: &str) -> Result<Vec<Document>> {
        unavailable()
    }

    async fn update_submission(
        &self,
        _id: ObjectId,
        _document: Document,
        _upsert: bool,
    ) -> Result<UpdateAcknowledgement> {
        unavailable()
    }
}
