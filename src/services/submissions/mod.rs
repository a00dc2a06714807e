pub mod create;
pub mod enrich;
pub mod grade;
pub mod mine;
pub mod pending;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use mongodb::bson::oid::ObjectId;
use std::sync::Arc;

use crate::models::common::JsonObject;
use crate::models::submissions::requests::{GradeSubmissionRequest, MySubmissionQuery};
use crate::storage::Storage;

pub struct SubmissionService {
    storage: Option<Arc<dyn Storage>>,
}

impl SubmissionService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        if let Some(storage) = &self.storage {
            storage.clone()
        } else {
            request
                .app_data::<actix_web::web::Data<Arc<dyn Storage>>>()
                .expect("Storage not found in app data")
                .get_ref()
                .clone()
        }
    }

    /// 创建提交
    pub async fn create_submission(
        &self,
        request: &HttpRequest,
        body: JsonObject,
    ) -> ActixResult<HttpResponse> {
        create::create_submission(self, request, body).await
    }

    /// 待批改提交列表
    pub async fn list_pending_submissions(
        &self,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        pending::list_pending_submissions(self, request).await
    }

    /// 当前会话用户的提交列表
    pub async fn list_my_submissions(
        &self,
        request: &HttpRequest,
        query: MySubmissionQuery,
    ) -> ActixResult<HttpResponse> {
        mine::list_my_submissions(self, request, query).await
    }

    /// 批改提交
    pub async fn grade_submission(
        &self,
        request: &HttpRequest,
        submission_id: ObjectId,
        req: GradeSubmissionRequest,
    ) -> ActixResult<HttpResponse> {
        grade::grade_submission(self, request, submission_id, req).await
    }
}
