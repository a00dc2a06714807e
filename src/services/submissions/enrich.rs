//! 提交列表的作业信息补全
//!
//! 收集提交引用的去重作业 ID，一次批量查询后在内存中合并，
//! 每次列表请求只访问一次作业集合。

use std::collections::{BTreeSet, HashMap};

use mongodb::bson::{Document, oid::ObjectId};

use crate::errors::Result;
use crate::models::assignments::entities::ASSIGNMENT_ENRICHMENT_FIELDS;
use crate::models::submissions::entities::ASSIGNMENT_REFERENCE_FIELD;
use crate::storage::Storage;
use crate::utils::document::referenced_object_id;

pub async fn enrich_with_assignments(
    storage: &dyn Storage,
    mut submissions: Vec<Document>,
) -> Result<Vec<Document>> {
    let ids: BTreeSet<ObjectId> = submissions
        .iter()
        .filter_map(|submission| referenced_object_id(submission, ASSIGNMENT_REFERENCE_FIELD))
        .collect();

    if ids.is_empty() {
        return Ok(submissions);
    }

    let ids: Vec<ObjectId> = ids.into_iter().collect();
    let assignments: HashMap<ObjectId, Document> = storage
        .get_assignments_by_ids(&ids)
        .await?
        .into_iter()
        .filter_map(|assignment| {
            let id = assignment.get_object_id("_id").ok()?;
            Some((id, assignment))
        })
        .collect();

    for submission in &mut submissions {
        let Some(assignment) = referenced_object_id(submission, ASSIGNMENT_REFERENCE_FIELD)
            .and_then(|id| assignments.get(&id))
        else {
            continue;
        };

        for field in ASSIGNMENT_ENRICHMENT_FIELDS {
            match assignment.get(field) {
                Some(value) => {
                    submission.insert(field, value.clone());
                }
                None => {
                    submission.remove(field);
                }
            }
        }
    }

    Ok(submissions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::memory_storage::MemoryStorage;
    use mongodb::bson::doc;

    async fn seed_assignment(storage: &MemoryStorage, assignment: Document) -> ObjectId {
        let ack = storage.create_assignment(assignment).await.unwrap();
        ObjectId::parse_str(&ack.inserted_id).unwrap()
    }

    #[actix_web::test]
    async fn test_copies_title_and_marks() {
        let storage = MemoryStorage::new();
        let id = seed_assignment(
            &storage,
            doc! { "title": "Algebra 1", "marks": 100, "difficulty": "easy" },
        )
        .await;

        let enriched = enrich_with_assignments(
            &storage,
            vec![doc! { "assignment_id": id.to_hex(), "status": "Pending" }],
        )
        .await
        .unwrap();

        assert_eq!(enriched[0].get_str("title").unwrap(), "Algebra 1");
        assert_eq!(enriched[0].get_i32("marks").unwrap(), 100);
        assert!(enriched[0].get("difficulty").is_none());
    }

    #[actix_web::test]
    async fn test_missing_assignment_leaves_submission_untouched() {
        let storage = MemoryStorage::new();
        let original = doc! { "assignment_id": ObjectId::new().to_hex(), "title": "kept" };

        let enriched = enrich_with_assignments(&storage, vec![original.clone()])
            .await
            .unwrap();

        assert_eq!(enriched, vec![original]);
    }

    #[actix_web::test]
    async fn test_shared_reference_and_invalid_ids() {
        let storage = MemoryStorage::new();
        let id = seed_assignment(&storage, doc! { "title": "Essay", "marks": 20 }).await;

        let enriched = enrich_with_assignments(
            &storage,
            vec![
                doc! { "assignment_id": id.to_hex(), "email": "a@x.com" },
                doc! { "assignment_id": id, "email": "b@x.com" },
                doc! { "assignment_id": "not-an-id", "email": "c@x.com" },
                doc! { "email": "d@x.com" },
            ],
        )
        .await
        .unwrap();

        assert_eq!(enriched[0].get_str("title").unwrap(), "Essay");
        assert_eq!(enriched[1].get_str("title").unwrap(), "Essay");
        assert!(enriched[2].get("title").is_none());
        assert!(enriched[3].get("title").is_none());
    }

    #[actix_web::test]
    async fn test_absent_assignment_field_is_removed() {
        let storage = MemoryStorage::new();
        let id = seed_assignment(&storage, doc! { "title": "Untitled marks" }).await;

        let enriched = enrich_with_assignments(
            &storage,
            vec![doc! { "assignment_id": id.to_hex(), "marks": 5 }],
        )
        .await
        .unwrap();

        assert_eq!(enriched[0].get_str("title").unwrap(), "Untitled marks");
        assert!(enriched[0].get("marks").is_none());
    }
}
