//! BSON 文档与 JSON 之间的转换
//!
//! 响应中的 ObjectId 一律输出为 24 位十六进制字符串，日期输出为 RFC 3339，
//! 其余类型按 relaxed extended JSON 输出。

use mongodb::bson::{self, Bson, Document};
use serde_json::Value;

use crate::errors::Result;
use crate::models::common::JsonObject;

/// 将客户端提交的 JSON 对象转换为 BSON 文档
///
/// 客户端传入的 `_id` 会被丢弃，文档 ID 始终由存储层生成。
pub fn json_object_to_document(mut object: JsonObject) -> Result<Document> {
    object.remove("_id");
    Ok(bson::to_document(&object)?)
}

/// 构造 `$set` 内容：白名单字段逐个写入，缺失的字段写为 null
pub fn set_document<'a, I>(fields: I) -> Result<Document>
where
    I: IntoIterator<Item = (&'a str, Option<Value>)>,
{
    let mut set = Document::new();
    for (key, value) in fields {
        let value = match value {
            Some(value) => bson::to_bson(&value)?,
            None => Bson::Null,
        };
        set.insert(key, value);
    }
    Ok(set)
}

/// 为新文档分配 ID，并将 `_id` 放在首位
pub fn with_generated_id(document: Document) -> (bson::oid::ObjectId, Document) {
    let id = bson::oid::ObjectId::new();
    let mut with_id = bson::doc! { "_id": id };
    for (key, value) in document {
        with_id.insert(key, value);
    }
    (id, with_id)
}

/// 将 BSON 文档转换为响应用的 JSON
pub fn document_to_json(document: Document) -> Value {
    Value::Object(
        document
            .into_iter()
            .map(|(key, value)| (key, bson_to_json(value)))
            .collect(),
    )
}

/// 批量转换为 JSON 数组
pub fn documents_to_json(documents: Vec<Document>) -> Value {
    Value::Array(documents.into_iter().map(document_to_json).collect())
}

fn bson_to_json(value: Bson) -> Value {
    match value {
        Bson::ObjectId(id) => Value::String(id.to_hex()),
        Bson::DateTime(dt) => match dt.try_to_rfc3339_string() {
            Ok(s) => Value::String(s),
            Err(_) => Bson::DateTime(dt).into_relaxed_extjson(),
        },
        Bson::Document(doc) => document_to_json(doc),
        Bson::Array(items) => Value::Array(items.into_iter().map(bson_to_json).collect()),
        other => other.into_relaxed_extjson(),
    }
}

/// 读取文档中的引用 ID，兼容十六进制字符串与原生 ObjectId 两种存法
pub fn referenced_object_id(document: &Document, key: &str) -> Option<bson::oid::ObjectId> {
    match document.get(key)? {
        Bson::ObjectId(id) => Some(*id),
        Bson::String(hex) => bson::oid::ObjectId::parse_str(hex).ok(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::{doc, oid::ObjectId};
    use serde_json::json;

    #[test]
    fn test_object_id_rendered_as_hex() {
        let id = ObjectId::new();
        let value = document_to_json(doc! { "_id": id, "nested": { "ref": id } });
        assert_eq!(value["_id"], id.to_hex());
        assert_eq!(value["nested"]["ref"], id.to_hex());
    }

    #[test]
    fn test_client_id_is_dropped() {
        let object = json!({ "_id": "abc", "title": "Algebra 1", "marks": 100 })
            .as_object()
            .cloned()
            .unwrap();
        let document = json_object_to_document(object).unwrap();
        assert!(!document.contains_key("_id"));
        assert_eq!(document.get_str("title").unwrap(), "Algebra 1");
        assert_eq!(document_to_json(document)["marks"], 100);
    }

    #[test]
    fn test_set_document_writes_null_for_missing_fields() {
        let set = set_document([("title", Some(json!("Essay"))), ("marks", None)]).unwrap();
        assert_eq!(set.get_str("title").unwrap(), "Essay");
        assert_eq!(set.get("marks"), Some(&Bson::Null));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_referenced_object_id_accepts_hex_and_native() {
        let id = ObjectId::new();
        assert_eq!(
            referenced_object_id(&doc! { "assignment_id": id.to_hex() }, "assignment_id"),
            Some(id)
        );
        assert_eq!(
            referenced_object_id(&doc! { "assignment_id": id }, "assignment_id"),
            Some(id)
        );
        assert_eq!(
            referenced_object_id(&doc! { "assignment_id": "bogus" }, "assignment_id"),
            None
        );
        assert_eq!(referenced_object_id(&doc! {}, "assignment_id"), None);
    }
}
