/// 作业文档中可通过更新接口覆盖的字段
///
/// 作业在存储层以原始 BSON 文档保存，不做模式约束；创建时原样写入，
/// 更新时只覆盖这里列出的字段。
pub const ASSIGNMENT_UPDATABLE_FIELDS: [&str; 7] = [
    "title",
    "description",
    "marks",
    "image",
    "difficulty",
    "date",
    "email",
];

/// 提交列表展示时从作业复制到提交上的字段
pub const ASSIGNMENT_ENRICHMENT_FIELDS: [&str; 2] = ["title", "marks"];
