/// 待批改状态，教师视角的提交列表按此值筛选
pub const PENDING_STATUS: &str = "Pending";

/// 提交文档中引用作业 ID 的字段
pub const ASSIGNMENT_REFERENCE_FIELD: &str = "assignment_id";

/// 提交者邮箱字段
pub const SUBMITTER_EMAIL_FIELD: &str = "email";

/// 提交状态字段
pub const STATUS_FIELD: &str = "status";
