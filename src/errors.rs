//! 统一错误处理模块
//!
//! 使用宏自动生成错误类型，支持错误代码和类型名称。

use std::fmt;

/// 定义错误类型的宏
///
/// 自动生成：
/// - enum 定义
/// - code() 方法 - 返回错误代码
/// - error_type() 方法 - 返回错误类型名称
/// - message() 方法 - 返回错误详情
/// - 便捷构造函数
macro_rules! define_study_circle_errors {
    ($(
        $variant:ident($code:literal, $type_name:literal)
    ),* $(,)?) => {
        #[derive(Debug, Clone)]
        pub enum StudyCircleError {
            $($variant(String),)*
        }

        impl StudyCircleError {
            /// 获取错误代码
            pub fn code(&self) -> &'static str {
                match self {
                    $(StudyCircleError::$variant(_) => $code,)*
                }
            }

            /// 获取错误类型名称
            pub fn error_type(&self) -> &'static str {
                match self {
                    $(StudyCircleError::$variant(_) => $type_name,)*
                }
            }

            /// 获取错误详情
            pub fn message(&self) -> &str {
                match self {
                    $(StudyCircleError::$variant(msg) => msg,)*
                }
            }
        }

        // 生成便捷构造函数
        paste::paste! {
            impl StudyCircleError {
                $(
                    pub fn [<$variant:snake>]<T: Into<String>>(msg: T) -> Self {
                        StudyCircleError::$variant(msg.into())
                    }
                )*
            }
        }
    };
}

define_study_circle_errors! {
    DatabaseConfig("E001", "Database Configuration Error"),
    DatabaseConnection("E002", "Database Connection Error"),
    DatabaseOperation("E003", "Database Operation Error"),
    StoragePluginNotFound("E004", "Storage Plugin Not Found"),
    Serialization("E005", "Serialization Error"),
    InvalidObjectId("E006", "Invalid Object Id"),
    TokenIssue("E007", "Token Issue Error"),
}

impl StudyCircleError {
    /// 格式化为彩色输出（用于开发环境）
    #[cfg(debug_assertions)]
    pub fn format_colored(&self) -> String {
        format!(
            "\x1b[1;31m[ERROR]\x1b[0m \x1b[33m{}\x1b[0m \x1b[31m{}\x1b[0m\n  {}",
            self.code(),
            self.error_type(),
            self.message()
        )
    }

    /// 格式化为简洁输出
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for StudyCircleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for StudyCircleError {}

// 为常见的错误类型实现 From trait
impl From<mongodb::error::Error> for StudyCircleError {
    fn from(err: mongodb::error::Error) -> Self {
        StudyCircleError::DatabaseOperation(err.to_string())
    }
}

impl From<mongodb::bson::ser::Error> for StudyCircleError {
    fn from(err: mongodb::bson::ser::Error) -> Self {
        StudyCircleError::Serialization(err.to_string())
    }
}

impl From<mongodb::bson::oid::Error> for StudyCircleError {
    fn from(err: mongodb::bson::oid::Error) -> Self {
        StudyCircleError::InvalidObjectId(err.to_string())
    }
}

impl From<jsonwebtoken::errors::Error> for StudyCircleError {
    fn from(err: jsonwebtoken::errors::Error) -> Self {
        StudyCircleError::TokenIssue(err.to_string())
    }
}

impl From<serde_json::Error> for StudyCircleError {
    fn from(err: serde_json::Error) -> Self {
        StudyCircleError::Serialization(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, StudyCircleError>;
