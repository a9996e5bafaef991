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
macro_rules! define_exercise_board_errors {
    ($(
        $variant:ident($code:literal, $type_name:literal)
    ),* $(,)?) => {
        #[derive(Debug, Clone, PartialEq)]
        pub enum ExerciseBoardError {
            $($variant(String),)*
        }

        impl ExerciseBoardError {
            /// 获取错误代码
            pub fn code(&self) -> &'static str {
                match self {
                    $(ExerciseBoardError::$variant(_) => $code,)*
                }
            }

            /// 获取错误类型名称
            pub fn error_type(&self) -> &'static str {
                match self {
                    $(ExerciseBoardError::$variant(_) => $type_name,)*
                }
            }

            /// 获取错误详情
            pub fn message(&self) -> &str {
                match self {
                    $(ExerciseBoardError::$variant(msg) => msg,)*
                }
            }
        }

        // 生成便捷构造函数
        paste::paste! {
            impl ExerciseBoardError {
                $(
                    pub fn [<$variant:snake>]<T: Into<String>>(msg: T) -> Self {
                        ExerciseBoardError::$variant(msg.into())
                    }
                )*
            }
        }
    };
}

define_exercise_board_errors! {
    Configuration("E001", "Configuration Error"),
    SnapshotSourceNotFound("E002", "Snapshot Source Not Found"),
    SnapshotFetch("E003", "Snapshot Fetch Error"),
    Serialization("E004", "Serialization Error"),
    Validation("E005", "Validation Error"),
    NotFound("E006", "Resource Not Found"),
    Pattern("E007", "Pattern Compile Error"),
}

impl ExerciseBoardError {
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

impl fmt::Display for ExerciseBoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for ExerciseBoardError {}

// 为常见的错误类型实现 From trait
impl From<serde_json::Error> for ExerciseBoardError {
    fn from(err: serde_json::Error) -> Self {
        ExerciseBoardError::Serialization(err.to_string())
    }
}

impl From<regex::Error> for ExerciseBoardError {
    fn from(err: regex::Error) -> Self {
        ExerciseBoardError::Pattern(err.to_string())
    }
}

impl From<config::ConfigError> for ExerciseBoardError {
    fn from(err: config::ConfigError) -> Self {
        ExerciseBoardError::Configuration(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ExerciseBoardError>;
