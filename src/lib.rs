//! Exercise Board - 课程练习面板核心逻辑
//!
//! 为课程练习列表计算参与状态、生成排序后的列表视图，
//! 并识别练习说明中的领域标签。
//!
//! # 架构
//! - `config`: 配置管理
//! - `errors`: 统一错误处理
//! - `markdown`: 领域标签语法与编辑器命令
//! - `models`: 数据模型定义
//! - `runtime`: 时钟与启动流程
//! - `services`: 业务逻辑层（状态判定、列表投影、说明解析）
//! - `storage`: 课程快照数据源

pub mod config;
pub mod errors;
pub mod markdown;
pub mod models;
pub mod runtime;
pub mod services;
pub mod storage;

pub use markdown::{TagGrammar, TagMatch};
pub use services::exercises::{classify, project};
