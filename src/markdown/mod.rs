//! 练习说明编辑器中的领域标签
//!
//! 领域标签由开闭标识符包裹，例如 `[task]...[/task]`，可以出现在任意一行，
//! 一行中也可以有多个。

pub mod commands;
pub mod tag;

pub use commands::{DomainCommand, ExplanationCommand, TaskCommand, TestCaseCommand};
pub use tag::{TagGrammar, TagMatch};
