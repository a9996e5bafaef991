//! 编程练习说明
//!
//! 从题目说明中提取任务，从评分结果中得到测试用例名称。

pub mod tasks;
pub mod test_cases;

pub use tasks::{InstructionTask, extract_tasks};
pub use test_cases::test_case_names;
