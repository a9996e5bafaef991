//! 练习说明编辑器的领域命令
//!
//! 每个命令对应一种标签语法，用于在编辑器中插入标签和识别光标所在的标签。

use once_cell::sync::Lazy;

use super::tag::{TagGrammar, TagMatch};
use crate::errors::Result;

pub trait DomainCommand {
    /// 开始标识符，例如 `[task]`
    fn opening_identifier(&self) -> &str;
    /// 结束标识符，例如 `[/task]`
    fn closing_identifier(&self) -> &str;

    fn tag_grammar(&self) -> Result<TagGrammar> {
        TagGrammar::new(self.opening_identifier(), self.closing_identifier())
    }

    /// 生成插入到编辑器中的文本
    fn wrap(&self, content: &str) -> String {
        format!(
            "{}{}{}",
            self.opening_identifier(),
            content,
            self.closing_identifier()
        )
    }

    /// 光标是否位于该命令的标签内，返回命中的标签
    fn tag_at_cursor(&self, line: &str, column: usize) -> Result<Option<TagMatch>> {
        Ok(self.tag_grammar()?.find_tag_at_position(line, column))
    }
}

pub(crate) static TASK_GRAMMAR: Lazy<TagGrammar> = Lazy::new(|| {
    TaskCommand
        .tag_grammar()
        .expect("Invalid task tag identifiers")
});

pub(crate) static TEST_CASE_GRAMMAR: Lazy<TagGrammar> = Lazy::new(|| {
    TestCaseCommand::default()
        .tag_grammar()
        .expect("Invalid test case tag identifiers")
});

/// 编程练习中的任务：`[task]实现排序(testSort)[/task]`
#[derive(Debug, Default, Clone, Copy)]
pub struct TaskCommand;

impl DomainCommand for TaskCommand {
    fn opening_identifier(&self) -> &str {
        "[task]"
    }

    fn closing_identifier(&self) -> &str {
        "[/task]"
    }
}

/// 任务关联的测试用例：`(testA, testB)`
#[derive(Debug, Default, Clone)]
pub struct TestCaseCommand {
    values: Vec<String>,
}

impl TestCaseCommand {
    /// 设置可供选择的测试用例名称
    pub fn set_values(&mut self, values: Vec<String>) {
        self.values = values;
    }

    pub fn values(&self) -> &[String] {
        &self.values
    }

    /// 生成引用全部已知测试用例的文本
    pub fn insert_all(&self) -> String {
        self.wrap(&self.values.join(", "))
    }
}

impl DomainCommand for TestCaseCommand {
    fn opening_identifier(&self) -> &str {
        "("
    }

    fn closing_identifier(&self) -> &str {
        ")"
    }
}

/// 测验题目的解析：`[exp]...[/exp]`
#[derive(Debug, Default, Clone, Copy)]
pub struct ExplanationCommand;

impl DomainCommand for ExplanationCommand {
    fn opening_identifier(&self) -> &str {
        "[exp]"
    }

    fn closing_identifier(&self) -> &str {
        "[/exp]"
    }
}
