use serde::Serialize;
use ts_rs::TS;

use crate::markdown::commands::{TASK_GRAMMAR, TEST_CASE_GRAMMAR};
use crate::models::{Exercise, ExerciseKind};

/// 题目说明中的一个任务
#[derive(Debug, Clone, Serialize, PartialEq, Eq, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/instructions.ts")]
pub struct InstructionTask {
    // 所在行（从 0 开始）
    pub row: usize,
    // 标签在行内的字符区间
    pub start: usize,
    pub end: usize,
    // 去掉测试用例后的任务名称
    pub name: String,
    pub test_cases: Vec<String>,
}

/// 提取题目说明中的全部任务
pub fn extract_tasks(problem_statement: &str) -> Vec<InstructionTask> {
    problem_statement
        .lines()
        .enumerate()
        .flat_map(|(row, line)| {
            TASK_GRAMMAR
                .find_all_in_line(line)
                .into_iter()
                .map(move |tag| {
                    let (name, test_cases) = split_test_cases(&tag.inner_content);
                    InstructionTask {
                        row,
                        start: tag.start,
                        end: tag.end,
                        name,
                        test_cases,
                    }
                })
        })
        .collect()
}

impl Exercise {
    /// 编程练习题目说明中的任务，其他类型或没有说明时为空
    pub fn instruction_tasks(&self) -> Vec<InstructionTask> {
        match &self.kind {
            ExerciseKind::Programming(details) => details
                .problem_statement
                .as_deref()
                .map(extract_tasks)
                .unwrap_or_default(),
            _ => Vec::new(),
        }
    }
}

/// 测试用例列表是紧挨着结束标识符的最后一组括号，前面的括号属于任务名称
fn split_test_cases(content: &str) -> (String, Vec<String>) {
    let trimmed = content.trim_end();
    let trailing_group = TEST_CASE_GRAMMAR
        .find_all_in_line(trimmed)
        .pop()
        .filter(|group| group.end == trimmed.chars().count());
    let Some(group) = trailing_group else {
        return (content.trim().to_string(), Vec::new());
    };
    let test_cases = group
        .inner_content
        .split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect();
    let name: String = trimmed.chars().take(group.start).collect();
    (name.trim().to_string(), test_cases)
}
