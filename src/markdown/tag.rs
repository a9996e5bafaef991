//! 标签语法与行内匹配
//!
//! 开闭标识符按字面量编译，内容非贪婪匹配，偏移量按字符列计算。

use regex::Regex;
use serde::Serialize;
use ts_rs::TS;

use crate::errors::{ExerciseBoardError, Result};

/// 行内一次标签命中，偏移量按字符计，`end` 不包含
#[derive(Debug, Clone, Serialize, PartialEq, Eq, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/markdown.ts")]
pub struct TagMatch {
    pub start: usize,
    pub end: usize,
    pub inner_content: String,
}

/// 由开闭标识符组成的标签语法
#[derive(Debug, Clone)]
pub struct TagGrammar {
    opening: String,
    closing: String,
    pattern: Regex,
}

impl TagGrammar {
    /// 标识符按字面量处理，正则元字符会被转义
    pub fn new(opening: impl Into<String>, closing: impl Into<String>) -> Result<Self> {
        let opening = opening.into();
        let closing = closing.into();
        if opening.is_empty() || closing.is_empty() {
            return Err(ExerciseBoardError::validation(
                "Tag identifiers must not be empty",
            ));
        }
        let pattern = Regex::new(&format!(
            "{}(.*?){}",
            regex::escape(&opening),
            regex::escape(&closing)
        ))?;
        Ok(Self {
            opening,
            closing,
            pattern,
        })
    }

    pub fn opening(&self) -> &str {
        &self.opening
    }

    pub fn closing(&self) -> &str {
        &self.closing
    }

    /// 用标识符包裹内容
    pub fn wrap(&self, content: &str) -> String {
        format!("{}{}{}", self.opening, content, self.closing)
    }

    /// 行中第一个标签
    pub fn find_tag_in_line(&self, line: &str) -> Option<TagMatch> {
        if line.is_empty() {
            return None;
        }
        let captures = self.pattern.captures(line)?;
        Some(to_tag_match(line, &captures))
    }

    /// 行中所有互不重叠的标签
    pub fn find_all_in_line(&self, line: &str) -> Vec<TagMatch> {
        self.pattern
            .captures_iter(line)
            .map(|captures| to_tag_match(line, &captures))
            .collect()
    }

    /// 光标所在（或紧跟其后）的标签：`start < column <= end`
    pub fn find_tag_at_position(&self, line: &str, column: usize) -> Option<TagMatch> {
        self.find_all_in_line(line)
            .into_iter()
            .find(|tag| tag.start < column && column <= tag.end)
    }

    /// 文本第 `row` 行（从 0 开始）中的第一个标签，行不存在时返回 None
    pub fn find_tag_in_row(&self, text: &str, row: usize) -> Option<TagMatch> {
        self.find_tag_in_line(text.lines().nth(row)?)
    }

    /// 光标位置（行、列）所在的标签
    pub fn find_tag_at_cursor(&self, text: &str, row: usize, column: usize) -> Option<TagMatch> {
        self.find_tag_at_position(text.lines().nth(row)?, column)
    }
}

fn to_tag_match(line: &str, captures: &regex::Captures<'_>) -> TagMatch {
    let whole = captures.get_match();
    let inner_content = captures
        .get(1)
        .map(|inner| inner.as_str().to_string())
        .unwrap_or_default();
    TagMatch {
        start: char_offset(line, whole.start()),
        end: char_offset(line, whole.end()),
        inner_content,
    }
}

/// 字节偏移转换为字符列
fn char_offset(line: &str, byte_offset: usize) -> usize {
    line[..byte_offset].chars().count()
}
