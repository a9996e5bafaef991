use crate::models::ExerciseResult;

/// 评分结果中的测试用例名称，按名称排序；没有结果时为空
pub fn test_case_names(result: Option<&ExerciseResult>) -> Vec<String> {
    let Some(result) = result else {
        return Vec::new();
    };
    let mut names: Vec<String> = result
        .feedbacks
        .iter()
        .filter_map(|feedback| feedback.text.clone())
        .collect();
    names.sort();
    names
}
