//! 结果描述服务 - 业务能力层
//!
//! 把最终状态翻译成给用户看的句子

use crate::models::SubmissionStatus;
use phf::phf_map;

/// 获取不到练习名称时使用的名字
pub const GENERIC_EXERCISE_NAME: &str = "this exercise";

static STATUS_MESSAGES: phf::Map<&'static str, &'static str> = phf_map! {
    "wrong" => "was not correct.",
    "compilation error" => "could not compile.",
    "correct" => "has been accepted!",
};

/// 状态对应的句尾；没有映射的状态原样返回
pub fn map_status_to_message(status: &str) -> &str {
    STATUS_MESSAGES.get(status).copied().unwrap_or(status)
}

/// 完整的结果描述
pub fn describe_result(exercise_name: &str, status: &SubmissionStatus) -> String {
    let wire = status.as_str();
    match STATUS_MESSAGES.get(wire) {
        Some(message) => format!("Your solution for {} {}", exercise_name, message),
        None => format!("Your solution for {}: {}", exercise_name, wire),
    }
}
