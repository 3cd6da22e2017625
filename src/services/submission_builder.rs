//! 提交内容构建 - 业务能力层

use crate::models::{SubmissionLink, SubmissionRecord};

/// 组合课程 / 练习 ID 和完整的文件内容
pub fn build_submission(course_id: u64, exercise_id: u64, code: &str) -> SubmissionRecord {
    SubmissionRecord {
        code: code.to_string(),
        course_id,
        exercise_id,
    }
}

/// 从解析出的链接构建
pub fn build_from_link(link: &SubmissionLink, code: &str) -> SubmissionRecord {
    build_submission(link.course_id, link.exercise_id, code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fields_are_copied() {
        let code = "https://dodona.ugent.be/courses/12/series/3/activities/456\nprint('hi')\n";
        let record = build_submission(12, 456, code);
        assert_eq!(record.course_id, 12);
        assert_eq!(record.exercise_id, 456);
        assert_eq!(record.code, code);
    }

    #[test]
    fn test_empty_code() {
        let record = build_submission(1, 2, "");
        assert_eq!(record.code, "");
    }

    #[test]
    fn test_from_link() {
        let link = SubmissionLink {
            course_id: 5,
            exercise_id: 6,
            raw_url: "dodona.ugent.be/courses/5/series/1/activities/6".to_string(),
        };
        let record = build_from_link(&link, "x = 1");
        assert_eq!((record.course_id, record.exercise_id), (5, 6));
        assert_eq!(record.code, "x = 1");
    }
}
