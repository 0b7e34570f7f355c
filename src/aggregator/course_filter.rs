//! 课程名过滤
//! 大小写不敏感的子串匹配，保持原有顺序，不去重

use serde::{Deserialize, Serialize};

use crate::model::Course;

/// 过滤词（构造时小写化一次）
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterTerm {
    raw: String,
    lowered: String,
}

impl FilterTerm {
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let lowered = raw.to_lowercase();
        Self { raw, lowered }
    }

    /// 原始输入
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// 空过滤词匹配所有课程；无名课程只被空过滤词匹配
    pub fn matches(&self, course: &Course) -> bool {
        if self.lowered.is_empty() {
            return true;
        }
        course
            .display_name()
            .map(|name| name.to_lowercase().contains(&self.lowered))
            .unwrap_or(false)
    }

    /// 过滤课程列表，返回新序列
    pub fn apply(&self, courses: &[Course]) -> Vec<Course> {
        courses.iter().filter(|c| self.matches(c)).cloned().collect()
    }
}

impl From<&str> for FilterTerm {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for FilterTerm {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}
