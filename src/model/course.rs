//! 课程数据模型
//! 除课程名外的字段（价格、缩略图、讲师等）原样保留，核心逻辑不解析

use std::fmt;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// 课程
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    /// 展示名（过滤依据），缺失或非字符串时为 None
    #[serde(
        rename = "courseName",
        default,
        deserialize_with = "lenient_name",
        skip_serializing_if = "Option::is_none"
    )]
    pub course_name: Option<String>,
    /// 其余不透明字段
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Course {
    /// 从名称快速创建
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            course_name: Some(name.into()),
            extra: Map::new(),
        }
    }

    /// 无名课程
    pub fn unnamed() -> Self {
        Self {
            course_name: None,
            extra: Map::new(),
        }
    }

    /// 附加不透明字段
    pub fn with_field(mut self, key: impl Into<String>, value: Value) -> Self {
        self.extra.insert(key.into(), value);
        self
    }

    pub fn display_name(&self) -> Option<&str> {
        self.course_name.as_deref()
    }

    /// 后端主键（若有）
    pub fn id(&self) -> Option<&str> {
        self.extra.get("_id").and_then(Value::as_str)
    }
}

impl fmt::Display for Course {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.course_name {
            Some(name) => write!(f, "{}", name),
            None => write!(f, "<unnamed course>"),
        }
    }
}

// 非字符串的 courseName 视为缺失，避免整个载荷解析失败
fn lenient_name<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) => Some(s),
        _ => None,
    })
}
