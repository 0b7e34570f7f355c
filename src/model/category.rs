//! 分类相关数据模型

use std::fmt;
use serde::{Deserialize, Serialize};

use super::null_as_default;
use crate::utils::SlugNormalizer;

/// "All" 伪分类
pub const ALL_SLUG: &str = "All";

/// 目录视图标识（URL 友好的分类名）
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CategorySlug(String);

impl CategorySlug {
    pub fn new(slug: impl Into<String>) -> Self {
        Self(slug.into())
    }

    /// "All" 聚合视图
    pub fn all() -> Self {
        Self(ALL_SLUG.to_string())
    }

    /// 由分类展示名生成对应的 slug
    pub fn from_category_name(name: &str) -> Self {
        Self(SlugNormalizer::normalize(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_all(&self) -> bool {
        self.0 == ALL_SLUG
    }
}

impl fmt::Display for CategorySlug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CategorySlug {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for CategorySlug {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

/// 后端分类ID
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryId(String);

impl CategoryId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// 空或全空白
    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CategoryId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// 分类服务返回的单个分类
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryEntry {
    #[serde(rename = "_id", default)]
    pub id: CategoryId,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl CategoryEntry {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: CategoryId::new(id),
            name: name.into(),
            description: None,
        }
    }

    /// 归一化后的分类名（小写，空格替换为连字符）
    pub fn slug(&self) -> CategorySlug {
        CategorySlug::from_category_name(&self.name)
    }
}

/// 分类服务响应体
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryListResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub data: Vec<CategoryEntry>,
}

/// 视图模式，每次 slug 变化时确定一次
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ViewMode {
    /// 单分类视图
    Normal,
    /// "All" 聚合视图（取全站畅销课程）
    Aggregate,
}

impl ViewMode {
    pub fn from_slug(slug: &CategorySlug) -> Self {
        if slug.is_all() {
            ViewMode::Aggregate
        } else {
            ViewMode::Normal
        }
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViewMode::Normal => write!(f, "Normal"),
            ViewMode::Aggregate => write!(f, "Aggregate"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_view_mode_from_slug() {
        assert_eq!(ViewMode::from_slug(&CategorySlug::all()), ViewMode::Aggregate);
        assert_eq!(ViewMode::from_slug(&"web-development".into()), ViewMode::Normal);
        // 大小写敏感："all" 不是聚合视图
        assert_eq!(ViewMode::from_slug(&"all".into()), ViewMode::Normal);
    }

    #[test]
    fn test_category_entry_slug() {
        let entry = CategoryEntry::new("id-1", "Web Development");
        assert_eq!(entry.slug().as_str(), "web-development");
    }

    #[test]
    fn test_category_list_tolerates_null_data() {
        let resp: CategoryListResponse =
            serde_json::from_value(json!({ "success": true, "data": null })).unwrap();
        assert!(resp.success);
        assert!(resp.data.is_empty());
    }

    #[test]
    fn test_category_entry_missing_id_decodes_as_empty() {
        let resp: CategoryListResponse = serde_json::from_value(json!({
            "success": true,
            "data": [{ "name": "Web Development" }, { "_id": "c2", "name": "Python" }]
        }))
        .unwrap();
        assert_eq!(resp.data.len(), 2);
        assert!(resp.data[0].id.is_empty());
        assert_eq!(resp.data[1].id.as_str(), "c2");
    }

    #[test]
    fn test_category_id_blank_is_empty() {
        assert!(CategoryId::new("").is_empty());
        assert!(CategoryId::new("   ").is_empty());
        assert!(!CategoryId::new("6651c64c4f8f9d1ec3ab462f").is_empty());
    }
}
