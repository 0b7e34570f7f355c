//! 目录页载荷模型
//! selectedCategory / differentCategory / mostSellingCourses 三部分均可缺失

use serde::{Deserialize, Serialize};

use super::course::Course;
use super::null_as_default;

/// 分类桶：分类名 + 有序课程列表
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CategoryBucket {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub courses: Vec<Course>,
}

impl CategoryBucket {
    pub fn new(name: impl Into<String>, courses: Vec<Course>) -> Self {
        Self {
            name: Some(name.into()),
            courses,
        }
    }
}

/// 目录页数据
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogData {
    #[serde(rename = "selectedCategory", default, skip_serializing_if = "Option::is_none")]
    pub selected_category: Option<CategoryBucket>,
    #[serde(rename = "differentCategory", default, skip_serializing_if = "Option::is_none")]
    pub different_category: Option<CategoryBucket>,
    #[serde(rename = "mostSellingCourses", default, deserialize_with = "null_as_default")]
    pub most_selling_courses: Vec<Course>,
}

/// 目录页服务响应体
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogPayload {
    #[serde(default)]
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<CatalogData>,
}

impl CatalogPayload {
    /// 成功载荷
    pub fn ok(data: CatalogData) -> Self {
        Self {
            success: true,
            message: None,
            data: Some(data),
        }
    }

    /// 服务端拒绝（success=false）
    pub fn rejected(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: Some(message.into()),
            data: None,
        }
    }

    pub fn selected_category(&self) -> Option<&CategoryBucket> {
        self.data.as_ref().and_then(|d| d.selected_category.as_ref())
    }

    pub fn different_category(&self) -> Option<&CategoryBucket> {
        self.data.as_ref().and_then(|d| d.different_category.as_ref())
    }

    /// 所选分类课程（缺失时为空）
    pub fn selected_courses(&self) -> &[Course] {
        self.selected_category().map(|b| b.courses.as_slice()).unwrap_or(&[])
    }

    /// 其他分类课程（缺失时为空）
    pub fn different_courses(&self) -> &[Course] {
        self.different_category().map(|b| b.courses.as_slice()).unwrap_or(&[])
    }

    /// 全站畅销课程（缺失时为空）
    pub fn most_selling_courses(&self) -> &[Course] {
        self.data.as_ref().map(|d| d.most_selling_courses.as_slice()).unwrap_or(&[])
    }
}
