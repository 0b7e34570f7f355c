//! 视图状态与对外输出的视图模型
//! 三态：加载中 / 就绪 / 错误

use std::fmt;
use serde::{Deserialize, Serialize};

use crate::aggregator::{CourseAggregator, DerivedCourses, FilterTerm, SecondaryLists};
use crate::error::{CatResult, CatalogError};
use crate::model::{CatalogPayload, CategoryId, CategorySlug, Course, ViewMode};

/// 展示层可见的错误分类
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ViewError {
    /// slug 无匹配分类
    NotFound(String),
    /// 网络/服务端错误或超时
    FetchFailed(String),
    /// 目录页服务返回 success=false
    ServerRejected(Option<String>),
    /// 前置条件不满足（如空分类ID）
    InvalidRequest(String),
}

impl From<&CatalogError> for ViewError {
    fn from(err: &CatalogError) -> Self {
        match err {
            CatalogError::CategoryNotFound(slug) => ViewError::NotFound(slug.clone()),
            e if e.is_fetch_failure() => ViewError::FetchFailed(e.to_string()),
            _ => ViewError::InvalidRequest(err.to_string()),
        }
    }
}

impl fmt::Display for ViewError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViewError::NotFound(slug) => write!(f, "未找到分类：{}", slug),
            ViewError::FetchFailed(msg) => write!(f, "{}", msg),
            ViewError::ServerRejected(Some(msg)) => write!(f, "服务端拒绝：{}", msg),
            ViewError::ServerRejected(None) => write!(f, "服务端拒绝"),
            ViewError::InvalidRequest(msg) => write!(f, "{}", msg),
        }
    }
}

/// 视图三态
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ViewStatus {
    Loading,
    Ready,
    Error(ViewError),
}

impl ViewStatus {
    pub fn is_loading(&self) -> bool {
        matches!(self, ViewStatus::Loading)
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, ViewStatus::Ready)
    }

    pub fn is_error(&self) -> bool {
        matches!(self, ViewStatus::Error(_))
    }
}

/// 对外输出的视图模型（快照）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogViewModel {
    pub slug: Option<CategorySlug>,
    pub mode: ViewMode,
    pub status: ViewStatus,
    pub heading: String,
    pub breadcrumb: String,
    pub filter: String,
    /// 过滤后的主列表
    pub courses: Vec<Course>,
    /// 过滤前主列表长度
    pub total: usize,
    /// 过滤后主列表长度
    pub matched: usize,
    pub secondary: Option<SecondaryLists>,
}

impl CatalogViewModel {
    /// 分类有课程但过滤词无匹配
    pub fn is_filtered_out(&self) -> bool {
        self.status.is_ready() && self.total > 0 && self.matched == 0
    }

    /// 错误态转为 `Err`，其余（就绪/加载中）原样返回
    pub fn into_result(self) -> CatResult<Self> {
        let err = match &self.status {
            ViewStatus::Error(ViewError::NotFound(slug)) => CatalogError::CategoryNotFound(slug.clone()),
            ViewStatus::Error(ViewError::InvalidRequest(msg)) => CatalogError::InvalidInput(msg.clone()),
            ViewStatus::Error(ViewError::FetchFailed(msg)) => CatalogError::FetchFailed(msg.clone()),
            ViewStatus::Error(ViewError::ServerRejected(msg)) => {
                CatalogError::FetchFailed(msg.clone().unwrap_or_else(|| "服务端拒绝".to_string()))
            }
            ViewStatus::Loading | ViewStatus::Ready => return Ok(self),
        };
        Err(err)
    }
}

/// 控制器内部状态
#[derive(Debug, Clone)]
pub(crate) struct ViewState {
    pub slug: Option<CategorySlug>,
    pub mode: ViewMode,
    pub category_id: Option<CategoryId>,
    pub payload: Option<CatalogPayload>,
    pub failure: Option<ViewError>,
    pub pending: bool,
    pub filter: FilterTerm,
    pub derived: DerivedCourses,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            slug: None,
            mode: ViewMode::Normal,
            category_id: None,
            payload: None,
            failure: None,
            pending: false,
            filter: FilterTerm::default(),
            derived: DerivedCourses::default(),
        }
    }
}

impl ViewState {
    pub fn status(&self) -> ViewStatus {
        if let Some(failure) = &self.failure {
            return ViewStatus::Error(failure.clone());
        }
        match &self.payload {
            _ if self.pending => ViewStatus::Loading,
            None => ViewStatus::Loading,
            Some(payload) if !payload.success => ViewStatus::Error(ViewError::ServerRejected(payload.message.clone())),
            Some(_) => ViewStatus::Ready,
        }
    }

    /// 重新推导主列表与次级列表；非就绪状态下不输出任何课程
    pub fn recompute(&mut self, aggregator: &CourseAggregator) {
        self.derived = if self.status().is_ready() {
            aggregator.derive(self.payload.as_ref(), self.mode, &self.filter)
        } else {
            DerivedCourses::default()
        };
    }

    pub fn heading(&self) -> String {
        if self.status().is_ready() {
            CourseAggregator::heading(self.payload.as_ref(), self.mode)
        } else {
            String::new()
        }
    }

    pub fn snapshot(&self) -> CatalogViewModel {
        let heading = self.heading();
        let breadcrumb = if heading.is_empty() {
            "Home / Catalog".to_string()
        } else {
            format!("Home / Catalog / {}", heading)
        };

        CatalogViewModel {
            slug: self.slug.clone(),
            mode: self.mode,
            status: self.status(),
            heading,
            breadcrumb,
            filter: self.filter.as_str().to_string(),
            courses: self.derived.courses.clone(),
            total: self.derived.total,
            matched: self.derived.courses.len(),
            secondary: self.derived.secondary.clone(),
        }
    }
}
