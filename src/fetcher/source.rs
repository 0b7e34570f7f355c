//! 外部数据源抽象
//! 分类服务与目录页服务，HTTP 实现见 http_client，测试中可替换为内存实现

use async_trait::async_trait;

use crate::error::CatResult;
use crate::model::{CatalogPayload, CategoryId, CategoryListResponse};

/// 分类服务
#[async_trait]
pub trait CategorySource: Send + Sync {
    /// 拉取完整分类列表
    async fn list_categories(&self) -> CatResult<CategoryListResponse>;
}

/// 目录页服务
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// 按分类ID拉取目录页载荷
    async fn catalog_page(&self, category_id: &CategoryId) -> CatResult<CatalogPayload>;
}
