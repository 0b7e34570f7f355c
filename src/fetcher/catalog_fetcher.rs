//! 目录页数据拉取器
//! 负责前置条件检查（分类ID非空）与超时控制

use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

use super::source::CatalogSource;
use super::with_timeout;
use crate::config::GlobalConfig;
use crate::error::{CatResult, CatalogError};
use crate::model::{CatalogPayload, CategoryId};

/// 目录页数据拉取器
#[derive(Clone)]
pub struct CatalogDataFetcher {
    source: Arc<dyn CatalogSource>,
    timeout: Duration,
}

impl CatalogDataFetcher {
    pub fn new(source: Arc<dyn CatalogSource>, config: &GlobalConfig) -> Self {
        Self {
            source,
            timeout: config.timeout(),
        }
    }

    /// 拉取目录页载荷
    /// success=false 的载荷原样返回，由调用方映射为错误视图
    pub async fn fetch(&self, category_id: &CategoryId) -> CatResult<CatalogPayload> {
        if category_id.is_empty() {
            warn!("分类ID为空，跳过目录数据拉取");
            return Err(CatalogError::EmptyCategoryId);
        }

        debug!("开始拉取目录页数据，分类ID：{}", category_id);
        let payload = with_timeout(self.timeout, "目录页数据", self.source.catalog_page(category_id)).await?;

        if !payload.success {
            warn!(
                "目录页服务返回 success=false，分类ID：{}，信息：{}",
                category_id,
                payload.message.as_deref().unwrap_or("-")
            );
        }
        Ok(payload)
    }
}
