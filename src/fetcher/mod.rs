//! 拉取模块：外部数据源抽象、HTTP 实现、目录页拉取器
pub mod source;
pub mod http_client;
pub mod catalog_fetcher;

use std::future::Future;
use std::time::Duration;

use crate::error::{CatResult, CatalogError};

// 导出核心接口
pub use self::source::{CatalogSource, CategorySource};
pub use self::http_client::HttpCatalogClient;
pub use self::catalog_fetcher::CatalogDataFetcher;

/// 为外部调用加超时，超时归类为拉取失败
pub(crate) async fn with_timeout<T, F>(timeout: Duration, what: &str, fut: F) -> CatResult<T>
where
    F: Future<Output = CatResult<T>>,
{
    match tokio::time::timeout(timeout, fut).await {
        Ok(result) => result,
        Err(_) => Err(CatalogError::FetchFailed(format!(
            "{}拉取超时（{}秒）",
            what,
            timeout.as_secs()
        ))),
    }
}
