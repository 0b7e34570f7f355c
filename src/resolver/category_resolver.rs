//! 分类解析器
//! slug → 分类ID；"All" 直接使用保留ID，不访问分类服务

use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

use crate::config::GlobalConfig;
use crate::error::{CatResult, CatalogError};
use crate::fetcher::{CategorySource, with_timeout};
use crate::model::{CategoryEntry, CategoryId, CategorySlug};
use crate::utils::SlugNormalizer;

/// 分类解析器
#[derive(Clone)]
pub struct CategoryResolver {
    source: Arc<dyn CategorySource>,
    all_category_id: CategoryId,
    timeout: Duration,
}

impl CategoryResolver {
    pub fn new(source: Arc<dyn CategorySource>, config: &GlobalConfig) -> Self {
        Self {
            source,
            all_category_id: CategoryId::new(config.all_category_id.clone()),
            timeout: config.timeout(),
        }
    }

    /// "All" 视图使用的保留ID
    pub fn all_category_id(&self) -> &CategoryId {
        &self.all_category_id
    }

    /// 解析 slug 对应的分类ID
    pub async fn resolve(&self, slug: &CategorySlug) -> CatResult<CategoryId> {
        if slug.is_all() {
            debug!("slug 为 All，使用保留分类ID：{}", self.all_category_id);
            return Ok(self.all_category_id.clone());
        }

        debug!("开始解析分类 slug：{}", slug);
        let response = with_timeout(self.timeout, "分类列表", self.source.list_categories()).await?;

        if !response.success {
            return Err(CatalogError::FetchFailed(format!(
                "分类服务返回 success=false：{}",
                response.message.as_deref().unwrap_or("-")
            )));
        }

        let id = Self::find_first(&response.data, slug)?;
        debug!("分类 slug [{}] 解析为 ID：{}", slug, id);
        Ok(id)
    }

    /// 取第一个归一化名称与 slug 相同的分类
    pub fn find_first(categories: &[CategoryEntry], slug: &CategorySlug) -> CatResult<CategoryId> {
        let entry = categories
            .iter()
            .find(|c| SlugNormalizer::matches(&c.name, slug.as_str()))
            .ok_or_else(|| {
                warn!("未找到与 slug [{}] 匹配的分类（共 {} 个分类）", slug, categories.len());
                CatalogError::CategoryNotFound(slug.to_string())
            })?;

        if entry.id.is_empty() {
            warn!("分类 [{}] 的ID为空", entry.name);
            return Err(CatalogError::CategoryNotFound(slug.to_string()));
        }
        Ok(entry.id.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigManager;
    use crate::model::CategoryListResponse;
    use async_trait::async_trait;
    use serde_json::json;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct StaticCategories {
        response: CategoryListResponse,
        calls: AtomicUsize,
    }

    #[async_trait]
    impl CategorySource for StaticCategories {
        async fn list_categories(&self) -> CatResult<CategoryListResponse> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.response.clone())
        }
    }

    /// 响应迟迟不返回的分类服务
    struct SlowCategories;

    #[async_trait]
    impl CategorySource for SlowCategories {
        async fn list_categories(&self) -> CatResult<CategoryListResponse> {
            tokio::time::sleep(Duration::from_secs(60)).await;
            Ok(CategoryListResponse {
                success: true,
                message: None,
                data: vec![CategoryEntry::new("id-py", "Python")],
            })
        }
    }

    fn resolver_with(success: bool, data: Vec<CategoryEntry>) -> (CategoryResolver, Arc<StaticCategories>) {
        let source = Arc::new(StaticCategories {
            response: CategoryListResponse {
                success,
                message: None,
                data,
            },
            calls: AtomicUsize::new(0),
        });
        let resolver = CategoryResolver::new(source.clone(), &ConfigManager::get_default());
        (resolver, source)
    }

    fn sample_categories() -> Vec<CategoryEntry> {
        vec![
            CategoryEntry::new("id-web", "Web Development"),
            CategoryEntry::new("id-py", "Python"),
            CategoryEntry::new("id-web-2", "web development"),
        ]
    }

    #[tokio::test]
    async fn test_all_uses_reserved_id_without_lookup() {
        let (resolver, source) = resolver_with(true, sample_categories());
        let id = resolver.resolve(&CategorySlug::all()).await.unwrap();

        assert_eq!(id.as_str(), crate::config::DEFAULT_ALL_CATEGORY_ID);
        assert_eq!(source.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_resolve_first_match() {
        let (resolver, source) = resolver_with(true, sample_categories());
        let id = resolver.resolve(&"web-development".into()).await.unwrap();

        // 测试场景：两个分类归一化后同名，取第一个
        assert_eq!(id.as_str(), "id-web");
        assert_eq!(source.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_unmatched_slug_is_category_not_found() {
        let (resolver, _source) = resolver_with(true, sample_categories());
        let err = resolver.resolve(&"data-science".into()).await.unwrap_err();

        assert!(matches!(err, CatalogError::CategoryNotFound(ref s) if s == "data-science"));
    }

    #[tokio::test]
    async fn test_empty_category_list() {
        let (resolver, _source) = resolver_with(true, Vec::new());
        let err = resolver.resolve(&"python".into()).await.unwrap_err();
        assert!(matches!(err, CatalogError::CategoryNotFound(_)));
    }

    #[tokio::test]
    async fn test_service_rejection_is_fetch_failed() {
        let (resolver, _source) = resolver_with(false, sample_categories());
        let err = resolver.resolve(&"python".into()).await.unwrap_err();
        assert!(matches!(err, CatalogError::FetchFailed(_)));
    }

    #[tokio::test(start_paused = true)]
    async fn test_category_list_timeout_is_fetch_failed() {
        let config = ConfigManager::custom().http_timeout(1).build();
        let resolver = CategoryResolver::new(Arc::new(SlowCategories), &config);
        let err = resolver.resolve(&"python".into()).await.unwrap_err();

        assert!(matches!(err, CatalogError::FetchFailed(ref msg) if msg.contains("分类列表")));
    }

    #[tokio::test(start_paused = true)]
    async fn test_all_ignores_slow_category_service() {
        let config = ConfigManager::custom().http_timeout(1).build();
        let resolver = CategoryResolver::new(Arc::new(SlowCategories), &config);
        assert!(resolver.resolve(&CategorySlug::all()).await.is_ok());
    }

    #[tokio::test]
    async fn test_entry_without_id_does_not_break_list() {
        let response: CategoryListResponse = serde_json::from_value(json!({
            "success": true,
            "data": [
                { "name": "Web Development" },
                { "_id": "id-py", "name": "Python" }
            ]
        }))
        .unwrap();
        let (resolver, _source) = resolver_with(true, response.data);

        let id = resolver.resolve(&"python".into()).await.unwrap();
        assert_eq!(id.as_str(), "id-py");

        let err = resolver.resolve(&"web-development".into()).await.unwrap_err();
        assert!(matches!(err, CatalogError::CategoryNotFound(_)));
    }

    #[test]
    fn test_matching_entry_with_blank_id() {
        let categories = vec![CategoryEntry::new("", "Python")];
        let err = CategoryResolver::find_first(&categories, &"python".into()).unwrap_err();
        assert!(matches!(err, CatalogError::CategoryNotFound(_)));
    }
}
