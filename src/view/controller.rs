//! 目录视图控制器
//! 串联 slug 解析 → 目录页拉取 → 课程聚合，并维护视图状态
//!
//! 每次导航领取一个递增票据，只有持有最新票据的导航结果可以写入状态，
//! 过期的解析结果不会触发拉取，过期的载荷不会覆盖新载荷。

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::{debug, info, warn};

use super::view_model::{CatalogViewModel, ViewError, ViewState, ViewStatus};
use crate::aggregator::{CourseAggregator, FilterTerm};
use crate::config::GlobalConfig;
use crate::error::CatResult;
use crate::fetcher::{CatalogDataFetcher, CatalogSource, CategorySource, HttpCatalogClient};
use crate::model::{CatalogPayload, CategoryId, CategorySlug, ViewMode};
use crate::resolver::CategoryResolver;

/// 导航结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationOutcome {
    /// 结果已写入视图状态
    Applied,
    /// 期间发生了更新的导航，本次结果被丢弃
    Superseded,
}

struct ControllerInner {
    resolver: CategoryResolver,
    fetcher: CatalogDataFetcher,
    aggregator: CourseAggregator,
    latest_ticket: AtomicU64,
    state: Mutex<ViewState>,
}

/// 目录视图控制器（可克隆，克隆体共享状态）
#[derive(Clone)]
pub struct CatalogController {
    inner: Arc<ControllerInner>,
}

impl CatalogController {
    pub fn new(resolver: CategoryResolver, fetcher: CatalogDataFetcher, aggregator: CourseAggregator) -> Self {
        Self {
            inner: Arc::new(ControllerInner {
                resolver,
                fetcher,
                aggregator,
                latest_ticket: AtomicU64::new(0),
                state: Mutex::new(ViewState::default()),
            }),
        }
    }

    /// 使用自定义数据源创建
    pub fn with_sources(
        categories: Arc<dyn CategorySource>,
        catalog: Arc<dyn CatalogSource>,
        config: &GlobalConfig,
    ) -> Self {
        Self::new(
            CategoryResolver::new(categories, config),
            CatalogDataFetcher::new(catalog, config),
            CourseAggregator::from_config(config),
        )
    }

    /// 使用 HTTP 客户端创建
    pub fn from_config(config: &GlobalConfig) -> CatResult<Self> {
        let client = Arc::new(HttpCatalogClient::new(config)?);
        Ok(Self::with_sources(client.clone(), client, config))
    }

    fn state(&self) -> MutexGuard<'_, ViewState> {
        self.inner.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn is_latest(&self, ticket: u64) -> bool {
        self.inner.latest_ticket.load(Ordering::SeqCst) == ticket
    }

    /// 切换到新的目录 slug
    pub async fn navigate(&self, slug: impl Into<CategorySlug>) -> NavigationOutcome {
        self.run(slug.into(), false).await
    }

    /// 重新拉取当前 slug 的数据（即使分类ID未变化）
    pub async fn refresh(&self) -> Option<NavigationOutcome> {
        let slug = self.state().slug.clone()?;
        Some(self.run(slug, true).await)
    }

    async fn run(&self, slug: CategorySlug, force_fetch: bool) -> NavigationOutcome {
        let mode = ViewMode::from_slug(&slug);

        // 票据与 slug/模式在同一把锁内写入，更早的导航无法覆盖更新的模式
        let ticket = {
            let mut state = self.state();
            let ticket = self.inner.latest_ticket.fetch_add(1, Ordering::SeqCst) + 1;
            state.slug = Some(slug.clone());
            state.mode = mode;
            state.failure = None;
            state.pending = true;
            state.recompute(&self.inner.aggregator);
            ticket
        };
        info!("导航到目录 [{}]，模式：{}，票据：{}", slug, mode, ticket);

        // 1. 解析分类ID
        let category_id = match self.inner.resolver.resolve(&slug).await {
            Ok(id) => id,
            Err(e) => {
                warn!("目录 [{}] 分类解析失败：{}", slug, e);
                return self.commit(ticket, |state| {
                    state.category_id = None;
                    state.payload = None;
                    state.failure = Some(ViewError::from(&e));
                });
            }
        };

        // 2. 解析结果过期则不触发拉取
        let cached = {
            let state = self.state();
            if !self.is_latest(ticket) {
                debug!("丢弃过期的解析结果：[{}] → {}（票据 {}）", slug, category_id, ticket);
                return NavigationOutcome::Superseded;
            }
            match (&state.category_id, &state.payload) {
                (Some(prev), Some(payload)) if !force_fetch && *prev == category_id && payload.success => {
                    Some(payload.clone())
                }
                _ => None,
            }
        };

        if let Some(payload) = cached {
            debug!("分类ID未变化（{}），复用已有目录数据", category_id);
            return self.commit(ticket, |state| state.payload = Some(payload));
        }

        // 3. 拉取目录页数据
        let result = self.inner.fetcher.fetch(&category_id).await;
        self.commit(ticket, move |state| match result {
            Ok(payload) => Self::apply_payload(state, category_id, payload),
            Err(e) => {
                warn!("目录 [{}] 数据拉取失败：{}", category_id, e);
                state.category_id = Some(category_id);
                state.payload = None;
                state.failure = Some(ViewError::from(&e));
            }
        })
    }

    fn apply_payload(state: &mut ViewState, category_id: CategoryId, payload: CatalogPayload) {
        state.category_id = Some(category_id);
        state.payload = Some(payload);
    }

    /// 仅当票据仍为最新时写入状态并重新推导
    fn commit<F>(&self, ticket: u64, update: F) -> NavigationOutcome
    where
        F: FnOnce(&mut ViewState),
    {
        let mut state = self.state();
        if !self.is_latest(ticket) {
            debug!("丢弃过期的导航结果（票据 {}）", ticket);
            return NavigationOutcome::Superseded;
        }

        update(&mut state);
        state.pending = false;
        state.recompute(&self.inner.aggregator);
        debug!(
            "视图状态已更新：{:?}，主列表 {}/{} 条",
            state.status(),
            state.derived.courses.len(),
            state.derived.total
        );
        NavigationOutcome::Applied
    }

    /// 更新过滤词并基于已缓存载荷重新推导
    pub fn set_filter(&self, term: impl Into<FilterTerm>) {
        let term = term.into();
        let mut state = self.state();
        if state.filter == term {
            return;
        }
        debug!("过滤词更新：[{}]", term.as_str());
        state.filter = term;
        state.recompute(&self.inner.aggregator);
    }

    pub fn status(&self) -> ViewStatus {
        self.state().status()
    }

    pub fn mode(&self) -> ViewMode {
        self.state().mode
    }

    /// 当前已解析的分类ID
    pub fn current_category_id(&self) -> Option<CategoryId> {
        self.state().category_id.clone()
    }

    /// 当前视图快照
    pub fn snapshot(&self) -> CatalogViewModel {
        self.state().snapshot()
    }

    /// 便捷接口：解析并拉取一次，直接返回快照；任何错误态（含 success=false）均返回错误
    pub async fn load_once(config: &GlobalConfig, slug: impl Into<CategorySlug>, filter: &str) -> CatResult<CatalogViewModel> {
        let controller = Self::from_config(config)?;
        controller.set_filter(filter);
        controller.navigate(slug).await;
        controller.snapshot().into_result()
    }
}
