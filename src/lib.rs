//! rscatalog - 课程目录聚合与过滤核心库
//!
//! 数据流：slug → 分类解析 → 分类ID → 目录页拉取 → 课程聚合/过滤 → 视图模型

// 导出全局错误类型
pub use self::error::{CatalogError, CatResult};

// 导出配置模块
pub use self::config::{GlobalConfig, ConfigManager, CustomConfigBuilder};

// 导出数据模型
pub use self::model::{
    Course, CategorySlug, CategoryId, CategoryEntry, CategoryListResponse,
    CatalogPayload, CatalogData, CategoryBucket, ViewMode,
};

// 导出工具模块核心接口
pub use self::utils::SlugNormalizer;

// 导出解析/拉取模块核心接口
pub use self::resolver::CategoryResolver;
pub use self::fetcher::{CategorySource, CatalogSource, HttpCatalogClient, CatalogDataFetcher};

// 导出聚合模块核心接口
pub use self::aggregator::{
    CourseAggregator, FilterTerm, DerivedCourses, SecondaryLists, CourseSection,
};

// 导出视图模块核心接口
pub use self::view::{
    CatalogController, CatalogViewModel, NavigationOutcome, ViewError, ViewStatus,
};

// 声明所有子模块
pub mod config;
pub mod error;
pub mod model;
pub mod utils;
pub mod resolver;
pub mod fetcher;
pub mod aggregator;
pub mod view;
