//! 视图模块：导航编排、视图状态、视图模型
pub mod view_model;
pub mod controller;

// 导出核心接口
pub use self::view_model::{CatalogViewModel, ViewError, ViewStatus};
pub use self::controller::{CatalogController, NavigationOutcome};
