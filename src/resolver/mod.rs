//! 解析模块：目录 slug → 分类ID
pub mod category_resolver;

pub use self::category_resolver::CategoryResolver;
