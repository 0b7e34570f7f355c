//! 数据模型：课程、分类、目录页载荷
//! 仅存储数据，无任何业务逻辑，支持序列化/反序列化
pub mod course;
pub mod category;
pub mod payload;

use serde::{Deserialize, Deserializer};

// 导出核心接口
pub use self::course::Course;
pub use self::category::{
    ALL_SLUG, CategoryEntry, CategoryId, CategoryListResponse, CategorySlug, ViewMode,
};
pub use self::payload::{CatalogData, CatalogPayload, CategoryBucket};

/// null 与缺失同等处理，回落为默认值
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
