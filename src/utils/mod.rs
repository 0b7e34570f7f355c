//! 工具模块
pub mod slug_normalizer;

pub use self::slug_normalizer::SlugNormalizer;
