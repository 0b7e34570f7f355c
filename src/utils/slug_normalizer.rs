//! 分类名归一化工具
//! 分类展示名 → URL 友好的 slug

/// slug 归一化工具
pub struct SlugNormalizer;

impl SlugNormalizer {
    /// 每个空格替换为连字符后转小写（连续空格产生连续连字符）
    pub fn normalize(name: &str) -> String {
        name.replace(' ', "-").to_lowercase()
    }

    /// 分类名与 slug 是否匹配
    pub fn matches(name: &str, slug: &str) -> bool {
        Self::normalize(name) == slug
    }
}
