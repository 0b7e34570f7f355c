//! 全局配置管理,存储所有可配置项

use std::time::Duration;

/// "All" 视图使用的保留分类ID
pub const DEFAULT_ALL_CATEGORY_ID: &str = "6651c64c4f8f9d1ec3ab462f";

/// 读取接口根地址的环境变量
pub const API_BASE_ENV: &str = "RSCATALOG_API_BASE";

/// 全局配置
#[derive(Debug, Clone)]
pub struct GlobalConfig {
    // 后端接口根地址
    pub api_base_url: String,
    // 分类列表接口路径（GET）
    pub categories_path: String,
    // 目录页数据接口路径（POST）
    pub catalog_page_path: String,
    // "All" 视图的保留分类ID
    pub all_category_id: String,
    // 超时配置（单位：秒）
    pub http_timeout: u64,
    // "Frequently Bought" 截取条数
    pub frequently_bought_limit: usize,
    // 请求 User-Agent
    pub user_agent: String,
    // 是否启用详细日志
    pub verbose: bool,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            api_base_url: "http://localhost:4000/api/v1/".to_string(),
            categories_path: "course/showAllCategories".to_string(),
            catalog_page_path: "course/getCategoryPageDetails".to_string(),
            all_category_id: DEFAULT_ALL_CATEGORY_ID.to_string(),
            http_timeout: 30,
            frequently_bought_limit: 4,
            user_agent: "Rscatalog/0.1.0".to_string(),
            verbose: false,
        }
    }
}

impl GlobalConfig {
    /// 超时时长
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.http_timeout)
    }

    /// 未设置 RUST_LOG 时的默认日志级别
    pub fn default_log_level(&self) -> &'static str {
        if self.verbose { "debug" } else { "info" }
    }
}

/// 配置管理器（单例）
pub struct ConfigManager;

impl ConfigManager {
    /// 获取默认配置
    pub fn get_default() -> GlobalConfig {
        GlobalConfig::default()
    }

    /// 默认配置，接口根地址优先取环境变量
    pub fn from_env() -> GlobalConfig {
        let mut builder = CustomConfigBuilder::new();
        if let Ok(base) = std::env::var(API_BASE_ENV) {
            if !base.trim().is_empty() {
                builder = builder.api_base_url(base);
            }
        }
        builder.build()
    }

    /// 自定义配置
    pub fn custom() -> CustomConfigBuilder {
        CustomConfigBuilder::new()
    }
}

/// 配置构建器（便于自定义配置）
#[derive(Debug, Clone, Default)]
pub struct CustomConfigBuilder {
    config: GlobalConfig,
}

impl CustomConfigBuilder {
    pub fn new() -> Self {
        Self {
            config: GlobalConfig::default(),
        }
    }

    pub fn api_base_url(mut self, url: impl Into<String>) -> Self {
        self.config.api_base_url = url.into();
        self
    }

    pub fn categories_path(mut self, path: impl Into<String>) -> Self {
        self.config.categories_path = path.into();
        self
    }

    pub fn catalog_page_path(mut self, path: impl Into<String>) -> Self {
        self.config.catalog_page_path = path.into();
        self
    }

    pub fn all_category_id(mut self, id: impl Into<String>) -> Self {
        self.config.all_category_id = id.into();
        self
    }

    pub fn http_timeout(mut self, timeout: u64) -> Self {
        self.config.http_timeout = timeout;
        self
    }

    pub fn frequently_bought_limit(mut self, limit: usize) -> Self {
        self.config.frequently_bought_limit = limit;
        self
    }

    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.config.user_agent = agent.into();
        self
    }

    pub fn verbose(mut self, verbose: bool) -> Self {
        self.config.verbose = verbose;
        self
    }

    pub fn build(self) -> GlobalConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ConfigManager::get_default();
        assert_eq!(config.all_category_id, DEFAULT_ALL_CATEGORY_ID);
        assert_eq!(config.frequently_bought_limit, 4);
        assert_eq!(config.timeout(), Duration::from_secs(30));
        assert_eq!(config.default_log_level(), "info");
    }

    #[test]
    fn test_verbose_raises_log_level() {
        let config = ConfigManager::custom().verbose(true).build();
        assert_eq!(config.default_log_level(), "debug");
    }

    #[test]
    fn test_custom_builder_overrides() {
        let config = ConfigManager::custom()
            .api_base_url("https://api.example.com/v2/")
            .all_category_id("abc123")
            .http_timeout(5)
            .frequently_bought_limit(2)
            .build();

        assert_eq!(config.api_base_url, "https://api.example.com/v2/");
        assert_eq!(config.all_category_id, "abc123");
        assert_eq!(config.http_timeout, 5);
        assert_eq!(config.frequently_bought_limit, 2);
        // 未覆盖项保持默认
        assert_eq!(config.categories_path, "course/showAllCategories");
    }
}
