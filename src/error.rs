//! 全局错误类型定义

use thiserror::Error;
use url::ParseError as UrlParseError;

#[derive(Error, Debug)]
pub enum CatalogError {
    // 分类解析相关错误
    #[error("未找到匹配的分类：{0}")]
    CategoryNotFound(String),
    #[error("分类ID为空，禁止拉取目录数据")]
    EmptyCategoryId,

    // 拉取相关错误
    #[error("目录数据拉取失败：{0}")]
    FetchFailed(String),
    #[error("目录数据格式错误：{0}")]
    MalformedPayload(String),

    // 网络相关错误
    #[error("网络请求失败：{0}")]
    HttpError(#[from] reqwest::Error),

    // 基础错误
    #[error("URL解析失败：{0}")]
    UrlError(#[from] UrlParseError),
    #[error("无效输入：{0}")]
    InvalidInput(String),
}

impl CatalogError {
    /// 是否属于拉取失败类（网络/服务端/超时）
    pub fn is_fetch_failure(&self) -> bool {
        matches!(
            self,
            CatalogError::FetchFailed(_) | CatalogError::HttpError(_) | CatalogError::MalformedPayload(_)
        )
    }
}

// 全局Result类型
pub type CatResult<T> = Result<T, CatalogError>;
