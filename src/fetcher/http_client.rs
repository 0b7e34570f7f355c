//! 基于 reqwest 的后端接口客户端
//! 同时实现分类服务与目录页服务

use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use serde_json::json;
use tracing::{debug, warn};
use url::Url;

use super::source::{CatalogSource, CategorySource};
use crate::config::GlobalConfig;
use crate::error::{CatResult, CatalogError};
use crate::model::{CatalogPayload, CategoryId, CategoryListResponse};

/// 后端接口客户端
#[derive(Debug, Clone)]
pub struct HttpCatalogClient {
    client: Client,
    categories_url: Url,
    catalog_page_url: Url,
}

impl HttpCatalogClient {
    /// 按配置创建客户端
    pub fn new(config: &GlobalConfig) -> CatResult<Self> {
        let client = Client::builder()
            .timeout(config.timeout())
            .user_agent(config.user_agent.clone())
            .build()?;

        // 根地址补齐末尾斜杠，避免 join 时丢失最后一段路径
        let mut base = config.api_base_url.trim().to_string();
        if !base.ends_with('/') {
            base.push('/');
        }
        let base = Url::parse(&base)?;

        let categories_url = base.join(config.categories_path.trim_start_matches('/'))?;
        let catalog_page_url = base.join(config.catalog_page_path.trim_start_matches('/'))?;
        debug!("接口地址：分类={}，目录页={}", categories_url, catalog_page_url);

        Ok(Self {
            client,
            categories_url,
            catalog_page_url,
        })
    }

    pub fn categories_url(&self) -> &Url {
        &self.categories_url
    }

    pub fn catalog_page_url(&self) -> &Url {
        &self.catalog_page_url
    }

    /// 检查状态码并解析 JSON 响应体
    async fn decode<T: DeserializeOwned>(url: &Url, response: Response) -> CatResult<T> {
        if !response.status().is_success() {
            return Err(CatalogError::FetchFailed(format!(
                "URL {} 返回状态码 {}",
                url,
                response.status()
            )));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| transport_error(url, e))?;

        serde_json::from_slice(&bytes).map_err(|e| {
            CatalogError::MalformedPayload(format!("URL {} 响应体无法解析：{}", url, e))
        })
    }
}

// 网络层错误统一归类为拉取失败
fn transport_error(url: &Url, err: reqwest::Error) -> CatalogError {
    if err.is_timeout() {
        warn!("请求超时：{}", url);
        CatalogError::FetchFailed(format!("URL {} 请求超时", url))
    } else {
        warn!("请求失败：{}，错误：{}", url, err);
        CatalogError::FetchFailed(format!("URL {} 请求失败：{}", url, err))
    }
}

#[async_trait]
impl CategorySource for HttpCatalogClient {
    async fn list_categories(&self) -> CatResult<CategoryListResponse> {
        let url = &self.categories_url;
        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| transport_error(url, e))?;

        let categories: CategoryListResponse = Self::decode(url, response).await?;
        debug!("分类列表拉取完成，分类数：{}", categories.data.len());
        Ok(categories)
    }
}

#[async_trait]
impl CatalogSource for HttpCatalogClient {
    async fn catalog_page(&self, category_id: &CategoryId) -> CatResult<CatalogPayload> {
        let url = &self.catalog_page_url;
        let response = self
            .client
            .post(url.clone())
            .json(&json!({ "categoryId": category_id }))
            .send()
            .await
            .map_err(|e| transport_error(url, e))?;

        let payload: CatalogPayload = Self::decode(url, response).await?;
        debug!("目录页数据拉取完成，分类ID：{}，success：{}", category_id, payload.success);
        Ok(payload)
    }
}
