// ==========================================
// 船舶正午报告控制台 - HTTP 后端实现
// ==========================================
// 职责: 基于 reqwest 的 NoonReportBackend 实现
// 说明: 不做重试；超时仅在显式配置时生效
// ==========================================

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;

use crate::api::backend::NoonReportBackend;
use crate::api::dto::{
    AddEntryRequest, ChatRequest, ChatResponse, ContradictionCheckRequest,
    ContradictionCheckResponse, NoonDataResponse,
};
use crate::api::error::{ApiError, ApiResult};
use crate::domain::ReportEntry;

pub const GET_NOON_DATA: &str = "/get_noon_data";
pub const CHECK_CONTRADICTION: &str = "/check_contradiction";
pub const CHAT_RESPONSE: &str = "/chat_response";
pub const ADD_ENTRY: &str = "/add_entry";

/// HTTP 后端
#[derive(Debug, Clone)]
pub struct HttpBackend {
    client: Client,
    base_url: String,
}

impl HttpBackend {
    /// 创建 HttpBackend
    ///
    /// # 参数
    /// - base_url: 后端根地址（http/https），末尾斜杠会被去掉
    /// - timeout: 单次请求超时；None 表示一直等待
    pub fn new(base_url: &str, timeout: Option<Duration>) -> ApiResult<Self> {
        let base_url = normalize_base_url(base_url)?;

        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(ApiError::ClientBuild)?;

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url, endpoint)
    }

    async fn get_json<T: DeserializeOwned>(&self, endpoint: &'static str) -> ApiResult<T> {
        tracing::debug!(endpoint, "GET");
        let response = self.send(endpoint, self.client.get(self.url(endpoint))).await?;
        decode(endpoint, response).await
    }

    async fn post_json<B, T>(&self, endpoint: &'static str, body: &B) -> ApiResult<T>
    where
        B: Serialize + ?Sized + Sync,
        T: DeserializeOwned,
    {
        let response = self.send_post(endpoint, body).await?;
        decode(endpoint, response).await
    }

    async fn send_post<B>(&self, endpoint: &'static str, body: &B) -> ApiResult<Response>
    where
        B: Serialize + ?Sized + Sync,
    {
        tracing::debug!(endpoint, "POST");
        let request = self.client.post(self.url(endpoint)).json(body);
        self.send(endpoint, request).await
    }

    /// 发送请求；非 2xx 状态统一映射为 ApiError::Status
    async fn send(&self, endpoint: &'static str, request: RequestBuilder) -> ApiResult<Response> {
        let response = request
            .send()
            .await
            .map_err(|source| ApiError::Http { endpoint, source })?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(endpoint, status = status.as_u16(), "backend returned error status");
            return Err(ApiError::Status {
                endpoint,
                status: status.as_u16(),
            });
        }
        Ok(response)
    }
}

/// 校验并规范化后端根地址
pub fn normalize_base_url(raw: &str) -> ApiResult<String> {
    let trimmed = raw.trim();
    let url = Url::parse(trimmed).map_err(|e| ApiError::InvalidBaseUrl(format!("{}: {}", trimmed, e)))?;
    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(ApiError::InvalidBaseUrl(format!(
            "{}: 仅支持 http/https",
            trimmed
        )));
    }
    Ok(trimmed.trim_end_matches('/').to_string())
}

async fn decode<T: DeserializeOwned>(endpoint: &'static str, response: Response) -> ApiResult<T> {
    let body = response
        .text()
        .await
        .map_err(|source| ApiError::Http { endpoint, source })?;
    serde_json::from_str(&body).map_err(|source| ApiError::Decode { endpoint, source })
}

#[async_trait]
impl NoonReportBackend for HttpBackend {
    async fn get_noon_data(&self) -> ApiResult<Vec<ReportEntry>> {
        let resp: NoonDataResponse = self.get_json(GET_NOON_DATA).await?;
        tracing::debug!(rows = resp.data.len(), "noon data loaded");
        Ok(resp.data)
    }

    async fn check_contradiction(
        &self,
        request: &ContradictionCheckRequest,
    ) -> ApiResult<ContradictionCheckResponse> {
        self.post_json(CHECK_CONTRADICTION, request).await
    }

    async fn chat_response(&self, request: &ChatRequest) -> ApiResult<ChatResponse> {
        self.post_json(CHAT_RESPONSE, request).await
    }

    async fn add_entry(&self, entry: &ReportEntry) -> ApiResult<()> {
        let request = AddEntryRequest {
            entry: entry.clone(),
        };
        // 确认体内容不参与逻辑
        self.send_post(ADD_ENTRY, &request).await?;
        Ok(())
    }
}
