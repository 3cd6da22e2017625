/// Dodona API 客户端
///
/// 封装所有与 Dodona 相关的 HTTP 调用
use crate::config::Config;
use crate::error::TransportError;
use crate::models::{
    ExerciseInformation, SubmissionEnvelope, SubmissionReceipt, SubmissionRecord,
    SubmissionStatus,
};
use async_trait::async_trait;
use reqwest::header::{ACCEPT, AUTHORIZATION};
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::debug;

/// Dodona 提供的三个能力
///
/// 每个调用都需要调用方传入非空 token；本 trait 不读取配置。
#[async_trait]
pub trait DodonaApi: Send + Sync {
    /// 提交代码
    async fn submit(
        &self,
        record: &SubmissionRecord,
        token: &str,
    ) -> Result<SubmissionReceipt, TransportError>;

    /// 获取练习信息，`exercise_url` 不带 `.json`
    async fn fetch_exercise_info(
        &self,
        exercise_url: &str,
        token: &str,
    ) -> Result<ExerciseInformation, TransportError>;

    /// 查询提交状态
    async fn fetch_status(
        &self,
        status_url: &str,
        token: &str,
    ) -> Result<SubmissionStatus, TransportError>;
}

/// `Authorization` 请求头的值
pub fn authorization_header(token: &str) -> String {
    format!("Token token=\"{}\"", token)
}

#[derive(Debug, Deserialize)]
struct StatusResponse {
    status: SubmissionStatus,
}

/// 基于 reqwest 的 Dodona 客户端
#[derive(Debug, Clone)]
pub struct DodonaClient {
    http: Client,
    base_url: String,
}

impl DodonaClient {
    /// 创建新的 Dodona 客户端
    pub fn new(config: &Config) -> Result<Self, TransportError> {
        let http = Client::builder()
            .timeout(config.request_timeout())
            .build()
            .map_err(|e| TransportError::request_failed(&config.base_url, e))?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// 不走系统代理的客户端，测试连接本地服务用
    #[cfg(test)]
    fn direct(base_url: &str) -> Self {
        Self {
            http: Client::builder()
                .no_proxy()
                .timeout(std::time::Duration::from_secs(5))
                .build()
                .unwrap(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// 提交接口地址
    pub fn submissions_url(&self) -> String {
        format!("{}/submissions.json", self.base_url)
    }

    fn authorized(&self, request: RequestBuilder, token: &str) -> RequestBuilder {
        request
            .header(AUTHORIZATION, authorization_header(token))
            .header(ACCEPT, "application/json")
    }

    /// 发送请求并把响应体解析为 `T`
    async fn send_json<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        request: RequestBuilder,
    ) -> Result<T, TransportError> {
        let response = request
            .send()
            .await
            .map_err(|e| TransportError::request_failed(endpoint, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(TransportError::bad_status(endpoint, status.as_u16()));
        }

        let body = response
            .text()
            .await
            .map_err(|e| TransportError::request_failed(endpoint, e))?;

        debug!("{} 响应: {}", endpoint, body);

        serde_json::from_str(&body).map_err(|source| TransportError::JsonParseFailed {
            endpoint: endpoint.to_string(),
            source,
        })
    }
}

#[async_trait]
impl DodonaApi for DodonaClient {
    async fn submit(
        &self,
        record: &SubmissionRecord,
        token: &str,
    ) -> Result<SubmissionReceipt, TransportError> {
        let endpoint = self.submissions_url();
        let payload = SubmissionEnvelope::from(record.clone());

        debug!(
            "提交到 {}: 课程 {} 练习 {} ({} 字节)",
            endpoint,
            record.course_id,
            record.exercise_id,
            record.code.len()
        );

        let request = self.authorized(self.http.post(&endpoint), token).json(&payload);
        self.send_json(&endpoint, request).await
    }

    async fn fetch_exercise_info(
        &self,
        exercise_url: &str,
        token: &str,
    ) -> Result<ExerciseInformation, TransportError> {
        let endpoint = format!("{}.json", exercise_url);
        let request = self.authorized(self.http.get(&endpoint), token);
        self.send_json(&endpoint, request).await
    }

    async fn fetch_status(
        &self,
        status_url: &str,
        token: &str,
    ) -> Result<SubmissionStatus, TransportError> {
        let request = self.authorized(self.http.get(status_url), token);
        let response: StatusResponse = self.send_json(status_url, request).await?;
        Ok(response.status)
    }
}
