/// Ollama API 客户端
///
/// 封装所有与生成服务相关的调用逻辑
use crate::config::Config;
use crate::error::GenerationError;
use serde::Deserialize;
use serde_json::json;
use tracing::{debug, warn};

/// 生成响应体
#[derive(Debug, Deserialize)]
struct GenerateResponse {
    response: String,
}

/// Ollama 客户端
///
/// 每个 worker 创建自己的客户端实例，互相之间不共享连接
pub struct OllamaClient {
    http: reqwest::Client,
    base_url: String,
    model_name: String,
}

impl OllamaClient {
    /// 创建新的 Ollama 客户端
    pub fn new(config: &Config) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.ollama_base_url.clone(),
            model_name: config.model_name.clone(),
        }
    }

    /// 创建自定义模型的客户端
    pub fn with_model(config: &Config, model_name: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.ollama_base_url.clone(),
            model_name: model_name.into(),
        }
    }

    /// 使用的模型名
    pub fn model_name(&self) -> &str {
        &self.model_name
    }

    /// 发送生成请求
    ///
    /// 不做重试，也不设置超时，失败时错误直接向上传播
    ///
    /// # 参数
    /// - `prompt`: 提示词
    ///
    /// # 返回
    /// 返回生成的文本
    pub async fn generate(&self, prompt: &str) -> Result<String, GenerationError> {
        debug!("正在调用生成服务，模型: {}", self.model_name);
        debug!("提示词长度: {} 字符", prompt.len());

        let url = format!("{}/api/generate", self.base_url);
        let request = json!({
            "model": self.model_name,
            "prompt": prompt,
            "stream": false
        });

        let response = self
            .http
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|source| {
                warn!("生成服务调用失败: {}", source);
                GenerationError::RequestFailed {
                    model: self.model_name.clone(),
                    source,
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!("生成服务返回错误状态: {}", status);
            return Err(GenerationError::ServiceStatus {
                model: self.model_name.clone(),
                status,
                body,
            });
        }

        let parsed: GenerateResponse =
            response
                .json()
                .await
                .map_err(|source| GenerationError::ResponseParseFailed {
                    model: self.model_name.clone(),
                    source,
                })?;

        debug!("生成服务调用成功");

        Ok(parsed.response)
    }
}
