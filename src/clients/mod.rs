//! 外部服务客户端

pub mod ollama_client;

pub use ollama_client::OllamaClient;
