//! # Docx Analyzer
//!
//! 一个批量分析 docx 文档并用 Ollama 生成 Markdown 分析论文的工具
//!
//! ## 架构设计
//!
//! 本系统采用严格的分层架构：
//!
//! ### ① 基础能力层（Extractor / Clients）
//! - `extractor/` - docx 内容提取（ZIP + 流式 XML）
//! - `clients/` - Ollama 生成服务客户端
//!
//! ### ② 业务能力层（Services）
//! - `services/` - 描述"我能做什么"，只处理单个文件
//! - `prompt_builder` - 提示词构建能力
//! - `report_writer` - 报告渲染与写盘能力
//!
//! ### ③ 流程层（Workflow）
//! - `workflow/` - 定义"一个文件"的完整处理流程
//! - `file_worker` - 提取 → 提示词 → 生成，单一失败边界
//!
//! ### ④ 编排层（Orchestration）
//! - `orchestrator/batch_processor` - 批量分析器，管理并发和完成编号
//! - `orchestrator/scanner` - 输入文件发现

pub mod cli;
pub mod clients;
pub mod config;
pub mod error;
pub mod extractor;
pub mod orchestrator;
pub mod services;
pub mod strategy;
pub mod utils;
pub mod workflow;

// 重新导出常用类型
pub use cli::Cli;
pub use config::Config;
pub use error::{AppError, ExtractionError, FileError, GenerationError};
pub use extractor::{extract_docx, ExtractedContent};
pub use orchestrator::Analyzer;
pub use strategy::{ExecutionStrategy, PoolKind};
pub use workflow::{process_file, FailureRecord, FileOutcome, SuccessRecord};
