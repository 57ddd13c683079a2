//! 单文件处理流程 - 流程层
//!
//! 核心职责：定义"一个文件"的完整处理流程
//!
//! 流程顺序：
//! 1. 提取 docx 内容
//! 2. 内容为空 → 合成占位论文（不调用生成服务）
//! 3. 否则构建提示词 → 调用生成服务
//!
//! 任何一步出错都会被捕获并转换为 `FailureRecord`，
//! 本模块对调用方来说永远不会失败

use crate::clients::OllamaClient;
use crate::config::Config;
use crate::error::AppError;
use crate::extractor::{extract_docx, ExtractedContent};
use crate::services::prompt_builder;
use crate::strategy::{ExecutionStrategy, PoolKind};
use std::path::{Path, PathBuf};
use tracing::debug;

/// 成功处理的结果
#[derive(Debug)]
pub struct SuccessRecord {
    pub source_path: PathBuf,
    pub content: ExtractedContent,
    /// 生成的论文文本，或"无内容"占位文案
    pub essay: String,
}

/// 处理失败的结果
#[derive(Debug)]
pub struct FailureRecord {
    pub source_path: PathBuf,
    /// 原始错误信息，原样保留用于诊断
    pub error: String,
}

/// 单个文件的处理结果
///
/// 要么是带论文的成功记录，要么是带错误信息的失败记录，
/// 两者互斥，由类型保证
#[derive(Debug)]
pub enum FileOutcome {
    Success(SuccessRecord),
    Failure(FailureRecord),
}

impl FileOutcome {
    /// 来源文件路径
    pub fn source_path(&self) -> &Path {
        match self {
            FileOutcome::Success(r) => &r.source_path,
            FileOutcome::Failure(r) => &r.source_path,
        }
    }
}

/// 处理单个 docx 文件
///
/// 这是提交给 worker 池的工作单元：不共享任何可变状态，
/// 自己持有到生成服务的连接
///
/// # 参数
/// - `path`: docx 文件路径
/// - `config`: 程序配置（模型名、服务地址）
/// - `strategy`: 执行策略（决定提取是否走 blocking 池）
///
/// # 返回
/// 永远返回 `FileOutcome`，不会向调用方抛出错误
pub async fn process_file(path: PathBuf, config: Config, strategy: ExecutionStrategy) -> FileOutcome {
    match run_pipeline(&path, &config, strategy).await {
        Ok(record) => FileOutcome::Success(record),
        Err(e) => FileOutcome::Failure(FailureRecord {
            source_path: path,
            error: e.to_string(),
        }),
    }
}

/// 实际的处理流水线，错误在 `process_file` 中统一捕获
async fn run_pipeline(
    path: &Path,
    config: &Config,
    strategy: ExecutionStrategy,
) -> Result<SuccessRecord, AppError> {
    let content = match strategy.kind {
        PoolKind::Blocking => {
            let owned = path.to_path_buf();
            tokio::task::spawn_blocking(move || extract_docx(&owned))
                .await
                .map_err(|e| AppError::Other(format!("提取任务执行失败: {}", e)))??
        }
        PoolKind::Async => extract_docx(path)?,
    };

    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();

    let essay = if content.paragraphs.is_empty() {
        debug!("文档无可读内容，跳过生成: {}", path.display());
        prompt_builder::no_content_message(&file_name)
    } else {
        let prompt =
            prompt_builder::build_prompt(&content, &file_name, &path.display().to_string());
        let client = OllamaClient::new(config);
        client.generate(&prompt).await?
    };

    Ok(SuccessRecord {
        source_path: path.to_path_buf(),
        content,
        essay,
    })
}
