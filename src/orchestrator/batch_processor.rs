//! 批量分析器 - 编排层
//!
//! ## 职责
//!
//! 本模块是整个应用的入口，负责批量文件的处理和资源管理。
//!
//! ## 核心功能
//!
//! 1. **扫描**：递归发现所有待处理的 docx 文件
//! 2. **输出目录解析**：显式指定，或根据输入目录名推导
//! 3. **派发**：根据执行策略一次性派发全部任务，用 Semaphore 限制并发
//! 4. **收集**：按完成顺序收集结果，独占递增编号计数器并写出报告
//! 5. **中断处理**：Ctrl-C 时停止收集并正常退出
//!
//! ## 设计特点
//!
//! - **顶层编排**：不处理单个文件的细节，向下委托 workflow
//! - **唯一的共享状态持有者**：编号计数器和输出目录只在收集循环里使用
//! - **完成顺序编号**：报告编号反映完成时刻而不是提交顺序，跨运行不确定

use crate::config::Config;
use crate::error::FileError;
use crate::orchestrator::scanner;
use crate::services::ReportWriter;
use crate::strategy::{ExecutionStrategy, PoolKind};
use crate::workflow::{process_file, FailureRecord, FileOutcome};
use anyhow::{Context, Result};
use futures::stream::{FuturesUnordered, StreamExt};
use regex::Regex;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::Semaphore;
use tracing::{error, info, warn};

/// 批量分析器
pub struct Analyzer {
    config: Config,
    strategy: ExecutionStrategy,
}

impl Analyzer {
    /// 创建新的分析器，执行策略根据机器并行度检测一次
    pub fn new(config: Config) -> Self {
        Self {
            strategy: ExecutionStrategy::detect(),
            config,
        }
    }

    /// 使用指定的执行策略创建分析器（测试时注入确定性策略）
    pub fn with_strategy(config: Config, strategy: ExecutionStrategy) -> Self {
        Self { config, strategy }
    }

    /// 运行批量分析
    pub async fn run(&self) -> Result<()> {
        // ========== 扫描 ==========
        let files = scanner::find_docx_files(&self.config.input_dir)
            .await
            .context("扫描输入目录失败")?;

        if files.is_empty() {
            warn!(
                "⚠️ 在 '{}' 中没有找到 docx 文件，程序结束",
                self.config.input_dir.display()
            );
            return Ok(());
        }

        let total = files.len();

        // 确认有文件之后才创建输出目录
        let output_dir = resolve_output_dir(&self.config)?;
        tokio::fs::create_dir_all(&output_dir)
            .await
            .map_err(|source| FileError::CreateDirFailed {
                path: output_dir.clone(),
                source,
            })?;

        log_startup(&self.strategy);
        log_files_found(total, &output_dir);

        // ========== 派发 ==========
        // 全部任务一次性提交，Semaphore 限制同时执行的数量
        let semaphore = Arc::new(Semaphore::new(self.strategy.workers));
        let mut pending = FuturesUnordered::new();

        for path in files {
            let semaphore = Arc::clone(&semaphore);
            let config = self.config.clone();
            let strategy = self.strategy;
            let task_path = path.clone();

            let handle = tokio::spawn(async move {
                // Semaphore 只在关闭时返回错误，这里永远不会关闭
                let _permit = semaphore.acquire_owned().await.ok();
                process_file(task_path, config, strategy).await
            });

            pending.push(async move { (path, handle.await) });
        }

        // ========== 收集 ==========
        // 完成编号计数器只在本循环中递增，不与 worker 共享
        let writer = ReportWriter::new(&output_dir, &self.config.model_name);
        let mut counter: usize = 0;

        // 中断信号只注册一次，避免循环间隙漏掉 SIGINT
        let ctrl_c = tokio::signal::ctrl_c();
        tokio::pin!(ctrl_c);

        loop {
            tokio::select! {
                _ = &mut ctrl_c => {
                    warn!("\n⚠️ 分析被用户中断");
                    return Ok(());
                }
                next = pending.next() => {
                    let Some((path, joined)) = next else { break };

                    let outcome = match joined {
                        Ok(outcome) => outcome,
                        // 任务 panic 或被取消时也为该文件生成错误报告
                        Err(e) => {
                            error!("任务执行失败 {}: {}", path.display(), e);
                            FileOutcome::Failure(FailureRecord {
                                source_path: path,
                                error: format!("任务执行失败: {}", e),
                            })
                        }
                    };

                    counter += 1;
                    writer
                        .write(counter, &outcome)
                        .await
                        .context("写入报告失败")?;
                    log_processed(counter, total, &outcome);
                }
            }
        }

        print_final_stats(counter, &output_dir);

        Ok(())
    }
}

/// 解析输出目录
///
/// 显式指定优先；否则用输入目录名的 slug 拼上 `_essays` 后缀，
/// 放在可执行文件所在目录旁边
fn resolve_output_dir(config: &Config) -> Result<PathBuf> {
    if let Some(dir) = &config.output_dir {
        return Ok(dir.clone());
    }

    let base_name = config
        .input_dir
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| "docs".to_string());
    let slug = slugify(&base_name)?;

    let program_dir = std::env::current_exe()
        .ok()
        .and_then(|p| p.parent().map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from("."));

    Ok(program_dir.join(format!("{}_essays", slug)))
}

/// 目录名转 slug：小写，连续的非字母数字字符折叠为单个下划线
fn slugify(name: &str) -> Result<String> {
    let re = Regex::new(r"[^a-zA-Z0-9]+")?;
    Ok(re.replace_all(&name.to_lowercase(), "_").to_string())
}

// ========== 日志辅助函数 ==========

fn log_startup(strategy: &ExecutionStrategy) {
    let kind = match strategy.kind {
        PoolKind::Blocking => "blocking 池",
        PoolKind::Async => "异步任务",
    };
    info!("{}", "=".repeat(60));
    info!("🚀 程序启动 - 批量文档分析模式");
    info!("📊 执行方式: {}，worker 数量: {}", kind, strategy.workers);
    info!("{}", "=".repeat(60));
}

fn log_files_found(total: usize, output_dir: &Path) {
    info!("✓ 找到 {} 个待分析的 docx 文件", total);
    info!("📁 报告输出目录: {}", output_dir.display());
}

fn log_processed(counter: usize, total: usize, outcome: &FileOutcome) {
    let name = outcome
        .source_path()
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();
    match outcome {
        FileOutcome::Success(_) => info!("✓ [{}/{}] 已处理 {}", counter, total, name),
        FileOutcome::Failure(r) => warn!("❌ [{}/{}] 处理失败 {}: {}", counter, total, name, r.error),
    }
}

fn print_final_stats(count: usize, output_dir: &Path) {
    info!("{}", "=".repeat(60));
    info!(
        "✅ 分析完成！共 {} 份报告已保存至: {}",
        count,
        output_dir.display()
    );
    info!("{}", "=".repeat(60));
}
