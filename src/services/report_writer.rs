//! 报告写入服务 - 业务能力层
//!
//! 只负责把单个文件的处理结果渲染成 Markdown 报告并写盘，
//! 不关心批次顺序，编号由编排层传入

use crate::error::FileError;
use crate::workflow::FileOutcome;
use std::path::{Path, PathBuf};
use tracing::debug;

/// 报告写入服务
pub struct ReportWriter {
    output_dir: PathBuf,
    model_name: String,
}

impl ReportWriter {
    /// 创建新的报告写入服务
    pub fn new(output_dir: impl Into<PathBuf>, model_name: impl Into<String>) -> Self {
        Self {
            output_dir: output_dir.into(),
            model_name: model_name.into(),
        }
    }

    /// 写入单个报告
    ///
    /// # 参数
    /// - `counter`: 完成顺序编号（从 1 开始，由编排层独占递增）
    /// - `outcome`: 文件处理结果
    ///
    /// # 返回
    /// 返回写入的报告路径
    pub async fn write(&self, counter: usize, outcome: &FileOutcome) -> Result<PathBuf, FileError> {
        let filename = report_filename(counter, outcome.source_path());
        let report_path = self.output_dir.join(filename);

        let analysis_date = chrono::Local::now()
            .format("%Y-%m-%d %H:%M:%S")
            .to_string();
        let content = render_report(outcome, &self.model_name, &analysis_date);

        debug!("写入报告: {}", report_path.display());

        tokio::fs::write(&report_path, content)
            .await
            .map_err(|source| FileError::WriteFailed {
                path: report_path.clone(),
                source,
            })?;

        Ok(report_path)
    }
}

/// 构建报告文件名：`{NN}_{源文件名主干}_analysis.md`
fn report_filename(counter: usize, source_path: &Path) -> String {
    let stem = source_path
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default();
    format!("{:02}_{}_analysis.md", counter, stem)
}

/// 渲染报告内容
fn render_report(outcome: &FileOutcome, model_name: &str, analysis_date: &str) -> String {
    match outcome {
        FileOutcome::Failure(record) => {
            format!(
                "# Error: {}\n\nFile: {}\n",
                record.error,
                record.source_path.display()
            )
        }
        FileOutcome::Success(record) => {
            let file_name = record
                .source_path
                .file_name()
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_default();
            format!(
                "# Document Analysis for {}\n\n\
                 **Analysis Date:** {}\n\
                 **Word Count:** {}\n\
                 **Paragraph Count:** {}\n\n\
                 ---\n\n\
                 {}\n\n---\n\n*Generated using Ollama model: {}*",
                file_name,
                analysis_date,
                record.content.word_count,
                record.content.paragraph_count,
                record.essay,
                model_name,
            )
        }
    }
}
