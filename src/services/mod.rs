//! 业务能力层（Services Layer）
//!
//! 描述"我能做什么"，只处理单个文件相关的能力：
//! - `prompt_builder` - 提示词构建能力
//! - `report_writer` - 报告渲染与写盘能力

pub mod prompt_builder;
pub mod report_writer;

pub use report_writer::ReportWriter;
