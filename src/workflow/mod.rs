//! 流程层（Workflow Layer）
//!
//! 定义"一个文件"的完整处理流程：提取 → 提示词 → 生成。
//! 整个流程包在一个失败边界里，对外永远返回 `FileOutcome`，
//! 保证单个文件的失败不会影响同批次的其他文件

pub mod file_worker;

pub use file_worker::{process_file, FailureRecord, FileOutcome, SuccessRecord};
