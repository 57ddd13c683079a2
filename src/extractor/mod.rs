//! 文档提取层
//!
//! 负责从 docx 文件中提取纯文本内容，不关心后续的提示词和生成流程

pub mod docx;

pub use docx::{extract_docx, ExtractedContent};
