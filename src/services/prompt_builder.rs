//! 提示词构建服务 - 业务能力层
//!
//! 只负责把提取出的内容渲染成固定结构的分析提示词，
//! 纯函数、确定性，不关心生成流程

use crate::extractor::ExtractedContent;

/// 内容预览的最大字符数
const PREVIEW_CHARS: usize = 500;

/// 文档没有可读内容时的占位文案
pub fn no_content_message(file_name: &str) -> String {
    format!("No readable content found in {}", file_name)
}

/// 构建分析论文提示词
///
/// 固定包含六个论文章节要求、文档统计信息、内容预览（截断到前 500 字符），
/// 以及表格内容（如果有）
///
/// # 参数
/// - `content`: 提取出的文档内容
/// - `file_name`: 文档文件名（用于提示词正文）
/// - `file_path`: 文档完整路径（用于统计信息）
pub fn build_prompt(content: &ExtractedContent, file_name: &str, file_path: &str) -> String {
    let preview: String = content.paragraphs.chars().take(PREVIEW_CHARS).collect();

    let tables_section = if content.tables.is_empty() {
        String::new()
    } else {
        format!("**Tables/Structured Data:**\n{}", content.tables)
    };

    format!(
        r#"
Please write a comprehensive analytical essay about the document "{file_name}" with the following structure, formatted in Markdown:

## Document Overview
Briefly describe the document's purpose and content.

## Key Themes and Topics
List and describe key themes and topics identified.

## Writing Style and Structure Analysis
Analyse the document's writing style and structure.

## Main Arguments or Points Presented
Summarise the core arguments or points.

## Critical Assessment
Provide a critical assessment.

## Conclusions and Significance
Summarise the document's significance and final thoughts.

**Document Statistics:**
- Word count: {word_count}
- Paragraph count: {paragraph_count}
- File path: {file_path}

**Document Content Preview:**
{preview}...

{tables_section}
"#,
        file_name = file_name,
        word_count = content.word_count,
        paragraph_count = content.paragraph_count,
        file_path = file_path,
        preview = preview,
        tables_section = tables_section,
    )
}
