//! docx 内容提取
//!
//! docx 本质上是一个 ZIP 包，正文内容位于 `word/document.xml`。
//! 这里直接用 ZIP + 流式 XML 解析提取段落和表格文本：
//! - 顶层 `w:p` 的文本合并为一个段落，空白段落被丢弃
//! - `w:tbl` 中每个 `w:tc` 的文本作为一个单元格，空单元格被丢弃，
//!   行内单元格用 ` | ` 连接，表格之间用空行分隔
//! - 嵌套表格的文本折叠进外层单元格

use crate::error::ExtractionError;
use quick_xml::events::Event;
use quick_xml::Reader;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use zip::ZipArchive;

/// 从单个文档中提取出的内容
#[derive(Debug, Clone, Default)]
pub struct ExtractedContent {
    /// 段落文本（段落之间以空行分隔）
    pub paragraphs: String,
    /// 表格文本（展平后，表格之间以空行分隔）
    pub tables: String,
    /// 段落文本的单词数
    pub word_count: usize,
    /// 保留下来的段落数
    pub paragraph_count: usize,
}

/// 提取单个 docx 文件的段落和表格内容
///
/// # 参数
/// - `path`: docx 文件路径
///
/// # 返回
/// 返回提取出的内容；文件无法打开或解析时返回 `ExtractionError`
pub fn extract_docx(path: &Path) -> Result<ExtractedContent, ExtractionError> {
    let file = File::open(path).map_err(|source| ExtractionError::OpenFailed {
        path: path.to_path_buf(),
        source,
    })?;

    let mut archive = ZipArchive::new(file).map_err(|e| ExtractionError::InvalidPackage {
        path: path.to_path_buf(),
        reason: format!("不是有效的 ZIP 包: {}", e),
    })?;

    let mut document_xml = String::new();
    {
        let mut entry =
            archive
                .by_name("word/document.xml")
                .map_err(|_| ExtractionError::InvalidPackage {
                    path: path.to_path_buf(),
                    reason: "缺少 word/document.xml".to_string(),
                })?;
        entry
            .read_to_string(&mut document_xml)
            .map_err(|e| ExtractionError::InvalidPackage {
                path: path.to_path_buf(),
                reason: format!("无法读取 word/document.xml: {}", e),
            })?;
    }

    parse_document_xml(&document_xml).map_err(|source| ExtractionError::XmlParseFailed {
        path: path.to_path_buf(),
        source,
    })
}

/// 解析 document.xml，收集顶层段落和表格
fn parse_document_xml(xml: &str) -> Result<ExtractedContent, quick_xml::Error> {
    let mut reader = Reader::from_str(xml);

    let mut paragraphs: Vec<String> = Vec::new();
    let mut tables: Vec<String> = Vec::new();

    // 解析状态
    let mut in_text = false;
    let mut tbl_depth: usize = 0;
    let mut current_para = String::new();
    let mut current_cell = String::new();
    let mut current_row: Vec<String> = Vec::new();
    let mut current_table: Vec<String> = Vec::new();

    loop {
        match reader.read_event()? {
            Event::Start(e) => match e.name().as_ref() {
                b"w:tbl" => {
                    tbl_depth += 1;
                    if tbl_depth == 1 {
                        current_table.clear();
                    }
                }
                b"w:tr" if tbl_depth == 1 => current_row.clear(),
                b"w:tc" if tbl_depth == 1 => current_cell.clear(),
                b"w:p" if tbl_depth == 0 => current_para.clear(),
                b"w:t" => in_text = true,
                _ => {}
            },
            Event::Text(t) => {
                if in_text {
                    let text = t.unescape()?;
                    if tbl_depth > 0 {
                        current_cell.push_str(&text);
                    } else {
                        current_para.push_str(&text);
                    }
                }
            }
            Event::Empty(e) => match e.name().as_ref() {
                // 制表符和换行在 p.text 中分别体现为 \t 和 \n
                b"w:tab" => push_char(tbl_depth, &mut current_cell, &mut current_para, '\t'),
                b"w:br" | b"w:cr" => {
                    push_char(tbl_depth, &mut current_cell, &mut current_para, '\n')
                }
                _ => {}
            },
            Event::End(e) => match e.name().as_ref() {
                b"w:t" => in_text = false,
                b"w:p" if tbl_depth == 0 => {
                    let trimmed = current_para.trim();
                    if !trimmed.is_empty() {
                        paragraphs.push(trimmed.to_string());
                    }
                }
                // 单元格内的多个段落以换行分隔
                b"w:p" => current_cell.push('\n'),
                b"w:tc" if tbl_depth == 1 => {
                    let trimmed = current_cell.trim();
                    if !trimmed.is_empty() {
                        current_row.push(trimmed.to_string());
                    }
                }
                b"w:tr" if tbl_depth == 1 => {
                    if !current_row.is_empty() {
                        current_table.push(current_row.join(" | "));
                        current_row.clear();
                    }
                }
                b"w:tbl" => {
                    if tbl_depth == 1 && !current_table.is_empty() {
                        tables.push(current_table.join("\n"));
                    }
                    tbl_depth = tbl_depth.saturating_sub(1);
                }
                _ => {}
            },
            Event::Eof => break,
            _ => {}
        }
    }

    let word_count = paragraphs
        .iter()
        .map(|p| p.split_whitespace().count())
        .sum();
    let paragraph_count = paragraphs.len();

    Ok(ExtractedContent {
        paragraphs: paragraphs.join("\n\n"),
        tables: tables.join("\n\n"),
        word_count,
        paragraph_count,
    })
}

fn push_char(tbl_depth: usize, cell: &mut String, para: &mut String, c: char) {
    if tbl_depth > 0 {
        cell.push(c);
    } else {
        para.push(c);
    }
}
