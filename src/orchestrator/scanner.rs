//! 输入文件发现
//!
//! 递归扫描目录下所有 docx 文件，排除 Office 的 `~$` 锁文件

use crate::error::FileError;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::debug;

/// Office 打开文档时生成的锁文件前缀
const LOCK_FILE_PREFIX: &str = "~$";

/// 递归查找目录下所有待处理的 docx 文件
///
/// # 参数
/// - `root`: 扫描的根目录
///
/// # 返回
/// 返回排序后的文件路径列表（可能为空）
pub async fn find_docx_files(root: &Path) -> Result<Vec<PathBuf>, FileError> {
    let mut found = Vec::new();
    let mut stack = vec![root.to_path_buf()];

    while let Some(dir) = stack.pop() {
        let mut entries = fs::read_dir(&dir)
            .await
            .map_err(|source| FileError::ScanFailed {
                path: dir.clone(),
                source,
            })?;

        while let Some(entry) =
            entries
                .next_entry()
                .await
                .map_err(|source| FileError::ScanFailed {
                    path: dir.clone(),
                    source,
                })?
        {
            let path = entry.path();
            let file_type = entry
                .file_type()
                .await
                .map_err(|source| FileError::ScanFailed {
                    path: path.clone(),
                    source,
                })?;

            if file_type.is_dir() {
                stack.push(path);
            } else if is_target_docx(&path) {
                debug!("发现文件: {}", path.display());
                found.push(path);
            }
        }
    }

    found.sort();
    Ok(found)
}

/// 判断是否是待处理的 docx 文件
fn is_target_docx(path: &Path) -> bool {
    let is_docx = path.extension().and_then(|e| e.to_str()) == Some("docx");
    let is_lock_file = path
        .file_name()
        .and_then(|n| n.to_str())
        .map(|n| n.starts_with(LOCK_FILE_PREFIX))
        .unwrap_or(false);
    is_docx && !is_lock_file
}
