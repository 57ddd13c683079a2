use std::fmt;
use std::path::PathBuf;

/// 应用程序错误类型
#[derive(Debug)]
pub enum AppError {
    /// 文档提取错误
    Extraction(ExtractionError),
    /// 生成服务错误
    Generation(GenerationError),
    /// 文件操作错误
    File(FileError),
    /// 其他错误（用于包装第三方库错误）
    Other(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Extraction(e) => write!(f, "提取错误: {}", e),
            AppError::Generation(e) => write!(f, "生成错误: {}", e),
            AppError::File(e) => write!(f, "文件错误: {}", e),
            AppError::Other(msg) => write!(f, "错误: {}", msg),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Extraction(e) => Some(e),
            AppError::Generation(e) => Some(e),
            AppError::File(e) => Some(e),
            AppError::Other(_) => None,
        }
    }
}

impl From<ExtractionError> for AppError {
    fn from(e: ExtractionError) -> Self {
        AppError::Extraction(e)
    }
}

impl From<GenerationError> for AppError {
    fn from(e: GenerationError) -> Self {
        AppError::Generation(e)
    }
}

impl From<FileError> for AppError {
    fn from(e: FileError) -> Self {
        AppError::File(e)
    }
}

/// 文档提取错误
#[derive(Debug)]
pub enum ExtractionError {
    /// 文件无法打开
    OpenFailed {
        path: PathBuf,
        source: std::io::Error,
    },
    /// 文件不是有效的 docx 包（不是 ZIP 或缺少 word/document.xml）
    InvalidPackage { path: PathBuf, reason: String },
    /// document.xml 解析失败
    XmlParseFailed {
        path: PathBuf,
        source: quick_xml::Error,
    },
}

impl fmt::Display for ExtractionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExtractionError::OpenFailed { path, source } => {
                write!(f, "无法打开文件 {}: {}", path.display(), source)
            }
            ExtractionError::InvalidPackage { path, reason } => {
                write!(f, "无效的 docx 文件 {}: {}", path.display(), reason)
            }
            ExtractionError::XmlParseFailed { path, source } => {
                write!(f, "解析 document.xml 失败 {}: {}", path.display(), source)
            }
        }
    }
}

impl std::error::Error for ExtractionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ExtractionError::OpenFailed { source, .. } => Some(source),
            ExtractionError::InvalidPackage { .. } => None,
            ExtractionError::XmlParseFailed { source, .. } => Some(source),
        }
    }
}

/// 生成服务错误
#[derive(Debug)]
pub enum GenerationError {
    /// 网络请求失败
    RequestFailed {
        model: String,
        source: reqwest::Error,
    },
    /// 服务返回了非成功状态码
    ServiceStatus {
        model: String,
        status: reqwest::StatusCode,
        body: String,
    },
    /// 响应解析失败
    ResponseParseFailed {
        model: String,
        source: reqwest::Error,
    },
}

impl fmt::Display for GenerationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenerationError::RequestFailed { model, source } => {
                write!(f, "生成服务调用失败 (模型: {}): {}", model, source)
            }
            GenerationError::ServiceStatus {
                model,
                status,
                body,
            } => {
                write!(
                    f,
                    "生成服务返回错误 (模型: {}, 状态: {}): {}",
                    model, status, body
                )
            }
            GenerationError::ResponseParseFailed { model, source } => {
                write!(f, "无法解析生成服务响应 (模型: {}): {}", model, source)
            }
        }
    }
}

impl std::error::Error for GenerationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GenerationError::RequestFailed { source, .. }
            | GenerationError::ResponseParseFailed { source, .. } => Some(source),
            GenerationError::ServiceStatus { .. } => None,
        }
    }
}

/// 文件操作错误
#[derive(Debug)]
pub enum FileError {
    /// 目录扫描失败
    ScanFailed {
        path: PathBuf,
        source: std::io::Error,
    },
    /// 创建输出目录失败
    CreateDirFailed {
        path: PathBuf,
        source: std::io::Error,
    },
    /// 写入报告失败
    WriteFailed {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl fmt::Display for FileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileError::ScanFailed { path, source } => {
                write!(f, "无法扫描目录 {}: {}", path.display(), source)
            }
            FileError::CreateDirFailed { path, source } => {
                write!(f, "无法创建输出目录 {}: {}", path.display(), source)
            }
            FileError::WriteFailed { path, source } => {
                write!(f, "无法写入报告 {}: {}", path.display(), source)
            }
        }
    }
}

impl std::error::Error for FileError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FileError::ScanFailed { source, .. }
            | FileError::CreateDirFailed { source, .. }
            | FileError::WriteFailed { source, .. } => Some(source),
        }
    }
}
