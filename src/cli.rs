//! 命令行参数定义

use clap::Parser;
use std::path::PathBuf;

/// 分析目录下的 docx 文件，使用 Ollama 生成 Markdown 分析论文
#[derive(Debug, Parser)]
#[command(name = "docx_analyzer", version)]
pub struct Cli {
    /// 待扫描 docx 文件的目录
    pub directory: PathBuf,

    /// 论文输出目录
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// 使用的 Ollama 模型
    #[arg(short, long, default_value = "llama3.2")]
    pub model: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["docx_analyzer", "/data/docs"]);
        assert_eq!(cli.directory, PathBuf::from("/data/docs"));
        assert!(cli.output.is_none());
        assert_eq!(cli.model, "llama3.2");
    }

    #[test]
    fn test_overrides() {
        let cli = Cli::parse_from([
            "docx_analyzer",
            "/data/docs",
            "-o",
            "/tmp/out",
            "-m",
            "qwen2.5",
        ]);
        assert_eq!(cli.output, Some(PathBuf::from("/tmp/out")));
        assert_eq!(cli.model, "qwen2.5");
    }
}
