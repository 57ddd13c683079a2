use crate::cli::Cli;
use std::path::PathBuf;

/// 程序配置
#[derive(Clone, Debug)]
pub struct Config {
    /// 待扫描的输入目录
    pub input_dir: PathBuf,
    /// 输出目录（为 None 时根据输入目录名推导）
    pub output_dir: Option<PathBuf>,
    /// 生成模型名
    pub model_name: String,
    /// 生成服务地址
    pub ollama_base_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from("."),
            output_dir: None,
            model_name: "llama3.2".to_string(),
            ollama_base_url: "http://localhost:11434".to_string(),
        }
    }
}

impl Config {
    /// 从命令行参数和环境变量构建配置
    ///
    /// 命令行参数优先，`OLLAMA_BASE_URL` 只能通过环境变量覆盖
    pub fn from_cli(cli: Cli) -> Self {
        let default = Self::default();
        Self {
            input_dir: cli.directory,
            output_dir: cli.output,
            model_name: cli.model,
            ollama_base_url: std::env::var("OLLAMA_BASE_URL")
                .unwrap_or(default.ollama_base_url),
        }
    }
}
