//! 编排层（Orchestration Layer）
//!
//! ## 职责
//!
//! 本层负责批量处理和流程调度，是整个系统的"指挥中心"。
//!
//! ## 模块划分
//!
//! ### `batch_processor` - 批量分析器
//! - 管理应用生命周期（扫描 → 派发 → 收集 → 完成）
//! - 解析输出目录并独占持有完成编号计数器
//! - 控制并发数量（Semaphore + 执行策略）
//! - 按完成顺序收集结果并写出报告
//! - 处理用户中断（Ctrl-C）
//!
//! ### `scanner` - 输入文件发现
//! - 递归扫描目录下的 docx 文件
//! - 排除 Office 锁文件（`~$` 前缀）
//!
//! ## 层次关系
//!
//! ```text
//! batch_processor (处理 Vec<PathBuf>)
//!     ↓
//! workflow::process_file (处理单个文件)
//!     ↓
//! services (能力层：prompt / report)
//!     ↓
//! extractor / clients (提取与外部服务)
//! ```

pub mod batch_processor;
pub mod scanner;

pub use batch_processor::Analyzer;
pub use scanner::find_docx_files;
