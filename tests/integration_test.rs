use docx_analyzer::config::Config;
use docx_analyzer::orchestrator::Analyzer;
use docx_analyzer::strategy::{ExecutionStrategy, PoolKind};
use std::io::Write;
use std::path::{Path, PathBuf};

/// 在目录下写一个最小化的 docx 文件
fn write_docx(dir: &Path, name: &str, body: &str) -> PathBuf {
    let path = dir.join(name);
    let file = std::fs::File::create(&path).unwrap();
    let mut writer = zip::ZipWriter::new(file);
    let options = zip::write::SimpleFileOptions::default();
    writer.start_file("word/document.xml", options).unwrap();
    let xml = format!(
        "<?xml version=\"1.0\"?><w:document \
         xmlns:w=\"http://schemas.openxmlformats.org/wordprocessingml/2006/main\">\
         <w:body>{}</w:body></w:document>",
        body
    );
    writer.write_all(xml.as_bytes()).unwrap();
    writer.finish().unwrap();
    path
}

/// 无可读内容的 docx（只有空白段落）
fn write_empty_docx(dir: &Path, name: &str) -> PathBuf {
    write_docx(dir, name, "<w:p><w:r><w:t>  </w:t></w:r></w:p>")
}

fn test_strategy() -> ExecutionStrategy {
    ExecutionStrategy {
        kind: PoolKind::Async,
        workers: 2,
    }
}

/// 指向不可达地址的配置：测试批次不应该产生任何真实的网络调用
fn test_config(input_dir: &Path, output_dir: &Path) -> Config {
    Config {
        input_dir: input_dir.to_path_buf(),
        output_dir: Some(output_dir.to_path_buf()),
        model_name: "llama3.2".to_string(),
        ollama_base_url: "http://127.0.0.1:1".to_string(),
    }
}

fn report_names(output_dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = std::fs::read_dir(output_dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().to_string())
        .collect();
    names.sort();
    names
}

#[tokio::test]
async fn test_batch_produces_one_report_per_file() {
    let input = tempfile::tempdir().unwrap();
    let output = tempfile::tempdir().unwrap();
    let output_dir = output.path().join("reports");

    // 2 个空内容文档 + 1 个损坏文件 + 1 个嵌套目录中的文档 + 1 个锁文件
    write_empty_docx(input.path(), "first.docx");
    write_empty_docx(input.path(), "second.docx");
    std::fs::write(input.path().join("broken.docx"), b"not a zip").unwrap();
    let nested = input.path().join("nested");
    std::fs::create_dir_all(&nested).unwrap();
    write_empty_docx(&nested, "third.docx");
    std::fs::write(input.path().join("~$first.docx"), b"lock").unwrap();

    let analyzer = Analyzer::with_strategy(test_config(input.path(), &output_dir), test_strategy());
    analyzer.run().await.unwrap();

    let names = report_names(&output_dir);
    assert_eq!(names.len(), 4, "每个输入文件恰好一份报告: {:?}", names);

    // 编号是 01..04 的连续序列，无空洞无重复
    let prefixes: Vec<String> = names.iter().map(|n| n[..2].to_string()).collect();
    assert_eq!(prefixes, vec!["01", "02", "03", "04"]);

    // 恰好 1 份错误报告，3 份占位报告
    let contents: Vec<String> = names
        .iter()
        .map(|n| std::fs::read_to_string(output_dir.join(n)).unwrap())
        .collect();
    let error_reports = contents.iter().filter(|c| c.starts_with("# Error:")).count();
    let placeholder_reports = contents
        .iter()
        .filter(|c| c.contains("No readable content found in"))
        .count();
    assert_eq!(error_reports, 1);
    assert_eq!(placeholder_reports, 3);

    // 错误报告保留了原始文件路径
    let error_report = contents.iter().find(|c| c.starts_with("# Error:")).unwrap();
    assert!(error_report.contains("broken.docx"));
}

#[tokio::test]
async fn test_generation_failure_is_isolated_per_file() {
    let input = tempfile::tempdir().unwrap();
    let output = tempfile::tempdir().unwrap();
    let output_dir = output.path().join("reports");

    // 有内容的文档会走到生成服务（不可达地址），空文档只产出占位报告
    write_docx(
        input.path(),
        "real.docx",
        "<w:p><w:r><w:t>Actual content that triggers generation.</w:t></w:r></w:p>",
    );
    write_empty_docx(input.path(), "blank.docx");

    let analyzer = Analyzer::with_strategy(test_config(input.path(), &output_dir), test_strategy());
    analyzer.run().await.unwrap();

    let names = report_names(&output_dir);
    assert_eq!(names.len(), 2, "生成失败不应影响批次中的其他文件");

    let contents: Vec<String> = names
        .iter()
        .map(|n| std::fs::read_to_string(output_dir.join(n)).unwrap())
        .collect();

    // 生成失败的文件：错误报告，保留原始错误信息和文件路径
    let error_report = contents
        .iter()
        .find(|c| c.starts_with("# Error:"))
        .expect("应有一份错误报告");
    assert!(error_report.contains("real.docx"));
    assert!(error_report.contains("生成"));

    // 同批次的空文档照常产出占位报告
    let placeholder_report = contents
        .iter()
        .find(|c| c.contains("No readable content found in blank.docx"))
        .expect("应有一份占位报告");
    assert!(placeholder_report.starts_with("# Document Analysis for blank.docx"));
}

#[tokio::test]
async fn test_empty_directory_creates_nothing() {
    let input = tempfile::tempdir().unwrap();
    let output = tempfile::tempdir().unwrap();
    let output_dir = output.path().join("reports");

    let analyzer = Analyzer::with_strategy(test_config(input.path(), &output_dir), test_strategy());
    analyzer.run().await.unwrap();

    // 没有找到文件时不创建输出目录
    assert!(!output_dir.exists());
}

#[tokio::test]
async fn test_rerun_overwrites_instead_of_duplicating() {
    let input = tempfile::tempdir().unwrap();
    let output = tempfile::tempdir().unwrap();
    let output_dir = output.path().join("reports");

    write_empty_docx(input.path(), "only.docx");

    let analyzer = Analyzer::with_strategy(test_config(input.path(), &output_dir), test_strategy());
    analyzer.run().await.unwrap();
    analyzer.run().await.unwrap();

    let names = report_names(&output_dir);
    assert_eq!(names, vec!["01_only_analysis.md".to_string()]);
}

/// 真实走一遍生成服务的端到端测试
///
/// 需要本地运行 Ollama，默认忽略，手动运行：
/// ```bash
/// cargo test test_full_analysis_with_ollama -- --ignored --nocapture
/// ```
#[tokio::test]
#[ignore]
async fn test_full_analysis_with_ollama() {
    let _ = tracing_subscriber::fmt::try_init();

    let input = tempfile::tempdir().unwrap();
    let output = tempfile::tempdir().unwrap();
    let output_dir = output.path().join("reports");

    write_docx(
        input.path(),
        "essay.docx",
        "<w:p><w:r><w:t>Rust is a systems programming language focused on safety.</w:t></w:r></w:p>\
         <w:p><w:r><w:t>It achieves memory safety without garbage collection.</w:t></w:r></w:p>",
    );

    let config = Config {
        input_dir: input.path().to_path_buf(),
        output_dir: Some(output_dir.clone()),
        ..Config::default()
    };

    let analyzer = Analyzer::new(config);
    analyzer.run().await.unwrap();

    let names = report_names(&output_dir);
    assert_eq!(names.len(), 1);

    let content = std::fs::read_to_string(output_dir.join(&names[0])).unwrap();
    println!("\n========== 生成的报告 ==========");
    println!("{}", content);
    println!("================================\n");

    assert!(content.starts_with("# Document Analysis for essay.docx"));
    assert!(content.contains("**Word Count:** 16"));
    assert!(content.contains("*Generated using Ollama model: llama3.2*"));
}
