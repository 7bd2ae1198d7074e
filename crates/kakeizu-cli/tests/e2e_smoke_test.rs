use std::{fs, path::Path};

use tempfile::tempdir;

use kakeizu_cli::{Args, DEFAULT_FONT_PATH, run};

const SAMPLE_INPUT: &str = "\
本人 = 山田太郎
父 = 山田一郎
母 = 山田花子
父の父 = 山田祖一
◎守護
・父の父
・母
◎優先順位
・父
◎契約
・自己犠牲
";

#[test]
fn e2e_smoke_full_document() {
    // The default font is an external precondition; without it the run is
    // expected to fail before drawing, which the library tests cover.
    if !Path::new(DEFAULT_FONT_PATH).exists() {
        eprintln!("skipping: {DEFAULT_FONT_PATH} not installed");
        return;
    }

    let temp_dir = tempdir().expect("Failed to create temp directory");
    let input_path = temp_dir.path().join("chart.txt");
    fs::write(&input_path, SAMPLE_INPUT).expect("Failed to write input");

    let output_path = temp_dir.path().join("kakeizu.svg");
    let args = Args {
        input: input_path.to_string_lossy().to_string(),
        output: output_path.to_string_lossy().to_string(),
        config: None,
        font: None,
        log_level: "off".to_string(),
    };

    run(&args).expect("Full pipeline failed");

    // One tree page, eight record pages, one summary page.
    for page in 1..=10 {
        let page_path = temp_dir.path().join(format!("kakeizu-{page}.svg"));
        assert!(page_path.exists(), "missing page {page}");
        let content = fs::read_to_string(&page_path).expect("Failed to read page");
        assert!(content.starts_with("<svg"), "page {page} is not SVG");
    }
    assert!(!temp_dir.path().join("kakeizu-11.svg").exists());
}

#[test]
fn e2e_missing_input_fails() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let args = Args {
        input: temp_dir
            .path()
            .join("does-not-exist.txt")
            .to_string_lossy()
            .to_string(),
        output: temp_dir.path().join("out.svg").to_string_lossy().to_string(),
        config: None,
        font: None,
        log_level: "off".to_string(),
    };

    assert!(run(&args).is_err());
}
