use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::{LawExtractError, Result};

/// A judgment text file discovered in the corpus.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JudgmentFile {
    /// Path relative to the corpus root, used as the judgment's id in output
    pub id: String,
    pub path: PathBuf,
}

/// Index and readme files that carry no judgment text.
const SKIP_STEMS: &[&str] = &["目录", "索引", "README"];

/// Scan the corpus root and discover all judgment text files.
///
/// Any directory layout is accepted; every `.txt` below `root` counts,
/// e.g. `{root}/{年份}/{法院}/{NN_案号.txt}`. Results are sorted by path.
pub fn scan_corpus(root: &Path) -> Result<Vec<JudgmentFile>> {
    if !root.is_dir() {
        return Err(LawExtractError::NotADirectory(root.to_path_buf()));
    }

    let mut results: Vec<JudgmentFile> = WalkDir::new(root)
        .min_depth(1)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .map(|e| e.into_path())
        .filter(|path| path.extension().and_then(|e| e.to_str()) == Some("txt"))
        .filter(|path| {
            let stem = path.file_stem().and_then(|s| s.to_str()).unwrap_or("");
            !SKIP_STEMS.contains(&strip_numeric_prefix(stem))
        })
        .map(|path| JudgmentFile {
            id: path
                .strip_prefix(root)
                .unwrap_or(&path)
                .display()
                .to_string(),
            path,
        })
        .collect();

    results.sort_by(|a, b| a.path.cmp(&b.path));
    Ok(results)
}

/// Strip leading "NN_" prefix from filenames.
fn strip_numeric_prefix(s: &str) -> &str {
    if let Some(idx) = s.find('_') {
        let prefix = &s[..idx];
        if !prefix.is_empty() && prefix.chars().all(|c| c.is_ascii_digit()) {
            return &s[idx + 1..];
        }
    }
    s
}
