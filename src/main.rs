use std::io::Read;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use law_extract::error::{LawExtractError, Result};
use law_extract::report::{build_law_index, cite_judgment};
use law_extract::{CitationExtractor, PatternPolicy, classify_litigants, scanner};
use law_types::{JudgmentCitations, LawIndex};
use tracing::warn;
use tracing_subscriber::EnvFilter;

const CITATIONS_FILE: &str = "citations.json";
const LAW_INDEX_FILE: &str = "law_index.json";

#[derive(Parser)]
#[command(
    name = "law_extract",
    about = "Law citation extractor for Chinese court judgments"
)]
struct Cli {
    /// Splice law names into patterns unescaped (legacy behaviour)
    #[arg(long, global = true)]
    legacy_patterns: bool,

    /// Directory for extract output and query input
    #[arg(long, global = true, default_value = "output")]
    output_dir: PathBuf,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Extract citations from every judgment in a corpus → output/*.json
    Extract {
        /// Path to corpus root directory
        #[arg(default_value = ".")]
        corpus: PathBuf,
    },
    /// Extract citations from text given as arguments, or from stdin
    Text { text: Vec<String> },
    /// Extract citations from a JSON array of strings (null for missing rows)
    Batch { file: PathBuf },
    /// Count litigant kinds in 、-separated party strings
    Classify {
        #[arg(required = true)]
        names: Vec<String>,
    },
    /// Look up a law in the cached law index, e.g. "保险法"
    Query { law: String },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    if let Err(e) = run(Cli::parse()) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let policy = if cli.legacy_patterns {
        PatternPolicy::Literal
    } else {
        PatternPolicy::Escaped
    };
    let extractor = CitationExtractor::new(policy);

    match cli.command {
        Some(Command::Extract { corpus }) => run_extract(&corpus, &cli.output_dir, &extractor),
        Some(Command::Text { text }) => run_text(&text, &extractor),
        Some(Command::Batch { file }) => run_batch(&file, &extractor),
        Some(Command::Classify { names }) => run_classify(&names),
        Some(Command::Query { law }) => run_query(&law, &cli.output_dir),
        // Default: extract from current directory
        None => run_extract(Path::new("."), &cli.output_dir, &extractor),
    }
}

// ═══════════════════════════════════════════════════════════════════════
//  OUTPUT FILE HELPERS
// ═══════════════════════════════════════════════════════════════════════

fn write_json<T: serde::Serialize>(dir: &Path, name: &str, data: &T) -> Result<()> {
    let path = dir.join(name);
    let json = serde_json::to_string_pretty(data)?;
    std::fs::write(&path, &json).map_err(|source| LawExtractError::Write {
        path: path.clone(),
        source,
    })?;
    eprintln!("  {} ({} bytes)", path.display(), json.len());
    Ok(())
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T> {
    let json = std::fs::read_to_string(path).map_err(|source| LawExtractError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&json).map_err(|source| LawExtractError::Json {
        path: path.to_path_buf(),
        source,
    })
}

fn print_json<T: serde::Serialize>(data: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(data)?);
    Ok(())
}

// ═══════════════════════════════════════════════════════════════════════
//  EXTRACT MODE: scan corpus → citations.json + law_index.json
// ═══════════════════════════════════════════════════════════════════════

fn run_extract(root: &Path, output_dir: &Path, extractor: &CitationExtractor) -> Result<()> {
    eprintln!("Scanning corpus at: {}", root.display());

    // Phase 1: discover all judgment files
    let files = scanner::scan_corpus(root)?;
    eprintln!("Found {} judgment files", files.len());

    // Phase 2: extract citations from each file
    let mut judgments: Vec<JudgmentCitations> = Vec::with_capacity(files.len());
    let mut failed = Vec::new();
    for file in &files {
        match cite_judgment(file, extractor) {
            Ok(cited) => judgments.push(cited),
            Err(e) => {
                warn!(file = %file.path.display(), error = %e, "skipping judgment");
                failed.push(file.id.clone());
            }
        }
    }

    // Phase 3: aggregate
    let index = build_law_index(&judgments);
    print_statistics(&judgments, &index, &failed);

    std::fs::create_dir_all(output_dir).map_err(|source| LawExtractError::Write {
        path: output_dir.to_path_buf(),
        source,
    })?;
    eprintln!("\nWriting output:");
    write_json(output_dir, CITATIONS_FILE, &judgments)?;
    write_json(output_dir, LAW_INDEX_FILE, &index)?;
    Ok(())
}

fn print_statistics(judgments: &[JudgmentCitations], index: &LawIndex, failed: &[String]) {
    let citing = judgments.iter().filter(|j| !j.citations.is_empty()).count();
    let article_refs: usize = index.laws.iter().map(|l| l.article_refs).sum();

    eprintln!("\n══════════════════════════════════════════");
    eprintln!("  CORPUS STATISTICS");
    eprintln!("══════════════════════════════════════════");
    eprintln!("  Judgments:          {}", judgments.len());
    eprintln!("  Citing any law:     {citing}");
    eprintln!("  Distinct laws:      {}", index.laws.len());
    eprintln!("  Article references: {article_refs}");

    eprintln!("\nMost cited laws:");
    for law in index.laws.iter().take(10) {
        eprintln!(
            "  {}: {} judgments, {} article refs",
            law.law_name, law.judgment_count, law.article_refs
        );
    }

    if !failed.is_empty() {
        eprintln!("\n══════════════════════════════════════════");
        eprintln!("  UNREADABLE FILES ({} total)", failed.len());
        eprintln!("══════════════════════════════════════════");
        for f in failed.iter().take(30) {
            eprintln!("  {f}");
        }
        if failed.len() > 30 {
            eprintln!("  ... and {} more", failed.len() - 30);
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════
//  TEXT / BATCH MODE: extract from ad-hoc input, JSON to stdout
// ═══════════════════════════════════════════════════════════════════════

fn run_text(args: &[String], extractor: &CitationExtractor) -> Result<()> {
    let text = if args.is_empty() {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        args.join(" ")
    };
    print_json(&extractor.extract(text.as_str()))
}

fn run_batch(file: &Path, extractor: &CitationExtractor) -> Result<()> {
    let rows: Vec<Option<String>> = read_json(file)?;
    eprintln!("Read {} rows from {}", rows.len(), file.display());

    let results: Vec<_> = rows
        .iter()
        .map(|row| extractor.extract(row.as_deref()))
        .collect();
    print_json(&results)
}

// ═══════════════════════════════════════════════════════════════════════
//  CLASSIFY MODE
// ═══════════════════════════════════════════════════════════════════════

fn run_classify(names: &[String]) -> Result<()> {
    #[derive(serde::Serialize)]
    struct ClassifyResult<'a> {
        input: &'a str,
        counts: [usize; 4],
    }

    let results: Vec<ClassifyResult> = names
        .iter()
        .map(|input| ClassifyResult {
            input: input.as_str(),
            counts: classify_litigants(input).to_array(),
        })
        .collect();
    print_json(&results)
}

// ═══════════════════════════════════════════════════════════════════════
//  QUERY MODE: read cached law index, print matching entries
// ═══════════════════════════════════════════════════════════════════════

fn run_query(law: &str, output_dir: &Path) -> Result<()> {
    let path = output_dir.join(LAW_INDEX_FILE);
    let index: LawIndex = read_json(&path).inspect_err(|_| {
        eprintln!("Run extraction first to generate the index.");
    })?;

    let needle = law.trim_start_matches('《').trim_end_matches('》');
    let matches: Vec<_> = index.lookup(needle).collect();

    if matches.is_empty() {
        eprintln!("No law found for: {law}");
        let mut names: Vec<&str> = index.laws.iter().map(|l| l.law_name.as_str()).collect();
        names.sort();
        eprintln!("  available laws: {}", names.join(", "));
        return Ok(());
    }

    eprintln!(
        "Found {} law(s) for: {} (in {} judgments)",
        matches.len(),
        law,
        index.judgment_count
    );
    print_json(&matches)
}
