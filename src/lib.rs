//! Law citation extraction for Chinese court judgments.
//!
//! Finds bracketed law names (《…》) in judgment text and the article (条)
//! and clause (款) references that follow each of them, and gives a coarse
//! count of litigant kinds in a party list.
//!
//! ```
//! use law_extract::extract_citations;
//!
//! let found = extract_citations("根据《保险法》第六十五条第二款规定");
//! assert_eq!(found[0].law_name, "《保险法》");
//! assert_eq!(found[0].articles, vec!["第六十五条"]);
//! assert_eq!(found[0].clauses, vec!["第六十五条第二款"]);
//! ```
//!
//! - [`citation`]: the extraction pipeline
//! - [`litigant`]: litigant classification
//! - [`markers`]: marker characters and pattern builders
//! - [`scanner`]: judgment corpus discovery
//! - [`report`]: per-judgment output and the corpus law index
//! - [`error`]: error type and Result alias

pub mod citation;
pub mod error;
pub mod litigant;
pub mod markers;
pub mod report;
pub mod scanner;

pub use citation::{
    CitationExtractor, extract_citations, extract_citations_for_each, find_with_prefix,
};
pub use error::{LawExtractError, Result};
pub use law_types::{Citation, ExtractionResult, LitigantCounts, LitigantKind};
pub use litigant::{classify_litigants, classify_litigants_for_each, classify_name};
pub use markers::PatternPolicy;
