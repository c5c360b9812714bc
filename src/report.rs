use std::collections::HashMap;
use std::fs;

use law_types::{JudgmentCitations, LawEntry, LawIndex};

use crate::citation::CitationExtractor;
use crate::error::{LawExtractError, Result};
use crate::scanner::JudgmentFile;

/// Read one judgment and extract its citations.
pub fn cite_judgment(file: &JudgmentFile, extractor: &CitationExtractor) -> Result<JudgmentCitations> {
    let content = fs::read_to_string(&file.path).map_err(|source| LawExtractError::Read {
        path: file.path.clone(),
        source,
    })?;

    Ok(JudgmentCitations {
        file: file.id.clone(),
        citations: extractor.extract(content.as_str()),
    })
}

/// Aggregate per-law usage across judgments.
///
/// Laws are ordered by how many judgments cite them (most first), ties
/// broken by name so the output is stable.
pub fn build_law_index(judgments: &[JudgmentCitations]) -> LawIndex {
    let mut by_law: HashMap<&str, LawEntry> = HashMap::new();

    for judgment in judgments {
        for citation in &judgment.citations {
            let entry = by_law
                .entry(citation.law_name.as_str())
                .or_insert_with(|| LawEntry {
                    law_name: citation.law_name.clone(),
                    judgment_count: 0,
                    article_refs: 0,
                    article_counts: Default::default(),
                    clause_counts: Default::default(),
                });

            // law names are distinct within one judgment
            entry.judgment_count += 1;
            entry.article_refs += citation.articles.len();
            for article in &citation.articles {
                *entry.article_counts.entry(article.clone()).or_insert(0) += 1;
            }
            for clause in &citation.clauses {
                *entry.clause_counts.entry(clause.clone()).or_insert(0) += 1;
            }
        }
    }

    let mut laws: Vec<LawEntry> = by_law.into_values().collect();
    laws.sort_by(|a, b| {
        b.judgment_count
            .cmp(&a.judgment_count)
            .then_with(|| a.law_name.cmp(&b.law_name))
    });

    LawIndex {
        judgment_count: judgments.len(),
        laws,
    }
}
