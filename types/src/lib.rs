use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

// ── Citation ─────────────────────────────────────────────────────────────

/// One cited law together with every article (条) and clause (款) reference
/// found next to it.
///
/// `articles` and `clauses` are independent sequences: the i-th clause does
/// not belong to the i-th article. Every clause starts with the text of the
/// article it was found under, so ownership can be recovered by prefix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Citation {
    /// Bracketed law name, delimiters included, e.g. "《中华人民共和国保险法》"
    pub law_name: String,
    /// e.g. "第六十五条"
    pub articles: Vec<String>,
    /// e.g. "第六十五条第二款"
    pub clauses: Vec<String>,
}

impl Citation {
    pub fn new(law_name: impl Into<String>) -> Self {
        Self {
            law_name: law_name.into(),
            articles: Vec::new(),
            clauses: Vec::new(),
        }
    }

    /// Clauses whose owning article is `article`.
    pub fn clauses_of<'a>(&'a self, article: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.clauses
            .iter()
            .map(String::as_str)
            .filter(move |c| c.starts_with(article))
    }
}

/// All citations found in one text, one entry per distinct law name.
pub type ExtractionResult = Vec<Citation>;

// ── Litigants ────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LitigantKind {
    /// 自然人
    NaturalPerson,
    /// 法人 (companies, factories)
    Corporate,
    /// 检察院
    GovernmentEntity,
    /// Anything else: foreign names, organisations without 公司 in the name
    Other,
}

impl LitigantKind {
    pub fn as_chinese(&self) -> &'static str {
        match self {
            Self::NaturalPerson => "自然人",
            Self::Corporate => "法人",
            Self::GovernmentEntity => "检察院",
            Self::Other => "其他",
        }
    }
}

/// Per-category litigant counts for one party string.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LitigantCounts {
    pub natural: usize,
    pub corporate: usize,
    pub government_entity: usize,
    pub other: usize,
}

impl LitigantCounts {
    pub fn record(&mut self, kind: LitigantKind) {
        match kind {
            LitigantKind::NaturalPerson => self.natural += 1,
            LitigantKind::Corporate => self.corporate += 1,
            LitigantKind::GovernmentEntity => self.government_entity += 1,
            LitigantKind::Other => self.other += 1,
        }
    }

    /// Counts in the fixed order natural, corporate, government entity, other.
    pub fn to_array(&self) -> [usize; 4] {
        [
            self.natural,
            self.corporate,
            self.government_entity,
            self.other,
        ]
    }

    pub fn total(&self) -> usize {
        self.to_array().iter().sum()
    }
}

impl From<LitigantCounts> for [usize; 4] {
    fn from(counts: LitigantCounts) -> Self {
        counts.to_array()
    }
}

impl PartialEq<[usize; 4]> for LitigantCounts {
    fn eq(&self, other: &[usize; 4]) -> bool {
        self.to_array() == *other
    }
}

// ── Corpus output ────────────────────────────────────────────────────────

/// Citations extracted from a single judgment file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JudgmentCitations {
    pub file: String,
    pub citations: ExtractionResult,
}

/// Aggregate usage of one law across a corpus.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LawEntry {
    pub law_name: String,
    /// Number of judgments citing this law at least once
    pub judgment_count: usize,
    /// Total article references, duplicates included
    pub article_refs: usize,
    pub article_counts: BTreeMap<String, usize>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub clause_counts: BTreeMap<String, usize>,
}

/// `law_index.json`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LawIndex {
    pub judgment_count: usize,
    pub laws: Vec<LawEntry>,
}

impl LawIndex {
    /// Entries whose law name contains `needle`.
    pub fn lookup<'a>(&'a self, needle: &'a str) -> impl Iterator<Item = &'a LawEntry> + 'a {
        self.laws.iter().filter(move |l| l.law_name.contains(needle))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_compare_with_array() {
        let mut counts = LitigantCounts::default();
        counts.record(LitigantKind::NaturalPerson);
        counts.record(LitigantKind::GovernmentEntity);
        assert_eq!(counts, [1, 0, 1, 0]);
        assert_eq!(counts.total(), 2);
        assert_eq!(<[usize; 4]>::from(counts), [1, 0, 1, 0]);
    }

    #[test]
    fn test_kind_labels() {
        assert_eq!(LitigantKind::NaturalPerson.as_chinese(), "自然人");
        assert_eq!(LitigantKind::Corporate.as_chinese(), "法人");
        assert_eq!(LitigantKind::GovernmentEntity.as_chinese(), "检察院");
        assert_eq!(LitigantKind::Other.as_chinese(), "其他");
    }

    #[test]
    fn test_clauses_of_uses_prefix() {
        let c = Citation {
            law_name: "《民事诉讼法》".into(),
            articles: vec!["第六十四条".into(), "第一百四十四条".into()],
            clauses: vec!["第一百四十四条第二款".into(), "第六十四条第一款".into()],
        };
        let owned: Vec<&str> = c.clauses_of("第六十四条").collect();
        assert_eq!(owned, vec!["第六十四条第一款"]);
    }
}
