use std::collections::HashSet;
use std::sync::LazyLock;

use law_types::{Citation, ExtractionResult};
use regex::Regex;
use tracing::{debug, warn};

use crate::error::{LawExtractError, Result};
use crate::markers::{
    PatternPolicy, build_article_regex, build_clause_regex, build_law_name_regex,
    build_prefixed_regex, build_span_regex,
};

// ── Regex patterns ─────────────────────────────────────────────────
//
// Real data example (tail of a civil judgment):
//   据此，根据《中华人民共和国保险法》第六十五条第二、三款、《中华人民共和国
//   民事诉讼法》第六十四条第一款、第一百四十四条规定，判决如下：……如果未按本
//   判决指定的期间履行给付金钱义务，应当依照《中华人民共和国民事诉讼法》第二百
//   五十三条之规定，加倍支付迟延履行期间的债务利息。
//
// yields
//   《中华人民共和国保险法》       [第六十五条]  [第六十五条第二、三款]
//   《中华人民共和国民事诉讼法》   [第六十四条, 第一百四十四条, 第二百五十三条]
//                                  [第六十四条第一款]

// 《…》, non-greedy so adjacent titles stay separate
static RE_LAW_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(&build_law_name_regex()).expect("law name regex"));

// 第…条 with at most five characters in between
static RE_ARTICLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(&build_article_regex()).expect("article regex"));

/// Distinct bracketed law names in `text`, in order of first appearance.
pub fn find_law_names(text: &str) -> Vec<&str> {
    let mut seen = HashSet::new();
    RE_LAW_NAME
        .find_iter(text)
        .map(|m| m.as_str())
        .filter(|name| seen.insert(*name))
        .collect()
}

/// Every article reference (第…条) in a span, in order, duplicates kept.
pub fn extract_articles(span: &str) -> Vec<&str> {
    RE_ARTICLE.find_iter(span).map(|m| m.as_str()).collect()
}

/// Extracts (law, articles, clauses) triples from judgment text.
#[derive(Debug, Clone, Copy, Default)]
pub struct CitationExtractor {
    policy: PatternPolicy,
}

impl CitationExtractor {
    pub fn new(policy: PatternPolicy) -> Self {
        Self { policy }
    }

    /// Run the full pipeline on one text. `None` yields an empty result.
    pub fn extract<'a>(&self, text: impl Into<Option<&'a str>>) -> ExtractionResult {
        let Some(text) = text.into() else {
            return Vec::new();
        };

        find_law_names(text)
            .into_iter()
            .map(|law_name| self.cite(law_name, text))
            .collect()
    }

    fn cite(&self, law_name: &str, text: &str) -> Citation {
        let mut citation = Citation::new(law_name);

        let spans = match self.isolate_spans(law_name, text) {
            Ok(spans) => spans,
            Err(e) => {
                warn!(law = law_name, error = %e, "skipping law name");
                return citation;
            }
        };
        debug!(law = law_name, spans = spans.len(), "isolated citation spans");

        for span in spans {
            let articles = extract_articles(span);
            for article in &articles {
                match self.extract_clauses(article, span) {
                    Ok(clauses) => citation.clauses.extend(clauses),
                    Err(e) => {
                        warn!(law = law_name, article = *article, error = %e, "skipping clauses")
                    }
                }
            }
            citation
                .articles
                .extend(articles.into_iter().map(str::to_string));
        }

        citation
    }

    /// Every span of `text` that starts with `law_name` immediately followed
    /// by 第…条, running to the next 《, the next 。 or the end of the text.
    /// A single trailing newline does not count against the end of the text.
    pub fn isolate_spans<'t>(&self, law_name: &str, text: &'t str) -> Result<Vec<&'t str>> {
        let re = compile(build_span_regex(law_name, self.policy))?;
        let text = text.strip_suffix('\n').unwrap_or(text);
        Ok(re.find_iter(text).map(|m| m.as_str()).collect())
    }

    /// Every `{article}第…款` in the span, full text (article included).
    pub fn extract_clauses(&self, article: &str, span: &str) -> Result<Vec<String>> {
        let re = compile(build_clause_regex(article, self.policy))?;
        Ok(re.find_iter(span).map(|m| m.as_str().to_string()).collect())
    }
}

fn compile(pattern: String) -> Result<Regex> {
    Regex::new(&pattern).map_err(|source| LawExtractError::Pattern { pattern, source })
}

/// Citations in `text` with law names escaped. Accepts `&str` or `None`.
pub fn extract_citations<'a>(text: impl Into<Option<&'a str>>) -> ExtractionResult {
    CitationExtractor::default().extract(text)
}

/// Row-wise [`extract_citations`]; missing rows map to an empty result.
pub fn extract_citations_for_each<S: AsRef<str>>(rows: &[Option<S>]) -> Vec<ExtractionResult> {
    let extractor = CitationExtractor::default();
    rows.iter()
        .map(|row| {
            let text: Option<&str> = row.as_ref().map(|s| s.as_ref());
            extractor.extract(text)
        })
        .collect()
}

/// First non-greedy `{prefix}…{target}` in `text`.
pub fn find_with_prefix(prefix: &str, target: &str, text: &str) -> Option<String> {
    let re = compile(build_prefixed_regex(prefix, target, PatternPolicy::Escaped)).ok()?;
    re.find(text).map(|m| m.as_str().to_string())
}
