use std::borrow::Cow;

/// Opening bracket of a law title: 《中华人民共和国保险法》
pub const LAW_OPEN: char = '《';
pub const LAW_CLOSE: char = '》';

/// Ordinal prefix shared by articles and clauses: 第六十五条, 第二款
pub const ORDINAL: char = '第';
/// 条: article
pub const ARTICLE: char = '条';
/// 款: clause
pub const CLAUSE: char = '款';

/// Sentence terminator that closes a citation span.
pub const TERMINATOR: char = '。';

/// At most this many characters between 第 and 条/款.
/// Keeps "第一款、第二百条" from being read as one article.
pub const ORDINAL_BUDGET: usize = 5;

/// Separator between litigant names in a party string.
pub const LITIGANT_SEPARATOR: char = '、';

/// 公司: company
pub const COMPANY_MARKER: &str = "公司";
/// 检察院: procuratorate
pub const PROCURATORATE_MARKER: &str = "检察院";
/// 厂: factory
pub const FACTORY_MARKER: &str = "厂";

/// Names of this many characters or fewer are taken to be people.
pub const PERSON_NAME_MAX_CHARS: usize = 4;

/// How text lifted out of a judgment is spliced into a new pattern.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum PatternPolicy {
    /// Escape regex metacharacters so the text only ever matches itself.
    #[default]
    Escaped,
    /// Paste the text in verbatim. A law name such as 《刑法(修正案)》 then
    /// turns into a group and stops matching itself, and an unbalanced one
    /// fails to compile.
    Literal,
}

impl PatternPolicy {
    pub fn splice<'a>(&self, text: &'a str) -> Cow<'a, str> {
        match self {
            Self::Escaped => Cow::Owned(regex::escape(text)),
            Self::Literal => Cow::Borrowed(text),
        }
    }
}

/// `《.*?》`
pub fn build_law_name_regex() -> String {
    format!("{LAW_OPEN}.*?{LAW_CLOSE}")
}

/// `第.{1,5}条`
pub fn build_article_regex() -> String {
    format!("{ORDINAL}.{{1,{ORDINAL_BUDGET}}}{ARTICLE}")
}

/// Span of text owned by one occurrence of `law_name`:
/// the name, directly followed by 第…条, up to and including the next 《 or 。
/// (or the end of the text).
pub fn build_span_regex(law_name: &str, policy: PatternPolicy) -> String {
    format!(
        "{law}{ORDINAL}.*?{ARTICLE}.*?(?:{LAW_OPEN}|{TERMINATOR}|$)",
        law = policy.splice(law_name)
    )
}

/// `{article}第.{1,5}款`: a clause anchored to one specific article.
pub fn build_clause_regex(article: &str, policy: PatternPolicy) -> String {
    format!(
        "{article}{ORDINAL}.{{1,{ORDINAL_BUDGET}}}{CLAUSE}",
        article = policy.splice(article)
    )
}

/// `{prefix}.*?{target}`
pub fn build_prefixed_regex(prefix: &str, target: &str, policy: PatternPolicy) -> String {
    format!(
        "{}.*?{}",
        policy.splice(prefix),
        policy.splice(target)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_fragments() {
        assert_eq!(build_law_name_regex(), "《.*?》");
        assert_eq!(build_article_regex(), "第.{1,5}条");
    }

    #[test]
    fn test_span_regex_escapes_law_name() {
        assert_eq!(
            build_span_regex("《刑法(修正案)》", PatternPolicy::Escaped),
            r"《刑法\(修正案\)》第.*?条.*?(?:《|。|$)"
        );
        assert_eq!(
            build_span_regex("《刑法(修正案)》", PatternPolicy::Literal),
            "《刑法(修正案)》第.*?条.*?(?:《|。|$)"
        );
    }

    #[test]
    fn test_clause_regex() {
        assert_eq!(
            build_clause_regex("第六十五条", PatternPolicy::Escaped),
            "第六十五条第.{1,5}款"
        );
    }
}
