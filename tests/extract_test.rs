//! End-to-end tests for the public extraction API, using the closing
//! paragraphs of civil judgments as fixtures.

use law_extract::{
    Citation, CitationExtractor, PatternPolicy, classify_litigants, extract_citations,
    extract_citations_for_each,
};
use pretty_assertions::assert_eq;
use regex::Regex;

const INSURANCE_JUDGMENT: &str = "据此，根据《中华人民共和国保险法》第六十五条第二、三款、《中华人民共和国民事诉讼法》第六十四条第一款、第一百四十四条规定，判决如下:一、被告中国平安财产保险股份有限公司上海分公司、被告中国平安财产保险股份有限公司应于本判决生效之日起十日内支付原告冷桂芝保险金人民币888,022.80元；二、原告冷桂芝其他诉讼请求不予支持。、如果未按本判决指定的期间履行给付金钱义务，应当依照《中华人民共和国民事诉讼法》第二百五十三条之规定，加倍支付迟延履行期间的债务利息。、案件受理费12,734.90元，减半收取计6,367.45元，由被告平安保险公司、平安保险上海分公司共同负担。";

const LOAN_JUDGMENT: &str = "本院认为，借贷关系合法有效。依照《中华人民共和国合同法》第二百零六条、第二百零七条，《最高人民法院关于审理民间借贷案件适用法律若干问题的规定》第二十六条第一款，《中华人民共和国民事诉讼法》第一百四十四条之规定，判决如下：被告于本判决生效之日起十日内归还原告借款。";

fn strings(v: &[&str]) -> Vec<String> {
    v.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_insurance_judgment() {
    assert_eq!(
        extract_citations(INSURANCE_JUDGMENT),
        vec![
            Citation {
                law_name: "《中华人民共和国保险法》".into(),
                articles: strings(&["第六十五条"]),
                clauses: strings(&["第六十五条第二、三款"]),
            },
            Citation {
                law_name: "《中华人民共和国民事诉讼法》".into(),
                articles: strings(&["第六十四条", "第一百四十四条", "第二百五十三条"]),
                clauses: strings(&["第六十四条第一款"]),
            },
        ]
    );
}

#[test]
fn test_loan_judgment() {
    let result = extract_citations(LOAN_JUDGMENT);
    let names: Vec<&str> = result.iter().map(|c| c.law_name.as_str()).collect();
    assert_eq!(
        names,
        vec![
            "《中华人民共和国合同法》",
            "《最高人民法院关于审理民间借贷案件适用法律若干问题的规定》",
            "《中华人民共和国民事诉讼法》",
        ]
    );
    assert_eq!(result[0].articles, strings(&["第二百零六条", "第二百零七条"]));
    assert!(result[0].clauses.is_empty());
    assert_eq!(result[1].articles, strings(&["第二十六条"]));
    assert_eq!(result[1].clauses, strings(&["第二十六条第一款"]));
    assert_eq!(result[2].articles, strings(&["第一百四十四条"]));
}

#[test]
fn test_same_law_twice_is_one_citation() {
    let text = "依照《民诉法》第六十四条规定。又依照《民诉法》第二百五十三条规定。";
    let result = extract_citations(text);
    assert_eq!(result.len(), 1);
    assert_eq!(result[0].articles, strings(&["第六十四条", "第二百五十三条"]));
}

#[test]
fn test_no_bracketed_names() {
    assert!(extract_citations("依照民事诉讼法第六十四条规定。").is_empty());
    assert!(extract_citations(None).is_empty());
}

#[test]
fn test_rerun_is_identical() {
    assert_eq!(
        extract_citations(INSURANCE_JUDGMENT),
        extract_citations(INSURANCE_JUDGMENT)
    );
}

#[test]
fn test_output_shape() {
    let article = Regex::new("^第.{1,5}条$").unwrap();
    let clause = Regex::new("^第.{1,5}条第.{1,5}款$").unwrap();

    for text in [INSURANCE_JUDGMENT, LOAN_JUDGMENT] {
        for citation in extract_citations(text) {
            assert!(citation.law_name.starts_with('《') && citation.law_name.ends_with('》'));
            for a in &citation.articles {
                assert!(article.is_match(a), "{a}");
            }
            for c in &citation.clauses {
                assert!(clause.is_match(c), "{c}");
                assert!(
                    citation.articles.iter().any(|a| c.starts_with(a.as_str())),
                    "{c} has no owning article"
                );
            }
        }
    }
}

#[test]
fn test_batch_rows() {
    let rows: Vec<Option<String>> = vec![
        Some(LOAN_JUDGMENT.to_string()),
        None,
        Some(String::new()),
    ];
    let out = extract_citations_for_each(&rows);
    assert_eq!(out.len(), 3);
    assert_eq!(out[0].len(), 3);
    assert!(out[1].is_empty());
    assert!(out[2].is_empty());
}

#[test]
fn test_policies_agree_on_plain_names() {
    let literal = CitationExtractor::new(PatternPolicy::Literal);
    assert_eq!(literal.extract(LOAN_JUDGMENT), extract_citations(LOAN_JUDGMENT));
}

#[test]
fn test_policies_differ_on_bracket_in_name() {
    let text = "依照《公司法[2018修正]》第二十条第三款处理。";
    let escaped = extract_citations(text);
    assert_eq!(escaped[0].articles, strings(&["第二十条"]));
    assert_eq!(escaped[0].clauses, strings(&["第二十条第三款"]));

    let literal = CitationExtractor::new(PatternPolicy::Literal).extract(text);
    assert_eq!(literal, vec![Citation::new("《公司法[2018修正]》")]);
}

#[test]
fn test_classify_parties() {
    assert_eq!(
        classify_litigants("张三、某某保险股份有限公司、上海市人民检察院"),
        [1, 1, 1, 0]
    );
}
