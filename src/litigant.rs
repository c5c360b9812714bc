use law_types::{LitigantCounts, LitigantKind};
use tracing::info;

use crate::markers::{
    COMPANY_MARKER, FACTORY_MARKER, LITIGANT_SEPARATOR, PERSON_NAME_MAX_CHARS,
    PROCURATORATE_MARKER,
};

/// A single classification rule: a predicate on the name and the bucket it
/// assigns when the predicate holds.
struct Rule {
    kind: LitigantKind,
    matches: fn(&str) -> bool,
}

/// Checked top to bottom, first match wins. Reordering changes the counts:
/// a four-character company name ("某某公司") must land in Corporate, not
/// NaturalPerson.
const RULES: &[Rule] = &[
    Rule {
        kind: LitigantKind::Corporate,
        matches: |name| name.contains(COMPANY_MARKER),
    },
    Rule {
        kind: LitigantKind::GovernmentEntity,
        matches: |name| name.contains(PROCURATORATE_MARKER),
    },
    Rule {
        kind: LitigantKind::Corporate,
        matches: |name| name.contains(FACTORY_MARKER) && char_len(name) > PERSON_NAME_MAX_CHARS,
    },
    Rule {
        kind: LitigantKind::NaturalPerson,
        matches: |name| char_len(name) <= PERSON_NAME_MAX_CHARS,
    },
];

fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// Classify one litigant name. Names no rule claims are `Other`
/// (typically foreign names or organisations without 公司 in the title).
pub fn classify_name(name: &str) -> LitigantKind {
    RULES
        .iter()
        .find(|rule| (rule.matches)(name))
        .map(|rule| rule.kind)
        .unwrap_or(LitigantKind::Other)
}

/// Count litigants by kind in a 、-separated party string.
///
/// Coverage is heuristic: "上海某某厂" is corporate but "某某酒店" falls
/// through to `Other`.
pub fn classify_litigants(text: &str) -> LitigantCounts {
    let mut counts = LitigantCounts::default();
    for name in text.split(LITIGANT_SEPARATOR) {
        let kind = classify_name(name);
        if kind == LitigantKind::Other {
            info!(name, kind = kind.as_chinese(), "uncategorized litigant");
        }
        counts.record(kind);
    }
    counts
}

/// Row-wise [`classify_litigants`]; missing rows count as nobody.
pub fn classify_litigants_for_each<S: AsRef<str>>(rows: &[Option<S>]) -> Vec<LitigantCounts> {
    rows.iter()
        .map(|row| match row {
            Some(text) => classify_litigants(text.as_ref()),
            None => LitigantCounts::default(),
        })
        .collect()
}
