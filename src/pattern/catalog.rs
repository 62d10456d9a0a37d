//! Hearst pattern catalog
//!
//! The catalog is a fixed data table of surface patterns, compiled once per
//! process. Each row carries the pattern's literal regex, its structural
//! kind, the instance/class orientation, and (for split kinds) the keyword
//! anchors used for windowing. Matching is order-sensitive for overlapping
//! pattern families, so iteration order is declaration order.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{Error, Result};

/// Hyphen-variant separator class (optional, single char).
const SEPARATOR_SYMBOLS: &str =
    "[\u{002D}\u{2010}\u{2011}\u{2012}\u{2013}\u{2014}\u{2015}\u{2043}]?";

/// Quote-surrounder class (optional, single char).
const SURROUNDER_SYMBOLS: &str =
    "[\u{0027}\u{2018}\u{2019}\u{201A}\u{201B}\u{201C}\u{201D}\u{201E}\u{201F}\u{0022}]?";

/// End-punctuation class: the surrounder class plus ampersand and
/// copyright/registered marks (optional, single char).
const END_SYMBOLS: &str =
    "[\"\u{0026}\u{0027}\u{2018}\u{2019}\u{201A}\u{201B}\u{201C}\u{201D}\u{201E}\u{201F}\u{00A9}\u{00AE}]?";

/// Structural kind of a surface pattern.
///
/// `Compact` anchors both arguments to a single contiguous phrase; the
/// `Split*` kinds embed a noun-phrase placeholder between two keywords.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternKind {
    /// Both arguments directly adjacent to one anchor phrase.
    Compact,
    /// Placeholder between two keywords; affixed on both sides.
    Split,
    /// Placeholder pattern without the leading word-char affix.
    SplitNoPrefix,
    /// Placeholder pattern without the trailing word-char affix.
    SplitNoSuffix,
}

/// One row of the built-in pattern table.
#[derive(Debug, Clone)]
pub struct PatternRow {
    /// Stable pattern identifier (e.g. `p8a`).
    pub id: &'static str,
    /// Literal regex body, before affixing.
    pub regex: String,
    /// Structural kind.
    pub kind: PatternKind,
    /// Whether the instance argument precedes the anchor.
    pub instance_first: bool,
    /// First keyword anchor (split kinds only).
    pub first_keyword: Option<&'static str>,
    /// Second keyword anchor (split kinds only).
    pub second_keyword: Option<&'static str>,
    /// Whether the row is part of the default catalog.
    pub enabled: bool,
}

/// A compiled surface pattern.
///
/// The compiled regex wraps the row's literal body with a one-character
/// word-or-digit prefix and/or suffix (plus the optional symbol classes)
/// depending on the kind. The matcher's one-character span trim for
/// `Compact` patterns relies on those affix classes being exactly one
/// character wide on each side; widening them would break the trim.
#[derive(Debug, Clone)]
pub struct CustomPattern {
    /// Row identifier.
    pub id: &'static str,
    /// Structural kind.
    pub kind: PatternKind,
    /// Compiled, affixed regex.
    pub regex: Regex,
    /// Whether the instance argument precedes the anchor.
    pub instance_first: bool,
    /// First keyword anchor (split kinds only).
    pub first_keyword: Option<&'static str>,
    /// Second keyword anchor (split kinds only).
    pub second_keyword: Option<&'static str>,
}

impl CustomPattern {
    /// Compile one table row.
    pub fn compile(row: &PatternRow) -> Result<Self> {
        let prefix = format!(r"(\p{{L}}|\d){END_SYMBOLS}");
        let suffix = format!(r"{SURROUNDER_SYMBOLS}(\p{{L}}|\d)");
        let affixed = match row.kind {
            PatternKind::Compact | PatternKind::Split => {
                format!("{prefix}{}{suffix}", row.regex)
            }
            PatternKind::SplitNoPrefix => format!("(?:{}{suffix})", row.regex),
            PatternKind::SplitNoSuffix => format!("(?:{prefix}{})", row.regex),
        };
        let regex = Regex::new(&affixed).map_err(|source| Error::PatternCompile {
            id: row.id.to_string(),
            source,
        })?;
        Ok(Self {
            id: row.id,
            kind: row.kind,
            regex,
            instance_first: row.instance_first,
            first_keyword: row.first_keyword,
            second_keyword: row.second_keyword,
        })
    }
}

/// Noun-phrase placeholder embedded in split patterns: up to four
/// quote-wrapped, optionally hyphenated words, each followed by a space.
fn np_placeholder() -> String {
    format!(
        "({SURROUNDER_SYMBOLS}(\\p{{L}}+|\\d+\\p{{L}}+)({SEPARATOR_SYMBOLS}(\\p{{L}}+|\\d+))?{END_SYMBOLS}\\s){{1,4}}"
    )
}

/// Placeholder variant for superlative "most …" patterns, which need at
/// least the adjective plus one word.
fn np_placeholder_adj_most() -> String {
    format!(
        "({SURROUNDER_SYMBOLS}(\\p{{L}}+|\\d+\\p{{L}}+)({SEPARATOR_SYMBOLS}(\\p{{L}}+|\\d+))?{END_SYMBOLS}\\s){{2,5}}"
    )
}

/// The full built-in table, declaration order. Only the `is a` / `was a`
/// copular rows are enabled by default; the remaining rows are retained for
/// explicit selection via [`PatternCatalog::with_patterns`].
pub static PATTERN_TABLE: Lazy<Vec<PatternRow>> = Lazy::new(|| {
    use PatternKind::*;
    let np = np_placeholder();
    let np_most = np_placeholder_adj_most();

    let compact = |id, regex: &str, instance_first, enabled| PatternRow {
        id,
        regex: regex.to_string(),
        kind: Compact,
        instance_first,
        first_keyword: None,
        second_keyword: None,
        enabled,
    };
    let split = |id, regex: String, kind, fkw, skw, instance_first| PatternRow {
        id,
        regex,
        kind,
        instance_first,
        first_keyword: Some(fkw),
        second_keyword: Some(skw),
        enabled: false,
    };

    vec![
        compact("p8a", r"\,?\sis\san?\s", true, true),
        compact("p8b", r"\,?\swas\san?\s", true, true),
        compact("p3a", r"\,?\sincluding\s", false, false),
        compact("p5", r"\,?\ssuch\sas\s", false, false),
        compact("p1", r"\,?\sand\sother\s", true, false),
        compact("p4", r"\,?\sor\sother\s", true, false),
        compact("p2", r"\,?\sespecially\s", false, false),
        compact("p8c", r"\,?\sare\san?\s", true, false),
        compact("p34", r"\stypes\s", false, false),
        compact("p25", r"\,?\sexcept\s", false, false),
        compact("p23d", r"\,?\sparticularly\s", false, false),
        compact("p20a", r"\sis\sthe\s\w+est\s", true, false),
        compact("p43", r"\,?\ssort\sof\s", true, false),
        compact("p26", r"\,?\sother\sthan\s", false, false),
        split("p21a", format!(r"\p{{L}}+est\s{np}is\s"), SplitNoPrefix, "est", "is", false),
        split("p21b", format!(r"\p{{L}}+est\s{np}are\s"), SplitNoPrefix, "est", "are", false),
        split("p21c", format!(r"\s(M|m)ost\s{np_most}is\s"), SplitNoPrefix, "most", "is", false),
        split("p21d", format!(r"\s(M|m)ost\s{np_most}are\s"), SplitNoPrefix, "most", "are", false),
        compact("p23b", r"\,?\smostly\s", false, false),
        compact("p23a", r"\,?\smainly\s", false, false),
        compact("p12a", r"\,\sone\sof\sthe\s", true, false),
        compact("p20c", r"\sis\sthe\smost\s\w+\s", true, false),
        compact("p8d", r"\,?\swere\san?\s", true, false),
        compact("p6", r"\,?\sand\sany\sother\s", true, false),
        compact("p15a", r"\sexamples\sof\s", true, false),
        compact("p27a", r"\,?\se\.g\.\s", false, false),
        compact("p27b", r"\,?\si\.e\.\s", false, false),
        compact("p16", r"\,?\sfor\sexample\s", false, false),
        compact("p24", r"\,?\sin\sparticular\s", false, false),
        compact("p20b", r"\sare\sthe\s\w+est\s", true, false),
        compact("p20d", r"\sare\sthe\smost\s\w+\s", true, false),
        compact("p23c", r"\,?\snotably\s", false, false),
        compact("p39", r"\,?\samong\sthem\s", false, false),
        compact("p38", r"\scompared\sto\sother\s", true, false),
        compact("p11", r"\,?\slike\sother\s", true, false),
        compact("p7", r"\,?\sand\ssome\sother\s", true, false),
        compact("p23e", r"\,?\sprincipally\s", false, false),
        compact("p15b", r"\sis\san\sexample\sof\s", true, false),
        compact("p22a", r"\,?\swhich\sis\scalled\s", false, false),
        compact("p28a", r"\,?\sa\skind\sof\s", true, false),
        compact("p12c", r"\,\sone\sof\sthose\s", true, false),
        compact("p29a", r"\,?\swhich\slooks?\slike\s", false, false),
        compact("p28c", r"\,?\sa\sform\sof\s", true, false),
        compact("p30b", r"\,?\swhich\sis\ssimilar\sto\s", false, false),
        compact("p12b", r"\,\sone\sof\sthese\s", true, false),
        compact("p29c", r"\,?\swhich\ssounds?\slike\s", false, false),
        compact("p28d", r"\,?\sforms\sof\s", true, false),
        compact("p30a", r"\,?\swhich\sare\ssimilar\sto\s", false, false),
        compact("p22b", r"\,?\swhich\sis\snamed\s", false, false),
        compact("p42", r"\,?\sor\sthe\smany\s", true, false),
        compact("p31a", r"\,?\sexample\sof\sthis\sis\s", false, false),
        compact("p28b", r"\,?\skinds\sof\s", true, false),
        compact("p31b", r"\,?\sexamples\sof\sthis\sare\s", false, false),
        split("p10", format!(r"(S|s)uch\s{np}as\s"), SplitNoPrefix, "such", "as", false),
        split("p13", format!(r"(E|e)xample\sof\s{np}is\s"), SplitNoPrefix, "example of", "is", false),
        split("p14", format!(r"(E|e)xamples\sof\s{np}are\s"), SplitNoPrefix, "examples of", "are", false),
        split("p36", format!(r"\swhether\s{np}or\s"), Split, "whether", "or", false),
        split("p37", format!(r"(C|c)ompare\s{np}with\s"), SplitNoPrefix, "compare", "with", true),
    ]
});

/// The fixed, ordered list of compiled surface patterns.
#[derive(Debug, Clone)]
pub struct PatternCatalog {
    patterns: Vec<CustomPattern>,
}

/// Process-wide default catalog: the enabled rows, compiled once.
static BUILTIN: Lazy<PatternCatalog> = Lazy::new(|| {
    let patterns = PATTERN_TABLE
        .iter()
        .filter(|row| row.enabled)
        .map(|row| CustomPattern::compile(row).expect("built-in pattern must compile"))
        .collect();
    PatternCatalog { patterns }
});

impl PatternCatalog {
    /// The default catalog (enabled built-in rows, declaration order).
    pub fn builtin() -> &'static PatternCatalog {
        &BUILTIN
    }

    /// Build a catalog from an explicit id selection, in table order.
    /// Disabled rows may be selected. Unknown ids are an error.
    pub fn with_patterns(ids: &[&str]) -> Result<PatternCatalog> {
        for id in ids {
            if !PATTERN_TABLE.iter().any(|row| row.id == *id) {
                return Err(Error::spec(format!("unknown pattern id: {id}")));
            }
        }
        let patterns = PATTERN_TABLE
            .iter()
            .filter(|row| ids.contains(&row.id))
            .map(CustomPattern::compile)
            .collect::<Result<Vec<_>>>()?;
        Ok(PatternCatalog { patterns })
    }

    /// Whether an id exists in the full table (enabled or not).
    pub fn knows(id: &str) -> bool {
        PATTERN_TABLE.iter().any(|row| row.id == id)
    }

    /// The compiled patterns, in declaration order.
    pub fn all_patterns(&self) -> &[CustomPattern] {
        &self.patterns
    }

    /// Number of compiled patterns.
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    /// Whether the catalog holds no patterns.
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog_has_copular_patterns() {
        let catalog = PatternCatalog::builtin();
        let ids: Vec<_> = catalog.all_patterns().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec!["p8a", "p8b"]);
    }

    #[test]
    fn test_full_table_compiles() {
        for row in PATTERN_TABLE.iter() {
            CustomPattern::compile(row).unwrap();
        }
    }

    #[test]
    fn test_compact_pattern_matches_with_affixes() {
        let catalog = PatternCatalog::builtin();
        let is_a = &catalog.all_patterns()[0];
        let m = is_a.regex.find("A sparrow is a bird.").unwrap();
        assert_eq!(m.as_str(), "w is a b");
        assert!(is_a.regex.find("is a").is_none());
    }

    #[test]
    fn test_catalog_selection_preserves_table_order() {
        let catalog = PatternCatalog::with_patterns(&["p8c", "p5", "p8a"]).unwrap();
        let ids: Vec<_> = catalog.all_patterns().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec!["p8a", "p5", "p8c"]);
    }

    #[test]
    fn test_unknown_pattern_id_is_rejected() {
        assert!(PatternCatalog::with_patterns(&["p999"]).is_err());
        assert!(PatternCatalog::knows("p10"));
        assert!(!PatternCatalog::knows("p999"));
    }

    #[test]
    fn test_split_pattern_matches_placeholder() {
        let catalog = PatternCatalog::with_patterns(&["p10"]).unwrap();
        let such_as = &catalog.all_patterns()[0];
        let text = "He saw such birds as sparrows and crows.";
        let m = such_as.regex.find(text).unwrap();
        assert!(m.as_str().starts_with("such birds as "));
    }
}
