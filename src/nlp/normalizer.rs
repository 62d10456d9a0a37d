//! Sentence text normalization
//!
//! Cleans raw sentence text before pattern matching: whitespace collapse,
//! parenthetical removal, contraction expansion, and stray-quote stripping.
//! The steps run in a fixed order; the output feeds both the surface-pattern
//! matcher and the POS tagger, so the pipeline must stay deterministic.

use once_cell::sync::Lazy;
use regex::Regex;

/// Whitespace-class characters collapsed to a single ASCII space. The
/// leading `Â` covers the mangled non-breaking spaces that wiki dumps
/// produce when Latin-1 text is read as UTF-8.
static WHITESPACE_VARIANTS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[Â \t\p{Zs}\n\x0B\x0C\r\x{85}\x{2028}\x{2029}]+").unwrap());

/// Plain whitespace collapse, applied again after parenthetical removal.
static MULTIPLE_WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Text enclosed in parentheses or brackets. Non-greedy and non-nested: a
/// single close bracket ends the deletion even if brackets were nested in
/// the source.
static PARENTHETICAL: Lazy<Regex> = Lazy::new(|| Regex::new(r"\(.*?\)|\[.*?\]").unwrap());

/// Quotation marks that are stripped when not attached to a plural or
/// possessive `s`.
const STRAY_QUOTES: [char; 6] = [
    '\u{201A}', '\u{201C}', '\u{201D}', '\u{201E}', '\u{201F}', '\u{0022}',
];

/// Apostrophe-family characters that gate contraction expansion.
const APOSTROPHES: [char; 4] = ['\u{0027}', '\u{2018}', '\u{2019}', '\u{201B}'];

/// The fixed, ordered contraction table. Order matters: `she's` is consumed
/// by the `he's` rule and `there's` by the `here's` rule, and both land on
/// the right expansion without extra rules.
///
/// Known quirk: the `that's` / `where's` / `who's` rows map to mismatched
/// pronouns. Kept as-is pending product review; extraction results depend
/// on the exact replacements.
static CONTRACTIONS: Lazy<Vec<(Regex, &'static str)>> = Lazy::new(|| {
    const APOS: &str = "[\u{0027}\u{2018}\u{2019}\u{201B}]";
    let rule = |body: &str, replacement: &'static str| {
        (
            Regex::new(&format!("(?i){}", body.replace("APOS", APOS))).unwrap(),
            replacement,
        )
    };
    vec![
        // Auxiliary verb abbreviations
        rule(r"APOSd\s", " would "),
        rule(r"APOSre\s", " are "),
        rule(r"APOSve\s", " have "),
        rule(r"APOSll\s", " will "),
        rule(r"iAPOSm\s", "I am "),
        // Auxiliary verb 's
        rule(r"heAPOSs\s", "he is "),
        rule(r"sheAPOSs\s", "she is "),
        rule(r"itAPOSs\s", "it is "),
        rule(r"thatAPOSs\s", "he is "),
        rule(r"whereAPOSs\s", "she is "),
        rule(r"whoAPOSs\s", "it is "),
        rule(r"whatAPOSs\s", "what is "),
        rule(r"whenAPOSs\s", "when is "),
        rule(r"whyAPOSs\s", "why is "),
        rule(r"howAPOSs\s", "how is "),
        rule(r"hereAPOSs\s", "here is "),
        rule(r"thereAPOSs\s", "there is "),
        // Negations
        rule(r"isnAPOSt\s", "is not "),
        rule(r"arenAPOSt\s", "are not "),
        rule(r"donAPOSt\s", "do not "),
        rule(r"doesnAPOSt\s", "does not "),
        rule(r"canAPOSt\s", "can not "),
        rule(r"couldnAPOSt\s", "could not "),
        rule(r"shouldnAPOSt\s", "should not "),
        rule(r"wonAPOSt\s", " will not "),
        rule(r"wouldnAPOSt\s", "would not "),
        rule(r"havenAPOSt\s", "have not "),
    ]
});

/// Expand the most common auxiliary-verb contractions into their regular
/// form.
///
/// Only runs if the sentence contains an apostrophe-family character. Each
/// replacement requires the contraction to be followed by whitespace, so a
/// sentence-final contraction is not expanded (known limitation).
pub fn expand_contractions(sentence: &str) -> String {
    if !sentence.contains(&APOSTROPHES[..]) {
        return sentence.to_string();
    }
    let mut out = sentence.to_string();
    for (pattern, replacement) in CONTRACTIONS.iter() {
        out = pattern.replace_all(&out, *replacement).into_owned();
    }
    out
}

/// Replace stray quotation marks with a space, keeping quotes that are
/// directly adjacent to the letter `s` (possessive `s'` and quoted plurals).
fn strip_stray_quotes(sentence: &str) -> String {
    let chars: Vec<char> = sentence.chars().collect();
    let mut out = String::with_capacity(sentence.len());
    for (i, &c) in chars.iter().enumerate() {
        if STRAY_QUOTES.contains(&c) {
            let prev_is_s = i > 0 && chars[i - 1] == 's';
            let next_is_s = i + 1 < chars.len() && chars[i + 1] == 's';
            if !prev_is_s && !next_is_s {
                out.push(' ');
                continue;
            }
        }
        out.push(c);
    }
    out
}

/// Deterministic sentence normalizer.
///
/// The pipeline order is fixed: whitespace variants → parenthetical removal
/// → whitespace re-collapse → contraction expansion → stray-quote stripping
/// → trim. `normalize` is idempotent.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextNormalizer;

impl TextNormalizer {
    /// Create a new normalizer.
    pub fn new() -> Self {
        Self
    }

    /// Normalize one sentence.
    pub fn normalize(&self, sentence: &str) -> String {
        let sentence = WHITESPACE_VARIANTS.replace_all(sentence, " ");
        let sentence = PARENTHETICAL.replace_all(&sentence, "");
        let sentence = MULTIPLE_WHITESPACE.replace_all(&sentence, " ");
        let sentence = expand_contractions(&sentence);
        let sentence = strip_stray_quotes(&sentence);
        // Quote stripping can leave double spaces behind; collapse them so
        // normalize is idempotent and `\s`-anchored patterns still match.
        let sentence = MULTIPLE_WHITESPACE.replace_all(&sentence, " ");
        sentence.trim().to_string()
    }
}
