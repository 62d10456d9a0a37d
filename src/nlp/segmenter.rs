//! Sentence segmentation
//!
//! Splits a document into sentences at sentence-final punctuation followed
//! by an uppercase start, then merges false splits caused by abbreviations
//! ("Dr. Smith", "e.g. birds", enumerations like "No. 7").

use once_cell::sync::Lazy;
use regex::Regex;

/// Sentence boundary: sentence-final punctuation plus optional surrounder
/// quote, whitespace, then optional surrounder quote plus an uppercase
/// letter. The `regex` crate has no lookaround, so both context sides are
/// captured and the split lands on the whitespace between the two groups.
static BOUNDARY: Lazy<Regex> = Lazy::new(|| {
    const SURROUNDER: &str =
        "[\u{0027}\u{2018}\u{2019}\u{201A}\u{201B}\u{201C}\u{201D}\u{201E}\u{201F}\u{0022}]?";
    Regex::new(&format!(r"([!\.\?]{SURROUNDER})\s({SURROUNDER}\p{{Lu}})")).unwrap()
});

/// Segments that end with one of these followed by a period are not
/// sentence ends; the split is undone. Single capital letters cover
/// initials, the rest are honorifics and unit/ordinal abbreviations.
const ABBREVIATIONS: &[&str] = &[
    "A", "B", "C", "D", "E", "F", "G", "H", "I", "J", "K", "L", "M", "N", "O", "P", "Q", "R", "S",
    "T", "U", "V", "W", "X", "Y", "Z", "Adj", "Adm", "Adv", "Asst", "Bart", "Bldg", "Brig", "Bros",
    "Capt", "Cmdr", "Col", "Comdr", "Con", "Corp", "Cpl", "DR", "Dr", "Drs", "Ens", "Fig", "FIG",
    "fig", "Gen", "Gov", "Hon", "Hr", "Hosp", "Insp", "Lt", "MM", "MR", "MRS", "MS", "Maj",
    "Messrs", "Mlle", "Mme", "Mr", "Mrs", "Ms", "Msgr", "Op", "Ord", "Pat", "Pfc", "Ph", "Prof",
    "Pvt", "Rep", "Reps", "Res", "Rev", "Rt", "Sen", "Sens", "Sfc", "Sgt", "Sr", "St", "Supt",
    "Surg", "v", "vs", "U.S", "u.s", "U.K", "u.k", "i.e", "rev", "e.g", "No", "Nos", "Art", "Nr",
    "pp",
];

/// Abbreviation-aware sentence segmenter.
#[derive(Debug, Clone, Copy, Default)]
pub struct SentenceSegmenter;

impl SentenceSegmenter {
    /// Create a new segmenter.
    pub fn new() -> Self {
        Self
    }

    /// Split `text` into sentences.
    ///
    /// Never fails: if no boundary is found, the whole input is returned as
    /// a single segment.
    pub fn segment(&self, text: &str) -> Vec<String> {
        let mut raw = Vec::new();
        let mut start = 0;
        for caps in BOUNDARY.captures_iter(text) {
            let end = caps.get(1).map(|m| m.end()).unwrap_or(start);
            let next = caps.get(2).map(|m| m.start()).unwrap_or(end);
            raw.push(&text[start..end]);
            start = next;
        }
        raw.push(&text[start..]);

        let mut sentences: Vec<String> = Vec::with_capacity(raw.len());
        sentences.push(raw[0].to_string());
        for segment in &raw[1..] {
            match sentences.last_mut() {
                Some(last)
                    if ABBREVIATIONS
                        .iter()
                        .any(|abb| last.ends_with(&format!("{abb}."))) =>
                {
                    last.push(' ');
                    last.push_str(segment);
                }
                _ => sentences.push(segment.to_string()),
            }
        }

        // If no valid sentence is found, the line itself is analyzed.
        if sentences.is_empty() {
            sentences.push(text.to_string());
        }
        sentences
    }
}
