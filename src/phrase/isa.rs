//! Assembled is-a relations
//!
//! Combines the "before" and "after" phrase lists of a pattern match into a
//! directional instance/class pair.

use std::fmt;

use crate::phrase::noun_phrase::NounPhrase;

/// One extracted is-a relation: instance phrases and class phrases.
///
/// Holds independent copies of the phrase lists taken at construction time;
/// nothing is shared with the chunker's working lists.
#[derive(Debug, Clone)]
pub struct IsaPattern {
    instance: Vec<NounPhrase>,
    clazz: Vec<NounPhrase>,
}

impl IsaPattern {
    /// Assemble a relation from the two sides of a match. With
    /// `instance_first`, the instance derives from the "before" window and
    /// the class from the "after" window; otherwise the roles are swapped.
    pub fn assemble(
        instance_first: bool,
        before: Vec<NounPhrase>,
        after: Vec<NounPhrase>,
    ) -> Self {
        if instance_first {
            Self {
                instance: before,
                clazz: after,
            }
        } else {
            Self {
                instance: after,
                clazz: before,
            }
        }
    }

    /// The instance-side phrases.
    pub fn instance(&self) -> &[NounPhrase] {
        &self.instance
    }

    /// The class-side phrases.
    pub fn clazz(&self) -> &[NounPhrase] {
        &self.clazz
    }
}

/// Debug/corpus-comparison rendering: each phrase list as
/// `{pre _core_ post|…}` with underscore-delimited cores.
fn phrase_list_to_string(phrases: &[NounPhrase]) -> String {
    if phrases.is_empty() {
        return "{}".to_string();
    }
    let mut out = String::from("{");
    for (idx, phrase) in phrases.iter().enumerate() {
        if idx > 0 {
            out.push('|');
        }
        for token in phrase.pre_modifiers() {
            out.push_str(&token.text);
            out.push(' ');
        }
        out.push('_');
        out.push_str(&phrase.core().text);
        out.push('_');
        for token in phrase.post_modifiers() {
            out.push_str(&token.text);
            out.push(' ');
        }
    }
    out.push('}');
    out
}

impl fmt::Display for IsaPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} --isa--> {}",
            phrase_list_to_string(&self.instance),
            phrase_list_to_string(&self.clazz)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TaggedToken;

    fn phrase(core: &str) -> NounPhrase {
        NounPhrase::new(TaggedToken::new(core, "NN"), 4)
    }

    #[test]
    fn test_instance_first_orientation() {
        let isa = IsaPattern::assemble(true, vec![phrase("sparrow")], vec![phrase("bird")]);
        assert_eq!(isa.instance()[0].core().text, "sparrow");
        assert_eq!(isa.clazz()[0].core().text, "bird");
    }

    #[test]
    fn test_swapped_orientation() {
        let isa = IsaPattern::assemble(false, vec![phrase("bird")], vec![phrase("sparrow")]);
        assert_eq!(isa.instance()[0].core().text, "sparrow");
        assert_eq!(isa.clazz()[0].core().text, "bird");
    }

    #[test]
    fn test_display_rendering() {
        let isa = IsaPattern::assemble(true, vec![phrase("sparrow")], vec![phrase("bird")]);
        assert_eq!(isa.to_string(), "{_sparrow_} --isa--> {_bird_}");
    }

    #[test]
    fn test_display_with_modifiers_and_siblings() {
        let mut small = phrase("sparrow");
        small.add_pre_modifier(TaggedToken::new("small", "JJ"));
        let isa = IsaPattern::assemble(true, vec![small, phrase("crow")], vec![phrase("bird")]);
        assert_eq!(
            isa.to_string(),
            "{small _sparrow_|_crow_} --isa--> {_bird_}"
        );
    }
}
