// Noun + light-verb expression detection ("in Betracht ziehen",
// "sich Gedanken machen").

use log::debug;

use crate::data::REFLEXIVE_PARTICLE;
use crate::lexicon::{Lexicon, NounVerbEntry};
use crate::sentence::Sentence;
use crate::types::TokenRef;

/// A detected noun-verb expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NounVerbMatch {
    /// Canonical form ("sich in Acht nehmen").
    pub expression: &'static str,
    /// The other participating tokens, in sentence order.
    pub related: Vec<TokenRef>,
}

pub struct NounVerbMatcher<'a> {
    lexicon: &'a Lexicon,
}

impl<'a> NounVerbMatcher<'a> {
    pub fn new(lexicon: &'a Lexicon) -> Self {
        Self { lexicon }
    }

    /// Detect a noun-verb expression around the selected token. Entry points
    /// are the noun, the verb, or the reflexive particle. Longer patterns are
    /// always tried before shorter ones sharing the same noun: reflexive
    /// preposition+noun+verb, then preposition+noun+verb, then plain
    /// noun+verb. Reflexive-flagged entries require the reflexive particle
    /// in the sentence.
    pub fn detect(&self, sentence: &Sentence, target: usize) -> Option<NounVerbMatch> {
        let token = sentence.get(target)?;
        let selected_is_sich = token.text.eq_ignore_ascii_case(REFLEXIVE_PARTICLE);
        if token.pos != "NOUN" && token.pos != "VERB" && !selected_is_sich {
            return None;
        }

        let nouns: Vec<usize> = if token.pos == "NOUN" {
            vec![target]
        } else {
            sentence.indices_with_pos("NOUN").collect()
        };
        let verbs: Vec<usize> = if token.pos == "VERB" {
            vec![target]
        } else {
            sentence.indices_with_pos("VERB").collect()
        };
        let preps: Vec<usize> = sentence.indices_with_pos("ADP").collect();
        let sich = sentence
            .tokens()
            .iter()
            .position(|t| t.text.eq_ignore_ascii_case(REFLEXIVE_PARTICLE));

        // Reflexive preposition + noun + verb.
        if let Some(sich_idx) = sich {
            if let Some(m) = self.search(sentence, &nouns, &verbs, &preps, |e, p, v| {
                e.reflexive && !e.prep.is_empty() && e.prep == p && e.verb == v
            }) {
                return Some(self.build(sentence, target, m, Some(sich_idx)));
            }
        }

        // Non-reflexive preposition + noun + verb.
        if !selected_is_sich {
            if let Some(m) = self.search(sentence, &nouns, &verbs, &preps, |e, p, v| {
                !e.reflexive && !e.prep.is_empty() && e.prep == p && e.verb == v
            }) {
                return Some(self.build(sentence, target, m, None));
            }
        }

        // Plain noun + verb; reflexive entries only with the particle present.
        for &n in &nouns {
            let entries = self.lexicon.noun_verb_entries(&sentence.tokens()[n].text);
            for &v in &verbs {
                let verb_lemma = sentence.tokens()[v].lemma.to_lowercase();
                let hit = entries.iter().find(|e| {
                    e.prep.is_empty()
                        && e.verb == verb_lemma
                        && (!selected_is_sich || e.reflexive)
                });
                if let Some(entry) = hit {
                    if entry.reflexive && sich.is_none() {
                        debug!(
                            "noun-verb {} skipped, reflexive particle missing",
                            entry.canonical
                        );
                        continue;
                    }
                    let found = Found {
                        entry: *entry,
                        noun: n,
                        verb: v,
                        prep: None,
                    };
                    let sich_ref = entry.reflexive.then_some(sich).flatten();
                    return Some(self.build(sentence, target, found, sich_ref));
                }
            }
        }

        None
    }

    fn search<F>(
        &self,
        sentence: &Sentence,
        nouns: &[usize],
        verbs: &[usize],
        preps: &[usize],
        matches: F,
    ) -> Option<Found>
    where
        F: Fn(&NounVerbEntry, &str, &str) -> bool,
    {
        for &n in nouns {
            let entries = self.lexicon.noun_verb_entries(&sentence.tokens()[n].text);
            if entries.is_empty() {
                continue;
            }
            for &p in preps {
                let prep_lemma = sentence.tokens()[p].lemma.to_lowercase();
                for &v in verbs {
                    let verb_lemma = sentence.tokens()[v].lemma.to_lowercase();
                    if let Some(entry) = entries
                        .iter()
                        .find(|e| matches(e, &prep_lemma, &verb_lemma))
                    {
                        return Some(Found {
                            entry: *entry,
                            noun: n,
                            verb: v,
                            prep: Some(p),
                        });
                    }
                }
            }
        }
        None
    }

    fn build(
        &self,
        sentence: &Sentence,
        target: usize,
        found: Found,
        sich: Option<usize>,
    ) -> NounVerbMatch {
        let mut participants = vec![found.noun, found.verb];
        participants.extend(found.prep);
        participants.extend(sich);
        participants.sort_unstable();
        participants.dedup();

        let related = participants
            .into_iter()
            .filter(|&i| i != target)
            .map(|i| TokenRef::of(&sentence.tokens()[i]))
            .collect();
        debug!("noun-verb expression: {}", found.entry.canonical);
        NounVerbMatch {
            expression: found.entry.canonical,
            related,
        }
    }
}

struct Found {
    entry: NounVerbEntry,
    noun: usize,
    verb: usize,
    prep: Option<usize>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{MorphMap, Token};

    fn tok(text: &str, lemma: &str, pos: &str, offset: usize) -> Token {
        Token {
            text: text.into(),
            lemma: lemma.into(),
            pos: pos.into(),
            tag: String::new(),
            dep: String::new(),
            head: 0,
            morph: MorphMap::new(),
            offset,
        }
    }

    // "Das Gericht zieht diesen Fall in Betracht."
    fn betracht_sentence() -> Sentence {
        Sentence::new(vec![
            tok("Das", "der", "DET", 0),
            tok("Gericht", "gericht", "NOUN", 4),
            tok("zieht", "ziehen", "VERB", 12),
            tok("diesen", "dieser", "DET", 18),
            tok("Fall", "fall", "NOUN", 25),
            tok("in", "in", "ADP", 30),
            tok("Betracht", "betracht", "NOUN", 33),
            tok(".", ".", "PUNCT", 41),
        ])
    }

    #[test]
    fn test_prep_expression_from_noun() {
        let lex = Lexicon::new();
        let s = betracht_sentence();
        let m = NounVerbMatcher::new(&lex).detect(&s, 6).unwrap();
        assert_eq!(m.expression, "in Betracht ziehen");
        assert_eq!(
            m.related,
            vec![TokenRef::new("zieht", 12), TokenRef::new("in", 30)]
        );
    }

    #[test]
    fn test_prep_expression_from_verb() {
        let lex = Lexicon::new();
        let s = betracht_sentence();
        let m = NounVerbMatcher::new(&lex).detect(&s, 2).unwrap();
        assert_eq!(m.expression, "in Betracht ziehen");
        assert_eq!(
            m.related,
            vec![TokenRef::new("in", 30), TokenRef::new("Betracht", 33)]
        );
    }

    #[test]
    fn test_plain_expression_from_verb() {
        // "Das spielt eine Rolle."
        let s = Sentence::new(vec![
            tok("Das", "der", "PRON", 0),
            tok("spielt", "spielen", "VERB", 4),
            tok("eine", "ein", "DET", 11),
            tok("Rolle", "rolle", "NOUN", 16),
        ]);
        let lex = Lexicon::new();
        let m = NounVerbMatcher::new(&lex).detect(&s, 1).unwrap();
        assert_eq!(m.expression, "eine Rolle spielen");
        assert_eq!(m.related, vec![TokenRef::new("Rolle", 16)]);
    }

    #[test]
    fn test_reflexive_gating_without_sich() {
        // "Wir machen uns Gedanken." - "uns" is not the indexed particle, so
        // the reflexive entry must not fire.
        let s = Sentence::new(vec![
            tok("Wir", "wir", "PRON", 0),
            tok("machen", "machen", "VERB", 4),
            tok("uns", "wir", "PRON", 11),
            tok("Gedanken", "gedanke", "NOUN", 15),
        ]);
        let lex = Lexicon::new();
        assert_eq!(NounVerbMatcher::new(&lex).detect(&s, 3), None);
    }

    #[test]
    fn test_reflexive_expression_with_sich() {
        // "Er macht sich Gedanken."
        let s = Sentence::new(vec![
            tok("Er", "er", "PRON", 0),
            tok("macht", "machen", "VERB", 3),
            tok("sich", "sich", "PRON", 9),
            tok("Gedanken", "gedanke", "NOUN", 14),
        ]);
        let lex = Lexicon::new();
        let m = NounVerbMatcher::new(&lex).detect(&s, 3).unwrap();
        assert_eq!(m.expression, "sich Gedanken machen");
        assert_eq!(
            m.related,
            vec![TokenRef::new("macht", 3), TokenRef::new("sich", 9)]
        );
    }

    #[test]
    fn test_reflexive_prep_expression_from_sich() {
        // "Er hat sich zu Wort gemeldet."
        let s = Sentence::new(vec![
            tok("Er", "er", "PRON", 0),
            tok("hat", "haben", "AUX", 3),
            tok("sich", "sich", "PRON", 7),
            tok("zu", "zu", "ADP", 12),
            tok("Wort", "wort", "NOUN", 15),
            tok("gemeldet", "melden", "VERB", 20),
        ]);
        let lex = Lexicon::new();
        let m = NounVerbMatcher::new(&lex).detect(&s, 2).unwrap();
        assert_eq!(m.expression, "sich zu Wort melden");
        assert_eq!(
            m.related,
            vec![
                TokenRef::new("zu", 12),
                TokenRef::new("Wort", 15),
                TokenRef::new("gemeldet", 20),
            ]
        );
    }

    #[test]
    fn test_longer_prep_pattern_beats_plain() {
        // "Das stellt alles in Frage." - (Frage, stellen) also has a plain
        // entry; the prepositional one must win.
        let s = Sentence::new(vec![
            tok("Das", "der", "PRON", 0),
            tok("stellt", "stellen", "VERB", 4),
            tok("alles", "alle", "PRON", 11),
            tok("in", "in", "ADP", 17),
            tok("Frage", "frage", "NOUN", 20),
        ]);
        let lex = Lexicon::new();
        let m = NounVerbMatcher::new(&lex).detect(&s, 4).unwrap();
        assert_eq!(m.expression, "in Frage stellen");
    }

    #[test]
    fn test_unrelated_noun_is_none() {
        let s = Sentence::new(vec![
            tok("Der", "der", "DET", 0),
            tok("Hund", "hund", "NOUN", 4),
            tok("bellt", "bellen", "VERB", 9),
        ]);
        let lex = Lexicon::new();
        assert_eq!(NounVerbMatcher::new(&lex).detect(&s, 1), None);
    }
}
