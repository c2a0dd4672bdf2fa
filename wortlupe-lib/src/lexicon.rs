// Indexed view over the static expression tables. Built once per process
// and shared immutably by all detectors.

use std::collections::{HashMap, HashSet};

use crate::data;

/// A noun-verb expression entry as stored in the lexicon indexes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NounVerbEntry {
    /// Fixed preposition, empty for plain noun + verb expressions.
    pub prep: &'static str,
    pub noun: &'static str,
    pub verb: &'static str,
    /// Canonical form, e.g. "sich in Acht nehmen".
    pub canonical: &'static str,
    /// Whether the sentence must contain the reflexive particle.
    pub reflexive: bool,
}

/// Process-wide immutable lexicon.
pub struct Lexicon {
    separable_prefixes: HashSet<&'static str>,
    verb_prefixes: HashSet<&'static str>,
    function_words: HashSet<&'static str>,
    auxiliaries: HashSet<&'static str>,
    compound_tenses: HashMap<(&'static str, &'static str, &'static str), &'static str>,
    collocations: HashMap<(&'static str, &'static str), &'static str>,
    /// Lowercased noun -> expressions with that noun, plain and prep alike.
    noun_verb_by_noun: HashMap<String, Vec<NounVerbEntry>>,
    /// Lowercased word -> adverbial locutions containing it.
    adverbial_by_word: HashMap<String, Vec<&'static [&'static str]>>,
}

impl Lexicon {
    pub fn new() -> Self {
        let separable_prefixes: HashSet<_> = data::SEPARABLE_PREFIXES.iter().copied().collect();

        let mut verb_prefixes = separable_prefixes.clone();
        verb_prefixes.extend(data::INSEPARABLE_PREFIXES.iter().copied());

        let compound_tenses = data::COMPOUND_TENSES.iter().copied().collect();
        let collocations = data::VERB_PREP_COLLOCATIONS.iter().copied().collect();

        let mut noun_verb_by_noun: HashMap<String, Vec<NounVerbEntry>> = HashMap::new();
        for &((noun, verb), canonical) in data::NOUN_VERB_EXPRESSIONS {
            noun_verb_by_noun
                .entry(noun.to_lowercase())
                .or_default()
                .push(NounVerbEntry {
                    prep: "",
                    noun,
                    verb,
                    canonical,
                    reflexive: canonical.starts_with("sich "),
                });
        }
        for table in [
            data::NOUN_VERB_PREP_EXPRESSIONS,
            data::NOUN_VERB_PREP_REFLEXIVE_EXPRESSIONS,
        ] {
            for &((prep, noun, verb), canonical) in table {
                noun_verb_by_noun
                    .entry(noun.to_lowercase())
                    .or_default()
                    .push(NounVerbEntry {
                        prep,
                        noun,
                        verb,
                        canonical,
                        reflexive: canonical.starts_with("sich "),
                    });
            }
        }

        let mut adverbial_by_word: HashMap<String, Vec<&'static [&'static str]>> = HashMap::new();
        for &phrase in data::ADVERBIAL_LOCUTIONS {
            for word in phrase {
                adverbial_by_word
                    .entry(word.to_lowercase())
                    .or_default()
                    .push(phrase);
            }
        }

        Self {
            separable_prefixes,
            verb_prefixes,
            function_words: data::FUNCTION_WORDS.iter().copied().collect(),
            auxiliaries: data::AUXILIARIES.iter().copied().collect(),
            compound_tenses,
            collocations,
            noun_verb_by_noun,
            adverbial_by_word,
        }
    }

    pub fn is_separable_prefix(&self, word: &str) -> bool {
        self.separable_prefixes.contains(word.to_lowercase().as_str())
    }

    /// Any verb prefix, separable or inseparable.
    pub fn is_verb_prefix(&self, word: &str) -> bool {
        self.verb_prefixes.contains(word.to_lowercase().as_str())
    }

    pub fn is_function_word(&self, word: &str) -> bool {
        self.function_words.contains(word.to_lowercase().as_str())
    }

    pub fn is_auxiliary(&self, lemma: &str) -> bool {
        self.auxiliaries.contains(lemma)
    }

    /// Tense label for (auxiliary lemma, auxiliary Tense or Mood value,
    /// main verb VerbForm value).
    pub fn compound_tense(&self, aux: &str, aux_feature: &str, verb_form: &str) -> Option<&'static str> {
        self.compound_tenses
            .get(&(aux, aux_feature, verb_form))
            .copied()
    }

    /// Canonical pattern for a (verb lemma, preposition) collocation.
    pub fn collocation(&self, verb: &str, prep: &str) -> Option<&'static str> {
        self.collocations.get(&(verb, prep)).copied()
    }

    /// Noun-verb expressions whose noun matches `noun` (case-insensitive).
    pub fn noun_verb_entries(&self, noun: &str) -> &[NounVerbEntry] {
        self.noun_verb_by_noun
            .get(noun.to_lowercase().as_str())
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Adverbial locutions containing `word` (case-insensitive).
    pub fn locutions_containing(&self, word: &str) -> &[&'static [&'static str]] {
        self.adverbial_by_word
            .get(word.to_lowercase().as_str())
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::new()
    }
}
