// The analysis coordinator: runs the matchers in fixed priority order over
// the selected word, falling back to coarse POS-based classification.

use log::debug;

use crate::adverbials::AdverbialMatcher;
use crate::collocations::CollocationMatcher;
use crate::compound::{CompoundSplitter, SplitConfig};
use crate::lexicon::Lexicon;
use crate::noun_verb::NounVerbMatcher;
use crate::oracle::{LemmaLookup, Segmenter};
use crate::sentence::Sentence;
use crate::types::{
    CompoundSplit, LanguageAnalysis, Match, Token, TokenRef, WordAnalysis, WordType,
};
use crate::verbs::VerbDetector;

/// The decomposition and expression-detection engine. Holds only immutable
/// state; safe to share across request workers.
pub struct Engine<'a> {
    lexicon: &'a Lexicon,
    segmenter: &'a dyn Segmenter,
    lemmas: &'a dyn LemmaLookup,
    split_config: SplitConfig,
}

impl<'a> Engine<'a> {
    pub fn new(
        lexicon: &'a Lexicon,
        segmenter: &'a dyn Segmenter,
        lemmas: &'a dyn LemmaLookup,
    ) -> Self {
        Self {
            lexicon,
            segmenter,
            lemmas,
            split_config: SplitConfig::default(),
        }
    }

    pub fn with_split_config(mut self, config: SplitConfig) -> Self {
        self.split_config = config;
        self
    }

    /// Decompose a word into its compound parts.
    pub fn split_compound(&self, word: &str) -> Option<CompoundSplit> {
        self.splitter().split(word)
    }

    /// Analyze one selected word in its sentence context. Always produces a
    /// word type; a structural match additionally yields a LanguageAnalysis.
    pub fn analyze(&self, word: &str, sentence: &Sentence, lang: &str) -> WordAnalysis {
        let Some(target) = sentence.find(word) else {
            debug!("word not found in context: {word}");
            return WordAnalysis {
                text: word.to_string(),
                lemma: word.to_lowercase(),
                pos: "UNKNOWN".to_string(),
                morph: Default::default(),
                lang: lang.to_string(),
                word_type: WordType::Simple,
                analysis: None,
            };
        };
        let token = sentence.tokens()[target].clone();

        let analysis = self.detect(sentence, target, &token);
        let word_type = analysis
            .as_ref()
            .and_then(|a| a.word_type)
            .unwrap_or_else(|| self.classify(&token));

        WordAnalysis {
            text: token.text,
            lemma: token.lemma,
            pos: token.pos,
            morph: token.morph,
            lang: lang.to_string(),
            word_type,
            analysis,
        }
    }

    /// Run the matchers in fixed priority order; the first hit wins.
    /// Idiom-family matchers come before structural facts: an idiom match
    /// subsumes and better explains the same tokens.
    fn detect(
        &self,
        sentence: &Sentence,
        target: usize,
        token: &Token,
    ) -> Option<LanguageAnalysis> {
        if let Some(m) = AdverbialMatcher::new(self.lexicon).detect(sentence, target) {
            return Some(LanguageAnalysis {
                translate: Some(m.locution.clone()),
                lemma: Some(m.locution.clone()),
                word_type: Some(WordType::FixedExpression),
                related: m.related,
                pattern: None,
                hint: Some(m.locution.clone()),
                matched: Match::AdverbialLocution {
                    locution: m.locution,
                },
            });
        }

        if let Some(m) = CollocationMatcher::new(self.lexicon).detect(sentence, target) {
            let word_type = if token.pos == "VERB" {
                WordType::CollocationVerb
            } else {
                WordType::CollocationPrep
            };
            return Some(LanguageAnalysis {
                translate: Some(m.verb.clone()),
                lemma: Some(m.verb.clone()),
                word_type: Some(word_type),
                related: m.related,
                pattern: Some(format!("{} + {}", m.verb, m.prep)),
                hint: Some(m.pattern.to_string()),
                matched: Match::Collocation {
                    verb: m.verb,
                    pattern: m.pattern.to_string(),
                },
            });
        }

        if let Some(m) = NounVerbMatcher::new(self.lexicon).detect(sentence, target) {
            return Some(LanguageAnalysis {
                translate: Some(m.expression.to_string()),
                lemma: Some(m.expression.to_string()),
                word_type: Some(WordType::FixedExpression),
                related: m.related,
                pattern: None,
                hint: Some(m.expression.to_string()),
                matched: Match::NounVerb {
                    expression: m.expression.to_string(),
                },
            });
        }

        let verbs = VerbDetector::new(self.lexicon);

        if let Some(m) = verbs.separable_from_stem(sentence, target) {
            let particle = TokenRef::of(&sentence.tokens()[m.particle]);
            return Some(LanguageAnalysis {
                translate: Some(m.infinitive.clone()),
                lemma: Some(m.infinitive.clone()),
                word_type: Some(WordType::ConjugatedVerb),
                related: vec![particle],
                pattern: None,
                hint: None,
                matched: Match::SeparableFromStem {
                    infinitive: m.infinitive,
                    lemma: m.lemma,
                },
            });
        }

        if let Some(m) = verbs.separable_from_particle(sentence, target) {
            let verb = &sentence.tokens()[m.verb];
            return Some(LanguageAnalysis {
                translate: Some(m.infinitive.clone()),
                lemma: Some(m.infinitive.clone()),
                word_type: Some(WordType::SeparablePrefix),
                related: vec![TokenRef::of(verb)],
                pattern: None,
                hint: None,
                matched: Match::SeparableFromParticle {
                    infinitive: m.infinitive,
                    verb_text: verb.text.clone(),
                    verb_morph: verb.morph.clone(),
                    verb_offset: verb.offset,
                },
            });
        }

        if let Some(m) = verbs.compound_tense(sentence, target) {
            let aux = &sentence.tokens()[m.auxiliary];
            return Some(LanguageAnalysis {
                translate: None,
                lemma: None,
                word_type: Some(WordType::ConjugatedVerb),
                related: vec![TokenRef::of(aux)],
                pattern: None,
                hint: None,
                matched: Match::CompoundTense {
                    tense: m.tense.to_string(),
                    lemma: token.lemma.clone(),
                },
            });
        }

        None
    }

    /// Coarse fallback classification from POS and morphology alone.
    fn classify(&self, token: &Token) -> WordType {
        if token.pos == "VERB"
            && ["Tense", "Mood", "VerbForm"]
                .iter()
                .any(|k| token.morph.contains_key(*k))
            && token.morph.get("VerbForm").map(String::as_str) != Some("Inf")
        {
            return WordType::ConjugatedVerb;
        }

        if token.pos == "NOUN" {
            if self.splitter().split(&token.text).is_some() {
                return WordType::CompoundNoun;
            }
            if token.morph.get("Number").map(String::as_str) == Some("Plur") {
                return WordType::PluralNoun;
            }
        }

        if token.pos == "ADJ" && self.splitter().split(&token.text).is_some() {
            return WordType::CompoundAdjective;
        }

        WordType::Simple
    }

    fn splitter(&self) -> CompoundSplitter<'_> {
        CompoundSplitter::with_config(
            self.lexicon,
            self.segmenter,
            self.lemmas,
            self.split_config.clone(),
        )
    }
}
