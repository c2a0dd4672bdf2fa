// Verb + preposition collocation detection ("von etwas ausgehen").

use log::debug;

use crate::lexicon::Lexicon;
use crate::sentence::Sentence;
use crate::types::TokenRef;
use crate::verbs::VerbDetector;

/// A detected verb+preposition collocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollocationMatch {
    /// Matched verb lemma, particle-reconstructed where applicable
    /// ("ausgehen").
    pub verb: String,
    /// Canonical pattern ("von etwas ausgehen").
    pub pattern: &'static str,
    /// Lowercased preposition surface ("von").
    pub prep: String,
    /// The other participating tokens (never the selected one).
    pub related: Vec<TokenRef>,
    /// Whether the selected token is the preposition rather than the verb
    /// or its particle.
    pub selected_is_prep: bool,
}

pub struct CollocationMatcher<'a> {
    lexicon: &'a Lexicon,
}

impl<'a> CollocationMatcher<'a> {
    pub fn new(lexicon: &'a Lexicon) -> Self {
        Self { lexicon }
    }

    /// Detect a collocation around the selected token. The entry point may
    /// be the verb, its detached particle, or the preposition; the
    /// counterpart is located by POS scan.
    pub fn detect(&self, sentence: &Sentence, target: usize) -> Option<CollocationMatch> {
        let token = sentence.get(target)?;

        // Resolve the (verb, preposition) pair from whichever end was
        // selected.
        let (verb_idx, prep_idx) = if token.tag == "PTKVZ"
            && sentence.tokens()[sentence.head_of(target)].pos == "VERB"
            && sentence.head_of(target) != target
        {
            (sentence.head_of(target), self.find_preposition(sentence)?)
        } else if token.pos == "VERB" {
            (target, self.find_preposition(sentence)?)
        } else if token.pos == "ADP" {
            (sentence.indices_with_pos("VERB").next()?, target)
        } else {
            return None;
        };

        self.lookup(sentence, target, verb_idx, prep_idx)
    }

    /// First preposition that is not itself a detached particle.
    fn find_preposition(&self, sentence: &Sentence) -> Option<usize> {
        sentence
            .indices_with_pos("ADP")
            .find(|&i| sentence.tokens()[i].tag != "PTKVZ")
    }

    /// Try (particle-reconstructed lemma, prep) before (bare lemma, prep):
    /// "von etwas ausgehen" must not degrade to a bare "gehen" entry.
    fn lookup(
        &self,
        sentence: &Sentence,
        target: usize,
        verb_idx: usize,
        prep_idx: usize,
    ) -> Option<CollocationMatch> {
        let detector = VerbDetector::new(self.lexicon);
        let verb = &sentence.tokens()[verb_idx];
        let prep = sentence.tokens()[prep_idx].text.to_lowercase();

        let particle_idx = sentence
            .dependents_of(verb_idx)
            .find(|&i| sentence.tokens()[i].tag == "PTKVZ" || detector.is_particle(&sentence.tokens()[i]));
        let full_lemma = particle_idx.map(|i| {
            format!(
                "{}{}",
                sentence.tokens()[i].text.to_lowercase(),
                verb.lemma
            )
        });

        let candidates = [full_lemma.as_deref(), Some(verb.lemma.as_str())];
        for lemma in candidates.into_iter().flatten() {
            if let Some(pattern) = self.lexicon.collocation(lemma, &prep) {
                let related: Vec<TokenRef> = [Some(verb_idx), Some(prep_idx), particle_idx]
                    .into_iter()
                    .flatten()
                    .filter(|&i| i != target)
                    .map(|i| TokenRef::of(&sentence.tokens()[i]))
                    .collect();
                debug!("collocation: {pattern}");
                return Some(CollocationMatch {
                    verb: lemma.to_string(),
                    pattern,
                    prep: prep.clone(),
                    related,
                    selected_is_prep: target == prep_idx,
                });
            }
        }
        None
    }
}
