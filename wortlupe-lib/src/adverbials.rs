// Adverbial locution detection ("auf jeden Fall").

use log::debug;

use crate::lexicon::Lexicon;
use crate::sentence::Sentence;
use crate::types::TokenRef;

/// A detected fixed adverbial phrase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdverbialMatch {
    /// Canonical form as it appears in the sentence ("auf jeden Fall").
    pub locution: String,
    /// All member tokens except the selected one.
    pub related: Vec<TokenRef>,
    /// Member count, used for longest-candidate preference.
    len: usize,
}

pub struct AdverbialMatcher<'a> {
    lexicon: &'a Lexicon,
}

impl<'a> AdverbialMatcher<'a> {
    pub fn new(lexicon: &'a Lexicon) -> Self {
        Self { lexicon }
    }

    /// Detect an adverbial locution containing the selected token: fetch
    /// candidates from the reverse index, look for a contiguous token run
    /// matching one, and prefer the longest among overlapping matches
    /// ("auf jeden Fall" over a hypothetical shorter "jeden Fall").
    pub fn detect(&self, sentence: &Sentence, target: usize) -> Option<AdverbialMatch> {
        let word = sentence.get(target)?.text.to_lowercase();
        let candidates = self.lexicon.locutions_containing(&word);
        if candidates.is_empty() {
            return None;
        }

        let mut best: Option<AdverbialMatch> = None;
        for candidate in candidates {
            if let Some(m) = self.find_contiguous(sentence, target, candidate) {
                if best.as_ref().is_none_or(|b| m.len > b.len) {
                    best = Some(m);
                }
            }
        }
        if let Some(m) = &best {
            debug!("adverbial locution: {}", m.locution);
        }
        best
    }

    /// Find a contiguous token run matching `candidate` (case-insensitive)
    /// that contains the selected token.
    fn find_contiguous(
        &self,
        sentence: &Sentence,
        target: usize,
        candidate: &[&str],
    ) -> Option<AdverbialMatch> {
        let tokens = sentence.tokens();
        let len = candidate.len();
        if len == 0 || len > tokens.len() {
            return None;
        }

        for start in 0..=(tokens.len() - len) {
            let run = &tokens[start..start + len];
            let matches = run
                .iter()
                .zip(candidate)
                .all(|(t, w)| t.text.to_lowercase() == w.to_lowercase());
            if !matches {
                continue;
            }
            if !(start..start + len).contains(&target) {
                continue;
            }

            let locution = run
                .iter()
                .map(|t| t.text.as_str())
                .collect::<Vec<_>>()
                .join(" ");
            let related = (start..start + len)
                .filter(|&i| i != target)
                .map(|i| TokenRef::of(&tokens[i]))
                .collect();
            return Some(AdverbialMatch {
                locution,
                related,
                len,
            });
        }
        None
    }
}
