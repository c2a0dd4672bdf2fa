// Recursive German compound splitting.
//
// The binary split itself comes from an external segmentation oracle; this
// module filters, validates, cleans and recursively expands its candidates.

use log::debug;

use crate::lexicon::Lexicon;
use crate::oracle::{LemmaLookup, Segmenter, SplitCandidate};
use crate::{data, types::CompoundSplit};

/// Empirically tuned splitting constants. Calibrated against a compound-word
/// test set rather than derived; kept adjustable for recalibration.
#[derive(Debug, Clone, PartialEq)]
pub struct SplitConfig {
    /// Words shorter than this are never split.
    pub min_word_len: usize,
    /// Maximum recursion depth into the left part.
    pub max_depth: usize,
    /// Minimum left-part length to attempt a recursive split.
    pub recurse_left_len: usize,
    /// Minimum part length on either side of a split.
    pub min_part_len: usize,
    /// Score threshold for long words (lengths at or above `long_word_len`).
    pub long_word_len: usize,
    pub long_word_score: f64,
    /// Score threshold for medium words.
    pub medium_word_len: usize,
    pub medium_word_score: f64,
    /// Stricter threshold applied to short words inside a recursive call.
    pub recursive_score: f64,
    /// Default threshold for short top-level words.
    pub base_score: f64,
    /// A candidate with a linking element is preferred over the top candidate
    /// when its score is within this gap.
    pub interfix_score_gap: f64,
}

impl Default for SplitConfig {
    fn default() -> Self {
        Self {
            min_word_len: 6,
            max_depth: 2,
            recurse_left_len: 10,
            min_part_len: 3,
            long_word_len: 15,
            long_word_score: -1.0,
            medium_word_len: 10,
            medium_word_score: 0.0,
            recursive_score: 0.5,
            base_score: 0.4,
            interfix_score_gap: 0.25,
        }
    }
}

/// Splits compound words into meaningful parts via the segmentation and
/// lemma-lookup oracles.
pub struct CompoundSplitter<'a> {
    lexicon: &'a Lexicon,
    segmenter: &'a dyn Segmenter,
    lemmas: &'a dyn LemmaLookup,
    config: SplitConfig,
}

impl<'a> CompoundSplitter<'a> {
    pub fn new(
        lexicon: &'a Lexicon,
        segmenter: &'a dyn Segmenter,
        lemmas: &'a dyn LemmaLookup,
    ) -> Self {
        Self::with_config(lexicon, segmenter, lemmas, SplitConfig::default())
    }

    pub fn with_config(
        lexicon: &'a Lexicon,
        segmenter: &'a dyn Segmenter,
        lemmas: &'a dyn LemmaLookup,
        config: SplitConfig,
    ) -> Self {
        Self {
            lexicon,
            segmenter,
            lemmas,
            config,
        }
    }

    /// Split `word` into its compound parts, leftmost first. `None` means
    /// "not a compound"; the result never has fewer than two parts.
    pub fn split(&self, word: &str) -> Option<CompoundSplit> {
        let parts = self.split_at_depth(word, 0)?;
        debug_assert!(parts.len() >= 2);
        Some(CompoundSplit { parts })
    }

    fn split_at_depth(&self, word: &str, depth: usize) -> Option<Vec<String>> {
        if depth > self.config.max_depth {
            return None;
        }
        if word.chars().count() < self.config.min_word_len {
            return None;
        }

        let (left, right) = self.split_once(word, depth)?;

        if self.is_derived_word(word, &left, &right) {
            debug!("split rejected, derived word: {word}");
            return None;
        }

        let left = self.clean_part(&left);

        if !self.lemmas.is_known(&left) || !self.lemmas.is_known(&right) {
            debug!("split rejected, unknown part: {left} / {right}");
            return None;
        }

        // A long left part is likely itself a compound.
        let mut parts = Vec::new();
        if left.chars().count() >= self.config.recurse_left_len {
            match self.split_at_depth(&left, depth + 1) {
                Some(left_parts) => parts.extend(left_parts),
                None => parts.push(left),
            }
        } else {
            parts.push(left);
        }
        parts.push(right);

        Some(parts)
    }

    /// One binary split: filter the oracle's ranked candidates and pick the
    /// best acceptable one.
    fn split_once(&self, word: &str, depth: usize) -> Option<(String, String)> {
        let min_score = self.min_score(word, depth);

        let candidates: Vec<SplitCandidate> = self
            .segmenter
            .candidates(word)
            .into_iter()
            .filter(|c| {
                // Function words never form meaningful compound parts,
                // whatever the score says.
                !self.lexicon.is_function_word(&c.left)
                    && !self.lexicon.is_function_word(&c.right)
            })
            .collect();

        let best = candidates.first()?;
        if best.score < min_score {
            debug!(
                "split rejected, score {:.2} below {:.2}: {word}",
                best.score, min_score
            );
            return None;
        }

        // Participial compounds (herzzerreißend): prefer the candidate whose
        // right part ends in a participial suffix and leaves a real stem.
        if ends_in_participial_suffix(word) {
            if let Some(c) = candidates.iter().find(|c| {
                participial_stem_len(&c.right)
                    .is_some_and(|stem| stem >= self.config.min_part_len)
            }) {
                return self.accept(c);
            }
        }

        // Interfix preference: a near-scoring candidate whose left part ends
        // in a recognized linking element usually marks the true boundary
        // (Verhandlungsbasis splits after "Verhandlungs", not elsewhere).
        if !has_linking_element(&best.left) {
            if let Some(c) = candidates.iter().find(|c| {
                has_linking_element(&c.left)
                    && best.score - c.score <= self.config.interfix_score_gap
            }) {
                return self.accept(c);
            }
        }

        self.accept(best)
    }

    fn accept(&self, c: &SplitCandidate) -> Option<(String, String)> {
        if c.left.chars().count() < self.config.min_part_len
            || c.right.chars().count() < self.config.min_part_len
        {
            return None;
        }
        Some((c.left.clone(), c.right.clone()))
    }

    fn min_score(&self, word: &str, depth: usize) -> f64 {
        let len = word.chars().count();
        if len >= self.config.long_word_len {
            self.config.long_word_score
        } else if len >= self.config.medium_word_len {
            self.config.medium_word_score
        } else if depth > 0 {
            self.config.recursive_score
        } else {
            self.config.base_score
        }
    }

    /// Derived words look like compounds to the segmenter but are prefix
    /// formations: Ausbildung is aus+bilden+ung, not Aus + Bildung.
    fn is_derived_word(&self, word: &str, left: &str, right: &str) -> bool {
        let word_lower = word.to_lowercase();
        let left_lower = left.to_lowercase();
        let right_lower = right.to_lowercase();

        if !self.lexicon.is_verb_prefix(&left_lower) {
            return false;
        }
        if data::DERIVATIONAL_SUFFIXES
            .iter()
            .any(|s| word_lower.ends_with(s))
        {
            return true;
        }
        // Nominalized infinitive: Vorhaben is vor+haben, not Vor + Garten-like.
        if word_lower.ends_with("en") && right_lower.ends_with("en") {
            return true;
        }
        // Bare verb-stem noun: Ausfall, Eingriff.
        data::VERB_STEM_NOUNS.contains(&right_lower.as_str())
    }

    /// Strip a trailing linking element from the left part. Among the ordered
    /// rules, prefer the first cleaning whose result the lemma oracle knows
    /// (tried as-is, then lowercased: adjective and verb lemmas are lowercase
    /// even when the compound part is capitalized, Kranken -> krank). Fall
    /// back to the first applicable rule, then to the raw part.
    fn clean_part(&self, part: &str) -> String {
        let part_lower = part.to_lowercase();
        let mut first_applicable: Option<String> = None;

        for (link, base) in data::LINKING_PATTERNS {
            if !part_lower.ends_with(link) || part.chars().count() <= link.chars().count() + 2 {
                continue;
            }
            let keep = part.chars().count() - link.chars().count();
            let stem: String = part.chars().take(keep).collect();
            let cleaned = format!("{stem}{base}");
            if self.lemmas.is_known(&cleaned) {
                return cleaned;
            }
            let cleaned_lower = cleaned.to_lowercase();
            if self.lemmas.is_known(&cleaned_lower) {
                return cleaned_lower;
            }
            first_applicable.get_or_insert(cleaned);
        }

        if self.lemmas.is_known(part) {
            return part.to_string();
        }
        first_applicable.unwrap_or_else(|| part.to_string())
    }
}

fn ends_in_participial_suffix(word: &str) -> bool {
    let lower = word.to_lowercase();
    data::PARTICIPIAL_SUFFIXES.iter().any(|s| lower.ends_with(s))
}

/// Stem length of a right part ending in a participial suffix, in chars.
fn participial_stem_len(part: &str) -> Option<usize> {
    let lower = part.to_lowercase();
    data::PARTICIPIAL_SUFFIXES
        .iter()
        .filter(|s| lower.ends_with(*s))
        .map(|s| lower.chars().count() - s.chars().count())
        .max()
}

fn has_linking_element(part: &str) -> bool {
    let lower = part.to_lowercase();
    data::LINKING_PATTERNS
        .iter()
        .any(|(link, _)| lower.ends_with(link) && lower.chars().count() > link.chars().count() + 2)
}
