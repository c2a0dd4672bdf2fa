// Collaborator seams for the compound decomposer.
//
// Sub-word segmentation and lemma lookup are external services; the engine
// only consumes their answers. When either is unavailable the decomposer
// degrades to "no split" rather than failing the request.

/// One ranked binary split proposed by the segmentation oracle.
#[derive(Debug, Clone, PartialEq)]
pub struct SplitCandidate {
    pub score: f64,
    pub left: String,
    pub right: String,
}

impl SplitCandidate {
    pub fn new(score: f64, left: impl Into<String>, right: impl Into<String>) -> Self {
        Self {
            score,
            left: left.into(),
            right: right.into(),
        }
    }
}

/// Sub-word segmentation oracle: proposes binary splits, best first.
pub trait Segmenter {
    fn candidates(&self, word: &str) -> Vec<SplitCandidate>;
}

/// Lemma-lookup oracle: is this a known dictionary form?
pub trait LemmaLookup {
    fn is_known(&self, word: &str) -> bool;
}

/// Segmenter standing in for an unavailable oracle: proposes nothing, so
/// every word reads as "not a compound".
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSegmenter;

impl Segmenter for NullSegmenter {
    fn candidates(&self, _word: &str) -> Vec<SplitCandidate> {
        Vec::new()
    }
}

/// Lemma lookup standing in for an unavailable oracle: knows no words, so
/// split validation fails and the decomposer reports "no split".
#[derive(Debug, Default, Clone, Copy)]
pub struct NullLemmaLookup;

impl LemmaLookup for NullLemmaLookup {
    fn is_known(&self, _word: &str) -> bool {
        false
    }
}
