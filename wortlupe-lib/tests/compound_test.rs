// End-to-end compound decomposition properties.

use wortlupe_lib::{
    CompoundSplitter, LemmaLookup, Lexicon, NullLemmaLookup, NullSegmenter, Segmenter,
    SplitCandidate,
};

struct TableSegmenter(Vec<(&'static str, Vec<SplitCandidate>)>);

impl Segmenter for TableSegmenter {
    fn candidates(&self, word: &str) -> Vec<SplitCandidate> {
        self.0
            .iter()
            .find(|(w, _)| *w == word)
            .map(|(_, c)| c.clone())
            .unwrap_or_default()
    }
}

struct TableLemmas(Vec<&'static str>);

impl LemmaLookup for TableLemmas {
    fn is_known(&self, word: &str) -> bool {
        self.0.contains(&word)
    }
}

#[test]
fn test_krankenhaus_decomposes() {
    let lexicon = Lexicon::new();
    let segmenter = TableSegmenter(vec![(
        "Krankenhaus",
        vec![SplitCandidate::new(0.79, "Kranken", "Haus")],
    )]);
    let lemmas = TableLemmas(vec!["krank", "Haus"]);
    let splitter = CompoundSplitter::new(&lexicon, &segmenter, &lemmas);

    let split = splitter.split("Krankenhaus").expect("should decompose");
    assert_eq!(split.parts, vec!["krank", "Haus"]);
}

#[test]
fn test_ausbildung_is_not_a_compound() {
    let lexicon = Lexicon::new();
    let segmenter = TableSegmenter(vec![(
        "Ausbildung",
        vec![SplitCandidate::new(0.92, "Aus", "bildung")],
    )]);
    let lemmas = TableLemmas(vec!["aus", "Bildung", "bildung"]);
    let splitter = CompoundSplitter::new(&lexicon, &segmenter, &lemmas);

    assert_eq!(splitter.split("Ausbildung"), None);
}

#[test]
fn test_never_a_single_part_result() {
    let lexicon = Lexicon::new();
    let segmenter = TableSegmenter(vec![(
        "Hausboot",
        vec![SplitCandidate::new(0.9, "Haus", "boot")],
    )]);
    let lemmas = TableLemmas(vec!["Haus", "boot"]);
    let splitter = CompoundSplitter::new(&lexicon, &segmenter, &lemmas);

    for word in ["Hausboot", "Haus", "Unbekanntes"] {
        if let Some(split) = splitter.split(word) {
            assert!(
                split.parts.len() >= 2,
                "{word}: a split must have at least two parts"
            );
        }
    }
}

#[test]
fn test_recursion_is_bounded() {
    // A segmenter that always proposes a split of the left part again: an
    // unbounded decomposer would never return.
    struct EndlessSegmenter;
    impl Segmenter for EndlessSegmenter {
        fn candidates(&self, word: &str) -> Vec<SplitCandidate> {
            let half = word.chars().count() / 2;
            let left: String = word.chars().take(half).collect();
            let right: String = word.chars().skip(half).collect();
            vec![SplitCandidate::new(5.0, left, right)]
        }
    }
    struct AllKnown;
    impl LemmaLookup for AllKnown {
        fn is_known(&self, _word: &str) -> bool {
            true
        }
    }

    let lexicon = Lexicon::new();
    let splitter = CompoundSplitter::new(&lexicon, &EndlessSegmenter, &AllKnown);
    let split = splitter.split("Donaudampfschifffahrtsgesellschaftskapitänswitwe");
    if let Some(split) = split {
        // Depth cap 2 means at most 4 parts from repeated left-recursion.
        assert!(split.parts.len() <= 4, "got {:?}", split.parts);
    }
}

#[test]
fn test_unavailable_oracles_degrade_to_no_split() {
    let lexicon = Lexicon::new();
    let splitter = CompoundSplitter::new(&lexicon, &NullSegmenter, &NullLemmaLookup);

    for word in ["Krankenhaus", "Verhandlungsbasis", "Hausboot"] {
        assert_eq!(splitter.split(word), None);
    }
}

#[test]
fn test_split_is_deterministic_across_calls() {
    let lexicon = Lexicon::new();
    let segmenter = TableSegmenter(vec![(
        "Blumentopf",
        vec![SplitCandidate::new(0.8, "Blumen", "topf")],
    )]);
    let lemmas = TableLemmas(vec!["Blume", "topf"]);
    let splitter = CompoundSplitter::new(&lexicon, &segmenter, &lemmas);

    let first = splitter.split("Blumentopf");
    for _ in 0..20 {
        assert_eq!(splitter.split("Blumentopf"), first);
    }
}
