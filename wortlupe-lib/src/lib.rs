pub mod adverbials;
pub mod analysis;
pub mod breakdown;
pub mod collocations;
pub mod compound;
pub mod data;
pub mod lexicon;
pub mod morphology;
pub mod noun_verb;
pub mod oracle;
pub mod sentence;
pub mod types;
pub mod verbs;

pub use analysis::Engine;
pub use compound::{CompoundSplitter, SplitConfig};
pub use lexicon::Lexicon;
pub use oracle::{LemmaLookup, NullLemmaLookup, NullSegmenter, Segmenter, SplitCandidate};
pub use sentence::{Sentence, SentenceError};
pub use types::{
    CompoundSplit, LanguageAnalysis, Match, Token, TokenRef, WordAnalysis, WordType,
};
