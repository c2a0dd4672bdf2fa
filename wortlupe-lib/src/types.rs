use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Morphological features of a token (e.g., Tense=Pres, Person=3).
/// BTreeMap for deterministic iteration and serialization.
pub type MorphMap = BTreeMap<String, String>;

/// A single token as produced by the external tagging analyzer. Read-only
/// inside the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Token {
    /// Surface text as it appears in the sentence.
    pub text: String,
    /// Dictionary base form.
    pub lemma: String,
    /// Coarse part of speech (UPOS: "VERB", "NOUN", "ADP", ...).
    pub pos: String,
    /// Fine-grained tag ("PTKVZ", "VVFIN", ...).
    #[serde(default)]
    pub tag: String,
    /// Dependency relation label ("svp", "nk", "sb", ...).
    #[serde(default)]
    pub dep: String,
    /// Index of the head token in the sentence. A root token is its own head.
    pub head: usize,
    /// Morphological features.
    #[serde(default)]
    pub morph: MorphMap,
    /// Character offset of this token in the original text.
    pub offset: usize,
}

/// Lightweight reference to a token: surface text + character offset.
/// Decoupled from the live token so it can be serialized and used for
/// UI highlighting after the sentence is gone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenRef {
    pub text: String,
    pub offset: usize,
}

impl TokenRef {
    pub fn new(text: impl Into<String>, offset: usize) -> Self {
        Self {
            text: text.into(),
            offset,
        }
    }

    /// Build a reference from a token.
    pub fn of(token: &Token) -> Self {
        Self {
            text: token.text.clone(),
            offset: token.offset,
        }
    }
}

/// Coarse classification of the selected word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WordType {
    Simple,
    ConjugatedVerb,
    PluralNoun,
    CompoundNoun,
    CompoundAdjective,
    SeparablePrefix,
    CollocationVerb,
    CollocationPrep,
    FixedExpression,
}

/// One structural match found by a detector. A closed set of variants, one
/// per matcher family; each carries exactly the fields its breakdown
/// template needs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Match {
    /// Fixed multi-token adverbial phrase ("auf jeden Fall").
    AdverbialLocution { locution: String },
    /// Verb+preposition collocation ("von etwas ausgehen").
    Collocation {
        /// Verb lemma, particle-reconstructed where applicable ("ausgehen").
        verb: String,
        /// Canonical pattern ("von etwas ausgehen").
        pattern: String,
    },
    /// Fixed noun + light-verb expression ("in Betracht ziehen").
    NounVerb { expression: String },
    /// Selected word is the conjugated stem of a separable verb.
    SeparableFromStem {
        /// Reconstructed infinitive ("anziehen").
        infinitive: String,
        /// Lemma of the bare verb ("ziehen").
        lemma: String,
    },
    /// Selected word is the detached particle of a separable verb.
    SeparableFromParticle {
        infinitive: String,
        /// Surface form of the inflected verb ("legte").
        verb_text: String,
        verb_morph: MorphMap,
        verb_offset: usize,
    },
    /// Periphrastic tense built with an auxiliary ("Perfekt", "Futur I").
    CompoundTense {
        /// Human-readable tense label.
        tense: String,
        lemma: String,
    },
}

/// Structural-match payload attached to a WordAnalysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LanguageAnalysis {
    /// Canonical form to submit for translation, when it differs from the
    /// selected word's lemma.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub translate: Option<String>,
    /// Canonical lemma override.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lemma: Option<String>,
    /// word_type override.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub word_type: Option<WordType>,
    /// Other tokens participating in the construction. Never contains the
    /// selected token itself.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub related: Vec<TokenRef>,
    /// Display pattern for the UI ("ausgehen + von").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
    /// Hint forwarded to the translation service.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
    /// The structural match; selects the breakdown renderer.
    pub matched: Match,
}

/// Per-request output of the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WordAnalysis {
    pub text: String,
    pub lemma: String,
    pub pos: String,
    #[serde(default)]
    pub morph: MorphMap,
    pub lang: String,
    pub word_type: WordType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub analysis: Option<LanguageAnalysis>,
}

/// Result of decomposing one word into meaningful sub-words.
/// Always holds at least two parts, leftmost first; a word that does not
/// decompose is represented by the absence of this value, never by a
/// single-element list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompoundSplit {
    pub parts: Vec<String>,
}
