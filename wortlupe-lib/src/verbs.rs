// Separable-verb and compound-tense detection over the dependency tree.

use log::debug;

use crate::lexicon::Lexicon;
use crate::sentence::Sentence;
use crate::types::Token;

// Dependency labels that mark a known-prefix token as a real sentence
// constituent (object, subject, adjunct) rather than a detached particle.
const NON_PARTICLE_DEPS: &[&str] = &["nk", "mo", "sb", "og", "da", "oa"];
const NON_PARTICLE_POS: &[&str] = &["DET", "PRON", "NOUN"];

// Hop budget when walking from the main verb up to a candidate auxiliary.
const AUXILIARY_HOPS: usize = 2;

/// Separable verb seen from its conjugated stem ("ziehe" in
/// "Ich ziehe mich an").
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeparableStem {
    /// Reconstructed infinitive, particle + verb lemma ("anziehen").
    pub infinitive: String,
    /// Lemma of the bare verb ("ziehen").
    pub lemma: String,
    /// Index of the detached particle token.
    pub particle: usize,
}

/// Separable verb seen from its detached particle ("nieder" in
/// "Er legte das Buch nieder").
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeparableParticle {
    pub infinitive: String,
    /// Index of the inflected verb token.
    pub verb: usize,
}

/// A periphrastic tense ("ist ... ausgegangen" is Perfekt).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TenseMatch {
    /// Human-readable tense label.
    pub tense: &'static str,
    /// Index of the auxiliary token.
    pub auxiliary: usize,
}

pub struct VerbDetector<'a> {
    lexicon: &'a Lexicon,
}

impl<'a> VerbDetector<'a> {
    pub fn new(lexicon: &'a Lexicon) -> Self {
        Self { lexicon }
    }

    /// Whether a token is a separable-verb particle: either tagged as one, or
    /// (tagger-error fallback) a known prefix whose POS and dependency label
    /// rule out it being an object, subject, or adjunct.
    pub fn is_particle(&self, token: &Token) -> bool {
        if token.tag == "PTKVZ" || token.dep == "svp" {
            return true;
        }
        self.lexicon.is_separable_prefix(&token.text)
            && !NON_PARTICLE_POS.contains(&token.pos.as_str())
            && !NON_PARTICLE_DEPS.contains(&token.dep.as_str())
    }

    /// Detect a separable construction from the conjugated stem: scan the
    /// target's dependents for a particle and reconstruct the infinitive.
    pub fn separable_from_stem(&self, sentence: &Sentence, target: usize) -> Option<SeparableStem> {
        let verb = sentence.get(target)?;
        for i in sentence.dependents_of(target) {
            let token = &sentence.tokens()[i];
            if self.is_particle(token) {
                let infinitive = format!("{}{}", token.text.to_lowercase(), verb.lemma);
                debug!("separable verb from stem {}: {infinitive}", verb.text);
                return Some(SeparableStem {
                    infinitive,
                    lemma: verb.lemma.clone(),
                    particle: i,
                });
            }
        }
        None
    }

    /// Detect a separable construction from the particle: the particle's head
    /// is the verb stem. The head may be mis-tagged (imperatives come back as
    /// NOUN), so NOUN and AUX heads are accepted alongside VERB.
    pub fn separable_from_particle(
        &self,
        sentence: &Sentence,
        target: usize,
    ) -> Option<SeparableParticle> {
        let particle = sentence.get(target)?;
        if !self.is_particle(particle) {
            return None;
        }

        let verb_idx = sentence.head_of(target);
        if verb_idx == target {
            return None;
        }
        let verb = &sentence.tokens()[verb_idx];
        if !matches!(verb.pos.as_str(), "VERB" | "NOUN" | "AUX") {
            return None;
        }

        let infinitive = format!("{}{}", particle.text.to_lowercase(), verb.lemma);
        debug!("separable verb from particle {}: {infinitive}", particle.text);
        Some(SeparableParticle {
            infinitive,
            verb: verb_idx,
        })
    }

    /// Detect a compound tense on the target verb: find the syntactically
    /// closest auxiliary and look up (auxiliary lemma, auxiliary tense/mood,
    /// target verb form). Mere co-occurrence with an auxiliary elsewhere in
    /// the sentence never counts.
    pub fn compound_tense(&self, sentence: &Sentence, target: usize) -> Option<TenseMatch> {
        let main = sentence.get(target)?;

        let aux_idx = (0..sentence.len()).find(|&i| {
            i != target
                && self.lexicon.is_auxiliary(&sentence.tokens()[i].lemma)
                && sentence.syntactically_related(i, target, AUXILIARY_HOPS)
        })?;
        let aux = &sentence.tokens()[aux_idx];

        let aux_feature = aux
            .morph
            .get("Tense")
            .or_else(|| aux.morph.get("Mood"))
            .map(String::as_str)
            .unwrap_or("");
        let main_form = main.morph.get("VerbForm").map(String::as_str).unwrap_or("");

        let tense = self
            .lexicon
            .compound_tense(&aux.lemma, aux_feature, main_form)?;
        debug!("compound tense for {}: {tense}", main.text);
        Some(TenseMatch {
            tense,
            auxiliary: aux_idx,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::MorphMap;

    fn tok(text: &str, lemma: &str, pos: &str, tag: &str, dep: &str, head: usize) -> Token {
        Token {
            text: text.into(),
            lemma: lemma.into(),
            pos: pos.into(),
            tag: tag.into(),
            dep: dep.into(),
            head,
            morph: MorphMap::new(),
            offset: 0,
        }
    }

    fn with_morph(mut token: Token, pairs: &[(&str, &str)]) -> Token {
        token.morph = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        token
    }

    // "Ich ziehe mich heute Abend an."
    fn anziehen_sentence() -> Sentence {
        Sentence::new(vec![
            tok("Ich", "ich", "PRON", "PPER", "sb", 1),
            tok("ziehe", "ziehen", "VERB", "VVFIN", "ROOT", 1),
            tok("mich", "ich", "PRON", "PRF", "oa", 1),
            tok("heute", "heute", "ADV", "ADV", "mo", 1),
            tok("Abend", "abend", "NOUN", "NN", "mo", 1),
            tok("an", "an", "ADP", "PTKVZ", "svp", 1),
            tok(".", ".", "PUNCT", "$.", "punct", 1),
        ])
    }

    #[test]
    fn test_separable_from_stem() {
        let s = anziehen_sentence();
        let lex = Lexicon::new();
        let found = VerbDetector::new(&lex).separable_from_stem(&s, 1);
        assert_eq!(
            found,
            Some(SeparableStem {
                infinitive: "anziehen".into(),
                lemma: "ziehen".into(),
                particle: 5,
            })
        );
    }

    #[test]
    fn test_stem_without_particle_is_none() {
        // "Ich ziehe den Wagen." - plain transitive use.
        let s = Sentence::new(vec![
            tok("Ich", "ich", "PRON", "PPER", "sb", 1),
            tok("ziehe", "ziehen", "VERB", "VVFIN", "ROOT", 1),
            tok("den", "der", "DET", "ART", "nk", 3),
            tok("Wagen", "wagen", "NOUN", "NN", "oa", 1),
        ]);
        let lex = Lexicon::new();
        assert_eq!(VerbDetector::new(&lex).separable_from_stem(&s, 1), None);
    }

    #[test]
    fn test_prefix_fallback_when_tagger_misses_particle() {
        // "an" untagged (no PTKVZ, no svp) but a known prefix with a
        // non-argument dependency.
        let s = Sentence::new(vec![
            tok("Ich", "ich", "PRON", "PPER", "sb", 1),
            tok("ziehe", "ziehen", "VERB", "VVFIN", "ROOT", 1),
            tok("an", "an", "ADP", "APPR", "op", 1),
        ]);
        let lex = Lexicon::new();
        let found = VerbDetector::new(&lex).separable_from_stem(&s, 1);
        assert_eq!(
            found.map(|f| f.infinitive),
            Some("anziehen".to_string())
        );
    }

    #[test]
    fn test_prefix_as_object_noun_not_a_particle() {
        // "um" heading a noun phrase: dep "mo" rules it out.
        let s = Sentence::new(vec![
            tok("Wir", "wir", "PRON", "PPER", "sb", 1),
            tok("gehen", "gehen", "VERB", "VVFIN", "ROOT", 1),
            tok("um", "um", "ADP", "APPR", "mo", 1),
        ]);
        let lex = Lexicon::new();
        assert_eq!(VerbDetector::new(&lex).separable_from_stem(&s, 1), None);
    }

    #[test]
    fn test_separable_from_particle() {
        // "Er legte das Buch nieder."
        let s = Sentence::new(vec![
            tok("Er", "er", "PRON", "PPER", "sb", 1),
            tok("legte", "legen", "VERB", "VVFIN", "ROOT", 1),
            tok("das", "der", "DET", "ART", "nk", 3),
            tok("Buch", "buch", "NOUN", "NN", "oa", 1),
            tok("nieder", "nieder", "ADP", "PTKVZ", "svp", 1),
        ]);
        let lex = Lexicon::new();
        let found = VerbDetector::new(&lex).separable_from_particle(&s, 4);
        assert_eq!(
            found,
            Some(SeparableParticle {
                infinitive: "niederlegen".into(),
                verb: 1,
            })
        );
    }

    #[test]
    fn test_particle_with_non_verb_head_is_none() {
        let s = Sentence::new(vec![
            tok("kurz", "kurz", "ADJ", "ADJD", "mo", 1),
            tok("an", "an", "ADP", "PTKVZ", "svp", 0),
        ]);
        let lex = Lexicon::new();
        assert_eq!(VerbDetector::new(&lex).separable_from_particle(&s, 1), None);
    }

    #[test]
    fn test_perfekt_detected() {
        // "Er ist gegangen." - aux at 1 heads the participle at 2.
        let s = Sentence::new(vec![
            tok("Er", "er", "PRON", "PPER", "sb", 1),
            with_morph(
                tok("ist", "sein", "AUX", "VAFIN", "ROOT", 1),
                &[("Tense", "Pres"), ("VerbForm", "Fin")],
            ),
            with_morph(
                tok("gegangen", "gehen", "VERB", "VVPP", "oc", 1),
                &[("VerbForm", "Part")],
            ),
        ]);
        let lex = Lexicon::new();
        let found = VerbDetector::new(&lex).compound_tense(&s, 2);
        assert_eq!(
            found,
            Some(TenseMatch {
                tense: "Perfekt (present perfect)",
                auxiliary: 1,
            })
        );
    }

    #[test]
    fn test_konjunktiv_via_mood_fallback() {
        // "Er würde gehen." - würde carries Mood=Sub, no Tense lookup hit
        // unless Mood is consulted.
        let s = Sentence::new(vec![
            tok("Er", "er", "PRON", "PPER", "sb", 1),
            with_morph(
                tok("würde", "werden", "AUX", "VAFIN", "ROOT", 1),
                &[("Mood", "Sub"), ("VerbForm", "Fin")],
            ),
            with_morph(
                tok("gehen", "gehen", "VERB", "VVINF", "oc", 1),
                &[("VerbForm", "Inf")],
            ),
        ]);
        let lex = Lexicon::new();
        let found = VerbDetector::new(&lex).compound_tense(&s, 2);
        assert_eq!(found.map(|f| f.tense), Some("Konjunktiv II (subjunctive)"));
    }

    #[test]
    fn test_unrelated_auxiliary_does_not_count() {
        // Auxiliary in a different clause: no dependency path within budget.
        let s = Sentence::new(vec![
            with_morph(
                tok("ist", "sein", "AUX", "VAFIN", "ROOT", 0),
                &[("Tense", "Pres")],
            ),
            tok("und", "und", "CCONJ", "KON", "cd", 0),
            tok("er", "er", "PRON", "PPER", "sb", 4),
            tok("dann", "dann", "ADV", "ADV", "mo", 4),
            with_morph(
                tok("gegangen", "gehen", "VERB", "VVPP", "cj", 4),
                &[("VerbForm", "Part")],
            ),
        ]);
        let lex = Lexicon::new();
        assert_eq!(VerbDetector::new(&lex).compound_tense(&s, 4), None);
    }

    #[test]
    fn test_no_table_entry_means_no_tense() {
        // "Er hat gehen" (nonsense combination): haben + Inf has no entry.
        let s = Sentence::new(vec![
            with_morph(
                tok("hat", "haben", "AUX", "VAFIN", "ROOT", 0),
                &[("Tense", "Pres")],
            ),
            with_morph(
                tok("gehen", "gehen", "VERB", "VVINF", "oc", 0),
                &[("VerbForm", "Inf")],
            ),
        ]);
        let lex = Lexicon::new();
        assert_eq!(VerbDetector::new(&lex).compound_tense(&s, 1), None);
    }
}
