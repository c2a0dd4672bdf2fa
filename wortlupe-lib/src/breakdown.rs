// One-line breakdown explanations, e.g.
// "anziehen (to put on) → ziehe + an (present tense, 1st person, singular)".
//
// Rendering is a pure function of the analysis and a translated base form;
// detection never depends on it.

use crate::morphology::{describe_morphology, VERB_FEATURES};
use crate::types::{LanguageAnalysis, Match, WordAnalysis, WordType};

/// Render the breakdown line for an analyzed word. `base_translation` is the
/// gloss of the canonical form (infinitive, expression, or lemma). `None`
/// means the word needs no explanation.
pub fn render(analysis: &WordAnalysis, base_translation: &str) -> Option<String> {
    match &analysis.analysis {
        Some(lang) => render_match(analysis, lang, base_translation),
        None => render_generic(analysis, base_translation),
    }
}

fn render_match(analysis: &WordAnalysis, lang: &LanguageAnalysis, base: &str) -> Option<String> {
    match &lang.matched {
        Match::AdverbialLocution { locution } => Some(format!("{locution} ({base})")),

        Match::NounVerb { expression } => Some(format!("{expression} ({base})")),

        Match::Collocation { pattern, .. } => {
            let mut parts = vec![analysis.text.as_str()];
            parts.extend(lang.related.iter().map(|r| r.text.as_str()));
            let conjugated = parts.join(" + ");

            // Morphology belongs to the verb form; a selected preposition
            // carries none worth showing.
            let morph_desc = if analysis.word_type == WordType::CollocationVerb {
                describe_morphology(&analysis.morph, Some(VERB_FEATURES))
            } else {
                String::new()
            };
            Some(with_morph(
                &format!("{pattern} ({base}) → {conjugated}"),
                &morph_desc,
            ))
        }

        Match::SeparableFromStem { infinitive, lemma } => {
            let prefix = infinitive.strip_suffix(lemma.as_str()).unwrap_or("");
            let conjugated = format!("{} + {prefix}", analysis.text);
            let morph_desc = describe_morphology(&analysis.morph, Some(VERB_FEATURES));
            Some(with_morph(
                &format!("{infinitive} ({base}) → {conjugated}"),
                &morph_desc,
            ))
        }

        Match::SeparableFromParticle {
            infinitive,
            verb_text,
            verb_morph,
            ..
        } => {
            let conjugated = format!("{verb_text} + {}", analysis.text);
            let morph_desc = describe_morphology(verb_morph, Some(VERB_FEATURES));
            Some(with_morph(
                &format!("{infinitive} ({base}) → {conjugated}"),
                &morph_desc,
            ))
        }

        Match::CompoundTense { tense, lemma } => {
            Some(format!("{lemma} ({base}) → {} ({tense})", analysis.text))
        }
    }
}

/// Generic templates used only when no structural match exists.
fn render_generic(analysis: &WordAnalysis, base: &str) -> Option<String> {
    match analysis.word_type {
        WordType::ConjugatedVerb => {
            let morph_desc = describe_morphology(&analysis.morph, Some(VERB_FEATURES));
            if morph_desc.is_empty() {
                return None;
            }
            Some(format!(
                "{} ({base}) → {} ({morph_desc})",
                analysis.lemma, analysis.text
            ))
        }
        WordType::PluralNoun => {
            if analysis.lemma == analysis.text {
                return None;
            }
            Some(format!(
                "{} ({base}) → {} (plural)",
                analysis.lemma, analysis.text
            ))
        }
        _ => None,
    }
}

/// Breakdown for a compound word from (part, base form, translation) tuples:
/// "krank (sick) + Haus (house)".
pub fn render_compound(parts: &[(String, String, String)]) -> Option<String> {
    if parts.len() < 2 {
        return None;
    }
    Some(
        parts
            .iter()
            .map(|(_, base, translation)| format!("{base} ({translation})"))
            .collect::<Vec<_>>()
            .join(" + "),
    )
}

fn with_morph(line: &str, morph_desc: &str) -> String {
    if morph_desc.is_empty() {
        line.to_string()
    } else {
        format!("{line} ({morph_desc})")
    }
}
