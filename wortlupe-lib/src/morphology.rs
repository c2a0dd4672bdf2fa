// Rendering of morphological features as a readable phrase.

use crate::types::MorphMap;

// Universal Dependencies feature labels.
const MORPH_LABELS: &[(&str, &str)] = &[
    // Tense
    ("Tense=Past", "past tense"),
    ("Tense=Pres", "present tense"),
    ("Tense=Fut", "future tense"),
    ("Tense=Imp", "imperfect"),
    ("Tense=Pqp", "pluperfect"),
    // Person
    ("Person=1", "1st person"),
    ("Person=2", "2nd person"),
    ("Person=3", "3rd person"),
    // Number
    ("Number=Sing", "singular"),
    ("Number=Plur", "plural"),
    // Mood
    ("Mood=Ind", "indicative"),
    ("Mood=Sub", "subjunctive"),
    ("Mood=Imp", "imperative"),
    ("Mood=Cnd", "conditional"),
    // VerbForm
    ("VerbForm=Fin", "finite"),
    ("VerbForm=Inf", "infinitive"),
    ("VerbForm=Part", "participle"),
    ("VerbForm=Ger", "gerund"),
    // Aspect
    ("Aspect=Perf", "perfective"),
    ("Aspect=Imp", "imperfective"),
    // Case
    ("Case=Nom", "nominative"),
    ("Case=Acc", "accusative"),
    ("Case=Dat", "dative"),
    ("Case=Gen", "genitive"),
    // Gender
    ("Gender=Masc", "masculine"),
    ("Gender=Fem", "feminine"),
    ("Gender=Neut", "neuter"),
    // Degree
    ("Degree=Pos", "positive"),
    ("Degree=Cmp", "comparative"),
    ("Degree=Sup", "superlative"),
];

// Fixed rendering order: "present tense, 3rd person, singular", never the
// map's alphabetical key order.
const FEATURE_ORDER: &[&str] = &[
    "Tense", "Person", "Number", "Mood", "VerbForm", "Aspect", "Case", "Gender", "Degree",
];

// Features used when describing a conjugated verb form.
pub const VERB_FEATURES: &[&str] = &["Tense", "Person", "Number", "Mood"];

fn label_for(key: &str, value: &str) -> Option<&'static str> {
    MORPH_LABELS
        .iter()
        .find(|(pair, _)| {
            pair.split_once('=')
                .is_some_and(|(k, v)| k == key && v == value)
        })
        .map(|(_, label)| *label)
}

/// Render morphological features as a readable phrase, e.g.
/// "present tense, 3rd person, singular". Unrecognized feature values are
/// skipped; an empty result means nothing was renderable.
///
/// `include` restricts which features are rendered; `None` renders all
/// recognized features.
pub fn describe_morphology(morph: &MorphMap, include: Option<&[&str]>) -> String {
    let order: Vec<&str> = match include {
        Some(keys) => keys.to_vec(),
        None => FEATURE_ORDER.to_vec(),
    };

    let mut parts = Vec::new();
    for key in order {
        if let Some(value) = morph.get(key) {
            if let Some(label) = label_for(key, value) {
                parts.push(label);
            }
        }
    }
    parts.join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn morph(pairs: &[(&str, &str)]) -> MorphMap {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_verb_features_in_fixed_order() {
        // BTreeMap iterates Mood < Number < Person < Tense; output must not.
        let m = morph(&[
            ("Tense", "Pres"),
            ("Person", "3"),
            ("Number", "Sing"),
            ("Mood", "Ind"),
        ]);
        assert_eq!(
            describe_morphology(&m, Some(VERB_FEATURES)),
            "present tense, 3rd person, singular, indicative"
        );
    }

    #[test]
    fn test_include_filters_features() {
        let m = morph(&[("Tense", "Pres"), ("Case", "Dat")]);
        assert_eq!(
            describe_morphology(&m, Some(&["Tense"])),
            "present tense"
        );
    }

    #[test]
    fn test_unknown_values_are_skipped() {
        let m = morph(&[("Tense", "Pres"), ("Foo", "Bar")]);
        assert_eq!(describe_morphology(&m, None), "present tense");
    }

    #[test]
    fn test_empty_morph_renders_empty() {
        assert_eq!(describe_morphology(&MorphMap::new(), None), "");
    }
}
