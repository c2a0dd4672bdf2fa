// Static German lookup tables. Loaded into the Lexicon once at start-up;
// no runtime write path.

/// Separable verb prefixes. Used to reconstruct infinitives and as the
/// tagger-error fallback when the particle tag is missing.
pub const SEPARABLE_PREFIXES: &[&str] = &[
    "ab", "an", "auf", "aus", "bei", "ein", "fest", "her", "hin", "los", "mit", "nach", "vor",
    "weg", "zu", "zurück", "zusammen", "weiter", "da", "dar", "empor", "fort", "heim", "nieder",
    "um", "vorbei",
];

/// Inseparable verb prefixes. Together with the separable set these flag
/// derived words that must not be reported as compounds.
pub const INSEPARABLE_PREFIXES: &[&str] = &["be", "ent", "emp", "er", "ge", "miss", "ver", "zer"];

/// Derivational suffixes: a word ending in one of these is derived from a
/// verb or adjective, not compounded.
pub const DERIVATIONAL_SUFFIXES: &[&str] =
    &["ung", "heit", "keit", "schaft", "nis", "tum", "ling", "atz"];

/// Verb stems that form nouns directly with a prefix, no suffix
/// (aus+fallen -> Ausfall, ein+greifen -> Eingriff).
pub const VERB_STEM_NOUNS: &[&str] = &[
    "fall", "gang", "griff", "zug", "schlag", "bruch", "schnitt", "schluss", "tritt", "wurf",
    "ruf", "lauf", "stoß", "druck", "blick", "sprung",
];

/// Linking elements (Fugenelemente): ordered (suffix, replacement) cleaning
/// rules for the left part of a compound. The bare -en/-n strips at the end
/// are aggressive and only applied when the result is a known lemma
/// (Kranken -> Krank).
pub const LINKING_PATTERNS: &[(&str, &str)] = &[
    ("ungs", "ung"),       // Verhandlungs -> Verhandlung
    ("ions", "ion"),       // Kommunikations -> Kommunikation
    ("täts", "tät"),       // Universitäts -> Universität
    ("heits", "heit"),     // Freiheits -> Freiheit
    ("keits", "keit"),     // Möglichkeits -> Möglichkeit
    ("schafts", "schaft"), // Gesellschafts -> Gesellschaft
    ("eits", "eit"),       // Arbeits -> Arbeit
    ("ens", "en"),         // Studentens -> Studenten
    ("ns", "n"),           // Herzens -> Herzen
    ("es", ""),            // Kindes -> Kind
    ("en", ""),            // Kranken -> Krank (lemma-validated only)
    ("n", ""),             // Blumen -> Blume (when the -en strip fails validation)
];

/// Participial suffixes: right parts ending in these mark present-participle
/// compounds (herzzerreißend).
pub const PARTICIPIAL_SUFFIXES: &[&str] = &["end", "ende", "enden", "ender", "endes", "endem"];

/// Closed-class function words. A segmentation candidate with such a part is
/// never a meaningful compound split, whatever its score.
pub const FUNCTION_WORDS: &[&str] = &[
    "der", "die", "das", "den", "dem", "des", "ein", "eine", "einen", "einem", "einer", "eines",
    "und", "oder", "aber", "doch", "denn", "wenn", "dass", "sich", "ich", "du", "er", "sie", "es",
    "wir", "ihr", "mich", "dich", "uns", "euch", "mir", "dir", "ihm", "ihn", "ihnen", "was",
    "wer", "wie", "wo", "nicht", "auch", "nur", "noch", "schon", "sehr", "dann", "also",
];

/// Auxiliary lemmas that head periphrastic tenses.
pub const AUXILIARIES: &[&str] = &["haben", "sein", "werden"];

/// (auxiliary lemma, auxiliary Tense or Mood, main VerbForm) -> tense label.
pub const COMPOUND_TENSES: &[((&str, &str, &str), &str)] = &[
    (("haben", "Pres", "Part"), "Perfekt (present perfect)"),
    (("sein", "Pres", "Part"), "Perfekt (present perfect)"),
    (("haben", "Past", "Part"), "Plusquamperfekt (past perfect)"),
    (("sein", "Past", "Part"), "Plusquamperfekt (past perfect)"),
    (("werden", "Pres", "Inf"), "Futur I (future)"),
    (("werden", "Pres", "Part"), "Futur II (future perfect)"),
    (("werden", "Sub", "Inf"), "Konjunktiv II (subjunctive)"),
];

/// (verb lemma, preposition) -> canonical collocation pattern.
/// Verb lemmas are particle-reconstructed infinitives where applicable.
pub const VERB_PREP_COLLOCATIONS: &[((&str, &str), &str)] = &[
    (("abhängen", "von"), "von etwas abhängen"),
    (("achten", "auf"), "auf etwas achten"),
    (("anfangen", "mit"), "mit etwas anfangen"),
    (("antworten", "auf"), "auf etwas antworten"),
    (("arbeiten", "an"), "an etwas arbeiten"),
    (("aufhören", "mit"), "mit etwas aufhören"),
    (("aufpassen", "auf"), "auf jemanden aufpassen"),
    (("ausgehen", "von"), "von etwas ausgehen"),
    (("beginnen", "mit"), "mit etwas beginnen"),
    (("berichten", "über"), "über etwas berichten"),
    (("beschäftigen", "mit"), "sich mit etwas beschäftigen"),
    (("beschweren", "über"), "sich über etwas beschweren"),
    (("bestehen", "auf"), "auf etwas bestehen"),
    (("bestehen", "aus"), "aus etwas bestehen"),
    (("bewerben", "um"), "sich um etwas bewerben"),
    (("bitten", "um"), "um etwas bitten"),
    (("danken", "für"), "für etwas danken"),
    (("denken", "an"), "an etwas denken"),
    (("diskutieren", "über"), "über etwas diskutieren"),
    (("einladen", "zu"), "zu etwas einladen"),
    (("entscheiden", "für"), "sich für etwas entscheiden"),
    (("erinnern", "an"), "sich an etwas erinnern"),
    (("erzählen", "von"), "von etwas erzählen"),
    (("fragen", "nach"), "nach etwas fragen"),
    (("freuen", "auf"), "sich auf etwas freuen"),
    (("freuen", "über"), "sich über etwas freuen"),
    (("gehören", "zu"), "zu etwas gehören"),
    (("glauben", "an"), "an etwas glauben"),
    (("halten", "von"), "von etwas halten"),
    (("handeln", "um"), "sich um etwas handeln"),
    (("hoffen", "auf"), "auf etwas hoffen"),
    (("interessieren", "für"), "sich für etwas interessieren"),
    (("kämpfen", "für"), "für etwas kämpfen"),
    (("kümmern", "um"), "sich um etwas kümmern"),
    (("lachen", "über"), "über etwas lachen"),
    (("leiden", "an"), "an etwas leiden"),
    (("leiden", "unter"), "unter etwas leiden"),
    (("nachdenken", "über"), "über etwas nachdenken"),
    (("passen", "zu"), "zu etwas passen"),
    (("reagieren", "auf"), "auf etwas reagieren"),
    (("rechnen", "mit"), "mit etwas rechnen"),
    (("riechen", "nach"), "nach etwas riechen"),
    (("sorgen", "für"), "für etwas sorgen"),
    (("sprechen", "über"), "über etwas sprechen"),
    (("sterben", "an"), "an etwas sterben"),
    (("suchen", "nach"), "nach etwas suchen"),
    (("teilnehmen", "an"), "an etwas teilnehmen"),
    (("telefonieren", "mit"), "mit jemandem telefonieren"),
    (("träumen", "von"), "von etwas träumen"),
    (("trennen", "von"), "sich von etwas trennen"),
    (("überzeugen", "von"), "von etwas überzeugen"),
    (("verlassen", "auf"), "sich auf etwas verlassen"),
    (("vergleichen", "mit"), "mit etwas vergleichen"),
    (("verzichten", "auf"), "auf etwas verzichten"),
    (("warten", "auf"), "auf etwas warten"),
    (("zweifeln", "an"), "an etwas zweifeln"),
    (("ärgern", "über"), "sich über etwas ärgern"),
];

/// Fixed adverbial locutions, one token sequence each.
pub const ADVERBIAL_LOCUTIONS: &[&[&str]] = &[
    &["ab", "und", "zu"],
    &["auf", "einmal"],
    &["auf", "jeden", "Fall"],
    &["auf", "keinen", "Fall"],
    &["hin", "und", "wieder"],
    &["im", "Allgemeinen"],
    &["im", "Großen", "und", "Ganzen"],
    &["im", "Laufe", "der", "Zeit"],
    &["in", "der", "Regel"],
    &["mit", "der", "Zeit"],
    &["nach", "und", "nach"],
    &["nach", "wie", "vor"],
    &["ohne", "Zweifel"],
    &["unter", "anderem"],
    &["unter", "vier", "Augen"],
    &["von", "Zeit", "zu", "Zeit"],
    &["vor", "allem"],
    &["vor", "kurzem"],
    &["zum", "Beispiel"],
    &["zum", "Glück"],
    &["zum", "Teil"],
    &["zur", "Zeit"],
];

/// (noun, verb lemma) -> canonical noun-verb expression. Entries whose
/// canonical form starts with "sich " require the reflexive particle in the
/// sentence.
pub const NOUN_VERB_EXPRESSIONS: &[((&str, &str), &str)] = &[
    (("Abschied", "nehmen"), "Abschied nehmen"),
    (("Absicht", "haben"), "die Absicht haben"),
    (("Abstand", "nehmen"), "Abstand nehmen"),
    (("Angebot", "machen"), "ein Angebot machen"),
    (("Angst", "haben"), "Angst haben"),
    (("Angst", "machen"), "Angst machen"),
    (("Anspruch", "erheben"), "Anspruch erheben"),
    (("Anteil", "nehmen"), "Anteil nehmen"),
    (("Antrag", "stellen"), "einen Antrag stellen"),
    (("Antwort", "geben"), "Antwort geben"),
    (("Arbeit", "leisten"), "Arbeit leisten"),
    (("Aufsehen", "erregen"), "Aufsehen erregen"),
    (("Auskunft", "geben"), "Auskunft geben"),
    (("Ausnahme", "machen"), "eine Ausnahme machen"),
    (("Beachtung", "finden"), "Beachtung finden"),
    (("Bedeutung", "haben"), "Bedeutung haben"),
    (("Beitrag", "leisten"), "einen Beitrag leisten"),
    (("Bescheid", "geben"), "Bescheid geben"),
    (("Bescheid", "sagen"), "Bescheid sagen"),
    (("Bescheid", "wissen"), "Bescheid wissen"),
    (("Beschluss", "fassen"), "einen Beschluss fassen"),
    (("Besuch", "machen"), "einen Besuch machen"),
    (("Bezug", "nehmen"), "Bezug nehmen"),
    (("Eindruck", "machen"), "Eindruck machen"),
    (("Einfluss", "nehmen"), "Einfluss nehmen"),
    (("Ende", "finden"), "ein Ende finden"),
    (("Ende", "machen"), "ein Ende machen"),
    (("Entdeckung", "machen"), "eine Entdeckung machen"),
    (("Entscheidung", "treffen"), "eine Entscheidung treffen"),
    (("Erfahrung", "machen"), "eine Erfahrung machen"),
    (("Erfolg", "haben"), "Erfolg haben"),
    (("Fehler", "machen"), "einen Fehler machen"),
    (("Feierabend", "machen"), "Feierabend machen"),
    (("Flucht", "ergreifen"), "die Flucht ergreifen"),
    (("Folge", "leisten"), "Folge leisten"),
    (("Frage", "stellen"), "eine Frage stellen"),
    (("Freude", "machen"), "Freude machen"),
    (("Freundschaft", "schließen"), "Freundschaft schließen"),
    (("Gebrauch", "machen"), "Gebrauch machen"),
    (("Gedanken", "machen"), "sich Gedanken machen"),
    (("Geduld", "haben"), "Geduld haben"),
    (("Gefahr", "laufen"), "Gefahr laufen"),
    (("Gefallen", "finden"), "Gefallen finden"),
    (("Gehör", "verschaffen"), "sich Gehör verschaffen"),
    (("Gelegenheit", "ergreifen"), "die Gelegenheit ergreifen"),
    (("Gespräch", "führen"), "ein Gespräch führen"),
    (("Glück", "haben"), "Glück haben"),
    (("Hilfe", "leisten"), "Hilfe leisten"),
    (("Hoffnung", "haben"), "Hoffnung haben"),
    (("Hunger", "haben"), "Hunger haben"),
    (("Interesse", "haben"), "Interesse haben"),
    (("Interesse", "wecken"), "Interesse wecken"),
    (("Kenntnis", "nehmen"), "Kenntnis nehmen"),
    (("Kritik", "üben"), "Kritik üben"),
    (("Lust", "haben"), "Lust haben"),
    (("Maßnahmen", "ergreifen"), "Maßnahmen ergreifen"),
    (("Meinung", "bilden"), "sich eine Meinung bilden"),
    (("Mut", "fassen"), "Mut fassen"),
    (("Mut", "machen"), "Mut machen"),
    (("Mühe", "geben"), "sich Mühe geben"),
    (("Notiz", "nehmen"), "Notiz nehmen"),
    (("Pause", "machen"), "Pause machen"),
    (("Platz", "nehmen"), "Platz nehmen"),
    (("Prüfung", "ablegen"), "eine Prüfung ablegen"),
    (("Prüfung", "bestehen"), "eine Prüfung bestehen"),
    (("Rache", "nehmen"), "Rache nehmen"),
    (("Rat", "geben"), "Rat geben"),
    (("Recht", "haben"), "Recht haben"),
    (("Rede", "halten"), "eine Rede halten"),
    (("Reise", "machen"), "eine Reise machen"),
    (("Rolle", "spielen"), "eine Rolle spielen"),
    (("Rücksicht", "nehmen"), "Rücksicht nehmen"),
    (("Ruhe", "bewahren"), "Ruhe bewahren"),
    (("Schluss", "machen"), "Schluss machen"),
    (("Sorgen", "machen"), "sich Sorgen machen"),
    (("Spaß", "machen"), "Spaß machen"),
    (("Sport", "treiben"), "Sport treiben"),
    (("Stellung", "nehmen"), "Stellung nehmen"),
    (("Urlaub", "machen"), "Urlaub machen"),
    (("Urteil", "fällen"), "ein Urteil fällen"),
    (("Verantwortung", "tragen"), "Verantwortung tragen"),
    (("Verantwortung", "übernehmen"), "Verantwortung übernehmen"),
    (("Vorschlag", "machen"), "einen Vorschlag machen"),
    (("Vortrag", "halten"), "einen Vortrag halten"),
    (("Wahl", "treffen"), "eine Wahl treffen"),
    (("Wert", "legen"), "Wert legen"),
    (("Widerstand", "leisten"), "Widerstand leisten"),
    (("Wort", "ergreifen"), "das Wort ergreifen"),
    (("Wort", "halten"), "sein Wort halten"),
    (("Zeit", "haben"), "Zeit haben"),
    (("Zweifel", "haben"), "Zweifel haben"),
    (("Überblick", "verschaffen"), "sich einen Überblick verschaffen"),
];

/// (preposition, noun, verb lemma) -> canonical expression, for noun-verb
/// expressions with a fixed preposition.
pub const NOUN_VERB_PREP_EXPRESSIONS: &[((&str, &str, &str), &str)] = &[
    (("an", "Arbeit", "gehen"), "an die Arbeit gehen"),
    (("auf", "Ablehnung", "stoßen"), "auf Ablehnung stoßen"),
    (("auf", "Kritik", "stoßen"), "auf Kritik stoßen"),
    (("auf", "Nerven", "gehen"), "auf die Nerven gehen"),
    (("auf", "Probe", "stellen"), "auf die Probe stellen"),
    (("außer", "Acht", "lassen"), "außer Acht lassen"),
    (("außer", "Frage", "stehen"), "außer Frage stehen"),
    (("außer", "Kraft", "setzen"), "außer Kraft setzen"),
    (("in", "Angriff", "nehmen"), "in Angriff nehmen"),
    (("in", "Anspruch", "nehmen"), "in Anspruch nehmen"),
    (("in", "Aussicht", "stellen"), "in Aussicht stellen"),
    (("in", "Betracht", "ziehen"), "in Betracht ziehen"),
    (("in", "Betrieb", "nehmen"), "in Betrieb nehmen"),
    (("in", "Brand", "geraten"), "in Brand geraten"),
    (("in", "Brand", "setzen"), "in Brand setzen"),
    (("in", "Empfang", "nehmen"), "in Empfang nehmen"),
    (("in", "Erfahrung", "bringen"), "in Erfahrung bringen"),
    (("in", "Erfüllung", "gehen"), "in Erfüllung gehen"),
    (("in", "Erwägung", "ziehen"), "in Erwägung ziehen"),
    (("in", "Frage", "kommen"), "in Frage kommen"),
    (("in", "Frage", "stellen"), "in Frage stellen"),
    (("in", "Gang", "bringen"), "in Gang bringen"),
    (("in", "Gang", "kommen"), "in Gang kommen"),
    (("in", "Gefahr", "geraten"), "in Gefahr geraten"),
    (("in", "Kauf", "nehmen"), "in Kauf nehmen"),
    (("in", "Kenntnis", "setzen"), "in Kenntnis setzen"),
    (("in", "Kraft", "treten"), "in Kraft treten"),
    (("in", "Ordnung", "bringen"), "in Ordnung bringen"),
    (("in", "Ruhe", "lassen"), "in Ruhe lassen"),
    (("in", "Schutz", "nehmen"), "in Schutz nehmen"),
    (("in", "Verbindung", "setzen"), "in Verbindung setzen"),
    (("in", "Verbindung", "stehen"), "in Verbindung stehen"),
    (("in", "Verlegenheit", "bringen"), "in Verlegenheit bringen"),
    (("unter", "Beweis", "stellen"), "unter Beweis stellen"),
    (("unter", "Druck", "setzen"), "unter Druck setzen"),
    (("unter", "Druck", "stehen"), "unter Druck stehen"),
    (("unter", "Kontrolle", "bringen"), "unter Kontrolle bringen"),
    (("unter", "Verdacht", "stehen"), "unter Verdacht stehen"),
    (("zu", "Ausdruck", "bringen"), "zum Ausdruck bringen"),
    (("zu", "Ausdruck", "kommen"), "zum Ausdruck kommen"),
    (("zu", "Ende", "bringen"), "zu Ende bringen"),
    (("zu", "Ergebnis", "kommen"), "zum Ergebnis kommen"),
    (("zu", "Folge", "haben"), "zur Folge haben"),
    (("zu", "Kenntnis", "nehmen"), "zur Kenntnis nehmen"),
    (("zu", "Lachen", "bringen"), "zum Lachen bringen"),
    (("zu", "Last", "fallen"), "zur Last fallen"),
    (("zu", "Rechenschaft", "ziehen"), "zur Rechenschaft ziehen"),
    (("zu", "Sprache", "bringen"), "zur Sprache bringen"),
    (("zu", "Sprache", "kommen"), "zur Sprache kommen"),
    (("zu", "Verfügung", "stehen"), "zur Verfügung stehen"),
    (("zu", "Verfügung", "stellen"), "zur Verfügung stellen"),
    (("zu", "Vorschein", "kommen"), "zum Vorschein kommen"),
    (("zu", "Wort", "kommen"), "zu Wort kommen"),
];

/// Reflexive (preposition, noun, verb lemma) expressions: the canonical form
/// includes a fixed "sich" which must be present in the sentence.
pub const NOUN_VERB_PREP_REFLEXIVE_EXPRESSIONS: &[((&str, &str, &str), &str)] = &[
    (("in", "Acht", "nehmen"), "sich in Acht nehmen"),
    (("in", "Erinnerung", "rufen"), "sich etwas in Erinnerung rufen"),
    (("in", "Sicherheit", "wiegen"), "sich in Sicherheit wiegen"),
    (("mit", "Gedanken", "tragen"), "sich mit dem Gedanken tragen"),
    (("um", "Erlaubnis", "bitten"), "um Erlaubnis bitten"),
    (("zu", "Ruhe", "setzen"), "sich zur Ruhe setzen"),
    (("zu", "Wort", "melden"), "sich zu Wort melden"),
];

/// The German reflexive particle.
pub const REFLEXIVE_PARTICLE: &str = "sich";
