//! End-to-end editing session
//!
//! Replays a realistic dictionary-building session: grammar setup, word
//! entry, irregulars, reclassification, and teardown, checking consistency
//! at each stage.

use skald_lexicon::{FormPatch, Lexicon, NewWord};
use skald_morph::PipelineKind;

#[test]
fn a_full_editing_session_stays_consistent() {
    let mut lexicon = Lexicon::new();

    // --- Grammar setup ---

    let noun = lexicon.add_part_of_speech("noun").unwrap();
    lexicon.add_declension(noun, "nominative").unwrap();
    lexicon.add_declension(noun, "accusative").unwrap();
    let feminine = lexicon.add_class(noun, "feminine").unwrap();

    let adjective = lexicon.add_part_of_speech("adjective").unwrap();
    lexicon.add_declension(adjective, "neuter").unwrap();
    let adj_class = lexicon.class_by_name(adjective, "adjective").unwrap();

    let fem_acc = lexicon.declension_by_name(feminine, "accusative").unwrap();
    lexicon
        .add_rule(fem_acc, PipelineKind::Form, "a$", ".$", "u")
        .unwrap();
    lexicon
        .add_rule(fem_acc, PipelineKind::Pronunciation, "a$", ".$", "ü")
        .unwrap();
    lexicon
        .add_rule(fem_acc, PipelineKind::RhymeKey, "a$", ".$", "u")
        .unwrap();

    let adj_neuter = lexicon.declension_by_name(adj_class, "neuter").unwrap();
    lexicon
        .add_rule(adj_neuter, PipelineKind::Form, "r$", "r$", "tt")
        .unwrap();

    // --- Word entry ---

    let gleira = lexicon
        .add_word(
            NewWord::new("gleira", "gli:ra", "eira").with_translation("fish"),
            noun,
            feminine,
        )
        .unwrap();
    let threyr = lexicon
        .add_word(
            NewWord::new("þreyr", "thre:ir", "eyr").with_translation("tired"),
            adjective,
            adj_class,
        )
        .unwrap();

    let acc = lexicon.form_by_declension_name(gleira, "accusative").unwrap();
    assert_eq!(lexicon.word_form(acc).unwrap().form(), "gleiru");
    assert_eq!(lexicon.word_form(acc).unwrap().pronunciation(), "gli:rü");

    let neuter_form = lexicon.form_by_declension_name(threyr, "neuter").unwrap();
    assert_eq!(lexicon.word_form(neuter_form).unwrap().form(), "þreytt");

    // --- Irregular override ---

    lexicon
        .override_form(neuter_form, FormPatch::new().with_form("þreitt"))
        .unwrap();
    assert_eq!(lexicon.word_form(neuter_form).unwrap().form(), "þreitt");

    // A later rule edit rederives everything except the override
    lexicon
        .add_rule(adj_neuter, PipelineKind::Pronunciation, "", ":", "ː")
        .unwrap();
    let data = lexicon.word_form(neuter_form).unwrap();
    assert_eq!(data.form(), "þreitt");
    assert_eq!(data.pronunciation(), "threːir");

    // --- Reclassification ---

    let default_class = lexicon.class_by_name(noun, "noun").unwrap();
    lexicon.change_class(gleira, default_class).unwrap();

    // The default class has no accusative rules, so the form reverts
    let acc = lexicon.form_by_declension_name(gleira, "accusative").unwrap();
    assert_eq!(lexicon.word_form(acc).unwrap().form(), "gleira");
    assert!(lexicon.rhyme_group_by_id("eiru").is_none());

    // --- Teardown ---

    lexicon.remove_part_of_speech(adjective).unwrap();
    assert!(lexicon.word(threyr).is_err());
    assert_eq!(lexicon.word_count(), 1);
    assert_eq!(lexicon.part_of_speech_count(), 1);

    lexicon.remove_word(gleira).unwrap();
    assert_eq!(lexicon.word_count(), 0);
    assert_eq!(lexicon.rhyme_group_count(), 0);
}

#[test]
fn rebuilding_a_grammar_after_full_teardown_works() {
    let mut lexicon = Lexicon::new();

    let noun = lexicon.add_part_of_speech("noun").unwrap();
    lexicon.add_declension(noun, "nominative").unwrap();
    let class = lexicon.class_by_name(noun, "noun").unwrap();
    lexicon
        .add_word(NewWord::new("gleira", "gli:ra", "eira"), noun, class)
        .unwrap();

    lexicon.remove_part_of_speech(noun).unwrap();
    assert_eq!(lexicon.part_of_speech_count(), 0);
    assert_eq!(lexicon.word_count(), 0);
    assert_eq!(lexicon.rhyme_group_count(), 0);

    // Names are free for reuse; stale handles stay dead
    let noun2 = lexicon.add_part_of_speech("noun").unwrap();
    assert_ne!(noun, noun2);
    assert!(lexicon.part_of_speech(noun).is_err());
    assert_eq!(lexicon.part_of_speech(noun2).unwrap().name(), "noun");
}

#[test]
fn parallel_classes_keep_independent_rule_sets_through_a_session() {
    let mut lexicon = Lexicon::new();
    let noun = lexicon.add_part_of_speech("noun").unwrap();
    lexicon.add_declension(noun, "plural").unwrap();
    let strong = lexicon.add_class(noun, "strong").unwrap();
    let weak = lexicon.add_class(noun, "weak").unwrap();

    let strong_pl = lexicon.declension_by_name(strong, "plural").unwrap();
    let weak_pl = lexicon.declension_by_name(weak, "plural").unwrap();
    lexicon
        .add_rule(strong_pl, PipelineKind::Form, "ar$", "ar$", "rar")
        .unwrap();
    lexicon
        .add_rule(weak_pl, PipelineKind::Form, "ar$", "ar$", "ur")
        .unwrap();

    let a = lexicon
        .add_word(NewWord::new("hógar", "ho:ghar", "ógar"), noun, strong)
        .unwrap();
    let b = lexicon
        .add_word(NewWord::new("ljógar", "ljo:ghar", "ógar"), noun, weak)
        .unwrap();

    let a_pl = lexicon.form_by_declension_name(a, "plural").unwrap();
    let b_pl = lexicon.form_by_declension_name(b, "plural").unwrap();
    assert_eq!(lexicon.word_form(a_pl).unwrap().form(), "hógrar");
    assert_eq!(lexicon.word_form(b_pl).unwrap().form(), "ljógur");

    // Removing one class's rule never touches the other's words
    lexicon
        .remove_rule(strong_pl, PipelineKind::Form, "ar$", "ar$", "rar")
        .unwrap();
    assert_eq!(lexicon.word_form(a_pl).unwrap().form(), "hógar");
    assert_eq!(lexicon.word_form(b_pl).unwrap().form(), "ljógur");
}
