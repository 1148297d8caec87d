//! Root crate re-export tests
//!
//! The umbrella crate exposes every layer under a stable module path.

#[test]
fn all_layers_are_reachable_through_the_root_crate() {
    let mut lexicon = skald::lexicon::Lexicon::new();
    let noun = lexicon.add_part_of_speech("noun").unwrap();
    lexicon.add_declension(noun, "accusative").unwrap();
    let class = lexicon.class_by_name(noun, "noun").unwrap();
    let accusative = lexicon.declension_by_name(class, "accusative").unwrap();

    lexicon
        .add_rule(accusative, skald::morph::PipelineKind::Form, "a$", ".$", "u")
        .unwrap();
    let word = lexicon
        .add_word(
            skald::lexicon::NewWord::new("gleira", "gli:ra", "eira"),
            noun,
            class,
        )
        .unwrap();

    let form = lexicon.form_by_declension_name(word, "accusative").unwrap();
    assert_eq!(lexicon.word_form(form).unwrap().form(), "gleiru");
}

#[test]
fn foundation_types_are_reachable_through_the_root_crate() {
    let err = skald::foundation::Error::not_found(
        skald::foundation::NameScope::Declension,
        "accusative",
    );
    assert!(matches!(
        err.kind,
        skald::foundation::ErrorKind::NotFound { .. }
    ));
}
