use path_lemmatizer::domain::{
    GrammaticalCase, GrammaticalNumber, MorphParse, MorphTag, PartOfSpeech,
};

#[test]
fn given_opencorpora_noun_tag_when_parsing_then_extracts_pos_case_and_number() {
    let tag = MorphTag::parse("NOUN,inan,masc sing,nomn");

    assert_eq!(tag.pos, Some(PartOfSpeech::Noun));
    assert_eq!(tag.case, Some(GrammaticalCase::Nominative));
    assert_eq!(tag.number, Some(GrammaticalNumber::Singular));
    assert!(tag.is_nominative_singular_noun());
    assert_eq!(tag.as_str(), "NOUN,inan,masc sing,nomn");
}

#[test]
fn given_genitive_noun_tag_when_checking_then_is_not_nominative_singular() {
    let tag = MorphTag::parse("NOUN,inan,masc sing,gent");

    assert!(tag.is_noun());
    assert!(!tag.is_nominative_singular_noun());
}

#[test]
fn given_plural_nominative_noun_when_checking_then_is_not_nominative_singular() {
    let tag = MorphTag::parse("NOUN,inan,masc plur,nomn");

    assert!(!tag.is_nominative_singular_noun());
}

#[test]
fn given_adjective_in_nominative_singular_when_checking_then_is_not_a_noun() {
    let tag = MorphTag::parse("ADJF,Qual masc,sing,nomn");

    assert_eq!(tag.pos, Some(PartOfSpeech::Adjective));
    assert!(!tag.is_nominative_singular_noun());
}

#[test]
fn given_unknown_grammemes_when_parsing_then_fields_are_empty() {
    let tag = MorphTag::parse("UNKN");

    assert_eq!(tag.pos, None);
    assert_eq!(tag.case, None);
    assert_eq!(tag.number, None);
}

#[test]
fn given_parse_constructor_when_building_then_tag_is_parsed() {
    let parse = MorphParse::new("накази", "наказ", "NOUN,inan,masc plur,nomn", 0.8);

    assert_eq!(parse.normal_form, "наказ");
    assert_eq!(parse.tag.number, Some(GrammaticalNumber::Plural));
}
