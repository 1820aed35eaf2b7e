use mood_journal_core::mood::Mood;

#[test]
fn known_labels_parse() {
    assert_eq!(Mood::from_label("happy"), Mood::Happy);
    assert_eq!(Mood::from_label("sad"), Mood::Sad);
    assert_eq!(Mood::from_label("neutral"), Mood::Neutral);
}

#[test]
fn labels_are_case_and_space_insensitive() {
    assert_eq!(Mood::from_label("  Happy "), Mood::Happy);
    assert_eq!(Mood::from("SAD"), Mood::Sad);
}

#[test]
fn unknown_labels_fall_back_to_neutral() {
    for label in ["anxious", "", "POSITIVE", "😊"] {
        assert_eq!(Mood::from_label(label), Mood::Neutral);
    }
}

#[test]
fn serializes_as_lowercase_tag() {
    assert_eq!(serde_json::to_string(&Mood::Happy).unwrap(), "\"happy\"");
}
