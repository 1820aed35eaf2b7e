use mood_journal_core::client::JournalEntry;
use mood_journal_core::display::ConsoleDisplay;
use mood_journal_core::projector::{DisplaySink, Playlist, TextSlot};

#[test]
fn result_is_laid_out_as_table_and_lists() {
    let mut display = ConsoleDisplay::new();
    display.show_entry(&JournalEntry::new("Friday", "", "sunny", "Good day"));
    display.show_text(TextSlot::Mood, "Detected Mood: Happy");
    display.show_text(TextSlot::PersonalizedMessage, "Keep shining!");
    display.show_music(&[Playlist {
        name: "Happy Hits".to_string(),
        url: "https://open.spotify.com/playlist/1".to_string(),
    }]);

    let lines = display.lines();
    assert!(lines.contains(&"Title: Friday".to_string()));
    assert!(!lines.iter().any(|l| l.starts_with("Location")));
    assert!(lines.iter().any(|l| l.contains("Detected Mood: Happy")));
    assert!(lines.iter().any(|l| l.starts_with("| Message") && l.contains("Keep shining!")));
    assert!(lines.contains(&"  - Happy Hits <https://open.spotify.com/playlist/1>".to_string()));
    assert!(!lines.iter().any(|l| l.contains("Coping")));
}

#[test]
fn failure_replaces_result_output() {
    let mut display = ConsoleDisplay::new();
    display.show_entry(&JournalEntry::new("", "", "", "hello"));
    display.show_failure("try again");

    let lines = display.lines();
    assert_eq!(display.failure(), Some("try again"));
    assert_eq!(lines.last().map(String::as_str), Some("[error] try again"));
    assert!(!lines.iter().any(|l| l.starts_with('+')));
}

#[test]
fn coping_strategies_are_listed() {
    let mut display = ConsoleDisplay::new();
    display.show_text(TextSlot::Validation, "That sounds hard.");
    display.show_coping_strategies(&["Breathe.".to_string()]);

    let lines = display.lines();
    assert!(lines.iter().any(|l| l.starts_with("| Validation")));
    assert!(lines.contains(&"Coping strategies:".to_string()));
    assert!(lines.contains(&"  - Breathe.".to_string()));
}
