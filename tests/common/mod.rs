#![allow(dead_code)]

use mood_journal_core::client::JournalEntry;
use mood_journal_core::projector::{DisplaySink, Playlist, TextSlot};
use mood_journal_core::surface::{Point, Rgb, Surface};

#[derive(Debug, Clone, PartialEq)]
pub enum SinkCall {
    Text(TextSlot, String),
    Coping(Vec<String>),
    Music(Vec<Playlist>),
    Entry(JournalEntry),
    Failure(String),
}

#[derive(Debug, Default)]
pub struct RecordingSink {
    pub calls: Vec<SinkCall>,
}

impl RecordingSink {
    pub fn texts(&self, slot: TextSlot) -> Vec<&str> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                SinkCall::Text(s, text) if *s == slot => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn coping_calls(&self) -> usize {
        self.calls
            .iter()
            .filter(|c| matches!(c, SinkCall::Coping(_)))
            .count()
    }

    pub fn music_calls(&self) -> Vec<&Vec<Playlist>> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                SinkCall::Music(list) => Some(list),
                _ => None,
            })
            .collect()
    }
}

impl DisplaySink for RecordingSink {
    fn show_text(&mut self, slot: TextSlot, text: &str) {
        self.calls.push(SinkCall::Text(slot, text.to_string()));
    }

    fn show_coping_strategies(&mut self, strategies: &[String]) {
        self.calls.push(SinkCall::Coping(strategies.to_vec()));
    }

    fn show_music(&mut self, playlists: &[Playlist]) {
        self.calls.push(SinkCall::Music(playlists.to_vec()));
    }

    fn show_entry(&mut self, entry: &JournalEntry) {
        self.calls.push(SinkCall::Entry(entry.clone()));
    }

    fn show_failure(&mut self, notice: &str) {
        self.calls.push(SinkCall::Failure(notice.to_string()));
    }
}

/// Surface double that only counts frames and primitive calls.
#[derive(Debug, Default)]
pub struct CountingSurface {
    pub clears: usize,
    pub backgrounds: Vec<Rgb>,
    pub primitives: usize,
}

impl Surface for CountingSurface {
    fn width(&self) -> f32 {
        800.0
    }

    fn height(&self) -> f32 {
        300.0
    }

    fn clear(&mut self) {
        self.clears += 1;
    }

    fn background(&mut self, color: Rgb) {
        self.backgrounds.push(color);
    }

    fn fill(&mut self, _color: Option<Rgb>) {}

    fn stroke(&mut self, _color: Option<Rgb>, _weight: f32) {}

    fn circle(&mut self, _center: Point, _diameter: f32) {
        self.primitives += 1;
    }

    fn ellipse(&mut self, _center: Point, _width: f32, _height: f32) {
        self.primitives += 1;
    }

    fn line(&mut self, _from: Point, _to: Point) {
        self.primitives += 1;
    }

    fn polyline(&mut self, _points: &[Point]) {
        self.primitives += 1;
    }
}
