//! Normalizes analysis responses and fans them out to the displays.
//!
//! The response body comes from across the network and is not trusted:
//! every field is checked individually and anything missing or malformed
//! falls back to a default instead of failing the whole projection.

use serde::Serialize;
use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::client::JournalEntry;
use crate::mood::Mood;
use crate::surface::{Canvas, Surface};
use crate::visualizer::MoodVisualizer;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Playlist {
    pub name: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SupportResponse {
    pub validation: String,
    pub coping_strategies: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct AnalysisResult {
    pub mood: Mood,
    pub personalized_message: String,
    pub support_response: Option<SupportResponse>,
    pub music_recommendations: Vec<Playlist>,
}

impl AnalysisResult {
    pub fn from_raw(raw: &Value) -> Self {
        let Some(obj) = raw.as_object() else {
            warn!("analysis response is not an object, using defaults");
            return Self::default();
        };

        let mood = str_field(obj, "mood")
            .map(Mood::from_label)
            .unwrap_or_default();
        let personalized_message = str_field(obj, "personalized_message")
            .unwrap_or_default()
            .to_string();

        Self {
            mood,
            personalized_message,
            support_response: obj.get("support_response").and_then(parse_support),
            music_recommendations: obj
                .get("music_recommendations")
                .map(parse_playlists)
                .unwrap_or_default(),
        }
    }
}

fn str_field<'a>(obj: &'a Map<String, Value>, key: &str) -> Option<&'a str> {
    obj.get(key)?.as_str()
}

// Partial support data is never shown.
fn parse_support(raw: &Value) -> Option<SupportResponse> {
    let obj = raw.as_object()?;
    let validation = str_field(obj, "validation");
    let strategies = obj.get("coping_strategies").and_then(Value::as_array);

    let (Some(validation), Some(strategies)) = (validation, strategies) else {
        debug!("discarding incomplete support_response");
        return None;
    };

    Some(SupportResponse {
        validation: validation.to_string(),
        coping_strategies: strategies
            .iter()
            .filter_map(Value::as_str)
            .map(str::to_string)
            .collect(),
    })
}

fn parse_playlists(raw: &Value) -> Vec<Playlist> {
    let Some(items) = raw.as_array() else {
        return Vec::new();
    };

    let playlists: Vec<Playlist> = items
        .iter()
        .filter_map(|item| {
            let obj = item.as_object()?;
            let name = str_field(obj, "name").filter(|s| !s.is_empty())?;
            let url = str_field(obj, "url").filter(|s| !s.is_empty())?;
            Some(Playlist {
                name: name.to_string(),
                url: url.to_string(),
            })
        })
        .collect();

    let dropped = items.len() - playlists.len();
    if dropped > 0 {
        warn!(dropped, "dropped malformed music recommendations");
    }
    playlists
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextSlot {
    Mood,
    PersonalizedMessage,
    Validation,
}

/// Text and list displays the projector writes into.
///
/// Each `TextSlot` is a separate text display, so a projection writes each
/// slot at most once.
pub trait DisplaySink {
    fn show_text(&mut self, slot: TextSlot, text: &str);
    fn show_coping_strategies(&mut self, strategies: &[String]);
    fn show_music(&mut self, playlists: &[Playlist]);

    /// Echo of the entry being submitted, shown before the service answers.
    fn show_entry(&mut self, entry: &JournalEntry);

    /// Single user-facing notice for a failed submission.
    fn show_failure(&mut self, notice: &str);
}

pub struct ResultProjector<D: DisplaySink, S: Surface = Canvas> {
    visualizer: MoodVisualizer<S>,
    sink: D,
}

impl<D: DisplaySink, S: Surface> ResultProjector<D, S> {
    pub fn new(visualizer: MoodVisualizer<S>, sink: D) -> Self {
        Self { visualizer, sink }
    }

    /// Normalizes `raw` and replaces everything on display with it.
    ///
    /// Support displays are left untouched when the response carries no
    /// complete support data.
    pub fn project(&mut self, raw: &Value) -> AnalysisResult {
        let result = AnalysisResult::from_raw(raw);
        debug!(
            mood = %result.mood,
            support = result.support_response.is_some(),
            music = result.music_recommendations.len(),
            "projecting analysis result"
        );

        self.visualizer.set_mood(result.mood);
        self.sink
            .show_text(TextSlot::Mood, &result.mood.display_label());
        self.sink
            .show_text(TextSlot::PersonalizedMessage, &result.personalized_message);

        if let Some(support) = &result.support_response {
            self.sink.show_text(TextSlot::Validation, &support.validation);
            self.sink.show_coping_strategies(&support.coping_strategies);
        }

        self.sink.show_music(&result.music_recommendations);
        result
    }

    pub fn visualizer(&self) -> &MoodVisualizer<S> {
        &self.visualizer
    }

    pub fn sink(&self) -> &D {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut D {
        &mut self.sink
    }

    pub fn into_parts(self) -> (MoodVisualizer<S>, D) {
        (self.visualizer, self.sink)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn null_fields_fall_back_to_defaults() {
        let result = AnalysisResult::from_raw(&json!({
            "mood": "happy",
            "personalized_message": null,
            "support_response": ""
        }));
        assert_eq!(result.mood, Mood::Happy);
        assert_eq!(result.personalized_message, "");
        assert!(result.support_response.is_none());
    }

    #[test]
    fn non_string_strategies_are_skipped() {
        let support = parse_support(&json!({
            "validation": "That sounds hard.",
            "coping_strategies": ["Take a walk.", 3, null, "Breathe."]
        }))
        .expect("support should parse");
        assert_eq!(support.coping_strategies, vec!["Take a walk.", "Breathe."]);
    }

    #[test]
    fn non_array_music_is_empty() {
        assert!(parse_playlists(&json!({"name": "A", "url": "u"})).is_empty());
    }
}
