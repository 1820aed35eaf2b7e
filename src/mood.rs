use std::fmt;

use serde::Serialize;

/// Mood category reported by the analysis service.
///
/// Labels outside the known set resolve to `Neutral`; the classifier is
/// remote and may start emitting labels this crate has never seen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Happy,
    Sad,
    #[default]
    Neutral,
}

impl Mood {
    pub const ALL: [Mood; 3] = [Mood::Happy, Mood::Sad, Mood::Neutral];

    pub fn from_label(label: &str) -> Self {
        match label.trim().to_ascii_lowercase().as_str() {
            "happy" => Mood::Happy,
            "sad" => Mood::Sad,
            _ => Mood::Neutral,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Mood::Happy => "happy",
            Mood::Sad => "sad",
            Mood::Neutral => "neutral",
        }
    }

    /// Text shown next to the visualization, e.g. `Detected Mood: Happy`.
    pub fn display_label(&self) -> String {
        let tag = self.as_str();
        let mut chars = tag.chars();
        let capitalized = match chars.next() {
            Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
            None => String::new(),
        };
        format!("Detected Mood: {}", capitalized)
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for Mood {
    fn from(label: &str) -> Self {
        Mood::from_label(label)
    }
}
