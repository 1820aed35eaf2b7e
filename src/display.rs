use crate::client::JournalEntry;
use crate::projector::{DisplaySink, Playlist, TextSlot};

const LABEL_WIDTH: usize = 14;
const VALUE_WIDTH: usize = 48;

/// Terminal display: collects what the projector sends and lays it out as a
/// bordered table followed by the lists.
#[derive(Debug, Default)]
pub struct ConsoleDisplay {
    entry: Option<JournalEntry>,
    mood: Option<String>,
    message: Option<String>,
    validation: Option<String>,
    coping: Vec<String>,
    music: Vec<Playlist>,
    failure: Option<String>,
}

impl ConsoleDisplay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failure(&self) -> Option<&str> {
        self.failure.as_deref()
    }

    pub fn lines(&self) -> Vec<String> {
        let mut lines = Vec::new();

        if let Some(entry) = &self.entry {
            for (label, value) in [
                ("Title", &entry.title),
                ("Location", &entry.location),
                ("Weather", &entry.weather),
            ] {
                if !value.is_empty() {
                    lines.push(format!("{}: {}", label, value));
                }
            }
            lines.push(format!("> {}", entry.text));
            lines.push(String::new());
        }

        if let Some(notice) = &self.failure {
            lines.push(format!("[error] {}", notice));
            return lines;
        }

        let rows: Vec<(&str, &str)> = [
            ("Mood", self.mood.as_deref()),
            ("Message", self.message.as_deref()),
            ("Validation", self.validation.as_deref()),
        ]
        .into_iter()
        .filter_map(|(label, value)| value.map(|v| (label, v)))
        .collect();

        if !rows.is_empty() {
            let border = format!(
                "+{}+{}+",
                "-".repeat(LABEL_WIDTH + 2),
                "-".repeat(VALUE_WIDTH + 2)
            );
            lines.push(border.clone());
            for (label, value) in rows {
                lines.push(format_row(label, value));
            }
            lines.push(border);
        }

        if !self.coping.is_empty() {
            lines.push("Coping strategies:".to_string());
            lines.extend(self.coping.iter().map(|s| format!("  - {}", s)));
        }

        if !self.music.is_empty() {
            lines.push("Music:".to_string());
            lines.extend(
                self.music
                    .iter()
                    .map(|p| format!("  - {} <{}>", p.name, p.url)),
            );
        }

        lines
    }

    pub fn print(&self) -> Vec<String> {
        let lines = self.lines();
        for line in &lines {
            println!("{}", line);
        }
        lines
    }
}

fn format_row(label: &str, value: &str) -> String {
    format!(
        "| {:<label$} | {:<value$} |",
        label,
        value,
        label = LABEL_WIDTH,
        value = VALUE_WIDTH
    )
}

impl DisplaySink for ConsoleDisplay {
    fn show_text(&mut self, slot: TextSlot, text: &str) {
        let target = match slot {
            TextSlot::Mood => &mut self.mood,
            TextSlot::PersonalizedMessage => &mut self.message,
            TextSlot::Validation => &mut self.validation,
        };
        *target = Some(text.to_string());
        self.failure = None;
    }

    fn show_coping_strategies(&mut self, strategies: &[String]) {
        self.coping = strategies.to_vec();
    }

    fn show_music(&mut self, playlists: &[Playlist]) {
        self.music = playlists.to_vec();
    }

    fn show_entry(&mut self, entry: &JournalEntry) {
        self.entry = Some(entry.clone());
    }

    fn show_failure(&mut self, notice: &str) {
        self.failure = Some(notice.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::format_row;

    #[test]
    fn row_is_padded_to_column_widths() {
        let row = format_row("Mood", "happy");
        assert_eq!(row.len(), 2 + super::LABEL_WIDTH + 3 + super::VALUE_WIDTH + 2);
    }
}
