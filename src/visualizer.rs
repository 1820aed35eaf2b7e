use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::VisualizerError;
use crate::mood::Mood;
use crate::scenes;
use crate::surface::{Canvas, Surface};

pub const SNAPSHOT_FILE: &str = "mood.svg";

/// Owns the drawing surface and the current mood.
///
/// There is no frame loop: the surface is only redrawn when `set_mood` or
/// `render` is called, so an idle visualizer costs nothing.
pub struct MoodVisualizer<S: Surface = Canvas> {
    surface: S,
    mood: Option<Mood>,
    container: Option<PathBuf>,
    redraws: u64,
}

impl MoodVisualizer<Canvas> {
    /// Allocates a `width` x `height` canvas attached to the `container`
    /// directory, which must already exist.
    pub fn initialize(width: u32, height: u32, container: &Path) -> Result<Self, VisualizerError> {
        if !container.is_dir() {
            return Err(VisualizerError::Initialization(format!(
                "container {} does not exist",
                container.display()
            )));
        }
        let canvas = Canvas::new(width, height)?;
        info!(width, height, container = %container.display(), "visualizer initialized");

        Ok(Self {
            surface: canvas,
            mood: None,
            container: Some(container.to_path_buf()),
            redraws: 0,
        })
    }

    /// Writes the current frame as SVG into the container directory.
    pub fn save_snapshot(&self) -> Result<PathBuf, VisualizerError> {
        let dir = self.container.as_ref().ok_or_else(|| {
            io::Error::new(io::ErrorKind::NotFound, "visualizer has no container")
        })?;
        let path = dir.join(SNAPSHOT_FILE);
        fs::write(&path, self.surface.to_svg())?;
        debug!(path = %path.display(), "scene snapshot written");
        Ok(path)
    }
}

impl<S: Surface> MoodVisualizer<S> {
    /// Wraps an already allocated surface. Used for alternative backends
    /// and test doubles; no container is attached.
    pub fn with_surface(surface: S) -> Self {
        Self {
            surface,
            mood: None,
            container: None,
            redraws: 0,
        }
    }

    /// Replaces the current mood and redraws once, even when the mood is
    /// unchanged.
    pub fn set_mood(&mut self, mood: Mood) {
        self.mood = Some(mood);
        self.render();
    }

    pub fn render(&mut self) {
        self.surface.clear();
        self.redraws += 1;

        let Some(mood) = self.mood else {
            debug!(redraws = self.redraws, "no mood yet, leaving surface blank");
            return;
        };
        debug!(%mood, redraws = self.redraws, "rendering scene");
        scenes::scene_for(mood)(&mut self.surface);
    }

    pub fn mood(&self) -> Option<Mood> {
        self.mood
    }

    pub fn redraw_count(&self) -> u64 {
        self.redraws
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }
}
