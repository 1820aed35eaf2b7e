use tracing::{error, info, warn};

use crate::client::{AnalysisService, JournalEntry};
use crate::error::SubmitError;
use crate::projector::{AnalysisResult, DisplaySink, ResultProjector};
use crate::surface::{Canvas, Surface};

pub const FAILURE_NOTICE: &str = "An error occurred while processing your input. Please try again.";

/// Submission pipeline: entry in, analysis out, displays refreshed.
///
/// Results are applied in the order responses arrive. Nothing here guards
/// against overlapping submissions; callers that care should wait for
/// `submit` to finish before sending the next entry.
pub struct Journal<A: AnalysisService, D: DisplaySink, S: Surface = Canvas> {
    service: A,
    projector: ResultProjector<D, S>,
}

impl<A: AnalysisService, D: DisplaySink, S: Surface> Journal<A, D, S> {
    pub fn new(service: A, projector: ResultProjector<D, S>) -> Self {
        Self { service, projector }
    }

    /// On a transport failure the sink gets the generic failure notice and
    /// the previous result stays on display.
    pub async fn submit(&mut self, entry: JournalEntry) -> Result<AnalysisResult, SubmitError> {
        if !entry.has_text() {
            warn!("refusing to submit an entry without text");
            return Err(SubmitError::EmptyText);
        }

        self.projector.sink_mut().show_entry(&entry);

        match self.service.analyze(&entry).await {
            Ok(raw) => {
                let result = self.projector.project(&raw);
                info!(mood = %result.mood, "analysis applied");
                Ok(result)
            }
            Err(e) => {
                error!(error = %e, "analysis request failed");
                self.projector.sink_mut().show_failure(FAILURE_NOTICE);
                Err(e.into())
            }
        }
    }

    pub fn projector(&self) -> &ResultProjector<D, S> {
        &self.projector
    }

    pub fn into_projector(self) -> ResultProjector<D, S> {
        self.projector
    }
}
