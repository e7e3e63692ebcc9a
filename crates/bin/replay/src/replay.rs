//! Frame replay — feeds recorded NDJSON frames through the synchronizer.

use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::{debug, warn};

use tunerdash_app::ports::{Clock, ViewTarget};
use tunerdash_app::services::view_synchronizer::ViewSynchronizer;
use tunerdash_domain::snapshot::{FrameKind, TelemetrySnapshot};

/// Counts of what happened to the replayed frames.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ReplaySummary {
    /// Full dashboard updates applied.
    pub dashboard_updates: usize,
    /// Latch-only state updates applied.
    pub state_updates: usize,
    /// Frames with a type the dashboard does not render.
    pub ignored: usize,
    /// Lines that could not be decoded.
    pub rejected: usize,
}

/// Replay errors.
#[derive(Debug, thiserror::Error)]
pub enum ReplayError {
    /// Reading the frame source failed.
    #[error("failed to read frames")]
    Read(#[from] std::io::Error),
}

/// Apply every frame read from `reader`, one per line, in order.
///
/// Blank lines are skipped. Lines that do not decode to a JSON object are
/// logged and counted, never fatal.
///
/// # Errors
///
/// Returns [`ReplayError::Read`] if the reader fails.
pub async fn replay<R, T, C>(
    reader: R,
    synchronizer: &ViewSynchronizer<T, C>,
) -> Result<ReplaySummary, ReplayError>
where
    R: AsyncBufRead + Unpin,
    T: ViewTarget,
    C: Clock,
{
    let mut summary = ReplaySummary::default();
    let mut lines = reader.lines();
    let mut line_number = 0_usize;

    while let Some(line) = lines.next_line().await? {
        line_number += 1;
        let frame = line.trim();
        if frame.is_empty() {
            continue;
        }
        let snapshot = match TelemetrySnapshot::from_json(frame) {
            Ok(snapshot) => snapshot,
            Err(err) => {
                warn!(line = line_number, error = %err, "skipping undecodable frame");
                summary.rejected += 1;
                continue;
            }
        };
        match synchronizer.apply(&snapshot) {
            FrameKind::DashboardUpdate => summary.dashboard_updates += 1,
            FrameKind::StateUpdate => summary.state_updates += 1,
            FrameKind::Unrecognized(_) => summary.ignored += 1,
        }
        debug!(line = line_number, "frame applied");
    }

    Ok(summary)
}
