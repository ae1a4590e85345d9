use crate::app::mode::AppMode;

/// Snapshot of everything the UI needs to draw one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderState {
    pub mode: AppMode,
    pub input: String,
    /// Cursor as (row, display column) within the input
    pub cursor: (usize, usize),
    pub output: String,
    pub is_error: bool,
    pub status: String,
    /// Command deck contents, present only in Command mode
    pub command_line: Option<String>,
    pub scroll: u16,
}

impl RenderState {
    /// Vertical offset that keeps the cursor row inside a pane of `height` rows.
    pub fn input_scroll(&self, height: u16) -> u16 {
        let row = u16::try_from(self.cursor.0).unwrap_or(u16::MAX);
        row.saturating_sub(height.saturating_sub(1))
    }
}
