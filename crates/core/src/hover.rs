use fretboard_protocol::FretCoord;

/// Remembers which cell the pointer last hovered, so consecutive moves
/// inside one cell skip the marker redraw.
///
/// One tracker belongs to one rendering surface and is only touched from
/// that surface's event handlers.
#[derive(Debug, Default)]
pub struct HoverTracker {
    last: Option<FretCoord>,
}

impl HoverTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a pointer move. Returns `true` when the marker must be
    /// redrawn, i.e. the pointer entered a different cell.
    pub fn pointer_move(&mut self, coord: FretCoord) -> bool {
        if self.last == Some(coord) {
            return false;
        }
        self.last = Some(coord);
        true
    }

    /// Record the pointer leaving the surface. Clears the remembered
    /// cell, so re-entering at the same cell redraws the marker.
    pub fn pointer_leave(&mut self) {
        self.last = None;
    }

    pub fn current(&self) -> Option<FretCoord> {
        self.last
    }
}
