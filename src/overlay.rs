//! Detail overlay state machine.
//!
//! Models the rules the generated page script follows: one shared overlay
//! surface, at most one expanded card, and every close path folding all
//! card disclosures back up.

use crate::render::render_detail;
use crate::types::ToolRecord;

/// Visibility of the shared overlay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OverlayState {
    Collapsed,
    /// Showing the detail fragment of the card at `index`.
    Expanded { index: usize, content: String },
}

/// User actions the overlay reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayEvent {
    /// A card disclosure was opened or closed.
    Toggle { index: usize, open: bool },
    /// The dedicated close control.
    Close,
    /// A click on the backdrop outside the content.
    Dismiss,
}

/// Overlay plus the open/closed state of every card disclosure.
#[derive(Debug, Clone)]
pub struct Overlay {
    details: Vec<String>,
    disclosures: Vec<bool>,
    state: OverlayState,
}

impl Overlay {
    /// Create a collapsed overlay over pre-rendered detail fragments.
    pub fn new(details: Vec<String>) -> Self {
        let disclosures = vec![false; details.len()];
        Self {
            details,
            disclosures,
            state: OverlayState::Collapsed,
        }
    }

    /// Create an overlay for a rendered set of records.
    pub fn for_records(records: &[ToolRecord]) -> Self {
        Self::new(records.iter().map(render_detail).collect())
    }

    pub fn state(&self) -> &OverlayState {
        &self.state
    }

    pub fn is_visible(&self) -> bool {
        matches!(self.state, OverlayState::Expanded { .. })
    }

    /// Index of the expanded card, if any.
    pub fn expanded(&self) -> Option<usize> {
        match self.state {
            OverlayState::Expanded { index, .. } => Some(index),
            OverlayState::Collapsed => None,
        }
    }

    pub fn is_disclosure_open(&self, index: usize) -> bool {
        self.disclosures.get(index).copied().unwrap_or(false)
    }

    pub fn any_disclosure_open(&self) -> bool {
        self.disclosures.iter().any(|&open| open)
    }

    /// Apply one event.
    pub fn handle(&mut self, event: OverlayEvent) {
        match event {
            OverlayEvent::Toggle { index, open: true } => self.expand(index),
            OverlayEvent::Toggle { index, open: false } => self.fold(index),
            OverlayEvent::Close | OverlayEvent::Dismiss => self.collapse(),
        }
    }

    fn expand(&mut self, index: usize) {
        let Some(content) = self.details.get(index).cloned() else {
            return;
        };

        if self.expanded().is_some_and(|current| current != index) {
            self.collapse();
        }

        self.disclosures[index] = true;
        self.state = OverlayState::Expanded { index, content };
    }

    fn fold(&mut self, index: usize) {
        if let Some(open) = self.disclosures.get_mut(index) {
            *open = false;
        }
        if !self.any_disclosure_open() {
            self.collapse();
        }
    }

    fn collapse(&mut self) {
        self.disclosures.iter_mut().for_each(|open| *open = false);
        self.state = OverlayState::Collapsed;
    }
}
