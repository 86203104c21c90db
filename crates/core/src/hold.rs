//! Hold slot - one stored piece kind, swappable once per piece in play

use crate::types::PieceKind;

/// Stores a piece *kind* (never a positioned piece) plus the once-per-piece
/// lockout flag.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HoldSlot {
    held: Option<PieceKind>,
    used: bool,
}

impl HoldSlot {
    pub fn held(&self) -> Option<PieceKind> {
        self.held
    }

    /// Whether a hold already happened for the current piece
    pub fn is_used(&self) -> bool {
        self.used
    }

    /// Put `active` in the slot and return whatever was there before.
    ///
    /// Marks the slot used until [`release`](Self::release).
    pub fn swap(&mut self, active: PieceKind) -> Option<PieceKind> {
        self.used = true;
        self.held.replace(active)
    }

    /// Re-arm the slot. Called on each natural (post-lock) spawn.
    pub fn release(&mut self) {
        self.used = false;
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
