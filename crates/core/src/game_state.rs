//! Game state module - one play session
//!
//! [`GameState`] owns everything a session mutates: the grid, the active and
//! next pieces, the hold slot, the counters and the gravity accumulator. The
//! driver calls its operations from a single control flow and reads state
//! back through accessors or a [`GameSnapshot`].
//!
//! Per active piece the state machine is:
//!
//! ```text
//! Falling --(blocked one row down)--> Locking --> merge --> line clear --> Spawn
//!    ^                                                                      |
//!    +------------------------------ ok ------------------------------------+
//!                                                    blocked --> GameOver
//! ```
//!
//! A spawn is blocked when the new piece overlaps settled cells or cannot
//! descend a single row from the spawn anchor. That is the only way a session
//! ends; [`reset`](GameState::reset) starts over.

use tracing::{debug, info};

use crate::collision::{collides, drop_distance, landing};
use crate::config::EngineConfig;
use crate::error::ConfigError;
use crate::grid::Grid;
use crate::hold::HoldSlot;
use crate::piece::Piece;
use crate::rng::{PieceSource, UniformRandomizer};
use crate::rotation::try_rotate;
use crate::scoring::{LevelRules, Progress};
use crate::snapshot::{ActiveSnapshot, GameSnapshot};
use crate::types::{GameAction, PieceKind};

/// What happened when the last piece locked
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LockEvent {
    pub kind: PieceKind,
    pub lines_cleared: u32,
    pub score_gained: u32,
    pub level_ups: u32,
    /// Cells that were still above the board and got discarded
    pub cells_dropped: u32,
}

/// Complete session state
#[derive(Debug, Clone)]
pub struct GameState<S = UniformRandomizer> {
    config: EngineConfig,
    grid: Grid,
    source: S,
    active: Option<Piece>,
    next: PieceKind,
    hold: HoldSlot,
    progress: Progress,
    /// Gravity accumulator; zeroed after every gravity step.
    drop_timer_ms: u32,
    paused: bool,
    game_over: bool,
    /// Monotonic id of spawned pieces (natural spawns and hold spawns).
    piece_id: u32,
    last_event: Option<LockEvent>,
}

impl GameState<UniformRandomizer> {
    /// Start a session with uniform random pieces.
    ///
    /// Uses `config.seed`, or seed 1 when unset. `config` is expected to be
    /// valid (see [`EngineConfig::validate`]).
    pub fn new(config: EngineConfig) -> Self {
        let seed = config.seed.unwrap_or(1);
        Self::with_source(config, UniformRandomizer::new(seed))
    }
}

impl Default for GameState<UniformRandomizer> {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

impl<S: PieceSource> GameState<S> {
    /// Start a session that draws pieces from `source`.
    pub fn with_source(config: EngineConfig, source: S) -> Self {
        let grid = Grid::new(config.width, config.height);
        Self::assemble(config, source, grid)
    }

    /// Start a session on a prepared grid.
    ///
    /// The grid's dimensions override `config.width`/`config.height`, and the
    /// result is validated like a loaded config, so a grid outside the
    /// supported edge range is rejected. The first spawn is checked against
    /// the prepared cells, so a blocked grid starts in game over.
    pub fn with_grid(
        mut config: EngineConfig,
        source: S,
        grid: Grid,
    ) -> Result<Self, ConfigError> {
        config.width = grid.width();
        config.height = grid.height();
        config.validate()?;
        Ok(Self::assemble(config, source, grid))
    }

    fn assemble(config: EngineConfig, source: S, grid: Grid) -> Self {
        let progress = Progress::new(LevelRules::from(&config));
        let mut state = Self {
            config,
            grid,
            source,
            active: None,
            next: PieceKind::I,
            hold: HoldSlot::default(),
            progress,
            drop_timer_ms: 0,
            paused: false,
            game_over: false,
            piece_id: 0,
            last_event: None,
        };
        state.start_session();
        state
    }

    /// Reinitialize grid, counters, hold slot, pieces and gravity timer.
    pub fn reset(&mut self) {
        self.grid.clear();
        self.start_session();
        info!("session reset");
    }

    fn start_session(&mut self) {
        self.progress = Progress::new(LevelRules::from(&self.config));
        self.hold.clear();
        self.active = None;
        self.drop_timer_ms = 0;
        self.paused = false;
        self.game_over = false;
        self.last_event = None;
        self.next = self.source.next_kind();
        self.spawn_next();
    }

    // ---- accessors -------------------------------------------------------

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn active(&self) -> Option<Piece> {
        self.active
    }

    /// Where the active piece would land on a hard drop
    pub fn ghost_piece(&self) -> Option<Piece> {
        self.active.map(|piece| landing(&piece, &self.grid))
    }

    pub fn next_kind(&self) -> PieceKind {
        self.next
    }

    pub fn held(&self) -> Option<PieceKind> {
        self.hold.held()
    }

    pub fn hold_used(&self) -> bool {
        self.hold.is_used()
    }

    pub fn score(&self) -> u32 {
        self.progress.score()
    }

    pub fn lines(&self) -> u32 {
        self.progress.lines()
    }

    pub fn level(&self) -> u32 {
        self.progress.level()
    }

    pub fn drop_interval_ms(&self) -> u32 {
        self.progress.drop_interval_ms()
    }

    pub fn drop_timer_ms(&self) -> u32 {
        self.drop_timer_ms
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn piece_id(&self) -> u32 {
        self.piece_id
    }

    /// Neither paused nor over
    pub fn is_playable(&self) -> bool {
        !self.paused && !self.game_over
    }

    pub fn last_event(&self) -> Option<LockEvent> {
        self.last_event
    }

    /// Take and clear the last lock event.
    pub fn take_last_event(&mut self) -> Option<LockEvent> {
        self.last_event.take()
    }

    // ---- spawning --------------------------------------------------------

    fn spawn_blocked(&self, piece: &Piece) -> bool {
        collides(piece, &self.grid) || collides(&piece.shifted(0, 1), &self.grid)
    }

    /// Promote the queued kind to active and queue a fresh draw.
    fn spawn_next(&mut self) -> bool {
        let upcoming = self.source.next_kind();
        let kind = std::mem::replace(&mut self.next, upcoming);
        self.spawn(kind)
    }

    /// Place a fresh `kind` at the spawn anchor. Ends the session if blocked.
    fn spawn(&mut self, kind: PieceKind) -> bool {
        let piece = Piece::at(kind, self.config.spawn_x, self.config.spawn_y);
        self.active = Some(piece);
        self.piece_id = self.piece_id.wrapping_add(1);

        if self.spawn_blocked(&piece) {
            self.game_over = true;
            info!(
                kind = ?kind,
                score = self.score(),
                lines = self.lines(),
                level = self.level(),
                "game over"
            );
            return false;
        }

        debug!(kind = ?kind, next = ?self.next, piece_id = self.piece_id, "spawned");
        true
    }

    // ---- locking ---------------------------------------------------------

    /// Merge the active piece, clear lines, score, and spawn the next piece.
    fn lock_active(&mut self) {
        let Some(piece) = self.active.take() else {
            return;
        };

        let written = self.grid.merge(&piece);
        let cleared = self.grid.clear_lines();
        let outcome = self.progress.record_clear(cleared);

        let event = LockEvent {
            kind: piece.kind,
            lines_cleared: cleared as u32,
            score_gained: outcome.score_gained,
            level_ups: outcome.level_ups,
            cells_dropped: (piece.shape.len() - written) as u32,
        };
        debug!(
            kind = ?piece.kind,
            x = piece.x,
            y = piece.y,
            lines_cleared = event.lines_cleared,
            score = self.score(),
            "locked"
        );
        self.last_event = Some(event);

        self.hold.release();
        self.spawn_next();
    }

    /// One row down, or lock when blocked. Returns whether the piece moved.
    fn step_down(&mut self) -> bool {
        let Some(active) = self.active else {
            return false;
        };

        let below = active.shifted(0, 1);
        if collides(&below, &self.grid) {
            self.lock_active();
            return false;
        }
        self.active = Some(below);
        true
    }

    // ---- operations ------------------------------------------------------

    /// Advance the gravity accumulator by `elapsed_ms`.
    ///
    /// Once the accumulator exceeds the drop interval, exactly one gravity
    /// step runs and the accumulator drops to zero; surplus time is not
    /// carried over. Returns whether a gravity step ran.
    pub fn tick(&mut self, elapsed_ms: u32) -> bool {
        if !self.is_playable() {
            return false;
        }

        self.drop_timer_ms = self.drop_timer_ms.saturating_add(elapsed_ms);
        if self.drop_timer_ms <= self.progress.drop_interval_ms() {
            return false;
        }

        self.drop_timer_ms = 0;
        self.step_down();
        true
    }

    /// Shift the active piece by one cell.
    ///
    /// `dx` must be in `-1..=1` and `dy` in `0..=1`; pieces never move up and
    /// never skip cells. Anything else, or a shift that would collide, is
    /// rejected and returns false.
    pub fn move_piece(&mut self, dx: i8, dy: i8) -> bool {
        if !self.is_playable() || !(-1..=1).contains(&dx) || !(0..=1).contains(&dy) {
            return false;
        }
        let Some(active) = self.active else {
            return false;
        };

        let moved = active.shifted(dx, dy);
        if collides(&moved, &self.grid) {
            return false;
        }
        self.active = Some(moved);
        true
    }

    /// Manual one-row drop. Locks the piece when it is already resting.
    ///
    /// Restarts the gravity accumulator. Returns whether the piece moved.
    pub fn soft_drop(&mut self) -> bool {
        if !self.is_playable() {
            return false;
        }
        self.drop_timer_ms = 0;
        self.step_down()
    }

    /// Quarter-turn the active piece, trying the horizontal kicks if needed.
    pub fn rotate(&mut self) -> bool {
        if !self.is_playable() {
            return false;
        }
        let Some(active) = self.active else {
            return false;
        };

        match try_rotate(&active, &self.grid) {
            Some(turned) => {
                self.active = Some(turned);
                true
            }
            None => false,
        }
    }

    /// Drop straight down and lock. Returns the rows fallen, or `None` when
    /// the session is not accepting input.
    pub fn hard_drop(&mut self) -> Option<u32> {
        if !self.is_playable() {
            return None;
        }
        let active = self.active?;

        let distance = drop_distance(&active, &self.grid);
        self.active = Some(active.shifted(0, distance));
        self.lock_active();
        Some(distance as u32)
    }

    /// Swap the active piece with the hold slot (once per piece).
    ///
    /// With an empty slot the active kind is stored and the queued next piece
    /// spawns. Otherwise the held kind respawns fresh at the spawn anchor.
    /// Either spawn can end the session.
    pub fn hold(&mut self) -> bool {
        if !self.is_playable() || self.hold.is_used() {
            return false;
        }
        let Some(active) = self.active else {
            return false;
        };

        match self.hold.swap(active.kind) {
            None => {
                debug!(stored = ?active.kind, "hold");
                self.spawn_next();
            }
            Some(kind) => {
                debug!(stored = ?active.kind, released = ?kind, "hold swap");
                self.spawn(kind);
            }
        }
        true
    }

    /// Flip the paused flag. Ignored once the game is over.
    pub fn toggle_pause(&mut self) -> bool {
        if self.game_over {
            return false;
        }
        self.paused = !self.paused;
        debug!(paused = self.paused, "pause toggled");
        true
    }

    /// Dispatch a driver action. Returns whether it was accepted.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::MoveLeft => self.move_piece(-1, 0),
            GameAction::MoveRight => self.move_piece(1, 0),
            GameAction::SoftDrop => self.soft_drop(),
            GameAction::HardDrop => self.hard_drop().is_some(),
            GameAction::Rotate => self.rotate(),
            GameAction::Hold => self.hold(),
            GameAction::Pause => self.toggle_pause(),
            GameAction::Restart => {
                self.reset();
                true
            }
        }
    }

    // ---- snapshots -------------------------------------------------------

    /// Copy render-facing state into `out`, reusing its allocation.
    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.width = self.grid.width();
        out.height = self.grid.height();
        out.cells.clear();
        out.cells.extend_from_slice(self.grid.cells());

        out.active = self.active.map(ActiveSnapshot::from);
        out.ghost = self.ghost_piece().map(|p| p.cells());
        out.next = self.next;
        out.hold = self.hold.held();
        out.hold_used = self.hold.is_used();
        out.score = self.score();
        out.lines = self.lines();
        out.level = self.level();
        out.drop_interval_ms = self.drop_interval_ms();
        out.paused = self.paused;
        out.game_over = self.game_over;
        out.piece_id = self.piece_id;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}
