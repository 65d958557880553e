//! Game state module - the explicit engine state of one session
//!
//! [`GameState`] owns the board, the active piece, and the piece queue. Every
//! operation borrows it mutably; nothing is global, so several sessions can run
//! side by side (tests do exactly that).
//!
//! The primitives here mirror the controller contract: moves and rotations are
//! applied and undone on collision, landing is detected before the move that
//! would cause it, and a landed piece is merged, full rows collapsed, and the next
//! piece spawned in one call to [`GameState::land`].

use log::debug;

use crate::active::ActivePiece;
use crate::board::Board;
use crate::rng::{PieceQueue, RandomSource, SimpleRng};
use crate::snapshot::BoardSnapshot;
use crate::types::{EngineConfig, PieceKind, RotateDir};

/// Complete engine state
#[derive(Debug, Clone)]
pub struct GameState<R = SimpleRng> {
    config: EngineConfig,
    board: Board,
    active: ActivePiece,
    queue: PieceQueue<R>,
    /// Pieces spawned since the last reset.
    pieces: u32,
    /// Rows removed since the last reset.
    rows_cleared: u32,
}

impl GameState<SimpleRng> {
    /// Create a default-sized game with the built-in RNG
    pub fn new(seed: u32) -> Self {
        Self::with_rng(EngineConfig::default(), SimpleRng::new(seed))
    }
}

impl<R: RandomSource> GameState<R> {
    /// Create a game from a validated configuration and a random source.
    ///
    /// The first piece is drawn and spawned right away, so the state is ready
    /// to play. A session starts every round with [`GameState::reset`], which
    /// replaces that piece with the next one from the queue.
    pub fn with_rng(config: EngineConfig, rng: R) -> Self {
        debug_assert!(config.validate().is_ok(), "invalid config {:?}", config);

        let board = Board::new(config.width, config.height);
        let mut queue = PieceQueue::new(rng, config.show_next);
        let kind = queue.draw();
        let active = spawn_piece(kind, &board, &mut queue, config.random_rotate);
        debug!("first piece {} at ({}, {})", kind.as_str(), active.x(), active.y());

        Self {
            config,
            board,
            active,
            queue,
            pieces: 1,
            rows_cleared: 0,
        }
    }

    /// Empty the board and spawn a fresh piece, replacing the active one.
    ///
    /// The preview carries over, so the first piece of a round is the shape
    /// the previous round was showing.
    pub fn reset(&mut self) {
        self.board.clear();
        self.pieces = 0;
        self.rows_cleared = 0;
        self.spawn_next();
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn active(&self) -> &ActivePiece {
        &self.active
    }

    /// Replace the active piece (used to set up positions).
    pub fn set_active(&mut self, piece: ActivePiece) {
        self.active = piece;
    }

    pub fn next_piece(&self) -> Option<PieceKind> {
        self.queue.peek()
    }

    pub fn pieces(&self) -> u32 {
        self.pieces
    }

    pub fn rows_cleared(&self) -> u32 {
        self.rows_cleared
    }

    /// Put a piece of `kind` at the spawn position.
    ///
    /// With randomized rotation enabled the piece is turned clockwise at most
    /// once. The caller is responsible for testing the
    /// result with [`GameState::spawn_blocked`].
    pub fn spawn(&mut self, kind: PieceKind) {
        self.active = spawn_piece(kind, &self.board, &mut self.queue, self.config.random_rotate);
        self.pieces += 1;
        debug!(
            "spawned {} at ({}, {})",
            kind.as_str(),
            self.active.x(),
            self.active.y()
        );
    }

    /// Spawn the next shape from the queue.
    pub fn spawn_next(&mut self) {
        let kind = self.queue.draw();
        self.spawn(kind);
    }

    /// Test the active piece in place, or one row lower.
    pub fn collides(&self, pending_drop: bool) -> bool {
        self.active.collides(&self.board, pending_drop)
    }

    /// True when the freshly spawned piece already overlaps something.
    pub fn spawn_blocked(&self) -> bool {
        self.collides(false)
    }

    /// Move the active piece down one row, or report that it has landed.
    pub fn advance(&mut self) -> bool {
        self.active.advance(&self.board)
    }

    /// Shift the active piece; undone when it collides. Returns whether it moved.
    pub fn try_shift(&mut self, dx: i8) -> bool {
        self.active.shift(dx);
        if self.collides(false) {
            self.active.shift(-dx);
            return false;
        }
        true
    }

    /// Rotate the active piece; undone when it collides. Returns whether it turned.
    pub fn try_rotate(&mut self, dir: RotateDir) -> bool {
        self.active.rotate(dir);
        if self.collides(false) {
            self.active.rotate(dir.opposite());
            return false;
        }
        true
    }

    /// Advance until the piece lands.
    pub fn drop_to_floor(&mut self) {
        while !self.advance() {}
    }

    /// Merge the landed piece, collapse full rows, and spawn the next piece.
    ///
    /// Returns the number of rows removed.
    pub fn land(&mut self) -> usize {
        self.active.merge_into(&mut self.board);
        let removed = self.board.scan_and_collapse();
        self.rows_cleared += removed as u32;
        self.spawn_next();
        removed
    }

    /// Fill `snap` with the board plus the active piece, without allocating.
    pub fn snapshot_into(&self, snap: &mut BoardSnapshot) {
        snap.copy_board(&self.board);
        self.active.overlay(&mut snap.rows, self.board.full_mask());
        snap.next = self.queue.peek();
    }

    pub fn snapshot(&self) -> BoardSnapshot {
        let mut snap = BoardSnapshot::default();
        self.snapshot_into(&mut snap);
        snap
    }
}
/// Spawn position for `kind`, turned when randomized rotation is on.
fn spawn_piece<R: RandomSource>(
    kind: PieceKind,
    board: &Board,
    queue: &mut PieceQueue<R>,
    random_rotate: bool,
) -> ActivePiece {
    let mut piece = ActivePiece::spawn(kind, board);
    if random_rotate {
        for _ in 0..queue.spawn_rotation() {
            piece.rotate(RotateDir::Cw);
        }
    }
    piece
}
