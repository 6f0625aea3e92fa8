//! Game session - board, active piece, score, and lifecycle
//!
//! `GameSession` owns every piece of mutable game state and exposes one
//! method per command, so all mutation flows through a single place.
//! Nothing here performs I/O and nothing is fallible: invalid moves and
//! rotations are silent no-ops, and the only terminal outcome is the
//! normal `GameOver` phase transition.

use crate::core::{line_points, Board, GravityTimer, Shape, SimpleRng};
use crate::types::{
    Command, LineClear, Phase, PieceKind, Rgb, BOARD_COLS, BOARD_ROWS, GRAVITY_INTERVAL_MS,
    SPAWN_ROW,
};

/// The currently falling piece.
///
/// `row`/`col` locate the top-left of the shape's bounding box on the
/// board; `row` may be negative while the piece is entering from above.
/// The color is assigned at spawn and is purely cosmetic - locked cells
/// remember only the kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tetromino {
    pub kind: PieceKind,
    pub shape: Shape,
    pub row: i8,
    pub col: i8,
    pub color: Rgb,
}

impl Tetromino {
    /// A piece of the given kind at its spawn position: two rows above
    /// the visible board, horizontally centered.
    pub fn spawn(kind: PieceKind, color: Rgb) -> Self {
        let shape = Shape::canonical(kind);
        let col = (BOARD_COLS as i8 - shape.size() as i8) / 2;
        Self {
            kind,
            shape,
            row: SPAWN_ROW,
            col,
            color,
        }
    }

    /// Board coordinates of every filled cell at the current position
    pub fn cells(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        self.shape.cells().map(|(r, c)| (self.row + r, self.col + c))
    }
}

/// Complete game state for one session
#[derive(Debug, Clone)]
pub struct GameSession {
    board: Board,
    active: Tetromino,
    score: u32,
    phase: Phase,
    rng: SimpleRng,
    gravity: GravityTimer,
    last_clear: Option<LineClear>,
}

impl GameSession {
    /// Create a running session with the first piece already spawned
    pub fn new(seed: u32) -> Self {
        let mut rng = SimpleRng::new(seed);
        let active = Self::draw_piece(&mut rng);
        Self {
            board: Board::new(),
            active,
            score: 0,
            phase: Phase::Running,
            rng,
            gravity: GravityTimer::new(GRAVITY_INTERVAL_MS),
            last_clear: None,
        }
    }

    fn draw_piece(rng: &mut SimpleRng) -> Tetromino {
        let kind = rng.next_kind();
        let color = rng.next_color();
        Tetromino::spawn(kind, color)
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Direct board access for test setup and tooling
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn active(&self) -> &Tetromino {
        &self.active
    }

    /// Replace the active piece (test setup and tooling)
    pub fn set_active(&mut self, piece: Tetromino) {
        self.active = piece;
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The most recent line-clear award, if any since the last restart
    pub fn last_clear(&self) -> Option<LineClear> {
        self.last_clear
    }

    /// The collision predicate every movement and rotation is checked
    /// against. A filled shape cell collides when it would leave the
    /// side or bottom walls, or land on a locked cell. Rows above the
    /// visible board never collide with board contents.
    fn collides(&self, row: i8, col: i8, shape: &Shape) -> bool {
        shape.cells().any(|(r, c)| {
            let board_row = row + r;
            let board_col = col + c;
            if board_col < 0 || board_col >= BOARD_COLS as i8 || board_row >= BOARD_ROWS as i8 {
                return true;
            }
            board_row >= 0 && self.board.is_occupied(board_row, board_col)
        })
    }

    /// Shift the active piece one column left; no-op on collision.
    pub fn move_left(&mut self) {
        self.shift(-1);
    }

    /// Shift the active piece one column right; no-op on collision.
    pub fn move_right(&mut self) {
        self.shift(1);
    }

    fn shift(&mut self, dcol: i8) {
        if self.phase != Phase::Running {
            return;
        }
        let col = self.active.col + dcol;
        if !self.collides(self.active.row, col, &self.active.shape) {
            self.active.col = col;
        }
    }

    /// Descend one row. On collision the piece locks at its current
    /// position instead. Returns true when the piece locked.
    pub fn soft_drop(&mut self) -> bool {
        if self.phase != Phase::Running {
            return false;
        }
        if self.collides(self.active.row + 1, self.active.col, &self.active.shape) {
            self.lock_active();
            true
        } else {
            self.active.row += 1;
            false
        }
    }

    /// Descend to the lowest collision-free row, then lock immediately.
    pub fn hard_drop(&mut self) {
        if self.phase != Phase::Running {
            return;
        }
        while !self.collides(self.active.row + 1, self.active.col, &self.active.shape) {
            self.active.row += 1;
        }
        self.lock_active();
    }

    /// Rotate the active piece a quarter turn clockwise. A rotation that
    /// would collide is rejected outright - no kick/offset search.
    pub fn rotate(&mut self) {
        if self.phase != Phase::Running {
            return;
        }
        let rotated = self.active.shape.rotated_cw();
        if !self.collides(self.active.row, self.active.col, &rotated) {
            self.active.shape = rotated;
        }
    }

    /// Commit the active piece into the board, resolve line clears and
    /// scoring, and spawn the next piece.
    ///
    /// If any covered cell is still above the visible board, the session
    /// ends instead and the board is left untouched. This is the sole
    /// game-over trigger.
    fn lock_active(&mut self) {
        if self.active.cells().any(|(row, _)| row < 0) {
            self.phase = Phase::GameOver;
            self.gravity.stop();
            return;
        }

        let kind = self.active.kind;
        for (row, col) in self.active.cells() {
            self.board.fill(row, col, kind);
        }

        let cleared = self.board.clear_full_rows();
        if !cleared.is_empty() {
            let points = line_points(cleared.len());
            self.score += points;
            self.last_clear = Some(LineClear {
                rows: cleared.len() as u32,
                points,
            });
        }

        self.active = Self::draw_piece(&mut self.rng);
    }

    /// Toggle between Running and Paused. Ignored once the session is
    /// over. Resuming starts a fresh gravity interval.
    pub fn toggle_pause(&mut self) {
        match self.phase {
            Phase::Running => {
                self.phase = Phase::Paused;
                self.gravity.stop();
            }
            Phase::Paused => {
                self.phase = Phase::Running;
                self.gravity.start();
            }
            Phase::GameOver => {}
        }
    }

    /// Reinitialize board, piece, score, and timer for a new game.
    /// The RNG keeps its evolved state, so each game gets a fresh
    /// piece sequence.
    pub fn restart(&mut self) {
        self.board.clear();
        self.score = 0;
        self.last_clear = None;
        self.phase = Phase::Running;
        self.active = Self::draw_piece(&mut self.rng);
        self.gravity.start();
    }

    /// Advance the gravity timer by elapsed milliseconds and apply one
    /// forced descent per whole interval. Returns true when the board
    /// or piece changed.
    pub fn tick(&mut self, elapsed_ms: u32) -> bool {
        if self.phase != Phase::Running {
            return false;
        }
        let ticks = self.gravity.advance(elapsed_ms);
        for _ in 0..ticks {
            self.soft_drop();
            if self.phase != Phase::Running {
                break;
            }
        }
        ticks > 0
    }

    /// Apply a command from the input collaborator
    pub fn apply(&mut self, command: Command) {
        match command {
            Command::MoveLeft => self.move_left(),
            Command::MoveRight => self.move_right(),
            Command::SoftDrop => {
                if self.soft_drop() {
                    // A user-driven lock starts the next interval fresh,
                    // same as a gravity-driven one would.
                    self.gravity.reset();
                }
            }
            Command::HardDrop => {
                self.hard_drop();
                self.gravity.reset();
            }
            Command::Rotate => self.rotate(),
            Command::TogglePause => self.toggle_pause(),
            Command::Restart => self.restart(),
        }
    }

    /// Write the render-facing state into a reusable snapshot
    pub fn snapshot_into(&self, out: &mut crate::core::snapshot::SessionSnapshot) {
        for row in 0..BOARD_ROWS as usize {
            for col in 0..BOARD_COLS as usize {
                out.board[row][col] = self
                    .board
                    .get(row as i8, col as i8)
                    .unwrap_or(None);
            }
        }
        out.active = crate::core::snapshot::ActiveSnapshot::from(&self.active);
        out.score = self.score;
        out.phase = self.phase;
        out.last_clear = self.last_clear;
    }

    pub fn snapshot(&self) -> crate::core::snapshot::SessionSnapshot {
        let mut s = crate::core::snapshot::SessionSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}
