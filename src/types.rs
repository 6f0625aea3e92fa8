//! Shared types and constants
//!
//! Plain data types with no external dependencies, used by every layer.

/// Playfield dimensions (rows x columns).
pub const BOARD_ROWS: u8 = 20;
pub const BOARD_COLS: u8 = 10;

/// Gravity interval: one forced descent every 700ms while running.
pub const GRAVITY_INTERVAL_MS: u32 = 700;

/// Fixed frame tick driving the event loop (milliseconds).
pub const TICK_MS: u32 = 16;

/// Row offset a freshly spawned piece starts at (partially above the board).
pub const SPAWN_ROW: i8 = -2;

/// Points awarded per lock event, indexed by number of rows cleared (0..=4).
pub const LINE_SCORES: [u32; 5] = [0, 10, 25, 35, 50];

/// Tetromino piece kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    O,
    L,
    J,
    S,
    Z,
    T,
    I,
}

impl PieceKind {
    /// All seven kinds, in canonical order.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::O,
        PieceKind::L,
        PieceKind::J,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::T,
        PieceKind::I,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::O => "O",
            PieceKind::L => "L",
            PieceKind::J => "J",
            PieceKind::S => "S",
            PieceKind::Z => "Z",
            PieceKind::T => "T",
            PieceKind::I => "I",
        }
    }
}

/// Cell on the board (None = empty, Some = locked piece kind)
pub type Cell = Option<PieceKind>;

/// Session phase. `Running` is initial; `GameOver` is terminal until restart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Running,
    Paused,
    GameOver,
}

/// Engine command surface, produced by the input collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    MoveLeft,
    MoveRight,
    SoftDrop,
    HardDrop,
    Rotate,
    TogglePause,
    Restart,
}

/// 24-bit RGB color.
///
/// Lives here (not in `term`) because the active piece's display color is
/// session state: assigned randomly at spawn, cosmetic only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Most recent line-clear award, consumed by the score display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineClear {
    pub rows: u32,
    pub points: u32,
}
