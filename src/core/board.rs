//! Board geometry and the special-tile table.

use super::constants::{BOARD_CELLS, FINISH_CELL};
use serde::{Deserialize, Serialize};

/// Direction a special tile sends the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TileKind {
    Ladder,
    Snake,
}

impl TileKind {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Ladder => "Renewable Ladder",
            Self::Snake => "Non-renewable Snake",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpecialTile {
    pub position: u8,
    pub kind: TileKind,
    pub destination: u8,
}

pub const SPECIAL_TILES: [SpecialTile; 4] = [
    SpecialTile {
        position: 7,
        kind: TileKind::Ladder,
        destination: 14,
    },
    SpecialTile {
        position: 12,
        kind: TileKind::Snake,
        destination: 5,
    },
    SpecialTile {
        position: 18,
        kind: TileKind::Ladder,
        destination: 22,
    },
    SpecialTile {
        position: 20,
        kind: TileKind::Snake,
        destination: 13,
    },
];

/// Advance `from` by `steps`, capped at the finish cell. No overshoot.
pub fn advance_capped(from: u8, steps: u8) -> u8 {
    from.saturating_add(steps).min(FINISH_CELL)
}

/// The special-tile layout an engine plays on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    tiles: Vec<SpecialTile>,
}

impl Default for Board {
    fn default() -> Self {
        Self {
            tiles: SPECIAL_TILES.to_vec(),
        }
    }
}

impl Board {
    /// Board with a custom tile table, checked with [`validate_special_tiles`].
    pub fn new(tiles: Vec<SpecialTile>) -> Result<Self, TileTableError> {
        validate_special_tiles(&tiles)?;
        Ok(Self { tiles })
    }

    pub fn tile_at(&self, position: u8) -> Option<&SpecialTile> {
        self.tiles.iter().find(|t| t.position == position)
    }
}

/// Problems found in a special-tile table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TileTableError {
    OutOfBounds { position: u8 },
    DuplicatePosition { position: u8 },
    LadderNotForward { position: u8, destination: u8 },
    SnakeNotBackward { position: u8, destination: u8 },
}

/// Check a tile table against the board invariants.
///
/// The engine does not call this at runtime; the shipped table is verified in tests.
pub fn validate_special_tiles(tiles: &[SpecialTile]) -> Result<(), TileTableError> {
    for (i, tile) in tiles.iter().enumerate() {
        if tile.position >= BOARD_CELLS || tile.destination >= BOARD_CELLS {
            return Err(TileTableError::OutOfBounds {
                position: tile.position,
            });
        }
        if tiles[..i].iter().any(|t| t.position == tile.position) {
            return Err(TileTableError::DuplicatePosition {
                position: tile.position,
            });
        }
        match tile.kind {
            TileKind::Ladder if tile.destination <= tile.position => {
                return Err(TileTableError::LadderNotForward {
                    position: tile.position,
                    destination: tile.destination,
                });
            }
            TileKind::Snake if tile.destination >= tile.position => {
                return Err(TileTableError::SnakeNotBackward {
                    position: tile.position,
                    destination: tile.destination,
                });
            }
            _ => {}
        }
    }
    Ok(())
}
