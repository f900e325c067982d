//! Block taxonomy: empty, rock, or one of six ore flavors.

/// The content of a single block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockKind {
    /// Removed (dug) or never solid.
    Air,
    /// Plain rock, removable but worthless.
    Rock,
    /// An ore block of the given kind.
    Ore(OreKind),
}

impl BlockKind {
    /// Whether this block has been removed.
    pub fn is_dug(self) -> bool {
        self == BlockKind::Air
    }

    /// Whether this block is an ore block.
    pub fn is_ore(self) -> bool {
        matches!(self, BlockKind::Ore(_))
    }
}

/// The ore kinds and their generation parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OreKind {
    Coal,
    Iron,
    Gold,
    Diamond,
    Redstone,
    Lapis,
}

/// Vein generation parameters of one ore kind within a standard 16x16 chunk
/// column.
#[derive(Debug, Clone, Copy)]
pub struct VeinSpec {
    /// Maximum number of blocks in one vein.
    pub max_vein_size: usize,
    /// Number of vein generation attempts per chunk column.
    pub veins_per_chunk: usize,
    /// Lowest absolute Y where a vein center may be placed.
    pub min_y: i32,
    /// Highest absolute Y where a vein center may be placed.
    pub max_y: i32,
}

impl OreKind {
    pub const ALL: [OreKind; 6] = [
        OreKind::Coal,
        OreKind::Iron,
        OreKind::Gold,
        OreKind::Diamond,
        OreKind::Redstone,
        OreKind::Lapis,
    ];

    pub fn vein_spec(self) -> VeinSpec {
        match self {
            OreKind::Coal => VeinSpec { max_vein_size: 16, veins_per_chunk: 20, min_y: 0, max_y: 128 },
            OreKind::Iron => VeinSpec { max_vein_size: 8, veins_per_chunk: 20, min_y: 0, max_y: 64 },
            OreKind::Gold => VeinSpec { max_vein_size: 8, veins_per_chunk: 2, min_y: 0, max_y: 32 },
            OreKind::Diamond => VeinSpec { max_vein_size: 7, veins_per_chunk: 1, min_y: 0, max_y: 16 },
            OreKind::Redstone => VeinSpec { max_vein_size: 7, veins_per_chunk: 8, min_y: 0, max_y: 16 },
            OreKind::Lapis => VeinSpec { max_vein_size: 6, veins_per_chunk: 1, min_y: 16, max_y: 16 },
        }
    }

    /// Whether vein centers follow the triangular Y distribution centered on
    /// `min_y` instead of the uniform `min_y..max_y` one.
    pub fn layered(self) -> bool {
        matches!(self, OreKind::Lapis)
    }

    /// One-character label, for textual rendering.
    pub fn symbol(self) -> char {
        match self {
            OreKind::Coal => 'C',
            OreKind::Iron => 'I',
            OreKind::Gold => 'G',
            OreKind::Diamond => 'D',
            OreKind::Redstone => 'R',
            OreKind::Lapis => 'L',
        }
    }
}
