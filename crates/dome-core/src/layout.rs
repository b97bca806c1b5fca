//! Tile placement on the discretized dome.
//!
//! Positions come from a fixed staggered pattern: one column per segment,
//! alternating between even and odd row offsets. Content is assigned
//! round-robin, followed by a single pass that pulls a different image forward
//! whenever two consecutive tiles would show the same one.

use crate::constants::{
    COLUMN_X_START, COLUMN_X_STEP, EVEN_COLUMN_YS, ODD_COLUMN_YS, TILE_SIZE,
};
use crate::content::ContentItem;
use fnv::FnvHashSet;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TilePosition {
    pub x: i32,
    pub y: i32,
    pub size_x: u32,
    pub size_y: u32,
}

/// Resting rotation of a tile on the sphere, in degrees.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BaseRotation {
    pub rotate_x: f32,
    pub rotate_y: f32,
}

impl TilePosition {
    pub fn base_rotation(&self, segments: u32) -> BaseRotation {
        let unit = 360.0 / segments.max(1) as f32 / 2.0;
        BaseRotation {
            rotate_y: unit * (self.x as f32 + (self.size_x as f32 - 1.0) / 2.0),
            rotate_x: unit * (self.y as f32 - (self.size_y as f32 - 1.0) / 2.0),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct GalleryTile {
    pub position: TilePosition,
    /// `None` for placeholder tiles when the pool is empty.
    pub item: Option<ContentItem>,
}

impl GalleryTile {
    pub fn src(&self) -> &str {
        self.item.as_ref().map(|i| i.src.as_str()).unwrap_or("")
    }

    pub fn note(&self) -> Option<&str> {
        self.item.as_ref().and_then(|i| i.note.as_deref())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LayoutWarning {
    PoolExceedsSlots { pool: usize, slots: usize },
}

#[derive(Clone, Debug, Default)]
pub struct Layout {
    pub segments: u32,
    pub tiles: Vec<GalleryTile>,
    pub warning: Option<LayoutWarning>,
}

impl Layout {
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&GalleryTile> {
        self.tiles.get(index)
    }
}

#[inline]
pub fn total_slots(segments: u32) -> usize {
    segments as usize * EVEN_COLUMN_YS.len()
}

pub fn tile_positions(segments: u32) -> Vec<TilePosition> {
    let mut out = Vec::with_capacity(total_slots(segments));
    for c in 0..segments as i32 {
        let x = COLUMN_X_START + COLUMN_X_STEP * c;
        let ys = if c % 2 == 0 {
            &EVEN_COLUMN_YS
        } else {
            &ODD_COLUMN_YS
        };
        out.extend(ys.iter().map(|&y| TilePosition {
            x,
            y,
            size_x: TILE_SIZE,
            size_y: TILE_SIZE,
        }));
    }
    out
}

pub fn distinct_sources(pool: &[ContentItem]) -> usize {
    pool.iter()
        .map(|item| item.src.as_str())
        .collect::<FnvHashSet<_>>()
        .len()
}

pub fn build_layout(pool: &[ContentItem], segments: u32) -> Layout {
    let positions = tile_positions(segments);
    let slots = positions.len();

    if pool.is_empty() {
        return Layout {
            segments,
            tiles: positions
                .into_iter()
                .map(|position| GalleryTile {
                    position,
                    item: None,
                })
                .collect(),
            warning: None,
        };
    }

    let warning = (pool.len() > slots).then(|| {
        log::warn!(
            "[layout] image count ({}) exceeds available tiles ({}); some images will not be shown",
            pool.len(),
            slots
        );
        LayoutWarning::PoolExceedsSlots {
            pool: pool.len(),
            slots,
        }
    });

    let mut assigned: Vec<&ContentItem> = (0..slots).map(|i| &pool[i % pool.len()]).collect();
    repair_adjacent_duplicates(&mut assigned);

    let tiles = positions
        .into_iter()
        .zip(assigned)
        .map(|(position, item)| GalleryTile {
            position,
            item: Some(item.clone()),
        })
        .collect();

    Layout {
        segments,
        tiles,
        warning,
    }
}

// Best effort: a pool with a single distinct image keeps its duplicates.
fn repair_adjacent_duplicates(items: &mut [&ContentItem]) {
    for i in 1..items.len() {
        if items[i].src != items[i - 1].src {
            continue;
        }
        if let Some(j) = (i + 1..items.len()).find(|&j| items[j].src != items[i].src) {
            items.swap(i, j);
        }
    }
}
