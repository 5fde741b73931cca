use itertools::iproduct;
use log::{debug, trace};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{RngCore, SeedableRng};

use super::settings::{BOARD_SIZE, GRID_COLS, GRID_ROWS, WINDOW_HEIGHT, WINDOW_WIDTH};
use crate::model::{Canvas, Dimensions, ImageId, Point, Rect, Tile};

/// Each face image twice, in catalog order.
pub fn paired_catalog() -> Vec<ImageId> {
    ImageId::faces().flat_map(|face| [face, face]).collect()
}

#[derive(Clone)]
pub struct Board {
    tiles: Vec<Tile>,
    n_rows: usize,
    n_cols: usize,
    pub seed: u64,
}

impl Board {
    /// Cell size derived from the window: the board leaves one column free for the score.
    pub fn cell_dimensions(surface: Dimensions) -> Dimensions {
        Dimensions {
            width: surface.width / BOARD_SIZE as i32,
            height: surface.height / (BOARD_SIZE as i32 - 1),
        }
    }

    pub fn new(seed: Option<u64>) -> Self {
        let seed = seed.unwrap_or_else(|| rand::rng().next_u64());
        let mut rng = StdRng::seed_from_u64(seed);

        let mut images = paired_catalog();
        images.shuffle(&mut rng);

        let board = Self::with_layout(
            &images,
            Dimensions {
                width: WINDOW_WIDTH,
                height: WINDOW_HEIGHT,
            },
            seed,
        );
        debug!(target: "board", "Built {} tiles from seed {}", board.tiles.len(), seed);
        board
    }

    /// Assigns `images` to cells in row-major order.
    pub fn with_layout(images: &[ImageId], surface: Dimensions, seed: u64) -> Self {
        assert_eq!(
            images.len(),
            GRID_ROWS * GRID_COLS,
            "need exactly one image per cell"
        );
        let cell = Self::cell_dimensions(surface);

        let tiles: Vec<Tile> = iproduct!(0..GRID_ROWS, 0..GRID_COLS)
            .zip(images.iter())
            .map(|((row, col), &image)| {
                let bounds = Rect::new(
                    col as i32 * cell.width,
                    row as i32 * cell.height,
                    cell.width,
                    cell.height,
                );
                trace!(target: "board", "Cell ({}, {}) holds {:?}", row, col, image);
                Tile::new(bounds, ImageId::HIDDEN, image)
            })
            .collect();

        Self {
            tiles,
            n_rows: GRID_ROWS,
            n_cols: GRID_COLS,
            seed,
        }
    }

    pub fn total_pairs(&self) -> usize {
        self.tiles.len() / 2
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    pub fn get(&self, row: usize, col: usize) -> &Tile {
        &self.tiles[row * self.n_cols + col]
    }

    pub fn expose_at(&mut self, point: Point) {
        for tile in self.tiles.iter_mut() {
            tile.expose(point);
        }
    }

    /// Indices of face-up tiles that have not been matched yet.
    pub fn awaiting_match(&self) -> Vec<usize> {
        self.tiles
            .iter()
            .enumerate()
            .filter(|(_, tile)| tile.is_awaiting_match())
            .map(|(index, _)| index)
            .collect()
    }

    pub fn tile_mut(&mut self, index: usize) -> &mut Tile {
        &mut self.tiles[index]
    }

    pub fn tile(&self, index: usize) -> &Tile {
        &self.tiles[index]
    }

    pub fn render(&self, canvas: &mut dyn Canvas) {
        for tile in &self.tiles {
            tile.render(canvas);
        }
    }
}

impl std::fmt::Debug for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Board (seed {}):", self.seed)?;
        for row in 0..self.n_rows {
            for col in 0..self.n_cols {
                write!(f, "{:>6}", format!("{:?}", self.get(row, col).image_identity()))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
