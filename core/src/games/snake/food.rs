use std::collections::HashSet;

use rand::Rng;

use super::settings::GameConfig;
use super::types::Point;

/// Every board cell not covered by `body`, in row-major order.
pub fn free_cells(config: &GameConfig, body: &[Point]) -> Vec<Point> {
    let occupied: HashSet<Point> = body.iter().copied().collect();
    let mut cells = Vec::with_capacity(config.cell_count().saturating_sub(occupied.len()));

    for y in 0..config.height() {
        for x in 0..config.width() {
            let cell = Point::new(x, y);
            if !occupied.contains(&cell) {
                cells.push(cell);
            }
        }
    }

    cells
}

/// Picks a uniformly random free cell, or `None` when the body covers the whole board.
pub fn place_food<R: Rng + ?Sized>(
    config: &GameConfig,
    body: &[Point],
    rng: &mut R,
) -> Option<Point> {
    let cells = free_cells(config, body);
    if cells.is_empty() {
        return None;
    }

    Some(cells[rng.random_range(0..cells.len())])
}

#[cfg(test)]
pub(crate) mod test_rng {
    use rand::RngCore;

    /// Always yields zero bits, so every range draw lands on its lower bound.
    pub struct FirstCellRng;

    impl RngCore for FirstCellRng {
        fn next_u32(&mut self) -> u32 {
            0
        }

        fn next_u64(&mut self) -> u64 {
            0
        }

        fn fill_bytes(&mut self, dst: &mut [u8]) {
            dst.fill(0);
        }
    }
}
