use rand::{seq::IteratorRandom, Rng};

use super::state::{Grid, Position, Snake};

/// Draws per free-cell search before falling back to a full scan.
const SAMPLES_PER_CELL: usize = 4;

/// Pick a uniformly random cell not covered by the snake.
///
/// Rejection sampling does the work on a sparse board. Once the draws run out
/// the free cells are enumerated and one is chosen uniformly, so the call
/// always terminates. Returns `None` only when the snake covers every cell.
pub fn place_food<R: Rng>(rng: &mut R, grid: Grid, snake: &Snake) -> Option<Position> {
    if grid.cell_count() == 0 {
        return None;
    }

    for _ in 0..grid.cell_count() * SAMPLES_PER_CELL {
        let x = rng.gen_range(0..grid.width) as i32;
        let y = rng.gen_range(0..grid.height) as i32;
        let pos = Position::new(x, y);

        if !snake.occupies(pos) {
            return Some(pos);
        }
    }

    free_cells(grid, snake).choose(rng)
}

fn free_cells(grid: Grid, snake: &Snake) -> impl Iterator<Item = Position> + '_ {
    (0..grid.height as i32)
        .flat_map(move |y| (0..grid.width as i32).map(move |x| Position::new(x, y)))
        .filter(move |pos| !snake.occupies(*pos))
}
