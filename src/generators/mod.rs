pub mod kruskal;

use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::{
    error::MazeError,
    maze::{Coord, Edge, Maze},
};

/// Get a random number generator, optionally seeded for reproducibility.
pub fn get_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_os_rng(),
    }
}

/// Generate a perfect maze. The same `seed` always yields the same maze.
pub fn generate(width: u16, height: u16, seed: Option<u64>) -> Result<Maze, MazeError> {
    generate_with_rng(width, height, &mut get_rng(seed))
}

/// Generate a perfect maze drawing edge weights from `rng`.
pub fn generate_with_rng<R: Rng>(
    width: u16,
    height: u16,
    rng: &mut R,
) -> Result<Maze, MazeError> {
    let edges = candidate_edges(width, height, rng)?;
    let coords = grid_coords(width, height);
    tracing::debug!(
        "[generate] {}x{} grid with {} candidate edges",
        width,
        height,
        edges.len()
    );
    let tree = kruskal::minimum_spanning_tree(&coords, edges)?;
    Maze::with_edges(width, height, tree)
}

/// All coordinates of a `width` x `height` grid in row-major order, matching [`NodeId`] order.
///
/// [`NodeId`]: crate::maze::NodeId
fn grid_coords(width: u16, height: u16) -> Vec<Coord> {
    (0..height)
        .flat_map(|row| (0..width).map(move |col| Coord::new(row, col)))
        .collect()
}

/// Every lattice edge of a `width` x `height` grid, each with a distinct random weight.
///
/// Horizontal edges come first (row by row), then vertical edges (column by column).
/// Weights are drawn without replacement from `0..2·W·H − W − H`.
pub fn candidate_edges<R: Rng>(
    width: u16,
    height: u16,
    rng: &mut R,
) -> Result<Vec<Edge>, MazeError> {
    if width == 0 || height == 0 {
        return Err(MazeError::InvalidDimensions { width, height });
    }
    let (w, h) = (u64::from(width), u64::from(height));
    let num_edges = u32::try_from(2 * w * h - w - h)
        .map_err(|_| MazeError::InvalidDimensions { width, height })?;

    let mut pool = (0..num_edges).collect::<Vec<u32>>();
    let mut draw = || {
        let idx = rng.random_range(0..pool.len());
        pool.swap_remove(idx)
    };

    let mut edges = Vec::with_capacity(num_edges as usize);
    for row in 0..height {
        for col in 0..width - 1 {
            edges.push(Edge::new(
                Coord::new(row, col),
                Coord::new(row, col + 1),
                draw(),
            ));
        }
    }
    for col in 0..width {
        for row in 0..height - 1 {
            edges.push(Edge::new(
                Coord::new(row, col),
                Coord::new(row + 1, col),
                draw(),
            ));
        }
    }
    Ok(edges)
}
