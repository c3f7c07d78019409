use rand::{Rng, SeedableRng, rngs::StdRng};

mod kruskal;

pub use kruskal::randomized_kruskal;

use crate::{error::MazeError, maze::Maze};

/// Get a random number generator, optionally seeded for reproducibility.
pub fn get_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_os_rng(),
    }
}

/// Build a fresh `width x height` maze and carve it with randomized Kruskal.
pub fn generate_maze<R: Rng + ?Sized>(
    width: u16,
    height: u16,
    rng: &mut R,
) -> Result<Maze, MazeError> {
    let mut maze = Maze::new(width, height)?;
    randomized_kruskal(&mut maze, rng);
    Ok(maze)
}

/// Same as [`generate_maze`] with a throwaway RNG built from `seed`.
pub fn generate_maze_seeded(width: u16, height: u16, seed: Option<u64>) -> Result<Maze, MazeError> {
    generate_maze(width, height, &mut get_rng(seed))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_generation_is_reproducible() {
        let a = generate_maze_seeded(9, 7, Some(42)).unwrap();
        let b = generate_maze_seeded(9, 7, Some(42)).unwrap();
        assert_eq!(a.edges(), b.edges());
    }

    #[test]
    fn test_generate_rejects_zero_dimensions() {
        assert_eq!(
            generate_maze_seeded(0, 3, Some(1)).unwrap_err(),
            MazeError::InvalidDimensions {
                width: 0,
                height: 3
            }
        );
    }

    #[test]
    fn test_os_rng_generation() {
        let maze = generate_maze_seeded(6, 6, None).unwrap();
        assert_eq!(maze.open_edge_count(), 35);
    }
}
