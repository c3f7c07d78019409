use crate::maze::{Maze, disjoint_set::DisjointSet};
use rand::{Rng, seq::SliceRandom};

/// Carve `maze` into a uniformly random spanning tree.
///
/// Edges are visited in a uniformly shuffled order; an edge is opened when its two cells
/// still belong to different sets, otherwise it would close a cycle and stays a wall.
/// The maze's edge list keeps its row-major order, only the visiting order is shuffled.
pub fn randomized_kruskal<R: Rng + ?Sized>(maze: &mut Maze, rng: &mut R) {
    let mut uf = DisjointSet::new(maze.cell_count());

    // Shuffle edges randomly
    let mut order: Vec<usize> = (0..maze.edges().len()).collect();
    order.shuffle(rng);

    let mut opened = 0usize;
    for index in order {
        let (cell1, cell2) = maze.edges()[index].cells();
        let idx1 = maze.index_of(cell1);
        let idx2 = maze.index_of(cell2);

        // If cells are not yet connected, remove the wall between them
        if uf.find(idx1) != uf.find(idx2) {
            uf.union(idx1, idx2);
            maze.open_edge(index);
            opened += 1;
        }
    }

    tracing::debug!(
        "[kruskal] Carved {}x{} maze: {} of {} edges opened",
        maze.width(),
        maze.height(),
        opened,
        maze.edges().len()
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::maze::{Coord, get_neighbors};
    use rand::{SeedableRng, rngs::StdRng};

    fn carve(width: u16, height: u16, seed: u64) -> Maze {
        let mut maze = Maze::new(width, height).unwrap();
        randomized_kruskal(&mut maze, &mut StdRng::seed_from_u64(seed));
        maze
    }

    /// Counts the cells reachable from the start over open edges, failing on any cycle.
    fn count_tree_cells(maze: &Maze) -> usize {
        let mut seen = crate::maze::Grid::new(maze.width(), maze.height(), false);
        let mut stack: Vec<(Coord, Option<Coord>)> = vec![(maze.start(), None)];
        seen[maze.start()] = true;
        let mut count = 1;
        while let Some((cell, parent)) = stack.pop() {
            for next in get_neighbors(cell, maze) {
                if !maze.is_connected(cell, next) || Some(next) == parent {
                    continue;
                }
                assert!(!seen[next], "cycle through {:?}", next);
                seen[next] = true;
                count += 1;
                stack.push((next, Some(cell)));
            }
        }
        count
    }

    #[test]
    fn test_4x4_open_edges() {
        let maze = carve(4, 4, 7);
        assert_eq!(maze.cell_count(), 16);
        assert_eq!(maze.edges().len(), 24);
        assert_eq!(maze.open_edge_count(), 15);
    }

    #[test]
    fn test_single_edge_always_open() {
        for seed in 0..10 {
            let maze = carve(2, 1, seed);
            assert_eq!(maze.edges().len(), 1);
            assert!(maze.edges()[0].is_open());
        }
    }

    #[test]
    fn test_single_cell_has_no_edges() {
        let maze = carve(1, 1, 0);
        assert!(maze.edges().is_empty());
        assert_eq!(maze.open_edge_count(), 0);
    }

    #[test]
    fn test_spanning_tree_property() {
        for (seed, (w, h)) in [(1, 10), (10, 1), (5, 5), (13, 8), (30, 30)]
            .into_iter()
            .enumerate()
        {
            let maze = carve(w, h, seed as u64);
            assert_eq!(maze.open_edge_count(), maze.cell_count() - 1);
            assert_eq!(count_tree_cells(&maze), maze.cell_count());
        }
    }

    #[test]
    fn test_different_seeds_give_different_mazes() {
        let a = carve(12, 12, 1);
        let b = carve(12, 12, 2);
        assert_ne!(a.edges(), b.edges());
    }
}
