//! Grid tests - bounds checking and bulk passes

use tui_maze::core::{Grid, MazeError};
use tui_maze::types::{Point, Tile};

#[test]
fn test_grid_new_filled() {
    let grid = Grid::new(7, 5, Tile::Road);
    assert_eq!(grid.width(), 7);
    assert_eq!(grid.height(), 5);

    for y in 0..5 {
        for x in 0..7 {
            assert_eq!(grid.get(x, y), Ok(Tile::Road), "Cell ({}, {})", x, y);
        }
    }
}

#[test]
fn test_grid_get_out_of_bounds() {
    let grid = Grid::new(7, 5, Tile::Road);

    // Negative coordinates
    assert!(matches!(grid.get(-1, 0), Err(MazeError::OutOfBounds { .. })));
    assert!(matches!(grid.get(0, -1), Err(MazeError::OutOfBounds { .. })));

    // Beyond bounds
    assert!(matches!(grid.get(7, 0), Err(MazeError::OutOfBounds { .. })));
    assert!(matches!(grid.get(0, 5), Err(MazeError::OutOfBounds { .. })));
}

#[test]
fn test_grid_set_and_get() {
    let mut grid = Grid::new(5, 5, Tile::Road);

    grid.set(3, 1, Tile::Wall).unwrap();
    assert_eq!(grid.get(3, 1), Ok(Tile::Wall));

    grid.set_at(Point::new(2, 2), Tile::Pillar).unwrap();
    assert_eq!(grid.get_at(Point::new(2, 2)), Ok(Tile::Pillar));

    // Overwrite unconditionally
    grid.set(3, 1, Tile::Road).unwrap();
    assert_eq!(grid.get(3, 1), Ok(Tile::Road));
}

#[test]
fn test_grid_set_out_of_bounds_is_error() {
    let mut grid = Grid::new(5, 5, Tile::Road);
    assert_eq!(
        grid.set(5, 5, Tile::Wall),
        Err(MazeError::OutOfBounds {
            x: 5,
            y: 5,
            width: 5,
            height: 5
        })
    );
    assert!(grid.set_at(Point::new(-1, 2), Tile::Wall).is_err());
}

#[test]
fn test_grid_fill() {
    let mut grid = Grid::new(4, 3, Tile::Road);
    grid.fill(Tile::Wall);
    assert_eq!(grid.count(Tile::Wall), 12);
    assert_eq!(grid.count(Tile::Road), 0);
}

#[test]
fn test_grid_each_visits_row_major() {
    let mut grid = Grid::new(3, 2, 0u8);
    grid.set(2, 0, 7).unwrap();
    grid.set(0, 1, 9).unwrap();

    let mut seen = Vec::new();
    grid.each(|x, y, v| seen.push((x, y, v)));
    assert_eq!(
        seen,
        vec![
            (0, 0, 0),
            (1, 0, 0),
            (2, 0, 7),
            (0, 1, 9),
            (1, 1, 0),
            (2, 1, 0)
        ]
    );
}

#[test]
fn test_grid_contains() {
    let grid = Grid::new(3, 3, false);
    assert!(grid.contains(0, 0));
    assert!(grid.contains(2, 2));
    assert!(!grid.contains(3, 2));
    assert!(!grid.contains(-1, 1));
}
