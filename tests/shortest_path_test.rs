/// Checks the search entry point against concrete grids: degenerate and blocked
/// endpoints, exact shortest paths on small open grids, and walls that fully
/// partition start from end.
use grid_bfs::{ObstacleGrid, SearchError};
use grid_util::grid::Grid;
use grid_util::point::Point;
use grid_util::rect::Rect;

#[test]
fn open_3x3_corner_to_corner() {
    let obstacle_grid: ObstacleGrid = ObstacleGrid::new(3, 3, false);
    let path = obstacle_grid
        .shortest_path(Point::new(0, 0), Point::new(2, 2))
        .unwrap();
    assert_eq!(path.len(), 5);
    // With north/south/west/east expansion the south edge is walked first.
    assert_eq!(
        path,
        vec![
            Point::new(0, 0),
            Point::new(0, 1),
            Point::new(0, 2),
            Point::new(1, 2),
            Point::new(2, 2),
        ]
    );
}

#[test]
fn single_row_has_one_path() {
    let obstacle_grid: ObstacleGrid = ObstacleGrid::new(5, 1, false);
    let path = obstacle_grid
        .shortest_path(Point::new(0, 0), Point::new(4, 0))
        .unwrap();
    assert_eq!(
        path,
        vec![
            Point::new(0, 0),
            Point::new(1, 0),
            Point::new(2, 0),
            Point::new(3, 0),
            Point::new(4, 0),
        ]
    );
}

#[test]
fn start_is_end_succeeds_even_when_blocked() {
    let mut obstacle_grid: ObstacleGrid = ObstacleGrid::new(3, 3, false);
    obstacle_grid.set(1, 1, true);
    let p = Point::new(1, 1);
    assert_eq!(obstacle_grid.shortest_path(p, p), Ok(vec![p]));
}

#[test]
fn blocked_endpoints_are_rejected() {
    let mut obstacle_grid: ObstacleGrid = ObstacleGrid::new(3, 3, false);
    obstacle_grid.set(0, 0, true);
    obstacle_grid.set(2, 2, true);
    let start = Point::new(0, 0);
    let end = Point::new(2, 2);
    // The start check comes first when both endpoints are blocked.
    assert_eq!(
        obstacle_grid.shortest_path(start, end),
        Err(SearchError::InvalidStart)
    );
    assert_eq!(
        obstacle_grid.shortest_path(Point::new(1, 1), end),
        Err(SearchError::InvalidEnd)
    );
}

#[test]
fn wall_partition_is_unreachable() {
    // 3x3 grid with the middle row fully blocked.
    let mut obstacle_grid: ObstacleGrid = ObstacleGrid::new(3, 3, false);
    for x in 0..3 {
        obstacle_grid.set(x, 1, true);
    }
    obstacle_grid.generate_components();
    assert_eq!(
        obstacle_grid.shortest_path(Point::new(0, 0), Point::new(0, 2)),
        Err(SearchError::Unreachable)
    );
}

#[test]
fn stale_components_fall_back_to_the_flood() {
    // Same partition, but the components are left dirty: the result is decided
    // by the flood instead of the component pre-check.
    let mut obstacle_grid: ObstacleGrid = ObstacleGrid::new(3, 3, false);
    for x in 0..3 {
        obstacle_grid.set(x, 1, true);
    }
    assert!(obstacle_grid.components_dirty);
    assert_eq!(
        obstacle_grid.shortest_path(Point::new(0, 0), Point::new(0, 2)),
        Err(SearchError::Unreachable)
    );
}

#[test]
fn carved_room_goes_around_the_obstacle() {
    // #####
    // #S  #
    // # # #
    // #  E#
    // #####
    let mut obstacle_grid: ObstacleGrid = ObstacleGrid::new(5, 5, true);
    obstacle_grid.set_rectangle(&Rect::new(1, 1, 3, 3), false);
    obstacle_grid.set(2, 2, true);
    obstacle_grid.generate_components();
    let path = obstacle_grid
        .shortest_path(Point::new(1, 1), Point::new(3, 3))
        .unwrap();
    assert_eq!(path.len(), 5);
    assert_eq!(path[0], Point::new(1, 1));
    assert_eq!(path[4], Point::new(3, 3));
    for pair in path.windows(2) {
        let step = (pair[0].x - pair[1].x).abs() + (pair[0].y - pair[1].y).abs();
        assert_eq!(step, 1);
        assert!(!obstacle_grid.get(pair[1].x as usize, pair[1].y as usize));
    }
}

#[test]
fn opening_a_gap_reconnects_the_halves() {
    let mut obstacle_grid: ObstacleGrid = ObstacleGrid::new(5, 5, false);
    let start = Point::new(0, 2);
    let end = Point::new(4, 2);
    for y in 0..5 {
        obstacle_grid.set(2, y, true);
    }
    obstacle_grid.update();
    assert_eq!(
        obstacle_grid.shortest_path(start, end),
        Err(SearchError::Unreachable)
    );
    // Unblocking joins the split components without a full regeneration.
    obstacle_grid.set(2, 0, false);
    assert!(!obstacle_grid.components_dirty);
    assert!(obstacle_grid.reachable(&start, &end));
    let path = obstacle_grid.shortest_path(start, end).unwrap();
    assert_eq!(path.len(), 9);
}
