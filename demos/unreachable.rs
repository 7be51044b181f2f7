use grid_bfs::ObstacleGrid;
use grid_util::grid::Grid;
use grid_util::point::Point;
use grid_util::Rect;

// A wall of blocked cells splits the grid in two, so no path exists and the
// search reports the failure without flooding the start's half of the grid.
fn main() {
    let mut obstacle_grid: ObstacleGrid = ObstacleGrid::new(10, 10, false);
    obstacle_grid.set_rectangle(&Rect::new(5, 0, 1, 10), true);
    obstacle_grid.generate_components();
    let start = Point::new(0, 5);
    let end = Point::new(9, 5);
    match obstacle_grid.shortest_path(start, end) {
        Ok(path) => println!("{:?}", path),
        Err(e) => println!("no path: {}", e),
    }
}
