use grid_bfs::ObstacleGrid;
use grid_util::grid::Grid;
use grid_util::point::Point;
use grid_util::Rect;

// Mirrors an interactive session: block a wall, search, then open a gap in the
// wall and search again. update() regenerates the components only when a
// blocked cell may have split one.
fn main() {
    let mut obstacle_grid: ObstacleGrid = ObstacleGrid::new(5, 5, false);
    let start = Point::new(0, 2);
    let end = Point::new(4, 2);

    obstacle_grid.set_rectangle(&Rect::new(2, 0, 1, 5), true);
    obstacle_grid.update();
    println!("{}", obstacle_grid);
    match obstacle_grid.shortest_path(start, end) {
        Ok(path) => println!("path: {:?}", path),
        Err(e) => println!("no path: {}", e),
    }

    // Opening a gap joins the two halves without a full regeneration.
    obstacle_grid.set(2, 0, false);
    println!("{}", obstacle_grid);
    match obstacle_grid.shortest_path(start, end) {
        Ok(path) => println!("path: {:?}", path),
        Err(e) => println!("no path: {}", e),
    }
}
