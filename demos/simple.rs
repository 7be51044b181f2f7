use grid_bfs::ObstacleGrid;
use grid_util::grid::Grid;
use grid_util::point::Point;
use grid_util::rect::Rect;

// In this example a path is found on a grid with shape
// #####
// #S  #
// # # #
// #  E#
// #####
// S marks the start
// E marks the end
fn main() {
    let mut obstacle_grid: ObstacleGrid = ObstacleGrid::new(5, 5, true);
    obstacle_grid.set_rectangle(&Rect::new(1, 1, 3, 3), false);
    obstacle_grid.set(2, 2, true);
    obstacle_grid.generate_components();
    let start = Point::new(1, 1);
    let end = Point::new(3, 3);
    match obstacle_grid.shortest_path(start, end) {
        Ok(path) => {
            println!("A path has been found:");
            for p in path {
                println!("{:?}", p);
            }
        }
        Err(e) => println!("{}", e),
    }
}
