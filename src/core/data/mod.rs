pub mod column_summary;
pub mod escape_grid;
pub mod grid_spec;
pub mod intensity_image;
pub mod iteration_budget;
pub mod plane_bounds;
