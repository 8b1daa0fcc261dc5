use std::time::Instant;

use crate::core::actions::compute_field::compute_field;
use crate::core::actions::extract_field::extract_field;
use crate::core::data::grid_spec::GridSpec;
use crate::core::data::iteration_budget::IterationBudget;
use crate::core::data::plane_bounds::PlaneBounds;
use crate::storage::write_pgm::write_pgm;

pub fn profile_controller() -> Result<(), Box<dyn std::error::Error>> {
    let height: usize = 1000;
    let max_iterations: u32 = 50;
    // Squared threshold; the reference runs tighter than the canonical 4.0.
    let radius_squared: f64 = 5.0;
    let filepath = "output/field.pgm";

    // Classic Mandelbrot view, widened a little on the left
    let bounds = PlaneBounds::new(-2.4, 1.5, -1.3, 1.3)?;
    let spec = GridSpec::new(bounds, height)?;
    let budget = IterationBudget::new(max_iterations, radius_squared)?;

    println!("Computing escape-time field...");
    println!("Grid size: {}x{}", spec.width(), spec.height());
    println!("Max iterations: {}", max_iterations);

    let start = Instant::now();
    let grid = compute_field(spec, budget)?;
    println!("Field duration:   {:?}", start.elapsed());

    let start = Instant::now();
    let (image, summary) = extract_field(&grid, budget)?;
    println!("Extract duration: {:?}", start.elapsed());

    write_pgm(&image, filepath)?;
    println!("Profile entries: {}", summary.len());
    println!("Saved to {}", filepath);
    Ok(())
}
