#![cfg(feature = "heavy")]
use cranes_dp::{crane_unloading_dyn_prog, GridBuilder, Path};

#[test]
fn heavy_stress_dyn_prog_large_grid() {
    let grid = GridBuilder::new(2_000, 2_000)
        .with_seed(123)
        .with_building_density(0.3)
        .build();
    let path = crane_unloading_dyn_prog(&grid);
    assert!(path.total_cranes() <= grid.crane_count());
    assert!(path.len() <= 3_998);
    // Replaying validates every prefix again.
    let replayed = Path::from_steps(&grid, path.steps()).unwrap();
    assert_eq!(replayed.total_cranes(), path.total_cranes());
}
