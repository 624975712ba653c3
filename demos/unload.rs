//! Example: solve a small unloading site with both algorithms.
//!
//! Run with:
//! `cargo run --example unload`

use cranes_dp::{Algorithm, Grid, GridBuilder};

fn main() {
    let site: Grid = "\
        .c.
        cXc
        .c.
    "
    .parse()
    .expect("demo grid is well formed");

    println!("Site:\n{site}");
    for algorithm in Algorithm::ALL {
        let path = algorithm.solve(&site);
        println!(
            "{algorithm}: {} cranes in {} steps",
            path.total_cranes(),
            path.len()
        );
        println!("{path}");
    }

    // A larger random site is still instant for the dynamic program.
    let big = GridBuilder::new(40, 60).with_seed(2024).build();
    let path = Algorithm::DynProg.solve(&big);
    println!(
        "40x60 random site: {} of {} cranes, path ends at {:?}",
        path.total_cranes(),
        big.crane_count(),
        path.position()
    );
}
