//! Samples a scalar field on a curvilinear (general quad) mesh, showing that the hint seeded
//! from the previous step lets the walk converge in one or two cell hops for a nearby query.

use fieldsample::{Field, Grid, GridRegistry, Hint, InterpMethod};
use ndarray::{Array1, Array2, Array4};
use std::sync::Arc;

/// A mildly distorted 6x6 quad mesh: a regular grid sheared by a small sine perturbation.
fn build_mesh() -> (Array2<f32>, Array2<f32>) {
    let n = 6;
    let mut lon = Array2::<f32>::zeros((n, n));
    let mut lat = Array2::<f32>::zeros((n, n));
    for j in 0..n {
        for i in 0..n {
            let shear = 0.2 * (j as f32 / n as f32 * std::f32::consts::PI).sin();
            lon[[j, i]] = i as f32 + shear;
            lat[[j, i]] = j as f32;
        }
    }
    (lon, lat)
}

fn main() {
    let mut registry = GridRegistry::new();
    let (lon, lat) = build_mesh();
    let grid = Arc::new(
        Grid::new_curvilinear_z(&mut registry, lon, lat, Array1::from(vec![0.0, 1.0]), false, false)
            .expect("valid grid"),
    );

    let (tdim, zdim, ydim, xdim) = (1, 2, 6, 6);
    let mut data = Array4::<f32>::zeros((tdim, zdim, ydim, xdim));
    for z in 0..zdim {
        for y in 0..ydim {
            for x in 0..xdim {
                data[[0, z, y, x]] = (x + y + z) as f32;
            }
        }
    }

    let field = Field::new(grid, data, ndarray::array![0.0], false, false).expect("valid field");

    let mut hint = Hint::default();
    for step in 0..4 {
        let x = 0.5 + step as f32 * 1.2;
        let y = 0.5 + step as f32 * 1.0;
        match fieldsample::sample(&field, x, y, 0.3, 0.0, &mut hint, InterpMethod::Linear) {
            Ok(value) => println!(
                "step {step}: ({x}, {y}) -> {value}, hint now ({}, {})",
                hint.xi, hint.yi
            ),
            Err(err) => println!("step {step}: ({x}, {y}) -> {err}"),
        }
    }
}
