//! Samples a scalar field on a rectilinear mesh with a fixed depth axis along a straight-line
//! path, printing the interpolated value at each step.

use fieldsample::{Field, Grid, GridRegistry, Hint, InterpMethod};
use ndarray::{array, Array4};
use std::sync::Arc;

fn main() {
    let mut registry = GridRegistry::new();
    let grid = Arc::new(
        Grid::new_rectilinear_z(
            &mut registry,
            array![-10.0, -5.0, 0.0, 5.0, 10.0],
            array![-10.0, -5.0, 0.0, 5.0, 10.0],
            array![0.0, 10.0, 20.0, 30.0],
            false,
            false,
        )
        .expect("valid grid"),
    );

    let (tdim, zdim, ydim, xdim) = (1, 4, 5, 5);
    let mut data = Array4::<f32>::zeros((tdim, zdim, ydim, xdim));
    for z in 0..zdim {
        for y in 0..ydim {
            for x in 0..xdim {
                data[[0, z, y, x]] = (x + y + z) as f32;
            }
        }
    }

    let field = Field::new(grid, data, array![0.0], false, false).expect("valid field");

    let mut hint = Hint::default();
    for step in 0..5 {
        let x = -9.0 + step as f32 * 4.0;
        let y = -8.0 + step as f32 * 3.0;
        let z = 2.0 + step as f32 * 5.0;
        match fieldsample::sample(&field, x, y, z, 0.0, &mut hint, InterpMethod::Linear) {
            Ok(value) => println!("step {step}: ({x}, {y}, {z}) -> {value}"),
            Err(err) => println!("step {step}: ({x}, {y}, {z}) -> {err}"),
        }
    }
}
