//! Integration tests for the concrete worked scenarios that motivated this crate's algorithms:
//! a hand-computed rectilinear sample, nearest-vs-linear divergence, periodic time wraparound,
//! spherical zonal wraparound, curvilinear/rectilinear agreement on an equivalent mesh, and the
//! two out-of-bounds error paths.

use fieldsample::{
    sample, Field, Grid, GridRegistry, Hint, InterpMethod, SDepth,
};
use float_cmp::assert_approx_eq;
use ndarray::{array, Array1, Array2, Array3, Array4};
use std::sync::Arc;

fn linear_field(xdim: usize, ydim: usize, zdim: usize, tdim: usize) -> (Arc<Grid>, Array4<f32>) {
    let mut registry = GridRegistry::new();
    let lon = Array1::from_iter((0..xdim).map(|i| i as f32));
    let lat = Array1::from_iter((0..ydim).map(|i| i as f32));
    let depth = Array1::from_iter((0..zdim).map(|i| i as f32));
    let grid = Arc::new(
        Grid::new_rectilinear_z(&mut registry, lon, lat, depth, false, false).unwrap(),
    );

    let mut data = Array4::<f32>::zeros((tdim, zdim, ydim, xdim));
    for t in 0..tdim {
        for k in 0..zdim {
            for j in 0..ydim {
                for i in 0..xdim {
                    data[[t, k, j, i]] = (i + 2 * j + 4 * k + 8 * t) as f32;
                }
            }
        }
    }
    (grid, data)
}

#[test]
fn scenario_1_unit_rectilinear_z_linear() {
    let (grid, data) = linear_field(2, 2, 2, 2);
    let field = Field::new(grid, data, array![0.0, 1.0], false, false).unwrap();

    let mut hint = Hint::default();
    let value = sample(&field, 0.5, 0.5, 0.5, 0.5, &mut hint, InterpMethod::Linear).unwrap();
    assert_approx_eq!(f32, value, 7.5, ulps = 4);
}

#[test]
fn scenario_2_nearest_vs_linear_diverge() {
    let (grid, data) = linear_field(2, 2, 2, 2);
    let field = Field::new(grid, data, array![0.0, 1.0], false, false).unwrap();

    let mut hint = Hint::default();
    let linear = sample(&field, 0.25, 0.25, 0.25, 0.25, &mut hint, InterpMethod::Linear).unwrap();
    assert_approx_eq!(f32, linear, 3.75, ulps = 4);

    // Nearest still linearly blends across the two bracketing time frames (search_indices's
    // "chosen kernel" only selects the spatial sampler): frame 0 and frame 1 both round every
    // spatial index down to (0, 0, 0), giving 0.0 and 8.0, blended at weight 0.25.
    let mut hint = Hint::default();
    let nearest = sample(&field, 0.25, 0.25, 0.25, 0.25, &mut hint, InterpMethod::Nearest).unwrap();
    assert_approx_eq!(f32, nearest, 2.0, ulps = 4);
}

#[test]
fn scenario_3_periodic_time_wraps_and_resets_hint() {
    let mut registry = GridRegistry::new();
    let grid = Arc::new(
        Grid::new_rectilinear_z(
            &mut registry,
            array![0.0, 1.0],
            array![0.0, 1.0],
            array![0.0, 1.0],
            false,
            false,
        )
        .unwrap(),
    );
    let data = Array4::<f32>::from_elem((2, 2, 2, 2), 42.0);
    let field = Field::new(grid, data, array![0.0, 10.0], false, true).unwrap();

    let mut hint = Hint::default();
    let value = sample(&field, 0.5, 0.5, 0.5, 25.0, &mut hint, InterpMethod::Linear).unwrap();
    assert_approx_eq!(f32, value, 42.0, ulps = 4);
    assert_eq!(hint.ti, 0);
}

#[test]
fn scenario_4_sphere_wrap_equivalence() {
    let mut registry = GridRegistry::new();
    let lon = array![-180.0_f32, -90.0, 0.0, 90.0];
    let lat = array![0.0_f32, 1.0];
    let depth = array![0.0_f32, 1.0];
    let grid = Arc::new(
        Grid::new_rectilinear_z(&mut registry, lon, lat, depth, true, true).unwrap(),
    );
    let grid2 = Arc::clone(&grid);

    let mut data = Array4::<f32>::zeros((1, 2, 2, 4));
    for i in 0..4 {
        for j in 0..2 {
            for k in 0..2 {
                data[[0, k, j, i]] = i as f32;
            }
        }
    }
    let field = Field::new(grid, data.clone(), array![0.0], false, false).unwrap();
    let field2 = Field::new(grid2, data, array![0.0], false, false).unwrap();

    let mut hint_a = Hint::default();
    let a = sample(&field, 270.0, 0.5, 0.5, 0.0, &mut hint_a, InterpMethod::Linear).unwrap();
    let mut hint_b = Hint::default();
    let b = sample(&field2, -90.0, 0.5, 0.5, 0.0, &mut hint_b, InterpMethod::Linear).unwrap();

    assert_approx_eq!(f32, a, b, epsilon = 1e-6);
}

#[test]
fn scenario_5_curvilinear_matches_equivalent_rectilinear() {
    let xdim = 4;
    let ydim = 4;

    let mut rect_registry = GridRegistry::new();
    let lon1d = Array1::from_iter((0..xdim).map(|i| i as f32));
    let lat1d = Array1::from_iter((0..ydim).map(|j| j as f32));
    let rect_grid = Arc::new(
        Grid::new_rectilinear_z(
            &mut rect_registry,
            lon1d.clone(),
            lat1d.clone(),
            array![0.0, 1.0],
            false,
            false,
        )
        .unwrap(),
    );

    let mut curv_registry = GridRegistry::new();
    let mut lon2d = Array2::<f32>::zeros((ydim, xdim));
    let mut lat2d = Array2::<f32>::zeros((ydim, xdim));
    for j in 0..ydim {
        for i in 0..xdim {
            lon2d[[j, i]] = lon1d[i];
            lat2d[[j, i]] = lat1d[j];
        }
    }
    let curv_grid = Arc::new(
        Grid::new_curvilinear_z(&mut curv_registry, lon2d, lat2d, array![0.0, 1.0], false, false)
            .unwrap(),
    );

    let mut data = Array4::<f32>::zeros((1, 2, ydim, xdim));
    for k in 0..2 {
        for j in 0..ydim {
            for i in 0..xdim {
                data[[0, k, j, i]] = (i + 3 * j + 5 * k) as f32;
            }
        }
    }

    let rect_field = Field::new(rect_grid, data.clone(), array![0.0], false, false).unwrap();
    let curv_field = Field::new(curv_grid, data, array![0.0], false, false).unwrap();

    let mut hint_rect = Hint::default();
    let rect_value = sample(
        &rect_field,
        1.3,
        2.1,
        0.4,
        0.0,
        &mut hint_rect,
        InterpMethod::Linear,
    )
    .unwrap();

    let mut hint_curv = Hint::default();
    let curv_value = sample(
        &curv_field,
        1.3,
        2.1,
        0.4,
        0.0,
        &mut hint_curv,
        InterpMethod::Linear,
    )
    .unwrap();

    assert_approx_eq!(f32, rect_value, curv_value, epsilon = 1e-6);
}

#[test]
fn s_grid_static_depth_table_matches_equivalent_z_grid() {
    // A flat S-depth table (same depth at every horizontal point, level 0 at 0.0 and level 1
    // at 10.0) samples identically to a Z-grid with depth = [0.0, 10.0], since the S-column
    // bilinear restriction over a constant table degenerates to that constant.
    let mut registry = GridRegistry::new();
    let mut depth_table = Array3::<f32>::zeros((2, 2, 2));
    depth_table.index_axis_mut(ndarray::Axis(0), 0).fill(0.0);
    depth_table.index_axis_mut(ndarray::Axis(0), 1).fill(10.0);
    let grid = Arc::new(
        Grid::new_rectilinear_s(
            &mut registry,
            array![0.0, 1.0],
            array![0.0, 1.0],
            SDepth::Static(depth_table),
            false,
            false,
        )
        .unwrap(),
    );

    let mut data = Array4::<f32>::zeros((1, 2, 2, 2));
    data[[0, 0, 0, 0]] = 0.0;
    data[[0, 0, 0, 1]] = 1.0;
    data[[0, 0, 1, 0]] = 2.0;
    data[[0, 0, 1, 1]] = 3.0;
    data[[0, 1, 0, 0]] = 10.0;
    data[[0, 1, 0, 1]] = 11.0;
    data[[0, 1, 1, 0]] = 12.0;
    data[[0, 1, 1, 1]] = 13.0;
    let field = Field::new(grid, data, array![0.0], false, false).unwrap();

    let mut hint = Hint::default();
    let value = sample(&field, 0.5, 0.5, 5.0, 0.0, &mut hint, InterpMethod::Linear).unwrap();
    assert_approx_eq!(f32, value, 6.5, epsilon = 1e-4);
}

#[test]
fn curvilinear_s_grid_samples_through_a_time_varying_depth_table() {
    // A curvilinear grid whose lon/lat is the outer product of [0,1]x[0,1], with a
    // time-varying S-depth table blending from [0,10] at t=0 to [0,20] at t=1. Sampling at
    // t=0.5 should land the z-bracket halfway between those two blended columns.
    let mut registry = GridRegistry::new();
    let mut lon = Array2::<f32>::zeros((2, 2));
    let mut lat = Array2::<f32>::zeros((2, 2));
    for j in 0..2 {
        for i in 0..2 {
            lon[[j, i]] = i as f32;
            lat[[j, i]] = j as f32;
        }
    }
    let mut depth_table = Array4::<f32>::zeros((2, 2, 2, 2));
    depth_table.index_axis_mut(ndarray::Axis(0), 0).index_axis_mut(ndarray::Axis(0), 1).fill(10.0);
    depth_table.index_axis_mut(ndarray::Axis(0), 1).index_axis_mut(ndarray::Axis(0), 1).fill(20.0);
    let grid = Arc::new(
        Grid::new_curvilinear_s(&mut registry, lon, lat, SDepth::TimeVarying(depth_table), false, false)
            .unwrap(),
    );

    let mut data = Array4::<f32>::zeros((2, 2, 2, 2));
    data.index_axis_mut(ndarray::Axis(0), 0).fill(1.0);
    data.index_axis_mut(ndarray::Axis(0), 1).fill(1.0);
    let field = Field::new(grid, data, array![0.0, 1.0], false, false).unwrap();

    // Between the two time frames, the S-column at (t=0.5) has level 1 at depth 15.0; z=7.5
    // sits halfway between level 0 (depth 0.0) and level 1 (depth 15.0).
    let mut hint = Hint::default();
    let value = sample(&field, 0.5, 0.5, 7.5, 0.5, &mut hint, InterpMethod::Linear).unwrap();
    assert_approx_eq!(f32, value, 1.0, epsilon = 1e-4);
}

#[test]
fn sampling_at_a_grid_node_returns_the_node_value_exactly() {
    let (grid, data) = linear_field(3, 3, 2, 2);
    let field = Field::new(grid, data, array![0.0, 1.0], false, false).unwrap();

    // (lon[2], lat[1], depth[1], time[1]) = (2, 1, 1, 1) -> data = 2 + 2*1 + 4*1 + 8*1 = 16.
    let mut hint = Hint::default();
    let value = sample(&field, 2.0, 1.0, 1.0, 1.0, &mut hint, InterpMethod::Linear).unwrap();
    assert_approx_eq!(f32, value, 16.0, ulps = 4);
}

#[test]
fn repeating_a_sample_with_the_returned_hint_is_a_fixed_point() {
    let (grid, data) = linear_field(4, 4, 2, 2);
    let field = Field::new(grid, data, array![0.0, 1.0], false, false).unwrap();

    let mut hint = Hint::default();
    let first = sample(&field, 2.3, 1.7, 0.5, 0.5, &mut hint, InterpMethod::Linear).unwrap();
    let hint_after_first = hint;

    let second = sample(&field, 2.3, 1.7, 0.5, 0.5, &mut hint, InterpMethod::Linear).unwrap();

    assert_approx_eq!(f32, first, second, ulps = 4);
    assert_eq!(hint, hint_after_first);
}

#[test]
fn constant_field_returns_the_constant_for_both_methods() {
    let mut registry = GridRegistry::new();
    let grid = Arc::new(
        Grid::new_rectilinear_z(
            &mut registry,
            array![0.0, 1.0, 2.0],
            array![0.0, 1.0, 2.0],
            array![0.0, 1.0],
            false,
            false,
        )
        .unwrap(),
    );
    let data = Array4::<f32>::from_elem((1, 2, 3, 3), 5.0);
    let field = Field::new(grid, data, array![0.0], false, false).unwrap();

    let mut hint_linear = Hint::default();
    let linear = sample(&field, 0.7, 1.3, 0.4, 0.0, &mut hint_linear, InterpMethod::Linear).unwrap();
    let mut hint_nearest = Hint::default();
    let nearest = sample(&field, 0.7, 1.3, 0.4, 0.0, &mut hint_nearest, InterpMethod::Nearest).unwrap();

    assert_approx_eq!(f32, linear, 5.0, ulps = 4);
    assert_approx_eq!(f32, nearest, 5.0, ulps = 4);
}

#[test]
fn scenario_6_out_of_bounds_depth_and_time_extrapolation() {
    let (grid, data) = linear_field(2, 2, 2, 2);
    let field = Field::new(grid, data, array![0.0, 1.0], false, false).unwrap();

    let mut hint = Hint::default();
    let err = sample(&field, 0.5, 0.5, 1.0 + 1e-3, 0.5, &mut hint, InterpMethod::Linear)
        .unwrap_err();
    assert_eq!(err, fieldsample::ErrorKind::OutOfBounds);

    let mut hint = Hint::default();
    let err = sample(&field, 0.5, 0.5, 0.5, 2.0, &mut hint, InterpMethod::Linear).unwrap_err();
    assert_eq!(err, fieldsample::ErrorKind::TimeExtrapolation);
}
