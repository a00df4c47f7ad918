// SPDX-License-Identifier: MPL-2.0
//! Layout passes driven through the public masonry API.

use approx::assert_abs_diff_eq;
use iced_masonry::domain::layout::{GapSize, MinColumnWidth};
use iced_masonry::masonry::{ColumnBalancer, ContainerId, MasonryController, MeasurementProvider};
use std::cell::Cell;

const EPSILON: f32 = 1e-4;

/// One width for every container, fixed intrinsic heights per container.
struct Page {
    width: Cell<f32>,
    heights: Vec<Vec<f32>>,
}

impl MeasurementProvider for Page {
    fn container_width(&self, _container: ContainerId) -> f32 {
        self.width.get()
    }

    fn item_height(&self, container: ContainerId, index: usize, _item_width: f32) -> f32 {
        self.heights[container.index()][index]
    }
}

fn default_balancer() -> ColumnBalancer {
    ColumnBalancer::new(MinColumnWidth::new(300.0), GapSize::new(10.0))
}

#[test]
fn three_items_across_three_columns() {
    let pass = default_balancer().balance(950.0, [100.0, 50.0, 80.0]);

    assert_eq!(pass.column_count, 3);
    let columns: Vec<usize> = pass.placements.iter().map(|p| p.column).collect();
    assert_eq!(columns, [0, 1, 2]);
    for placement in &pass.placements {
        assert_abs_diff_eq!(placement.y, 0.0, epsilon = EPSILON);
    }
    assert_abs_diff_eq!(pass.column_heights[0], 110.0, epsilon = EPSILON);
    assert_abs_diff_eq!(pass.column_heights[1], 60.0, epsilon = EPSILON);
    assert_abs_diff_eq!(pass.column_heights[2], 90.0, epsilon = EPSILON);
    assert_abs_diff_eq!(pass.height, 110.0, epsilon = EPSILON);
}

#[test]
fn accumulators_sum_assigned_contributions() {
    let heights = [120.0, 40.0, 300.0, 75.0, 90.0, 10.0, 220.0];
    let pass = default_balancer().balance(1300.0, heights);

    let mut sums = vec![0.0f32; pass.column_count];
    for placement in &pass.placements {
        sums[placement.column] += placement.contribution;
    }
    for (sum, height) in sums.iter().zip(&pass.column_heights) {
        assert_abs_diff_eq!(*sum, *height, epsilon = EPSILON);
    }

    let tallest = pass.column_heights.iter().copied().fold(0.0f32, f32::max);
    assert_abs_diff_eq!(pass.height, tallest, epsilon = EPSILON);
}

#[test]
fn x_and_width_follow_column_geometry() {
    let pass = default_balancer().balance(900.0, [10.0, 10.0, 10.0, 10.0]);

    assert_abs_diff_eq!(pass.column_width, 300.0, epsilon = EPSILON);
    let fourth = pass.placements[3];
    assert_eq!(fourth.column, 0);
    assert_abs_diff_eq!(fourth.x, 0.0, epsilon = EPSILON);
    assert_abs_diff_eq!(fourth.y, 20.0, epsilon = EPSILON);
    assert_abs_diff_eq!(fourth.width, 290.0, epsilon = EPSILON);
    assert_abs_diff_eq!(pass.placements[2].x, 600.0, epsilon = EPSILON);
}

#[test]
fn two_containers_ready_independently_and_share_resize() {
    let page = Page {
        width: Cell::new(950.0),
        heights: vec![vec![100.0, 50.0, 80.0], vec![40.0, 40.0]],
    };
    let mut controller = MasonryController::new(default_balancer());
    let first = controller.register(3, &page);
    let second = controller.register(2, &page);

    controller.item_ready(second, 0, &page);
    controller.item_ready(second, 1, &page);
    assert!(controller.layout(second).is_some());
    assert!(controller.layout(first).is_none());

    for index in 0..3 {
        controller.item_ready(first, index, &page);
    }
    assert_abs_diff_eq!(
        controller.layout(first).map_or(-1.0, |l| l.height()),
        110.0,
        epsilon = EPSILON
    );

    page.width.set(400.0);
    assert_eq!(controller.resize(&page), 2);

    let narrow = controller.layout(first).expect("first layout");
    assert_eq!(narrow.pass.column_count, 1);
    assert_abs_diff_eq!(narrow.height(), 110.0 + 60.0 + 90.0, epsilon = EPSILON);
}

#[test]
fn empty_container_has_zero_height() {
    let page = Page {
        width: Cell::new(800.0),
        heights: vec![Vec::new()],
    };
    let mut controller = MasonryController::new(default_balancer());
    let id = controller.register(0, &page);

    let layout = controller.layout(id).expect("empty container is laid out");
    assert!(layout.pass.placements.is_empty());
    assert_abs_diff_eq!(layout.height(), 0.0, epsilon = EPSILON);
}
