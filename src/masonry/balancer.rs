// SPDX-License-Identifier: MPL-2.0
//! Greedy shortest-column placement.
//!
//! Every item goes to the column whose running height is currently the
//! smallest (first such column on ties). A pass always starts from empty
//! columns; nothing is carried over between passes.

use crate::domain::layout::{GapSize, MinColumnWidth};

/// Target rectangle of one item, in container coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    /// Column the item was assigned to.
    pub column: usize,
    pub x: f32,
    pub y: f32,
    /// Item width: column width minus the gap.
    pub width: f32,
    /// Rendered height the pass was computed with.
    pub height: f32,
    /// Amount added to the column's running height (`height + gap`).
    pub contribution: f32,
}

/// Result of one complete layout pass over a container.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutPass {
    pub column_count: usize,
    pub column_width: f32,
    /// One entry per input item, in input order.
    pub placements: Vec<Placement>,
    /// Final running height of every column.
    pub column_heights: Vec<f32>,
    /// Height of the container: the tallest column.
    pub height: f32,
}

impl LayoutPass {
    /// A pass over zero items.
    #[must_use]
    pub fn empty(column_count: usize, column_width: f32) -> Self {
        Self {
            column_count,
            column_width,
            placements: Vec::new(),
            column_heights: vec![0.0; column_count],
            height: 0.0,
        }
    }

    /// Item indices grouped by column, each group ordered top to bottom.
    #[must_use]
    pub fn columns(&self) -> Vec<Vec<usize>> {
        let mut columns = vec![Vec::new(); self.column_count];
        for (index, placement) in self.placements.iter().enumerate() {
            columns[placement.column].push(index);
        }
        columns
    }
}

/// Running heights of the columns during a single pass.
#[derive(Debug)]
struct ColumnState {
    heights: Vec<f32>,
}

impl ColumnState {
    fn new(column_count: usize) -> Self {
        Self {
            heights: vec![0.0; column_count],
        }
    }

    /// Index of the first column holding the minimum running height.
    fn shortest(&self) -> usize {
        let mut index = 0;
        let mut best = self.heights.first().copied().unwrap_or(0.0);
        for (i, height) in self.heights.iter().enumerate().skip(1) {
            if *height < best {
                best = *height;
                index = i;
            }
        }
        index
    }

    fn tallest(&self) -> f32 {
        self.heights.iter().copied().fold(0.0, f32::max)
    }
}

/// Computes masonry placements for a container.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ColumnBalancer {
    min_column_width: MinColumnWidth,
    gap: GapSize,
}

impl ColumnBalancer {
    #[must_use]
    pub fn new(min_column_width: MinColumnWidth, gap: GapSize) -> Self {
        Self {
            min_column_width,
            gap,
        }
    }

    #[must_use]
    pub fn min_column_width(&self) -> MinColumnWidth {
        self.min_column_width
    }

    #[must_use]
    pub fn gap(&self) -> GapSize {
        self.gap
    }

    /// `max(1, floor(width / min_column_width))`.
    ///
    /// Non-positive or non-finite widths count as zero.
    #[must_use]
    pub fn column_count(&self, container_width: f32) -> usize {
        let width = sanitize_width(container_width);
        let columns = (width / self.min_column_width.value()).floor();
        (columns as usize).max(1)
    }

    #[must_use]
    pub fn column_width(&self, container_width: f32) -> f32 {
        sanitize_width(container_width) / self.column_count(container_width) as f32
    }

    /// Width every item receives in a pass over `container_width`.
    ///
    /// Clamped at zero when the gap is wider than a column.
    #[must_use]
    pub fn item_width(&self, container_width: f32) -> f32 {
        (self.column_width(container_width) - self.gap.value()).max(0.0)
    }

    /// Places items of the given rendered heights, in order.
    pub fn balance<I>(&self, container_width: f32, heights: I) -> LayoutPass
    where
        I: IntoIterator<Item = f32>,
    {
        let column_count = self.column_count(container_width);
        let column_width = self.column_width(container_width);
        let item_width = self.item_width(container_width);
        let gap = self.gap.value();

        let mut state = ColumnState::new(column_count);
        let mut pass = LayoutPass::empty(column_count, column_width);

        for height in heights {
            let height = sanitize_height(height);
            let column = state.shortest();
            let y = state.heights[column];
            let contribution = height + gap;

            pass.placements.push(Placement {
                column,
                x: column_width * column as f32,
                y,
                width: item_width,
                height,
                contribution,
            });
            state.heights[column] += contribution;
        }

        pass.height = state.tallest();
        pass.column_heights = state.heights;
        pass
    }
}

fn sanitize_width(width: f32) -> f32 {
    if width.is_finite() && width > 0.0 {
        width
    } else {
        0.0
    }
}

fn sanitize_height(height: f32) -> f32 {
    if height.is_finite() && height > 0.0 {
        height
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{assert_abs_diff_eq, F32_EPSILON};

    fn balancer() -> ColumnBalancer {
        ColumnBalancer::new(MinColumnWidth::new(300.0), GapSize::new(10.0))
    }

    /// Reference placement: a plain minimum search per step.
    fn naive_columns(column_count: usize, gap: f32, heights: &[f32]) -> Vec<usize> {
        let mut acc = vec![0.0_f32; column_count];
        let mut chosen = Vec::new();
        for height in heights {
            let min = acc.iter().copied().fold(f32::INFINITY, f32::min);
            let column = acc
                .iter()
                .position(|value| *value == min)
                .expect("at least one column");
            acc[column] += height + gap;
            chosen.push(column);
        }
        chosen
    }

    #[test]
    fn column_count_follows_floor_of_width_ratio() {
        let balancer = balancer();
        assert_eq!(balancer.column_count(950.0), 3);
        assert_eq!(balancer.column_count(900.0), 3);
        assert_eq!(balancer.column_count(899.9), 2);
        assert_eq!(balancer.column_count(600.0), 2);
        assert_eq!(balancer.column_count(1500.0), 5);
    }

    #[test]
    fn narrow_container_gets_single_column() {
        let balancer = balancer();
        assert_eq!(balancer.column_count(299.0), 1);
        assert_eq!(balancer.column_count(1.0), 1);
    }

    #[test]
    fn non_positive_width_floors_to_one_column() {
        let balancer = balancer();
        assert_eq!(balancer.column_count(0.0), 1);
        assert_eq!(balancer.column_count(-250.0), 1);
        assert_eq!(balancer.column_count(f32::NAN), 1);
        assert_eq!(balancer.column_width(-250.0), 0.0);
    }

    #[test]
    fn three_items_fill_three_columns_left_to_right() {
        let pass = balancer().balance(950.0, [100.0, 50.0, 80.0]);

        assert_eq!(pass.column_count, 3);
        let columns: Vec<usize> = pass.placements.iter().map(|p| p.column).collect();
        assert_eq!(columns, vec![0, 1, 2]);
        assert!(pass.placements.iter().all(|p| p.y == 0.0));
        assert_eq!(pass.column_heights, vec![110.0, 60.0, 90.0]);
        assert_eq!(pass.height, 110.0);

        let column_width = 950.0 / 3.0;
        assert_abs_diff_eq!(pass.column_width, column_width, epsilon = F32_EPSILON * 1000.0);
        assert_abs_diff_eq!(
            pass.placements[1].x,
            column_width,
            epsilon = F32_EPSILON * 1000.0
        );
        assert_abs_diff_eq!(
            pass.placements[0].width,
            column_width - 10.0,
            epsilon = F32_EPSILON * 1000.0
        );
    }

    #[test]
    fn fourth_item_goes_to_shortest_column() {
        let pass = balancer().balance(950.0, [100.0, 50.0, 80.0, 40.0]);

        let fourth = pass.placements[3];
        assert_eq!(fourth.column, 1);
        assert_eq!(fourth.y, 60.0);
        assert_eq!(pass.column_heights, vec![110.0, 110.0, 90.0]);
    }

    #[test]
    fn ties_break_toward_lowest_column_index() {
        let pass = balancer().balance(600.0, [50.0, 50.0, 20.0]);

        assert_eq!(pass.placements[2].column, 0);
        assert_eq!(pass.placements[2].y, 60.0);
    }

    #[test]
    fn zero_items_produce_zero_height() {
        let pass = balancer().balance(950.0, std::iter::empty());

        assert!(pass.placements.is_empty());
        assert_eq!(pass.height, 0.0);
        assert_eq!(pass.column_heights, vec![0.0, 0.0, 0.0]);
    }

    #[test]
    fn single_column_stacks_items() {
        let pass = balancer().balance(200.0, [30.0, 40.0, 50.0]);

        let ys: Vec<f32> = pass.placements.iter().map(|p| p.y).collect();
        assert_eq!(ys, vec![0.0, 40.0, 90.0]);
        assert_eq!(pass.height, 150.0);
        assert!(pass.placements.iter().all(|p| p.x == 0.0));
    }

    #[test]
    fn accumulators_equal_sum_of_contributions() {
        let heights = [120.0, 35.0, 260.0, 80.0, 80.0, 15.0, 190.0, 42.0, 300.0];
        let pass = balancer().balance(1280.0, heights);

        let mut sums = vec![0.0_f32; pass.column_count];
        for placement in &pass.placements {
            sums[placement.column] += placement.contribution;
        }
        for (sum, height) in sums.iter().zip(&pass.column_heights) {
            assert_abs_diff_eq!(*sum, *height, epsilon = F32_EPSILON * 1000.0);
        }
        let tallest = pass.column_heights.iter().copied().fold(0.0, f32::max);
        assert_eq!(pass.height, tallest);
    }

    #[test]
    fn greedy_choice_matches_naive_minimum_search() {
        let heights = [
            310.0, 12.0, 77.0, 77.0, 140.0, 5.0, 260.0, 260.0, 33.0, 91.0, 180.0, 64.0,
        ];
        for width in [250.0, 640.0, 950.0, 1440.0, 2000.0] {
            let balancer = balancer();
            let pass = balancer.balance(width, heights);
            let expected = naive_columns(pass.column_count, 10.0, &heights);
            let actual: Vec<usize> = pass.placements.iter().map(|p| p.column).collect();
            assert_eq!(actual, expected, "width {width}");
        }
    }

    #[test]
    fn placements_in_a_column_do_not_overlap() {
        let heights = [90.0, 10.0, 45.0, 200.0, 60.0, 60.0, 75.0];
        let pass = balancer().balance(950.0, heights);

        for members in pass.columns() {
            let mut bottom = 0.0;
            for index in members {
                let placement = pass.placements[index];
                assert!(placement.y >= bottom);
                bottom = placement.y + placement.height;
            }
        }
    }

    #[test]
    fn invalid_heights_count_as_zero() {
        let pass = balancer().balance(200.0, [f32::NAN, -5.0, 20.0]);

        assert_eq!(pass.placements[0].height, 0.0);
        assert_eq!(pass.placements[1].height, 0.0);
        assert_eq!(pass.height, 50.0);
    }

    #[test]
    fn recomputing_is_deterministic() {
        let heights = [10.0, 20.0, 30.0, 40.0];
        let balancer = balancer();
        assert_eq!(
            balancer.balance(700.0, heights),
            balancer.balance(700.0, heights)
        );
    }
}
