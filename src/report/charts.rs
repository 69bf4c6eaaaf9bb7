use crate::report::grid::PredictionGrid;
use crate::report::svg::{LineChart, Series};
use crate::train::history::CostHistory;

const BLUE: &str = "#1e40af";
const ORANGE: &str = "#f59e0b";
const RED: &str = "#dc2626";

/// Cost against batch number.
pub fn cost_chart(history: &CostHistory) -> String {
    let points = history.costs().iter()
        .enumerate()
        .map(|(i, &c)| (i as f64, c))
        .collect();

    LineChart::new("Training cost", "Batch Number", "Cost")
        .y_from_zero(true)
        .series(Series::new("cost", RED, points).with_width(1.5))
        .render()
}

/// Network output ("NN") overlaid on the target function ("true").
pub fn prediction_chart(grid: &PredictionGrid) -> String {
    LineChart::new("Prediction vs target", "x", "y")
        .series(Series::new("NN", BLUE, grid.predicted_points()))
        .series(Series::new("true", ORANGE, grid.expected_points()))
        .render()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::matrix::Matrix;

    #[test]
    fn cost_chart_draws_one_line() {
        let svg = cost_chart(&CostHistory::from(vec![0.4, 0.2, 0.1]));
        assert!(svg.contains("Batch Number"));
        assert_eq!(svg.matches("<path").count(), 1);
    }

    #[test]
    fn empty_history_gets_placeholder() {
        assert!(cost_chart(&CostHistory::default()).contains("Not enough data"));
    }

    #[test]
    fn prediction_chart_overlays_two_lines() {
        let inputs = Matrix::column(&[0.0, 1.0, 2.0]);
        let grid = PredictionGrid {
            predicted: inputs.clone(),
            expected: inputs.map(|x| x * x),
            inputs,
        };
        let svg = prediction_chart(&grid);
        assert_eq!(svg.matches("<path").count(), 2);
        assert!(svg.contains(">NN<") && svg.contains(">true<"));
    }
}
