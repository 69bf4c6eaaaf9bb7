use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::report::charts::{cost_chart, prediction_chart};
use crate::report::grid::PredictionGrid;
use crate::report::page::{render_page, RunSummary};
use crate::report::serve::ReportPages;
use crate::train::history::CostHistory;

/// Renders every report artefact from the finished run.
pub fn build_pages(history: &CostHistory, grid: &PredictionGrid, summary: &RunSummary) -> ReportPages {
    let cost_svg = cost_chart(history);
    let prediction_svg = prediction_chart(grid);
    let index_html = render_page(&cost_svg, &prediction_svg, summary);
    // Non-finite costs are written as null.
    let costs_json = serde_json::to_string_pretty(history)
        .expect("a list of floats always serializes");

    ReportPages { index_html, cost_svg, prediction_svg, costs_json }
}

/// Writes `index.html`, `cost.svg`, `prediction.svg` and `costs.json` into
/// `dir`, creating it if needed. Returns the written paths.
pub fn write_reports(dir: &Path, pages: &ReportPages) -> std::io::Result<Vec<PathBuf>> {
    fs::create_dir_all(dir)?;

    let files = [
        ("index.html", &pages.index_html),
        ("cost.svg", &pages.cost_svg),
        ("prediction.svg", &pages.prediction_svg),
        ("costs.json", &pages.costs_json),
    ];

    let mut written = Vec::with_capacity(files.len());
    for (name, body) in files {
        let path = dir.join(name);
        fs::write(&path, body)?;
        written.push(path);
    }

    info!(dir = %dir.display(), files = written.len(), "report written");
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::matrix::Matrix;

    fn grid() -> PredictionGrid {
        let inputs = Matrix::column(&[0.0, 1.0]);
        PredictionGrid { predicted: inputs.clone(), expected: inputs.clone(), inputs }
    }

    #[test]
    fn pages_contain_both_charts() {
        let history = CostHistory::from(vec![0.3, 0.2]);
        let pages = build_pages(&history, &grid(), &RunSummary::default());
        assert!(pages.index_html.contains(&pages.cost_svg));
        assert!(pages.index_html.contains(&pages.prediction_svg));
        let parsed: CostHistory = serde_json::from_str(&pages.costs_json).unwrap();
        assert_eq!(parsed, history);
    }

    #[test]
    fn non_finite_costs_export_as_null() {
        let history = CostHistory::from(vec![0.3, f64::NAN]);
        let pages = build_pages(&history, &grid(), &RunSummary::default());
        let parsed: serde_json::Value = serde_json::from_str(&pages.costs_json).unwrap();
        assert_eq!(parsed["costs"][1], serde_json::Value::Null);
        assert_eq!(parsed["costs"][0], 0.3);
    }

    #[test]
    fn write_reports_creates_all_files() {
        let dir = std::env::temp_dir().join(format!("wavefit-report-{}", std::process::id()));
        let pages = build_pages(&CostHistory::from(vec![0.3, 0.2]), &grid(), &RunSummary::default());

        let written = write_reports(&dir, &pages).unwrap();

        assert_eq!(written.len(), 4);
        for path in &written {
            assert!(path.exists(), "{} missing", path.display());
        }
        assert_eq!(fs::read_to_string(dir.join("cost.svg")).unwrap(), pages.cost_svg);
        let _ = fs::remove_dir_all(&dir);
    }
}
