/// Renders the single-page run report.
///
/// The page is a static template (`assets/report.html`) with `{{TOKEN}}`
/// placeholders. Any placeholder left unfilled is blanked so raw tokens
/// never reach the browser.

use crate::report::svg::escape;

const TEMPLATE: &str = include_str!("assets/report.html");

/// Headline numbers shown above the charts.
#[derive(Debug, Clone, Default)]
pub struct RunSummary {
    pub architecture: String,
    pub target: String,
    pub iterations: usize,
    pub batch_size: usize,
    pub first_cost: Option<f64>,
    pub final_cost: Option<f64>,
    pub best_cost: Option<(usize, f64)>,
    pub grid_mse: f64,
    pub seed: Option<u64>,
}

impl RunSummary {
    pub fn to_html(&self) -> String {
        let cost = |c: Option<f64>| c.map(|v| format!("{:.6}", v)).unwrap_or_else(|| "—".into());
        let best = self.best_cost
            .map(|(i, v)| format!("{:.6} (batch {})", v, i))
            .unwrap_or_else(|| "—".into());
        let seed = self.seed.map(|s| s.to_string()).unwrap_or_else(|| "random".into());

        format!(
            r#"<table class="summary-table">
  <tr><th>Architecture</th><td>{arch}</td></tr>
  <tr><th>Target</th><td>{target}</td></tr>
  <tr><th>Batches × batch size</th><td>{iters} × {batch}</td></tr>
  <tr><th>First cost</th><td>{first}</td></tr>
  <tr><th>Final cost</th><td>{last}</td></tr>
  <tr><th>Best cost</th><td>{best}</td></tr>
  <tr><th>Grid MSE</th><td>{grid:.6}</td></tr>
  <tr><th>Seed</th><td>{seed}</td></tr>
</table>"#,
            arch = escape(&self.architecture),
            target = escape(&self.target),
            iters = self.iterations,
            batch = self.batch_size,
            first = cost(self.first_cost),
            last = cost(self.final_cost),
            best = best,
            grid = self.grid_mse,
            seed = seed,
        )
    }
}

/// Fills the report template with both charts and the summary table.
pub fn render_page(cost_svg: &str, prediction_svg: &str, summary: &RunSummary) -> String {
    let html = TEMPLATE
        .replace("{{SUBTITLE}}", &escape(&format!("Learning {}", summary.target)))
        .replace("{{SUMMARY_TABLE}}", &summary.to_html())
        .replace("{{COST_SVG}}", cost_svg)
        .replace("{{PREDICTION_SVG}}", prediction_svg);
    blank_remaining(html)
}

/// Replaces any `{{TOKEN}}` that wasn't substituted with an empty string.
fn blank_remaining(mut html: String) -> String {
    while let Some(start) = html.find("{{") {
        if let Some(end) = html[start..].find("}}") {
            let abs_end = start + end + 2;
            html.replace_range(start..abs_end, "");
        } else {
            break;
        }
    }
    html
}
