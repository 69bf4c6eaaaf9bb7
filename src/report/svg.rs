/// Minimal SVG line charts for the cost curve and the prediction overlay.
///
/// Charts are plain strings so they can be embedded in the report page,
/// written to disk, or inspected in tests without any display attached.

const WIDTH: f64 = 760.0;
const HEIGHT: f64 = 300.0;
const PAD_L: f64 = 64.0;
const PAD_R: f64 = 16.0;
const PAD_T: f64 = 28.0;
const PAD_B: f64 = 44.0;

const GREY_GRID: &str = "#f0f2f5";
const GREY_TEXT: &str = "#999";
const DARK_TEXT: &str = "#333";

/// One polyline in a chart.
#[derive(Debug, Clone)]
pub struct Series {
    pub label: String,
    pub color: String,
    pub width: f64,
    pub points: Vec<(f64, f64)>,
}

impl Series {
    pub fn new(label: impl Into<String>, color: impl Into<String>, points: Vec<(f64, f64)>) -> Self {
        Series { label: label.into(), color: color.into(), width: 2.0, points }
    }

    pub fn with_width(mut self, width: f64) -> Self {
        self.width = width;
        self
    }
}

#[derive(Debug, Clone)]
pub struct LineChart {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    /// Pin the y axis at zero (costs are never negative).
    pub y_from_zero: bool,
    pub series: Vec<Series>,
}

/// Axis bounds over every finite point.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Bounds {
    x_min: f64,
    x_max: f64,
    y_min: f64,
    y_max: f64,
}

impl LineChart {
    pub fn new(title: impl Into<String>, x_label: impl Into<String>, y_label: impl Into<String>) -> Self {
        LineChart {
            title: title.into(),
            x_label: x_label.into(),
            y_label: y_label.into(),
            y_from_zero: false,
            series: Vec::new(),
        }
    }

    pub fn y_from_zero(mut self, on: bool) -> Self {
        self.y_from_zero = on;
        self
    }

    pub fn series(mut self, series: Series) -> Self {
        self.series.push(series);
        self
    }

    fn bounds(&self) -> Option<Bounds> {
        let mut finite = self.series.iter()
            .flat_map(|s| s.points.iter())
            .filter(|(x, y)| x.is_finite() && y.is_finite());

        let &(x0, y0) = finite.next()?;
        let mut b = Bounds { x_min: x0, x_max: x0, y_min: y0, y_max: y0 };
        for &(x, y) in finite {
            b.x_min = b.x_min.min(x);
            b.x_max = b.x_max.max(x);
            b.y_min = b.y_min.min(y);
            b.y_max = b.y_max.max(y);
        }

        if self.y_from_zero {
            b.y_min = b.y_min.min(0.0);
        }
        let span = b.y_max - b.y_min;
        let pad = if span > 0.0 { span * 0.05 } else { 0.5 };
        b.y_max += pad;
        if !self.y_from_zero || b.y_min < 0.0 {
            b.y_min -= pad;
        }
        if b.x_max == b.x_min {
            b.x_max += 1.0;
        }
        Some(b)
    }

    /// Renders the chart, or a short placeholder when no series has two
    /// finite points to connect.
    pub fn render(&self) -> String {
        let drawable = self.series.iter()
            .any(|s| s.points.iter().filter(|(x, y)| x.is_finite() && y.is_finite()).count() >= 2);
        let bounds = match self.bounds() {
            Some(b) if drawable => b,
            _ => return "<p class=\"hint\">Not enough data to draw a chart.</p>".into(),
        };

        let px = |x: f64, y: f64| -> (f64, f64) {
            let sx = PAD_L + (x - bounds.x_min) / (bounds.x_max - bounds.x_min) * (WIDTH - PAD_L - PAD_R);
            let sy = PAD_T + (bounds.y_max - y) / (bounds.y_max - bounds.y_min) * (HEIGHT - PAD_T - PAD_B);
            (sx, sy)
        };

        // Y grid and labels.
        let y_labels: String = (0..=4).map(|g| {
            let frac = g as f64 / 4.0;
            let val = bounds.y_min + (bounds.y_max - bounds.y_min) * frac;
            let (_, y) = px(bounds.x_min, val);
            format!(
                "<text x=\"{:.1}\" y=\"{:.1}\" text-anchor=\"end\" fill=\"{}\" font-size=\"10\">{}</text>\n\
                 <line x1=\"{:.1}\" y1=\"{:.1}\" x2=\"{:.1}\" y2=\"{:.1}\" stroke=\"{}\" stroke-width=\"1\"/>",
                PAD_L - 4.0, y + 4.0, GREY_TEXT, tick(val),
                PAD_L, y, WIDTH - PAD_R, y, GREY_GRID
            )
        }).collect::<Vec<_>>().join("\n");

        // X labels: both ends and the middle.
        let x_labels: String = [0.0, 0.5, 1.0].iter().map(|&frac| {
            let val = bounds.x_min + (bounds.x_max - bounds.x_min) * frac;
            let (x, _) = px(val, bounds.y_min);
            format!(
                "<text x=\"{:.1}\" y=\"{:.1}\" text-anchor=\"middle\" fill=\"{}\" font-size=\"10\">{}</text>",
                x, HEIGHT - PAD_B + 14.0, GREY_TEXT, tick(val)
            )
        }).collect::<Vec<_>>().join("\n");

        let lines: String = self.series.iter().map(|s| {
            format!(
                "<path d=\"{}\" stroke=\"{}\" stroke-width=\"{}\" fill=\"none\"/>",
                path_data(&s.points, &px), s.color, s.width
            )
        }).collect::<Vec<_>>().join("\n");

        let legend: String = self.series.iter().enumerate().map(|(i, s)| {
            let lx = PAD_L + 12.0 + i as f64 * 110.0;
            format!(
                "<rect x=\"{:.1}\" y=\"{:.1}\" width=\"18\" height=\"4\" fill=\"{}\"/>\n\
                 <text x=\"{:.1}\" y=\"{:.1}\" fill=\"{}\" font-size=\"10\">{}</text>",
                lx, PAD_T + 6.0, s.color,
                lx + 22.0, PAD_T + 10.0, DARK_TEXT, escape(&s.label)
            )
        }).collect::<Vec<_>>().join("\n");

        format!(
            "<svg class=\"chart\" width=\"{w}\" height=\"{h}\" xmlns=\"http://www.w3.org/2000/svg\">\n\
             <text x=\"{tx:.1}\" y=\"16\" text-anchor=\"middle\" fill=\"{dark}\" font-size=\"13\">{title}</text>\n\
             {y_labels}\n{x_labels}\n\
             <text x=\"{xl:.1}\" y=\"{xly:.1}\" text-anchor=\"middle\" fill=\"{dark}\" font-size=\"11\">{x_label}</text>\n\
             <text x=\"14\" y=\"{yly:.1}\" text-anchor=\"middle\" fill=\"{dark}\" font-size=\"11\" \
             transform=\"rotate(-90 14 {yly:.1})\">{y_label}</text>\n\
             {lines}\n\
             <!-- Legend -->\n\
             {legend}\n\
             </svg>",
            w = WIDTH, h = HEIGHT,
            tx = WIDTH / 2.0, dark = DARK_TEXT, title = escape(&self.title),
            y_labels = y_labels, x_labels = x_labels,
            xl = PAD_L + (WIDTH - PAD_L - PAD_R) / 2.0, xly = HEIGHT - 8.0,
            x_label = escape(&self.x_label),
            yly = PAD_T + (HEIGHT - PAD_T - PAD_B) / 2.0,
            y_label = escape(&self.y_label),
            lines = lines, legend = legend,
        )
    }
}

/// SVG path commands; a non-finite point breaks the line into a new segment.
fn path_data<F>(points: &[(f64, f64)], px: &F) -> String
where
    F: Fn(f64, f64) -> (f64, f64),
{
    let mut out = String::new();
    let mut pen_down = false;
    for &(x, y) in points {
        if !(x.is_finite() && y.is_finite()) {
            pen_down = false;
            continue;
        }
        let (sx, sy) = px(x, y);
        let cmd = if pen_down { " L" } else if out.is_empty() { "M" } else { " M" };
        out.push_str(&format!("{}{:.1},{:.1}", cmd, sx, sy));
        pen_down = true;
    }
    out
}

/// Compact tick label: fixed-point for ordinary magnitudes, exponent otherwise.
fn tick(v: f64) -> String {
    let a = v.abs();
    if a != 0.0 && (a < 1e-3 || a >= 1e5) {
        format!("{:.2e}", v)
    } else if a >= 100.0 {
        format!("{:.0}", v)
    } else {
        format!("{:.3}", v)
    }
}

pub fn escape(s: &str) -> String {
    s.replace('&', "&amp;")
     .replace('<', "&lt;")
     .replace('>', "&gt;")
     .replace('"', "&quot;")
}
