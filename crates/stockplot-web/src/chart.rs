use serde::Serialize;
use serde_json::json;
use std::fmt;
use stockplot_client::series::PriceSeries;

/// Where the browser fetches the charting runtime from.
pub const CDN_BASE_URL: &str = "https://cdn.jsdelivr.net/npm/";

/// Where this server exposes its own scripts; see the `/static` mount.
pub const STATIC_BASE_URL: &str = "/static/js/";

const RUNTIME_ASSETS: [&str; 2] = [
    "chart.js@4.4.1/dist/chart.umd.min.js",
    "chartjs-adapter-date-fns@3.0.0/dist/chartjs-adapter-date-fns.bundle.min.js",
];

const EMBED_LOADER: &str = "stockplot-embed.js";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AxisType {
    Linear,
    Datetime,
}

impl AxisType {
    fn scale(self) -> &'static str {
        match self {
            AxisType::Linear => "linear",
            AxisType::Datetime => "time",
        }
    }
}

/// Base urls a [`Snippet`] points its `<script>` tags at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmbedOptions {
    /// Prefix of the embed loader served by this application.
    pub embed_base_url: String,
    /// Prefix of the charting runtime.
    pub static_path: String,
}

impl Default for EmbedOptions {
    fn default() -> Self {
        EmbedOptions {
            embed_base_url: STATIC_BASE_URL.to_string(),
            static_path: CDN_BASE_URL.to_string(),
        }
    }
}

/// Line chart of closing prices.
///
/// Built explicitly and handed to [`LineChart::snippet`]; nothing is kept
/// between charts.
///
/// ```ignore
/// let chart = LineChart::new("close")
///     .width(800)
///     .height(600)
///     .color("#1B9E77")
///     .x_axis(AxisType::Datetime)
///     .title("NVDA price at close")
///     .series(series);
/// let snippet = chart.snippet(&EmbedOptions::default());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct LineChart {
    name: String,
    width: u32,
    height: u32,
    color: String,
    x_axis: AxisType,
    title: String,
    series: PriceSeries,
}

impl LineChart {
    pub fn new(name: impl Into<String>) -> Self {
        LineChart {
            name: name.into(),
            width: 600,
            height: 600,
            color: "#000000".to_string(),
            x_axis: AxisType::Linear,
            title: String::new(),
            series: PriceSeries::default(),
        }
    }

    pub fn width(mut self, width: u32) -> Self {
        self.width = width;
        self
    }

    pub fn height(mut self, height: u32) -> Self {
        self.height = height;
        self
    }

    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    pub fn x_axis(mut self, x_axis: AxisType) -> Self {
        self.x_axis = x_axis;
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn series(mut self, series: PriceSeries) -> Self {
        self.series = series;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn stroke(&self) -> &str {
        &self.color
    }

    pub fn axis_type(&self) -> AxisType {
        self.x_axis
    }

    pub fn heading(&self) -> &str {
        &self.title
    }

    pub fn points(&self) -> &PriceSeries {
        &self.series
    }

    /// Configuration object handed to the charting runtime.
    pub fn config(&self) -> serde_json::Value {
        let labels: Vec<String> = self.series.dates().map(|d| d.to_string()).collect();
        let data: Vec<f64> = self.series.closes().collect();

        json!({
            "type": "line",
            "data": {
                "labels": labels,
                "datasets": [{
                    "label": self.name,
                    "data": data,
                    "borderColor": self.color,
                    "backgroundColor": self.color,
                    "borderWidth": 2,
                    "pointRadius": 0,
                    "fill": false,
                }],
            },
            "options": {
                "responsive": false,
                "animation": false,
                "plugins": {
                    "title": { "display": true, "text": self.title },
                    "legend": { "display": false },
                },
                "scales": {
                    "x": { "type": self.x_axis.scale() },
                },
            },
        })
    }

    /// Element id prefix shared by the container, canvas and config tags.
    pub fn element_id(&self) -> String {
        let raw = format!("{}-{}", self.name, self.title);
        raw.chars()
            .map(|c| match c {
                'a'..='z' | 'A'..='Z' | '0'..='9' | '-' | '_' => c,
                _ => '_',
            })
            .collect()
    }

    pub fn snippet(&self, options: &EmbedOptions) -> Snippet {
        let id = self.element_id();
        let (width, height) = self.dimensions();

        // `<` never reaches the markup, so the config cannot close its own tag
        let config = self.config().to_string().replace('<', "\\u003c");

        let mut html = String::new();
        html.push_str(&format!(
            "<div class=\"stockplot\" id=\"{id}\" style=\"width: {width}px; height: {height}px;\">\n"
        ));
        html.push_str(&format!(
            "  <canvas id=\"{id}-canvas\" width=\"{width}\" height=\"{height}\"></canvas>\n"
        ));
        html.push_str("</div>\n");
        html.push_str(&format!(
            "<script type=\"application/json\" id=\"{id}-config\">{config}</script>\n"
        ));
        for asset in RUNTIME_ASSETS {
            html.push_str(&format!(
                "<script src=\"{}{asset}\"></script>\n",
                escape_attr(&options.static_path)
            ));
        }
        html.push_str(&format!(
            "<script src=\"{}{EMBED_LOADER}\" data-chart=\"{id}\"></script>\n",
            escape_attr(&options.embed_base_url)
        ));

        Snippet(html)
    }
}

fn escape_attr(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Embeddable HTML/JS fragment drawing one chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Snippet(String);

impl Snippet {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Snippet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
