//! The configuration object handed to Chart.js.
//!
//! Everything JSON-representable lives in [`ChartConfig`]. The fill gradient
//! and the label callbacks need live browser objects, so the backend attaches
//! them after materialising the JSON; their text comes from the helpers at the
//! bottom of this module.

use serde::Serialize;
use serde_json::{Map, Value};

use super::data::{AxisScale, ScoreSeries};
use crate::core::format::{format_percent, format_score};
use crate::t;

const ACCENT: &str = "#4F46E5";
const WHITE: &str = "#ffffff";
const INK: &str = "#1e293b";
const MUTED: &str = "#64748b";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartConfig {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub data: LineData,
    pub options: ChartOptions,
    /// Applied by the backend as the dataset's `backgroundColor`.
    #[serde(skip)]
    pub fill: FillGradient,
}

/// Vertical fade under the line, from `top` at y=0 to `bottom` at `height`.
#[derive(Debug, Clone, PartialEq)]
pub struct FillGradient {
    pub height: f64,
    pub top: &'static str,
    pub bottom: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineData {
    pub labels: Vec<String>,
    pub datasets: Vec<LineDataset>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LineDataset {
    pub label: String,
    pub data: Vec<f64>,
    pub border_color: &'static str,
    pub border_width: u32,
    pub tension: f64,
    pub fill: bool,
    pub point_background_color: &'static str,
    pub point_border_color: &'static str,
    pub point_border_width: u32,
    pub point_radius: u32,
    pub point_hover_radius: u32,
    pub point_hover_background_color: &'static str,
    pub point_hover_border_color: &'static str,
    pub point_hover_border_width: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartOptions {
    pub responsive: bool,
    pub maintain_aspect_ratio: bool,
    pub animation: Animation,
    pub interaction: Interaction,
    pub plugins: Plugins,
    pub scales: Scales,
    pub hover: Hover,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Animation {
    pub duration: u32,
    pub easing: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Interaction {
    pub mode: &'static str,
    pub intersect: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Hover {
    pub animation_duration: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Font {
    pub size: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<&'static str>,
}

impl Font {
    fn regular(size: u32) -> Self {
        Self { size, weight: None }
    }

    fn bold(size: u32) -> Self {
        Self {
            size,
            weight: Some("bold"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Plugins {
    pub legend: Legend,
    pub tooltip: Tooltip,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Legend {
    pub display: bool,
    pub position: &'static str,
    pub labels: LegendLabels,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LegendLabels {
    pub font: Font,
    pub color: &'static str,
    pub padding: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Tooltip {
    pub background_color: &'static str,
    pub title_font: Font,
    pub body_font: Font,
    pub padding: u32,
    pub corner_radius: u32,
    pub display_colors: bool,
    /// `title`, `label` and `afterLabel` are attached by the backend.
    pub callbacks: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Scales {
    pub y: ScoreAxis,
    pub x: DateAxis,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreAxis {
    pub begin_at_zero: bool,
    pub max: f64,
    pub grid: Grid,
    /// `callback` is attached by the backend.
    pub ticks: Ticks,
    pub title: AxisTitle,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DateAxis {
    pub grid: Grid,
    pub ticks: Ticks,
    pub title: AxisTitle,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Grid {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub draw_border: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Ticks {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub step_size: Option<f64>,
    pub font: Font,
    pub color: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_rotation: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_rotation: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AxisTitle {
    pub display: bool,
    pub text: String,
    pub font: Font,
    pub color: &'static str,
}

impl AxisTitle {
    fn new(text: String) -> Self {
        Self {
            display: true,
            text,
            font: Font::bold(16),
            color: INK,
        }
    }
}

impl ChartConfig {
    /// Styled line chart for a student's score history.
    pub fn score_line(series: &ScoreSeries, scale: &AxisScale, gradient_height: f64) -> Self {
        let dataset = LineDataset {
            label: t!("chart-dataset-label"),
            data: series.scores().to_vec(),
            border_color: ACCENT,
            border_width: 3,
            tension: 0.4,
            fill: true,
            point_background_color: ACCENT,
            point_border_color: WHITE,
            point_border_width: 3,
            point_radius: 6,
            point_hover_radius: 10,
            point_hover_background_color: ACCENT,
            point_hover_border_color: WHITE,
            point_hover_border_width: 4,
        };

        let options = ChartOptions {
            responsive: true,
            maintain_aspect_ratio: false,
            animation: Animation {
                duration: 1500,
                easing: "easeOutQuart",
            },
            interaction: Interaction {
                mode: "index",
                intersect: false,
            },
            plugins: Plugins {
                legend: Legend {
                    display: true,
                    position: "top",
                    labels: LegendLabels {
                        font: Font::bold(16),
                        color: INK,
                        padding: 20,
                    },
                },
                tooltip: Tooltip {
                    background_color: "rgba(30, 41, 59, 0.95)",
                    title_font: Font::bold(14),
                    body_font: Font::regular(16),
                    padding: 12,
                    corner_radius: 8,
                    display_colors: false,
                    callbacks: Map::new(),
                },
            },
            scales: Scales {
                y: ScoreAxis {
                    begin_at_zero: true,
                    max: scale.y_max,
                    grid: Grid {
                        display: None,
                        color: Some("rgba(148, 163, 184, 0.2)"),
                        draw_border: Some(false),
                    },
                    ticks: Ticks {
                        step_size: Some(scale.step),
                        font: Font::regular(14),
                        color: MUTED,
                        max_rotation: None,
                        min_rotation: None,
                    },
                    title: AxisTitle::new(t!("chart-axis-score")),
                },
                x: DateAxis {
                    grid: Grid {
                        display: Some(false),
                        color: None,
                        draw_border: None,
                    },
                    ticks: Ticks {
                        step_size: None,
                        font: Font::regular(14),
                        color: MUTED,
                        max_rotation: Some(45),
                        min_rotation: Some(0),
                    },
                    title: AxisTitle::new(t!("chart-axis-date")),
                },
            },
            hover: Hover {
                animation_duration: 300,
            },
        };

        Self {
            kind: "line",
            data: LineData {
                labels: series.labels().to_vec(),
                datasets: vec![dataset],
            },
            options,
            fill: FillGradient {
                height: gradient_height,
                top: "rgba(79, 70, 229, 0.3)",
                bottom: "rgba(79, 70, 229, 0.05)",
            },
        }
    }
}

/// Y tick label, e.g. `14/20`.
pub fn tick_label(value: f64, scale: &AxisScale) -> String {
    format!("{}/{}", format_score(value), format_score(scale.max_score))
}

pub fn tooltip_title(label: &str) -> String {
    t!("chart-tooltip-date", date = label)
}

pub fn tooltip_score(score: f64, scale: &AxisScale) -> String {
    t!(
        "chart-tooltip-score",
        score = format_score(score),
        max = format_score(scale.max_score)
    )
}

pub fn tooltip_performance(score: f64, scale: &AxisScale) -> String {
    t!(
        "chart-tooltip-performance",
        percent = format_percent(scale.percentage(score))
    )
}
