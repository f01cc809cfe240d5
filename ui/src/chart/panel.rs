use dioxus::prelude::*;
use tracing::{debug, error};

use super::backend::{ChartBackendHandle, ChartError};
use super::config::ChartConfig;
use super::data::ScoreSeries;
use super::mount::LOADING_ID;
use crate::core::config::PageConfig;
use crate::core::{platform, timing};
use crate::t;

const ERROR_STYLE: &str = "text-align:center; color:#ef4444;";
const EMPTY_STYLE: &str = "text-align:center; padding:60px 20px; color:#64748b;";

const GLOW_SHADOW: &str = "0 0 20px rgba(79, 70, 229, 0.4)";
const SETTLED_SHADOW: &str = "0 2px 8px rgba(0,0,0,0.1)";

/// What the chart container should show once the data has been read.
#[derive(Debug, Clone, PartialEq)]
pub enum ChartState {
    /// The embedded data could not be decoded.
    Failed,
    /// No exams recorded yet.
    Empty,
    Ready(ScoreSeries),
}

/// Build the configuration for `series` and hand it to the backend.
pub fn draw(
    backend: &ChartBackendHandle,
    series: &ScoreSeries,
    config: &PageConfig,
) -> Result<ChartConfig, ChartError> {
    let scale = series.axis(config.axis_floor);
    let chart = ChartConfig::score_line(series, &scale, config.gradient_height);
    backend.render(&config.chart_id, &chart, &scale)?;
    Ok(chart)
}

/// Two-step box-shadow pulse on the chart container after an improvement.
#[derive(Debug, Clone, PartialEq)]
pub struct Celebration {
    pub delay_ms: u32,
    pub hold_ms: u32,
}

impl Celebration {
    /// Only when the latest score strictly beats the previous one.
    pub fn for_series(series: &ScoreSeries, config: &PageConfig) -> Option<Self> {
        series.improved().then(|| Self {
            delay_ms: config.glow_delay_ms,
            hold_ms: config.glow_hold_ms,
        })
    }

    /// Wait, hand `apply` the glow, wait again, then the settled shadow.
    pub async fn play(self, mut apply: impl FnMut(&'static str)) {
        timing::sleep_ms(self.delay_ms).await;
        apply(GLOW_SHADOW);
        timing::sleep_ms(self.hold_ms).await;
        apply(SETTLED_SHADOW);
    }
}

#[component]
pub fn ChartPanel(
    state: ChartState,
    backend: ChartBackendHandle,
    config: PageConfig,
    container_id: String,
) -> Element {
    let body = match state {
        ChartState::Failed => rsx! {
            p { class: "score-chart__status score-chart__status--error", style: ERROR_STYLE,
                {t!("chart-error")}
            }
        },
        ChartState::Empty => rsx! {
            div { class: "score-chart__empty", style: EMPTY_STYLE,
                h3 { {t!("chart-empty-title")} }
                p { {t!("chart-empty-hint")} }
                span { style: "font-size:60px;", "📊" }
            }
        },
        ChartState::Ready(series) => rsx! {
            ScoreCanvas { series, backend, config, container_id }
        },
    };

    rsx! {
        div {
            class: "score-chart__body",
            onmounted: move |_| platform::remove_element(LOADING_ID),
            {body}
        }
    }
}

#[component]
fn ScoreCanvas(
    series: ScoreSeries,
    backend: ChartBackendHandle,
    config: PageConfig,
    container_id: String,
) -> Element {
    let mut failed = use_signal(|| false);

    if failed() {
        return rsx! {
            p { class: "score-chart__status score-chart__status--error", style: ERROR_STYLE,
                {t!("chart-unavailable")}
            }
        };
    }

    let canvas_id = config.chart_id.clone();

    rsx! {
        canvas {
            id: "{canvas_id}",
            onmounted: move |_| {
                match draw(&backend, &series, &config) {
                    Ok(_) => {
                        debug!(points = series.len(), "score chart drawn");
                        if let Some(celebration) = Celebration::for_series(&series, &config) {
                            let container = container_id.clone();
                            spawn(celebration.play(move |shadow| {
                                platform::set_box_shadow(&container, shadow)
                            }));
                        }
                    }
                    Err(err) => {
                        error!(%err, "score chart could not be drawn");
                        failed.set(true);
                    }
                }
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::backend::ChartBackend;
    use crate::chart::data::{AxisScale, ChartData};
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Default)]
    struct Recorder {
        drawn: RefCell<Vec<(String, ChartConfig)>>,
    }

    struct Shared(Rc<Recorder>);

    impl ChartBackend for Shared {
        fn render(
            &self,
            canvas_id: &str,
            config: &ChartConfig,
            _scale: &AxisScale,
        ) -> Result<(), ChartError> {
            self.0.drawn.borrow_mut().push((canvas_id.to_string(), config.clone()));
            Ok(())
        }
    }

    fn series(scores: &str) -> ScoreSeries {
        let count = serde_json::from_str::<Vec<f64>>(scores).unwrap().len();
        let labels: Vec<String> = (1..=count).map(|day| format!("Jan {day:02}, 2024")).collect();
        let labels = serde_json::to_string(&labels).unwrap();
        match ChartData::parse(Some(&labels), Some(scores)).unwrap() {
            ChartData::Ready(series) => series,
            other => panic!("expected a ready series, got {other:?}"),
        }
    }

    #[test]
    fn draw_hands_the_configured_canvas_to_the_backend() {
        crate::i18n::set_language("en-US").unwrap();
        let recorder = Rc::new(Recorder::default());
        let backend = ChartBackendHandle::new(Shared(recorder.clone()));

        let chart = draw(&backend, &series("[25, 5]"), &PageConfig::default()).unwrap();

        let drawn = recorder.drawn.borrow();
        assert_eq!(drawn.len(), 1);
        assert_eq!(drawn[0].0, "scoreChart");
        assert_eq!(drawn[0].1, chart);
        assert_eq!(chart.options.scales.y.max, 27.0);
        assert_eq!(chart.options.scales.y.ticks.step_size, Some(5.0));
    }

    #[test]
    fn draw_honours_a_lower_axis_floor() {
        crate::i18n::set_language("en-US").unwrap();
        let backend = ChartBackendHandle::new(Shared(Rc::new(Recorder::default())));
        let config = PageConfig::default().with_axis_floor(10.0);
        let chart = draw(&backend, &series("[4, 6]"), &config).unwrap();
        assert_eq!(chart.options.scales.y.max, 12.0);
    }

    #[test]
    fn celebration_only_on_strict_improvement() {
        let config = PageConfig::default();
        assert_eq!(
            Celebration::for_series(&series("[10, 15]"), &config),
            Some(Celebration {
                delay_ms: 1_000,
                hold_ms: 1_000
            })
        );
        assert_eq!(Celebration::for_series(&series("[15, 10]"), &config), None);
        assert_eq!(Celebration::for_series(&series("[15, 15]"), &config), None);
        assert_eq!(Celebration::for_series(&series("[15]"), &config), None);
    }

    #[tokio::test(start_paused = true)]
    async fn celebration_glows_then_settles() {
        let celebration = Celebration::for_series(
            &series("[10, 15]"),
            &PageConfig::default().with_glow_timing(1_000, 1_000),
        )
        .unwrap();
        let start = tokio::time::Instant::now();
        let mut applied = Vec::new();
        celebration
            .play(|shadow| applied.push((start.elapsed().as_millis(), shadow)))
            .await;

        assert_eq!(applied.len(), 2);
        assert_eq!(applied[0].1, GLOW_SHADOW);
        assert_eq!(applied[1].1, SETTLED_SHADOW);
        assert!(applied[0].0 >= 1_000);
        assert!(applied[1].0 >= 2_000);
    }
}
