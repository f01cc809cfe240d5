//! Score progress chart on the student profile page.

mod backend;
mod config;
mod data;
mod mount;
mod panel;

pub use backend::{default_backend, ChartBackend, ChartBackendHandle, ChartError};
#[cfg(target_arch = "wasm32")]
pub use backend::ChartJs;
pub use config::{
    tick_label, tooltip_performance, tooltip_score, tooltip_title, ChartConfig, FillGradient,
};
pub use data::{AxisScale, ChartData, ChartDataError, ScoreSeries};
#[cfg(target_arch = "wasm32")]
pub use mount::prepare;
pub use mount::{resolve_state, ChartMount};
pub use panel::{draw, Celebration, ChartPanel, ChartState};
