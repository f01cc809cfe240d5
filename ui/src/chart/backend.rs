//! Seam between the score panel and the charting library that draws it.

use std::fmt;
use std::rc::Rc;

use thiserror::Error;

use super::config::ChartConfig;
use super::data::AxisScale;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("chart library is not loaded on this page")]
    LibraryMissing,
    #[error("canvas `{0}` is not on the page")]
    CanvasMissing(String),
    #[error("chart configuration could not be encoded: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("chart library rejected the configuration: {0}")]
    Js(String),
}

/// Something that can draw a [`ChartConfig`] onto a canvas.
pub trait ChartBackend {
    fn render(
        &self,
        canvas_id: &str,
        config: &ChartConfig,
        scale: &AxisScale,
    ) -> Result<(), ChartError>;
}

/// Shared handle so a backend can travel through component props.
#[derive(Clone)]
pub struct ChartBackendHandle(Rc<dyn ChartBackend>);

impl ChartBackendHandle {
    pub fn new(backend: impl ChartBackend + 'static) -> Self {
        Self(Rc::new(backend))
    }

    pub fn render(
        &self,
        canvas_id: &str,
        config: &ChartConfig,
        scale: &AxisScale,
    ) -> Result<(), ChartError> {
        self.0.render(canvas_id, config, scale)
    }
}

impl PartialEq for ChartBackendHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for ChartBackendHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ChartBackendHandle")
    }
}

/// Backend for this platform: Chart.js from the page in the browser,
/// nothing elsewhere.
pub fn default_backend() -> ChartBackendHandle {
    #[cfg(target_arch = "wasm32")]
    {
        ChartBackendHandle::new(chart_js::ChartJs::from_global())
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        ChartBackendHandle::new(Headless)
    }
}

/// Off-web stand-in; there is no library to draw with.
#[cfg(not(target_arch = "wasm32"))]
struct Headless;

#[cfg(not(target_arch = "wasm32"))]
impl ChartBackend for Headless {
    fn render(
        &self,
        _canvas_id: &str,
        _config: &ChartConfig,
        _scale: &AxisScale,
    ) -> Result<(), ChartError> {
        Err(ChartError::LibraryMissing)
    }
}

#[cfg(target_arch = "wasm32")]
pub use chart_js::ChartJs;

#[cfg(target_arch = "wasm32")]
mod chart_js {
    use js_sys::{Array, Function, Reflect};
    use wasm_bindgen::prelude::*;
    use wasm_bindgen::JsCast;
    use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

    use super::{ChartBackend, ChartError};
    use crate::chart::config::{self, ChartConfig, FillGradient};
    use crate::chart::data::AxisScale;
    use crate::core::platform;

    /// Chart.js, reached through an explicit constructor handle.
    pub struct ChartJs {
        constructor: JsValue,
    }

    impl ChartJs {
        pub fn new(constructor: JsValue) -> Self {
            Self { constructor }
        }

        /// The `Chart` global a `<script>` tag installs.
        pub fn from_global() -> Self {
            let constructor = Reflect::get(&js_sys::global(), &JsValue::from_str("Chart"))
                .unwrap_or(JsValue::UNDEFINED);
            Self::new(constructor)
        }
    }

    impl ChartBackend for ChartJs {
        fn render(
            &self,
            canvas_id: &str,
            config: &ChartConfig,
            scale: &AxisScale,
        ) -> Result<(), ChartError> {
            let constructor: &Function = self
                .constructor
                .dyn_ref()
                .ok_or(ChartError::LibraryMissing)?;

            let canvas: HtmlCanvasElement = platform::document()
                .and_then(|doc| doc.get_element_by_id(canvas_id))
                .and_then(|el| el.dyn_into().ok())
                .ok_or_else(|| ChartError::CanvasMissing(canvas_id.to_string()))?;

            let json = serde_json::to_string(config)?;
            let options = js_sys::JSON::parse(&json).map_err(js_error)?;

            let dataset = path(&options, &["data", "datasets", "0"])?;
            if let Some(gradient) = fill_gradient(&canvas, &config.fill)? {
                set(&dataset, "backgroundColor", &gradient)?;
            }

            let callbacks = path(&options, &["options", "plugins", "tooltip", "callbacks"])?;
            set(&callbacks, "title", &title_callback())?;
            set(&callbacks, "label", &label_callback(*scale))?;
            set(&callbacks, "afterLabel", &after_label_callback(*scale))?;

            let ticks = path(&options, &["options", "scales", "y", "ticks"])?;
            set(&ticks, "callback", &tick_callback(*scale))?;

            Reflect::construct(constructor, &Array::of2(&canvas, &options)).map_err(js_error)?;
            Ok(())
        }
    }

    fn fill_gradient(
        canvas: &HtmlCanvasElement,
        fill: &FillGradient,
    ) -> Result<Option<JsValue>, ChartError> {
        let Some(context) = canvas
            .get_context("2d")
            .map_err(js_error)?
            .and_then(|ctx| ctx.dyn_into::<CanvasRenderingContext2d>().ok())
        else {
            tracing::debug!("no 2d context; drawing without gradient fill");
            return Ok(None);
        };
        let gradient = context.create_linear_gradient(0.0, 0.0, 0.0, fill.height);
        gradient.add_color_stop(0.0, fill.top).map_err(js_error)?;
        gradient.add_color_stop(1.0, fill.bottom).map_err(js_error)?;
        Ok(Some(gradient.into()))
    }

    fn title_callback() -> JsValue {
        callback(move |items: JsValue| {
            let label = Reflect::get(&Array::from(&items).get(0), &JsValue::from_str("label"))
                .ok()
                .and_then(|label| label.as_string())
                .unwrap_or_default();
            JsValue::from_str(&config::tooltip_title(&label))
        })
    }

    fn label_callback(scale: AxisScale) -> JsValue {
        callback(move |context: JsValue| {
            JsValue::from_str(&config::tooltip_score(parsed_y(&context), &scale))
        })
    }

    fn after_label_callback(scale: AxisScale) -> JsValue {
        callback(move |context: JsValue| {
            JsValue::from_str(&config::tooltip_performance(parsed_y(&context), &scale))
        })
    }

    fn tick_callback(scale: AxisScale) -> JsValue {
        callback(move |value: JsValue| {
            JsValue::from_str(&config::tick_label(value.as_f64().unwrap_or(0.0), &scale))
        })
    }

    fn callback(f: impl Fn(JsValue) -> JsValue + 'static) -> JsValue {
        Closure::<dyn Fn(JsValue) -> JsValue>::new(f).into_js_value()
    }

    fn parsed_y(context: &JsValue) -> f64 {
        Reflect::get(context, &JsValue::from_str("parsed"))
            .and_then(|parsed| Reflect::get(&parsed, &JsValue::from_str("y")))
            .ok()
            .and_then(|y| y.as_f64())
            .unwrap_or(0.0)
    }

    fn path(root: &JsValue, keys: &[&str]) -> Result<JsValue, ChartError> {
        keys.iter().try_fold(root.clone(), |node, key| {
            Reflect::get(&node, &JsValue::from_str(key)).map_err(js_error)
        })
    }

    fn set(target: &JsValue, key: &str, value: &JsValue) -> Result<(), ChartError> {
        Reflect::set(target, &JsValue::from_str(key), value)
            .map_err(js_error)
            .map(|_| ())
    }

    fn js_error(value: JsValue) -> ChartError {
        ChartError::Js(
            value
                .as_string()
                .or_else(|| js_sys::Error::from(value).message().as_string())
                .unwrap_or_else(|| "unknown error".to_string()),
        )
    }
}
