//! 2D canvas renderer for the browser build

use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::Renderer;
use crate::error::{RenderError, SetupError};
use crate::sim::Snapshot;

const BACKGROUND: &str = "#001f3f";
const LEFT_PADDLE: &str = "#ff4d6d";
const RIGHT_PADDLE: &str = "#00d1ff";
const BALL: &str = "#ffffff";
const CENTER_LINE: &str = "#ffffff";

/// Draws the field with the canvas 2D context
pub struct CanvasRenderer {
    context: CanvasRenderingContext2d,
    dash: js_sys::Array,
}

impl CanvasRenderer {
    /// Grab the 2D context; a canvas without one is a setup failure
    pub fn new(canvas: &HtmlCanvasElement) -> Result<Self, SetupError> {
        let context = canvas
            .get_context("2d")
            .map_err(|_| SetupError::NoContext2d)?
            .ok_or(SetupError::NoContext2d)?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| SetupError::NoContext2d)?;

        let dash = js_sys::Array::of2(&JsValue::from_f64(5.0), &JsValue::from_f64(5.0));
        Ok(Self { context, dash })
    }
}

impl Renderer for CanvasRenderer {
    fn render(&mut self, frame: &Snapshot) -> Result<(), RenderError> {
        let ctx = &self.context;
        let (w, h) = (frame.width as f64, frame.height as f64);

        ctx.clear_rect(0.0, 0.0, w, h);
        ctx.set_fill_style_str(BACKGROUND);
        ctx.fill_rect(0.0, 0.0, w, h);

        let pw = frame.paddle_width as f64;
        let ph = frame.paddle_height as f64;
        ctx.set_fill_style_str(LEFT_PADDLE);
        ctx.fill_rect(frame.left_paddle.x as f64, frame.left_paddle.y as f64, pw, ph);
        ctx.set_fill_style_str(RIGHT_PADDLE);
        ctx.fill_rect(frame.right_paddle.x as f64, frame.right_paddle.y as f64, pw, ph);

        let size = frame.ball_size as f64;
        ctx.set_fill_style_str(BALL);
        ctx.fill_rect(frame.ball.x as f64, frame.ball.y as f64, size, size);

        ctx.set_line_dash(&self.dash)
            .map_err(|e| RenderError::Canvas(format!("{:?}", e)))?;
        ctx.set_stroke_style_str(CENTER_LINE);
        ctx.begin_path();
        ctx.move_to(w / 2.0, 0.0);
        ctx.line_to(w / 2.0, h);
        ctx.stroke();

        Ok(())
    }
}
