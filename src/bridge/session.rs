//! `AssessmentSession` - one assessment driven from JavaScript
//!
//! JS owns the camera and the pose model. Each frame it hands over the
//! 33 landmarks as a flat Float32Array (x, y, visibility per point) and
//! gets back metrics, any completed event and the validity report.

use wasm_bindgen::prelude::*;
use web_sys::CanvasRenderingContext2d;

use super::convert::{from_js_or_default, js_error, to_js};
use crate::activity::{ActivityKind, FrameContext};
use crate::config::AssessmentConfig;
use crate::error::SampleError;
use crate::pipeline::AssessmentPipeline;
use crate::pose::landmarks_from_flat;
use crate::validity::{sample_luma, RgbaFrame, SAMPLE_WINDOW};

#[wasm_bindgen]
pub struct AssessmentSession {
    pipeline: AssessmentPipeline,
}

#[wasm_bindgen]
impl AssessmentSession {
    /// Start a session for `activity` ("squats", "push-ups", ...)
    ///
    /// `config` is an optional plain object; missing fields use defaults.
    #[wasm_bindgen(constructor)]
    pub fn new(activity: &str, config: JsValue) -> Result<AssessmentSession, JsValue> {
        let config: AssessmentConfig = from_js_or_default(config)?;
        let kind = ActivityKind::from_selector(activity);
        let pipeline = AssessmentPipeline::new(kind, config).map_err(js_error)?;
        Ok(Self { pipeline })
    }

    #[wasm_bindgen(getter)]
    pub fn activity(&self) -> String {
        self.pipeline.kind().as_str().to_string()
    }

    #[wasm_bindgen(getter, js_name = repCount)]
    pub fn rep_count(&self) -> u32 {
        self.pipeline.session().rep_count()
    }

    /// Process one frame stamped with the current time
    #[wasm_bindgen(js_name = processFrame)]
    pub fn process_frame(&mut self, landmarks: &[f32]) -> Result<JsValue, JsValue> {
        self.process_frame_at(landmarks, js_sys::Date::now())
    }

    /// Process one frame with an explicit timestamp (ms)
    #[wasm_bindgen(js_name = processFrameAt)]
    pub fn process_frame_at(
        &mut self,
        landmarks: &[f32],
        timestamp_ms: f64,
    ) -> Result<JsValue, JsValue> {
        let ctx = FrameContext {
            timestamp_ms,
            entropy: js_sys::Math::random(),
        };
        let outcome = self
            .pipeline
            .process_frame(&landmarks_from_flat(landmarks), &ctx);
        to_js(&outcome)
    }

    /// Sample lighting from the canvas the video is drawn on
    ///
    /// The reading is applied to the next processed frame. Returns the
    /// mean luma, or `undefined` when the canvas could not be read.
    #[wasm_bindgen(js_name = sampleBrightness)]
    pub fn sample_brightness(&mut self, ctx: &CanvasRenderingContext2d) -> Option<f32> {
        let sample = sample_canvas(ctx);
        let luma = sample.as_ref().ok().copied();
        self.pipeline.observe_brightness(sample);
        luma
    }

    /// Raw metrics gathered so far
    pub fn summary(&self) -> Result<JsValue, JsValue> {
        to_js(&self.pipeline.summary())
    }

    /// End the session; returns the scored result record
    pub fn finish(self) -> Result<JsValue, JsValue> {
        to_js(&self.pipeline.finish())
    }
}

fn sample_canvas(ctx: &CanvasRenderingContext2d) -> Result<f32, SampleError> {
    let canvas = ctx
        .canvas()
        .ok_or_else(|| SampleError::Unavailable("context is not attached to a canvas".into()))?;
    let (width, height) = (canvas.width(), canvas.height());
    if width < SAMPLE_WINDOW || height < SAMPLE_WINDOW {
        return Err(SampleError::FrameTooSmall {
            width,
            height,
            window: SAMPLE_WINDOW,
        });
    }

    let x = ((width - SAMPLE_WINDOW) / 2) as f64;
    let y = ((height - SAMPLE_WINDOW) / 2) as f64;
    let side = SAMPLE_WINDOW as f64;
    let image = ctx
        .get_image_data(x, y, side, side)
        .map_err(|err| SampleError::Unavailable(format!("{:?}", err)))?;
    let pixels = image.data();
    sample_luma(&RgbaFrame::new(image.width(), image.height(), &pixels.0))
}
