use crate::{
    constants::{DEFAULT_LANDMARK_INPUT_SIZE, NUM_HAND_LANDMARKS},
    detector::HandDetector,
    error::Error,
    hand::Hand,
    overlay,
    utils::safe_cast::{f32_to_i32_clamp, usize_to_i32},
    Result,
};
use ndarray::{Array4, CowArray};
use opencv::core::{Mat, Size, Vec3f, CV_32F};
use opencv::imgproc::{self, InterpolationFlags};
use opencv::prelude::*;
use ort::{Environment, Session, Value};
use std::path::Path;
use std::sync::Arc;

/// Values per landmark in the model output (x, y, z)
const COORDS_PER_LANDMARK: usize = 3;

/// Hand landmark detector using `ONNX` Runtime.
///
/// Runs a single-stage 21-point hand landmark regressor on the whole frame.
/// The first model output holds the landmark coordinates in input pixels; an
/// optional second output holds the hand presence score.
pub struct OnnxHandDetector {
    session: Session,
    input_size: i32,
    max_hands: usize,
    presence_threshold: f32,
}

impl OnnxHandDetector {
    /// Create a new hand landmark detector from an `ONNX` model file
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The ONNX model file cannot be loaded
    /// - The ONNX runtime environment cannot be created
    /// - The model has no inputs or outputs
    pub fn new<P: AsRef<Path>>(model_path: P, max_hands: usize, presence_threshold: f32) -> Result<Self> {
        log::info!(
            "Initializing OnnxHandDetector with model: {} (max hands: {})",
            model_path.as_ref().display(),
            max_hands
        );
        if !model_path.as_ref().exists() {
            return Err(Error::InvalidInput(format!(
                "Hand landmark model not found: {}",
                model_path.as_ref().display()
            )));
        }

        let environment = Arc::new(
            Environment::builder()
                .with_name("hand_detector")
                .with_log_level(ort::LoggingLevel::Warning)
                .build()?,
        );

        let session = ort::SessionBuilder::new(&environment)?
            .with_optimization_level(ort::GraphOptimizationLevel::Level3)?
            .with_model_from_file(model_path)?;

        if session.inputs.is_empty() {
            return Err(Error::InvalidInput("Model has no inputs".to_string()));
        }
        if session.outputs.is_empty() {
            return Err(Error::ModelOutputError("Model has no outputs".to_string()));
        }

        Ok(Self {
            session,
            input_size: DEFAULT_LANDMARK_INPUT_SIZE,
            max_hands: max_hands.max(1),
            presence_threshold,
        })
    }

    /// Override the square model input size
    #[must_use]
    pub fn with_input_size(mut self, input_size: i32) -> Self {
        self.input_size = input_size;
        self
    }

    #[must_use]
    pub const fn max_hands(&self) -> usize {
        self.max_hands
    }

    /// Resize, convert to RGB in [0, 1] and pack as a 1xHxWx3 tensor
    #[allow(clippy::cast_sign_loss)] // Input size is validated positive
    fn preprocess(&self, frame: &Mat) -> Result<Array4<f32>> {
        let size = self.input_size as usize;
        let channels = 3;

        let mut resized = Mat::default();
        imgproc::resize(
            frame,
            &mut resized,
            Size::new(self.input_size, self.input_size),
            0.0,
            0.0,
            InterpolationFlags::INTER_LINEAR as i32,
        )?;

        let mut rgb_image = Mat::default();
        imgproc::cvt_color(&resized, &mut rgb_image, imgproc::COLOR_BGR2RGB, 0)?;

        let mut float_image = Mat::default();
        rgb_image.convert_to(&mut float_image, CV_32F, 1.0 / 255.0, 0.0)?;

        let mut data = vec![0.0f32; size * size * channels];
        for row in 0..size {
            for col in 0..size {
                let pixel = float_image.at_2d::<Vec3f>(usize_to_i32(row)?, usize_to_i32(col)?)?;
                let base = (row * size + col) * channels;
                data[base..base + channels].copy_from_slice(&[pixel[0], pixel[1], pixel[2]]);
            }
        }

        Array4::from_shape_vec((1, size, size, channels), data)
            .map_err(|e| Error::InvalidInput(format!("Failed to create input tensor: {e}")))
    }

    /// Run the model, returning flat landmark coordinates and the presence score if any
    fn forward(&self, input: Array4<f32>) -> Result<(Vec<f32>, Option<f32>)> {
        let cow_array = CowArray::from(input.into_dyn());
        let input_tensor = Value::from_array(self.session.allocator(), &cow_array)?;

        let outputs = self.session.run(vec![input_tensor])?;
        let mut outputs = outputs.into_iter();

        let coords_output = outputs
            .next()
            .ok_or_else(|| Error::ModelOutputError("No output from model".to_string()))?;
        let coords_tensor = coords_output.try_extract::<f32>()?;
        let coords: Vec<f32> = coords_tensor.view().iter().copied().collect();

        let presence = match outputs.next() {
            Some(score_output) => score_output.try_extract::<f32>()?.view().iter().next().copied(),
            None => None,
        };

        Ok((coords, presence))
    }

    /// Scale model-space coordinates back onto the frame
    #[allow(clippy::cast_precision_loss)]
    fn postprocess(&self, coords: &[f32], frame_width: i32, frame_height: i32, score: f32) -> Result<Hand> {
        let needed = NUM_HAND_LANDMARKS * COORDS_PER_LANDMARK;
        if coords.len() < needed {
            return Err(Error::ModelOutputError(format!(
                "Expected at least {needed} landmark values, got {}",
                coords.len()
            )));
        }

        let scale_x = frame_width as f32 / self.input_size as f32;
        let scale_y = frame_height as f32 / self.input_size as f32;
        let points: Vec<(i32, i32)> = coords
            .chunks_exact(COORDS_PER_LANDMARK)
            .take(NUM_HAND_LANDMARKS)
            .map(|c| {
                (
                    f32_to_i32_clamp(c[0] * scale_x, 0, frame_width - 1),
                    f32_to_i32_clamp(c[1] * scale_y, 0, frame_height - 1),
                )
            })
            .collect();

        Ok(Hand::from_points(&points, score))
    }
}

impl HandDetector for OnnxHandDetector {
    fn detect(&mut self, frame: &mut Mat) -> Result<Vec<Hand>> {
        if frame.empty() {
            return Ok(Vec::new());
        }

        let input = self.preprocess(frame)?;
        let (coords, presence) = self.forward(input)?;

        // Models without a presence head always report a hand
        let score = presence.unwrap_or(1.0);
        if score < self.presence_threshold {
            log::debug!("No hand (presence {score:.2})");
            return Ok(Vec::new());
        }

        let hand = self.postprocess(&coords, frame.cols(), frame.rows(), score)?;
        let mut hands = vec![hand];
        hands.truncate(self.max_hands);

        for hand in &hands {
            overlay::draw_hand(frame, hand)?;
        }
        Ok(hands)
    }
}
