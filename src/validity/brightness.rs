//! Brightness sampling over a small centred pixel window

use crate::error::SampleError;

/// Side of the square sample window, in pixels
pub const SAMPLE_WINDOW: u32 = 50;
/// Mean luma below which the scene is too dark
pub const LOW_LIGHT_LUMA: f32 = 30.0;
/// Luma change between samples that counts as unstable lighting
pub const LIGHTING_JUMP: f32 = 50.0;

/// Borrowed RGBA8 pixels, row-major
#[derive(Clone, Copy, Debug)]
pub struct RgbaFrame<'a> {
    pub width: u32,
    pub height: u32,
    pub data: &'a [u8],
}

impl<'a> RgbaFrame<'a> {
    pub fn new(width: u32, height: u32, data: &'a [u8]) -> Self {
        Self {
            width,
            height,
            data,
        }
    }
}

/// Rec. 601 luma of one pixel
pub fn luma(r: u8, g: u8, b: u8) -> f32 {
    0.299 * r as f32 + 0.587 * g as f32 + 0.114 * b as f32
}

/// Mean luma of the window centred in `frame`
pub fn sample_luma(frame: &RgbaFrame) -> Result<f32, SampleError> {
    if frame.width < SAMPLE_WINDOW || frame.height < SAMPLE_WINDOW {
        return Err(SampleError::FrameTooSmall {
            width: frame.width,
            height: frame.height,
            window: SAMPLE_WINDOW,
        });
    }
    let expected = frame.width as usize * frame.height as usize * 4;
    if frame.data.len() < expected {
        return Err(SampleError::ShortBuffer {
            actual: frame.data.len(),
            expected,
        });
    }

    let x0 = ((frame.width - SAMPLE_WINDOW) / 2) as usize;
    let y0 = ((frame.height - SAMPLE_WINDOW) / 2) as usize;
    let side = SAMPLE_WINDOW as usize;
    let stride = frame.width as usize * 4;

    let mut total = 0.0f32;
    for row in y0..y0 + side {
        let start = row * stride + x0 * 4;
        for px in frame.data[start..start + side * 4].chunks_exact(4) {
            total += luma(px[0], px[1], px[2]);
        }
    }
    Ok(total / (side * side) as f32)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solid(width: u32, height: u32, value: u8) -> Vec<u8> {
        let mut data = Vec::with_capacity((width * height * 4) as usize);
        for _ in 0..width * height {
            data.extend_from_slice(&[value, value, value, 255]);
        }
        data
    }

    #[test]
    fn test_uniform_frame() {
        let data = solid(50, 50, 100);
        let luma = sample_luma(&RgbaFrame::new(50, 50, &data)).unwrap();
        assert!((luma - 100.0).abs() < 0.01);
    }

    #[test]
    fn test_only_centre_is_sampled() {
        let (w, h) = (100u32, 80u32);
        let mut data = solid(w, h, 0);
        for y in 15..65 {
            for x in 25..75 {
                let i = ((y * w + x) * 4) as usize;
                data[i..i + 3].copy_from_slice(&[200, 200, 200]);
            }
        }
        let luma = sample_luma(&RgbaFrame::new(w, h, &data)).unwrap();
        assert!((luma - 200.0).abs() < 0.01);
    }

    #[test]
    fn test_sampling_errors() {
        let data = solid(10, 10, 0);
        assert!(matches!(
            sample_luma(&RgbaFrame::new(10, 10, &data)),
            Err(SampleError::FrameTooSmall { .. })
        ));
        assert!(matches!(
            sample_luma(&RgbaFrame::new(60, 60, &data)),
            Err(SampleError::ShortBuffer { .. })
        ));
    }
}
