// SPDX-License-Identifier: MPL-2.0
//! Per-frame visual effects.
//!
//! Every transform is pure: it reads the input frame and returns a new RGBA
//! frame of the same size. Alpha is carried over unchanged.

use crate::domain::video::Effect;
use image_rs::imageops::{self, FilterType};
use image_rs::{GrayImage, Rgba, RgbaImage};

/// Gaussian sigma matching a 15x15 kernel.
const BLUR_SIGMA: f32 = 2.6;

/// Canny hysteresis thresholds.
const EDGE_LOW_THRESHOLD: f32 = 100.0;
const EDGE_HIGH_THRESHOLD: f32 = 200.0;

/// Sepia tone matrix, rows are output R, G, B.
const SEPIA: [[f32; 3]; 3] = [
    [0.393, 0.769, 0.189],
    [0.349, 0.686, 0.168],
    [0.272, 0.534, 0.131],
];

/// Applies `effect` to `frame`.
#[must_use]
pub fn apply(effect: Effect, frame: &RgbaImage) -> RgbaImage {
    match effect {
        Effect::Normal => frame.clone(),
        Effect::Grayscale => grayscale(frame),
        Effect::Blur => imageops::blur(frame, BLUR_SIGMA),
        Effect::Edge => edges(frame),
        Effect::Sepia => sepia(frame),
    }
}

/// Resizes `frame` to exactly `width` x `height` with Lanczos3 filtering.
///
/// Zero dimensions and same-size requests return the frame unchanged.
#[must_use]
pub fn resize_to(frame: &RgbaImage, width: u32, height: u32) -> RgbaImage {
    if width == 0 || height == 0 || frame.dimensions() == (width, height) {
        return frame.clone();
    }
    imageops::resize(frame, width, height, FilterType::Lanczos3)
}

fn grayscale(frame: &RgbaImage) -> RgbaImage {
    let luma = imageops::grayscale(frame);
    with_alpha_of(frame, &luma)
}

fn edges(frame: &RgbaImage) -> RgbaImage {
    let luma = imageops::grayscale(frame);
    let map = imageproc::edges::canny(&luma, EDGE_LOW_THRESHOLD, EDGE_HIGH_THRESHOLD);
    with_alpha_of(frame, &map)
}

fn sepia(frame: &RgbaImage) -> RgbaImage {
    let mut out = frame.clone();
    for pixel in out.pixels_mut() {
        let [r, g, b, a] = pixel.0;
        let rgb = [f32::from(r), f32::from(g), f32::from(b)];
        let channel = |row: [f32; 3]| -> u8 {
            let value = row[0] * rgb[0] + row[1] * rgb[1] + row[2] * rgb[2];
            value.round().clamp(0.0, 255.0) as u8
        };
        *pixel = Rgba([channel(SEPIA[0]), channel(SEPIA[1]), channel(SEPIA[2]), a]);
    }
    out
}

/// Expands a single-channel image back to RGBA, keeping `source`'s alpha.
fn with_alpha_of(source: &RgbaImage, gray: &GrayImage) -> RgbaImage {
    RgbaImage::from_fn(source.width(), source.height(), |x, y| {
        let v = gray.get_pixel(x, y).0[0];
        let a = source.get_pixel(x, y).0[3];
        Rgba([v, v, v, a])
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gradient(width: u32, height: u32) -> RgbaImage {
        RgbaImage::from_fn(width, height, |x, y| {
            Rgba([(x * 17 % 256) as u8, (y * 29 % 256) as u8, ((x + y) * 7 % 256) as u8, 200])
        })
    }

    #[test]
    fn normal_is_identity() {
        let frame = gradient(16, 9);
        assert_eq!(apply(Effect::Normal, &frame), frame);
    }

    #[test]
    fn every_effect_keeps_dimensions_and_is_deterministic() {
        let frame = gradient(32, 18);
        for effect in Effect::ALL {
            let first = apply(effect, &frame);
            let second = apply(effect, &frame);
            assert_eq!(first.dimensions(), frame.dimensions(), "{effect}");
            assert_eq!(first, second, "{effect}");
        }
    }

    #[test]
    fn grayscale_has_equal_channels_and_keeps_alpha() {
        let out = apply(Effect::Grayscale, &gradient(8, 8));
        for pixel in out.pixels() {
            let [r, g, b, a] = pixel.0;
            assert_eq!(r, g);
            assert_eq!(g, b);
            assert_eq!(a, 200);
        }
    }

    #[test]
    fn sepia_saturates_white() {
        let white = RgbaImage::from_pixel(2, 2, Rgba([255, 255, 255, 255]));
        let out = apply(Effect::Sepia, &white);
        assert_eq!(out.get_pixel(0, 0).0, [255, 255, 239, 255]);
    }

    #[test]
    fn sepia_of_black_stays_black() {
        let black = RgbaImage::from_pixel(2, 2, Rgba([0, 0, 0, 255]));
        assert_eq!(apply(Effect::Sepia, &black), black);
    }

    #[test]
    fn edge_map_of_flat_frame_is_empty() {
        let flat = RgbaImage::from_pixel(16, 16, Rgba([90, 90, 90, 255]));
        let out = apply(Effect::Edge, &flat);
        assert!(out.pixels().all(|p| p.0[..3] == [0, 0, 0]));
    }

    #[test]
    fn edge_map_finds_a_hard_boundary() {
        let split = RgbaImage::from_fn(32, 32, |x, _| {
            if x < 16 {
                Rgba([0, 0, 0, 255])
            } else {
                Rgba([255, 255, 255, 255])
            }
        });
        let out = apply(Effect::Edge, &split);
        assert!(out.pixels().any(|p| p.0[0] == 255));
    }

    #[test]
    fn blur_smooths_a_single_bright_pixel() {
        let mut frame = RgbaImage::from_pixel(15, 15, Rgba([0, 0, 0, 255]));
        frame.put_pixel(7, 7, Rgba([255, 255, 255, 255]));
        let out = apply(Effect::Blur, &frame);
        assert!(out.get_pixel(7, 7).0[0] < 255);
        assert!(out.get_pixel(8, 7).0[0] > 0);
    }

    #[test]
    fn resize_to_changes_dimensions() {
        let out = resize_to(&gradient(16, 9), 32, 18);
        assert_eq!(out.dimensions(), (32, 18));
    }

    #[test]
    fn resize_to_ignores_degenerate_targets() {
        let frame = gradient(4, 4);
        assert_eq!(resize_to(&frame, 0, 10), frame);
        assert_eq!(resize_to(&frame, 4, 4), frame);
    }
}
