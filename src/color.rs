//! Color representation and channel quantization.
//!
//! Colors are the same numeric triple as points and directions; the alias
//! marks use-sites where the components mean linear RGB in [0.0, 1.0].

use glam::Vec3A;

use crate::interval::Interval;

/// RGB color with linear components nominally in [0.0, 1.0].
pub type Color = Vec3A;

/// Valid channel range before quantization.
const INTENSITY: Interval = Interval { min: 0.0, max: 1.0 };

/// Quantize a linear color to an 8-bit RGB triplet.
///
/// Channels are clamped to [0.0, 1.0] and scaled by 255.999, so a channel
/// of exactly 1.0 maps to 255 instead of overflowing to 256.
pub fn to_rgb8(color: Color) -> [u8; 3] {
    [
        (255.999 * INTENSITY.clamp(color.x)) as u8,
        (255.999 * INTENSITY.clamp(color.y)) as u8,
        (255.999 * INTENSITY.clamp(color.z)) as u8,
    ]
}
