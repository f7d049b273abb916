//! 2D texture description and sampling.
//!
//! Textures are RGBA8 only: each texel is four bytes, R, G, B then A from the lowest address, rows
//! are tightly packed and the first row is the bottom one.

/// How to wrap texture coordinates while sampling textures?
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Wrap {
  /// If textures coordinates lay outside of *[0;1]*, they will be clamped to either *0* or *1* for
  /// every components.
  ClampToEdge,
  /// Textures coordinates are repeated if they lay outside of *[0;1]*.
  Repeat,
  /// Same as `Repeat` but it will alternatively repeat between *[0;1]* and *[1;0]*.
  MirroredRepeat,
}

/// Minification filter.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum MinFilter {
  /// Nearest interpolation.
  Nearest,
  /// Linear interpolation between surrounding pixels.
  Linear,
  /// Linear interpolation between two mipmaps, each sampled linearly.
  LinearMipmapLinear,
}

/// Magnification filter.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum MagFilter {
  /// Nearest interpolation.
  Nearest,
  /// Linear interpolation between surrounding pixels.
  Linear,
}

/// How a texture is sampled.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Sampler {
  /// Wrapping along the horizontal axis.
  pub wrap_s: Wrap,
  /// Wrapping along the vertical axis.
  pub wrap_t: Wrap,
  /// Minification filter.
  pub min_filter: MinFilter,
  /// Magnification filter.
  pub mag_filter: MagFilter,
}

/// Default value is as following:
///
/// - [`Wrap::Repeat`] on both axes.
/// - [`MinFilter::LinearMipmapLinear`].
/// - [`MagFilter::Linear`].
impl Default for Sampler {
  fn default() -> Self {
    Sampler {
      wrap_s: Wrap::Repeat,
      wrap_t: Wrap::Repeat,
      min_filter: MinFilter::LinearMipmapLinear,
      mag_filter: MagFilter::Linear,
    }
  }
}

/// Number of bytes per RGBA8 texel.
pub const BYTES_PER_TEXEL: usize = 4;

/// Number of bytes a `width × height` RGBA8 texture holds.
///
/// Returns [`None`] on overflow.
pub fn texel_bytes(width: u32, height: u32) -> Option<usize> {
  (width as usize)
    .checked_mul(height as usize)?
    .checked_mul(BYTES_PER_TEXEL)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn texel_bytes_is_rgba8() {
    assert_eq!(texel_bytes(2, 3), Some(24));
    assert_eq!(texel_bytes(1, 1), Some(4));
  }

  #[test]
  fn default_sampler_repeats_and_mipmaps() {
    let sampler = Sampler::default();
    assert_eq!(sampler.wrap_s, Wrap::Repeat);
    assert_eq!(sampler.wrap_t, Wrap::Repeat);
    assert_eq!(sampler.min_filter, MinFilter::LinearMipmapLinear);
    assert_eq!(sampler.mag_filter, MagFilter::Linear);
  }
}
