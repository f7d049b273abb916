//! Values consumed by clear and draw commands.

/// Values written by a clear.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClearValues {
  /// RGBA clear color.
  pub color: [f32; 4],
  /// Depth clear value.
  pub depth: f32,
  /// Stencil clear value.
  pub stencil: i32,
}

impl ClearValues {
  /// Clear to the given color, keeping the default depth and stencil values.
  pub fn color(r: f32, g: f32, b: f32, a: f32) -> Self {
    ClearValues {
      color: [r, g, b, a],
      ..ClearValues::default()
    }
  }
}

/// Opaque black, depth `1` and stencil `0`.
impl Default for ClearValues {
  fn default() -> Self {
    ClearValues {
      color: [0., 0., 0., 1.],
      depth: 1.,
      stencil: 0,
    }
  }
}
