//! Rasterizer configuration: face culling and polygon fill mode.

/// Triangle winding order that is considered front-facing.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Winding {
  /// Clockwise.
  CW,
  /// Counter-clockwise.
  CCW,
}

/// Side of a triangle.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Face {
  /// Front side only.
  Front,
  /// Back side only.
  Back,
  /// Both sides.
  FrontAndBack,
}

/// How polygons are rasterized.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum RasterMode {
  /// Vertices only.
  Point,
  /// Edges only.
  Line,
  /// Filled polygons.
  Fill,
}

/// Rasterizer state description.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct RasterStateDesc {
  /// Whether face culling is enabled.
  pub cull_enabled: bool,
  /// Winding of front faces.
  pub front_face: Winding,
  /// Face(s) removed when culling is enabled.
  pub cull_face: Face,
  /// Polygon rasterization mode.
  pub mode: RasterMode,
}

impl RasterStateDesc {
  /// Create a new [`RasterStateDesc`].
  pub fn new(cull_enabled: bool, front_face: Winding, cull_face: Face, mode: RasterMode) -> Self {
    RasterStateDesc {
      cull_enabled,
      front_face,
      cull_face,
      mode,
    }
  }
}

/// Culling enabled, counter-clockwise front faces, back faces culled, filled polygons.
impl Default for RasterStateDesc {
  fn default() -> Self {
    RasterStateDesc::new(true, Winding::CCW, Face::Back, RasterMode::Fill)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn default_culls_back_ccw_filled() {
    let desc = RasterStateDesc::default();
    assert!(desc.cull_enabled);
    assert_eq!(desc.front_face, Winding::CCW);
    assert_eq!(desc.cull_face, Face::Back);
    assert_eq!(desc.mode, RasterMode::Fill);
  }
}
