//! Depth and stencil test configuration.

/// Comparison to perform for depth / stencil operations. `a` is the incoming fragment’s data and
/// `b` is the fragment’s data that is already stored.
#[derive(Copy, Clone, Debug, Eq, Hash, PartialEq)]
pub enum Comparison {
  /// Test never succeeds.
  Never,
  /// Test succeeds if `a < b`.
  Less,
  /// Test succeeds if `a == b`.
  Equal,
  /// Test succeeds if `a <= b`.
  LessOrEqual,
  /// Test succeeds if `a > b`.
  Greater,
  /// Test succeeds if `a != b`.
  NotEqual,
  /// Test succeeds if `a >= b`.
  GreaterOrEqual,
  /// Test always succeeds.
  Always,
}

/// Action applied to the stored stencil value.
#[derive(Copy, Clone, Debug, Eq, Hash, PartialEq)]
pub enum StencilOp {
  /// Keep the current value.
  Keep,
  /// Set the stencil value to zero.
  Zero,
  /// Replace the stencil value with the reference value.
  Replace,
  /// Increment the stencil value, clamping at the maximum.
  Increment,
  /// Increment the stencil value, wrapping back to `0`.
  IncrementWrap,
  /// Decrement the stencil value, clamping at `0`.
  Decrement,
  /// Decrement the stencil value, wrapping to the maximum.
  DecrementWrap,
  /// Bit-wise inversion.
  Invert,
}

/// Stencil configuration of one triangle face.
#[derive(Copy, Clone, Debug, Eq, Hash, PartialEq)]
pub struct StencilFace {
  /// Whether this face takes part in the stencil test.
  pub enabled: bool,
  /// Comparison between the masked reference and the masked stored value.
  pub compare: Comparison,
  /// Action when the stencil test fails.
  pub fail: StencilOp,
  /// Action when the stencil test passes but the depth test fails.
  pub depth_fail: StencilOp,
  /// Action when both tests pass.
  pub pass: StencilOp,
  /// Reference value.
  pub reference: i32,
  /// Mask applied to both the reference and the stored value before comparing.
  pub read_mask: u32,
  /// Mask applied to stencil writes.
  pub write_mask: u32,
}

impl StencilFace {
  /// Enabled face with the given comparison and reference, everything else defaulted.
  pub fn enabled(compare: Comparison, reference: i32) -> Self {
    StencilFace {
      enabled: true,
      compare,
      reference,
      ..StencilFace::default()
    }
  }

  /// Set the three stencil actions.
  pub fn with_ops(self, fail: StencilOp, depth_fail: StencilOp, pass: StencilOp) -> Self {
    StencilFace {
      fail,
      depth_fail,
      pass,
      ..self
    }
  }
}

/// Disabled, [`Comparison::Always`], [`StencilOp::Keep`] everywhere, reference `0` and full masks.
impl Default for StencilFace {
  fn default() -> Self {
    StencilFace {
      enabled: false,
      compare: Comparison::Always,
      fail: StencilOp::Keep,
      depth_fail: StencilOp::Keep,
      pass: StencilOp::Keep,
      reference: 0,
      read_mask: 0xFFFF_FFFF,
      write_mask: 0xFFFF_FFFF,
    }
  }
}

/// Depth-stencil state description.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DepthStencilStateDesc {
  /// Whether the depth test is performed.
  pub depth_enabled: bool,
  /// Whether passing fragments write their depth.
  pub depth_write_enabled: bool,
  /// Near end of the depth range.
  pub depth_near: f32,
  /// Far end of the depth range.
  pub depth_far: f32,
  /// Depth comparison.
  pub depth_compare: Comparison,
  /// Stencil configuration of front faces.
  pub front: StencilFace,
  /// Stencil configuration of back faces.
  pub back: StencilFace,
}

impl DepthStencilStateDesc {
  /// Whether the stencil test must be enabled at all.
  ///
  /// That’s the case as soon as one of the two faces is enabled.
  pub fn stencil_enabled(&self) -> bool {
    self.front.enabled || self.back.enabled
  }

  /// Set the same stencil configuration on both faces.
  pub fn with_stencil(self, face: StencilFace) -> Self {
    DepthStencilStateDesc {
      front: face,
      back: face,
      ..self
    }
  }
}

/// Depth test and writes on, range `[0, 1]`, [`Comparison::Less`], stencil disabled on both faces.
impl Default for DepthStencilStateDesc {
  fn default() -> Self {
    DepthStencilStateDesc {
      depth_enabled: true,
      depth_write_enabled: true,
      depth_near: 0.,
      depth_far: 1.,
      depth_compare: Comparison::Less,
      front: StencilFace::default(),
      back: StencilFace::default(),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn default_depth_stencil() {
    let desc = DepthStencilStateDesc::default();
    assert!(desc.depth_enabled);
    assert!(desc.depth_write_enabled);
    assert_eq!(desc.depth_near, 0.);
    assert_eq!(desc.depth_far, 1.);
    assert_eq!(desc.depth_compare, Comparison::Less);
    assert!(!desc.stencil_enabled());

    for face in [desc.front, desc.back] {
      assert_eq!(face.compare, Comparison::Always);
      assert_eq!(face.fail, StencilOp::Keep);
      assert_eq!(face.depth_fail, StencilOp::Keep);
      assert_eq!(face.pass, StencilOp::Keep);
      assert_eq!(face.reference, 0);
      assert_eq!(face.read_mask, 0xFFFF_FFFF);
      assert_eq!(face.write_mask, 0xFFFF_FFFF);
    }
  }

  #[test]
  fn stencil_enabled_when_either_face_is() {
    let mut desc = DepthStencilStateDesc::default();
    desc.back = StencilFace::enabled(Comparison::Equal, 1);
    assert!(desc.stencil_enabled());

    let desc = DepthStencilStateDesc::default()
      .with_stencil(StencilFace::enabled(Comparison::NotEqual, 2));
    assert!(desc.front.enabled && desc.back.enabled);
    assert!(desc.stencil_enabled());
  }
}
