//! Shader stages, pipeline creation errors and parameter values.
//!
//! Shader source is opaque to this crate: it’s handed to the backend compiler as-is. When the
//! backend refuses it, the failure is reported as a [`CreationError`] carrying the stage that
//! failed and the backend’s diagnostic text.

use std::error;
use std::fmt;

/// A shader stage.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ShaderStage {
  /// Vertex shader.
  Vertex,
  /// Pixel (fragment) shader.
  Pixel,
}

impl fmt::Display for ShaderStage {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    match *self {
      ShaderStage::Vertex => f.write_str("vertex shader"),
      ShaderStage::Pixel => f.write_str("pixel shader"),
    }
  }
}

/// Step of pipeline construction that failed.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum CreationStage {
  /// Compilation of a shader stage.
  Compile(ShaderStage),
  /// Linking of the two stages into a pipeline.
  Link,
}

impl fmt::Display for CreationStage {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    match *self {
      CreationStage::Compile(stage) => write!(f, "{} compilation", stage),
      CreationStage::Link => f.write_str("pipeline link"),
    }
  }
}

/// Error emitted when a shader stage or a pipeline cannot be created.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CreationError {
  /// Which step failed.
  pub stage: CreationStage,
  /// Diagnostic text reported by the backend.
  pub log: String,
}

impl CreationError {
  /// A shader stage failed to compile.
  pub fn compilation_failed(stage: ShaderStage, log: impl Into<String>) -> Self {
    CreationError {
      stage: CreationStage::Compile(stage),
      log: log.into(),
    }
  }

  /// Two shader stages failed to link.
  pub fn link_failed(log: impl Into<String>) -> Self {
    CreationError {
      stage: CreationStage::Link,
      log: log.into(),
    }
  }
}

impl fmt::Display for CreationError {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    write!(f, "{} failed: {}", self.stage, self.log)
  }
}

impl error::Error for CreationError {}

/// Column-major 4×4 matrix: `m[column][row]`.
pub type Mat4 = [[f32; 4]; 4];

/// A value written to a pipeline parameter.
///
/// Array variants are written contiguously starting at the parameter’s location. Their length is
/// not checked against the size the shader declares.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ParamValue<'a> {
  /// Signed integer (also used for sampler slots).
  Int(i32),
  /// Single-precision float.
  Float(f32),
  /// 4×4 matrix.
  Mat4(&'a Mat4),
  /// Array of signed integers.
  IntArray(&'a [i32]),
  /// Array of floats.
  FloatArray(&'a [f32]),
  /// Array of 4×4 matrices.
  Mat4Array(&'a [Mat4]),
}

impl<'a> ParamValue<'a> {
  /// Number of elements written.
  pub fn count(&self) -> usize {
    match *self {
      ParamValue::Int(_) | ParamValue::Float(_) | ParamValue::Mat4(_) => 1,
      ParamValue::IntArray(a) => a.len(),
      ParamValue::FloatArray(a) => a.len(),
      ParamValue::Mat4Array(a) => a.len(),
    }
  }
}
