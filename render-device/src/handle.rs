//! Resource handles.
//!
//! Handles are generational keys into the arenas of a [`Device`]. They’re `Copy`, compare by
//! value and don’t keep anything alive.
//!
//! [`Device`]: crate::device::Device

use slotmap::new_key_type;

new_key_type! {
  /// Compiled vertex shader.
  pub struct VertexShader;
  /// Compiled pixel shader.
  pub struct PixelShader;
  /// Linked pipeline.
  pub struct Pipeline;
  /// Vertex buffer.
  pub struct VertexBuffer;
  /// Index buffer (32-bit indices).
  pub struct IndexBuffer;
  /// Layout of a vertex buffer.
  pub struct VertexDescription;
  /// Vertex buffers bound together with their layouts.
  pub struct VertexArray;
  /// RGBA8 2D texture.
  pub struct Texture2D;
  /// Rasterizer state.
  pub struct RasterState;
  /// Depth-stencil state.
  pub struct DepthStencilState;
}

new_key_type! {
  pub(crate) struct ParamKey;
}

/// A named parameter of a pipeline.
///
/// Looking the same name up twice on the same pipeline yields equal values. A parameter is usable
/// for as long as its pipeline lives.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct PipelineParam {
  pub(crate) pipeline: Pipeline,
  pub(crate) key: ParamKey,
}

impl PipelineParam {
  /// Pipeline owning this parameter.
  pub fn pipeline(&self) -> Pipeline {
    self.pipeline
  }
}
