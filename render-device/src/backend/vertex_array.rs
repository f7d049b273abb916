//! Vertex layout backend.

use crate::backend::buffer::Buffer;
use crate::vertex::VertexAttrib;

/// Vertex description and vertex array backend.
pub unsafe trait VertexArray: Buffer {
  /// Backend-native form of an ordered list of attributes.
  type DescriptionRepr;

  /// Vertex buffers bound together with their layouts.
  type VertexArrayRepr;

  /// Translate checked attributes into the backend’s native representation.
  unsafe fn new_description(&mut self, attribs: &[VertexAttrib]) -> Self::DescriptionRepr;

  /// Bind every attribute of each description against its paired buffer.
  ///
  /// The vertex array doesn’t own the buffers.
  unsafe fn new_vertex_array(
    &mut self,
    inputs: &[(&Self::BufferRepr, &Self::DescriptionRepr)],
  ) -> Self::VertexArrayRepr;

  /// Bind a vertex array for drawing. [`None`] unbinds the current one.
  unsafe fn bind_vertex_array(&mut self, vertex_array: Option<&Self::VertexArrayRepr>);
}
