//! Buffer backend interface.
//!
//! This interface defines the low-level API buffers must implement to be usable.

/// What a buffer is used for.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum BufferKind {
  /// Vertex attributes.
  Vertex,
  /// 32-bit indices.
  Index,
}

/// Buffer backend.
///
/// You want to implement that trait on your backend type to support buffers. Releasing a buffer is
/// done by dropping its representation.
pub unsafe trait Buffer {
  /// The inner representation of the buffer for this backend.
  type BufferRepr;

  /// Create a new buffer of `size` bytes.
  ///
  /// When `data` is given, its length is exactly `size` and it is uploaded once. Otherwise the
  /// contents are unspecified. `size` never exceeds `isize::MAX`.
  unsafe fn new_buffer(
    &mut self,
    kind: BufferKind,
    size: usize,
    data: Option<&[u8]>,
  ) -> Self::BufferRepr;

  /// Bind an index buffer for indexed draws. [`None`] unbinds the current one.
  unsafe fn bind_index_buffer(&mut self, buffer: Option<&Self::BufferRepr>);
}
