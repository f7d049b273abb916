//! Command backend.

use crate::command::ClearValues;

/// Clear and draw commands.
///
/// Commands use whatever is currently bound; nothing is validated. Counts outside the native range
/// of the backend are clamped.
pub unsafe trait Command {
  /// Clear color, depth and stencil.
  unsafe fn clear(&mut self, values: &ClearValues);

  /// Draw `count` vertices as a triangle list, starting at vertex `first`.
  unsafe fn draw_triangles(&mut self, first: u32, count: u32);

  /// Draw `count` 32-bit indices from the bound index buffer as a triangle list, starting at byte
  /// `offset`.
  unsafe fn draw_triangles_indexed32(&mut self, offset: usize, count: u32);
}
