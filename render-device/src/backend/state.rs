//! Fixed-function state backend.

use crate::depth_stencil::DepthStencilStateDesc;
use crate::raster::RasterStateDesc;

/// Raster and depth-stencil state backend.
///
/// State objects are immutable once created. Applying one must configure every fixed-function
/// switch it describes, regardless of what was applied before.
pub unsafe trait State {
  /// Backend representation of a raster state.
  type RasterStateRepr;

  /// Backend representation of a depth-stencil state.
  type DepthStencilStateRepr;

  /// Create a raster state.
  unsafe fn new_raster_state(&mut self, desc: &RasterStateDesc) -> Self::RasterStateRepr;

  /// Create a depth-stencil state.
  unsafe fn new_depth_stencil_state(
    &mut self,
    desc: &DepthStencilStateDesc,
  ) -> Self::DepthStencilStateRepr;

  /// Apply a raster state.
  unsafe fn apply_raster_state(&mut self, state: &Self::RasterStateRepr);

  /// Apply a depth-stencil state.
  unsafe fn apply_depth_stencil_state(&mut self, state: &Self::DepthStencilStateRepr);
}
