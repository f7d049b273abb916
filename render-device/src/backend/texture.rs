//! Texture backend interface.
//!
//! This interface defines the low-level API textures must implement to be usable.

use crate::texture::Sampler;

/// RGBA8 2D texture backend.
pub unsafe trait Texture {
  /// Backend representation of a 2D texture.
  type TextureRepr;

  /// Create a `width × height` texture.
  ///
  /// `texels`, when given, holds exactly `width × height × 4` bytes. Mipmaps are generated from it.
  unsafe fn new_texture_2d(
    &mut self,
    width: u32,
    height: u32,
    sampler: &Sampler,
    texels: Option<&[u8]>,
  ) -> Self::TextureRepr;

  /// Bind a texture to the texture unit `slot`. [`None`] unbinds the unit.
  unsafe fn bind_texture_2d(&mut self, slot: u32, texture: Option<&Self::TextureRepr>);
}
