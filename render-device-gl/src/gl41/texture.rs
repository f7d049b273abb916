use gl::types::*;
use render_device::backend::texture::Texture as TextureBackend;
use render_device::texture::{MagFilter, MinFilter, Sampler, Wrap};
use std::os::raw::c_void;
use std::ptr;

use crate::gl41::GL41;

/// OpenGL 2D texture.
#[derive(Debug)]
pub struct Texture {
  pub(crate) handle: GLuint, // handle to the GPU texture object
}

impl Drop for Texture {
  fn drop(&mut self) {
    unsafe {
      gl::DeleteTextures(1, &self.handle);
    }
  }
}

unsafe impl TextureBackend for GL41 {
  type TextureRepr = Texture;

  unsafe fn new_texture_2d(
    &mut self,
    width: u32,
    height: u32,
    sampler: &Sampler,
    texels: Option<&[u8]>,
  ) -> Self::TextureRepr {
    let mut handle: GLuint = 0;
    gl::GenTextures(1, &mut handle);
    gl::BindTexture(gl::TEXTURE_2D, handle);

    apply_sampler_to_texture(gl::TEXTURE_2D, sampler);

    let data = texels.map_or(ptr::null(), |texels| texels.as_ptr() as *const c_void);

    // alpha is uploaded but not stored: sampling always yields an opaque texel
    gl::TexImage2D(
      gl::TEXTURE_2D,
      0,
      gl::RGB as GLint,
      width as GLsizei,
      height as GLsizei,
      0,
      gl::RGBA,
      gl::UNSIGNED_BYTE,
      data,
    );

    if texels.is_some() {
      gl::GenerateMipmap(gl::TEXTURE_2D);
    }

    self.state.restore_texture_2d();

    Texture { handle }
  }

  unsafe fn bind_texture_2d(&mut self, slot: u32, texture: Option<&Self::TextureRepr>) {
    self.state.bind_texture_2d(slot, texture.map_or(0, |t| t.handle));
  }
}

unsafe fn apply_sampler_to_texture(target: GLenum, sampler: &Sampler) {
  gl::TexParameteri(target, gl::TEXTURE_WRAP_S, opengl_wrap(sampler.wrap_s) as GLint);
  gl::TexParameteri(target, gl::TEXTURE_WRAP_T, opengl_wrap(sampler.wrap_t) as GLint);
  gl::TexParameteri(
    target,
    gl::TEXTURE_MIN_FILTER,
    opengl_min_filter(sampler.min_filter) as GLint,
  );
  gl::TexParameteri(
    target,
    gl::TEXTURE_MAG_FILTER,
    opengl_mag_filter(sampler.mag_filter) as GLint,
  );
}

fn opengl_wrap(wrap: Wrap) -> GLenum {
  match wrap {
    Wrap::ClampToEdge => gl::CLAMP_TO_EDGE,
    Wrap::Repeat => gl::REPEAT,
    Wrap::MirroredRepeat => gl::MIRRORED_REPEAT,
  }
}

fn opengl_min_filter(filter: MinFilter) -> GLenum {
  match filter {
    MinFilter::Nearest => gl::NEAREST,
    MinFilter::Linear => gl::LINEAR,
    MinFilter::LinearMipmapLinear => gl::LINEAR_MIPMAP_LINEAR,
  }
}

fn opengl_mag_filter(filter: MagFilter) -> GLenum {
  match filter {
    MagFilter::Nearest => gl::NEAREST,
    MagFilter::Linear => gl::LINEAR,
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn default_sampler_translation() {
    let sampler = Sampler::default();
    assert_eq!(opengl_wrap(sampler.wrap_s), gl::REPEAT);
    assert_eq!(opengl_wrap(sampler.wrap_t), gl::REPEAT);
    assert_eq!(
      opengl_min_filter(sampler.min_filter),
      gl::LINEAR_MIPMAP_LINEAR
    );
    assert_eq!(opengl_mag_filter(sampler.mag_filter), gl::LINEAR);
  }
}
