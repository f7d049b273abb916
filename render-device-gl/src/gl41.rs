//! OpenGL 4.1 core backend.
//!
//! This module implements an OpenGL 4.1 core backend for render-device. The backend type is
//! [`GL41`].

mod buffer;
mod command;
mod shader;
mod state;
mod texture;
mod vertex_array;

pub use self::state::{GLState, StateQueryError};

use gl::types::*;
use log::info;
use std::ffi::CStr;

/// An OpenGL 4.1 core backend.
///
/// This type is to be used as a render-device backend type. It implements every backend trait.
/// Only one value can exist per thread at a time.
#[derive(Debug)]
pub struct GL41 {
  pub(crate) state: GLState,
}

impl GL41 {
  /// Create a new OpenGL 4.1 backend.
  ///
  /// Fails if the OpenGL functions haven’t been loaded or if another backend is already alive on
  /// this thread.
  pub fn new() -> Result<Self, StateQueryError> {
    let state = GLState::new()?;

    unsafe {
      info!(
        "OpenGL backend: {} ({}), {}",
        get_string(gl::RENDERER),
        get_string(gl::VENDOR),
        get_string(gl::VERSION)
      );
    }

    Ok(GL41 { state })
  }

  /// Internal access to the backend state.
  ///
  /// # Unsafety
  ///
  /// Changing state through this value isn’t seen by the device driving the backend.
  pub unsafe fn state(&mut self) -> &mut GLState {
    &mut self.state
  }
}

unsafe fn get_string(name: GLenum) -> String {
  let ptr = gl::GetString(name);

  if ptr.is_null() {
    return String::from("unknown");
  }

  CStr::from_ptr(ptr as *const _).to_string_lossy().into_owned()
}

/// Convert a count or offset to a `GLint` (or `GLsizei`), clamping values past `GLint::MAX`.
pub(crate) fn gl_int<T>(n: T) -> GLint
where
  GLint: TryFrom<T>,
{
  GLint::try_from(n).unwrap_or(GLint::MAX)
}

/// Convert a byte size to a `GLsizeiptr`, clamping values past `GLsizeiptr::MAX`.
pub(crate) fn gl_size_ptr(size: usize) -> GLsizeiptr {
  GLsizeiptr::try_from(size).unwrap_or(GLsizeiptr::MAX)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn counts_clamp_to_signed_range() {
    assert_eq!(gl_int(0u32), 0);
    assert_eq!(gl_int(36u32), 36);
    assert_eq!(gl_int(i32::MAX as u32), GLint::MAX);
    assert_eq!(gl_int(u32::MAX), GLint::MAX);
    assert_eq!(gl_int(usize::MAX), GLint::MAX);
  }

  #[test]
  fn sizes_clamp_to_signed_range() {
    assert_eq!(gl_size_ptr(1024), 1024);
    assert_eq!(gl_size_ptr(usize::MAX), GLsizeiptr::MAX);
  }
}
