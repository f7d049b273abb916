use gl::types::*;
use render_device::backend::buffer::{Buffer as BufferBackend, BufferKind};
use std::os::raw::c_void;
use std::ptr;

use crate::gl41::{gl_size_ptr, GL41};

/// OpenGL buffer.
///
/// Buffer objects are typeless in OpenGL: every buffer is uploaded through `GL_ARRAY_BUFFER`,
/// which isn’t part of vertex array state, and only its binding target differs afterwards.
#[derive(Debug)]
pub struct Buffer {
  pub(crate) handle: GLuint,
  kind: BufferKind,
}

impl Drop for Buffer {
  fn drop(&mut self) {
    unsafe {
      gl::DeleteBuffers(1, &self.handle);
    }
  }
}

unsafe impl BufferBackend for GL41 {
  type BufferRepr = Buffer;

  unsafe fn new_buffer(
    &mut self,
    kind: BufferKind,
    size: usize,
    data: Option<&[u8]>,
  ) -> Self::BufferRepr {
    let mut handle: GLuint = 0;
    gl::GenBuffers(1, &mut handle);

    let ptr = data.map_or(ptr::null(), |data| data.as_ptr() as *const c_void);

    gl::BindBuffer(gl::ARRAY_BUFFER, handle);
    gl::BufferData(gl::ARRAY_BUFFER, gl_size_ptr(size), ptr, gl::STATIC_DRAW);
    gl::BindBuffer(gl::ARRAY_BUFFER, 0);

    Buffer { handle, kind }
  }

  unsafe fn bind_index_buffer(&mut self, buffer: Option<&Self::BufferRepr>) {
    debug_assert!(buffer.map_or(true, |b| b.kind == BufferKind::Index));
    self.state.bind_index_buffer(buffer.map_or(0, |b| b.handle));
  }
}
