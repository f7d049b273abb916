use render_device::backend::command::Command;
use render_device::command::ClearValues;
use std::os::raw::c_void;

use crate::gl41::{gl_int, GL41};

// draw counts and first vertices past `GLint::MAX` are clamped
unsafe impl Command for GL41 {
  unsafe fn clear(&mut self, values: &ClearValues) {
    let [r, g, b, a] = values.color;
    gl::ClearColor(r, g, b, a);
    gl::ClearDepth(values.depth.into());
    gl::ClearStencil(values.stencil);
    gl::Clear(gl::COLOR_BUFFER_BIT | gl::DEPTH_BUFFER_BIT | gl::STENCIL_BUFFER_BIT);
  }

  unsafe fn draw_triangles(&mut self, first: u32, count: u32) {
    gl::DrawArrays(gl::TRIANGLES, gl_int(first), gl_int(count));
  }

  unsafe fn draw_triangles_indexed32(&mut self, offset: usize, count: u32) {
    gl::DrawElements(
      gl::TRIANGLES,
      gl_int(count),
      gl::UNSIGNED_INT,
      offset as *const c_void,
    );
  }
}
