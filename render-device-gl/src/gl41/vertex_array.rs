use gl::types::*;
use render_device::backend::vertex_array::VertexArray as VertexArrayBackend;
use render_device::vertex::{ScalarType, VertexAttrib};
use std::os::raw::c_void;

use crate::gl41::buffer::Buffer;
use crate::gl41::GL41;

/// A vertex attribute as `glVertexAttribPointer` wants it.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
struct AttribFormat {
  index: GLuint,
  size: GLint,
  ty: GLenum,
  normalized: GLboolean,
  stride: GLsizei,
  offset: usize,
}

impl AttribFormat {
  fn new(attrib: &VertexAttrib) -> Self {
    AttribFormat {
      index: attrib.index,
      size: attrib.size.into(),
      ty: opengl_scalar_type(attrib.ty),
      normalized: if attrib.normalized { gl::TRUE } else { gl::FALSE },
      stride: attrib.stride as GLsizei,
      offset: attrib.offset,
    }
  }
}

/// Vertex description, pre-translated.
#[derive(Debug)]
pub struct VertexDescription {
  attribs: Vec<AttribFormat>,
}

/// OpenGL vertex array object.
#[derive(Debug)]
pub struct VertexArray {
  pub(crate) handle: GLuint,
}

impl Drop for VertexArray {
  fn drop(&mut self) {
    unsafe {
      gl::DeleteVertexArrays(1, &self.handle);
    }
  }
}

fn opengl_scalar_type(ty: ScalarType) -> GLenum {
  match ty {
    ScalarType::I8 => gl::BYTE,
    ScalarType::I16 => gl::SHORT,
    ScalarType::I32 => gl::INT,
    ScalarType::U8 => gl::UNSIGNED_BYTE,
    ScalarType::U16 => gl::UNSIGNED_SHORT,
    ScalarType::U32 => gl::UNSIGNED_INT,
    ScalarType::F16 => gl::HALF_FLOAT,
    ScalarType::F32 => gl::FLOAT,
    ScalarType::F64 => gl::DOUBLE,
  }
}

unsafe impl VertexArrayBackend for GL41 {
  type DescriptionRepr = VertexDescription;
  type VertexArrayRepr = VertexArray;

  unsafe fn new_description(&mut self, attribs: &[VertexAttrib]) -> Self::DescriptionRepr {
    VertexDescription {
      attribs: attribs.iter().map(AttribFormat::new).collect(),
    }
  }

  unsafe fn new_vertex_array(
    &mut self,
    inputs: &[(&Self::BufferRepr, &Self::DescriptionRepr)],
  ) -> Self::VertexArrayRepr {
    let mut handle: GLuint = 0;
    gl::GenVertexArrays(1, &mut handle);
    gl::BindVertexArray(handle);

    for &(buffer, description) in inputs {
      bind_buffer_attribs(buffer, description);
    }

    gl::BindBuffer(gl::ARRAY_BUFFER, 0);
    self.state.restore_vertex_array();

    VertexArray { handle }
  }

  unsafe fn bind_vertex_array(&mut self, vertex_array: Option<&Self::VertexArrayRepr>) {
    self.state.bind_vertex_array(vertex_array.map_or(0, |va| va.handle));
  }
}

unsafe fn bind_buffer_attribs(buffer: &Buffer, description: &VertexDescription) {
  gl::BindBuffer(gl::ARRAY_BUFFER, buffer.handle);

  for attrib in &description.attribs {
    gl::EnableVertexAttribArray(attrib.index);
    gl::VertexAttribPointer(
      attrib.index,
      attrib.size,
      attrib.ty,
      attrib.normalized,
      attrib.stride,
      attrib.offset as *const c_void,
    );
  }
}
