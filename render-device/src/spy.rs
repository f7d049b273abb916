//! Recording backend used to exercise the device without a graphics context.
//!
//! Every backend call is appended to a call log. Objects are plain ids; an id stays in the live set
//! until its representation is dropped, which lets tests observe destruction.
//!
//! Shader sources are scanned rather than compiled: a source containing `COMPILE_ERROR` fails to
//! compile, a program whose stages contain `LINK_ERROR` fails to link, and every `uniform … name;`
//! line declares a parameter.

use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::rc::Rc;

use crate::backend::buffer::{Buffer, BufferKind};
use crate::backend::command::Command;
use crate::backend::shader::Shader;
use crate::backend::state::State;
use crate::backend::texture::Texture;
use crate::backend::vertex_array::VertexArray;
use crate::command::ClearValues;
use crate::depth_stencil::DepthStencilStateDesc;
use crate::raster::RasterStateDesc;
use crate::shader::{CreationError, ParamValue, ShaderStage};
use crate::texture::Sampler;
use crate::vertex::VertexAttrib;

type LiveSet = Rc<RefCell<HashSet<u32>>>;

/// A value written to a parameter, flattened.
#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Recorded {
  Ints(Vec<i32>),
  Floats(Vec<f32>),
}

impl<'a> From<ParamValue<'a>> for Recorded {
  fn from(value: ParamValue<'a>) -> Self {
    match value {
      ParamValue::Int(x) => Recorded::Ints(vec![x]),
      ParamValue::IntArray(xs) => Recorded::Ints(xs.to_vec()),
      ParamValue::Float(x) => Recorded::Floats(vec![x]),
      ParamValue::FloatArray(xs) => Recorded::Floats(xs.to_vec()),
      ParamValue::Mat4(m) => Recorded::Floats(m.iter().flatten().copied().collect()),
      ParamValue::Mat4Array(ms) => {
        Recorded::Floats(ms.iter().flatten().flatten().copied().collect())
      }
    }
  }
}

#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Call {
  NewStage(ShaderStage),
  NewProgram(u32),
  UseProgram(Option<u32>),
  ParamLocation { program: u32, name: String },
  SetParam {
    program: Option<u32>,
    location: i32,
    value: Recorded,
  },
  NewBuffer { kind: BufferKind, size: usize },
  BindIndexBuffer(Option<u32>),
  NewDescription(Vec<VertexAttrib>),
  NewVertexArray(Vec<(u32, u32)>),
  BindVertexArray(Option<u32>),
  NewTexture2D { width: u32, height: u32, texels: bool },
  BindTexture2D { slot: u32, texture: Option<u32> },
  NewRasterState(RasterStateDesc),
  NewDepthStencilState(DepthStencilStateDesc),
  ApplyRasterState(u32),
  ApplyDepthStencilState(u32),
  Clear(ClearValues),
  DrawTriangles { first: u32, count: u32 },
  DrawTrianglesIndexed32 { offset: usize, count: u32 },
}

impl Call {
  pub(crate) fn is_state_apply(&self) -> bool {
    matches!(
      self,
      Call::ApplyRasterState(_) | Call::ApplyDepthStencilState(_)
    )
  }
}

/// Any object created by the spy.
#[derive(Debug)]
pub(crate) struct SpyObject {
  pub(crate) id: u32,
  live: LiveSet,
}

impl Drop for SpyObject {
  fn drop(&mut self) {
    self.live.borrow_mut().remove(&self.id);
  }
}

#[derive(Debug)]
pub(crate) struct SpyShader {
  pub(crate) object: SpyObject,
  uniforms: Vec<String>,
  link_error: bool,
}

#[derive(Debug)]
pub(crate) struct SpyDescription {
  pub(crate) object: SpyObject,
  pub(crate) attribs: Vec<VertexAttrib>,
}

#[derive(Debug, Default)]
pub(crate) struct Spy {
  calls: Vec<Call>,
  next_id: u32,
  pub(crate) live: LiveSet,
  active_program: Option<u32>,
  values: HashMap<(u32, i32), Recorded>,
}

impl Spy {
  pub(crate) fn new() -> Self {
    Spy::default()
  }

  pub(crate) fn calls(&self) -> &[Call] {
    &self.calls
  }

  pub(crate) fn clear_calls(&mut self) {
    self.calls.clear();
  }

  pub(crate) fn is_live(&self, id: u32) -> bool {
    self.live.borrow().contains(&id)
  }

  pub(crate) fn live_count(&self) -> usize {
    self.live.borrow().len()
  }

  /// Last value written to `location` while `program` was active.
  pub(crate) fn value(&self, program: u32, location: i32) -> Option<&Recorded> {
    self.values.get(&(program, location))
  }

  fn object(&mut self) -> SpyObject {
    self.next_id += 1;
    self.live.borrow_mut().insert(self.next_id);

    SpyObject {
      id: self.next_id,
      live: self.live.clone(),
    }
  }
}

fn scan_uniforms(src: &str) -> Vec<String> {
  src
    .lines()
    .map(str::trim)
    .filter(|line| line.starts_with("uniform "))
    .filter_map(|line| line.trim_end_matches(';').split_whitespace().last())
    .map(|name| name.split('[').next().unwrap_or(name).to_owned())
    .collect()
}

unsafe impl Shader for Spy {
  type StageRepr = SpyShader;
  type ProgramRepr = SpyShader;
  type ParamRepr = i32;

  unsafe fn new_stage(
    &mut self,
    stage: ShaderStage,
    src: &str,
  ) -> Result<Self::StageRepr, CreationError> {
    self.calls.push(Call::NewStage(stage));

    if src.contains("COMPILE_ERROR") {
      return Err(CreationError::compilation_failed(
        stage,
        "0:1: COMPILE_ERROR",
      ));
    }

    Ok(SpyShader {
      object: self.object(),
      uniforms: scan_uniforms(src),
      link_error: src.contains("LINK_ERROR"),
    })
  }

  unsafe fn new_program(
    &mut self,
    vertex: &Self::StageRepr,
    pixel: &Self::StageRepr,
  ) -> Result<Self::ProgramRepr, CreationError> {
    if vertex.link_error || pixel.link_error {
      return Err(CreationError::link_failed("unresolved LINK_ERROR"));
    }

    let mut uniforms = vertex.uniforms.clone();
    for name in &pixel.uniforms {
      if !uniforms.contains(name) {
        uniforms.push(name.clone());
      }
    }

    let object = self.object();
    self.calls.push(Call::NewProgram(object.id));

    Ok(SpyShader {
      object,
      uniforms,
      link_error: false,
    })
  }

  unsafe fn use_program(&mut self, program: Option<&Self::ProgramRepr>) {
    let id = program.map(|p| p.object.id);
    self.active_program = id;
    self.calls.push(Call::UseProgram(id));
  }

  unsafe fn param_location(
    &mut self,
    program: &Self::ProgramRepr,
    name: &str,
  ) -> Option<Self::ParamRepr> {
    self.calls.push(Call::ParamLocation {
      program: program.object.id,
      name: name.to_owned(),
    });

    program
      .uniforms
      .iter()
      .position(|uniform| uniform == name)
      .map(|i| i as i32)
  }

  unsafe fn set_param(&mut self, param: Self::ParamRepr, value: ParamValue) {
    let value = Recorded::from(value);

    if let Some(program) = self.active_program {
      self.values.insert((program, param), value.clone());
    }

    self.calls.push(Call::SetParam {
      program: self.active_program,
      location: param,
      value,
    });
  }
}

unsafe impl Buffer for Spy {
  type BufferRepr = SpyObject;

  unsafe fn new_buffer(
    &mut self,
    kind: BufferKind,
    size: usize,
    _data: Option<&[u8]>,
  ) -> Self::BufferRepr {
    self.calls.push(Call::NewBuffer { kind, size });
    self.object()
  }

  unsafe fn bind_index_buffer(&mut self, buffer: Option<&Self::BufferRepr>) {
    self.calls.push(Call::BindIndexBuffer(buffer.map(|b| b.id)));
  }
}

unsafe impl VertexArray for Spy {
  type DescriptionRepr = SpyDescription;
  type VertexArrayRepr = SpyObject;

  unsafe fn new_description(&mut self, attribs: &[VertexAttrib]) -> Self::DescriptionRepr {
    self.calls.push(Call::NewDescription(attribs.to_vec()));

    SpyDescription {
      object: self.object(),
      attribs: attribs.to_vec(),
    }
  }

  unsafe fn new_vertex_array(
    &mut self,
    inputs: &[(&Self::BufferRepr, &Self::DescriptionRepr)],
  ) -> Self::VertexArrayRepr {
    let pairs = inputs
      .iter()
      .map(|(buffer, desc)| (buffer.id, desc.object.id))
      .collect();
    self.calls.push(Call::NewVertexArray(pairs));
    self.object()
  }

  unsafe fn bind_vertex_array(&mut self, vertex_array: Option<&Self::VertexArrayRepr>) {
    self
      .calls
      .push(Call::BindVertexArray(vertex_array.map(|va| va.id)));
  }
}

unsafe impl Texture for Spy {
  type TextureRepr = SpyObject;

  unsafe fn new_texture_2d(
    &mut self,
    width: u32,
    height: u32,
    _sampler: &Sampler,
    texels: Option<&[u8]>,
  ) -> Self::TextureRepr {
    self.calls.push(Call::NewTexture2D {
      width,
      height,
      texels: texels.is_some(),
    });
    self.object()
  }

  unsafe fn bind_texture_2d(&mut self, slot: u32, texture: Option<&Self::TextureRepr>) {
    self.calls.push(Call::BindTexture2D {
      slot,
      texture: texture.map(|t| t.id),
    });
  }
}

unsafe impl State for Spy {
  type RasterStateRepr = SpyObject;
  type DepthStencilStateRepr = SpyObject;

  unsafe fn new_raster_state(&mut self, desc: &RasterStateDesc) -> Self::RasterStateRepr {
    self.calls.push(Call::NewRasterState(*desc));
    self.object()
  }

  unsafe fn new_depth_stencil_state(
    &mut self,
    desc: &DepthStencilStateDesc,
  ) -> Self::DepthStencilStateRepr {
    self.calls.push(Call::NewDepthStencilState(*desc));
    self.object()
  }

  unsafe fn apply_raster_state(&mut self, state: &Self::RasterStateRepr) {
    self.calls.push(Call::ApplyRasterState(state.id));
  }

  unsafe fn apply_depth_stencil_state(&mut self, state: &Self::DepthStencilStateRepr) {
    self.calls.push(Call::ApplyDepthStencilState(state.id));
  }
}

unsafe impl Command for Spy {
  unsafe fn clear(&mut self, values: &ClearValues) {
    self.calls.push(Call::Clear(*values));
  }

  unsafe fn draw_triangles(&mut self, first: u32, count: u32) {
    self.calls.push(Call::DrawTriangles { first, count });
  }

  unsafe fn draw_triangles_indexed32(&mut self, offset: usize, count: u32) {
    self
      .calls
      .push(Call::DrawTrianglesIndexed32 { offset, count });
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn uniforms_are_scanned() {
    let src = "#version 410\nuniform mat4 model;\n  uniform float weights[4];\nvoid main() {}";
    assert_eq!(scan_uniforms(src), vec!["model", "weights"]);
  }

  #[test]
  fn dropped_objects_leave_live_set() {
    let mut spy = Spy::new();
    let a = spy.object();
    let b = spy.object();
    assert_eq!(spy.live_count(), 2);

    let id = a.id;
    drop(a);
    assert!(!spy.is_live(id));
    assert!(spy.is_live(b.id));
  }
}
