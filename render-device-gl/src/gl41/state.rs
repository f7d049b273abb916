//! Graphics state and fixed-function state objects.

use gl::types::*;
use render_device::backend::state::State;
use render_device::depth_stencil::{Comparison, DepthStencilStateDesc, StencilFace, StencilOp};
use render_device::raster::{Face, RasterMode, RasterStateDesc, Winding};
use std::cell::RefCell;
use std::error;
use std::fmt;
use std::marker::PhantomData;

use crate::gl41::GL41;

// TLS synchronization barrier for `GLState`.
thread_local!(static TLS_ACQUIRE_GFX_STATE: RefCell<Option<()>> = RefCell::new(Some(())));

/// Cached value.
///
/// A cached value is used to prevent issuing GPU commands if we know the target value is already
/// set to what the command tries to set.
#[derive(Debug)]
struct Cached<T>(Option<T>)
where
  T: PartialEq;

impl<T> Cached<T>
where
  T: PartialEq,
{
  fn empty() -> Self {
    Cached(None)
  }

  fn set(&mut self, value: T) {
    self.0 = Some(value);
  }

  fn get(&self) -> Option<&T> {
    self.0.as_ref()
  }

  /// A non-cached value is always invalid whatever compared value.
  fn is_invalid(&self, new_val: &T) -> bool {
    match &self.0 {
      Some(ref t) => t != new_val,
      _ => true,
    }
  }
}

/// Objects bound by the device, as last requested.
///
/// Creating a resource borrows binding points (the vertex array, a texture unit), so these are
/// restored afterwards. The element array buffer binding lives in the bound vertex array in OpenGL,
/// so the index buffer is tracked apart from it.
#[derive(Debug, Default)]
struct Bindings {
  vertex_array: GLuint,
  index_buffer: GLuint,
  textures: Vec<GLuint>, // per texture unit
}

impl Bindings {
  fn texture(&self, unit: u32) -> GLuint {
    self.textures.get(unit as usize).copied().unwrap_or(0)
  }

  fn set_texture(&mut self, unit: u32, handle: GLuint) {
    let unit = unit as usize;

    if self.textures.len() <= unit {
      self.textures.resize(unit + 1, 0);
    }

    self.textures[unit] = handle;
  }

  /// Buffer to bind to `GL_ELEMENT_ARRAY_BUFFER`, if a vertex array is there to hold it.
  fn element_array_buffer(&self) -> Option<GLuint> {
    if self.vertex_array == 0 {
      None
    } else {
      Some(self.index_buffer)
    }
  }
}

/// The graphics state.
///
/// Owning a [`GLState`] is the proof that OpenGL is usable on the current thread. Only one state
/// can be alive per thread; dropping it makes a new one acquirable again.
#[derive(Debug)]
pub struct GLState {
  _a: PhantomData<*const ()>, // !Send and !Sync

  current_texture_unit: Cached<GLenum>,
  bindings: Bindings,
}

impl GLState {
  /// Acquire the graphics state of the current thread.
  pub(crate) fn new() -> Result<Self, StateQueryError> {
    if !gl::Clear::is_loaded() {
      return Err(StateQueryError::UnloadedFunctions);
    }

    TLS_ACQUIRE_GFX_STATE.with(|rc| {
      let mut inner = rc.borrow_mut();

      match inner.take() {
        Some(_) => Ok(GLState {
          _a: PhantomData,
          current_texture_unit: Cached::empty(),
          bindings: Bindings::default(),
        }),

        None => Err(StateQueryError::UnavailableGLState),
      }
    })
  }

  unsafe fn set_texture_unit(&mut self, unit: u32) {
    let unit = gl::TEXTURE0 + unit;

    if self.current_texture_unit.is_invalid(&unit) {
      gl::ActiveTexture(unit);
      self.current_texture_unit.set(unit);
    }
  }

  /// Texture unit currently active; OpenGL starts on the first one.
  fn texture_unit(&self) -> u32 {
    self.current_texture_unit.get().map_or(0, |unit| unit - gl::TEXTURE0)
  }

  pub(crate) unsafe fn bind_texture_2d(&mut self, unit: u32, handle: GLuint) {
    self.set_texture_unit(unit);
    gl::BindTexture(gl::TEXTURE_2D, handle);
    self.bindings.set_texture(unit, handle);
  }

  /// Give the active texture unit back the texture bound to it before a texture was created.
  pub(crate) unsafe fn restore_texture_2d(&mut self) {
    let unit = self.texture_unit();
    gl::BindTexture(gl::TEXTURE_2D, self.bindings.texture(unit));
  }

  pub(crate) unsafe fn bind_vertex_array(&mut self, handle: GLuint) {
    gl::BindVertexArray(handle);
    self.bindings.vertex_array = handle;

    if let Some(index_buffer) = self.bindings.element_array_buffer() {
      gl::BindBuffer(gl::ELEMENT_ARRAY_BUFFER, index_buffer);
    }
  }

  /// Bind the vertex array bound before a vertex array was created, along with the index buffer.
  pub(crate) unsafe fn restore_vertex_array(&mut self) {
    self.bind_vertex_array(self.bindings.vertex_array);
  }

  pub(crate) unsafe fn bind_index_buffer(&mut self, handle: GLuint) {
    self.bindings.index_buffer = handle;

    // without a vertex array, the binding is deferred to the next vertex array bind
    if let Some(index_buffer) = self.bindings.element_array_buffer() {
      gl::BindBuffer(gl::ELEMENT_ARRAY_BUFFER, index_buffer);
    }
  }
}

impl Drop for GLState {
  fn drop(&mut self) {
    TLS_ACQUIRE_GFX_STATE.with(|rc| {
      *rc.borrow_mut() = Some(());
    });
  }
}

/// An error that might happen when the context is queried.
#[non_exhaustive]
#[derive(Debug, Eq, PartialEq)]
pub enum StateQueryError {
  /// The OpenGL function pointers haven’t been loaded.
  UnloadedFunctions,
  /// The [`GLState`] object is unavailable.
  ///
  /// That occurs if you try to have more than one state on the same thread.
  UnavailableGLState,
}

impl fmt::Display for StateQueryError {
  fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
    match *self {
      StateQueryError::UnloadedFunctions => write!(f, "OpenGL functions are not loaded"),
      StateQueryError::UnavailableGLState => write!(f, "unavailable graphics state"),
    }
  }
}

impl error::Error for StateQueryError {}

/// Rasterizer state, pre-translated into OpenGL enums.
#[derive(Debug)]
pub struct RasterState {
  cull_enabled: bool,
  front_face: GLenum,
  cull_face: GLenum,
  mode: GLenum,
}

#[derive(Debug)]
struct StencilFaceState {
  func: GLenum,
  reference: GLint,
  read_mask: GLuint,
  write_mask: GLuint,
  fail: GLenum,
  depth_fail: GLenum,
  pass: GLenum,
}

impl StencilFaceState {
  fn new(face: &StencilFace) -> Self {
    StencilFaceState {
      func: comparison_to_glenum(face.compare),
      reference: face.reference,
      read_mask: face.read_mask,
      write_mask: face.write_mask,
      fail: stencil_op_to_glenum(face.fail),
      depth_fail: stencil_op_to_glenum(face.depth_fail),
      pass: stencil_op_to_glenum(face.pass),
    }
  }

  unsafe fn apply(&self, face: GLenum) {
    gl::StencilFuncSeparate(face, self.func, self.reference, self.read_mask);
    gl::StencilOpSeparate(face, self.fail, self.depth_fail, self.pass);
    gl::StencilMaskSeparate(face, self.write_mask);
  }
}

/// Depth-stencil state, pre-translated into OpenGL values.
#[derive(Debug)]
pub struct DepthStencilState {
  depth_enabled: bool,
  depth_write: GLboolean,
  depth_near: GLdouble,
  depth_far: GLdouble,
  depth_func: GLenum,
  stencil_enabled: bool,
  front: StencilFaceState,
  back: StencilFaceState,
}

unsafe fn set_capability(cap: GLenum, enabled: bool) {
  if enabled {
    gl::Enable(cap);
  } else {
    gl::Disable(cap);
  }
}

unsafe impl State for GL41 {
  type RasterStateRepr = RasterState;
  type DepthStencilStateRepr = DepthStencilState;

  unsafe fn new_raster_state(&mut self, desc: &RasterStateDesc) -> Self::RasterStateRepr {
    RasterState {
      cull_enabled: desc.cull_enabled,
      front_face: winding_to_glenum(desc.front_face),
      cull_face: face_to_glenum(desc.cull_face),
      mode: raster_mode_to_glenum(desc.mode),
    }
  }

  unsafe fn new_depth_stencil_state(
    &mut self,
    desc: &DepthStencilStateDesc,
  ) -> Self::DepthStencilStateRepr {
    DepthStencilState {
      depth_enabled: desc.depth_enabled,
      depth_write: if desc.depth_write_enabled {
        gl::TRUE
      } else {
        gl::FALSE
      },
      depth_near: desc.depth_near.into(),
      depth_far: desc.depth_far.into(),
      depth_func: comparison_to_glenum(desc.depth_compare),
      stencil_enabled: desc.stencil_enabled(),
      front: StencilFaceState::new(&desc.front),
      back: StencilFaceState::new(&desc.back),
    }
  }

  unsafe fn apply_raster_state(&mut self, state: &Self::RasterStateRepr) {
    set_capability(gl::CULL_FACE, state.cull_enabled);
    gl::FrontFace(state.front_face);
    gl::CullFace(state.cull_face);
    gl::PolygonMode(gl::FRONT_AND_BACK, state.mode);
  }

  unsafe fn apply_depth_stencil_state(&mut self, state: &Self::DepthStencilStateRepr) {
    set_capability(gl::DEPTH_TEST, state.depth_enabled);
    gl::DepthFunc(state.depth_func);
    gl::DepthMask(state.depth_write);
    gl::DepthRange(state.depth_near, state.depth_far);

    set_capability(gl::STENCIL_TEST, state.stencil_enabled);
    state.front.apply(gl::FRONT);
    state.back.apply(gl::BACK);
  }
}

pub(crate) fn comparison_to_glenum(c: Comparison) -> GLenum {
  match c {
    Comparison::Never => gl::NEVER,
    Comparison::Less => gl::LESS,
    Comparison::Equal => gl::EQUAL,
    Comparison::LessOrEqual => gl::LEQUAL,
    Comparison::Greater => gl::GREATER,
    Comparison::NotEqual => gl::NOTEQUAL,
    Comparison::GreaterOrEqual => gl::GEQUAL,
    Comparison::Always => gl::ALWAYS,
  }
}

pub(crate) fn stencil_op_to_glenum(op: StencilOp) -> GLenum {
  match op {
    StencilOp::Keep => gl::KEEP,
    StencilOp::Zero => gl::ZERO,
    StencilOp::Replace => gl::REPLACE,
    StencilOp::Increment => gl::INCR,
    StencilOp::IncrementWrap => gl::INCR_WRAP,
    StencilOp::Decrement => gl::DECR,
    StencilOp::DecrementWrap => gl::DECR_WRAP,
    StencilOp::Invert => gl::INVERT,
  }
}

fn winding_to_glenum(w: Winding) -> GLenum {
  match w {
    Winding::CW => gl::CW,
    Winding::CCW => gl::CCW,
  }
}

fn face_to_glenum(f: Face) -> GLenum {
  match f {
    Face::Front => gl::FRONT,
    Face::Back => gl::BACK,
    Face::FrontAndBack => gl::FRONT_AND_BACK,
  }
}

fn raster_mode_to_glenum(m: RasterMode) -> GLenum {
  match m {
    RasterMode::Point => gl::POINT,
    RasterMode::Line => gl::LINE,
    RasterMode::Fill => gl::FILL,
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn textures_are_tracked_per_unit() {
    let mut bindings = Bindings::default();
    assert_eq!(bindings.texture(0), 0);

    bindings.set_texture(3, 7);
    bindings.set_texture(0, 2);

    assert_eq!(bindings.texture(0), 2);
    assert_eq!(bindings.texture(3), 7);
    assert_eq!(bindings.texture(1), 0);
    assert_eq!(bindings.texture(16), 0);

    bindings.set_texture(3, 0);
    assert_eq!(bindings.texture(3), 0);
  }

  #[test]
  fn index_buffer_follows_vertex_array() {
    let mut bindings = Bindings::default();

    // no vertex array to store the element binding yet
    bindings.index_buffer = 4;
    assert_eq!(bindings.element_array_buffer(), None);

    bindings.vertex_array = 1;
    assert_eq!(bindings.element_array_buffer(), Some(4));

    // switching vertex arrays carries the index buffer over
    bindings.vertex_array = 2;
    assert_eq!(bindings.element_array_buffer(), Some(4));

    bindings.index_buffer = 0;
    assert_eq!(bindings.element_array_buffer(), Some(0));
  }

  #[test]
  fn comparisons() {
    assert_eq!(comparison_to_glenum(Comparison::Never), gl::NEVER);
    assert_eq!(comparison_to_glenum(Comparison::LessOrEqual), gl::LEQUAL);
    assert_eq!(comparison_to_glenum(Comparison::NotEqual), gl::NOTEQUAL);
    assert_eq!(comparison_to_glenum(Comparison::Always), gl::ALWAYS);
  }

  #[test]
  fn stencil_ops() {
    assert_eq!(stencil_op_to_glenum(StencilOp::Keep), gl::KEEP);
    assert_eq!(stencil_op_to_glenum(StencilOp::Increment), gl::INCR);
    assert_eq!(stencil_op_to_glenum(StencilOp::DecrementWrap), gl::DECR_WRAP);
  }

  #[test]
  fn raster_enums() {
    assert_eq!(winding_to_glenum(Winding::CCW), gl::CCW);
    assert_eq!(face_to_glenum(Face::FrontAndBack), gl::FRONT_AND_BACK);
    assert_eq!(raster_mode_to_glenum(RasterMode::Line), gl::LINE);
  }

  #[test]
  fn default_raster_state_translation() {
    let mut backend = GL41 {
      state: GLState {
        _a: PhantomData,
        current_texture_unit: Cached::empty(),
        bindings: Bindings::default(),
      },
    };
    let state = unsafe { backend.new_raster_state(&RasterStateDesc::default()) };

    assert!(state.cull_enabled);
    assert_eq!(state.front_face, gl::CCW);
    assert_eq!(state.cull_face, gl::BACK);
    assert_eq!(state.mode, gl::FILL);
  }

  #[test]
  fn state_requires_loaded_functions() {
    assert_eq!(
      GLState::new().err(),
      Some(StateQueryError::UnloadedFunctions)
    );
  }

  #[test]
  fn cached_value() {
    let mut cached = Cached::empty();
    assert!(cached.is_invalid(&3));
    cached.set(3);
    assert!(!cached.is_invalid(&3));
    assert!(cached.is_invalid(&4));
  }
}
