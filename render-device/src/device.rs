//! The device: resource factory and binding front-end of a backend.
//!
//! A [`Device`] owns a backend value and one arena per resource kind. Every `create_*` method
//! asks the backend for an object, stores the backend representation in the matching arena and
//! hands back a handle; every `destroy_*` method removes it from the arena, which drops the backend
//! object. Handles that outlived their resource are rejected with [`DeviceError::StaleHandle`].
//!
//! The device also:
//!
//! - caches pipeline parameter lookups by name, per pipeline;
//! - checks vertex layouts before they reach the backend;
//! - skips raster and depth-stencil binds when the requested state is already bound.

use log::{debug, trace, warn};
use slotmap::SlotMap;
use std::collections::HashMap;

use crate::backend::buffer::BufferKind;
use crate::backend::shader::Shader;
use crate::backend::Backend;
use crate::command::ClearValues;
use crate::depth_stencil::DepthStencilStateDesc;
use crate::error::{DeviceError, ResourceKind};
use crate::handle::{
  DepthStencilState, IndexBuffer, ParamKey, PixelShader, Pipeline, PipelineParam, RasterState,
  Texture2D, VertexArray, VertexBuffer, VertexDescription, VertexShader,
};
use crate::raster::RasterStateDesc;
use crate::shader::{Mat4, ParamValue, ShaderStage};
use crate::texture::{texel_bytes, Sampler};
use crate::vertex::{VertexAttrib, VertexElement};

/// A linked program along with its parameter cache.
struct PipelineEntry<B>
where
  B: ?Sized + Shader,
{
  program: B::ProgramRepr,
  params: SlotMap<ParamKey, B::ParamRepr>,
  names: HashMap<String, ParamKey>,
}

/// Resource factory and binding front-end of a backend `B`.
///
/// Dropping the device drops every resource still alive, then the backend.
pub struct Device<B>
where
  B: Backend,
{
  vertex_shaders: SlotMap<VertexShader, B::StageRepr>,
  pixel_shaders: SlotMap<PixelShader, B::StageRepr>,
  pipelines: SlotMap<Pipeline, PipelineEntry<B>>,
  vertex_buffers: SlotMap<VertexBuffer, B::BufferRepr>,
  index_buffers: SlotMap<IndexBuffer, B::BufferRepr>,
  vertex_descriptions: SlotMap<VertexDescription, B::DescriptionRepr>,
  vertex_arrays: SlotMap<VertexArray, B::VertexArrayRepr>,
  textures: SlotMap<Texture2D, B::TextureRepr>,
  raster_states: SlotMap<RasterState, B::RasterStateRepr>,
  depth_stencil_states: SlotMap<DepthStencilState, B::DepthStencilStateRepr>,
  default_raster_state: RasterState,
  default_depth_stencil_state: DepthStencilState,
  bound_raster_state: Option<RasterState>,
  bound_depth_stencil_state: Option<DepthStencilState>,
  // must stay last: resources are dropped before the backend
  backend: B,
}

impl<B> Device<B>
where
  B: Backend,
{
  /// Wrap a backend into a device.
  ///
  /// The default raster and depth-stencil states are created and applied right away, so the
  /// backend starts in a known fixed-function configuration.
  ///
  /// A backend value can only be obtained while its drawing context is usable on the current
  /// thread, which is what makes this function safe.
  pub fn new(mut backend: B) -> Self {
    let mut raster_states = SlotMap::with_key();
    let mut depth_stencil_states = SlotMap::with_key();

    let default_raster_state = unsafe {
      let repr = backend.new_raster_state(&RasterStateDesc::default());
      backend.apply_raster_state(&repr);
      raster_states.insert(repr)
    };

    let default_depth_stencil_state = unsafe {
      let repr = backend.new_depth_stencil_state(&DepthStencilStateDesc::default());
      backend.apply_depth_stencil_state(&repr);
      depth_stencil_states.insert(repr)
    };

    Device {
      vertex_shaders: SlotMap::with_key(),
      pixel_shaders: SlotMap::with_key(),
      pipelines: SlotMap::with_key(),
      vertex_buffers: SlotMap::with_key(),
      index_buffers: SlotMap::with_key(),
      vertex_descriptions: SlotMap::with_key(),
      vertex_arrays: SlotMap::with_key(),
      textures: SlotMap::with_key(),
      raster_states,
      depth_stencil_states,
      default_raster_state,
      default_depth_stencil_state,
      bound_raster_state: Some(default_raster_state),
      bound_depth_stencil_state: Some(default_depth_stencil_state),
      backend,
    }
  }

  /// Access the backend.
  pub fn backend(&self) -> &B {
    &self.backend
  }

  /// Access the backend mutably.
  ///
  /// Changing fixed-function state directly through the backend isn’t seen by the device, which
  /// will keep skipping binds of what it believes is still bound.
  pub fn backend_mut(&mut self) -> &mut B {
    &mut self.backend
  }

  /// Compile a vertex shader.
  pub fn create_vertex_shader(&mut self, src: &str) -> Result<VertexShader, DeviceError> {
    let repr = self.new_stage(ShaderStage::Vertex, src)?;
    let handle = self.vertex_shaders.insert(repr);
    debug!("created vertex shader {:?}", handle);
    Ok(handle)
  }

  /// Destroy a vertex shader.
  ///
  /// Pipelines linked from it are not affected.
  pub fn destroy_vertex_shader(&mut self, shader: VertexShader) -> Result<(), DeviceError> {
    self
      .vertex_shaders
      .remove(shader)
      .ok_or(DeviceError::stale(ResourceKind::VertexShader))?;
    debug!("destroyed vertex shader {:?}", shader);
    Ok(())
  }

  /// Compile a pixel shader.
  pub fn create_pixel_shader(&mut self, src: &str) -> Result<PixelShader, DeviceError> {
    let repr = self.new_stage(ShaderStage::Pixel, src)?;
    let handle = self.pixel_shaders.insert(repr);
    debug!("created pixel shader {:?}", handle);
    Ok(handle)
  }

  /// Destroy a pixel shader.
  ///
  /// Pipelines linked from it are not affected.
  pub fn destroy_pixel_shader(&mut self, shader: PixelShader) -> Result<(), DeviceError> {
    self
      .pixel_shaders
      .remove(shader)
      .ok_or(DeviceError::stale(ResourceKind::PixelShader))?;
    debug!("destroyed pixel shader {:?}", shader);
    Ok(())
  }

  fn new_stage(&mut self, stage: ShaderStage, src: &str) -> Result<B::StageRepr, DeviceError> {
    unsafe { self.backend.new_stage(stage, src) }.map_err(|e| {
      warn!("{}", e);
      DeviceError::Creation(e)
    })
  }

  /// Link a vertex and a pixel shader into a pipeline.
  pub fn create_pipeline(
    &mut self,
    vertex: VertexShader,
    pixel: PixelShader,
  ) -> Result<Pipeline, DeviceError> {
    let vs = self
      .vertex_shaders
      .get(vertex)
      .ok_or(DeviceError::stale(ResourceKind::VertexShader))?;
    let ps = self
      .pixel_shaders
      .get(pixel)
      .ok_or(DeviceError::stale(ResourceKind::PixelShader))?;

    let program = unsafe { self.backend.new_program(vs, ps) }.map_err(|e| {
      warn!("{}", e);
      DeviceError::Creation(e)
    })?;

    let handle = self.pipelines.insert(PipelineEntry {
      program,
      params: SlotMap::with_key(),
      names: HashMap::new(),
    });
    debug!("created pipeline {:?}", handle);

    Ok(handle)
  }

  /// Destroy a pipeline.
  ///
  /// Its parameters become invalid.
  pub fn destroy_pipeline(&mut self, pipeline: Pipeline) -> Result<(), DeviceError> {
    self
      .pipelines
      .remove(pipeline)
      .ok_or(DeviceError::stale(ResourceKind::Pipeline))?;
    debug!("destroyed pipeline {:?}", pipeline);
    Ok(())
  }

  /// Activate a pipeline. [`None`] deactivates the current one.
  pub fn set_pipeline(&mut self, pipeline: Option<Pipeline>) -> Result<(), DeviceError> {
    match pipeline {
      Some(pipeline) => {
        let entry = self
          .pipelines
          .get(pipeline)
          .ok_or(DeviceError::stale(ResourceKind::Pipeline))?;
        unsafe { self.backend.use_program(Some(&entry.program)) };
      }

      None => unsafe { self.backend.use_program(None) },
    }

    Ok(())
  }

  /// Look up a named parameter of a pipeline.
  ///
  /// Found parameters are cached: asking again for the same name returns the same
  /// [`PipelineParam`] without querying the backend. A name the pipeline doesn’t expose yields
  /// `Ok(None)` and is not cached, so it’s queried again next time. The empty name never matches.
  pub fn pipeline_param(
    &mut self,
    pipeline: Pipeline,
    name: &str,
  ) -> Result<Option<PipelineParam>, DeviceError> {
    let entry = self
      .pipelines
      .get_mut(pipeline)
      .ok_or(DeviceError::stale(ResourceKind::Pipeline))?;

    if name.is_empty() {
      return Ok(None);
    }

    if let Some(&key) = entry.names.get(name) {
      return Ok(Some(PipelineParam { pipeline, key }));
    }

    match unsafe { self.backend.param_location(&entry.program, name) } {
      Some(location) => {
        let key = entry.params.insert(location);
        entry.names.insert(name.to_owned(), key);
        Ok(Some(PipelineParam { pipeline, key }))
      }

      None => {
        debug!("pipeline {:?} has no active parameter {:?}", pipeline, name);
        Ok(None)
      }
    }
  }

  fn set_param(&mut self, param: PipelineParam, value: ParamValue) -> Result<(), DeviceError> {
    let entry = self
      .pipelines
      .get(param.pipeline)
      .ok_or(DeviceError::stale(ResourceKind::Pipeline))?;
    let location = *entry
      .params
      .get(param.key)
      .ok_or(DeviceError::stale(ResourceKind::PipelineParam))?;

    unsafe {
      self.backend.use_program(Some(&entry.program));
      self.backend.set_param(location, value);
    }

    Ok(())
  }

  /// Write an integer to a parameter, activating its pipeline first.
  pub fn set_param_int(&mut self, param: PipelineParam, x: i32) -> Result<(), DeviceError> {
    self.set_param(param, ParamValue::Int(x))
  }

  /// Write a float to a parameter, activating its pipeline first.
  pub fn set_param_float(&mut self, param: PipelineParam, x: f32) -> Result<(), DeviceError> {
    self.set_param(param, ParamValue::Float(x))
  }

  /// Write a column-major 4×4 matrix to a parameter, activating its pipeline first.
  pub fn set_param_mat4(&mut self, param: PipelineParam, m: &Mat4) -> Result<(), DeviceError> {
    self.set_param(param, ParamValue::Mat4(m))
  }

  /// Write an array of integers, activating the pipeline first.
  ///
  /// The length isn’t checked against the array size the shader declares.
  pub fn set_param_int_array(
    &mut self,
    param: PipelineParam,
    xs: &[i32],
  ) -> Result<(), DeviceError> {
    self.set_param(param, ParamValue::IntArray(xs))
  }

  /// Write an array of floats, activating the pipeline first.
  ///
  /// The length isn’t checked against the array size the shader declares.
  pub fn set_param_float_array(
    &mut self,
    param: PipelineParam,
    xs: &[f32],
  ) -> Result<(), DeviceError> {
    self.set_param(param, ParamValue::FloatArray(xs))
  }

  /// Write an array of column-major 4×4 matrices, activating the pipeline first.
  ///
  /// The length isn’t checked against the array size the shader declares.
  pub fn set_param_mat4_array(
    &mut self,
    param: PipelineParam,
    ms: &[Mat4],
  ) -> Result<(), DeviceError> {
    self.set_param(param, ParamValue::Mat4Array(ms))
  }

  fn new_buffer(
    &mut self,
    kind: BufferKind,
    size: usize,
    data: Option<&[u8]>,
  ) -> Result<B::BufferRepr, DeviceError> {
    if size > isize::MAX as usize {
      return Err(DeviceError::BufferTooLarge { size });
    }

    if let Some(data) = data {
      if data.len() != size {
        return Err(DeviceError::BufferSizeMismatch {
          size,
          data_len: data.len(),
        });
      }
    }

    Ok(unsafe { self.backend.new_buffer(kind, size, data) })
  }

  /// Create a vertex buffer of `size` bytes, optionally initialized with `data`.
  ///
  /// `data`, if any, must be exactly `size` bytes long, and `size` can’t exceed `isize::MAX`.
  pub fn create_vertex_buffer(
    &mut self,
    size: usize,
    data: Option<&[u8]>,
  ) -> Result<VertexBuffer, DeviceError> {
    let repr = self.new_buffer(BufferKind::Vertex, size, data)?;
    let handle = self.vertex_buffers.insert(repr);
    debug!("created vertex buffer {:?} ({} bytes)", handle, size);
    Ok(handle)
  }

  /// Create a vertex buffer holding the bytes of `data`.
  pub fn create_vertex_buffer_from<T>(&mut self, data: &[T]) -> Result<VertexBuffer, DeviceError>
  where
    T: bytemuck::Pod,
  {
    let bytes: &[u8] = bytemuck::cast_slice(data);
    self.create_vertex_buffer(bytes.len(), Some(bytes))
  }

  /// Destroy a vertex buffer.
  pub fn destroy_vertex_buffer(&mut self, buffer: VertexBuffer) -> Result<(), DeviceError> {
    self
      .vertex_buffers
      .remove(buffer)
      .ok_or(DeviceError::stale(ResourceKind::VertexBuffer))?;
    debug!("destroyed vertex buffer {:?}", buffer);
    Ok(())
  }

  /// Create an index buffer of `size` bytes, optionally initialized with `data`.
  ///
  /// Indices are 32-bit unsigned integers. `data`, if any, must be exactly `size` bytes long, and
  /// `size` can’t exceed `isize::MAX`.
  pub fn create_index_buffer(
    &mut self,
    size: usize,
    data: Option<&[u8]>,
  ) -> Result<IndexBuffer, DeviceError> {
    let repr = self.new_buffer(BufferKind::Index, size, data)?;
    let handle = self.index_buffers.insert(repr);
    debug!("created index buffer {:?} ({} bytes)", handle, size);
    Ok(handle)
  }

  /// Create an index buffer holding the bytes of `data`.
  pub fn create_index_buffer_from<T>(&mut self, data: &[T]) -> Result<IndexBuffer, DeviceError>
  where
    T: bytemuck::Pod,
  {
    let bytes: &[u8] = bytemuck::cast_slice(data);
    self.create_index_buffer(bytes.len(), Some(bytes))
  }

  /// Destroy an index buffer.
  pub fn destroy_index_buffer(&mut self, buffer: IndexBuffer) -> Result<(), DeviceError> {
    self
      .index_buffers
      .remove(buffer)
      .ok_or(DeviceError::stale(ResourceKind::IndexBuffer))?;
    debug!("destroyed index buffer {:?}", buffer);
    Ok(())
  }

  /// Bind an index buffer for indexed draws. [`None`] unbinds it.
  ///
  /// The index buffer binding is independent of the vertex array binding: it survives
  /// [`Device::set_vertex_array`] and resource creation, whatever the order of the calls.
  pub fn set_index_buffer(&mut self, buffer: Option<IndexBuffer>) -> Result<(), DeviceError> {
    let repr = match buffer {
      Some(buffer) => Some(
        self
          .index_buffers
          .get(buffer)
          .ok_or(DeviceError::stale(ResourceKind::IndexBuffer))?,
      ),
      None => None,
    };

    unsafe { self.backend.bind_index_buffer(repr) };
    Ok(())
  }

  /// Create a vertex description out of vertex elements.
  ///
  /// Every element must have 1 to 4 components.
  pub fn create_vertex_description(
    &mut self,
    elements: &[VertexElement],
  ) -> Result<VertexDescription, DeviceError> {
    let attribs = elements
      .iter()
      .map(VertexElement::to_attrib)
      .collect::<Result<Vec<VertexAttrib>, _>>()?;

    let repr = unsafe { self.backend.new_description(&attribs) };
    let handle = self.vertex_descriptions.insert(repr);
    debug!(
      "created vertex description {:?} ({} elements)",
      handle,
      attribs.len()
    );

    Ok(handle)
  }

  /// Destroy a vertex description.
  ///
  /// Vertex arrays built with it are not affected.
  pub fn destroy_vertex_description(
    &mut self,
    description: VertexDescription,
  ) -> Result<(), DeviceError> {
    self
      .vertex_descriptions
      .remove(description)
      .ok_or(DeviceError::stale(ResourceKind::VertexDescription))?;
    debug!("destroyed vertex description {:?}", description);
    Ok(())
  }

  /// Bind vertex buffers together with their descriptions.
  ///
  /// `buffers[i]` is interpreted with `descriptions[i]`, hence both slices must have the same
  /// length. The vertex array doesn’t keep the buffers alive.
  pub fn create_vertex_array(
    &mut self,
    buffers: &[VertexBuffer],
    descriptions: &[VertexDescription],
  ) -> Result<VertexArray, DeviceError> {
    if buffers.len() != descriptions.len() {
      return Err(DeviceError::MismatchedVertexArrayInputs {
        buffers: buffers.len(),
        descriptions: descriptions.len(),
      });
    }

    let mut inputs = Vec::with_capacity(buffers.len());
    for (&buffer, &description) in buffers.iter().zip(descriptions) {
      let buffer = self
        .vertex_buffers
        .get(buffer)
        .ok_or(DeviceError::stale(ResourceKind::VertexBuffer))?;
      let description = self
        .vertex_descriptions
        .get(description)
        .ok_or(DeviceError::stale(ResourceKind::VertexDescription))?;
      inputs.push((buffer, description));
    }

    let repr = unsafe { self.backend.new_vertex_array(&inputs) };
    let handle = self.vertex_arrays.insert(repr);
    debug!("created vertex array {:?} ({} buffers)", handle, buffers.len());

    Ok(handle)
  }

  /// Destroy a vertex array.
  pub fn destroy_vertex_array(&mut self, vertex_array: VertexArray) -> Result<(), DeviceError> {
    self
      .vertex_arrays
      .remove(vertex_array)
      .ok_or(DeviceError::stale(ResourceKind::VertexArray))?;
    debug!("destroyed vertex array {:?}", vertex_array);
    Ok(())
  }

  /// Bind a vertex array for drawing. [`None`] unbinds it.
  pub fn set_vertex_array(&mut self, vertex_array: Option<VertexArray>) -> Result<(), DeviceError> {
    let repr = match vertex_array {
      Some(vertex_array) => Some(
        self
          .vertex_arrays
          .get(vertex_array)
          .ok_or(DeviceError::stale(ResourceKind::VertexArray))?,
      ),
      None => None,
    };

    unsafe { self.backend.bind_vertex_array(repr) };
    Ok(())
  }

  /// Create a `width × height` RGBA8 texture with the default [`Sampler`].
  ///
  /// `texels`, if any, must hold exactly `width × height × 4` bytes, bottom row first.
  pub fn create_texture_2d(
    &mut self,
    width: u32,
    height: u32,
    texels: Option<&[u8]>,
  ) -> Result<Texture2D, DeviceError> {
    self.create_texture_2d_sampled(width, height, &Sampler::default(), texels)
  }

  /// Create a `width × height` RGBA8 texture sampled with `sampler`.
  pub fn create_texture_2d_sampled(
    &mut self,
    width: u32,
    height: u32,
    sampler: &Sampler,
    texels: Option<&[u8]>,
  ) -> Result<Texture2D, DeviceError> {
    let expected = texel_bytes(width, height)
      .filter(|_| width > 0 && height > 0 && width <= i32::MAX as u32 && height <= i32::MAX as u32)
      .ok_or(DeviceError::InvalidTextureSize { width, height })?;

    if let Some(texels) = texels {
      if texels.len() != expected {
        return Err(DeviceError::TexelSizeMismatch {
          expected,
          actual: texels.len(),
        });
      }
    }

    let repr = unsafe { self.backend.new_texture_2d(width, height, sampler, texels) };
    let handle = self.textures.insert(repr);
    debug!("created texture {:?} ({}×{})", handle, width, height);

    Ok(handle)
  }

  /// Destroy a texture.
  pub fn destroy_texture_2d(&mut self, texture: Texture2D) -> Result<(), DeviceError> {
    self
      .textures
      .remove(texture)
      .ok_or(DeviceError::stale(ResourceKind::Texture2D))?;
    debug!("destroyed texture {:?}", texture);
    Ok(())
  }

  /// Bind a texture to the texture unit `slot`. [`None`] unbinds the unit.
  pub fn set_texture_2d(
    &mut self,
    slot: u32,
    texture: Option<Texture2D>,
  ) -> Result<(), DeviceError> {
    let repr = match texture {
      Some(texture) => Some(
        self
          .textures
          .get(texture)
          .ok_or(DeviceError::stale(ResourceKind::Texture2D))?,
      ),
      None => None,
    };

    unsafe { self.backend.bind_texture_2d(slot, repr) };
    Ok(())
  }

  /// Create a raster state.
  pub fn create_raster_state(&mut self, desc: &RasterStateDesc) -> RasterState {
    let repr = unsafe { self.backend.new_raster_state(desc) };
    let handle = self.raster_states.insert(repr);
    debug!("created raster state {:?}: {:?}", handle, desc);
    handle
  }

  /// Destroy a raster state.
  ///
  /// The default raster state can’t be destroyed ([`DeviceError::DefaultState`]).
  pub fn destroy_raster_state(&mut self, state: RasterState) -> Result<(), DeviceError> {
    if state == self.default_raster_state {
      return Err(DeviceError::DefaultState(ResourceKind::RasterState));
    }

    self
      .raster_states
      .remove(state)
      .ok_or(DeviceError::stale(ResourceKind::RasterState))?;
    debug!("destroyed raster state {:?}", state);
    Ok(())
  }

  /// Bind a raster state. [`None`] selects the default one.
  ///
  /// Nothing reaches the backend if that state is already bound.
  pub fn set_raster_state(&mut self, state: Option<RasterState>) -> Result<(), DeviceError> {
    let state = state.unwrap_or(self.default_raster_state);
    let repr = self
      .raster_states
      .get(state)
      .ok_or(DeviceError::stale(ResourceKind::RasterState))?;

    if self.bound_raster_state == Some(state) {
      trace!("raster state {:?} already bound", state);
      return Ok(());
    }

    unsafe { self.backend.apply_raster_state(repr) };
    self.bound_raster_state = Some(state);

    Ok(())
  }

  /// Create a depth-stencil state.
  pub fn create_depth_stencil_state(&mut self, desc: &DepthStencilStateDesc) -> DepthStencilState {
    let repr = unsafe { self.backend.new_depth_stencil_state(desc) };
    let handle = self.depth_stencil_states.insert(repr);
    debug!("created depth-stencil state {:?}: {:?}", handle, desc);
    handle
  }

  /// Destroy a depth-stencil state.
  ///
  /// The default depth-stencil state can’t be destroyed ([`DeviceError::DefaultState`]).
  pub fn destroy_depth_stencil_state(
    &mut self,
    state: DepthStencilState,
  ) -> Result<(), DeviceError> {
    if state == self.default_depth_stencil_state {
      return Err(DeviceError::DefaultState(ResourceKind::DepthStencilState));
    }

    self
      .depth_stencil_states
      .remove(state)
      .ok_or(DeviceError::stale(ResourceKind::DepthStencilState))?;
    debug!("destroyed depth-stencil state {:?}", state);
    Ok(())
  }

  /// Bind a depth-stencil state. [`None`] selects the default one.
  ///
  /// Nothing reaches the backend if that state is already bound.
  pub fn set_depth_stencil_state(
    &mut self,
    state: Option<DepthStencilState>,
  ) -> Result<(), DeviceError> {
    let state = state.unwrap_or(self.default_depth_stencil_state);
    let repr = self
      .depth_stencil_states
      .get(state)
      .ok_or(DeviceError::stale(ResourceKind::DepthStencilState))?;

    if self.bound_depth_stencil_state == Some(state) {
      trace!("depth-stencil state {:?} already bound", state);
      return Ok(());
    }

    unsafe { self.backend.apply_depth_stencil_state(repr) };
    self.bound_depth_stencil_state = Some(state);

    Ok(())
  }

  /// Clear color, depth and stencil.
  pub fn clear(&mut self, values: &ClearValues) {
    unsafe { self.backend.clear(values) }
  }

  /// Draw `count` vertices of the bound vertex array as a triangle list, starting at `first`.
  ///
  /// Backends clamp `first` and `count` to their native range (`i32::MAX` for OpenGL).
  pub fn draw_triangles(&mut self, first: u32, count: u32) {
    unsafe { self.backend.draw_triangles(first, count) }
  }

  /// Draw `count` 32-bit indices of the bound index buffer as a triangle list, starting at byte
  /// `offset`.
  ///
  /// Backends clamp `count` to their native range (`i32::MAX` for OpenGL).
  pub fn draw_triangles_indexed32(&mut self, offset: usize, count: u32) {
    unsafe { self.backend.draw_triangles_indexed32(offset, count) }
  }
}
