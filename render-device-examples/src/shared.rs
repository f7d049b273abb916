//! Shared code between examples.

use cgmath::{Matrix4, Vector3};
use render_device::backend::Backend;
use render_device::handle::{Pipeline, PipelineParam};
use render_device::Device;
use render_device_windowing::Viewport;

use crate::DemoResult;

/// Background color of every example.
pub const CLEAR_COLOR: [f32; 4] = [0.2, 0.3, 0.3, 1.];

/// Compile both stages and link them. The stages are released once linked.
pub fn build_pipeline<B>(device: &mut Device<B>, vs_src: &str, ps_src: &str) -> DemoResult<Pipeline>
where
  B: Backend,
{
  let vs = device.create_vertex_shader(vs_src)?;
  let ps = match device.create_pixel_shader(ps_src) {
    Ok(ps) => ps,
    Err(e) => {
      device.destroy_vertex_shader(vs)?;
      return Err(e.into());
    }
  };

  let pipeline = device.create_pipeline(vs, ps);

  device.destroy_vertex_shader(vs)?;
  device.destroy_pixel_shader(ps)?;

  Ok(pipeline?)
}

/// Look up a parameter, warning if the pipeline doesn’t expose it.
pub fn param<B>(
  device: &mut Device<B>,
  pipeline: Pipeline,
  name: &str,
) -> DemoResult<Option<PipelineParam>>
where
  B: Backend,
{
  let param = device.pipeline_param(pipeline, name)?;

  if param.is_none() {
    log::warn!("pipeline has no “{}” parameter", name);
  }

  Ok(param)
}

/// Camera pulled back from the origin.
pub fn view() -> Matrix4<f32> {
  Matrix4::from_translation(Vector3::new(0., 0., -3.))
}

/// Model, view and projection parameters of the cube examples.
#[derive(Debug)]
pub struct Transform {
  model: Option<PipelineParam>,
  view: Option<PipelineParam>,
  projection: Option<PipelineParam>,
}

impl Transform {
  pub fn new<B>(device: &mut Device<B>, pipeline: Pipeline) -> DemoResult<Self>
  where
    B: Backend,
  {
    Ok(Transform {
      model: param(device, pipeline, "uModel")?,
      view: param(device, pipeline, "uView")?,
      projection: param(device, pipeline, "uProjection")?,
    })
  }

  /// Upload the matrices of a viewport.
  pub fn upload<B>(
    &self,
    device: &mut Device<B>,
    viewport: &Viewport,
  ) -> DemoResult<()>
  where
    B: Backend,
  {
    if let Some(model) = self.model {
      device.set_param_mat4(model, &viewport.model_cols())?;
    }

    if let Some(view_param) = self.view {
      let view: [[f32; 4]; 4] = view().into();
      device.set_param_mat4(view_param, &view)?;
    }

    if let Some(projection) = self.projection {
      device.set_param_mat4(projection, &viewport.projection_cols())?;
    }

    Ok(())
  }
}

/// Number of vertices of a cube, four per face.
pub const CUBE_VERTEX_COUNT: usize = 24;

/// Corners of every face, counter-clockwise when looking at the face from outside.
pub const CUBE_POSITIONS: [[f32; 3]; CUBE_VERTEX_COUNT] = [
  // front
  [-0.5, -0.5, 0.5],
  [0.5, -0.5, 0.5],
  [0.5, 0.5, 0.5],
  [-0.5, 0.5, 0.5],
  // right
  [0.5, -0.5, 0.5],
  [0.5, -0.5, -0.5],
  [0.5, 0.5, -0.5],
  [0.5, 0.5, 0.5],
  // top
  [-0.5, 0.5, 0.5],
  [0.5, 0.5, 0.5],
  [0.5, 0.5, -0.5],
  [-0.5, 0.5, -0.5],
  // back
  [0.5, -0.5, -0.5],
  [-0.5, -0.5, -0.5],
  [-0.5, 0.5, -0.5],
  [0.5, 0.5, -0.5],
  // left
  [-0.5, -0.5, -0.5],
  [-0.5, -0.5, 0.5],
  [-0.5, 0.5, 0.5],
  [-0.5, 0.5, -0.5],
  // bottom
  [-0.5, -0.5, 0.5],
  [-0.5, -0.5, -0.5],
  [0.5, -0.5, -0.5],
  [0.5, -0.5, 0.5],
];

/// Two triangles per face.
pub const CUBE_INDICES: [u32; 36] = [
  0, 1, 2, 0, 2, 3, // front
  4, 5, 6, 4, 6, 7, // right
  8, 9, 10, 8, 10, 11, // top
  12, 13, 14, 12, 14, 15, // back
  16, 17, 18, 16, 18, 19, // left
  20, 21, 22, 20, 22, 23, // bottom
];

#[cfg(test)]
mod tests {
  use super::*;
  use cgmath::InnerSpace;

  #[test]
  fn cube_indices_stay_in_range() {
    assert!(CUBE_INDICES
      .iter()
      .all(|&i| (i as usize) < CUBE_VERTEX_COUNT));
  }

  #[test]
  fn cube_faces_point_outward() {
    for face in CUBE_INDICES.chunks(3) {
      let [a, b, c] =
        [face[0], face[1], face[2]].map(|i| Vector3::from(CUBE_POSITIONS[i as usize]));
      let normal = (b - a).cross(c - a);
      let center = (a + b + c) / 3.;

      assert!(normal.dot(center) > 0., "inward face {:?}", face);
    }
  }
}
