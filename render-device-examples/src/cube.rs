//! An indexed cube with one color per face, rotated with the mouse.
//!
//! Each vertex carries a position and a color, interleaved in the same buffer and described by two
//! vertex elements sharing a stride. Drag with the left button to rotate, press the right button to
//! reset the rotation.

use render_device::backend::Backend;
use render_device::command::ClearValues;
use render_device::handle::{IndexBuffer, Pipeline, VertexArray, VertexBuffer, VertexDescription};
use render_device::vertex::{VertexElement, VertexElementType};
use render_device::Device;
use render_device_windowing::Viewport;
use std::mem;

use crate::shared::{build_pipeline, Transform, CLEAR_COLOR, CUBE_INDICES, CUBE_POSITIONS};
use crate::{CLIOpts, DemoResult, Example};

const VS: &str = "#version 410 core
uniform mat4 uModel;
uniform mat4 uView;
uniform mat4 uProjection;
layout (location = 0) in vec3 aPos;
layout (location = 1) in vec3 aColor;
out vec3 vColor;
void main() {
  gl_Position = uProjection * uView * uModel * vec4(aPos, 1.);
  vColor = aColor;
}";

const PS: &str = "#version 410 core
in vec3 vColor;
out vec4 FragColor;
void main() {
  FragColor = vec4(vColor, 1.);
}";

// front, right, top, back, left, bottom
const FACE_COLORS: [[f32; 3]; 6] = [
  [0.9, 0.2, 0.2],
  [0.2, 0.9, 0.2],
  [0.2, 0.2, 0.9],
  [0.9, 0.9, 0.2],
  [0.2, 0.9, 0.9],
  [0.9, 0.2, 0.9],
];

type Vertex = [f32; 6];

fn vertices() -> Vec<Vertex> {
  CUBE_POSITIONS
    .iter()
    .enumerate()
    .map(|(i, [x, y, z])| {
      let [r, g, b] = FACE_COLORS[i / 4];
      [*x, *y, *z, r, g, b]
    })
    .collect()
}

pub struct LocalExample {
  pipeline: Pipeline,
  transform: Transform,
  vertex_buffer: VertexBuffer,
  vertex_description: VertexDescription,
  vertex_array: VertexArray,
  index_buffer: IndexBuffer,
}

impl Example for LocalExample {
  fn bootstrap<B>(device: &mut Device<B>, _: &CLIOpts) -> DemoResult<Self>
  where
    B: Backend,
  {
    let pipeline = build_pipeline(device, VS, PS)?;
    let transform = Transform::new(device, pipeline)?;

    let stride = mem::size_of::<Vertex>();
    let vertex_buffer = device.create_vertex_buffer_from(vertices().as_slice())?;
    let vertex_description = device.create_vertex_description(&[
      VertexElement::new(0, VertexElementType::Float, 3).with_stride(stride),
      VertexElement::new(1, VertexElementType::Float, 3)
        .with_stride(stride)
        .with_offset(3 * mem::size_of::<f32>()),
    ])?;
    let vertex_array = device.create_vertex_array(&[vertex_buffer], &[vertex_description])?;
    let index_buffer = device.create_index_buffer_from(&CUBE_INDICES)?;

    Ok(LocalExample {
      pipeline,
      transform,
      vertex_buffer,
      vertex_description,
      vertex_array,
      index_buffer,
    })
  }

  fn render_frame<B>(&mut self, device: &mut Device<B>, viewport: &Viewport) -> DemoResult<()>
  where
    B: Backend,
  {
    self.transform.upload(device, viewport)?;

    let [r, g, b, a] = CLEAR_COLOR;
    device.clear(&ClearValues::color(r, g, b, a));

    device.set_pipeline(Some(self.pipeline))?;
    device.set_vertex_array(Some(self.vertex_array))?;
    device.set_index_buffer(Some(self.index_buffer))?;
    device.draw_triangles_indexed32(0, CUBE_INDICES.len() as u32);

    Ok(())
  }

  fn teardown<B>(self, device: &mut Device<B>) -> DemoResult<()>
  where
    B: Backend,
  {
    device.set_vertex_array(None)?;
    device.set_pipeline(None)?;

    device.destroy_index_buffer(self.index_buffer)?;
    device.destroy_vertex_array(self.vertex_array)?;
    device.destroy_vertex_description(self.vertex_description)?;
    device.destroy_vertex_buffer(self.vertex_buffer)?;
    device.destroy_pipeline(self.pipeline)?;

    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn faces_are_uniformly_colored() {
    let vertices = vertices();
    assert_eq!(vertices.len(), CUBE_POSITIONS.len());

    for (face, color) in vertices.chunks(4).zip(FACE_COLORS.iter()) {
      assert!(face.iter().all(|v| &v[3..] == color));
    }
  }
}
