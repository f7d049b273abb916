//! The hello world of render-device: a single orange triangle.
//!
//! No parameters, no index buffer: one vertex buffer holding three positions, described by a single
//! vertex element, drawn with one non-indexed draw.

use render_device::backend::Backend;
use render_device::command::ClearValues;
use render_device::handle::{Pipeline, VertexArray, VertexBuffer, VertexDescription};
use render_device::vertex::{VertexElement, VertexElementType};
use render_device::Device;
use render_device_windowing::Viewport;

use crate::shared::{build_pipeline, CLEAR_COLOR};
use crate::{CLIOpts, DemoResult, Example};

const VS: &str = "#version 410 core
layout (location = 0) in vec3 aPos;
void main() {
  gl_Position = vec4(aPos, 1.);
}";

const PS: &str = "#version 410 core
out vec4 FragColor;
void main() {
  FragColor = vec4(1., .5, .2, 1.);
}";

const VERTICES: [[f32; 3]; 3] = [
  [-0.5, -0.5, 0.], // left
  [0.5, -0.5, 0.],  // right
  [0., 0.5, 0.],    // top
];

pub struct LocalExample {
  pipeline: Pipeline,
  vertex_buffer: VertexBuffer,
  vertex_description: VertexDescription,
  vertex_array: VertexArray,
}

impl Example for LocalExample {
  fn bootstrap<B>(device: &mut Device<B>, _: &CLIOpts) -> DemoResult<Self>
  where
    B: Backend,
  {
    let pipeline = build_pipeline(device, VS, PS)?;

    let vertex_buffer = device.create_vertex_buffer_from(&VERTICES)?;
    let vertex_description =
      device.create_vertex_description(&[VertexElement::new(0, VertexElementType::Float, 3)])?;
    let vertex_array = device.create_vertex_array(&[vertex_buffer], &[vertex_description])?;

    Ok(LocalExample {
      pipeline,
      vertex_buffer,
      vertex_description,
      vertex_array,
    })
  }

  fn render_frame<B>(&mut self, device: &mut Device<B>, _: &Viewport) -> DemoResult<()>
  where
    B: Backend,
  {
    let [r, g, b, a] = CLEAR_COLOR;
    device.clear(&ClearValues::color(r, g, b, a));

    device.set_pipeline(Some(self.pipeline))?;
    device.set_vertex_array(Some(self.vertex_array))?;
    device.draw_triangles(0, VERTICES.len() as u32);

    Ok(())
  }

  fn teardown<B>(self, device: &mut Device<B>) -> DemoResult<()>
  where
    B: Backend,
  {
    device.set_vertex_array(None)?;
    device.set_pipeline(None)?;

    device.destroy_vertex_array(self.vertex_array)?;
    device.destroy_vertex_description(self.vertex_description)?;
    device.destroy_vertex_buffer(self.vertex_buffer)?;
    device.destroy_pipeline(self.pipeline)?;

    Ok(())
  }
}
