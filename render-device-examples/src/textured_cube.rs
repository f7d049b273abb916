//! An indexed, textured cube rotated with the mouse.
//!
//! The texture is either a generated checkerboard or the image passed with `--texture`. It’s bound
//! to the first texture slot, which the `uTextureSampler` parameter is pointed at once and for all.

use log::info;
use render_device::backend::Backend;
use render_device::command::ClearValues;
use render_device::handle::{
  IndexBuffer, Pipeline, Texture2D, VertexArray, VertexBuffer, VertexDescription,
};
use render_device::texture::BYTES_PER_TEXEL;
use render_device::vertex::{VertexElement, VertexElementType};
use render_device::Device;
use render_device_windowing::Viewport;
use std::{mem, path::Path};

use crate::shared::{build_pipeline, param, Transform, CLEAR_COLOR, CUBE_INDICES, CUBE_POSITIONS};
use crate::{CLIOpts, DemoResult, Example};

const VS: &str = "#version 410 core
uniform mat4 uModel;
uniform mat4 uView;
uniform mat4 uProjection;
layout (location = 0) in vec3 aPos;
layout (location = 1) in vec2 aTexCoord;
out vec2 vTexCoord;
void main() {
  gl_Position = uProjection * uView * uModel * vec4(aPos, 1.);
  vTexCoord = aTexCoord;
}";

const PS: &str = "#version 410 core
uniform sampler2D uTextureSampler;
in vec2 vTexCoord;
out vec4 FragColor;
void main() {
  FragColor = vec4(texture(uTextureSampler, vTexCoord).rgb, 1.);
}";

const TEXTURE_SLOT: u32 = 0;

// per face corner, in the order of the cube positions
const FACE_TEX_COORDS: [[f32; 2]; 4] = [[0., 1.], [1., 1.], [1., 0.], [0., 0.]];

type Vertex = [f32; 5];

fn vertices() -> Vec<Vertex> {
  CUBE_POSITIONS
    .iter()
    .enumerate()
    .map(|(i, [x, y, z])| {
      let [u, v] = FACE_TEX_COORDS[i % 4];
      [*x, *y, *z, u, v]
    })
    .collect()
}

/// RGBA8 texels of a texture.
struct Texels {
  width: u32,
  height: u32,
  data: Vec<u8>,
}

/// Black and white checkerboard of `size × size` texels, made of `cell × cell` squares.
fn checkerboard(size: u32, cell: u32) -> Texels {
  let cell = cell.max(1);
  let mut data = Vec::with_capacity((size * size) as usize * BYTES_PER_TEXEL);

  for y in 0..size {
    for x in 0..size {
      let v = if (x / cell + y / cell) % 2 == 0 { 255 } else { 32 };
      data.extend_from_slice(&[v, v, v, 255]);
    }
  }

  Texels {
    width: size,
    height: size,
    data,
  }
}

fn load_image(path: &Path) -> DemoResult<Texels> {
  // images are stored top to bottom, textures bottom to top
  let img = image::open(path)?.flipv().to_rgba8();
  let (width, height) = img.dimensions();

  info!("loaded {} ({}×{})", path.display(), width, height);

  Ok(Texels {
    width,
    height,
    data: img.into_raw(),
  })
}

pub struct LocalExample {
  pipeline: Pipeline,
  transform: Transform,
  vertex_buffer: VertexBuffer,
  vertex_description: VertexDescription,
  vertex_array: VertexArray,
  index_buffer: IndexBuffer,
  texture: Texture2D,
}

impl Example for LocalExample {
  fn bootstrap<B>(device: &mut Device<B>, cli_opts: &CLIOpts) -> DemoResult<Self>
  where
    B: Backend,
  {
    let texels = match cli_opts.texture {
      Some(ref path) => load_image(path)?,
      None => checkerboard(256, 32),
    };

    let pipeline = build_pipeline(device, VS, PS)?;
    let transform = Transform::new(device, pipeline)?;

    // sampler2D parameters take the texture slot
    if let Some(sampler) = param(device, pipeline, "uTextureSampler")? {
      device.set_param_int(sampler, TEXTURE_SLOT as i32)?;
    }

    let stride = mem::size_of::<Vertex>();
    let vertex_buffer = device.create_vertex_buffer_from(vertices().as_slice())?;
    let vertex_description = device.create_vertex_description(&[
      VertexElement::new(0, VertexElementType::Float, 3).with_stride(stride),
      VertexElement::new(1, VertexElementType::Float, 2)
        .with_stride(stride)
        .with_offset(3 * mem::size_of::<f32>()),
    ])?;
    let vertex_array = device.create_vertex_array(&[vertex_buffer], &[vertex_description])?;
    let index_buffer = device.create_index_buffer_from(&CUBE_INDICES)?;

    let texture =
      device.create_texture_2d(texels.width, texels.height, Some(texels.data.as_slice()))?;

    Ok(LocalExample {
      pipeline,
      transform,
      vertex_buffer,
      vertex_description,
      vertex_array,
      index_buffer,
      texture,
    })
  }

  fn render_frame<B>(&mut self, device: &mut Device<B>, viewport: &Viewport) -> DemoResult<()>
  where
    B: Backend,
  {
    self.transform.upload(device, viewport)?;

    let [r, g, b, a] = CLEAR_COLOR;
    device.clear(&ClearValues::color(r, g, b, a));

    device.set_texture_2d(TEXTURE_SLOT, Some(self.texture))?;
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
    device.set_texture_2d(TEXTURE_SLOT, None)?;
    device.set_vertex_array(None)?;
    device.set_pipeline(None)?;

    device.destroy_texture_2d(self.texture)?;
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
  use render_device::texture::texel_bytes;

  #[test]
  fn checkerboard_texels() {
    let board = checkerboard(4, 2);
    assert_eq!(Some(board.data.len()), texel_bytes(board.width, board.height));

    let texel = |x: usize, y: usize| {
      let i = (y * 4 + x) * BYTES_PER_TEXEL;
      board.data[i]
    };

    assert_eq!(texel(0, 0), 255);
    assert_eq!(texel(1, 1), 255);
    assert_eq!(texel(2, 0), 32);
    assert_eq!(texel(0, 2), 32);
    assert_eq!(texel(2, 2), 255);
  }

  #[test]
  fn every_face_is_fully_mapped() {
    for face in vertices().chunks(4) {
      let uvs: Vec<_> = face.iter().map(|v| [v[3], v[4]]).collect();
      assert_eq!(uvs, FACE_TEX_COORDS.to_vec());
    }
  }
}
