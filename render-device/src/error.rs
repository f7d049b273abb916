//! Device errors.

use std::error;
use std::fmt;

use crate::shader::CreationError;
use crate::vertex::InvalidVertexElement;

/// Kind of resource a handle refers to.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ResourceKind {
  /// Vertex shader.
  VertexShader,
  /// Pixel shader.
  PixelShader,
  /// Pipeline.
  Pipeline,
  /// Pipeline parameter.
  PipelineParam,
  /// Vertex buffer.
  VertexBuffer,
  /// Index buffer.
  IndexBuffer,
  /// Vertex description.
  VertexDescription,
  /// Vertex array.
  VertexArray,
  /// 2D texture.
  Texture2D,
  /// Raster state.
  RasterState,
  /// Depth-stencil state.
  DepthStencilState,
}

impl fmt::Display for ResourceKind {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    let name = match *self {
      ResourceKind::VertexShader => "vertex shader",
      ResourceKind::PixelShader => "pixel shader",
      ResourceKind::Pipeline => "pipeline",
      ResourceKind::PipelineParam => "pipeline parameter",
      ResourceKind::VertexBuffer => "vertex buffer",
      ResourceKind::IndexBuffer => "index buffer",
      ResourceKind::VertexDescription => "vertex description",
      ResourceKind::VertexArray => "vertex array",
      ResourceKind::Texture2D => "2D texture",
      ResourceKind::RasterState => "raster state",
      ResourceKind::DepthStencilState => "depth-stencil state",
    };

    f.write_str(name)
  }
}

/// Errors a [`Device`] can report.
///
/// [`Device`]: crate::device::Device
#[non_exhaustive]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DeviceError {
  /// A shader stage failed to compile or a pipeline failed to link.
  Creation(CreationError),
  /// The handle refers to a destroyed resource.
  StaleHandle(ResourceKind),
  /// The handle refers to a default state, which lives as long as the device.
  DefaultState(ResourceKind),
  /// A vertex array was requested with a different number of buffers and descriptions.
  MismatchedVertexArrayInputs {
    /// Number of buffers.
    buffers: usize,
    /// Number of descriptions.
    descriptions: usize,
  },
  /// A vertex element has a component count out of `1..=4`.
  InvalidVertexElement {
    /// Attribute location of the element.
    index: u32,
    /// Requested component count.
    size: u8,
  },
  /// Initial buffer contents don’t match the declared buffer size.
  BufferSizeMismatch {
    /// Declared size, in bytes.
    size: usize,
    /// Length of the supplied data, in bytes.
    data_len: usize,
  },
  /// A buffer is larger than `isize::MAX` bytes.
  BufferTooLarge {
    /// Requested size, in bytes.
    size: usize,
  },
  /// Texel data doesn’t match the texture dimensions.
  TexelSizeMismatch {
    /// Expected number of bytes.
    expected: usize,
    /// Supplied number of bytes.
    actual: usize,
  },
  /// Texture dimensions are zero or too large.
  InvalidTextureSize {
    /// Requested width.
    width: u32,
    /// Requested height.
    height: u32,
  },
}

impl DeviceError {
  /// The handle refers to a destroyed resource.
  pub fn stale(kind: ResourceKind) -> Self {
    DeviceError::StaleHandle(kind)
  }
}

impl fmt::Display for DeviceError {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    match *self {
      DeviceError::Creation(ref e) => write!(f, "cannot create resource: {}", e),

      DeviceError::StaleHandle(kind) => write!(f, "stale {} handle", kind),

      DeviceError::DefaultState(kind) => write!(f, "the default {} cannot be destroyed", kind),

      DeviceError::MismatchedVertexArrayInputs {
        buffers,
        descriptions,
      } => write!(
        f,
        "vertex array needs as many buffers as descriptions (got {} buffers, {} descriptions)",
        buffers, descriptions
      ),

      DeviceError::InvalidVertexElement { index, size } => write!(
        f,
        "vertex element at location {} has {} components (expected 1 to 4)",
        index, size
      ),

      DeviceError::BufferSizeMismatch { size, data_len } => write!(
        f,
        "buffer of {} bytes cannot be initialized with {} bytes",
        size, data_len
      ),

      DeviceError::BufferTooLarge { size } => write!(f, "buffer of {} bytes is too large", size),

      DeviceError::TexelSizeMismatch { expected, actual } => write!(
        f,
        "texel data mismatch: expected {} bytes, got {}",
        expected, actual
      ),

      DeviceError::InvalidTextureSize { width, height } => {
        write!(f, "invalid texture size {}×{}", width, height)
      }
    }
  }
}

impl error::Error for DeviceError {
  fn source(&self) -> Option<&(dyn error::Error + 'static)> {
    match self {
      DeviceError::Creation(e) => Some(e),
      _ => None,
    }
  }
}

impl From<CreationError> for DeviceError {
  fn from(e: CreationError) -> Self {
    DeviceError::Creation(e)
  }
}

impl From<InvalidVertexElement> for DeviceError {
  fn from(e: InvalidVertexElement) -> Self {
    DeviceError::InvalidVertexElement {
      index: e.index,
      size: e.size,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::shader::ShaderStage;
  use std::error::Error as _;

  #[test]
  fn creation_error_is_source() {
    let e = DeviceError::from(CreationError::compilation_failed(ShaderStage::Vertex, "oops"));
    assert!(e.source().is_some());
    assert_eq!(
      e.to_string(),
      "cannot create resource: vertex shader compilation failed: oops"
    );
  }

  #[test]
  fn stale_handle_display() {
    let e = DeviceError::stale(ResourceKind::Texture2D);
    assert_eq!(e.to_string(), "stale 2D texture handle");
    assert!(e.source().is_none());
  }

  #[test]
  fn default_state_display() {
    let e = DeviceError::DefaultState(ResourceKind::RasterState);
    assert_eq!(e.to_string(), "the default raster state cannot be destroyed");
  }
}
