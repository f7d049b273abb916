use gl::types::*;
use log::debug;
use render_device::backend::shader::Shader;
use render_device::shader::{CreationError, ParamValue, ShaderStage};
use std::ffi::CString;
use std::ptr::{null, null_mut};

use crate::gl41::{gl_int, GL41};

/// Compiled shader stage.
#[derive(Debug)]
pub struct Stage {
  handle: GLuint,
  stage: ShaderStage,
}

impl Drop for Stage {
  fn drop(&mut self) {
    unsafe {
      gl::DeleteShader(self.handle);
    }
  }
}

/// Linked shader program.
#[derive(Debug)]
pub struct Program {
  pub(crate) handle: GLuint,
}

impl Drop for Program {
  fn drop(&mut self) {
    unsafe {
      gl::DeleteProgram(self.handle);
    }
  }
}

impl Program {
  fn link(&self) -> Result<(), CreationError> {
    let handle = self.handle;

    unsafe {
      gl::LinkProgram(handle);

      let mut linked: GLint = gl::FALSE.into();
      gl::GetProgramiv(handle, gl::LINK_STATUS, &mut linked);

      if linked == gl::TRUE.into() {
        Ok(())
      } else {
        let mut log_len: GLint = 0;
        gl::GetProgramiv(handle, gl::INFO_LOG_LENGTH, &mut log_len);

        let mut log: Vec<u8> = vec![0; log_len.max(0) as usize];
        gl::GetProgramInfoLog(handle, log_len, null_mut(), log.as_mut_ptr() as *mut GLchar);

        Err(CreationError::link_failed(info_log(log)))
      }
    }
  }
}

fn info_log(mut log: Vec<u8>) -> String {
  while log.last() == Some(&0) {
    log.pop();
  }

  String::from_utf8_lossy(&log).into_owned()
}

fn opengl_shader_type(stage: ShaderStage) -> GLenum {
  match stage {
    ShaderStage::Vertex => gl::VERTEX_SHADER,
    ShaderStage::Pixel => gl::FRAGMENT_SHADER,
  }
}

unsafe impl Shader for GL41 {
  type StageRepr = Stage;

  type ProgramRepr = Program;

  type ParamRepr = GLint;

  unsafe fn new_stage(
    &mut self,
    stage: ShaderStage,
    src: &str,
  ) -> Result<Self::StageRepr, CreationError> {
    let c_src = CString::new(src.as_bytes())
      .map_err(|_| CreationError::compilation_failed(stage, "source contains a nul byte"))?;

    let handle = gl::CreateShader(opengl_shader_type(stage));

    if handle == 0 {
      return Err(CreationError::compilation_failed(
        stage,
        "unable to create shader stage",
      ));
    }

    gl::ShaderSource(handle, 1, [c_src.as_ptr()].as_ptr(), null());
    gl::CompileShader(handle);

    let mut compiled: GLint = gl::FALSE.into();
    gl::GetShaderiv(handle, gl::COMPILE_STATUS, &mut compiled);

    if compiled == gl::TRUE.into() {
      debug!("compiled {} {}", stage, handle);
      Ok(Stage { handle, stage })
    } else {
      let mut log_len: GLint = 0;
      gl::GetShaderiv(handle, gl::INFO_LOG_LENGTH, &mut log_len);

      let mut log: Vec<u8> = vec![0; log_len.max(0) as usize];
      gl::GetShaderInfoLog(handle, log_len, null_mut(), log.as_mut_ptr() as *mut GLchar);

      gl::DeleteShader(handle);

      Err(CreationError::compilation_failed(stage, info_log(log)))
    }
  }

  unsafe fn new_program(
    &mut self,
    vertex: &Self::StageRepr,
    pixel: &Self::StageRepr,
  ) -> Result<Self::ProgramRepr, CreationError> {
    debug_assert_eq!(vertex.stage, ShaderStage::Vertex);
    debug_assert_eq!(pixel.stage, ShaderStage::Pixel);

    let program = Program {
      handle: gl::CreateProgram(),
    };

    gl::AttachShader(program.handle, vertex.handle);
    gl::AttachShader(program.handle, pixel.handle);

    // dropping `program` on failure deletes it
    program.link()?;

    gl::DetachShader(program.handle, vertex.handle);
    gl::DetachShader(program.handle, pixel.handle);

    Ok(program)
  }

  unsafe fn use_program(&mut self, program: Option<&Self::ProgramRepr>) {
    gl::UseProgram(program.map_or(0, |p| p.handle));
  }

  unsafe fn param_location(
    &mut self,
    program: &Self::ProgramRepr,
    name: &str,
  ) -> Option<Self::ParamRepr> {
    let c_name = CString::new(name.as_bytes()).ok()?;
    let location = gl::GetUniformLocation(program.handle, c_name.as_ptr() as *const GLchar);

    // ensure the location smells good
    if location < 0 {
      None
    } else {
      Some(location)
    }
  }

  unsafe fn set_param(&mut self, param: Self::ParamRepr, value: ParamValue) {
    let count = gl_int(value.count());

    match value {
      ParamValue::Int(x) => gl::Uniform1i(param, x),
      ParamValue::Float(x) => gl::Uniform1f(param, x),
      ParamValue::Mat4(m) => {
        gl::UniformMatrix4fv(param, count, gl::FALSE, m.as_ptr() as *const GLfloat)
      }
      ParamValue::IntArray(xs) => gl::Uniform1iv(param, count, xs.as_ptr()),
      ParamValue::FloatArray(xs) => gl::Uniform1fv(param, count, xs.as_ptr()),
      ParamValue::Mat4Array(ms) => {
        gl::UniformMatrix4fv(param, count, gl::FALSE, ms.as_ptr() as *const GLfloat)
      }
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn stage_types() {
    assert_eq!(opengl_shader_type(ShaderStage::Vertex), gl::VERTEX_SHADER);
    assert_eq!(opengl_shader_type(ShaderStage::Pixel), gl::FRAGMENT_SHADER);
  }

  #[test]
  fn info_log_strips_nul() {
    assert_eq!(info_log(b"0:1: error\0".to_vec()), "0:1: error");
    assert_eq!(info_log(Vec::new()), "");
  }
}
