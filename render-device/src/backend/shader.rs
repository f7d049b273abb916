//! Shader backend.
//!
//! Shader stages are compiled from source, linked by pairs into programs and programs expose
//! parameters looked up by name.

use crate::shader::{CreationError, ParamValue, ShaderStage};

/// Shader backend.
///
/// Releasing a stage or a program is done by dropping its representation.
pub unsafe trait Shader {
  /// Backend representation of a compiled shader stage.
  type StageRepr;

  /// Backend representation of a linked program.
  type ProgramRepr;

  /// Backend representation of a parameter location within a program.
  type ParamRepr: Copy;

  /// Compile a shader stage.
  ///
  /// On failure, the error carries the compiler diagnostic and nothing is left allocated.
  unsafe fn new_stage(
    &mut self,
    stage: ShaderStage,
    src: &str,
  ) -> Result<Self::StageRepr, CreationError>;

  /// Link a vertex and a pixel stage into a program.
  ///
  /// The program must not depend on the stages after this call returns.
  unsafe fn new_program(
    &mut self,
    vertex: &Self::StageRepr,
    pixel: &Self::StageRepr,
  ) -> Result<Self::ProgramRepr, CreationError>;

  /// Make a program the active one. [`None`] deactivates the current program.
  unsafe fn use_program(&mut self, program: Option<&Self::ProgramRepr>);

  /// Look up a parameter by name.
  ///
  /// Returns [`None`] if the program has no active parameter with that name.
  unsafe fn param_location(
    &mut self,
    program: &Self::ProgramRepr,
    name: &str,
  ) -> Option<Self::ParamRepr>;

  /// Write a value to a parameter of the active program.
  unsafe fn set_param(&mut self, param: Self::ParamRepr, value: ParamValue);
}
