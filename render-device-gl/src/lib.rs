//! OpenGL backend.
//!
//! This crate exports an [OpenGL](https://www.khronos.org/opengl/) 4.1 core backend for
//! [render-device](../render_device/index.html). The backend type is [`GL41`]; wrap it into a
//! `render_device::Device` to use it.
//!
//! OpenGL function pointers must be loaded (with [`gl::load_with`]) and a context must be current
//! on the calling thread before [`GL41::new`] is called.

#![deny(missing_docs)]

pub mod gl41;

pub use gl41::GL41;
