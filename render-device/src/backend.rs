//! Backend interfacing.
//!
//! A backend is a type implementing every trait of this module. Each trait covers one concern
//! (shaders, buffers, vertex arrays, textures, fixed-function states, commands) and exposes the
//! backend’s own representation of the objects it creates through associated types. The
//! [`Device`] stores those representations in its arenas and never looks inside them.
//!
//! All traits are `unsafe` to implement and most of their methods are `unsafe` to call: they
//! assume the backend’s drawing context is current on the calling thread and that the
//! representations passed in were created by the same backend value.
//!
//! [`Device`]: crate::device::Device

pub mod buffer;
pub mod command;
pub mod shader;
pub mod state;
pub mod texture;
pub mod vertex_array;

use self::buffer::Buffer;
use self::command::Command;
use self::shader::Shader;
use self::state::State;
use self::texture::Texture;
use self::vertex_array::VertexArray;

/// Full backend.
///
/// Automatically implemented for any type implementing all the backend traits.
pub trait Backend: Shader + Buffer + VertexArray + Texture + State + Command {}

impl<B> Backend for B where B: ?Sized + Shader + Buffer + VertexArray + Texture + State + Command {}
