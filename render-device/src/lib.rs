//! # A small, backend-agnostic render device
//!
//! This crate is the “core” of a tiny rendering abstraction: it describes the GPU resources an
//! application can create, how they are bound before drawing, and which commands can be issued.
//! It doesn’t talk to any graphics API by itself. Instead, a _backend type_ (by convention the
//! type variable `B`) implements the traits found in [`backend`], and a [`Device<B>`] drives that
//! backend on your behalf.
//!
//! # What’s included?
//!
//! - **Shaders and pipelines**: vertex and pixel shaders are compiled from source text and linked
//!   into a [`Pipeline`]. Named parameters (uniforms) are looked up once and cached per pipeline.
//! - **Buffers**: vertex and index buffers are plain byte ranges uploaded at creation time.
//! - **Vertex layouts**: a [`VertexDescription`] interprets the bytes of a vertex buffer and a
//!   [`VertexArray`] gathers several buffers and their descriptions into something drawable.
//! - **Textures**: RGBA8 2D textures bound to texture slots.
//! - **Fixed-function states**: [`RasterState`] and [`DepthStencilState`] objects. The device only
//!   talks to the backend when the requested state differs from the bound one.
//! - **Commands**: clearing and drawing triangle lists, indexed or not.
//!
//! # Handles
//!
//! Every resource lives in an arena owned by the [`Device`] and is referred to by a small `Copy`
//! handle made of a slot index and a generation. Destroying a resource bumps the generation of its
//! slot, so a handle that outlived its resource is reported as
//! [`DeviceError::StaleHandle`] instead of silently pointing at something else.
//!
//! # Threads
//!
//! A device is bound to the thread owning the backend’s drawing context. Backends are expected to
//! be `!Send` and `!Sync`; nothing in this crate locks or queues anything.
//!
//! [`Device<B>`]: crate::device::Device
//! [`Device`]: crate::device::Device
//! [`Pipeline`]: crate::handle::Pipeline
//! [`VertexDescription`]: crate::handle::VertexDescription
//! [`VertexArray`]: crate::handle::VertexArray
//! [`RasterState`]: crate::handle::RasterState
//! [`DepthStencilState`]: crate::handle::DepthStencilState
//! [`DeviceError::StaleHandle`]: crate::error::DeviceError::StaleHandle

#![deny(missing_docs)]

pub mod backend;
pub mod command;
pub mod depth_stencil;
pub mod device;
pub mod error;
pub mod handle;
pub mod raster;
pub mod shader;
pub mod texture;
pub mod vertex;

#[cfg(test)]
mod spy;

pub use crate::device::Device;
pub use crate::error::{DeviceError, ResourceKind};
