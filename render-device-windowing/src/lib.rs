//! # render-device windowing
//!
//! This is the base, abstract crate for windowing common types and functions in render-device. The
//! `render-device` crate abstracts over a graphics API, but it doesn’t give you a way to create a
//! context to draw into. Creating and managing contexts is tightly related to the platform layer
//! an application picks, so that part lives in separate crates (`render-device-glfw`, for
//! instance), which all implement the [`Surface`] trait defined here.
//!
//! # What’s included
//!
//! - [`WindowDim`]: dimension of a window and its mode (windowed or fullscreen).
//! - [`WindowOpt`]: hints to customize the window integration, such as the cursor mode or the
//!   requested context version.
//! - [`Trackball`]: an arcball rotation driven by mouse drags, along with the perspective
//!   projection matching the framebuffer.
//! - [`Surface`]: what an application needs from a platform: the device, event polling,
//!   presentation and the viewport matrices.

#![deny(missing_docs)]

mod trackball;

pub use crate::trackball::{Trackball, Viewport};

use render_device::backend::Backend;
use render_device::Device;

/// Dimension metrics.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum WindowDim {
  /// Windowed mode.
  Windowed {
    /// Width of the window.
    width: u32,
    /// Height of the window.
    height: u32,
  },
  /// Fullscreen mode (adapt to your screen).
  Fullscreen,
}

/// Cursor mode.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum CursorMode {
  /// The cursor is always visible.
  Visible,
  /// The cursor exists yet has been disabled.
  Invisible,
  /// The cursor is disabled.
  Disabled,
}

/// Different window options.
///
/// Feel free to look at the different methods available to tweak the options. You may want to start
/// with `default()` though.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct WindowOpt {
  cursor_mode: CursorMode,
  num_samples: Option<u32>,
  context_version: (u32, u32),
}

impl Default for WindowOpt {
  /// Defaults:
  ///
  /// - `cursor_mode` set to `CursorMode::Visible`.
  /// - `num_samples` set to `None`.
  /// - `context_version` set to `(4, 1)`.
  fn default() -> Self {
    WindowOpt {
      cursor_mode: CursorMode::Visible,
      num_samples: None,
      context_version: (4, 1),
    }
  }
}

impl WindowOpt {
  /// Hide, unhide or disable the cursor. Default to `CursorMode::Visible`.
  #[inline]
  pub fn set_cursor_mode(self, mode: CursorMode) -> Self {
    WindowOpt {
      cursor_mode: mode,
      ..self
    }
  }

  /// Get the cursor mode.
  #[inline]
  pub fn cursor_mode(&self) -> CursorMode {
    self.cursor_mode
  }

  /// Set the number of samples to use for multisampling.
  ///
  /// Pass `None` to disable multisampling.
  #[inline]
  pub fn set_num_samples<S>(self, samples: S) -> Self
  where
    S: Into<Option<u32>>,
  {
    WindowOpt {
      num_samples: samples.into(),
      ..self
    }
  }

  /// Get the number of samples to use in multisampling, if any.
  #[inline]
  pub fn num_samples(&self) -> Option<u32> {
    self.num_samples
  }

  /// Request a context version, as `(major, minor)`. The context is always a core, forward
  /// compatible one.
  #[inline]
  pub fn set_context_version(self, major: u32, minor: u32) -> Self {
    WindowOpt {
      context_version: (major, minor),
      ..self
    }
  }

  /// Get the requested context version.
  #[inline]
  pub fn context_version(&self) -> (u32, u32) {
    self.context_version
  }
}

/// Rendering surface.
///
/// A surface owns a window, the drawing context attached to it and the [`Device`] driving that
/// context.
pub trait Surface: Sized {
  /// Backend of the device.
  type Backend: Backend;

  /// Type of surface errors.
  type Error;

  /// Create a surface, its drawing context and the device using it.
  fn new(title: &str, dim: WindowDim, opt: WindowOpt) -> Result<Self, Self::Error>;

  /// Access the device.
  fn device(&mut self) -> &mut Device<Self::Backend>;

  /// Process pending events.
  ///
  /// Returns `false` once the surface has been asked to close.
  fn poll(&mut self) -> bool;

  /// Show what has been drawn since the last call.
  fn present(&mut self);

  /// Size of the surface’s framebuffer.
  fn size(&self) -> [u32; 2];

  /// Width of the surface’s framebuffer.
  ///
  /// # Defaults
  ///
  /// Defaults to `.size()[0]`.
  fn width(&self) -> u32 {
    self.size()[0]
  }

  /// Height of the surface’s framebuffer.
  ///
  /// # Defaults
  ///
  /// Defaults to `.size()[1]`.
  fn height(&self) -> u32 {
    self.size()[1]
  }

  /// Current model and projection matrices.
  fn viewport(&self) -> Viewport;
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn default_window_opt() {
    let opt = WindowOpt::default();
    assert_eq!(opt.cursor_mode(), CursorMode::Visible);
    assert_eq!(opt.num_samples(), None);
    assert_eq!(opt.context_version(), (4, 1));
  }

  #[test]
  fn window_opt_builder() {
    let opt = WindowOpt::default()
      .set_cursor_mode(CursorMode::Disabled)
      .set_num_samples(4)
      .set_context_version(3, 3);

    assert_eq!(opt.cursor_mode(), CursorMode::Disabled);
    assert_eq!(opt.num_samples(), Some(4));
    assert_eq!(opt.context_version(), (3, 3));
  }
}
