//! [GLFW](https://crates.io/crates/glfw) surface for render-device.
//!
//! [`GlfwSurface`] opens a window with an OpenGL core context, loads the OpenGL functions and wraps
//! a [`GL41`] backend into a [`Device`]. It also drives a [`Trackball`] from mouse events, so that
//! applications get their viewport matrices for free.

#![deny(missing_docs)]

use glfw::{
  Action, Context as _, CursorMode as GlfwCursorMode, Glfw, InitError, Key, MouseButton, Window,
  WindowEvent, WindowMode,
};
use log::{debug, info};
use render_device::Device;
pub use render_device_gl::gl41::StateQueryError;
use render_device_gl::GL41;
use render_device_windowing::{CursorMode, Surface, Trackball, Viewport, WindowDim, WindowOpt};
use std::{error, fmt, os::raw::c_void, sync::mpsc::Receiver};

/// Error that can be risen while creating a surface.
#[non_exhaustive]
#[derive(Debug)]
pub enum GlfwSurfaceError {
  /// Initialization of GLFW went wrong.
  ///
  /// This variant exposes a **glfw** error for further information about what went wrong.
  InitError(InitError),

  /// The window (and its context) couldn’t be created.
  WindowCreationFailed,

  /// Fullscreen was requested but there is no primary monitor.
  NoPrimaryMonitor,

  /// Fullscreen was requested but the primary monitor has no video mode.
  NoVideoMode,

  /// The graphics state is not available.
  ///
  /// This error is generated when the initialization code is called on a thread on which the
  /// graphics state has already been acquired.
  GraphicsStateError(StateQueryError),
}

impl fmt::Display for GlfwSurfaceError {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    match *self {
      GlfwSurfaceError::InitError(ref e) => write!(f, "initialization error: {}", e),
      GlfwSurfaceError::WindowCreationFailed => f.write_str("failed to create window"),
      GlfwSurfaceError::NoPrimaryMonitor => f.write_str("no primary monitor"),
      GlfwSurfaceError::NoVideoMode => f.write_str("no primary monitor video mode"),
      GlfwSurfaceError::GraphicsStateError(ref e) => {
        write!(f, "failed to get graphics state: {}", e)
      }
    }
  }
}

impl error::Error for GlfwSurfaceError {
  fn source(&self) -> Option<&(dyn error::Error + 'static)> {
    match self {
      GlfwSurfaceError::InitError(e) => Some(e),
      GlfwSurfaceError::GraphicsStateError(e) => Some(e),
      _ => None,
    }
  }
}

impl From<InitError> for GlfwSurfaceError {
  fn from(e: InitError) -> Self {
    GlfwSurfaceError::InitError(e)
  }
}

impl From<StateQueryError> for GlfwSurfaceError {
  fn from(e: StateQueryError) -> Self {
    GlfwSurfaceError::GraphicsStateError(e)
  }
}

/// GLFW surface.
///
/// Owns the window, its OpenGL context and the device driving it. Dropping the surface releases
/// every device resource before the context goes away.
pub struct GlfwSurface {
  // must stay first: GL objects are deleted while the context is alive
  device: Device<GL41>,
  window: Window,
  events_rx: Receiver<(f64, WindowEvent)>,
  trackball: Trackball,
}

impl fmt::Debug for GlfwSurface {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    f.debug_struct("GlfwSurface")
      .field("size", &self.size())
      .field("trackball", &self.trackball)
      .finish()
  }
}

impl GlfwSurface {
  /// Underlying GLFW window.
  pub fn window(&self) -> &Window {
    &self.window
  }

  /// Underlying GLFW window, mutably.
  pub fn window_mut(&mut self) -> &mut Window {
    &mut self.window
  }

  fn handle_event(&mut self, event: WindowEvent) {
    match adapt_event(event) {
      Some(SurfaceAction::Close) => self.window.set_should_close(true),

      Some(SurfaceAction::Resized { width, height }) => {
        debug!("framebuffer resized to {}×{}", width, height);
        unsafe {
          gl::Viewport(0, 0, width as _, height as _);
        }
        self.trackball.set_bounds(width, height);
      }

      Some(SurfaceAction::BeginDrag) => self.trackball.begin_drag(),
      Some(SurfaceAction::EndDrag) => self.trackball.end_drag(),
      Some(SurfaceAction::ResetRotation) => self.trackball.reset(),
      Some(SurfaceAction::CursorMoved { x, y }) => self.trackball.cursor_moved(x, y),

      None => (),
    }
  }
}

impl Surface for GlfwSurface {
  type Backend = GL41;

  type Error = GlfwSurfaceError;

  fn new(title: &str, dim: WindowDim, opt: WindowOpt) -> Result<Self, Self::Error> {
    let mut glfw = glfw::init(glfw::LOG_ERRORS)?;

    // OpenGL hints
    let (major, minor) = opt.context_version();
    glfw.window_hint(glfw::WindowHint::ContextVersion(major, minor));
    glfw.window_hint(glfw::WindowHint::OpenGlProfile(
      glfw::OpenGlProfileHint::Core,
    ));
    glfw.window_hint(glfw::WindowHint::OpenGlForwardCompat(true));
    glfw.window_hint(glfw::WindowHint::Samples(opt.num_samples()));

    let (mut window, events_rx) = create_window(&mut glfw, title, dim)?;

    window.make_current();

    match opt.cursor_mode() {
      CursorMode::Visible => window.set_cursor_mode(GlfwCursorMode::Normal),
      CursorMode::Invisible => window.set_cursor_mode(GlfwCursorMode::Hidden),
      CursorMode::Disabled => window.set_cursor_mode(GlfwCursorMode::Disabled),
    }

    window.set_framebuffer_size_polling(true);
    window.set_key_polling(true);
    window.set_mouse_button_polling(true);
    window.set_cursor_pos_polling(true);

    // init OpenGL
    gl::load_with(|s| window.get_proc_address(s) as *const c_void);

    let device = Device::new(GL41::new()?);

    let (w, h) = window.get_framebuffer_size();
    let (width, height) = (w.max(0) as u32, h.max(0) as u32);

    unsafe {
      gl::Viewport(0, 0, w, h);
    }

    info!("created surface “{}” ({}×{}, {:?})", title, width, height, dim);

    Ok(GlfwSurface {
      device,
      window,
      events_rx,
      trackball: Trackball::new(width, height),
    })
  }

  fn device(&mut self) -> &mut Device<Self::Backend> {
    &mut self.device
  }

  fn poll(&mut self) -> bool {
    self.window.glfw.poll_events();

    let events: Vec<_> = glfw::flush_messages(&self.events_rx)
      .map(|(_, event)| event)
      .collect();

    for event in events {
      self.handle_event(event);
    }

    !self.window.should_close()
  }

  fn present(&mut self) {
    self.window.swap_buffers();
  }

  fn size(&self) -> [u32; 2] {
    let (w, h) = self.window.get_framebuffer_size();
    [w.max(0) as u32, h.max(0) as u32]
  }

  fn viewport(&self) -> Viewport {
    self.trackball.viewport()
  }
}

fn create_window(
  glfw: &mut Glfw,
  title: &str,
  dim: WindowDim,
) -> Result<(Window, Receiver<(f64, WindowEvent)>), GlfwSurfaceError> {
  match dim {
    WindowDim::Windowed { width, height } => glfw
      .create_window(width, height, title, WindowMode::Windowed)
      .ok_or(GlfwSurfaceError::WindowCreationFailed),

    WindowDim::Fullscreen => glfw.with_primary_monitor(|glfw, monitor| {
      let monitor = monitor.ok_or(GlfwSurfaceError::NoPrimaryMonitor)?;
      let mode = monitor
        .get_video_mode()
        .ok_or(GlfwSurfaceError::NoVideoMode)?;

      glfw
        .create_window(mode.width, mode.height, title, WindowMode::FullScreen(&*monitor))
        .ok_or(GlfwSurfaceError::WindowCreationFailed)
    }),
  }
}

/// What a window event means to the surface.
#[derive(Clone, Copy, Debug, PartialEq)]
enum SurfaceAction {
  Close,
  Resized { width: u32, height: u32 },
  BeginDrag,
  EndDrag,
  ResetRotation,
  CursorMoved { x: f32, y: f32 },
}

fn adapt_event(event: WindowEvent) -> Option<SurfaceAction> {
  match event {
    WindowEvent::Key(Key::Escape, _, Action::Press, _) => Some(SurfaceAction::Close),

    WindowEvent::FramebufferSize(width, height) => Some(SurfaceAction::Resized {
      width: width.max(0) as u32,
      height: height.max(0) as u32,
    }),

    WindowEvent::MouseButton(MouseButton::Button1, action, _) => match action {
      Action::Press => Some(SurfaceAction::BeginDrag),
      Action::Release => Some(SurfaceAction::EndDrag),
      _ => None,
    },

    WindowEvent::MouseButton(MouseButton::Button2, Action::Press, _) => {
      Some(SurfaceAction::ResetRotation)
    }

    WindowEvent::CursorPos(x, y) => Some(SurfaceAction::CursorMoved {
      x: x as f32,
      y: y as f32,
    }),

    _ => None,
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use glfw::Modifiers;

  #[test]
  fn escape_press_closes() {
    let press = WindowEvent::Key(Key::Escape, 9, Action::Press, Modifiers::empty());
    let release = WindowEvent::Key(Key::Escape, 9, Action::Release, Modifiers::empty());
    let other = WindowEvent::Key(Key::A, 38, Action::Press, Modifiers::empty());

    assert_eq!(adapt_event(press), Some(SurfaceAction::Close));
    assert_eq!(adapt_event(release), None);
    assert_eq!(adapt_event(other), None);
  }

  #[test]
  fn mouse_buttons_drive_trackball() {
    let left = |action| WindowEvent::MouseButton(MouseButton::Button1, action, Modifiers::empty());
    let right = |action| WindowEvent::MouseButton(MouseButton::Button2, action, Modifiers::empty());

    assert_eq!(adapt_event(left(Action::Press)), Some(SurfaceAction::BeginDrag));
    assert_eq!(adapt_event(left(Action::Release)), Some(SurfaceAction::EndDrag));
    assert_eq!(
      adapt_event(right(Action::Press)),
      Some(SurfaceAction::ResetRotation)
    );
    assert_eq!(adapt_event(right(Action::Release)), None);
  }

  #[test]
  fn resize_and_cursor() {
    assert_eq!(
      adapt_event(WindowEvent::FramebufferSize(640, 480)),
      Some(SurfaceAction::Resized {
        width: 640,
        height: 480
      })
    );
    assert_eq!(
      adapt_event(WindowEvent::CursorPos(12.5, 3.)),
      Some(SurfaceAction::CursorMoved { x: 12.5, y: 3. })
    );
  }

  #[test]
  fn error_display() {
    assert_eq!(
      GlfwSurfaceError::WindowCreationFailed.to_string(),
      "failed to create window"
    );
    assert_eq!(
      GlfwSurfaceError::GraphicsStateError(StateQueryError::UnavailableGLState).to_string(),
      format!(
        "failed to get graphics state: {}",
        StateQueryError::UnavailableGLState
      )
    );
  }
}
