//! Arcball rotation driven by the mouse.
//!
//! Cursor positions are mapped onto a unit sphere centered in the framebuffer. While dragging, the
//! rotation bringing the drag start point onto the current point is composed with the rotation
//! accumulated by previous drags.

use cgmath::{
  perspective, Deg, InnerSpace, Matrix3, Matrix4, Quaternion, SquareMatrix, Vector2, Vector3,
};
use log::trace;

const FOVY: Deg<f32> = Deg(45.);
const Z_NEAR: f32 = 0.1;
const Z_FAR: f32 = 100.;

/// Model and projection matrices of a surface.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
  /// Trackball rotation.
  pub model: Matrix4<f32>,
  /// Perspective projection over the framebuffer.
  pub projection: Matrix4<f32>,
}

impl Viewport {
  /// Model matrix, column-major.
  pub fn model_cols(&self) -> [[f32; 4]; 4] {
    self.model.into()
  }

  /// Projection matrix, column-major.
  pub fn projection_cols(&self) -> [[f32; 4]; 4] {
    self.projection.into()
  }
}

/// Arcball state.
#[derive(Clone, Debug)]
pub struct Trackball {
  adjust_width: f32,
  adjust_height: f32,
  projection: Matrix4<f32>,
  last_rot: Matrix3<f32>,
  this_rot: Matrix3<f32>,
  beg_vec: Vector3<f32>,
  mouse_pt: Vector2<f32>,
  dragging: bool,
}

impl Trackball {
  /// Create a trackball for a `width × height` framebuffer, with no rotation.
  pub fn new(width: u32, height: u32) -> Self {
    let mut trackball = Trackball {
      adjust_width: 1.,
      adjust_height: 1.,
      projection: Matrix4::identity(),
      last_rot: Matrix3::identity(),
      this_rot: Matrix3::identity(),
      beg_vec: Vector3::new(0., 0., 0.),
      mouse_pt: Vector2::new(0., 0.),
      dragging: false,
    };

    trackball.set_bounds(width, height);
    trackball
  }

  /// Update the framebuffer size.
  ///
  /// A zero-sized framebuffer (minimized window) is ignored.
  pub fn set_bounds(&mut self, width: u32, height: u32) {
    if width == 0 || height == 0 {
      return;
    }

    let (w, h) = (width as f32, height as f32);
    self.adjust_width = 1. / ((w - 1.).max(1.) * 0.5);
    self.adjust_height = 1. / ((h - 1.).max(1.) * 0.5);
    self.projection = perspective(FOVY, w / h, Z_NEAR, Z_FAR);
  }

  /// Map a cursor position, in pixels from the top-left corner, onto the unit sphere.
  ///
  /// Points outside of the sphere’s silhouette are projected onto its rim.
  pub fn map_to_sphere(&self, pt: Vector2<f32>) -> Vector3<f32> {
    let x = pt.x * self.adjust_width - 1.;
    let y = 1. - pt.y * self.adjust_height;
    let length = x * x + y * y;

    if length > 1. {
      let norm = 1. / length.sqrt();
      Vector3::new(x * norm, y * norm, 0.)
    } else {
      Vector3::new(x, y, (1. - length).sqrt())
    }
  }

  /// Start dragging from the current cursor position.
  pub fn begin_drag(&mut self) {
    self.dragging = true;
    self.last_rot = self.this_rot;
    self.beg_vec = self.map_to_sphere(self.mouse_pt);
  }

  /// Stop dragging. The current rotation is kept.
  pub fn end_drag(&mut self) {
    self.dragging = false;
  }

  /// Whether a drag is in progress.
  pub fn is_dragging(&self) -> bool {
    self.dragging
  }

  /// Drop every rotation.
  pub fn reset(&mut self) {
    trace!("trackball reset");
    self.last_rot = Matrix3::identity();
    self.this_rot = Matrix3::identity();
  }

  /// Move the cursor, rotating if a drag is in progress.
  pub fn cursor_moved(&mut self, x: f32, y: f32) {
    self.mouse_pt = Vector2::new(x, y);

    if !self.dragging {
      return;
    }

    let end_vec = self.map_to_sphere(self.mouse_pt);
    let perp = self.beg_vec.cross(end_vec);

    let quat = if perp.magnitude() > 1e-5 {
      // both points are unit vectors: w is cos θ, θ being the angle between them, so the
      // rotation is twice as wide as the drag on the sphere
      Quaternion::new(self.beg_vec.dot(end_vec), perp.x, perp.y, perp.z)
    } else {
      Quaternion::new(1., 0., 0., 0.)
    };

    self.this_rot = Matrix3::from(quat) * self.last_rot;
  }

  /// Accumulated rotation.
  pub fn model(&self) -> Matrix4<f32> {
    Matrix4::from(self.this_rot)
  }

  /// Perspective projection matching the framebuffer’s aspect ratio.
  pub fn projection(&self) -> Matrix4<f32> {
    self.projection
  }

  /// Model and projection matrices.
  pub fn viewport(&self) -> Viewport {
    Viewport {
      model: self.model(),
      projection: self.projection,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use cgmath::{Vector4, Zero};

  fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-5
  }

  #[test]
  fn center_maps_to_pole() {
    let trackball = Trackball::new(101, 101);
    let v = trackball.map_to_sphere(Vector2::new(50., 50.));

    assert!(approx(v.x, 0.) && approx(v.y, 0.) && approx(v.z, 1.));
  }

  #[test]
  fn outside_maps_to_rim() {
    let trackball = Trackball::new(101, 101);
    let v = trackball.map_to_sphere(Vector2::new(0., 0.));

    assert!(approx(v.z, 0.));
    assert!(approx(v.magnitude(), 1.));
    assert!(v.x < 0. && v.y > 0.);
  }

  #[test]
  fn click_without_motion_is_identity() {
    let mut trackball = Trackball::new(101, 101);
    trackball.cursor_moved(30., 40.);
    trackball.begin_drag();
    trackball.cursor_moved(30., 40.);

    assert_eq!(trackball.model(), Matrix4::identity());
  }

  #[test]
  fn horizontal_drag_rotates_around_y() {
    let mut trackball = Trackball::new(101, 101);
    trackball.cursor_moved(50., 50.);
    trackball.begin_drag();
    trackball.cursor_moved(60., 50.);
    trackball.end_drag();

    let z = trackball.model() * Vector4::new(0., 0., 1., 0.);
    assert!(z.x > 0.);
    assert!(approx(z.y, 0.));

    let y = trackball.model() * Vector4::new(0., 1., 0., 0.);
    assert!(approx(y.y, 1.));

    // moving without dragging doesn’t rotate
    let model = trackball.model();
    trackball.cursor_moved(10., 10.);
    assert_eq!(trackball.model(), model);
  }

  #[test]
  fn rotation_is_twice_the_drag_angle() {
    let mut trackball = Trackball::new(101, 101);
    trackball.cursor_moved(50., 50.);
    trackball.begin_drag();
    // (0.5, 0, √0.75) on the sphere: 30° away from the pole
    trackball.cursor_moved(75., 50.);

    let z = trackball.model() * Vector4::new(0., 0., 1., 0.);
    let angle = 60f32.to_radians();
    assert!(approx(z.x, angle.sin()));
    assert!(approx(z.y, 0.));
    assert!(approx(z.z, angle.cos()));
  }

  #[test]
  fn drags_accumulate_and_reset() {
    let mut trackball = Trackball::new(101, 101);
    trackball.cursor_moved(50., 50.);
    trackball.begin_drag();
    trackball.cursor_moved(55., 50.);
    trackball.end_drag();
    let first = trackball.model();

    trackball.begin_drag();
    trackball.cursor_moved(60., 50.);
    trackball.end_drag();
    assert_ne!(trackball.model(), first);

    trackball.reset();
    assert_eq!(trackball.model(), Matrix4::identity());
  }

  #[test]
  fn projection_follows_aspect_ratio() {
    let mut trackball = Trackball::new(800, 600);
    assert_eq!(
      trackball.projection(),
      perspective(Deg(45.), 800. / 600., 0.1, 100.)
    );

    trackball.set_bounds(0, 600);
    assert_eq!(
      trackball.projection(),
      perspective(Deg(45.), 800. / 600., 0.1, 100.)
    );

    trackball.set_bounds(600, 600);
    assert!(!trackball.projection().is_zero());
    assert!(approx(trackball.projection().x.x, trackball.projection().y.y));
  }
}
