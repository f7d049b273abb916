//! render-device demo programs.
//!
//! Every demo implements [`Example`]: it creates its resources once, renders frames until the
//! surface is asked to close, then destroys what it created. The runner in this file owns the
//! surface and the frame loop.

mod cube;
mod shared;
mod textured_cube;
mod triangle;

use render_device::backend::Backend;
use render_device::Device;
use render_device_glfw::GlfwSurface;
use render_device_windowing::{Surface, Viewport, WindowDim, WindowOpt};
use std::{error::Error, path::PathBuf};
use structopt::StructOpt;

/// Result type of the demos.
pub type DemoResult<T> = Result<T, Box<dyn Error>>;

#[derive(Debug, StructOpt)]
pub struct CLIOpts {
  #[structopt(short, long)]
  /// Image to use as texture instead of the generated checkerboard.
  texture: Option<PathBuf>,

  #[structopt(short, long)]
  /// List available examples.
  list_examples: bool,

  #[structopt(long, default_value = "800")]
  /// Width of the window.
  width: u32,

  #[structopt(long, default_value = "600")]
  /// Height of the window.
  height: u32,

  /// Example to run.
  example: Option<String>,
}

/// Example interface.
pub trait Example: Sized {
  /// Create the resources of the example.
  fn bootstrap<B>(device: &mut Device<B>, cli_opts: &CLIOpts) -> DemoResult<Self>
  where
    B: Backend;

  /// Render a frame of the example.
  fn render_frame<B>(&mut self, device: &mut Device<B>, viewport: &Viewport) -> DemoResult<()>
  where
    B: Backend;

  /// Destroy the resources of the example.
  fn teardown<B>(self, device: &mut Device<B>) -> DemoResult<()>
  where
    B: Backend;
}

/// Macro to declaratively add examples.
macro_rules! examples {
  ($($ex_name:literal, $ex_mod:ident),* $(,)?) => {
    fn show_available_examples() {
      println!("available examples:");
      $( println!("  - {}", $ex_name); )*
    }

    // create a function that will run an example based on its name
    fn pick_and_run_example(cli_opts: CLIOpts) -> DemoResult<()> {
      let example_name = cli_opts.example.as_deref();
      match example_name {
        $(
          Some($ex_name) => run_example::<$ex_mod::LocalExample>(&cli_opts, $ex_name),
        )*

        _ => {
          log::error!("no example found");
          show_available_examples();
          Ok(())
        }
      }
    }
  }
}

// Run an example.
fn run_example<E>(cli_opts: &CLIOpts, name: &str) -> DemoResult<()>
where
  E: Example,
{
  let dim = WindowDim::Windowed {
    width: cli_opts.width,
    height: cli_opts.height,
  };
  let mut surface = GlfwSurface::new(name, dim, WindowOpt::default())?;

  let mut example = E::bootstrap(surface.device(), cli_opts)?;

  while surface.poll() {
    let viewport = surface.viewport();
    example.render_frame(surface.device(), &viewport)?;
    surface.present();
  }

  example.teardown(surface.device())
}

examples! {
  "triangle", triangle,
  "cube", cube,
  "textured-cube", textured_cube,
}

fn main() {
  env_logger::builder()
    .filter_level(log::LevelFilter::Info)
    .parse_default_env()
    .init();
  let cli_opts = CLIOpts::from_args();

  if cli_opts.list_examples {
    show_available_examples();
  } else if let Err(e) = pick_and_run_example(cli_opts) {
    log::error!("{}", e);
    std::process::exit(1);
  }
}
