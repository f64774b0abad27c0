use std::path::PathBuf;

use clap::Parser;
use log::info;

use solidcanvas::{Scene, SceneConfig};

/// Render a scene of flat-shaded cubes and pyramids.
#[derive(Parser, Debug)]
#[command(version)]
struct Args {
    /// Scene description (TOML). The built-in demo scene is used when omitted.
    scene: Option<PathBuf>,

    /// Write the frame to this PNG file instead of opening a window.
    #[arg(long, value_name = "OUT.png")]
    png: Option<PathBuf>,
}

fn main() -> Result<(), String> {
    env_logger::init();
    let args = Args::parse();

    let config = match &args.scene {
        Some(path) => {
            info!("Loading scene from {}", path.display());
            SceneConfig::load(path).map_err(|e| e.to_string())?
        }
        None => {
            info!("Using the built-in demo scene");
            SceneConfig::default()
        }
    };

    let scene = Scene::from_config(&config).map_err(|e| e.to_string())?;
    let (renderer, stats) = scene.render();
    info!(
        "Rendered {}x{}: {} triangles filled, {} outlined, {} culled, {} clipped",
        renderer.width(),
        renderer.height(),
        stats.filled,
        stats.wireframe,
        stats.back_facing,
        stats.clipped
    );

    if let Some(path) = &args.png {
        renderer.save_png(path).map_err(|e| e.to_string())?;
        info!("Saved {}", path.display());
        return Ok(());
    }

    present(&renderer.to_bytes(), renderer.width(), renderer.height())
}

#[cfg(feature = "window")]
fn present(bytes: &[u8], width: u32, height: u32) -> Result<(), String> {
    use solidcanvas::window::{FrameLimiter, Window, WindowEvent};

    let mut window = Window::new("solidcanvas", width, height)?;
    let mut limiter = FrameLimiter::new(&window);
    info!("Presenting; close the window or press Escape to quit");

    // The scene is static, so the same frame is shown until quit.
    while window.poll_events() != WindowEvent::Quit {
        window.present(bytes)?;
        limiter.wait(&window);
    }
    Ok(())
}

#[cfg(not(feature = "window"))]
fn present(_bytes: &[u8], _width: u32, _height: u32) -> Result<(), String> {
    Err("built without the `window` feature; pass --png OUT.png".to_string())
}
