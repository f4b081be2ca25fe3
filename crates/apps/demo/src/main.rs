use std::fs;
use std::path::PathBuf;

use clap::Parser;
use serde::Deserialize;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use map::MapOptions;
use styles::{ALL_STYLES, MapStyle};
use viewer::{MapView, SelectionControl};

/// Headless demo driving the styled map view through its full lifecycle:
/// mount, style load, frames, style switches, resize, unmount.
#[derive(Parser, Debug)]
#[command(name = "demo")]
struct Args {
    /// Initial style selection value (topographic, satellite, buildings,
    /// terrain). Unrecognized values fall open to topographic.
    #[arg(long, default_value = "topographic")]
    style: String,

    /// Frames to render per style.
    #[arg(long, default_value_t = 3)]
    frames: u32,

    /// Optional JSON file overriding parts of the initial viewport.
    #[arg(long)]
    viewport: Option<PathBuf>,

    /// Cycle through every remaining style after the initial one.
    #[arg(long)]
    cycle: bool,
}

/// Partial viewport override; omitted fields keep their defaults.
#[derive(Debug, Default, Deserialize)]
struct ViewportOverrides {
    lon: Option<f64>,
    lat: Option<f64>,
    zoom: Option<f64>,
    pitch_deg: Option<f64>,
    width_px: Option<u32>,
    height_px: Option<u32>,
    style: Option<MapStyle>,
}

impl ViewportOverrides {
    fn apply(&self, options: &mut MapOptions) {
        if let Some(lon) = self.lon {
            options.lon = lon;
        }
        if let Some(lat) = self.lat {
            options.lat = lat;
        }
        if let Some(zoom) = self.zoom {
            options.zoom = zoom;
        }
        if let Some(pitch) = self.pitch_deg {
            options.pitch_deg = pitch;
        }
        if let Some(width) = self.width_px {
            options.width_px = width;
        }
        if let Some(height) = self.height_px {
            options.height_px = height;
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    if let Err(e) = run(Args::parse()) {
        error!("demo failed: {e}");
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    let overrides = match &args.viewport {
        Some(path) => {
            let text = fs::read_to_string(path)?;
            serde_json::from_str::<ViewportOverrides>(&text)?
        }
        None => ViewportOverrides::default(),
    };

    let mut control = SelectionControl::new();
    let initial = overrides
        .style
        .unwrap_or_else(|| control.select(&args.style));

    let mut base = MapOptions::new(initial.style_url());
    overrides.apply(&mut base);

    info!(style = initial.value(), url = %base.style_url, "mounting view");
    let (mut view, ticket) = MapView::mount_with(initial, base)?;
    view.finish_load(ticket)?;
    render_frames(&mut view, args.frames);

    if args.cycle {
        for style in ALL_STYLES {
            if style == initial {
                continue;
            }
            info!(style = style.value(), "switching style");
            if let Some(ticket) = view.set_style(style)? {
                view.finish_load(ticket)?;
            }
            render_frames(&mut view, args.frames);
        }
    }

    view.viewport_resized(1920, 1080);
    render_frames(&mut view, 1);
    view.unmount();

    for event in view.log().events() {
        info!(
            generation = event.generation,
            kind = ?event.kind,
            detail = %event.detail,
            "lifecycle"
        );
    }
    Ok(())
}

fn render_frames(view: &mut MapView, frames: u32) {
    for _ in 0..frames {
        view.render_frame();
    }
}
