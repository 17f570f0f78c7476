// SPDX-License-Identifier: GPL-3.0-or-later
// src/main.rs
//
// Console host: load an image, replay a drag, write a preview and save.

use std::cell::RefCell;
use std::path::PathBuf;
use std::rc::Rc;
use std::str::FromStr;

use anyhow::{Context, bail};
use clap::Parser;
use futures_util::stream;

use cropsel::app::document::FetchImageSource;
use cropsel::ui::widgets::{LogControls, LogNavigator, RasterCanvas, StdoutOpener};
use cropsel::ui::{Opener, UiHandles};
use cropsel::{AppConfig, AppMessage, CropSelector, HttpCropEndpoint, Touch};

/// Command line arguments.
#[derive(Parser, Debug, Clone)]
#[command(version, about)]
pub struct Args {
    /// Image URL or file path to select a crop region on.
    pub image: String,

    /// Workbook index sent along with the crop. Parsed as JSON, bare text is
    /// sent as a string.
    #[arg(long, default_value = "0")]
    pub index: String,

    /// Width available to the canvas, in screen pixels.
    #[arg(long, default_value_t = 800.0)]
    pub container_width: f32,

    /// Drag to perform in screen coordinates: `x0,y0,x1,y1`.
    #[arg(long)]
    pub drag: Option<Drag>,

    /// Replay the drag as touch input.
    #[arg(long)]
    pub touch: bool,

    /// Submit the selection after the drag.
    #[arg(long)]
    pub save: bool,

    /// Print the opener message to stdout after a successful save.
    #[arg(long)]
    pub opener: bool,

    /// Write the rendered canvas to this PNG file.
    #[arg(long)]
    pub preview: Option<PathBuf>,

    /// Override the configured server base URL.
    #[arg(long)]
    pub endpoint: Option<String>,

    /// Config file to use instead of the default location.
    #[arg(long)]
    pub config: Option<PathBuf>,
}

/// A scripted drag between two screen positions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Drag {
    pub from: (f32, f32),
    pub to: (f32, f32),
}

impl FromStr for Drag {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let values = s
            .split(',')
            .map(|v| v.trim().parse::<f32>())
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| format!("invalid drag '{s}': {e}"))?;

        match values.as_slice() {
            [x0, y0, x1, y1] => Ok(Drag {
                from: (*x0, *y0),
                to: (*x1, *y1),
            }),
            _ => Err(format!("invalid drag '{s}': expected x0,y0,x1,y1")),
        }
    }
}

impl Drag {
    /// Down, a midway move, a final move and up.
    fn messages(&self, touch: bool) -> Vec<AppMessage> {
        let mid = (
            (self.from.0 + self.to.0) / 2.0,
            (self.from.1 + self.to.1) / 2.0,
        );

        if touch {
            let at = |(client_x, client_y): (f32, f32)| vec![Touch { client_x, client_y }];
            vec![
                AppMessage::TouchStart(at(self.from)),
                AppMessage::TouchMove(at(mid)),
                AppMessage::TouchMove(at(self.to)),
                AppMessage::TouchEnd,
            ]
        } else {
            vec![
                AppMessage::CropDragStart {
                    client_x: self.from.0,
                    client_y: self.from.1,
                },
                AppMessage::CropDragMove {
                    client_x: mid.0,
                    client_y: mid.1,
                },
                AppMessage::CropDragMove {
                    client_x: self.to.0,
                    client_y: self.to.1,
                },
                AppMessage::CropDragEnd {
                    client_x: self.to.0,
                    client_y: self.to.1,
                },
            ]
        }
    }
}

fn parse_index(raw: &str) -> serde_json::Value {
    serde_json::from_str(raw).unwrap_or_else(|_| serde_json::Value::String(raw.to_string()))
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => AppConfig::load(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => AppConfig::load_or_default(),
    };
    if let Some(endpoint) = &args.endpoint {
        config.endpoint = endpoint.clone();
    }

    if args.save && args.drag.is_none() {
        bail!("--save needs a selection, pass --drag x0,y0,x1,y1");
    }

    let canvas = Rc::new(RefCell::new(RasterCanvas::new(args.container_width)));
    let opener = args
        .opener
        .then(|| Box::new(StdoutOpener) as Box<dyn Opener>);
    let ui = UiHandles {
        canvas: Box::new(Rc::clone(&canvas)),
        controls: Box::new(LogControls::default()),
        opener,
        navigator: Box::new(LogNavigator),
    };

    let endpoint = HttpCropEndpoint::new(config.save_url());
    let mut selector = CropSelector::initialize(
        &FetchImageSource::new(),
        &args.image,
        parse_index(&args.index),
        ui,
        config,
    )
    .await
    .context("Failed to initialize crop selector")?;

    let mut messages = args
        .drag
        .map(|drag| drag.messages(args.touch))
        .unwrap_or_default();
    if args.save {
        messages.push(AppMessage::SaveCrop);
    }

    let outcome = selector.run(&endpoint, stream::iter(messages)).await;
    log::info!("Selector finished: {outcome:?}");

    if let Some(path) = &args.preview {
        canvas
            .borrow()
            .save_png(path)
            .with_context(|| format!("Failed to write preview {}", path.display()))?;
        log::info!("Preview written to {}", path.display());
    }

    match selector.selection() {
        Some(region) => println!("{}", region.describe()),
        None => println!("No selection"),
    }

    Ok(())
}
