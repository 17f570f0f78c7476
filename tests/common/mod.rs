// SPDX-License-Identifier: GPL-3.0-or-later
// tests/common/mod.rs
//
// Recording fakes for the selector's host capabilities.

#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

use image::{DynamicImage, RgbaImage};

use cropsel::app::document::ImageSource;
use cropsel::app::document::raster::RasterDocument;
use cropsel::domain::Result;
use cropsel::ui::widgets::RasterCanvas;
use cropsel::ui::{Controls, CropComplete, Navigator, Opener, SaveLabel, UiHandles};
use cropsel::{
    AppConfig, AppMessage, CropEndpoint, CropError, CropSelector, SaveCropRequest, SavedCrop,
};

#[derive(Debug, Default)]
pub struct ControlsState {
    pub reset_enabled: bool,
    pub save_enabled: bool,
    pub label: SaveLabel,
    pub readout: Option<String>,
    pub alerts: Vec<String>,
}

pub struct FakeControls(pub Rc<RefCell<ControlsState>>);

impl Controls for FakeControls {
    fn set_reset_enabled(&mut self, enabled: bool) {
        self.0.borrow_mut().reset_enabled = enabled;
    }

    fn set_save_enabled(&mut self, enabled: bool) {
        self.0.borrow_mut().save_enabled = enabled;
    }

    fn set_save_label(&mut self, label: SaveLabel) {
        self.0.borrow_mut().label = label;
    }

    fn set_readout(&mut self, text: Option<&str>) {
        self.0.borrow_mut().readout = text.map(str::to_string);
    }

    fn alert(&mut self, message: &str) {
        self.0.borrow_mut().alerts.push(message.to_string());
    }
}

pub struct FakeOpener(pub Rc<RefCell<Vec<CropComplete>>>);

impl Opener for FakeOpener {
    fn post_message(&mut self, message: &CropComplete) {
        self.0.borrow_mut().push(message.clone());
    }
}

pub struct FakeNavigator(pub Rc<RefCell<Vec<String>>>);

impl Navigator for FakeNavigator {
    fn navigate(&mut self, location: &str) {
        self.0.borrow_mut().push(location.to_string());
    }
}

/// Serves a blank image of a fixed size, or fails.
pub struct FakeImageSource {
    pub size: Option<(u32, u32)>,
}

impl ImageSource for FakeImageSource {
    async fn load(&self, url: &str) -> Result<RasterDocument> {
        match self.size {
            Some((w, h)) => Ok(RasterDocument::from_image(&DynamicImage::ImageRgba8(
                RgbaImage::new(w, h),
            ))),
            None => Err(CropError::ImageLoad(format!("{url}: 404"))),
        }
    }
}

#[derive(Debug, Clone)]
pub enum Reply {
    Saved(SavedCrop),
    Rejected(String),
    Transport(String),
}

/// Answers every save with the same reply after a short delay.
pub struct FakeEndpoint {
    pub reply: Reply,
    pub latency: Duration,
    pub calls: Cell<usize>,
    pub requests: RefCell<Vec<SaveCropRequest>>,
}

impl FakeEndpoint {
    pub fn new(reply: Reply) -> Self {
        Self {
            reply,
            latency: Duration::from_millis(100),
            calls: Cell::new(0),
            requests: RefCell::new(Vec::new()),
        }
    }

    pub fn saved_with_thumbnail(name: &str) -> Self {
        Self::new(Reply::Saved(SavedCrop {
            cropped_filename: Some(format!("cropped_{name}")),
            thumbnail_filename: Some(name.to_string()),
        }))
    }
}

impl CropEndpoint for FakeEndpoint {
    async fn save_crop(&self, request: &SaveCropRequest) -> Result<SavedCrop> {
        self.calls.set(self.calls.get() + 1);
        self.requests.borrow_mut().push(request.clone());
        tokio::time::sleep(self.latency).await;

        match &self.reply {
            Reply::Saved(saved) => Ok(saved.clone()),
            Reply::Rejected(msg) => Err(CropError::Rejected(msg.clone())),
            Reply::Transport(msg) => Err(CropError::Transport(msg.clone())),
        }
    }
}

/// Shared views onto everything a selector reports to its host.
pub struct Harness {
    pub canvas: Rc<RefCell<RasterCanvas>>,
    pub controls: Rc<RefCell<ControlsState>>,
    pub opened: Rc<RefCell<Vec<CropComplete>>>,
    pub visited: Rc<RefCell<Vec<String>>>,
    pub with_opener: bool,
}

impl Harness {
    pub fn new(container_width: f32) -> Self {
        Self {
            canvas: Rc::new(RefCell::new(RasterCanvas::new(container_width))),
            controls: Rc::default(),
            opened: Rc::default(),
            visited: Rc::default(),
            with_opener: true,
        }
    }

    pub fn without_opener(mut self) -> Self {
        self.with_opener = false;
        self
    }

    pub fn handles(&self) -> UiHandles {
        UiHandles {
            canvas: Box::new(Rc::clone(&self.canvas)),
            controls: Box::new(FakeControls(Rc::clone(&self.controls))),
            opener: self
                .with_opener
                .then(|| Box::new(FakeOpener(Rc::clone(&self.opened))) as Box<dyn Opener>),
            navigator: Box::new(FakeNavigator(Rc::clone(&self.visited))),
        }
    }

    /// A selector over a blank `width x height` image with default config.
    pub async fn selector(&self, width: u32, height: u32) -> CropSelector {
        CropSelector::initialize(
            &FakeImageSource {
                size: Some((width, height)),
            },
            "/static/chart.png",
            serde_json::json!(7),
            self.handles(),
            AppConfig::default(),
        )
        .await
        .expect("fake image loads")
    }
}

pub fn drag_messages(from: (f32, f32), to: (f32, f32)) -> Vec<AppMessage> {
    vec![
        AppMessage::CropDragStart {
            client_x: from.0,
            client_y: from.1,
        },
        AppMessage::CropDragMove {
            client_x: to.0,
            client_y: to.1,
        },
        AppMessage::CropDragEnd {
            client_x: to.0,
            client_y: to.1,
        },
    ]
}

pub fn drag(selector: &mut CropSelector, from: (f32, f32), to: (f32, f32)) {
    for message in drag_messages(from, to) {
        selector.dispatch(&message);
    }
}

pub fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 0.01
}
