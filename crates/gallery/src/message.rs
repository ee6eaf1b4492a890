use cosmic::widget::image::Handle;
use gallery_image::GalleryOutcome;
use gallery_types::Direction;
use shared::Ticket;
use std::{path::PathBuf, sync::Arc};

pub use crate::key_binds::MenuAction;

#[derive(Debug, Clone)]
pub enum Message {
    Gallery(GalleryMessage),
    Lightbox(LightboxMessage),
    KeyBind(MenuAction),
    WindowResized { width: f32, height: f32 },
    ResizeSettled(Ticket),
    Cancelled,
}

#[derive(Debug, Clone)]
pub enum GalleryMessage {
    /// Every entry settled, in gallery order
    Loaded(Vec<GalleryOutcome>),
    LoadFailed(Arc<String>),
}

#[derive(Debug, Clone)]
pub enum LightboxMessage {
    Open(usize),
    Close,
    Navigate(Direction),
    FadeIn(Ticket),
    ImageLoaded {
        path: PathBuf,
        handle: Handle,
        width: u32,
        height: u32,
    },
    ImageFailed {
        path: PathBuf,
        error: String,
    },
    TouchStart(f32),
    TouchEnd(f32),
    TouchLost,
}

impl LightboxMessage {
    pub const PREVIOUS: Self = Self::Navigate(Direction::Previous);
    pub const NEXT: Self = Self::Navigate(Direction::Next);
}
