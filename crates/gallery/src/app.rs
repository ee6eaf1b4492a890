//! Main app state

use crate::{
    fl,
    key_binds::key_press_handler,
    message::{GalleryMessage, LightboxMessage, Message},
    views::{GalleryView, LightboxView},
};
use cosmic::{
    Action, Application, ApplicationExt, Core, Element, Task,
    iced::{Size, Subscription, keyboard, window},
    iced_widget::stack,
};
use gallery_config::LoadedConfig;
use gallery_image::{self as image, CachedImage, GalleryOutcome, ImageCache};
use gallery_nav::{Lightbox, Navigation, SwipeTracker};
use gallery_types::Direction;
use shared::{LoadingEvent, LoadingState, debounce};
use std::{path::PathBuf, sync::Arc};

pub const INITIAL_WIDTH: f32 = 1200.0;
pub const INITIAL_HEIGHT: f32 = 800.0;

pub struct GalleryApp {
    core: Core,
    config: LoadedConfig,
    loading: LoadingState,
    outcomes: Vec<GalleryOutcome>,
    gallery_view: GalleryView,
    lightbox_view: LightboxView,
    lightbox: Lightbox,
    swipe: SwipeTracker,
    cache: ImageCache,
}

impl GalleryApp {
    pub const APP_ID: &'static str = "org.codeberg.bhh32.Galleria";

    fn load_gallery(&mut self) -> Task<Action<Message>> {
        self.loading = LoadingEvent::StartLoading.apply_to_state(self.loading.clone());

        let entries = self.config.entries();
        let max_width = self.config.config.layout.max_item_width;

        tracing::info!("Loading {} gallery images", entries.len());

        cosmic::task::future(async move {
            let load_entry = move |entry: gallery_types::GalleryEntry| {
                image::load_thumbnail(entry.source, max_width)
            };

            match image::load_gallery(entries, load_entry).await {
                Ok(outcomes) => Message::Gallery(GalleryMessage::Loaded(outcomes)),
                Err(e) => {
                    tracing::error!("Gallery failed to load: {e}");
                    Message::Gallery(GalleryMessage::LoadFailed(Arc::new(e.to_string())))
                }
            }
        })
    }

    /// Start loading the full image behind `index` unless it failed in the
    /// grid, is cached, or is already on its way.
    fn load_full_image(&self, index: usize) -> Task<Action<Message>> {
        let Some(loaded) = self.outcomes.get(index).and_then(|o| o.image()) else {
            return Task::none();
        };

        let path = loaded.path.clone();
        if !self.cache.claim(&path) {
            return Task::none();
        }

        cosmic::task::future(async move {
            match image::load_image(path.clone()).await {
                Ok(img) => Message::Lightbox(LightboxMessage::ImageLoaded {
                    path,
                    handle: img.handle,
                    width: img.width,
                    height: img.height,
                }),
                Err(e) => Message::Lightbox(LightboxMessage::ImageFailed {
                    path,
                    error: e.to_string(),
                }),
            }
        })
    }

    /// Load the shown image, preload both neighbours, and time the fade-in.
    fn after_navigation(&self, navigation: Navigation) -> Task<Action<Message>> {
        let (previous, next) = navigation.neighbors;
        tracing::debug!(
            "lightbox at {}, preloading {previous} and {next}",
            navigation.index
        );

        let mut tasks = vec![
            self.load_full_image(navigation.index),
            self.load_full_image(previous),
            self.load_full_image(next),
        ];

        if let Some(ticket) = navigation.fade_in {
            let delay = self.lightbox.fade_delay();
            tasks.push(cosmic::task::future(async move {
                Message::Lightbox(LightboxMessage::FadeIn(
                    debounce::elapsed(delay, ticket).await,
                ))
            }));
        }

        Task::batch(tasks)
    }

    fn open_lightbox(&mut self, index: usize) -> Task<Action<Message>> {
        match self.lightbox.open(index) {
            Ok(navigation) => {
                self.swipe.cancel();
                self.after_navigation(navigation)
            }
            Err(e) => {
                tracing::warn!("Cannot open lightbox: {e}");
                Task::none()
            }
        }
    }

    fn navigate(&mut self, direction: Direction) -> Task<Action<Message>> {
        match self.lightbox.navigate(direction) {
            Some(navigation) => self.after_navigation(navigation),
            None => Task::none(),
        }
    }

    fn close_lightbox(&mut self) {
        if self.lightbox.close() {
            tracing::debug!("lightbox closed");
        }
        self.swipe.cancel();
    }

    fn is_current(&self, path: &std::path::Path) -> bool {
        self.lightbox
            .current()
            .and_then(|idx| self.outcomes.get(idx))
            .is_some_and(|outcome| outcome.entry().source == path)
    }

    fn update_lightbox(&mut self, message: LightboxMessage) -> Task<Action<Message>> {
        match message {
            LightboxMessage::Open(index) => return self.open_lightbox(index),
            LightboxMessage::Close => self.close_lightbox(),
            LightboxMessage::Navigate(direction) => return self.navigate(direction),
            LightboxMessage::FadeIn(ticket) => {
                self.lightbox.finish_fade(ticket);
            }
            LightboxMessage::ImageLoaded {
                path,
                handle,
                width,
                height,
            } => {
                self.cache.insert(
                    path,
                    CachedImage {
                        handle,
                        width,
                        height,
                    },
                );
            }
            LightboxMessage::ImageFailed { path, error } => {
                self.cache.clear_pending(&path);
                if self.is_current(&path) {
                    tracing::warn!("Failed to load {}: {error}", path.display());
                } else {
                    tracing::debug!("Preload of {} failed: {error}", path.display());
                }
            }
            LightboxMessage::TouchStart(x) => self.swipe.begin(x),
            LightboxMessage::TouchEnd(x) => {
                if let Some(direction) = self.swipe.finish(x) {
                    return self.navigate(direction);
                }
            }
            LightboxMessage::TouchLost => self.swipe.cancel(),
        }

        Task::none()
    }

    fn update_gallery(&mut self, message: GalleryMessage) {
        match message {
            GalleryMessage::Loaded(outcomes) => {
                self.loading = LoadingEvent::LoadComplete.apply_to_state(self.loading.clone());
                self.lightbox = Lightbox::new(outcomes.len(), self.lightbox.fade_delay());
                self.outcomes = outcomes;
                self.gallery_view.relayout(&self.outcomes);
            }
            GalleryMessage::LoadFailed(error) => {
                self.loading = LoadingEvent::LoadError(error.as_ref().clone())
                    .apply_to_state(self.loading.clone());
            }
        }
    }
}

impl Application for GalleryApp {
    type Executor = cosmic::executor::Default;
    type Flags = Option<PathBuf>;
    type Message = Message;

    const APP_ID: &'static str = Self::APP_ID;

    fn core(&self) -> &Core {
        &self.core
    }

    fn core_mut(&mut self) -> &mut Core {
        &mut self.core
    }

    fn init(core: Core, flags: Self::Flags) -> (Self, Task<Action<Self::Message>>) {
        let config = gallery_config::config(flags.as_deref());
        let count = config.config.entries.len();
        let timing = config.config.timing;
        let lightbox_config = config.config.lightbox;

        let mut app = Self {
            core,
            gallery_view: GalleryView::new(
                config.config.layout,
                timing.resize_debounce(),
                INITIAL_WIDTH,
            ),
            lightbox_view: LightboxView::new(Size::new(INITIAL_WIDTH, INITIAL_HEIGHT)),
            lightbox: Lightbox::new(count, timing.fade()),
            swipe: SwipeTracker::new(lightbox_config.swipe_threshold),
            cache: ImageCache::new(lightbox_config.cache_size),
            loading: LoadingState::default(),
            outcomes: Vec::new(),
            config,
        };

        let mut tasks = vec![app.load_gallery()];
        if let Some(id) = app.core.main_window_id() {
            tasks.push(app.set_window_title(fl!("app-title"), id));
        }

        (app, Task::batch(tasks))
    }

    fn view(&self) -> Element<'_, Self::Message> {
        let lightbox_open = self.lightbox.is_open();
        let gallery = self
            .gallery_view
            .view(&self.loading, &self.outcomes, !lightbox_open);

        match self
            .lightbox_view
            .view(&self.lightbox, &self.outcomes, &self.cache)
        {
            Some(lightbox) => stack![gallery, lightbox].into(),
            None => gallery,
        }
    }

    fn update(&mut self, message: Message) -> Task<Action<Self::Message>> {
        match message {
            Message::Gallery(gallery_msg) => self.update_gallery(gallery_msg),
            Message::Lightbox(lightbox_msg) => return self.update_lightbox(lightbox_msg),
            Message::KeyBind(action) => return self.update(action.message()),
            Message::WindowResized { width, height } => {
                self.lightbox_view.set_window_size(Size::new(width, height));

                let ticket = self.gallery_view.schedule_resize(width);
                let delay = self.gallery_view.resize_delay();
                return cosmic::task::future(async move {
                    Message::ResizeSettled(debounce::elapsed(delay, ticket).await)
                });
            }
            Message::ResizeSettled(ticket) => {
                if self.gallery_view.settle_resize(ticket, &self.outcomes) {
                    tracing::debug!(
                        "resize settled at {}px",
                        self.gallery_view.container_width()
                    );
                }
            }
            Message::Cancelled => {}
        }

        Task::none()
    }

    fn subscription(&self) -> Subscription<Self::Message> {
        // Lightbox keys only while it is open
        let keys = if self.lightbox.is_open() {
            keyboard::on_key_press(key_press_handler)
        } else {
            Subscription::none()
        };

        Subscription::batch([
            keys,
            window::events().map(|(_, event)| {
                if let window::Event::Resized(size) = event {
                    Message::WindowResized {
                        width: size.width,
                        height: size.height,
                    }
                } else {
                    Message::Cancelled
                }
            }),
        ])
    }
}
