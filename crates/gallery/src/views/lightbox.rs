use crate::{
    fl,
    message::{LightboxMessage, Message},
    views::gallery::placeholder,
};
use cosmic::{
    Element,
    iced::{Alignment, ContentFit, Length, Size},
    theme,
    widget::{
        button, column, container, horizontal_space, icon, image, image::Handle, row, text,
    },
};
use gallery_image::{GalleryOutcome, ImageCache};
use gallery_nav::Lightbox;
use gallery_types::LoadOutcome;
use gallery_widgets::backdrop;

/// Share of the window the lightbox panel covers
const PANEL_FRACTION: f32 = 0.9;

#[derive(Debug, Clone, Copy)]
pub struct LightboxView {
    window_size: Size,
}

impl LightboxView {
    pub fn new(window_size: Size) -> Self {
        Self { window_size }
    }

    pub fn set_window_size(&mut self, window_size: Size) {
        self.window_size = window_size;
    }

    /// Panel size, leaving a margin of backdrop that closes the lightbox.
    pub fn panel_size(&self) -> Size {
        Size::new(
            self.window_size.width * PANEL_FRACTION,
            self.window_size.height * PANEL_FRACTION,
        )
    }

    pub fn view<'a>(
        &self,
        lightbox: &Lightbox,
        outcomes: &'a [GalleryOutcome],
        cache: &ImageCache,
    ) -> Option<Element<'a, Message>> {
        let index = lightbox.current()?;
        let outcome = outcomes.get(index)?;
        let spacing = theme::active().cosmic().spacing;
        let (current, total) = lightbox.state().counter()?;

        let close_btn = button::icon(icon::from_name("window-close-symbolic"))
            .on_press(Message::Lightbox(LightboxMessage::Close))
            .tooltip(fl!("close"))
            .padding(spacing.space_xs)
            .class(theme::Button::Destructive);

        let header = row()
            .push(text::body(fl!(
                "counter",
                current = current.to_string(),
                total = total.to_string()
            )))
            .push(horizontal_space())
            .push(close_btn)
            .align_y(Alignment::Center)
            .width(Length::Fill)
            .padding(spacing.space_xs);

        let prev_btn = container(
            button::icon(icon::from_name("go-previous-symbolic"))
                .on_press(Message::Lightbox(LightboxMessage::PREVIOUS))
                .tooltip(fl!("previous")),
        )
        .width(Length::Shrink)
        .height(Length::Fill)
        .center_y(Length::Fill);

        let next_btn = container(
            button::icon(icon::from_name("go-next-symbolic"))
                .on_press(Message::Lightbox(LightboxMessage::NEXT))
                .tooltip(fl!("next")),
        )
        .width(Length::Shrink)
        .height(Length::Fill)
        .center_y(Length::Fill);

        let image_area: Element<'a, Message> = match panel_image(outcome, cache) {
            Some(handle) => container(
                image(handle)
                    .content_fit(ContentFit::Contain)
                    .opacity(lightbox.opacity())
                    .width(Length::Fill)
                    .height(Length::Fill),
            )
            .padding(spacing.space_xs)
            .width(Length::Fill)
            .height(Length::Fill)
            .into(),
            None => placeholder(),
        };

        let caption = container(text::body(outcome.entry().caption.as_str()))
            .center_x(Length::Fill)
            .padding(spacing.space_xs);

        let content_row = row()
            .push(prev_btn)
            .push(image_area)
            .push(next_btn)
            .width(Length::Fill)
            .height(Length::Fill);

        let panel_size = self.panel_size();
        let panel = container(
            column()
                .push(header)
                .push(content_row)
                .push(caption)
                .width(Length::Fill)
                .height(Length::Fill),
        )
        .width(Length::Fixed(panel_size.width))
        .height(Length::Fixed(panel_size.height))
        .class(theme::Container::Dialog);

        Some(
            backdrop(panel)
                .on_dismiss(Message::Lightbox(LightboxMessage::Close))
                .on_touch_start(|x| Message::Lightbox(LightboxMessage::TouchStart(x)))
                .on_touch_end(|x| Message::Lightbox(LightboxMessage::TouchEnd(x)))
                .on_touch_lost(Message::Lightbox(LightboxMessage::TouchLost))
                .into(),
        )
    }
}

/// Image shown in the panel, or `None` when the placeholder takes its place.
/// The thumbnail stands in until the full image is cached.
fn panel_image(outcome: &GalleryOutcome, cache: &ImageCache) -> Option<Handle> {
    match outcome {
        LoadOutcome::Loaded { image: thumb, .. } => Some(
            cache
                .get(&thumb.path)
                .map(|full| full.handle)
                .unwrap_or_else(|| thumb.handle.clone()),
        ),
        LoadOutcome::Failed { .. } => None,
    }
}
