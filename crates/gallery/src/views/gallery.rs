use crate::{
    fl,
    message::{LightboxMessage, Message},
};
use cosmic::{
    Element,
    iced::{Alignment, ContentFit, Length},
    theme,
    widget::{Id, column, container, icon, image, mouse_area, text},
};
use gallery_config::LayoutConfig;
use gallery_image::GalleryOutcome;
use gallery_types::LoadOutcome;
use gallery_widgets::masonry_grid;
use shared::{CellExtent, Debouncer, LoadingState, MasonryLayout, Ticket};
use std::time::Duration;

/// Padding around the grid, in pixels on each side
pub const GRID_PADDING: u16 = 16;

/// Masonry layout of the gallery and the resize handling that drives it.
#[derive(Debug)]
pub struct GalleryView {
    layout: LayoutConfig,
    masonry: Option<MasonryLayout>,
    container_width: f32,
    resize: Debouncer<f32>,
}

impl GalleryView {
    pub const SCROLL_ID: &'static str = "gallery-scroll";

    pub fn new(layout: LayoutConfig, resize_delay: Duration, window_width: f32) -> Self {
        Self {
            layout,
            masonry: None,
            container_width: container_width_for(window_width),
            resize: Debouncer::new(resize_delay),
        }
    }

    pub fn container_width(&self) -> f32 {
        self.container_width
    }

    pub fn masonry(&self) -> Option<&MasonryLayout> {
        self.masonry.as_ref()
    }

    pub fn resize_delay(&self) -> Duration {
        self.resize.delay()
    }

    /// Record a new window width. The layout only follows once the returned
    /// ticket settles.
    pub fn schedule_resize(&mut self, window_width: f32) -> Ticket {
        self.resize.schedule(window_width)
    }

    /// Apply the last scheduled width if `ticket` is still the newest one.
    pub fn settle_resize(&mut self, ticket: Ticket, outcomes: &[GalleryOutcome]) -> bool {
        let Some(window_width) = self.resize.settle(ticket) else {
            return false;
        };

        self.container_width = container_width_for(window_width);
        self.relayout(outcomes);
        true
    }

    /// Tear down the masonry engine and build a new one for the current width.
    pub fn relayout(&mut self, outcomes: &[GalleryOutcome]) {
        if let Some(masonry) = self.masonry.take() {
            masonry.destroy();
        }

        let width = self.container_width.max(0.0) as u32;
        let options = self.layout.masonry_options(width);
        let mut masonry = MasonryLayout::initialize(self.container_width, options);
        masonry.layout(&cells_for(outcomes, self.layout.placeholder_height));

        tracing::debug!(
            "gallery laid out at {width}px: {} columns of {}px",
            masonry.columns(),
            options.column_width
        );

        self.masonry = Some(masonry);
    }

    pub fn view<'a>(
        &'a self,
        loading: &'a LoadingState,
        outcomes: &'a [GalleryOutcome],
        interactive: bool,
    ) -> Element<'a, Message> {
        let spacing = theme::active().cosmic().spacing;

        if let Some(error) = loading.error_message() {
            return container(
                column()
                    .push(icon::from_name("dialog-error-symbolic").size(64))
                    .push(text(fl!("load-error", error = error.to_string())).size(16))
                    .spacing(spacing.space_m)
                    .align_x(Alignment::Center),
            )
            .center(Length::Fill)
            .into();
        }

        let Some(masonry) = self.masonry.as_ref().filter(|_| loading.is_ready()) else {
            return container(text(fl!("loading")))
                .center(Length::Fill)
                .into();
        };

        let cells: Vec<Element<'a, Message>> = outcomes.iter().map(cell).collect();

        masonry_grid(cells, masonry.placements(), masonry.content_height())
            .padding(GRID_PADDING)
            .interactive(interactive)
            .scrollable(Id::new(Self::SCROLL_ID))
            .into_element()
    }
}

/// Width available to the masonry engine inside a window of `window_width`.
pub fn container_width_for(window_width: f32) -> f32 {
    (window_width - f32::from(GRID_PADDING) * 2.0).max(0.0)
}

/// One masonry cell per outcome: natural size for images, fixed height for
/// placeholders.
pub fn cells_for(outcomes: &[GalleryOutcome], placeholder_height: f32) -> Vec<CellExtent> {
    outcomes
        .iter()
        .map(|outcome| match outcome.image() {
            Some(img) => CellExtent::Image {
                width: img.width,
                height: img.height,
            },
            None => CellExtent::Fixed(placeholder_height),
        })
        .collect()
}

fn cell(outcome: &GalleryOutcome) -> Element<'_, Message> {
    let content: Element<'_, Message> = match outcome {
        LoadOutcome::Loaded { image: img, .. } => image(img.handle.clone())
            .content_fit(ContentFit::Cover)
            .width(Length::Fill)
            .height(Length::Fill)
            .into(),
        LoadOutcome::Failed { .. } => placeholder(),
    };

    mouse_area(content).on_press(open_message(outcome)).into()
}

/// Pressing a cell opens the lightbox at its slot, placeholders included.
fn open_message(outcome: &GalleryOutcome) -> Message {
    Message::Lightbox(LightboxMessage::Open(outcome.index()))
}

pub fn placeholder<'a>() -> Element<'a, Message> {
    let spacing = theme::active().cosmic().spacing;

    container(
        column()
            .push(icon::from_name("image-missing-symbolic").size(48))
            .push(text(fl!("image-not-found")).size(14))
            .spacing(spacing.space_xs)
            .align_x(Alignment::Center),
    )
    .center(Length::Fill)
    .class(theme::Container::Card)
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use cosmic::widget::image::Handle;
    use gallery_image::LoadedImage;
    use gallery_types::GalleryEntry;
    use std::path::PathBuf;

    fn outcomes(failed: &[usize]) -> Vec<GalleryOutcome> {
        (0..9)
            .map(|index| {
                let entry = GalleryEntry::new(
                    format!("img/gallery/{:03}.jpg", index + 1),
                    format!("Photo {}", index + 1),
                    index,
                );
                if failed.contains(&index) {
                    LoadOutcome::Failed {
                        entry,
                        reason: "missing".into(),
                    }
                } else {
                    LoadOutcome::Loaded {
                        image: LoadedImage {
                            handle: Handle::from_rgba(1, 1, vec![0; 4]),
                            width: 350,
                            height: 263,
                            path: PathBuf::from(&entry.source),
                        },
                        entry,
                    }
                }
            })
            .collect()
    }

    fn view() -> GalleryView {
        GalleryView::new(LayoutConfig::default(), Duration::from_millis(250), 1200.0)
    }

    #[test]
    fn test_placeholders_keep_their_slot() {
        let cells = cells_for(&outcomes(&[3, 7]), 200.0);

        assert_eq!(cells.len(), 9);
        assert_eq!(cells[3], CellExtent::Fixed(200.0));
        assert_eq!(cells[7], CellExtent::Fixed(200.0));
        assert_eq!(
            cells.iter().filter(|c| matches!(c, CellExtent::Image { .. })).count(),
            7
        );
    }

    #[test]
    fn test_relayout_places_every_entry() {
        let outcomes = outcomes(&[]);
        let mut gallery = view();
        gallery.relayout(&outcomes);

        let masonry = gallery.masonry().expect("layout after relayout");
        assert_eq!(masonry.placements().len(), 9);
        // 1168px of content fits four 250px columns with 16px gutters
        assert_eq!(masonry.columns(), 4);
        assert_eq!(masonry.options().column_width, 280.0);
    }

    #[test]
    fn test_resize_burst_settles_once_with_last_width() {
        let outcomes = outcomes(&[]);
        let mut gallery = view();
        gallery.relayout(&outcomes);

        let tickets: Vec<Ticket> = [900.0, 1000.0, 1100.0]
            .into_iter()
            .map(|width| gallery.schedule_resize(width))
            .collect();

        assert!(!gallery.settle_resize(tickets[0], &outcomes));
        assert!(!gallery.settle_resize(tickets[1], &outcomes));
        assert!(gallery.settle_resize(tickets[2], &outcomes));
        assert_eq!(gallery.container_width(), 1100.0 - 32.0);

        // The newest ticket is spent
        assert!(!gallery.settle_resize(tickets[2], &outcomes));
    }

    #[test]
    fn test_placeholder_press_opens_lightbox() {
        let outcomes = outcomes(&[3]);

        assert!(matches!(
            open_message(&outcomes[3]),
            Message::Lightbox(LightboxMessage::Open(3))
        ));
        assert!(matches!(
            open_message(&outcomes[4]),
            Message::Lightbox(LightboxMessage::Open(4))
        ));
    }

    #[test]
    fn test_narrow_window_single_column() {
        let outcomes = outcomes(&[0]);
        let mut gallery = GalleryView::new(LayoutConfig::default(), Duration::ZERO, 300.0);
        gallery.relayout(&outcomes);

        let masonry = gallery.masonry().expect("layout after relayout");
        assert_eq!(masonry.columns(), 1);
        assert_eq!(masonry.placements()[0].height, 200.0);
    }
}
