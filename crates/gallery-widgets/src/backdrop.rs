//! Backdrop - dimmed full-window layer behind the lightbox panel
//!
//! The panel is centered and receives events first. Presses that land outside
//! it fire `on_dismiss`. Every mouse event over the backdrop is captured so the
//! gallery underneath neither scrolls nor reacts to clicks. Touch press/lift
//! positions are reported for swipe detection.

use cosmic::{
    Element, Renderer,
    iced::{
        Color, Length, Point, Rectangle, Size,
        advanced::{
            Clipboard, Layout, Shell, Widget,
            layout::{Limits, Node},
            overlay,
            renderer::{self as iced_renderer, Quad, Renderer as QuadRenderer},
            widget::{Operation, Tree},
        },
        event::{Event, Status},
        mouse::{self, Button, Cursor},
        touch,
    },
};

pub struct Backdrop<'a, M> {
    content: Element<'a, M>,
    color: Color,
    on_dismiss: Option<M>,
    on_touch_start: Option<Box<dyn Fn(f32) -> M + 'a>>,
    on_touch_end: Option<Box<dyn Fn(f32) -> M + 'a>>,
    on_touch_lost: Option<M>,
}

pub fn backdrop<'a, M>(content: impl Into<Element<'a, M>>) -> Backdrop<'a, M> {
    Backdrop {
        content: content.into(),
        color: Color::from_rgba(0.0, 0.0, 0.0, 0.85),
        on_dismiss: None,
        on_touch_start: None,
        on_touch_end: None,
        on_touch_lost: None,
    }
}

impl<'a, M: Clone + 'static> Backdrop<'a, M> {
    /// Message for a press outside the content panel
    pub fn on_dismiss(mut self, message: M) -> Self {
        self.on_dismiss = Some(message);
        self
    }

    /// Horizontal position where a finger touched down
    pub fn on_touch_start<F>(mut self, f: F) -> Self
    where
        F: Fn(f32) -> M + 'a,
    {
        self.on_touch_start = Some(Box::new(f));
        self
    }

    /// Horizontal position where the finger was lifted
    pub fn on_touch_end<F>(mut self, f: F) -> Self
    where
        F: Fn(f32) -> M + 'a,
    {
        self.on_touch_end = Some(Box::new(f));
        self
    }

    pub fn on_touch_lost(mut self, message: M) -> Self {
        self.on_touch_lost = Some(message);
        self
    }
}

/// Whether a press at `position` lands on the dimmed area around `panel`.
fn dismisses(bounds: Rectangle, panel: Rectangle, position: Point) -> bool {
    bounds.contains(position) && !panel.contains(position)
}

impl<'a, M: Clone + 'static> Widget<M, cosmic::Theme, Renderer> for Backdrop<'a, M> {
    fn children(&self) -> Vec<Tree> {
        vec![Tree::new(&self.content)]
    }

    fn diff(&mut self, tree: &mut Tree) {
        tree.diff_children(std::slice::from_mut(&mut self.content));
    }

    fn size(&self) -> Size<Length> {
        Size::new(Length::Fill, Length::Fill)
    }

    fn layout(&self, tree: &mut Tree, renderer: &Renderer, limits: &Limits) -> Node {
        let limits = limits.width(Length::Fill).height(Length::Fill);
        let size = limits.max();

        let content = self
            .content
            .as_widget()
            .layout(&mut tree.children[0], renderer, &limits.loose());
        let content_size = content.size();

        let content = content.move_to(Point::new(
            ((size.width - content_size.width) / 2.0).max(0.0),
            ((size.height - content_size.height) / 2.0).max(0.0),
        ));

        Node::with_children(size, vec![content])
    }

    fn operate(
        &self,
        tree: &mut Tree,
        layout: Layout<'_>,
        renderer: &Renderer,
        operation: &mut dyn Operation,
    ) {
        if let Some(content_layout) = layout.children().next() {
            self.content.as_widget().operate(
                &mut tree.children[0],
                content_layout,
                renderer,
                operation,
            );
        }
    }

    fn on_event(
        &mut self,
        tree: &mut Tree,
        event: Event,
        layout: Layout<'_>,
        cursor: Cursor,
        renderer: &Renderer,
        clipboard: &mut dyn Clipboard,
        shell: &mut Shell<'_, M>,
        viewport: &Rectangle,
    ) -> Status {
        let bounds = layout.bounds();
        let Some(content_layout) = layout.children().next() else {
            return Status::Ignored;
        };

        // Swipes are tracked across the whole lightbox, buttons included
        match &event {
            Event::Touch(touch::Event::FingerPressed { position, .. }) => {
                if let Some(ref on_touch_start) = self.on_touch_start {
                    shell.publish(on_touch_start(position.x));
                }
            }
            Event::Touch(touch::Event::FingerLifted { position, .. }) => {
                if let Some(ref on_touch_end) = self.on_touch_end {
                    shell.publish(on_touch_end(position.x));
                }
            }
            Event::Touch(touch::Event::FingerLost { .. }) => {
                if let Some(ref on_touch_lost) = self.on_touch_lost {
                    shell.publish(on_touch_lost.clone());
                }
            }
            _ => {}
        }

        let status = self.content.as_widget_mut().on_event(
            &mut tree.children[0],
            event.clone(),
            content_layout,
            cursor,
            renderer,
            clipboard,
            shell,
            viewport,
        );

        if status == Status::Captured {
            return status;
        }

        match event {
            Event::Mouse(mouse::Event::ButtonPressed(Button::Left)) => {
                if let Some(position) = cursor.position()
                    && dismisses(bounds, content_layout.bounds(), position)
                    && let Some(ref on_dismiss) = self.on_dismiss
                {
                    shell.publish(on_dismiss.clone());
                }
                Status::Captured
            }
            Event::Mouse(_) | Event::Touch(_) if cursor.is_over(bounds) => Status::Captured,
            _ => Status::Ignored,
        }
    }

    fn mouse_interaction(
        &self,
        tree: &Tree,
        layout: Layout<'_>,
        cursor: Cursor,
        viewport: &Rectangle,
        renderer: &Renderer,
    ) -> mouse::Interaction {
        let interaction = layout
            .children()
            .next()
            .map(|content_layout| {
                self.content.as_widget().mouse_interaction(
                    &tree.children[0],
                    content_layout,
                    cursor,
                    viewport,
                    renderer,
                )
            })
            .unwrap_or(mouse::Interaction::None);

        if interaction == mouse::Interaction::None && cursor.is_over(layout.bounds()) {
            mouse::Interaction::Idle
        } else {
            interaction
        }
    }

    fn draw(
        &self,
        tree: &Tree,
        renderer: &mut Renderer,
        theme: &cosmic::Theme,
        style: &iced_renderer::Style,
        layout: Layout<'_>,
        cursor: Cursor,
        viewport: &Rectangle,
    ) {
        renderer.fill_quad(
            Quad {
                bounds: layout.bounds(),
                border: cosmic::iced::Border::default(),
                shadow: Default::default(),
            },
            self.color,
        );

        if let Some(content_layout) = layout.children().next() {
            self.content.as_widget().draw(
                &tree.children[0],
                renderer,
                theme,
                style,
                content_layout,
                cursor,
                viewport,
            );
        }
    }

    fn overlay<'b>(
        &'b mut self,
        tree: &'b mut Tree,
        layout: Layout<'_>,
        renderer: &Renderer,
        translation: cosmic::iced::Vector,
    ) -> Option<overlay::Element<'b, M, cosmic::Theme, Renderer>> {
        let content_layout = layout.children().next()?;
        self.content.as_widget_mut().overlay(
            &mut tree.children[0],
            content_layout,
            renderer,
            translation,
        )
    }
}

impl<'a, M: Clone + 'static> From<Backdrop<'a, M>> for Element<'a, M> {
    fn from(backdrop: Backdrop<'a, M>) -> Self {
        Element::new(backdrop)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn window() -> Rectangle {
        Rectangle::new(Point::ORIGIN, Size::new(1200.0, 800.0))
    }

    fn panel() -> Rectangle {
        Rectangle::new(Point::new(60.0, 40.0), Size::new(1080.0, 720.0))
    }

    #[test]
    fn test_press_on_panel_keeps_lightbox() {
        assert!(!dismisses(window(), panel(), Point::new(600.0, 400.0)));
        assert!(!dismisses(window(), panel(), Point::new(61.0, 41.0)));
    }

    #[test]
    fn test_press_on_backdrop_dismisses() {
        assert!(dismisses(window(), panel(), Point::new(20.0, 400.0)));
        assert!(dismisses(window(), panel(), Point::new(600.0, 790.0)));
    }

    #[test]
    fn test_press_outside_window_ignored() {
        assert!(!dismisses(window(), panel(), Point::new(1300.0, 400.0)));
        assert!(!dismisses(window(), panel(), Point::new(-5.0, -5.0)));
    }
}
