//! MasonryGrid - positions gallery cells at masonry placements
//!
//! The grid does no packing of its own. The caller runs the masonry engine for
//! the current container width and hands over one placement per cell; the
//! grid lays each cell out at its placement's size and offset.

use cosmic::{
    Element, Renderer,
    iced::{
        Length, Padding, Point, Rectangle, Size,
        advanced::{
            Clipboard, Layout, Shell, Widget,
            layout::{Limits, Node},
            overlay, renderer as iced_renderer,
            widget::{Operation, Tree},
        },
        event::{self, Event},
        mouse::{self, Cursor},
    },
    widget::{Id, container, scrollable},
};
use shared::Placement;

pub struct MasonryGrid<'a, M> {
    cells: Vec<Element<'a, M>>,
    placements: Vec<Placement>,
    content_height: f32,
    padding: Padding,
    width: Length,
    interactive: bool,
    scrollable_id: Option<Id>,
}

/// Build a grid from cells and their placements, matched by position.
pub fn masonry_grid<'a, M>(
    cells: Vec<Element<'a, M>>,
    placements: &[Placement],
    content_height: f32,
) -> MasonryGrid<'a, M> {
    MasonryGrid {
        cells,
        placements: placements.to_vec(),
        content_height,
        padding: Padding::ZERO,
        width: Length::Fill,
        interactive: true,
        scrollable_id: None,
    }
}

impl<'a, M: Clone + 'static> MasonryGrid<'a, M> {
    pub fn padding(mut self, padding: impl Into<Padding>) -> Self {
        self.padding = padding.into();
        self
    }

    pub fn width(mut self, width: impl Into<Length>) -> Self {
        self.width = width.into();
        self
    }

    /// Stop forwarding input to the cells (while the lightbox is open)
    pub fn interactive(mut self, interactive: bool) -> Self {
        self.interactive = interactive;
        self
    }

    pub fn scrollable(mut self, id: Id) -> Self {
        self.scrollable_id = Some(id);
        self
    }

    pub fn into_element(self) -> Element<'a, M> {
        if let Some(scroll_id) = self.scrollable_id.clone() {
            scrollable(container(self).padding(0))
                .id(scroll_id)
                .width(Length::Fill)
                .height(Length::Fill)
                .into()
        } else {
            self.into()
        }
    }

    fn placed(&self) -> usize {
        self.cells.len().min(self.placements.len())
    }
}

impl<'a, M: Clone + 'static> Widget<M, cosmic::Theme, Renderer> for MasonryGrid<'a, M> {
    fn children(&self) -> Vec<Tree> {
        self.cells.iter().map(Tree::new).collect()
    }

    fn diff(&mut self, tree: &mut Tree) {
        tree.diff_children(&mut self.cells);
    }

    fn size(&self) -> Size<Length> {
        Size::new(self.width, Length::Shrink)
    }

    fn layout(&self, tree: &mut Tree, renderer: &Renderer, limits: &Limits) -> Node {
        let limits = limits.width(self.width).height(Length::Shrink);

        if self.placed() == 0 {
            return Node::new(limits.resolve(self.width, Length::Shrink, Size::ZERO));
        }

        let child_nodes: Vec<Node> = tree
            .children
            .iter_mut()
            .zip(self.cells.iter())
            .zip(self.placements.iter())
            .map(|((child_tree, cell), placement)| {
                let cell_size = Size::new(placement.width, placement.height);
                let cell_limits = Limits::new(cell_size, cell_size);

                cell.as_widget()
                    .layout(child_tree, renderer, &cell_limits)
                    .move_to(Point::new(
                        placement.x + self.padding.left,
                        placement.y + self.padding.top,
                    ))
            })
            .collect();

        let content_width = self
            .placements
            .iter()
            .map(|placement| placement.x + placement.width)
            .fold(0.0_f32, f32::max);

        let content_size = Size::new(
            content_width + self.padding.horizontal(),
            self.content_height + self.padding.vertical(),
        );

        Node::with_children(
            limits.resolve(self.width, Length::Shrink, content_size),
            child_nodes,
        )
    }

    fn operate(
        &self,
        tree: &mut Tree,
        layout: Layout<'_>,
        renderer: &Renderer,
        operation: &mut dyn Operation,
    ) {
        for ((cell, state), layout) in self
            .cells
            .iter()
            .zip(&mut tree.children)
            .zip(layout.children())
        {
            cell.as_widget().operate(state, layout, renderer, operation);
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
    ) -> event::Status {
        if !self.interactive {
            return event::Status::Ignored;
        }

        let mut status = event::Status::Ignored;

        for ((cell, state), layout) in self
            .cells
            .iter_mut()
            .zip(&mut tree.children)
            .zip(layout.children())
        {
            let cell_status = cell.as_widget_mut().on_event(
                state,
                event.clone(),
                layout,
                cursor,
                renderer,
                clipboard,
                shell,
                viewport,
            );

            if cell_status == event::Status::Captured {
                status = event::Status::Captured;
            }
        }

        status
    }

    fn mouse_interaction(
        &self,
        tree: &Tree,
        layout: Layout<'_>,
        cursor: Cursor,
        viewport: &Rectangle,
        renderer: &Renderer,
    ) -> mouse::Interaction {
        if !self.interactive {
            return mouse::Interaction::None;
        }

        for ((cell, state), layout) in self
            .cells
            .iter()
            .zip(&tree.children)
            .zip(layout.children())
        {
            let interaction = cell
                .as_widget()
                .mouse_interaction(state, layout, cursor, viewport, renderer);

            if interaction != mouse::Interaction::None {
                return interaction;
            }
        }

        mouse::Interaction::None
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
        // Cells below the fold are skipped
        for ((cell, state), layout) in self
            .cells
            .iter()
            .zip(&tree.children)
            .zip(layout.children())
        {
            if layout.bounds().intersects(viewport) {
                cell.as_widget()
                    .draw(state, renderer, theme, style, layout, cursor, viewport);
            }
        }
    }

    fn overlay<'b>(
        &'b mut self,
        tree: &'b mut Tree,
        layout: Layout<'_>,
        renderer: &Renderer,
        translation: cosmic::iced::Vector,
    ) -> Option<overlay::Element<'b, M, cosmic::Theme, Renderer>> {
        overlay::from_children(&mut self.cells, tree, layout, renderer, translation)
    }
}

impl<'a, M: Clone + 'static> From<MasonryGrid<'a, M>> for Element<'a, M> {
    fn from(grid: MasonryGrid<'a, M>) -> Self {
        Element::new(grid)
    }
}
