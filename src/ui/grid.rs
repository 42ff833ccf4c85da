/// Image grid
///
/// Tiles are laid out in rows of `GridColumns::count()` equal-width
/// tracks; a short last row is padded with empty space so its tiles keep
/// the same width as the rows above.
use iced::widget::{center, column, container, image, mouse_area, text, Column, Row, Space};
use iced::{ContentFit, Element, Length};

use crate::state::candidates::ImageId;
use crate::state::thumbnails::Slot;
use crate::state::viewport::{GRID_PADDING, GRID_SPACING, SENTINEL_HEIGHT};
use crate::state::GalleryState;
use crate::Message;

pub fn view<'a>(state: &'a GalleryState) -> Element<'a, Message> {
    let columns = state.columns.count();
    let tile_height = state.columns.tile_height();
    let ids: Vec<ImageId> = state.loader.realized().collect();

    let rows = ids
        .chunks(columns)
        .enumerate()
        .map(|(row_index, chunk)| -> Element<'a, Message> {
            let mut cells: Vec<Element<'a, Message>> = chunk
                .iter()
                .enumerate()
                .map(|(col, id)| {
                    tile(state.thumbnails.get(*id), row_index * columns + col, tile_height)
                })
                .collect();

            while cells.len() < columns {
                cells.push(
                    Space::new(Length::FillPortion(1), Length::Fixed(tile_height)).into(),
                );
            }

            Row::with_children(cells).spacing(GRID_SPACING).into()
        });

    column![Column::with_children(rows).spacing(GRID_SPACING), sentinel()]
        .spacing(GRID_SPACING)
        .padding(GRID_PADDING)
        .into()
}

fn tile<'a>(slot: Option<&Slot>, index: usize, height: f32) -> Element<'a, Message> {
    let content: Element<'a, Message> = match slot {
        Some(Slot::Ready(handle)) => image(handle.clone())
            .content_fit(ContentFit::Cover)
            .width(Length::Fill)
            .height(Length::Fill)
            .into(),
        Some(Slot::Failed) => Space::new(Length::Fill, Length::Fill).into(),
        Some(Slot::Loading) | None => center(text("…").size(18)).into(),
    };

    mouse_area(
        container(content)
            .width(Length::FillPortion(1))
            .height(Length::Fixed(height))
            .clip(true),
    )
    .on_press(Message::OpenLightbox(index))
    .into()
}

/// Trailing marker whose visibility drives loading
fn sentinel<'a>() -> Element<'a, Message> {
    container(text("More image ...").size(16))
        .center_x(Length::Fill)
        .center_y(Length::Fixed(SENTINEL_HEIGHT))
        .into()
}
