/// Enlarged-image overlay
use iced::keyboard::key::Named;
use iced::keyboard::Key;
use iced::widget::{center, container, image, mouse_area, opaque, stack, text};
use iced::{Color, ContentFit, Element, Length, Theme};

use crate::state::lightbox::NavKey;
use crate::state::thumbnails::Slot;
use crate::state::GalleryState;
use crate::Message;

/// Draw the lightbox over `base` when an item is enlarged.
/// Any click on the overlay closes it.
pub fn view<'a>(base: Element<'a, Message>, state: &'a GalleryState) -> Element<'a, Message> {
    let Some(id) = state.enlarged() else {
        return base;
    };

    let picture: Element<'a, Message> = match state.thumbnails.get(id) {
        Some(Slot::Ready(handle)) => image(handle.clone())
            .content_fit(ContentFit::Contain)
            .width(Length::Fill)
            .height(Length::Fill)
            .into(),
        _ => text(format!("#{}", id)).size(24).into(),
    };

    let overlay = mouse_area(
        container(center(picture).padding(40))
            .width(Length::Fill)
            .height(Length::Fill)
            .style(backdrop),
    )
    .on_press(Message::CloseLightbox);

    stack![base, opaque(overlay)].into()
}

fn backdrop(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Color::from_rgba(0.0, 0.0, 0.0, 0.85).into()),
        ..container::Style::default()
    }
}

/// Lightbox binding for a key, if any
pub fn nav_key(key: &Key) -> Option<NavKey> {
    match key {
        Key::Named(Named::ArrowRight) => Some(NavKey::Next),
        Key::Named(Named::ArrowLeft) => Some(NavKey::Prev),
        Key::Named(Named::Escape) => Some(NavKey::Close),
        _ => None,
    }
}
