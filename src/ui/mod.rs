/// View builders
///
/// - `header.rs` - title and column selector
/// - `grid.rs` - image tiles and the trailing load sentinel
/// - `lightbox.rs` - enlarged overlay and its key bindings

pub mod grid;
pub mod header;
pub mod lightbox;

use iced::widget::{button, container, stack};
use iced::{Element, Length};

use crate::Message;

/// Float the "Top" button over the bottom-right corner of `base`
pub fn with_scroll_top<'a>(base: Element<'a, Message>, visible: bool) -> Element<'a, Message> {
    if !visible {
        return base;
    }

    let top = container(
        button("⬆ Top")
            .on_press(Message::ScrollToTop)
            .padding(10),
    )
    .padding(24)
    .align_right(Length::Fill)
    .align_bottom(Length::Fill);

    stack![base, top].into()
}
