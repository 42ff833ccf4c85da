use iced::widget::{horizontal_space, pick_list, row, text};
use iced::{Alignment, Element};

use crate::state::columns::GridColumns;
use crate::Message;

pub fn view<'a>(columns: GridColumns) -> Element<'a, Message> {
    row![
        text("Responsive Image Gallery").size(28),
        horizontal_space(),
        pick_list(GridColumns::ALL, Some(columns), Message::ColumnsSelected),
    ]
    .spacing(20)
    .padding(20)
    .align_y(Alignment::Center)
    .into()
}
