// SPDX-License-Identifier: MPL-2.0
//! List pane: index-labelled filenames; clicking one selects it and switches
//! back to the Single view.

use crate::app::Message;
use crate::gallery::ViewSnapshot;
use iced::{
    widget::{button, scrollable, Column, Row, Text},
    Element, Length,
};

/// Renders the List view.
pub fn view<'a>(snapshot: &'a ViewSnapshot, current_index: Option<usize>) -> Element<'a, Message> {
    let mut rows = Column::new().spacing(2).padding(10);

    for entry in &snapshot.entries {
        let marker = if current_index == Some(entry.index) {
            ">"
        } else {
            " "
        };
        let label = Row::new()
            .spacing(10)
            .push(Text::new(format!("{marker} {:>4}", entry.index + 1)).size(14))
            .push(Text::new(entry.name.clone()).size(14));

        rows = rows.push(
            button(label)
                .style(button::text)
                .padding([4.0, 8.0])
                .width(Length::Fill)
                .on_press(Message::SelectImage(entry.index)),
        );
    }

    scrollable(rows).width(Length::Fill).height(Length::Fill).into()
}
