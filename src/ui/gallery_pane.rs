// SPDX-License-Identifier: MPL-2.0
//! Single-image gallery pane: the current image fitted to the viewport with
//! filename and navigation controls underneath.

use crate::app::Message;
use crate::gallery::ViewSnapshot;
use crate::media::ImageData;
use iced::{
    alignment,
    widget::{button, Column, Container, Image, Row, Text},
    ContentFit, Element, Length,
};

/// Renders the Single view.
///
/// `image` is the decoded current image, if loading succeeded. A decode
/// failure renders an explanatory blank while keeping filename and counter,
/// matching the policy that broken files stay in the list.
pub fn view<'a>(
    snapshot: &'a ViewSnapshot,
    image: Option<&'a ImageData>,
    load_error: Option<&'a str>,
) -> Element<'a, Message> {
    let picture: Element<'a, Message> = match (image, load_error) {
        (Some(data), _) => Image::new(data.handle.clone())
            .content_fit(ContentFit::Contain)
            .width(Length::Fill)
            .height(Length::Fill)
            .into(),
        (None, Some(_)) => Container::new(Text::new("Could not display this image").size(16))
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(alignment::Horizontal::Center)
            .align_y(alignment::Vertical::Center)
            .into(),
        (None, None) => Container::new(Text::new(""))
            .width(Length::Fill)
            .height(Length::Fill)
            .into(),
    };

    let filename = Text::new(snapshot.filename.clone().unwrap_or_default()).size(12);

    let prev_button = button(Text::new("Previous"))
        .padding([8.0, 20.0])
        .on_press_maybe(snapshot.can_prev.then_some(Message::PrevImage));

    let next_button = button(Text::new("Next"))
        .padding([8.0, 20.0])
        .on_press_maybe(snapshot.can_next.then_some(Message::NextImage));

    let delete_button = button(Text::new("Delete"))
        .padding([8.0, 20.0])
        .style(button::danger)
        .on_press_maybe(snapshot.can_delete.then_some(Message::DeleteRequested));

    let controls = Row::new()
        .spacing(10)
        .push(prev_button)
        .push(next_button)
        .push(delete_button);

    Column::new()
        .spacing(10)
        .padding(15)
        .align_x(alignment::Horizontal::Center)
        .push(picture)
        .push(filename)
        .push(controls)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
