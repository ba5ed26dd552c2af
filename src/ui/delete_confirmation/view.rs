// SPDX-License-Identifier: MPL-2.0
//! Modal rendering of the delete confirmation dialog.

use super::{Message, State};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use iced::widget::{button, center, mouse_area, opaque, Column, Container, Row, Text};
use iced::{alignment, Element, Length};

/// Contextual data needed to render the dialog.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub state: &'a State,
}

/// Render the dialog over a dimmed backdrop, or nothing when closed.
///
/// Clicking the backdrop cancels, like the cancel button.
pub fn view<'a>(ctx: ViewContext<'a>) -> Option<Element<'a, Message>> {
    if !ctx.state.is_open() {
        return None;
    }

    let i18n = ctx.i18n;
    let state = ctx.state;

    let title = Row::new()
        .spacing(spacing::XS)
        .align_y(alignment::Vertical::Center)
        .push(icons::tinted(
            icons::sized(icons::trash(), sizing::ICON_MD),
            palette::ERROR_500,
        ))
        .push(Text::new(i18n.tr("delete-dialog-title")).size(typography::TITLE_SM));

    let body = Text::new(i18n.tr_with_args("delete-dialog-body", &[("label", state.label())]))
        .size(typography::BODY);

    let cancel_button = button(Text::new(i18n.tr("delete-dialog-cancel")).size(typography::BODY))
        .padding([spacing::XS, spacing::MD])
        .style(styles::button::ghost)
        .on_press_maybe((!state.is_submitting()).then_some(Message::Cancel));

    let confirm_button = button(Text::new(i18n.tr(state.confirm_label_key())).size(typography::BODY))
        .padding([spacing::XS, spacing::MD])
        .style(styles::button::danger)
        .on_press_maybe(state.confirm_enabled().then_some(Message::Confirm));

    let actions = Container::new(
        Row::new()
            .spacing(spacing::SM)
            .push(cancel_button)
            .push(confirm_button),
    )
    .width(Length::Fill)
    .align_x(alignment::Horizontal::Right);

    let dialog = Container::new(
        Column::new()
            .spacing(spacing::MD)
            .push(title)
            .push(body)
            .push(actions),
    )
    .width(Length::Fixed(sizing::DIALOG_WIDTH))
    .padding(spacing::LG)
    .style(styles::container::card);

    let backdrop = mouse_area(
        center(opaque(dialog))
            .width(Length::Fill)
            .height(Length::Fill)
            .style(styles::overlay::backdrop),
    )
    .on_press(Message::Cancel);

    Some(opaque(backdrop))
}
