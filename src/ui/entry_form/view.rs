// SPDX-License-Identifier: MPL-2.0
//! Rendering of the new entry form.

use super::{Message, State};
use crate::i18n::fluent::I18n;
use crate::journal::{Mood, MoodRating};
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, scrollable, text_input, Column, Container, Row, Text};
use iced::{alignment, Element, Length, Theme};

/// Contextual data needed to render the form.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub state: &'a State,
}

type ButtonStyle = fn(&Theme, button::Status) -> button::Style;

fn choice_style(selected: bool) -> ButtonStyle {
    if selected {
        styles::button::primary
    } else {
        styles::button::ghost
    }
}

/// Render the form screen.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let i18n = ctx.i18n;
    let state = ctx.state;

    let date = labeled(
        i18n.tr("entry-form-date"),
        text_input(&i18n.tr("entry-form-date-hint"), state.date())
            .on_input(Message::DateChanged)
            .padding(spacing::XS)
            .into(),
    );

    let moods = Mood::ALL.chunks(4).fold(Column::new().spacing(spacing::XXS), |column, chunk| {
        column.push(chunk.iter().fold(Row::new().spacing(spacing::XXS), |row, &mood| {
            row.push(
                button(Text::new(i18n.tr(mood.i18n_key())).size(typography::BODY_SM))
                    .padding([spacing::XXS, spacing::SM])
                    .style(choice_style(state.mood() == Some(mood)))
                    .on_press(Message::MoodSelected(mood)),
            )
        }))
    });
    let mood = labeled(i18n.tr("entry-form-mood"), moods.into());

    let ratings = (MoodRating::MIN..=MoodRating::MAX).fold(
        Row::new().spacing(spacing::XXS),
        |row, rating| {
            row.push(
                button(Text::new(i18n.tr(&format!("rating-{rating}"))).size(typography::BODY_SM))
                    .padding([spacing::XXS, spacing::SM])
                    .style(choice_style(state.rating() == Some(rating)))
                    .on_press(Message::RatingSelected(rating)),
            )
        },
    );
    let rating = labeled(i18n.tr("entry-form-rating"), ratings.into());

    let title = labeled(
        i18n.tr("entry-form-title-label"),
        text_input(&i18n.tr("entry-form-title-placeholder"), state.title())
            .on_input(Message::TitleChanged)
            .padding(spacing::XS)
            .into(),
    );

    let content = labeled(
        i18n.tr("entry-form-content"),
        text_input("", state.content())
            .on_input(Message::ContentChanged)
            .padding(spacing::XS)
            .into(),
    );

    let placeholder = i18n.tr("entry-form-gratitude-placeholder");
    let gratitude_inputs = state.gratitude().iter().enumerate().fold(
        Column::new().spacing(spacing::XXS),
        |column, (slot, item)| {
            column.push(
                text_input(&placeholder, item)
                    .on_input(move |value| Message::GratitudeChanged(slot, value))
                    .padding(spacing::XS),
            )
        },
    );
    let gratitude = labeled(i18n.tr("entry-form-gratitude"), gratitude_inputs.into());

    let errors = state.errors().iter().fold(
        Column::new().spacing(spacing::XXS),
        |column, error| {
            column.push(
                Text::new(i18n.tr(error.i18n_key()))
                    .size(typography::BODY_SM)
                    .color(palette::ERROR_500),
            )
        },
    );

    let actions = Container::new(
        Row::new()
            .spacing(spacing::SM)
            .push(
                button(Text::new(i18n.tr("entry-form-cancel")).size(typography::BODY))
                    .padding([spacing::XS, spacing::MD])
                    .style(styles::button::ghost)
                    .on_press(Message::Cancel),
            )
            .push(
                button(Text::new(i18n.tr("entry-form-save")).size(typography::BODY))
                    .padding([spacing::XS, spacing::MD])
                    .style(styles::button::primary)
                    .on_press(Message::Save),
            ),
    )
    .width(Length::Fill)
    .align_x(alignment::Horizontal::Right);

    let form = Column::new()
        .spacing(spacing::MD)
        .max_width(sizing::CONTENT_MAX_WIDTH)
        .push(Text::new(i18n.tr("entry-form-heading")).size(typography::TITLE_MD))
        .push(date)
        .push(mood)
        .push(rating)
        .push(title)
        .push(content)
        .push(gratitude)
        .push(errors)
        .push(actions);

    Container::new(scrollable(
        Container::new(form)
            .width(Length::Fill)
            .align_x(alignment::Horizontal::Center)
            .padding(spacing::LG),
    ))
    .width(Length::Fill)
    .height(Length::Fill)
    .into()
}

fn labeled<'a>(label: String, field: Element<'a, Message>) -> Element<'a, Message> {
    Column::new()
        .spacing(spacing::XXS)
        .push(Text::new(label).size(typography::CAPTION))
        .push(field)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::ui::entry_form::{update, FieldError};

    #[test]
    fn every_form_string_is_translated() {
        let i18n = I18n::new(Some("en-US".into()), &Config::default());
        let keys = [
            "entry-form-heading",
            "entry-form-date",
            "entry-form-date-hint",
            "entry-form-mood",
            "entry-form-rating",
            "entry-form-title-label",
            "entry-form-title-placeholder",
            "entry-form-content",
            "entry-form-gratitude",
            "entry-form-gratitude-placeholder",
            "entry-form-cancel",
            "entry-form-save",
        ];
        for key in keys {
            assert!(!i18n.tr(key).starts_with("MISSING"), "{key} is missing");
        }
        for rating in MoodRating::MIN..=MoodRating::MAX {
            assert!(!i18n.tr(&format!("rating-{rating}")).starts_with("MISSING"));
        }
    }

    #[test]
    fn error_messages_are_translated() {
        let i18n = I18n::new(Some("fr".into()), &Config::default());
        for error in [
            FieldError::InvalidDate,
            FieldError::MissingMood,
            FieldError::InvalidRating,
            FieldError::MissingTitle,
            FieldError::TitleTooLong,
            FieldError::MissingContent,
            FieldError::GratitudeTooLong,
        ] {
            assert!(!i18n.tr(error.i18n_key()).starts_with("MISSING"));
        }
    }

    #[test]
    fn form_with_errors_renders() {
        let i18n = I18n::new(Some("en-US".into()), &Config::default());
        let mut state = State::new();
        update(&mut state, Message::Save);
        assert!(!state.errors().is_empty());

        let _ = view(ViewContext {
            i18n: &i18n,
            state: &state,
        });
    }
}
