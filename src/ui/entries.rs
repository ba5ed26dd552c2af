// SPDX-License-Identifier: MPL-2.0
//! Entry list screen.
//!
//! Each row shows one journal entry and a delete button. The button carries
//! a [`DeleteTrigger`] built from the entry's delete route and title; the
//! application forwards it to the delete confirmation dialog. The header
//! shows the quote of the day next to the buttons that open the new entry
//! form and switch the theme.

use crate::i18n::fluent::I18n;
use crate::journal::{route, Entry, Journal, Quote};
use crate::ui::delete_confirmation::DeleteTrigger;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use crate::ui::theming::ThemeMode;
use iced::widget::{button, scrollable, Column, Container, Row, Text};
use iced::{alignment, Element, Length};

/// Contextual data needed to render the entry list.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub journal: &'a Journal,
    /// Whether the "clear notifications" button has anything to clear.
    pub has_notifications: bool,
    pub theme_mode: ThemeMode,
    pub quote: &'a Quote,
}

/// Messages emitted by the entry list.
#[derive(Debug, Clone)]
pub enum Message {
    DeletePressed(DeleteTrigger),
    ClearNotifications,
    NewEntryPressed,
    CycleTheme,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    OpenDeleteDialog(DeleteTrigger),
    ClearNotifications,
    OpenNewEntry,
    CycleTheme,
}

/// Process an entry list message and return the corresponding event.
#[must_use]
pub fn update(message: Message) -> Event {
    match message {
        Message::DeletePressed(trigger) => Event::OpenDeleteDialog(trigger),
        Message::ClearNotifications => Event::ClearNotifications,
        Message::NewEntryPressed => Event::OpenNewEntry,
        Message::CycleTheme => Event::CycleTheme,
    }
}

/// Builds the trigger carried by an entry's delete button.
///
/// Untitled entries carry no title so the dialog uses its fallback label.
#[must_use]
pub fn delete_trigger(entry: &Entry) -> DeleteTrigger {
    DeleteTrigger {
        delete_url: Some(route::delete_entry(entry.id)),
        entry_title: (!entry.title.trim().is_empty()).then(|| entry.title.clone()),
    }
}

/// Render the entry list screen.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let theme_label = ctx.i18n.tr_with_args(
        "entries-theme-button",
        &[("mode", ctx.i18n.tr(ctx.theme_mode.i18n_key()).as_str())],
    );

    let heading = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(
            Container::new(Text::new(ctx.i18n.tr("entries-heading")).size(typography::TITLE_MD))
                .width(Length::Fill),
        )
        .push(
            button(Text::new(theme_label).size(typography::BODY_SM))
                .padding([spacing::XXS, spacing::SM])
                .style(styles::button::ghost)
                .on_press(Message::CycleTheme),
        )
        .push(
            button(Text::new(ctx.i18n.tr("entries-clear-notifications")).size(typography::BODY_SM))
                .padding([spacing::XXS, spacing::SM])
                .style(styles::button::ghost)
                .on_press_maybe(ctx.has_notifications.then_some(Message::ClearNotifications)),
        )
        .push(
            button(Text::new(ctx.i18n.tr("entries-new-button")).size(typography::BODY_SM))
                .padding([spacing::XXS, spacing::SM])
                .style(styles::button::primary)
                .on_press(Message::NewEntryPressed),
        );

    let list: Element<'_, Message> = if ctx.journal.is_empty() {
        Text::new(ctx.i18n.tr("entries-empty"))
            .size(typography::BODY)
            .into()
    } else {
        let rows = ctx.journal.entries().map(|entry| entry_row(entry, ctx.i18n));
        scrollable(Column::with_children(rows).spacing(spacing::SM))
            .height(Length::Fill)
            .into()
    };

    let content = Column::new()
        .spacing(spacing::MD)
        .max_width(sizing::CONTENT_MAX_WIDTH)
        .push(heading)
        .push(quote_block(ctx.quote, ctx.i18n))
        .push(list);

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .padding(spacing::LG)
        .into()
}

fn quote_block<'a>(quote: &Quote, i18n: &I18n) -> Element<'a, Message> {
    let mut block = Column::new().spacing(spacing::XXS).push(
        Text::new(i18n.tr_with_args("quote-line", &[("text", quote.text)]))
            .size(typography::BODY_SM),
    );
    if quote.has_author() {
        block = block.push(
            Text::new(i18n.tr_with_args("quote-author", &[("author", quote.author)]))
                .size(typography::CAPTION),
        );
    }
    block.into()
}

/// Joins an entry's gratitude items for display, or `None` when it has none.
fn gratitude_line(entry: &Entry, i18n: &I18n) -> Option<String> {
    if entry.gratitude_items.is_empty() {
        return None;
    }
    let items = entry.gratitude_items.join(", ");
    Some(i18n.tr_with_args("entries-gratitude", &[("items", items.as_str())]))
}

fn entry_row<'a>(entry: &'a Entry, i18n: &I18n) -> Element<'a, Message> {
    let title = if entry.title.trim().is_empty() {
        i18n.tr("entries-untitled")
    } else {
        entry.title.clone()
    };

    let rating = entry.mood_rating.value().to_string();
    let meta = format!(
        "{} · {} · {}",
        entry.date.format("%Y-%m-%d"),
        i18n.tr(entry.mood.i18n_key()),
        i18n.tr_with_args("entries-rating", &[("rating", rating.as_str())]),
    );

    let mut details = Column::new()
        .spacing(spacing::XXS)
        .push(Text::new(title).size(typography::BODY))
        .push(Text::new(meta).size(typography::CAPTION));
    if !entry.content.is_empty() {
        details = details.push(Text::new(entry.content.as_str()).size(typography::BODY_SM));
    }
    if let Some(gratitude) = gratitude_line(entry, i18n) {
        details = details.push(Text::new(gratitude).size(typography::CAPTION));
    }

    let delete_button = button(
        Row::new()
            .spacing(spacing::XXS)
            .align_y(alignment::Vertical::Center)
            .push(icons::tinted(
                icons::sized(icons::trash(), sizing::ICON_SM),
                palette::WHITE,
            ))
            .push(Text::new(i18n.tr("entries-delete-button")).size(typography::BODY_SM)),
    )
    .padding([spacing::XXS, spacing::SM])
    .style(styles::button::danger)
    .on_press(Message::DeletePressed(delete_trigger(entry)));

    Container::new(
        Row::new()
            .spacing(spacing::MD)
            .align_y(alignment::Vertical::Center)
            .push(Container::new(details).width(Length::Fill))
            .push(delete_button),
    )
    .width(Length::Fill)
    .padding(spacing::SM)
    .style(styles::container::card)
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::journal::{Mood, NewEntry};

    #[test]
    fn trigger_carries_route_and_title() {
        let mut journal = Journal::new();
        let id = journal.add(NewEntry::new("Day One", Mood::Happy));
        let entry = journal.get(id).unwrap();

        let trigger = delete_trigger(entry);
        assert_eq!(trigger.delete_url.as_deref(), Some("/entries/1/delete/"));
        assert_eq!(trigger.entry_title.as_deref(), Some("Day One"));
    }

    #[test]
    fn untitled_entry_carries_no_title() {
        let mut journal = Journal::new();
        let id = journal.add(NewEntry::new("   ", Mood::Neutral));

        let trigger = delete_trigger(journal.get(id).unwrap());
        assert_eq!(trigger.entry_title, None);
        assert!(trigger.delete_url.is_some());
    }

    #[test]
    fn delete_press_opens_dialog() {
        let trigger = DeleteTrigger::new("/entries/4/delete/", "Rainy walk");
        assert_eq!(
            update(Message::DeletePressed(trigger.clone())),
            Event::OpenDeleteDialog(trigger)
        );
        assert_eq!(update(Message::ClearNotifications), Event::ClearNotifications);
        assert_eq!(update(Message::NewEntryPressed), Event::OpenNewEntry);
        assert_eq!(update(Message::CycleTheme), Event::CycleTheme);
    }

    #[test]
    fn gratitude_items_are_joined() {
        let i18n = I18n::new(Some("en-US".into()), &Config::default());
        let mut journal = Journal::new();
        let with_items = journal.add(
            NewEntry::new("Walk", Mood::Calm)
                .with_gratitude("Sunshine")
                .with_gratitude("Coffee"),
        );
        let without_items = journal.add(NewEntry::new("Rest", Mood::Neutral));

        assert_eq!(
            gratitude_line(journal.get(with_items).unwrap(), &i18n).as_deref(),
            Some("Grateful for: Sunshine, Coffee")
        );
        assert_eq!(gratitude_line(journal.get(without_items).unwrap(), &i18n), None);
    }

    #[test]
    fn list_renders_with_quote_and_theme() {
        let i18n = I18n::new(Some("en-US".into()), &Config::default());
        let journal = Journal::with_sample_entries();
        let quote = &crate::journal::quote::QUOTES[6];
        assert!(!quote.has_author());

        let _ = view(ViewContext {
            i18n: &i18n,
            journal: &journal,
            has_notifications: true,
            theme_mode: ThemeMode::Dark,
            quote,
        });
    }
}
