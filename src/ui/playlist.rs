// SPDX-License-Identifier: MPL-2.0
//! Playlist side panel.

use crate::app::Message;
use crate::domain::playlist::Playlist;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, container, scrollable, text, Column, Row};
use iced::{Element, Length};
use std::path::Path;

/// Row label for a playlist entry: the file name, or the full path when it
/// has none.
#[must_use]
pub fn entry_label(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Render the playlist panel.
pub fn view<'a>(playlist: &'a Playlist, i18n: &'a I18n) -> Element<'a, Message> {
    let actions = Row::new()
        .spacing(spacing::XS)
        .push(button(text(i18n.tr("playlist-add"))).on_press(Message::AddFiles))
        .push(
            button(text(i18n.tr("playlist-clear")))
                .style(button::secondary)
                .on_press_maybe((!playlist.is_empty()).then_some(Message::ClearPlaylist)),
        );

    let entries: Element<'a, Message> = if playlist.is_empty() {
        text(i18n.tr("playlist-empty"))
            .size(typography::CAPTION)
            .into()
    } else {
        let current = playlist.current_index();
        let rows = playlist.iter().enumerate().fold(
            Column::new().spacing(spacing::XXS),
            |column, (index, path)| {
                let style = if current == Some(index) {
                    styles::playlist_row_current
                } else {
                    styles::playlist_row
                };
                column.push(
                    button(text(entry_label(path)).size(typography::BODY))
                        .width(Length::Fill)
                        .style(style)
                        .on_press(Message::PlaylistSelected(index)),
                )
            },
        );
        scrollable(rows).height(Length::Fill).into()
    };

    let content = Column::new()
        .spacing(spacing::SM)
        .push(text(i18n.tr("playlist-title")).size(typography::TITLE_SM))
        .push(actions)
        .push(entries);

    container(content)
        .width(sizing::SIDEBAR_WIDTH)
        .height(Length::Fill)
        .padding(spacing::MD)
        .into()
}
