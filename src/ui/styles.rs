// SPDX-License-Identifier: MPL-2.0
//! Widget styles.

use crate::ui::design_tokens::{palette, radius};
use iced::widget::{button, container};
use iced::{Background, Border, Theme};

/// Black backdrop behind the video frame.
pub fn video_surface(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::BLACK)),
        text_color: Some(palette::GRAY_400),
        ..container::Style::default()
    }
}

/// Dark strip holding the transport controls.
pub fn control_bar(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::GRAY_900)),
        text_color: Some(palette::WHITE),
        ..container::Style::default()
    }
}

/// Playlist row of the entry being played.
pub fn playlist_row_current(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => palette::PRIMARY_500,
        _ => palette::PRIMARY_700,
    };
    button::Style {
        background: Some(Background::Color(background)),
        text_color: palette::WHITE,
        border: Border {
            radius: radius::SM.into(),
            ..Border::default()
        },
        ..button::Style::default()
    }
}

/// Any other playlist row.
pub fn playlist_row(theme: &Theme, status: button::Status) -> button::Style {
    match status {
        button::Status::Hovered | button::Status::Pressed => button::secondary(theme, status),
        _ => button::text(theme, status),
    }
}
