// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! Windowed: video surface with the control bar below it and the playlist on
//! the right. Fullscreen: the video surface alone.

use super::Message;
use crate::domain::playlist::Playlist;
use crate::domain::video::{Effect, PlaybackSpeed, PlaybackState};
use crate::i18n::fluent::I18n;
use crate::ui::{playlist, styles, video_controls};
use iced::widget::{container, image, text, Column, Row};
use iced::{ContentFit, Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub frame: Option<&'a image::Handle>,
    pub playlist: &'a Playlist,
    pub state: PlaybackState,
    pub has_video: bool,
    pub progress: f64,
    pub speed: PlaybackSpeed,
    pub effect: Effect,
    pub fullscreen: bool,
}

/// Renders the player window.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let surface = video_surface(ctx.frame, ctx.i18n);
    if ctx.fullscreen {
        return surface;
    }

    let controls = video_controls::view(video_controls::ViewContext {
        i18n: ctx.i18n,
        state: ctx.state,
        has_video: ctx.has_video,
        progress: ctx.progress,
        speed: ctx.speed,
        effect: ctx.effect,
    });

    let main_column = Column::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(surface)
        .push(controls);

    Row::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(main_column)
        .push(playlist::view(ctx.playlist, ctx.i18n))
        .into()
}

fn video_surface<'a>(frame: Option<&'a image::Handle>, i18n: &'a I18n) -> Element<'a, Message> {
    let content: Element<'a, Message> = match frame {
        Some(handle) => image(handle.clone())
            .content_fit(ContentFit::Contain)
            .width(Length::Fill)
            .height(Length::Fill)
            .into(),
        None => text(i18n.tr("empty-screen-hint")).into(),
    };

    container(content)
        .center(Length::Fill)
        .style(styles::video_surface)
        .into()
}
