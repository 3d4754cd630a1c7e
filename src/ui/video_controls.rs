// SPDX-License-Identifier: MPL-2.0
//! Transport bar below the video: play/pause, progress slider, speed and
//! effect pickers.

use crate::app::Message;
use crate::domain::video::{Effect, PlaybackSpeed, PlaybackState};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, container, pick_list, slider, text, tooltip, Row};
use iced::{alignment::Vertical, Element, Length};
use std::fmt;

/// An effect paired with its localized menu label.
#[derive(Debug, Clone, PartialEq)]
pub struct EffectChoice {
    pub effect: Effect,
    label: String,
}

impl EffectChoice {
    pub fn new(effect: Effect, i18n: &I18n) -> Self {
        Self {
            effect,
            label: i18n.tr(&format!("effect-{}", effect.name())),
        }
    }
}

impl fmt::Display for EffectChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}

/// Every effect in menu order, localized.
pub fn effect_choices(i18n: &I18n) -> Vec<EffectChoice> {
    Effect::ALL
        .into_iter()
        .map(|effect| EffectChoice::new(effect, i18n))
        .collect()
}

/// Glyph shown on the play/pause button: what pressing it will do.
#[must_use]
pub fn play_glyph(state: PlaybackState) -> &'static str {
    if state.is_playing() {
        "⏸"
    } else {
        "▶"
    }
}

/// Contextual data needed to render the control bar.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub state: PlaybackState,
    pub has_video: bool,
    /// Playback position in percent.
    pub progress: f64,
    pub speed: PlaybackSpeed,
    pub effect: Effect,
}

/// Render the control bar.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let (label_key, tooltip_key) = if ctx.state.is_playing() {
        ("pause", "pause-tooltip")
    } else {
        ("play", "play-tooltip")
    };
    let play_button = button(text(format!(
        "{} {}",
        play_glyph(ctx.state),
        ctx.i18n.tr(label_key)
    )))
    .width(sizing::PLAY_BUTTON_WIDTH)
    .on_press_maybe(ctx.has_video.then_some(Message::TogglePlayback));
    let play_button = tooltip(
        play_button,
        text(ctx.i18n.tr(tooltip_key)).size(typography::CAPTION),
        tooltip::Position::Top,
    );

    // Decoding to the target frame happens once, when the handle is released
    let progress = slider(0.0..=100.0, ctx.progress, Message::SeekDragged)
        .on_release(Message::SeekReleased)
        .step(0.1)
        .width(Length::Fill);

    let speed = Row::new()
        .spacing(spacing::XXS)
        .align_y(Vertical::Center)
        .push(text(ctx.i18n.tr("speed-label")).size(typography::BODY))
        .push(
            pick_list(PlaybackSpeed::ALL, Some(ctx.speed), Message::SpeedSelected)
                .width(sizing::PICK_LIST_WIDTH),
        );

    let effect = Row::new()
        .spacing(spacing::XXS)
        .align_y(Vertical::Center)
        .push(text(ctx.i18n.tr("effect-label")).size(typography::BODY))
        .push(
            pick_list(
                effect_choices(ctx.i18n),
                Some(EffectChoice::new(ctx.effect, ctx.i18n)),
                Message::EffectSelected,
            )
            .width(sizing::PICK_LIST_WIDTH),
        );

    let bar = Row::new()
        .spacing(spacing::SM)
        .padding(spacing::XS)
        .align_y(Vertical::Center)
        .push(play_button)
        .push(progress)
        .push(speed)
        .push(effect);

    container(bar)
        .width(Length::Fill)
        .style(styles::control_bar)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    #[test]
    fn glyph_shows_the_next_action() {
        assert_eq!(play_glyph(PlaybackState::Playing), "⏸");
        assert_eq!(play_glyph(PlaybackState::Paused), "▶");
        assert_eq!(play_glyph(PlaybackState::Stopped), "▶");
    }

    #[test]
    fn effect_choices_cover_every_effect_with_labels() {
        let i18n = I18n::new(Some("en-US".to_string()), &Config::default());
        let choices = effect_choices(&i18n);
        assert_eq!(choices.len(), Effect::ALL.len());
        assert_eq!(choices[4].effect, Effect::Sepia);
        assert_eq!(choices[4].to_string(), "Sepia");
        assert!(choices.iter().all(|c| !c.to_string().starts_with("MISSING")));
    }
}
