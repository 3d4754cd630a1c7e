// SPDX-License-Identifier: MPL-2.0
//! Layout and color constants shared by the player widgets.
//!
//! Spacing follows an 8px grid.

pub mod palette {
    use iced::Color;

    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_900: Color = Color::from_rgb(0.1, 0.1, 0.1);
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);
    pub const PRIMARY_500: Color = Color::from_rgb(0.3, 0.6, 0.9);
    pub const PRIMARY_700: Color = Color::from_rgb(0.15, 0.4, 0.7);
}

pub mod spacing {
    pub const XXS: f32 = 4.0;
    pub const XS: f32 = 8.0;
    pub const SM: f32 = 12.0;
    pub const MD: f32 = 16.0;
}

pub mod sizing {
    pub const PLAY_BUTTON_WIDTH: f32 = 110.0;
    pub const PICK_LIST_WIDTH: f32 = 130.0;
    pub const SIDEBAR_WIDTH: f32 = 260.0;
}

pub mod typography {
    pub const TITLE_SM: f32 = 18.0;
    pub const BODY: f32 = 14.0;
    pub const CAPTION: f32 = 12.0;
}

pub mod radius {
    pub const SM: f32 = 4.0;
}
