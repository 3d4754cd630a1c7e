// SPDX-License-Identifier: MPL-2.0
//! User interface widgets for the player window.

pub mod design_tokens;
pub mod playlist;
pub mod styles;
pub mod video_controls;
