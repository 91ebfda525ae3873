// SPDX-License-Identifier: MPL-2.0
//! Iced views: shell chrome, pages, styles and design tokens.

pub mod bottom_nav;
pub mod design_tokens;
pub mod header;
pub mod labels;
pub mod pages;
pub mod styles;
pub mod theming;
