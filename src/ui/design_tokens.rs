// SPDX-License-Identifier: MPL-2.0
//! Design tokens: palette, spacing, sizing, typography and radii.
//!
//! ```
//! use fasal_mitra::ui::design_tokens::{palette, spacing};
//!
//! let brand = palette::GREEN_500;
//! let padding = spacing::MD; // 16px
//! assert!(brand.g > brand.r);
//! assert_eq!(padding, 16.0);
//! ```

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Grayscale
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_900: Color = Color::from_rgb(0.1, 0.1, 0.1);
    pub const GRAY_700: Color = Color::from_rgb(0.3, 0.3, 0.3);
    pub const GRAY_500: Color = Color::from_rgb(0.42, 0.45, 0.5);
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);
    pub const GRAY_200: Color = Color::from_rgb(0.75, 0.75, 0.75);
    pub const GRAY_100: Color = Color::from_rgb(0.85, 0.85, 0.85);
    pub const GRAY_50: Color = Color::from_rgb(0.976, 0.98, 0.984);

    // Brand colors (green scale)
    pub const GREEN_100: Color = Color::from_rgb(0.863, 0.988, 0.906);
    pub const GREEN_300: Color = Color::from_rgb(0.525, 0.937, 0.675);
    pub const GREEN_400: Color = Color::from_rgb(0.29, 0.871, 0.502);
    pub const GREEN_500: Color = Color::from_rgb(0.133, 0.773, 0.369);
    pub const GREEN_600: Color = Color::from_rgb(0.086, 0.639, 0.29);
    pub const GREEN_700: Color = Color::from_rgb(0.082, 0.502, 0.239);
    pub const GREEN_800: Color = Color::from_rgb(0.086, 0.396, 0.204);

    // Feature accents
    pub const BLUE_600: Color = Color::from_rgb(0.145, 0.388, 0.922);
    pub const ORANGE_600: Color = Color::from_rgb(0.918, 0.345, 0.047);
    pub const PURPLE_600: Color = Color::from_rgb(0.576, 0.2, 0.918);

    // Semantic colors
    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
    pub const WARNING_500: Color = Color::from_rgb(0.945, 0.651, 0.125);
    pub const SUCCESS_500: Color = Color::from_rgb(0.263, 0.702, 0.404);
    pub const INFO_500: Color = Color::from_rgb(0.392, 0.588, 1.0);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const SUBTLE: f32 = 0.15;
    pub const MUTED: f32 = 0.75;
    pub const OPAQUE: f32 = 1.0;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0;
    pub const XS: f32 = 8.0;
    pub const SM: f32 = 12.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
    pub const XL: f32 = 32.0;
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    pub const BRAND_MARK: f32 = 40.0;
    pub const PREVIEW_HEIGHT: f32 = 192.0;
    pub const HISTORY_PANEL_WIDTH: f32 = 240.0;
    pub const CONTENT_MAX_WIDTH: f32 = 720.0;
    pub const BOTTOM_NAV_HEIGHT: f32 = 64.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Hero numbers (current temperature).
    pub const DISPLAY: f32 = 30.0;
    /// Page titles.
    pub const TITLE_LG: f32 = 24.0;
    /// App name, card titles.
    pub const TITLE_MD: f32 = 20.0;
    /// Section headers.
    pub const TITLE_SM: f32 = 18.0;
    pub const BODY_LG: f32 = 16.0;
    pub const BODY: f32 = 14.0;
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 12.0;
    pub const FULL: f32 = 9999.0;
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::Color;
    use iced::{Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: Color::TRANSPARENT,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const MD: Shadow = Shadow {
        color: Color::from_rgba(0.0, 0.0, 0.0, 0.15),
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 8.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    assert!(typography::DISPLAY > typography::TITLE_LG);
    assert!(typography::TITLE_LG > typography::TITLE_MD);
    assert!(typography::TITLE_MD > typography::TITLE_SM);
    assert!(typography::BODY > typography::CAPTION);

    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);
};
