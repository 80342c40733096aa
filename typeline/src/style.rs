// Copyright 2025 the Typeline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Identifies a font to the embedding renderer.
///
/// Typeline never loads or shapes fonts itself; the identifier is opaque
/// and only passed through to the [`WrapLines`](crate::WrapLines) oracle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct FontId(pub u64);

/// The style a block of dialog text is measured and drawn with.
///
/// Only `font_size` participates in layout-cache invalidation; the other
/// fields are assumed constant for the lifetime of a dialog window. A
/// caller that does change them mid-dialog should invalidate explicitly.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextStyle {
    /// The font to measure with.
    pub font: FontId,
    /// Font size in pixels.
    pub font_size: f32,
    /// Bold weight.
    pub bold: bool,
    /// Italic style.
    pub italic: bool,
}

impl TextStyle {
    /// A plain style at the given size.
    pub fn with_size(font_size: f32) -> Self {
        Self {
            font: FontId::default(),
            font_size,
            bold: false,
            italic: false,
        }
    }
}

impl Default for TextStyle {
    fn default() -> Self {
        Self::with_size(16.0)
    }
}
