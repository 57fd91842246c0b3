// SPDX-License-Identifier: MIT
// Copyright 2026 Tyler Zervas

//! Texture sizing helpers.
//!
//! Encoders trust the `texture_size` they are given. These helpers compute
//! it from the tensor side: how wide and tall a texture must be to hold a
//! given number of texels, and how many device bytes that costs.

use crate::error::{Result, TextureError};
use crate::format::FormatDescriptor;

/// Common maximum texture extent on WebGL2 devices.
pub const DEFAULT_MAX_TEXTURE_SIZE: usize = 4096;

/// Width and height of a 2D texture, in texels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextureLayout {
    /// Texels per row.
    pub width: usize,
    /// Rows.
    pub height: usize,
}

impl TextureLayout {
    /// Smallest near-square layout holding `texels` texels.
    ///
    /// Width is the integer square root rounded up, capped at `max_extent`;
    /// height is however many rows that width needs. An empty request gives
    /// a 1×1 texture, since zero-sized textures cannot be allocated.
    ///
    /// # Errors
    ///
    /// Returns `TextureTooLarge` if `texels` exceeds `max_extent²`.
    pub fn for_texels(texels: usize, max_extent: usize) -> Result<Self> {
        let max_texels = max_extent.saturating_mul(max_extent);
        if texels > max_texels {
            return Err(TextureError::too_large(texels, max_texels));
        }
        if texels == 0 {
            return Ok(Self {
                width: 1,
                height: 1,
            });
        }

        let mut width = texels.isqrt();
        if width * width < texels {
            width += 1;
        }
        let width = width.min(max_extent);
        let height = texels.div_ceil(width);
        Ok(Self { width, height })
    }

    /// Layout for `elements` logical elements packed `channel_size` per texel.
    ///
    /// # Errors
    ///
    /// Returns `TextureTooLarge` if the texels needed exceed `max_extent²`.
    pub fn for_elements(
        elements: usize,
        descriptor: &FormatDescriptor,
        max_extent: usize,
    ) -> Result<Self> {
        Self::for_texels(elements.div_ceil(descriptor.channel_size()), max_extent)
    }

    /// Total texels; the `texture_size` to pass to `encode`.
    #[must_use]
    pub fn texel_count(&self) -> usize {
        self.width * self.height
    }
}

/// Device bytes needed for `texels` texels of `descriptor`'s format.
#[must_use]
pub fn estimate_texture_bytes(descriptor: &FormatDescriptor, texels: usize) -> usize {
    texels * descriptor.bytes_per_texel()
}
