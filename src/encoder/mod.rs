// SPDX-License-Identifier: MIT
// Copyright 2026 Tyler Zervas

//! Texture data encoders.
//!
//! An encoder converts between a logical buffer (tensor data in natural
//! order) and the physical buffer a texture of one specific format expects,
//! in both directions. Every format implements [`DataEncoder`]:
//!
//! | Encoder              | Host kind     | Channels | Encode                         | Decode                    |
//! |----------------------|---------------|----------|--------------------------------|---------------------------|
//! | [`Float32Encoder`]   | f32           | 1 or 4   | grow if undersized, else move  | slice                     |
//! | [`RgbaFloatEncoder`] | f32           | 1 or 4   | explode (1) / grow or move (4) | every 4th (1) / slice (4) |
//! | [`HalfFloatEncoder`] | f32 → f16     | 4        | `Unimplemented`                | `Unimplemented`           |
//! | [`Uint8Encoder`]     | u8 / 4-byte   | 1 or 4   | reinterpret as bytes           | reinterpret bytes         |
//!
//! [`TextureEncoder`] wraps the four types in a closed enum for callers that
//! pick the format at runtime.
//!
//! ## Ownership
//!
//! `encode` and `decode` take their input by value and always return an owned
//! buffer. When no repacking is needed the input's allocation is moved
//! through (no copy), so the result *is* the caller's former buffer. Each
//! encoder's docs say which paths copy.
//!
//! ## Example
//!
//! ```rust
//! use texture_encoder::{DataEncoder, Float32Encoder, TypedBuffer};
//!
//! let encoder = Float32Encoder::new(1)?;
//! let texels = encoder.encode(TypedBuffer::F32(vec![1.0, 2.0]), 4)?;
//! assert_eq!(texels, TypedBuffer::F32(vec![1.0, 2.0, 0.0, 0.0]));
//!
//! let logical = encoder.decode(texels, 2)?;
//! assert_eq!(logical, TypedBuffer::F32(vec![1.0, 2.0]));
//! # Ok::<(), texture_encoder::TextureError>(())
//! ```

mod float32;
mod half_float;
mod rgba_float;
mod uint8;

pub use float32::Float32Encoder;
pub use half_float::HalfFloatEncoder;
pub use rgba_float::RgbaFloatEncoder;
pub use uint8::{Uint8Encoder, WordKind};

use crate::buffer::{ElementKind, TypedBuffer};
use crate::error::{Result, TextureError};
use crate::format::FormatDescriptor;
use crate::logging;

/// Conversion between logical buffers and one texture format's texel layout.
///
/// Implementations hold nothing but their [`FormatDescriptor`], so they are
/// cheap to copy around and safe to share across threads. Buffers passed in
/// are owned by the call; nothing is retained.
pub trait DataEncoder: Send + Sync {
    /// Physical format this encoder targets.
    fn descriptor(&self) -> &FormatDescriptor;

    /// Element kind of the logical buffers this encoder expects and returns.
    fn element_kind(&self) -> ElementKind;

    /// Zero-filled physical buffer of `count × channel_size` elements.
    ///
    /// # Errors
    ///
    /// Returns `TextureTooLarge` if the element count overflows `usize`.
    /// The half-precision placeholder always fails with `Unimplemented`.
    fn allocate(&self, count: usize) -> Result<TypedBuffer>;

    /// Pack `source` for a texture of `texture_size` texels.
    ///
    /// Float encoders convert sources of the wrong element kind; the 8-bit
    /// encoder reinterprets any source as its native bytes instead. Sources
    /// smaller than `texture_size × channel_size` are zero-padded. Conversion
    /// and padding are logged as warnings; neither is an error.
    ///
    /// # Errors
    ///
    /// Returns `TextureTooLarge` if the required capacity overflows `usize`.
    /// The half-precision placeholder always fails with `Unimplemented`.
    fn encode(&self, source: TypedBuffer, texture_size: usize) -> Result<TypedBuffer>;

    /// Unpack a physical buffer into at most `data_size` logical elements.
    ///
    /// # Errors
    ///
    /// Only the half-precision placeholder fails, with `Unimplemented`.
    fn decode(&self, buffer: TypedBuffer, data_size: usize) -> Result<TypedBuffer>;

    /// Logical channels per texel, 1 or 4.
    fn channel_size(&self) -> usize {
        self.descriptor().channel_size()
    }
}

/// Texture format family, for runtime selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EncoderKind {
    /// [`Float32Encoder`].
    #[default]
    Float32,
    /// [`RgbaFloatEncoder`].
    RgbaFloat,
    /// [`HalfFloatEncoder`].
    HalfFloat,
    /// [`Uint8Encoder`].
    Uint8,
}

/// Any of the encoders, dispatched by exhaustive match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextureEncoder {
    /// Full-precision float.
    Float32(Float32Encoder),
    /// Legacy always-RGBA float.
    RgbaFloat(RgbaFloatEncoder),
    /// Half-precision placeholder.
    HalfFloat(HalfFloatEncoder),
    /// 8-bit unsigned integer.
    Uint8(Uint8Encoder),
}

impl TextureEncoder {
    /// Build the encoder for `kind` with `channels` logical channels.
    ///
    /// The half-precision placeholder is always four channels and ignores
    /// `channels`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidChannelCount` unless `channels` is 1 or 4.
    pub fn new(kind: EncoderKind, channels: usize) -> Result<Self> {
        Ok(match kind {
            EncoderKind::Float32 => Self::Float32(Float32Encoder::new(channels)?),
            EncoderKind::RgbaFloat => Self::RgbaFloat(RgbaFloatEncoder::new(channels)?),
            EncoderKind::HalfFloat => Self::HalfFloat(HalfFloatEncoder::new()),
            EncoderKind::Uint8 => Self::Uint8(Uint8Encoder::new(channels)?),
        })
    }

    /// Which format family this is.
    #[must_use]
    pub fn kind(&self) -> EncoderKind {
        match self {
            Self::Float32(_) => EncoderKind::Float32,
            Self::RgbaFloat(_) => EncoderKind::RgbaFloat,
            Self::HalfFloat(_) => EncoderKind::HalfFloat,
            Self::Uint8(_) => EncoderKind::Uint8,
        }
    }

    fn inner(&self) -> &dyn DataEncoder {
        match self {
            Self::Float32(e) => e,
            Self::RgbaFloat(e) => e,
            Self::HalfFloat(e) => e,
            Self::Uint8(e) => e,
        }
    }
}

impl DataEncoder for TextureEncoder {
    fn descriptor(&self) -> &FormatDescriptor {
        self.inner().descriptor()
    }

    fn element_kind(&self) -> ElementKind {
        self.inner().element_kind()
    }

    fn allocate(&self, count: usize) -> Result<TypedBuffer> {
        self.inner().allocate(count)
    }

    fn encode(&self, source: TypedBuffer, texture_size: usize) -> Result<TypedBuffer> {
        self.inner().encode(source, texture_size)
    }

    fn decode(&self, buffer: TypedBuffer, data_size: usize) -> Result<TypedBuffer> {
        self.inner().decode(buffer, data_size)
    }
}

impl From<Float32Encoder> for TextureEncoder {
    fn from(e: Float32Encoder) -> Self {
        Self::Float32(e)
    }
}

impl From<RgbaFloatEncoder> for TextureEncoder {
    fn from(e: RgbaFloatEncoder) -> Self {
        Self::RgbaFloat(e)
    }
}

impl From<HalfFloatEncoder> for TextureEncoder {
    fn from(e: HalfFloatEncoder) -> Self {
        Self::HalfFloat(e)
    }
}

impl From<Uint8Encoder> for TextureEncoder {
    fn from(e: Uint8Encoder) -> Self {
        Self::Uint8(e)
    }
}

/// Elements needed for `texels` texels of `per_texel` channels each.
///
/// Fails with `TextureTooLarge` instead of wrapping on overflow.
pub(crate) fn texel_capacity(texels: usize, per_texel: usize) -> Result<usize> {
    texels
        .checked_mul(per_texel)
        .ok_or_else(|| TextureError::too_large(texels, usize::MAX / per_texel))
}

/// Convert `source` to `kind`, warning if a conversion was needed.
pub(crate) fn coerce_logged(source: TypedBuffer, kind: ElementKind) -> TypedBuffer {
    let from = source.kind();
    let (buffer, converted) = source.coerce(kind);
    if converted {
        logging::log_coercion(from, kind);
    }
    buffer
}

/// Zero-pad `buffer` up to `required` elements, warning if it had to grow.
///
/// The buffer's own allocation is extended, so the original elements stay at
/// the front. Buffers already large enough are returned untouched.
pub(crate) fn fit_to_capacity(mut buffer: TypedBuffer, required: usize) -> TypedBuffer {
    let available = buffer.len();
    if available < required {
        logging::log_reallocation(available, required);
        buffer.grow_zeroed(required);
    }
    buffer
}
