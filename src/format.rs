// SPDX-License-Identifier: MIT
// Copyright 2026 Tyler Zervas

//! Texture format descriptors.
//!
//! A [`FormatDescriptor`] is the immutable tuple an encoder carries: internal
//! storage format, transfer format, per-channel type and channel count. The
//! three format identifiers are opaque integers. They are only handed on to
//! whatever allocates the texture, so the encoder never needs a graphics
//! context. The [`gl`] module supplies the WebGL2 / GLES3 values.

use crate::buffer::ElementKind;
use crate::error::{Result, TextureError};

/// WebGL2 / OpenGL ES 3.0 enum values.
pub mod gl {
    /// `GL_R32F` internal format.
    pub const R32F: u32 = 0x822E;
    /// `GL_RGBA32F` internal format.
    pub const RGBA32F: u32 = 0x8814;
    /// `GL_RGBA16F` internal format.
    pub const RGBA16F: u32 = 0x881A;
    /// `GL_R8` internal format.
    pub const R8: u32 = 0x8229;
    /// `GL_RGBA8` internal format.
    pub const RGBA8: u32 = 0x8058;

    /// `GL_RED` transfer format.
    pub const RED: u32 = 0x1903;
    /// `GL_RGBA` transfer format.
    pub const RGBA: u32 = 0x1908;

    /// `GL_UNSIGNED_BYTE` channel type.
    pub const UNSIGNED_BYTE: u32 = 0x1401;
    /// `GL_FLOAT` channel type.
    pub const FLOAT: u32 = 0x1406;
    /// `GL_HALF_FLOAT` channel type.
    pub const HALF_FLOAT: u32 = 0x140B;
}

/// Number of logical channels an encoder packs per texel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChannelCount {
    /// Single red channel.
    One,
    /// Four RGBA channels.
    Four,
}

impl ChannelCount {
    /// Channel count as a number.
    #[must_use]
    pub fn get(self) -> usize {
        match self {
            Self::One => 1,
            Self::Four => 4,
        }
    }
}

impl TryFrom<usize> for ChannelCount {
    type Error = TextureError;

    fn try_from(channels: usize) -> Result<Self> {
        match channels {
            1 => Ok(Self::One),
            4 => Ok(Self::Four),
            other => Err(TextureError::invalid_channels(other)),
        }
    }
}

/// Per-channel numeric type of a texture format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChannelType {
    /// 32-bit float.
    Float,
    /// 16-bit float.
    HalfFloat,
    /// 8-bit unsigned integer.
    UnsignedByte,
}

impl ChannelType {
    /// Bytes occupied by one channel on the device.
    #[must_use]
    pub fn size_in_bytes(self) -> usize {
        match self {
            Self::Float => 4,
            Self::HalfFloat => 2,
            Self::UnsignedByte => 1,
        }
    }

    /// Graphics API enum value for this type.
    #[must_use]
    pub fn gl_enum(self) -> u32 {
        match self {
            Self::Float => gl::FLOAT,
            Self::HalfFloat => gl::HALF_FLOAT,
            Self::UnsignedByte => gl::UNSIGNED_BYTE,
        }
    }

    /// Element kind used for host-side buffers of this type.
    ///
    /// Half floats are staged as `f32` on the host.
    #[must_use]
    pub fn element_kind(self) -> ElementKind {
        match self {
            Self::Float | Self::HalfFloat => ElementKind::F32,
            Self::UnsignedByte => ElementKind::U8,
        }
    }
}

/// Immutable description of a texture's physical format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FormatDescriptor {
    /// Internal storage format (e.g. [`gl::RGBA32F`]).
    pub internal_format: u32,
    /// Transfer format used for upload and readback (e.g. [`gl::RGBA`]).
    pub transfer_format: u32,
    /// Per-channel numeric type.
    pub channel_type: ChannelType,
    /// Logical channels per texel.
    pub channels: ChannelCount,
}

impl FormatDescriptor {
    /// Full-precision float with one or four channels (`R32F` / `RGBA32F`).
    #[must_use]
    pub fn float32(channels: ChannelCount) -> Self {
        let (internal_format, transfer_format) = match channels {
            ChannelCount::One => (gl::R32F, gl::RED),
            ChannelCount::Four => (gl::RGBA32F, gl::RGBA),
        };
        Self {
            internal_format,
            transfer_format,
            channel_type: ChannelType::Float,
            channels,
        }
    }

    /// Always-RGBA full-precision float; `channels` says how many carry data.
    #[must_use]
    pub fn rgba_float32(channels: ChannelCount) -> Self {
        Self {
            internal_format: gl::RGBA32F,
            transfer_format: gl::RGBA,
            channel_type: ChannelType::Float,
            channels,
        }
    }

    /// Half-precision RGBA float (`RGBA16F`).
    #[must_use]
    pub fn rgba_float16() -> Self {
        Self {
            internal_format: gl::RGBA16F,
            transfer_format: gl::RGBA,
            channel_type: ChannelType::HalfFloat,
            channels: ChannelCount::Four,
        }
    }

    /// 8-bit unsigned integer with one or four channels (`R8` / `RGBA8`).
    #[must_use]
    pub fn uint8(channels: ChannelCount) -> Self {
        let (internal_format, transfer_format) = match channels {
            ChannelCount::One => (gl::R8, gl::RED),
            ChannelCount::Four => (gl::RGBA8, gl::RGBA),
        };
        Self {
            internal_format,
            transfer_format,
            channel_type: ChannelType::UnsignedByte,
            channels,
        }
    }

    /// Logical channels per texel, 1 or 4.
    #[must_use]
    pub fn channel_size(&self) -> usize {
        self.channels.get()
    }

    /// Channels the transfer format physically stores per texel.
    #[must_use]
    pub fn texel_channels(&self) -> usize {
        if self.transfer_format == gl::RED {
            1
        } else {
            4
        }
    }

    /// Device bytes per texel.
    #[must_use]
    pub fn bytes_per_texel(&self) -> usize {
        self.texel_channels() * self.channel_type.size_in_bytes()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channel_count_try_from() {
        assert_eq!(ChannelCount::try_from(1).unwrap(), ChannelCount::One);
        assert_eq!(ChannelCount::try_from(4).unwrap(), ChannelCount::Four);
        for bad in [0, 2, 3, 5] {
            assert!(matches!(
                ChannelCount::try_from(bad),
                Err(TextureError::InvalidChannelCount { channels }) if channels == bad
            ));
        }
    }

    #[test]
    fn test_float32_descriptor() {
        let red = FormatDescriptor::float32(ChannelCount::One);
        assert_eq!(red.internal_format, gl::R32F);
        assert_eq!(red.transfer_format, gl::RED);
        assert_eq!(red.texel_channels(), 1);
        assert_eq!(red.bytes_per_texel(), 4);

        let rgba = FormatDescriptor::float32(ChannelCount::Four);
        assert_eq!(rgba.internal_format, gl::RGBA32F);
        assert_eq!(rgba.bytes_per_texel(), 16);
    }

    #[test]
    fn test_rgba_float32_is_always_rgba() {
        let packed = FormatDescriptor::rgba_float32(ChannelCount::One);
        assert_eq!(packed.channel_size(), 1);
        assert_eq!(packed.texel_channels(), 4);
    }

    #[test]
    fn test_half_and_uint8_descriptors() {
        let half = FormatDescriptor::rgba_float16();
        assert_eq!(half.channel_type.gl_enum(), gl::HALF_FLOAT);
        assert_eq!(half.bytes_per_texel(), 8);

        let bytes = FormatDescriptor::uint8(ChannelCount::Four);
        assert_eq!(bytes.internal_format, gl::RGBA8);
        assert_eq!(bytes.channel_type.element_kind(), ElementKind::U8);
        assert_eq!(bytes.bytes_per_texel(), 4);
    }
}
