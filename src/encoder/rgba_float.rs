// SPDX-License-Identifier: MIT
// Copyright 2026 Tyler Zervas

//! Legacy RGBA float encoder.
//!
//! Always backed by an `RGBA32F` texture. With one logical channel each
//! texel carries a single value in its red channel and green, blue and
//! alpha go unused; this is the layout older shader programs read from.

use super::{coerce_logged, fit_to_capacity, texel_capacity, DataEncoder};
use crate::buffer::{ElementKind, TypedBuffer};
use crate::error::Result;
use crate::format::{ChannelCount, FormatDescriptor};
use crate::logging;

const RGBA: usize = 4;

/// Encoder for `RGBA32F` textures carrying one or four values per texel.
///
/// With one channel, `encode` always writes a fresh `4 × texture_size`
/// buffer and `decode` keeps only the red channel of each texel, silently
/// dropping the other three. With four channels it behaves like
/// [`super::Float32Encoder`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RgbaFloatEncoder {
    descriptor: FormatDescriptor,
}

impl RgbaFloatEncoder {
    /// Create an encoder with `channels` logical channels per texel.
    ///
    /// # Errors
    ///
    /// Returns `InvalidChannelCount` unless `channels` is 1 or 4.
    pub fn new(channels: usize) -> Result<Self> {
        let channels = ChannelCount::try_from(channels)?;
        Ok(Self {
            descriptor: FormatDescriptor::rgba_float32(channels),
        })
    }

    /// Zero-filled buffer covering the whole `RGBA32F` texture of `count`
    /// texels, i.e. `4 × count` floats whatever the logical channel count.
    ///
    /// Use this for readback when packed one value per texel:
    /// [`DataEncoder::allocate`] only sizes `count × channel_size`.
    ///
    /// # Errors
    ///
    /// Returns `TextureTooLarge` if `4 × count` overflows `usize`.
    pub fn allocate_texture(&self, count: usize) -> Result<TypedBuffer> {
        let len = texel_capacity(count, self.descriptor.texel_channels())?;
        Ok(TypedBuffer::zeros(ElementKind::F32, len))
    }

    /// Write `source[i]` into `dest[4 * i]` for as many texels as `dest` has.
    ///
    /// The green, blue and alpha slots of `dest` are left holding whatever
    /// they held before. Returns the number of values written.
    pub fn explode_into(source: &[f32], dest: &mut [f32]) -> usize {
        let mut written = 0;
        for (texel, &value) in dest.chunks_mut(RGBA).zip(source) {
            texel[0] = value;
            written += 1;
        }
        written
    }
}

impl DataEncoder for RgbaFloatEncoder {
    fn descriptor(&self) -> &FormatDescriptor {
        &self.descriptor
    }

    fn element_kind(&self) -> ElementKind {
        ElementKind::F32
    }

    /// Zero-filled buffer of `count × channel_size` floats.
    ///
    /// With one logical channel this is a quarter of the `RGBA32F` texture;
    /// size readback buffers with [`RgbaFloatEncoder::allocate_texture`].
    fn allocate(&self, count: usize) -> Result<TypedBuffer> {
        let len = texel_capacity(count, self.channel_size())?;
        Ok(TypedBuffer::zeros(ElementKind::F32, len))
    }

    fn encode(&self, source: TypedBuffer, texture_size: usize) -> Result<TypedBuffer> {
        let required = texel_capacity(texture_size, RGBA)?;
        let source = coerce_logged(source, ElementKind::F32);
        match self.descriptor.channels {
            ChannelCount::Four => Ok(fit_to_capacity(source, required)),
            ChannelCount::One => {
                let values = source.as_f32().unwrap_or_default();
                logging::log_explode(values.len());
                let mut texels = vec![0.0; required];
                Self::explode_into(values, &mut texels);
                Ok(TypedBuffer::F32(texels))
            }
        }
    }

    fn decode(&self, buffer: TypedBuffer, data_size: usize) -> Result<TypedBuffer> {
        let mut buffer = coerce_logged(buffer, ElementKind::F32);
        if let (ChannelCount::One, Some(texels)) = (self.descriptor.channels, buffer.as_f32()) {
            let values = texels
                .iter()
                .step_by(RGBA)
                .take(data_size)
                .copied()
                .collect();
            return Ok(TypedBuffer::F32(values));
        }
        buffer.truncate(data_size);
        Ok(buffer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::gl;

    #[test]
    fn test_descriptor_is_rgba() {
        for channels in [1, 4] {
            let encoder = RgbaFloatEncoder::new(channels).unwrap();
            assert_eq!(encoder.descriptor().internal_format, gl::RGBA32F);
            assert_eq!(encoder.descriptor().transfer_format, gl::RGBA);
            assert_eq!(encoder.channel_size(), channels);
        }
        assert!(RgbaFloatEncoder::new(3).is_err());
    }

    #[test]
    fn test_explode() {
        let encoder = RgbaFloatEncoder::new(1).unwrap();
        let encoded = encoder
            .encode(TypedBuffer::F32(vec![1.0, 2.0, 3.0]), 3)
            .unwrap();

        let texels = encoded.as_f32().unwrap();
        assert_eq!(texels.len(), 12);
        for (i, &v) in texels.iter().enumerate() {
            let expected = match i {
                0 => 1.0,
                4 => 2.0,
                8 => 3.0,
                _ => 0.0,
            };
            assert_eq!(v, expected, "slot {i}");
        }
    }

    #[test]
    fn test_explode_into_leaves_other_channels() {
        let mut dest = vec![9.0; 8];
        let written = RgbaFloatEncoder::explode_into(&[1.0, 2.0, 3.0], &mut dest);
        assert_eq!(written, 2);
        assert_eq!(dest, vec![1.0, 9.0, 9.0, 9.0, 2.0, 9.0, 9.0, 9.0]);
    }

    #[test]
    fn test_allocate_texture_matches_encode() {
        let encoder = RgbaFloatEncoder::new(1).unwrap();
        assert_eq!(encoder.allocate(3).unwrap().len(), 3);

        let readback = encoder.allocate_texture(3).unwrap();
        let encoded = encoder.encode(TypedBuffer::F32(vec![1.0; 3]), 3).unwrap();
        assert_eq!(readback.len(), encoded.len());
        assert_eq!(readback, TypedBuffer::F32(vec![0.0; 12]));

        let native = RgbaFloatEncoder::new(4).unwrap();
        assert_eq!(native.allocate_texture(3).unwrap(), native.allocate(3).unwrap());
    }

    #[test]
    fn test_decode_takes_red_channel() {
        let encoder = RgbaFloatEncoder::new(1).unwrap();
        let texels = TypedBuffer::F32(vec![
            1.0, 7.0, 7.0, 7.0, //
            2.0, 7.0, 7.0, 7.0, //
            3.0, 7.0, 7.0, 7.0,
        ]);
        assert_eq!(
            encoder.decode(texels.clone(), 3).unwrap(),
            TypedBuffer::F32(vec![1.0, 2.0, 3.0])
        );
        assert_eq!(
            encoder.decode(texels, 2).unwrap(),
            TypedBuffer::F32(vec![1.0, 2.0])
        );
    }

    #[test]
    fn test_native_rgba_passthrough() {
        let encoder = RgbaFloatEncoder::new(4).unwrap();
        let source: Vec<f32> = (0..8).map(|i| i as f32).collect();
        let encoded = encoder.encode(TypedBuffer::F32(source.clone()), 2).unwrap();
        assert_eq!(encoded, TypedBuffer::F32(source));

        let decoded = encoder.decode(encoded, 5).unwrap();
        assert_eq!(decoded, TypedBuffer::F32(vec![0.0, 1.0, 2.0, 3.0, 4.0]));
    }

    #[test]
    fn test_roundtrip_packed() {
        let encoder = RgbaFloatEncoder::new(1).unwrap();
        let source = vec![0.5, -1.25, 3.0, 1e-7];
        let encoded = encoder.encode(TypedBuffer::F32(source.clone()), 4).unwrap();
        let decoded = encoder.decode(encoded, 4).unwrap();
        assert_eq!(decoded, TypedBuffer::F32(source));
    }
}
