// SPDX-License-Identifier: MIT
// Copyright 2026 Tyler Zervas

//! 8-bit unsigned integer encoder (`R8` / `RGBA8`).
//!
//! Nothing is repacked; buffers are reinterpreted. With one channel a
//! logical element is one byte. With four channels a logical element is one
//! 4-byte word spread over a texel's RGBA bytes in native byte order, so an
//! `f32` or `u32` tensor can ride through an `RGBA8` texture bit-exactly.

use super::{fit_to_capacity, texel_capacity, DataEncoder};
use crate::buffer::{ElementKind, TypedBuffer};
use crate::error::Result;
use crate::format::{ChannelCount, FormatDescriptor};

/// Element kind of the word stored in one `RGBA8` texel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum WordKind {
    /// 32-bit unsigned integer.
    #[default]
    U32,
    /// 32-bit float.
    F32,
}

impl WordKind {
    /// Matching buffer element kind.
    #[must_use]
    pub fn element_kind(self) -> ElementKind {
        match self {
            Self::U32 => ElementKind::U32,
            Self::F32 => ElementKind::F32,
        }
    }
}

/// Encoder for byte textures with one or four channels.
///
/// Physical buffers are always bytes. Encoding never converts values: a
/// byte source is moved through without copying, and a word source
/// (`f32`/`u32`) has its native bytes copied out once, whatever the channel
/// count or word kind. The word kind only shapes `decode`, so an `f32`
/// source decoded as `u32` words comes back as its bit patterns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Uint8Encoder {
    descriptor: FormatDescriptor,
    word_kind: WordKind,
}

impl Uint8Encoder {
    /// Create an encoder with `channels` channels per texel.
    ///
    /// Four-channel encoders default to `u32` words.
    ///
    /// # Errors
    ///
    /// Returns `InvalidChannelCount` unless `channels` is 1 or 4.
    pub fn new(channels: usize) -> Result<Self> {
        let channels = ChannelCount::try_from(channels)?;
        Ok(Self {
            descriptor: FormatDescriptor::uint8(channels),
            word_kind: WordKind::default(),
        })
    }

    /// Set the word kind decoded from four-channel textures.
    ///
    /// Has no effect on single-channel encoders.
    #[must_use]
    pub fn with_word_kind(mut self, word_kind: WordKind) -> Self {
        self.word_kind = word_kind;
        self
    }

    /// Word kind decoded from four-channel textures.
    #[must_use]
    pub fn word_kind(&self) -> WordKind {
        self.word_kind
    }

    fn take_bytes(buffer: TypedBuffer) -> Vec<u8> {
        match buffer {
            TypedBuffer::U8(bytes) => bytes,
            words => words.as_bytes().to_vec(),
        }
    }
}

impl DataEncoder for Uint8Encoder {
    fn descriptor(&self) -> &FormatDescriptor {
        &self.descriptor
    }

    fn element_kind(&self) -> ElementKind {
        match self.descriptor.channels {
            ChannelCount::One => ElementKind::U8,
            ChannelCount::Four => self.word_kind.element_kind(),
        }
    }

    fn allocate(&self, count: usize) -> Result<TypedBuffer> {
        let len = texel_capacity(count, self.channel_size())?;
        Ok(TypedBuffer::zeros(ElementKind::U8, len))
    }

    fn encode(&self, source: TypedBuffer, texture_size: usize) -> Result<TypedBuffer> {
        let required = texel_capacity(texture_size, self.channel_size())?;
        let bytes = TypedBuffer::U8(Self::take_bytes(source));
        Ok(fit_to_capacity(bytes, required))
    }

    fn decode(&self, buffer: TypedBuffer, data_size: usize) -> Result<TypedBuffer> {
        let mut bytes = Self::take_bytes(buffer);
        let decoded = match self.descriptor.channels {
            ChannelCount::One => {
                bytes.truncate(data_size);
                TypedBuffer::U8(bytes)
            }
            ChannelCount::Four => {
                let words = bytes.chunks_exact(self.channel_size()).take(data_size);
                match self.word_kind {
                    WordKind::U32 => {
                        TypedBuffer::U32(words.map(bytemuck::pod_read_unaligned).collect())
                    }
                    WordKind::F32 => {
                        TypedBuffer::F32(words.map(bytemuck::pod_read_unaligned).collect())
                    }
                }
            }
        };
        Ok(decoded)
    }
}
