// SPDX-License-Identifier: MIT
// Copyright 2026 Tyler Zervas

//! Full-precision float encoder (`R32F` / `RGBA32F`).

use super::{coerce_logged, fit_to_capacity, texel_capacity, DataEncoder};
use crate::buffer::{ElementKind, TypedBuffer};
use crate::error::Result;
use crate::format::{ChannelCount, FormatDescriptor};

/// Encoder for 32-bit float textures with one or four channels.
///
/// Logical and physical layouts are identical, so encoding only has to make
/// sure the buffer is large enough. An `f32` source that already covers
/// `texture_size × channel_size` elements is returned as-is (same
/// allocation). Anything else is converted or padded into a buffer the
/// caller then owns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Float32Encoder {
    descriptor: FormatDescriptor,
}

impl Float32Encoder {
    /// Create an encoder with `channels` channels per texel.
    ///
    /// # Errors
    ///
    /// Returns `InvalidChannelCount` unless `channels` is 1 or 4.
    pub fn new(channels: usize) -> Result<Self> {
        let channels = ChannelCount::try_from(channels)?;
        Ok(Self {
            descriptor: FormatDescriptor::float32(channels),
        })
    }
}

impl DataEncoder for Float32Encoder {
    fn descriptor(&self) -> &FormatDescriptor {
        &self.descriptor
    }

    fn element_kind(&self) -> ElementKind {
        ElementKind::F32
    }

    fn allocate(&self, count: usize) -> Result<TypedBuffer> {
        let len = texel_capacity(count, self.channel_size())?;
        Ok(TypedBuffer::zeros(ElementKind::F32, len))
    }

    fn encode(&self, source: TypedBuffer, texture_size: usize) -> Result<TypedBuffer> {
        let required = texel_capacity(texture_size, self.channel_size())?;
        let source = coerce_logged(source, ElementKind::F32);
        Ok(fit_to_capacity(source, required))
    }

    fn decode(&self, buffer: TypedBuffer, data_size: usize) -> Result<TypedBuffer> {
        let mut buffer = coerce_logged(buffer, ElementKind::F32);
        buffer.truncate(data_size);
        Ok(buffer)
    }
}
