// SPDX-License-Identifier: MIT
// Copyright 2026 Tyler Zervas

//! Half-precision float encoder placeholder (`RGBA16F`).

use super::DataEncoder;
use crate::buffer::{ElementKind, TypedBuffer};
use crate::error::{Result, TextureError};
use crate::format::FormatDescriptor;

/// Reserves the `RGBA16F` format. Every operation fails with `Unimplemented`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HalfFloatEncoder {
    descriptor: FormatDescriptor,
}

impl HalfFloatEncoder {
    /// Create the placeholder. Always four channels.
    #[must_use]
    pub fn new() -> Self {
        Self {
            descriptor: FormatDescriptor::rgba_float16(),
        }
    }
}

impl Default for HalfFloatEncoder {
    fn default() -> Self {
        Self::new()
    }
}

impl DataEncoder for HalfFloatEncoder {
    fn descriptor(&self) -> &FormatDescriptor {
        &self.descriptor
    }

    fn element_kind(&self) -> ElementKind {
        ElementKind::F32
    }

    fn allocate(&self, _count: usize) -> Result<TypedBuffer> {
        Err(TextureError::unimplemented("half-float allocate"))
    }

    fn encode(&self, _source: TypedBuffer, _texture_size: usize) -> Result<TypedBuffer> {
        Err(TextureError::unimplemented("half-float encode"))
    }

    fn decode(&self, _buffer: TypedBuffer, _data_size: usize) -> Result<TypedBuffer> {
        Err(TextureError::unimplemented("half-float decode"))
    }
}
