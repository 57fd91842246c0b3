// SPDX-License-Identifier: MIT
// Copyright 2026 Tyler Zervas

//! # texture-encoder
//!
//! Pluggable encoders that map flat tensor buffers onto the channel layout of
//! GPU textures and back.
//!
//! A compute backend that keeps intermediate tensors in textures has to
//! convert between a flat array of `f32`, `u32` or `u8` and the texel grid a
//! texture imposes: one or four channels per texel, with a channel type fixed
//! by the internal format. Each supported format has an encoder that knows
//! how to allocate, pack and unpack for it.
//!
//! ## Modules
//!
//! - [`encoder`] - the [`DataEncoder`] contract and one encoder per format
//! - [`buffer`] - [`TypedBuffer`], the flat element buffer both sides use
//! - [`format`] - [`FormatDescriptor`] and graphics API enum values
//! - [`config`] - runtime encoder selection with validation
//! - [`layout`] - texture dimensions and byte estimates for a tensor
//! - [`logging`] - subscriber setup and the encoder's diagnostics
//! - [`error`] - [`TextureError`]
//!
//! The encoders never touch a graphics context. Allocating textures,
//! uploading and reading back, and running shaders are left to the caller.
//!
//! ## Quick Start
//!
//! ```rust
//! use texture_encoder::{DataEncoder, RgbaFloatEncoder, TypedBuffer};
//!
//! // One value per RGBA texel, in the red channel
//! let encoder = RgbaFloatEncoder::new(1)?;
//! let texels = encoder.encode(TypedBuffer::F32(vec![1.0, 2.0, 3.0]), 3)?;
//! assert_eq!(texels.len(), 12);
//!
//! let values = encoder.decode(texels, 3)?;
//! assert_eq!(values, TypedBuffer::F32(vec![1.0, 2.0, 3.0]));
//! # Ok::<(), texture_encoder::TextureError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod buffer;
pub mod config;
pub mod encoder;
pub mod error;
pub mod format;
pub mod layout;
pub mod logging;

// Re-exports for convenience
pub use buffer::{ElementKind, TypedBuffer};
pub use config::{EncoderConfig, ValidatableConfig};
pub use encoder::{
    DataEncoder, EncoderKind, Float32Encoder, HalfFloatEncoder, RgbaFloatEncoder, TextureEncoder,
    Uint8Encoder, WordKind,
};
pub use error::{Result, TextureError};
pub use format::{ChannelCount, ChannelType, FormatDescriptor};
pub use layout::{estimate_texture_bytes, TextureLayout, DEFAULT_MAX_TEXTURE_SIZE};
pub use logging::{init_logging, LogConfig, LogLevel};
