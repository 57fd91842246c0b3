// SPDX-License-Identifier: MIT
// Copyright 2026 Tyler Zervas

//! Encoder configuration.
//!
//! Callers that choose a texture format at runtime describe it with an
//! [`EncoderConfig`] and turn it into a [`TextureEncoder`]. Picking the
//! format for a given tensor stays the caller's decision; this only checks
//! that the combination asked for exists.
//!
//! ## Example
//!
//! ```rust
//! use texture_encoder::{DataEncoder, EncoderConfig, EncoderKind, WordKind};
//!
//! let encoder = EncoderConfig::new()
//!     .with_kind(EncoderKind::Uint8)
//!     .with_channels(4)
//!     .with_word_kind(WordKind::F32)
//!     .build()?;
//! assert_eq!(encoder.channel_size(), 4);
//! # Ok::<(), texture_encoder::TextureError>(())
//! ```

use crate::encoder::{EncoderKind, TextureEncoder, Uint8Encoder, WordKind};
use crate::error::{Result, TextureError};
use crate::format::ChannelCount;

/// Configuration validation trait.
///
/// Implemented by configuration structs so they can be checked before any
/// encoder is built.
pub trait ValidatableConfig: Clone + Send + Sync {
    /// Validate the configuration parameters.
    ///
    /// # Errors
    ///
    /// Returns a configuration error describing the first invalid value.
    fn validate(&self) -> Result<()>;
}

/// Which encoder to build, and with what layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncoderConfig {
    /// Format family.
    pub kind: EncoderKind,
    /// Logical channels per texel. Ignored by the half-float placeholder.
    pub channels: usize,
    /// Word kind for four-channel `Uint8` encoders.
    pub word_kind: Option<WordKind>,
}

impl Default for EncoderConfig {
    fn default() -> Self {
        Self {
            kind: EncoderKind::Float32,
            channels: 1,
            word_kind: None,
        }
    }
}

impl EncoderConfig {
    /// Create a configuration with defaults (single-channel `Float32`).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the format family.
    #[must_use]
    pub fn with_kind(mut self, kind: EncoderKind) -> Self {
        self.kind = kind;
        self
    }

    /// Set the logical channel count.
    #[must_use]
    pub fn with_channels(mut self, channels: usize) -> Self {
        self.channels = channels;
        self
    }

    /// Set the word kind carried by `RGBA8` texels.
    #[must_use]
    pub fn with_word_kind(mut self, word_kind: WordKind) -> Self {
        self.word_kind = Some(word_kind);
        self
    }

    /// Validate and build the encoder.
    ///
    /// # Errors
    ///
    /// Returns `InvalidChannelCount` or `InvalidConfig` if [`validate`]
    /// rejects the configuration.
    ///
    /// [`validate`]: ValidatableConfig::validate
    pub fn build(&self) -> Result<TextureEncoder> {
        self.validate()?;
        let encoder = TextureEncoder::new(self.kind, self.channels)?;
        Ok(match (encoder, self.word_kind) {
            (TextureEncoder::Uint8(inner), Some(word_kind)) => {
                TextureEncoder::Uint8(Uint8Encoder::with_word_kind(inner, word_kind))
            }
            (encoder, _) => encoder,
        })
    }
}

impl ValidatableConfig for EncoderConfig {
    fn validate(&self) -> Result<()> {
        if self.kind != EncoderKind::HalfFloat {
            ChannelCount::try_from(self.channels)?;
        }
        if self.word_kind.is_some() && (self.kind != EncoderKind::Uint8 || self.channels != 4) {
            return Err(TextureError::invalid_config(
                "word kind only applies to 4-channel Uint8 encoders",
            ));
        }
        Ok(())
    }
}
