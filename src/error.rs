// SPDX-License-Identifier: MIT
// Copyright 2026 Tyler Zervas

//! Error types for texture data encoding.
//!
//! Only two things can make an encoder fail: asking for a channel layout the
//! formats cannot express, or calling into the half-precision placeholder.
//! Type mismatches and undersized buffers are repaired in place and reported
//! through [`crate::logging`] instead.
//!
//! ## Error Hierarchy
//!
//! ```text
//! TextureError
//! ├── InvalidChannelCount     - channel size outside {1, 4}
//! ├── Unimplemented           - placeholder format operations
//! ├── InvalidConfig           - other configuration values out of range
//! ├── UnsupportedElementKind  - tensor dtype outside {f32, u32, u8}
//! ├── TextureTooLarge         - layout exceeds the maximum texture extent
//! └── Candle                  - underlying Candle errors
//! ```

use thiserror::Error;

/// Result type alias for texture encoder operations.
pub type Result<T> = std::result::Result<T, TextureError>;

/// Errors raised by encoder construction and operation.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum TextureError {
    /// Channel count outside the supported set.
    ///
    /// Raised at construction time. Texture formats carry either a single
    /// red channel or four RGBA channels.
    #[error("invalid number of channels: {channels} (expected 1 or 4)")]
    InvalidChannelCount {
        /// Channel count that was requested.
        channels: usize,
    },

    /// Operation not implemented for this format.
    ///
    /// Every operation of the half-precision placeholder returns this.
    #[error("not implemented: {feature}")]
    Unimplemented {
        /// Description of the missing operation.
        feature: String,
    },

    /// Invalid configuration parameter.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Tensor dtype that has no logical buffer representation.
    #[error("unsupported element kind: {dtype}")]
    UnsupportedElementKind {
        /// Name of the rejected dtype.
        dtype: String,
    },

    /// Requested texel count does not fit in a single texture.
    #[error("texture too large: {elements} texels exceeds limit of {max_texels}")]
    TextureTooLarge {
        /// Texels requested.
        elements: usize,
        /// Largest texel count the device can hold.
        max_texels: usize,
    },

    /// Underlying Candle error.
    #[error("candle error: {0}")]
    Candle(#[from] candle_core::Error),
}

impl TextureError {
    /// Create an invalid channel count error.
    #[must_use]
    pub fn invalid_channels(channels: usize) -> Self {
        Self::InvalidChannelCount { channels }
    }

    /// Create an unimplemented operation error.
    pub fn unimplemented(feature: impl Into<String>) -> Self {
        Self::Unimplemented {
            feature: feature.into(),
        }
    }

    /// Create an invalid configuration error.
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }

    /// Create an unsupported element kind error.
    pub fn unsupported_kind(dtype: impl Into<String>) -> Self {
        Self::UnsupportedElementKind {
            dtype: dtype.into(),
        }
    }

    /// Create a texture too large error.
    #[must_use]
    pub fn too_large(elements: usize, max_texels: usize) -> Self {
        Self::TextureTooLarge {
            elements,
            max_texels,
        }
    }

    /// Whether this error comes from a bad encoder configuration.
    #[must_use]
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            Self::InvalidChannelCount { .. } | Self::InvalidConfig(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = TextureError::invalid_channels(2);
        assert_eq!(
            err.to_string(),
            "invalid number of channels: 2 (expected 1 or 4)"
        );

        let err = TextureError::unimplemented("half-float encode");
        assert!(err.to_string().contains("half-float encode"));

        let err = TextureError::too_large(1 << 30, 1 << 24);
        assert!(err.to_string().contains("texture too large"));
    }

    #[test]
    fn test_is_configuration() {
        assert!(TextureError::invalid_channels(3).is_configuration());
        assert!(TextureError::invalid_config("word kind").is_configuration());
        assert!(!TextureError::unimplemented("decode").is_configuration());
    }

    #[test]
    fn test_error_from_candle() {
        let candle_err = candle_core::Error::Msg("boom".to_string());
        let err: TextureError = candle_err.into();
        assert!(matches!(err, TextureError::Candle(_)));
    }
}
