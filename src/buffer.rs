// SPDX-License-Identifier: MIT
// Copyright 2026 Tyler Zervas

//! Typed element buffers shared by the logical and physical sides.
//!
//! A logical buffer is tensor data in natural order. A physical buffer is the
//! same kinds of elements laid out as texel channels. Both are a
//! [`TypedBuffer`]; which one a value is depends on which side of an encoder
//! it sits.
//!
//! Conversions between element kinds are explicit ([`TypedBuffer::coerce`])
//! and always succeed. Float to integer conversion saturates and truncates
//! toward zero, `NaN` becomes `0`.

use crate::error::{Result, TextureError};
use candle_core::{DType, Device, Tensor};

/// Element kind of a buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    /// 32-bit IEEE float.
    F32,
    /// 32-bit unsigned integer.
    U32,
    /// 8-bit unsigned integer.
    U8,
}

impl ElementKind {
    /// Size of one element in bytes.
    #[must_use]
    pub fn size_in_bytes(self) -> usize {
        match self {
            Self::F32 | Self::U32 => 4,
            Self::U8 => 1,
        }
    }

    /// Short lowercase name, as used in log messages.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::F32 => "f32",
            Self::U32 => "u32",
            Self::U8 => "u8",
        }
    }

    /// Matching Candle dtype.
    #[must_use]
    pub fn dtype(self) -> DType {
        match self {
            Self::F32 => DType::F32,
            Self::U32 => DType::U32,
            Self::U8 => DType::U8,
        }
    }
}

impl TryFrom<DType> for ElementKind {
    type Error = TextureError;

    fn try_from(dtype: DType) -> Result<Self> {
        match dtype {
            DType::F32 => Ok(Self::F32),
            DType::U32 => Ok(Self::U32),
            DType::U8 => Ok(Self::U8),
            other => Err(TextureError::unsupported_kind(format!("{other:?}"))),
        }
    }
}

/// Flat buffer of one element kind.
#[derive(Debug, Clone, PartialEq)]
pub enum TypedBuffer {
    /// 32-bit float elements.
    F32(Vec<f32>),
    /// 32-bit unsigned integer elements.
    U32(Vec<u32>),
    /// Byte elements.
    U8(Vec<u8>),
}

impl TypedBuffer {
    /// Zero-filled buffer of `len` elements.
    #[must_use]
    pub fn zeros(kind: ElementKind, len: usize) -> Self {
        match kind {
            ElementKind::F32 => Self::F32(vec![0.0; len]),
            ElementKind::U32 => Self::U32(vec![0; len]),
            ElementKind::U8 => Self::U8(vec![0; len]),
        }
    }

    /// Element kind of this buffer.
    #[must_use]
    pub fn kind(&self) -> ElementKind {
        match self {
            Self::F32(_) => ElementKind::F32,
            Self::U32(_) => ElementKind::U32,
            Self::U8(_) => ElementKind::U8,
        }
    }

    /// Number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::F32(v) => v.len(),
            Self::U32(v) => v.len(),
            Self::U8(v) => v.len(),
        }
    }

    /// Whether the buffer holds no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Shorten to at most `len` elements.
    pub fn truncate(&mut self, len: usize) {
        match self {
            Self::F32(v) => v.truncate(len),
            Self::U32(v) => v.truncate(len),
            Self::U8(v) => v.truncate(len),
        }
    }

    /// Extend with zeros up to `len` elements; longer buffers are left alone.
    pub fn grow_zeroed(&mut self, len: usize) {
        if self.len() >= len {
            return;
        }
        match self {
            Self::F32(v) => v.resize(len, 0.0),
            Self::U32(v) => v.resize(len, 0),
            Self::U8(v) => v.resize(len, 0),
        }
    }

    /// Native-endian byte view of the elements.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            Self::F32(v) => bytemuck::cast_slice(v),
            Self::U32(v) => bytemuck::cast_slice(v),
            Self::U8(v) => v,
        }
    }

    /// Borrow as `f32` elements, if that is the kind.
    #[must_use]
    pub fn as_f32(&self) -> Option<&[f32]> {
        match self {
            Self::F32(v) => Some(v.as_slice()),
            _ => None,
        }
    }

    /// Borrow as `u32` elements, if that is the kind.
    #[must_use]
    pub fn as_u32(&self) -> Option<&[u32]> {
        match self {
            Self::U32(v) => Some(v.as_slice()),
            _ => None,
        }
    }

    /// Borrow as bytes, if that is the kind.
    #[must_use]
    pub fn as_u8(&self) -> Option<&[u8]> {
        match self {
            Self::U8(v) => Some(v.as_slice()),
            _ => None,
        }
    }

    /// Convert to `kind`, returning the buffer and whether a conversion ran.
    ///
    /// A buffer already of `kind` is moved through untouched.
    #[must_use]
    pub fn coerce(self, kind: ElementKind) -> (Self, bool) {
        if self.kind() == kind {
            return (self, false);
        }
        let converted = match kind {
            ElementKind::F32 => Self::F32(self.to_f32_vec()),
            ElementKind::U32 => Self::U32(self.to_u32_vec()),
            ElementKind::U8 => Self::U8(self.to_u8_vec()),
        };
        (converted, true)
    }

    /// Read a Candle tensor into a flat buffer, in row-major order.
    ///
    /// # Errors
    ///
    /// Returns `UnsupportedElementKind` for dtypes other than f32, u32 and
    /// u8, or a Candle error if the tensor cannot be read back.
    pub fn from_tensor(tensor: &Tensor) -> Result<Self> {
        let flat = tensor.flatten_all()?;
        Ok(match ElementKind::try_from(tensor.dtype())? {
            ElementKind::F32 => Self::F32(flat.to_vec1::<f32>()?),
            ElementKind::U32 => Self::U32(flat.to_vec1::<u32>()?),
            ElementKind::U8 => Self::U8(flat.to_vec1::<u8>()?),
        })
    }

    /// Build a Candle tensor of `shape` on `device` from this buffer.
    ///
    /// # Errors
    ///
    /// Returns a Candle error if `shape` does not match the element count.
    pub fn to_tensor(&self, shape: &[usize], device: &Device) -> Result<Tensor> {
        let tensor = match self {
            Self::F32(v) => Tensor::from_slice(v.as_slice(), shape, device)?,
            Self::U32(v) => Tensor::from_slice(v.as_slice(), shape, device)?,
            Self::U8(v) => Tensor::from_slice(v.as_slice(), shape, device)?,
        };
        Ok(tensor)
    }

    #[allow(clippy::cast_precision_loss)] // u32 above 2^24 rounds, accepted for coercion
    fn to_f32_vec(&self) -> Vec<f32> {
        match self {
            Self::F32(v) => v.clone(),
            Self::U32(v) => v.iter().map(|&x| x as f32).collect(),
            Self::U8(v) => v.iter().map(|&x| f32::from(x)).collect(),
        }
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)] // `as` saturates
    fn to_u32_vec(&self) -> Vec<u32> {
        match self {
            Self::F32(v) => v.iter().map(|&x| x as u32).collect(),
            Self::U32(v) => v.clone(),
            Self::U8(v) => v.iter().map(|&x| u32::from(x)).collect(),
        }
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)] // `as` saturates
    fn to_u8_vec(&self) -> Vec<u8> {
        match self {
            Self::F32(v) => v.iter().map(|&x| x as u8).collect(),
            Self::U32(v) => v
                .iter()
                .map(|&x| u8::try_from(x).unwrap_or(u8::MAX))
                .collect(),
            Self::U8(v) => v.clone(),
        }
    }
}

impl From<Vec<f32>> for TypedBuffer {
    fn from(v: Vec<f32>) -> Self {
        Self::F32(v)
    }
}

impl From<Vec<u32>> for TypedBuffer {
    fn from(v: Vec<u32>) -> Self {
        Self::U32(v)
    }
}

impl From<Vec<u8>> for TypedBuffer {
    fn from(v: Vec<u8>) -> Self {
        Self::U8(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zeros() {
        let buf = TypedBuffer::zeros(ElementKind::U32, 5);
        assert_eq!(buf, TypedBuffer::U32(vec![0; 5]));
        assert_eq!(buf.kind(), ElementKind::U32);
        assert!(TypedBuffer::zeros(ElementKind::F32, 0).is_empty());
    }

    #[test]
    fn test_coerce_same_kind_is_noop() {
        let (buf, converted) = TypedBuffer::F32(vec![1.5, 2.5]).coerce(ElementKind::F32);
        assert!(!converted);
        assert_eq!(buf, TypedBuffer::F32(vec![1.5, 2.5]));
    }

    #[test]
    fn test_coerce_saturates() {
        let (buf, converted) = TypedBuffer::F32(vec![-1.0, 3.7, 300.0, f32::NAN])
            .coerce(ElementKind::U8);
        assert!(converted);
        assert_eq!(buf, TypedBuffer::U8(vec![0, 3, 255, 0]));

        let (buf, _) = TypedBuffer::U32(vec![7, 1000]).coerce(ElementKind::U8);
        assert_eq!(buf, TypedBuffer::U8(vec![7, 255]));

        let (buf, _) = TypedBuffer::U8(vec![1, 2]).coerce(ElementKind::F32);
        assert_eq!(buf, TypedBuffer::F32(vec![1.0, 2.0]));
    }

    #[test]
    fn test_grow_and_truncate() {
        let mut buf = TypedBuffer::F32(vec![1.0]);
        buf.grow_zeroed(3);
        assert_eq!(buf, TypedBuffer::F32(vec![1.0, 0.0, 0.0]));
        buf.grow_zeroed(2);
        assert_eq!(buf.len(), 3);
        buf.truncate(1);
        assert_eq!(buf, TypedBuffer::F32(vec![1.0]));
    }

    #[test]
    fn test_as_bytes() {
        let buf = TypedBuffer::U32(vec![1, 2]);
        assert_eq!(buf.as_bytes().len(), 8);
        assert_eq!(&buf.as_bytes()[..4], &1u32.to_ne_bytes());
    }

    #[test]
    fn test_element_kind_dtype() {
        assert_eq!(ElementKind::try_from(DType::U8).unwrap(), ElementKind::U8);
        assert_eq!(ElementKind::F32.dtype(), DType::F32);
        assert!(matches!(
            ElementKind::try_from(DType::F64),
            Err(TextureError::UnsupportedElementKind { .. })
        ));
    }

    #[test]
    fn test_tensor_roundtrip() {
        let device = Device::Cpu;
        let tensor = Tensor::new(&[[1.0f32, 2.0], [3.0, 4.0]], &device).unwrap();
        let buf = TypedBuffer::from_tensor(&tensor).unwrap();
        assert_eq!(buf, TypedBuffer::F32(vec![1.0, 2.0, 3.0, 4.0]));

        let back = buf.to_tensor(&[2, 2], &device).unwrap();
        assert_eq!(back.dims(), &[2, 2]);
        assert_eq!(back.to_vec2::<f32>().unwrap(), vec![vec![1.0, 2.0], vec![3.0, 4.0]]);
    }

    #[test]
    fn test_from_tensor_rejects_f64() {
        let tensor = Tensor::new(&[1.0f64], &Device::Cpu).unwrap();
        assert!(TypedBuffer::from_tensor(&tensor).is_err());
    }
}
