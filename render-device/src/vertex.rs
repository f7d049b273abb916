//! Vertex elements and their translation into vertex attributes.
//!
//! A [`VertexElement`] is what users write: an attribute location, an abstract element type, a
//! component count, a stride and an offset. Before reaching a backend, every element is checked
//! and turned into a [`VertexAttrib`], where the abstract type has been split into a
//! [`ScalarType`] plus a `normalized` flag and where a zero stride has been resolved into the
//! tightly-packed stride.

use std::fmt;

/// Type of the components of a vertex element.
///
/// The `*Normalize` variants ask the backend to map integer values into the `[0, 1]` (unsigned) or
/// `[-1, 1]` (signed) floating range when they are fetched.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum VertexElementType {
  /// 8-bit signed integer.
  Byte,
  /// 16-bit signed integer.
  Short,
  /// 32-bit signed integer.
  Int,
  /// 8-bit unsigned integer.
  UnsignedByte,
  /// 16-bit unsigned integer.
  UnsignedShort,
  /// 32-bit unsigned integer.
  UnsignedInt,
  /// 8-bit signed integer, normalized.
  ByteNormalize,
  /// 16-bit signed integer, normalized.
  ShortNormalize,
  /// 32-bit signed integer, normalized.
  IntNormalize,
  /// 8-bit unsigned integer, normalized.
  UnsignedByteNormalize,
  /// 16-bit unsigned integer, normalized.
  UnsignedShortNormalize,
  /// 32-bit unsigned integer, normalized.
  UnsignedIntNormalize,
  /// 16-bit floating point.
  HalfFloat,
  /// 32-bit floating point.
  Float,
  /// 64-bit floating point.
  Double,
}

impl VertexElementType {
  /// Every element type.
  pub const ALL: [VertexElementType; 15] = [
    VertexElementType::Byte,
    VertexElementType::Short,
    VertexElementType::Int,
    VertexElementType::UnsignedByte,
    VertexElementType::UnsignedShort,
    VertexElementType::UnsignedInt,
    VertexElementType::ByteNormalize,
    VertexElementType::ShortNormalize,
    VertexElementType::IntNormalize,
    VertexElementType::UnsignedByteNormalize,
    VertexElementType::UnsignedShortNormalize,
    VertexElementType::UnsignedIntNormalize,
    VertexElementType::HalfFloat,
    VertexElementType::Float,
    VertexElementType::Double,
  ];

  /// Scalar type of a single component.
  pub fn scalar_type(self) -> ScalarType {
    match self {
      VertexElementType::Byte | VertexElementType::ByteNormalize => ScalarType::I8,
      VertexElementType::Short | VertexElementType::ShortNormalize => ScalarType::I16,
      VertexElementType::Int | VertexElementType::IntNormalize => ScalarType::I32,
      VertexElementType::UnsignedByte | VertexElementType::UnsignedByteNormalize => ScalarType::U8,
      VertexElementType::UnsignedShort | VertexElementType::UnsignedShortNormalize => {
        ScalarType::U16
      }
      VertexElementType::UnsignedInt | VertexElementType::UnsignedIntNormalize => ScalarType::U32,
      VertexElementType::HalfFloat => ScalarType::F16,
      VertexElementType::Float => ScalarType::F32,
      VertexElementType::Double => ScalarType::F64,
    }
  }

  /// Whether integer components must be normalized into a floating range when fetched.
  pub fn is_normalized(self) -> bool {
    matches!(
      self,
      VertexElementType::ByteNormalize
        | VertexElementType::ShortNormalize
        | VertexElementType::IntNormalize
        | VertexElementType::UnsignedByteNormalize
        | VertexElementType::UnsignedShortNormalize
        | VertexElementType::UnsignedIntNormalize
    )
  }
}

/// Scalar component type, as backends see it.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ScalarType {
  /// `i8`.
  I8,
  /// `i16`.
  I16,
  /// `i32`.
  I32,
  /// `u8`.
  U8,
  /// `u16`.
  U16,
  /// `u32`.
  U32,
  /// Half-precision float.
  F16,
  /// `f32`.
  F32,
  /// `f64`.
  F64,
}

impl ScalarType {
  /// Size in bytes of a single component.
  pub fn unit_size(self) -> usize {
    match self {
      ScalarType::I8 | ScalarType::U8 => 1,
      ScalarType::I16 | ScalarType::U16 | ScalarType::F16 => 2,
      ScalarType::I32 | ScalarType::U32 | ScalarType::F32 => 4,
      ScalarType::F64 => 8,
    }
  }
}

/// One typed attribute within a vertex buffer.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct VertexElement {
  /// Attribute location in the vertex shader.
  pub index: u32,
  /// Type of each component.
  pub ty: VertexElementType,
  /// Number of components (1 to 4).
  pub size: u8,
  /// Bytes between two consecutive occurrences; `0` means tightly packed.
  pub stride: usize,
  /// Byte offset of the first occurrence in the buffer.
  pub offset: usize,
}

impl VertexElement {
  /// Create a tightly-packed element starting at the beginning of its buffer.
  pub fn new(index: u32, ty: VertexElementType, size: u8) -> Self {
    VertexElement {
      index,
      ty,
      size,
      stride: 0,
      offset: 0,
    }
  }

  /// Set the stride.
  pub fn with_stride(self, stride: usize) -> Self {
    VertexElement { stride, ..self }
  }

  /// Set the offset.
  pub fn with_offset(self, offset: usize) -> Self {
    VertexElement { offset, ..self }
  }

  /// Stride actually used when fetching the element.
  ///
  /// A zero stride resolves to `size × unit size`.
  pub fn resolved_stride(&self) -> usize {
    if self.stride == 0 {
      self.size as usize * self.ty.scalar_type().unit_size()
    } else {
      self.stride
    }
  }

  /// Check and translate the element into a [`VertexAttrib`].
  pub fn to_attrib(&self) -> Result<VertexAttrib, InvalidVertexElement> {
    if !(1..=4).contains(&self.size) {
      return Err(InvalidVertexElement {
        index: self.index,
        size: self.size,
      });
    }

    Ok(VertexAttrib {
      index: self.index,
      size: self.size,
      ty: self.ty.scalar_type(),
      normalized: self.ty.is_normalized(),
      stride: self.resolved_stride(),
      offset: self.offset,
    })
  }
}

/// A checked vertex element, ready to be handed to a backend.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct VertexAttrib {
  /// Attribute location.
  pub index: u32,
  /// Number of components (1 to 4).
  pub size: u8,
  /// Scalar type of a component.
  pub ty: ScalarType,
  /// Whether integer components are normalized into a floating range.
  pub normalized: bool,
  /// Resolved stride, never zero for non-empty elements.
  pub stride: usize,
  /// Byte offset of the first occurrence.
  pub offset: usize,
}

/// A vertex element with a component count out of `1..=4`.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct InvalidVertexElement {
  /// Location of the faulty element.
  pub index: u32,
  /// Component count that was requested.
  pub size: u8,
}

impl fmt::Display for InvalidVertexElement {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    write!(
      f,
      "vertex element at location {} has {} components (expected 1 to 4)",
      self.index, self.size
    )
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn normalized_exactly_for_normalize_variants() {
    let normalized = [
      VertexElementType::ByteNormalize,
      VertexElementType::ShortNormalize,
      VertexElementType::IntNormalize,
      VertexElementType::UnsignedByteNormalize,
      VertexElementType::UnsignedShortNormalize,
      VertexElementType::UnsignedIntNormalize,
    ];

    for ty in VertexElementType::ALL {
      let attrib = VertexElement::new(0, ty, 1).to_attrib().unwrap();
      assert_eq!(attrib.normalized, normalized.contains(&ty), "{:?}", ty);
    }

    let count = VertexElementType::ALL
      .iter()
      .filter(|ty| ty.is_normalized())
      .count();
    assert_eq!(count, 6);
  }

  #[test]
  fn normalize_variants_share_scalar_type() {
    assert_eq!(
      VertexElementType::UnsignedShortNormalize.scalar_type(),
      VertexElementType::UnsignedShort.scalar_type()
    );
    assert_eq!(
      VertexElementType::IntNormalize.scalar_type(),
      VertexElementType::Int.scalar_type()
    );
  }

  #[test]
  fn zero_stride_is_tightly_packed() {
    let float3 = VertexElement::new(0, VertexElementType::Float, 3);
    assert_eq!(float3.resolved_stride(), 12);

    let double2 = VertexElement::new(1, VertexElementType::Double, 2);
    assert_eq!(double2.resolved_stride(), 16);

    let half4 = VertexElement::new(2, VertexElementType::HalfFloat, 4);
    assert_eq!(half4.resolved_stride(), 8);

    let explicit = VertexElement::new(0, VertexElementType::Float, 3).with_stride(20);
    assert_eq!(explicit.resolved_stride(), 20);
  }

  #[test]
  fn attrib_keeps_layout() {
    let elem = VertexElement::new(1, VertexElementType::Float, 2)
      .with_stride(20)
      .with_offset(12);
    let attrib = elem.to_attrib().unwrap();

    assert_eq!(attrib.index, 1);
    assert_eq!(attrib.size, 2);
    assert_eq!(attrib.ty, ScalarType::F32);
    assert!(!attrib.normalized);
    assert_eq!(attrib.stride, 20);
    assert_eq!(attrib.offset, 12);
  }

  #[test]
  fn component_count_is_checked() {
    for size in [0, 5, 255] {
      let elem = VertexElement::new(7, VertexElementType::Float, size);
      assert_eq!(
        elem.to_attrib(),
        Err(InvalidVertexElement { index: 7, size })
      );
    }
  }
}
