//! Fixed-point quantization of the real-valued pose fields into fixed-width unsigned integers.
//!
//! Every real field is quantized the same way: `q = floor((value - min) * (2^bits - 1) / (max -
//! min))`, truncating toward zero. The intermediate product is computed in `f64` and then in
//! `u64` (not `u32`) because the largest field (longitude, 36 bits) has a product that can exceed
//! 2^32 before truncation.

use crate::error::{EncodeError, EncodeResult};

/// The inclusive real-valued range and bit width of one quantized field.
#[derive(Debug, Clone, Copy)]
pub struct FieldRange {
    pub name: &'static str,
    pub min: f64,
    pub max: f64,
    pub bits: u8,
}

pub const LATITUDE: FieldRange = FieldRange { name: "latitude", min: -90.0, max: 90.0, bits: 35 };
pub const LONGITUDE: FieldRange = FieldRange { name: "longitude", min: -180.0, max: 180.0, bits: 36 };
pub const ALTITUDE: FieldRange = FieldRange { name: "altitude", min: -10_000.0, max: 10_000.0, bits: 25 };
pub const QUATERNION_COMPONENT: FieldRange =
    FieldRange { name: "quaternion", min: -1.0, max: 1.0, bits: 16 };
pub const SCALE: FieldRange = FieldRange { name: "scale", min: 0.0, max: 3.6, bits: 16 };

/// Quantizes `value` against `range`, returning [`EncodeError::InvalidField`] if it falls outside
/// `[range.min, range.max]`. The result is a `u64` because the widest field (longitude, 36 bits)
/// does not fit in 32 bits.
pub fn quantize(value: f64, range: FieldRange) -> EncodeResult<u64> {
    if !value.is_finite() || value < range.min || value > range.max {
        return Err(EncodeError::InvalidField(range.name));
    }
    let max_code = (1u64 << range.bits) - 1;
    let fraction = (value - range.min) / (range.max - range.min);
    let product = fraction * max_code as f64;
    // Truncation toward zero, matching Python's `int()` on a non-negative float.
    Ok(product.floor() as u64)
}

/// The inverse of [`quantize`]: recovers the real value a quantized code represents, to within
/// one least-significant unit.
pub fn dequantize(code: u64, range: FieldRange) -> f64 {
    let max_code = (1u64 << range.bits) - 1;
    range.min + (code as f64 / max_code as f64) * (range.max - range.min)
}

/// Validates a pass-through integer field against an inclusive upper bound, returning the value
/// unchanged (integer fields carry no quantization error).
pub fn check_integer(name: &'static str, value: u32, max_inclusive: u32) -> EncodeResult<u32> {
    if value > max_inclusive {
        return Err(EncodeError::InvalidField(name));
    }
    Ok(value)
}
