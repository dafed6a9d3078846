//! Encoding of GP-Tag fiducial markers
//!
//! A GP-Tag is a circular, printable fiducial marker that carries a quantized geospatial pose
//! (latitude, longitude, altitude, orientation quaternion, position accuracy, and a physical
//! scale) plus a small reserved identifier (a tag ID and a format version), protected by
//! Reed-Solomon error correction and rendered as a black-and-white raster image.
//!
//! The pipeline is: quantize the real-valued fields ([`quantize`]), pack them into fixed-width bit
//! strings ([`bitpack`]), protect each string with Reed-Solomon parity ([`ecc`]), lay the main
//! codeword into a 21x21 module grid ([`grid`]), and rasterize the grid plus the reserved-area
//! bits into an image ([`raster`]).
//!
//! # Related Links
//! * <https://en.wikipedia.org/wiki/Reed%E2%80%93Solomon_error_correction> - Reed-Solomon codes

pub mod convert;
mod bitpack;
mod ecc;
pub mod error;
mod grid;
pub mod params;
mod quantize;
mod raster;
mod reserved_area;

pub use self::error::{EncodeError, EncodeResult};
pub use self::params::{GpTagParams, GpTagParamsBuilder};
pub use image::RgbImage;

/// Encodes `params` into a complete GP-Tag marker image.
///
/// Every real-valued field is validated against its declared range before anything is packed;
/// the first field found out of range is reported via [`EncodeError::InvalidField`]. The grid
/// layout and Reed-Solomon coding are fixed by the format and cannot fail for valid input, but
/// [`EncodeError::PayloadOverflow`] and [`EncodeError::EncodingFailed`] are still reported rather
/// than assumed impossible.
pub fn encode(params: &GpTagParams) -> EncodeResult<RgbImage> {
    if params.unit == 0 {
        return Err(EncodeError::InvalidField("u"));
    }
    let latitude = quantize::quantize(params.latitude, quantize::LATITUDE)?;
    let longitude = quantize::quantize(params.longitude, quantize::LONGITUDE)?;
    let altitude = quantize::quantize(params.altitude, quantize::ALTITUDE)?;
    let mut quaternion = [0u64; 4];
    for (i, component) in params.quaternion.iter().enumerate() {
        quaternion[i] = quantize::quantize(*component, quantize::QUATERNION_COMPONENT)?;
    }
    let accuracy = quantize::check_integer("accuracy", params.accuracy, 0b11)? as u64;
    let scale = quantize::quantize(params.scale, quantize::SCALE)?;
    let tag_id = quantize::check_integer("tag_id", params.tag_id, 0xFFF)?;
    let version_id = quantize::check_integer("version_id", params.version_id, 0xF)?;

    let main_data = bitpack::pack_main(&bitpack::MainFields {
        latitude,
        longitude,
        altitude,
        quaternion,
        accuracy,
        scale,
    });
    let reserved_data = bitpack::pack_reserved(&bitpack::ReservedFields { tag_id, version_id });

    let main_codeword = ecc::encode_main(&main_data)?;
    let reserved_codeword = ecc::encode_reserved(&reserved_data)?;

    let main_bits = ecc::bits_msb_first(&main_codeword);
    let reserved_bits = ecc::bits_msb_first(&reserved_codeword);

    let grid = grid::build_grid(&main_bits)?;
    Ok(raster::render(&grid, &reserved_bits, params.unit))
}
