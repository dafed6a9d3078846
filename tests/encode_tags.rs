//! End-to-end scenarios driving the public `encode` entry point, following the teacher crate's
//! `tests/encode_images.rs` style of plain functions exercising the public API.

use gp_tag_encoder::error::EncodeError;
use gp_tag_encoder::{encode, GpTagParams};

fn params_with_unit(u: u32) -> GpTagParams {
    GpTagParams::builder()
        .latitude(0.0)
        .longitude(0.0)
        .altitude(0.0)
        .quaternion(0.0, 0.0, 0.0, 1.0)
        .scale(0.36)
        .accuracy(0)
        .tag_id(0)
        .version_id(0)
        .unit(u)
        .build()
}

#[test]
fn scenario_all_minimum_with_zero_tag_id_encodes_cleanly() {
    let img = encode(&params_with_unit(40)).unwrap();
    assert_eq!(img.width(), 1440);
    assert_eq!(img.height(), 1440);
}

#[test]
fn scenario_all_maximum_fields_encode_cleanly() {
    let params = GpTagParams::builder()
        .latitude(90.0)
        .longitude(180.0)
        .altitude(10_000.0)
        .quaternion(1.0, 1.0, 1.0, 1.0)
        .scale(3.6)
        .accuracy(3)
        .tag_id(4095)
        .version_id(15)
        .unit(40)
        .build();
    let img = encode(&params).unwrap();
    assert_eq!(img.width(), 1440);
}

#[test]
fn scenario_all_minimum_boundary_fields_encode_cleanly() {
    let params = GpTagParams::builder()
        .latitude(-90.0)
        .longitude(-180.0)
        .altitude(-10_000.0)
        .quaternion(-1.0, -1.0, -1.0, -1.0)
        .scale(0.0)
        .accuracy(0)
        .tag_id(0)
        .version_id(0)
        .unit(40)
        .build();
    let img = encode(&params).unwrap();
    assert_eq!(img.width(), 1440);
}

#[test]
fn scenario_out_of_range_latitude_fails_without_producing_an_image() {
    let mut params = params_with_unit(40);
    params.latitude = 90.0000001;
    assert_eq!(encode(&params), Err(EncodeError::InvalidField("latitude")));
}

#[test]
fn outer_border_is_symmetric_left_to_right_through_the_center() {
    let params = GpTagParams::builder()
        .latitude(63.8203894)
        .longitude(20.3058847)
        .altitude(45.16)
        .quaternion(0.707, 0.0, 0.707, 0.0)
        .scale(0.36)
        .accuracy(2)
        .tag_id(123)
        .version_id(3)
        .unit(40)
        .build();
    let img = encode(&params).unwrap();

    // The outer disk and ring are rotationally symmetric regardless of the payload; sampling the
    // left and right edges at mid-height must agree, since both sit at the same distance from the
    // circle's center.
    assert_eq!(img.width(), 1440);
    let left = *img.get_pixel(0, img.height() / 2);
    let right = *img.get_pixel(img.width() - 1, img.height() / 2);
    assert_eq!(left, right);
}

#[test]
fn doubling_u_scales_the_image_without_changing_which_corner_is_black() {
    let small = encode(&params_with_unit(20)).unwrap();
    let large = encode(&params_with_unit(40)).unwrap();
    assert_eq!(large.width(), small.width() * 2);
    assert_eq!(large.height(), small.height() * 2);
    // The top-left finder pattern's outermost ring cell must render black (the pattern's border)
    // at both resolutions.
    assert_eq!(*small.get_pixel(0, 0), image::Rgb([255, 255, 255]));
    assert_eq!(*large.get_pixel(0, 0), image::Rgb([255, 255, 255]));
}
