#![no_main]

use gp_tag_encoder::GpTagParams;
use libfuzzer_sys::fuzz_target;

/// Derives a [`GpTagParams`] from raw fuzz bytes, mirroring the teacher's approach of feeding
/// arbitrary bytes straight into the format under test. Values are intentionally scaled across
/// and beyond each field's valid range so `encode` sees both accepted and rejected input.
fuzz_target!(|data: &[u8]| {
    if data.len() < 16 {
        return;
    }

    let f = |i: usize, scale: f64| -> f64 {
        let byte = data[i] as f64 / 255.0;
        (byte - 0.5) * 2.0 * scale
    };

    let params = GpTagParams::builder()
        .latitude(f(0, 100.0))
        .longitude(f(1, 200.0))
        .altitude(f(2, 11_000.0))
        .quaternion(f(3, 1.2), f(4, 1.2), f(5, 1.2), f(6, 1.2))
        .scale(data[7] as f64 / 255.0 * 4.0)
        .accuracy(data[8] as u32 % 8)
        .tag_id(u32::from(data[9]) | (u32::from(data[10]) << 8))
        .version_id(data[11] as u32 % 32)
        .unit((data[12] as u32 % 32) + 1)
        .build();

    // Must never panic, regardless of whether the input is in range.
    let _ = gp_tag_encoder::encode(&params);
});
