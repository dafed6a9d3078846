//! Conversions between printer resolution (DPI), the base unit `U` (pixels per module), and the
//! encoder's `scale` field (cells per millimeter).

/// Derives `scale` (cells/mm) from a printer's DPI and a chosen `U` (pixels per module).
pub fn scale_from_dpi_and_u(dpi: f64, u: u32) -> f64 {
    let dots_per_mm = dpi / 25.4;
    let mm_per_cell = u as f64 / dots_per_mm;
    1.0 / mm_per_cell
}

/// Derives `(U, scale)` from a printer's DPI and the desired physical tag size in millimeters.
/// `U` is rounded to the nearest pixel; `scale` is the exact cells/mm implied by `size_mm`.
pub fn u_and_scale_from_dpi_and_size(dpi: f64, size_mm: f64) -> (u32, f64) {
    const FULL_GRID_CELLS: f64 = 36.0;
    let dots_per_mm = dpi / 25.4;
    let u = ((size_mm * dots_per_mm) / FULL_GRID_CELLS).round();
    let scale = FULL_GRID_CELLS / size_mm;
    (u.max(1.0) as u32, scale)
}
