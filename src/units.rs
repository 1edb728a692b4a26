//! Unit definitions and conversions.
//!
//! Inputs arrive in bench units:
//! - Plate area: square centimetre (cm²)
//! - Plate gap: millimetre (mm)
//! - Energy: watt-hour (Wh)
//!
//! The resistance formula is dimensionally metre-based, so every geometry
//! value is normalized before it reaches the engine formulas.

/// Square centimetres per square metre.
pub const CM2_PER_M2: f64 = 1.0e4;
/// Millimetres per metre.
pub const MM_PER_M: f64 = 1.0e3;
/// Seconds per hour (also joules per watt-hour).
pub const SECONDS_PER_HOUR: f64 = 3600.0;
/// Joules per watt-hour.
pub const JOULES_PER_WH: f64 = SECONDS_PER_HOUR;
/// Approximation of π used when a round plate's diameter is entered.
pub const PLATE_PI: f64 = 3.1416;

/// Convert a plate area in cm² to m².
#[inline]
pub fn cm2_to_m2(area_cm2: f64) -> f64 {
    area_cm2 / CM2_PER_M2
}

/// Convert a plate gap in mm to m.
#[inline]
pub fn mm_to_m(gap_mm: f64) -> f64 {
    gap_mm / MM_PER_M
}

/// Convert watt-hours to joules.
#[inline]
pub fn wh_to_joules(energy_wh: f64) -> f64 {
    energy_wh * JOULES_PER_WH
}

/// Area (cm²) of a round plate with the given diameter (cm).
pub fn circular_area_cm2(diameter_cm: f64) -> f64 {
    PLATE_PI * (diameter_cm / 2.0).powi(2)
}
