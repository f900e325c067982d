//! Quantized trigonometry matching the game's vein generator.
//!
//! Vein shapes were tuned against the game's own 65536-entry sine table, so
//! reproducing its quantization keeps the generated distributions faithful.

use std::sync::OnceLock;

const TABLE_SIZE: usize = 65536;

/// Radians-to-table-index factor: 65536 / 2π.
const INDEX_FACTOR: f64 = 10430.378;

static SIN_TABLE: OnceLock<Vec<f64>> = OnceLock::new();

fn table() -> &'static [f64] {
    SIN_TABLE.get_or_init(|| {
        (0..TABLE_SIZE)
            .map(|i| (i as f64 * std::f64::consts::TAU / TABLE_SIZE as f64).sin())
            .collect()
    })
}

pub fn sin(value: f64) -> f64 {
    table()[((value * INDEX_FACTOR) as i32 & 0xffff) as usize]
}

pub fn cos(value: f64) -> f64 {
    table()[((value * INDEX_FACTOR + 16384.0) as i32 & 0xffff) as usize]
}

/// Floor to i32, rounding toward negative infinity.
pub fn floor(value: f64) -> i32 {
    let truncated = value as i32;
    if value < truncated as f64 {
        truncated - 1
    } else {
        truncated
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn test_sin_cos_close_to_std() {
        for i in 0..100 {
            let v = i as f64 * PI / 50.0;
            assert!((sin(v) - v.sin()).abs() < 1e-3);
            assert!((cos(v) - v.cos()).abs() < 1e-3);
        }
    }

    #[test]
    fn test_floor() {
        assert_eq!(1, floor(1.7));
        assert_eq!(1, floor(1.0));
        assert_eq!(-2, floor(-1.3));
        assert_eq!(0, floor(0.0));
    }
}
