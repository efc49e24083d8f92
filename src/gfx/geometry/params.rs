//! Parameter validation shared by the generators
//!
//! Every generator validates its parameter record before allocating anything,
//! so callers never receive a half-built shape.

use crate::error::{Error, Result};

/// Smallest radial segment count for shapes built around the Y axis
pub const MIN_RADIAL_SEGMENTS: u32 = 3;

pub(crate) fn require_positive(name: &'static str, value: f32) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(reject(name, format!("must be finite and > 0, got {}", value)))
    }
}

pub(crate) fn require_non_negative(name: &'static str, value: f32) -> Result<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(reject(name, format!("must be finite and >= 0, got {}", value)))
    }
}

pub(crate) fn require_finite(name: &'static str, value: f32) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(reject(name, format!("must be finite, got {}", value)))
    }
}

pub(crate) fn require_segments(name: &'static str, value: u32, min: u32) -> Result<()> {
    if value >= min {
        Ok(())
    } else {
        Err(reject(name, format!("must be at least {}, got {}", min, value)))
    }
}

/// Log and build an [`Error::InvalidParameter`]
pub(crate) fn reject(name: &'static str, reason: String) -> Error {
    log::warn!("rejecting shape parameter `{}`: {}", name, reason);
    Error::invalid_parameter(name, reason)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positive_rejects_zero_and_nan() {
        assert!(require_positive("width", 1.0).is_ok());
        assert!(require_positive("width", 0.0).is_err());
        assert!(require_positive("width", -2.0).is_err());
        assert!(require_positive("width", f32::NAN).is_err());
        assert!(require_positive("width", f32::INFINITY).is_err());
    }

    #[test]
    fn test_segments_minimum() {
        assert!(require_segments("radial_segments", 3, MIN_RADIAL_SEGMENTS).is_ok());
        let err = require_segments("radial_segments", 2, MIN_RADIAL_SEGMENTS).unwrap_err();
        assert_eq!(
            err,
            Error::invalid_parameter("radial_segments", "must be at least 3, got 2")
        );
    }

    #[test]
    fn test_non_negative_allows_zero() {
        assert!(require_non_negative("radius_top", 0.0).is_ok());
        assert!(require_non_negative("radius_top", -0.5).is_err());
        assert!(require_finite("phi_start", -1.0).is_ok());
        assert!(require_finite("phi_start", f32::NAN).is_err());
    }
}
