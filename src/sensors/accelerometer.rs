//! Accelerometer sensor types and configuration
//!
//! Provides types, enums, and conversion functions for the MPU-6050's
//! 3-axis accelerometer.

/// Standard gravity in m/s², used to convert g to m/s²
pub const STANDARD_GRAVITY: f64 = 9.80665;

/// Accelerometer full-scale range
///
/// The discriminant is the `AFS_SEL` code written to `ACCEL_CONFIG`
/// bits \[4:3\].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AccelFullScale {
    /// ±2g range (most sensitive, least range)
    G2 = 0,
    /// ±4g range
    G4 = 1,
    /// ±8g range
    G8 = 2,
    /// ±16g range (least sensitive, most range)
    G16 = 3,
}

impl AccelFullScale {
    /// Get the sensitivity in LSB/g (Least Significant Bit per g)
    ///
    /// This is used to convert raw sensor values to physical units.
    #[must_use]
    pub const fn sensitivity(self) -> f64 {
        match self {
            Self::G2 => 16384.0, // LSB/g
            Self::G4 => 8192.0,  // LSB/g
            Self::G8 => 4096.0,  // LSB/g
            Self::G16 => 2048.0, // LSB/g
        }
    }

    /// Get the maximum measurable value in g
    #[must_use]
    pub const fn max_value(self) -> u8 {
        match self {
            Self::G2 => 2,
            Self::G4 => 4,
            Self::G8 => 8,
            Self::G16 => 16,
        }
    }
}

/// Output unit for converted acceleration readings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AccelUnit {
    /// Standard gravities (g)
    G,
    /// Meters per second squared
    MetersPerSecondSquared,
}

impl AccelUnit {
    /// Get the scale factor applied after sensitivity division
    #[must_use]
    pub const fn scale_factor(self) -> f64 {
        match self {
            Self::G => 1.0,
            Self::MetersPerSecondSquared => STANDARD_GRAVITY,
        }
    }
}

/// Accelerometer data in physical units
///
/// The unit is whichever [`AccelUnit`] the driver was configured with.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AccelReading {
    /// X-axis acceleration
    pub x: f64,
    /// Y-axis acceleration
    pub y: f64,
    /// Z-axis acceleration
    pub z: f64,
}

impl AccelReading {
    /// Create from raw sensor values
    ///
    /// Each axis is computed as `raw / sensitivity * scale_factor`.
    ///
    /// # Arguments
    ///
    /// * `raw_x` - Raw X-axis value
    /// * `raw_y` - Raw Y-axis value
    /// * `raw_z` - Raw Z-axis value
    /// * `sensitivity` - Sensitivity in LSB/g (from `AccelFullScale::sensitivity()`)
    /// * `scale_factor` - Unit scale factor (from `AccelUnit::scale_factor()`)
    #[must_use]
    pub fn from_raw(
        raw_x: i16,
        raw_y: i16,
        raw_z: i16,
        sensitivity: f64,
        scale_factor: f64,
    ) -> Self {
        Self {
            x: f64::from(raw_x) / sensitivity * scale_factor,
            y: f64::from(raw_y) / sensitivity * scale_factor,
            z: f64::from(raw_z) / sensitivity * scale_factor,
        }
    }

    /// Get the magnitude of the acceleration vector
    #[must_use]
    pub fn magnitude(&self) -> f64 {
        libm::sqrt(self.x * self.x + self.y * self.y + self.z * self.z)
    }
}
