//! Gyroscope sensor types and configuration
//!
//! Provides types, enums, and conversion functions for the MPU-6050's
//! 3-axis gyroscope, including the static bias offset applied to every
//! reading.

/// Scale factor from °/s to rad/s
pub const DEG_S_TO_RAD_S: f64 = 0.017453292519943;

/// Gyroscope full-scale range
///
/// The discriminant is the `FS_SEL` code written to `GYRO_CONFIG`
/// bits \[4:3\].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GyroFullScale {
    /// ±250°/s range
    Dps250 = 0,
    /// ±500°/s range
    Dps500 = 1,
    /// ±1000°/s range
    Dps1000 = 2,
    /// ±2000°/s range
    Dps2000 = 3,
}

impl GyroFullScale {
    /// Get the sensitivity in LSB/(°/s)
    ///
    /// This is used to convert raw sensor values to physical units.
    #[must_use]
    pub const fn sensitivity(self) -> f64 {
        match self {
            Self::Dps250 => 131.0, // LSB/(°/s)
            Self::Dps500 => 65.5,  // LSB/(°/s)
            Self::Dps1000 => 32.8, // LSB/(°/s)
            Self::Dps2000 => 16.4, // LSB/(°/s)
        }
    }

    /// Get the maximum measurable value in °/s
    #[must_use]
    pub const fn max_value(self) -> u16 {
        match self {
            Self::Dps250 => 250,
            Self::Dps500 => 500,
            Self::Dps1000 => 1000,
            Self::Dps2000 => 2000,
        }
    }
}

/// Output unit for converted gyroscope readings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GyroUnit {
    /// Degrees per second
    DegreesPerSecond,
    /// Radians per second
    RadiansPerSecond,
}

impl GyroUnit {
    /// Get the scale factor applied after sensitivity division
    #[must_use]
    pub const fn scale_factor(self) -> f64 {
        match self {
            Self::DegreesPerSecond => 1.0,
            Self::RadiansPerSecond => DEG_S_TO_RAD_S,
        }
    }
}

/// Gyroscope data in physical units
///
/// The unit is whichever [`GyroUnit`] the driver was configured with.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GyroReading {
    /// X-axis rotation rate
    pub x: f64,
    /// Y-axis rotation rate
    pub y: f64,
    /// Z-axis rotation rate
    pub z: f64,
}

impl GyroReading {
    /// Create from raw sensor values
    ///
    /// Each axis is computed as `raw / sensitivity * scale_factor`. The
    /// bias offset is not applied here; see [`GyroOffset::apply`].
    ///
    /// # Arguments
    ///
    /// * `raw_x` - Raw X-axis value
    /// * `raw_y` - Raw Y-axis value
    /// * `raw_z` - Raw Z-axis value
    /// * `sensitivity` - Sensitivity in LSB/(°/s) (from `GyroFullScale::sensitivity()`)
    /// * `scale_factor` - Unit scale factor (from `GyroUnit::scale_factor()`)
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

    /// Get the magnitude of the rotation rate vector
    #[must_use]
    pub fn magnitude(&self) -> f64 {
        libm::sqrt(self.x * self.x + self.y * self.y + self.z * self.z)
    }
}

/// Static gyroscope bias offset
///
/// Expressed in the driver's configured output unit (°/s or rad/s) and
/// subtracted from every converted reading. The driver never computes
/// or rescales it: if the output unit changes, the caller must supply a
/// new offset in that unit, otherwise readings are silently wrong.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GyroOffset {
    /// X-axis bias
    pub x: f64,
    /// Y-axis bias
    pub y: f64,
    /// Z-axis bias
    pub z: f64,
}

impl GyroOffset {
    /// Create an offset from per-axis bias values
    #[must_use]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Subtract this offset from a converted reading
    #[must_use]
    pub fn apply(&self, reading: GyroReading) -> GyroReading {
        GyroReading {
            x: reading.x - self.x,
            y: reading.y - self.y,
            z: reading.z - self.z,
        }
    }
}
