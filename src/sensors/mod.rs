//! Sensor types for the MPU-6050
//!
//! This module provides types, enums, and conversion helpers for the
//! two sensors on the die:
//! - Accelerometer (3-axis)
//! - Gyroscope (3-axis)
//!
//! All sensor operations are performed through methods on `Mpu6050Driver`.

pub mod accelerometer;
pub mod gyroscope;

// Re-export main types
pub use accelerometer::{AccelFullScale, AccelReading, AccelUnit, STANDARD_GRAVITY};
pub use gyroscope::{GyroFullScale, GyroOffset, GyroReading, GyroUnit, DEG_S_TO_RAD_S};

/// Digital Low Pass Filter (DLPF) configuration
///
/// The MPU-6050 has a single filter shared by the accelerometer and
/// gyroscope, selected via `CONFIG.DLPF_CFG`. Variants are named after
/// the accelerometer bandwidth; the gyroscope bandwidth for the same
/// setting differs slightly (see [`gyro_bandwidth_hz`](Self::gyro_bandwidth_hz)).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Dlpf {
    /// 260 Hz accelerometer bandwidth (filter effectively disabled)
    Hz260 = 0,
    /// 184 Hz accelerometer bandwidth
    Hz184 = 1,
    /// 94 Hz accelerometer bandwidth
    Hz94 = 2,
    /// 44 Hz accelerometer bandwidth
    Hz44 = 3,
    /// 21 Hz accelerometer bandwidth
    Hz21 = 4,
    /// 10 Hz accelerometer bandwidth
    Hz10 = 5,
    /// 5 Hz accelerometer bandwidth
    Hz5 = 6,
}

impl Dlpf {
    /// Get the accelerometer 3dB bandwidth in Hz
    #[must_use]
    pub const fn accel_bandwidth_hz(self) -> u16 {
        match self {
            Self::Hz260 => 260,
            Self::Hz184 => 184,
            Self::Hz94 => 94,
            Self::Hz44 => 44,
            Self::Hz21 => 21,
            Self::Hz10 => 10,
            Self::Hz5 => 5,
        }
    }

    /// Get the gyroscope 3dB bandwidth in Hz
    #[must_use]
    pub const fn gyro_bandwidth_hz(self) -> u16 {
        match self {
            Self::Hz260 => 256,
            Self::Hz184 => 188,
            Self::Hz94 => 98,
            Self::Hz44 => 42,
            Self::Hz21 => 20,
            Self::Hz10 => 10,
            Self::Hz5 => 5,
        }
    }
}
