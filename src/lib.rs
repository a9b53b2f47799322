#![no_std]
#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

pub mod device;
pub mod interface;
pub mod interrupt;
pub mod registers;
pub mod sensors;

// Re-export main types
pub use device::{AccelData, GyroData, Mpu6050Config, Mpu6050Driver};
pub use interface::I2cInterface;
pub use interrupt::InterruptStatus;
pub use sensors::{
    AccelFullScale, AccelReading, AccelUnit, Dlpf, GyroFullScale, GyroOffset, GyroReading,
    GyroUnit,
};

/// MPU-6050 I2C address when the AD0 pin is high (default: 0x69)
///
/// Use [`I2cInterface::default()`] for this configuration.
pub const I2C_ADDRESS_AD0_HIGH: u8 = 0x69;

/// MPU-6050 I2C address when the AD0 pin is low (alternative: 0x68)
///
/// Use this address when the AD0 pin is grounded or left floating on a
/// board with a pull-down. Use [`I2cInterface::alternative()`] for this
/// configuration.
pub const I2C_ADDRESS_AD0_LOW: u8 = 0x68;

/// Driver errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<E> {
    /// Communication error with the device
    ///
    /// Wraps the transport-level failure (no ack, timeout, arbitration
    /// loss). The failed transaction is not retried; the call that
    /// triggered it returns this error unchanged.
    Bus(E),
}

impl<E> From<E> for Error<E> {
    fn from(error: E) -> Self {
        Self::Bus(error)
    }
}
