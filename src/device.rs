//! High-level driver API for the MPU-6050
//!
//! This module provides the user-facing interface to the sensor:
//! construction (wake-up, interrupt enable, range configuration),
//! raw and converted sample reads, and the auxiliary register
//! operations the device supports.

use crate::interrupt::InterruptStatus;
use crate::registers::Mpu6050 as RegisterDevice;
use crate::sensors::{
    AccelFullScale, AccelReading, AccelUnit, Dlpf, GyroFullScale, GyroOffset, GyroReading,
    GyroUnit,
};
use crate::Error;

#[cfg(not(feature = "async"))]
use device_driver::RegisterInterface;

#[cfg(feature = "async")]
use device_driver::AsyncRegisterInterface;

/// Accelerometer data (raw 16-bit values)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AccelData {
    /// X-axis acceleration (raw)
    pub x: i16,
    /// Y-axis acceleration (raw)
    pub y: i16,
    /// Z-axis acceleration (raw)
    pub z: i16,
}

/// Gyroscope data (raw 16-bit values)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GyroData {
    /// X-axis rotation (raw)
    pub x: i16,
    /// Y-axis rotation (raw)
    pub y: i16,
    /// Z-axis rotation (raw)
    pub z: i16,
}

/// Construction parameters for [`Mpu6050Driver`]
///
/// The defaults mirror the sensor's most common deployment: ±2g,
/// ±250°/s, readings in m/s² and rad/s, zero gyro bias.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Mpu6050Config {
    /// Accelerometer full-scale range
    pub accel_range: AccelFullScale,
    /// Gyroscope full-scale range
    pub gyro_range: GyroFullScale,
    /// Output unit for acceleration readings
    pub accel_unit: AccelUnit,
    /// Output unit for gyroscope readings
    pub gyro_unit: GyroUnit,
    /// Static gyroscope bias, in the configured output unit
    pub gyro_offset: GyroOffset,
}

impl Default for Mpu6050Config {
    fn default() -> Self {
        Self {
            accel_range: AccelFullScale::G2,
            gyro_range: GyroFullScale::Dps250,
            accel_unit: AccelUnit::MetersPerSecondSquared,
            gyro_unit: GyroUnit::RadiansPerSecond,
            gyro_offset: GyroOffset::default(),
        }
    }
}

/// Main driver for the MPU-6050
///
/// Every operation takes `&mut self` and performs at most two blocking
/// bus transactions. A single instance must be serialized by the caller
/// (exclusive ownership or an external mutex); the underlying bus
/// transaction is not reentrant.
pub struct Mpu6050Driver<I> {
    device: RegisterDevice<I>,
    accel_range: AccelFullScale,
    gyro_range: GyroFullScale,
    accel_unit: AccelUnit,
    gyro_unit: GyroUnit,
    // Cached LSB-per-unit divisors. Updated together with the range
    // code writes in configure_*_range so they cannot drift apart.
    accel_sensitivity: f64,
    gyro_sensitivity: f64,
    gyro_offset: GyroOffset,
}

#[cfg(not(feature = "async"))]
impl<I> Mpu6050Driver<I>
where
    I: RegisterInterface<AddressType = u8>,
{
    /// Create a new MPU-6050 driver and configure the device
    ///
    /// Construction has observable side effects on the hardware:
    /// 1. `PWR_MGMT_1` is cleared, waking the sensor out of sleep into
    ///    continuous sampling mode (not reversed on drop);
    /// 2. the data ready interrupt is enabled in `INT_ENABLE`;
    /// 3. both full-scale ranges are written per `config`.
    ///
    /// # Errors
    ///
    /// Returns an error if any of the configuration writes fails. The
    /// device may then be partially configured; discard the interface
    /// and reconstruct.
    pub fn new(interface: I, config: Mpu6050Config) -> Result<Self, Error<I::Error>> {
        let device = RegisterDevice::new(interface);
        let mut driver = Self {
            device,
            accel_range: config.accel_range,
            gyro_range: config.gyro_range,
            accel_unit: config.accel_unit,
            gyro_unit: config.gyro_unit,
            accel_sensitivity: config.accel_range.sensitivity(),
            gyro_sensitivity: config.gyro_range.sensitivity(),
            gyro_offset: config.gyro_offset,
        };

        // Clear SLEEP (whole register to 0x00)
        driver.device.pwr_mgmt_1().write(|w| {
            w.set_sleep(false);
        })?;

        // DATA_RDY_EN
        driver.device.int_enable().write(|w| {
            w.set_data_rdy_en(true);
        })?;

        driver.configure_accel_range(config.accel_range)?;
        driver.configure_gyro_range(config.gyro_range)?;

        Ok(driver)
    }

    /// Configure the accelerometer full-scale range
    ///
    /// Writes the range code to `ACCEL_CONFIG` bits \[4:3\] (all other
    /// bits cleared) and returns the matching sensitivity divisor in
    /// LSB/g, which subsequent reads will use.
    ///
    /// # Errors
    ///
    /// Returns an error if the bus write fails. The cached divisor and
    /// the byte on the device may then disagree; the driver must be
    /// treated as unusable until reconstructed.
    pub fn configure_accel_range(
        &mut self,
        range: AccelFullScale,
    ) -> Result<f64, Error<I::Error>> {
        self.device.accel_config().write(|w| {
            w.set_afs_sel(range as u8);
        })?;

        self.accel_range = range;
        self.accel_sensitivity = range.sensitivity();
        Ok(self.accel_sensitivity)
    }

    /// Configure the gyroscope full-scale range
    ///
    /// Writes the range code to `GYRO_CONFIG` bits \[4:3\] (all other
    /// bits cleared) and returns the matching sensitivity divisor in
    /// LSB/(°/s), which subsequent reads will use.
    ///
    /// # Errors
    ///
    /// Returns an error if the bus write fails. The cached divisor and
    /// the byte on the device may then disagree; the driver must be
    /// treated as unusable until reconstructed.
    pub fn configure_gyro_range(&mut self, range: GyroFullScale) -> Result<f64, Error<I::Error>> {
        self.device.gyro_config().write(|w| {
            w.set_fs_sel(range as u8);
        })?;

        self.gyro_range = range;
        self.gyro_sensitivity = range.sensitivity();
        Ok(self.gyro_sensitivity)
    }

    /// Read raw accelerometer data
    ///
    /// Returns raw 16-bit values for X, Y, Z axes.
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn read_accel_raw(&mut self) -> Result<AccelData, Error<I::Error>> {
        // Register addresses: ACCEL_XOUT_H (0x3B) through ACCEL_ZOUT_L (0x40)
        const ACCEL_XOUT_H: u8 = 0x3B;
        let (x, y, z) = self.read_triplet(ACCEL_XOUT_H)?;
        Ok(AccelData { x, y, z })
    }

    /// Read raw gyroscope data
    ///
    /// Returns raw 16-bit values for X, Y, Z axes.
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn read_gyro_raw(&mut self) -> Result<GyroData, Error<I::Error>> {
        // Register addresses: GYRO_XOUT_H (0x43) through GYRO_ZOUT_L (0x48)
        const GYRO_XOUT_H: u8 = 0x43;
        let (x, y, z) = self.read_triplet(GYRO_XOUT_H)?;
        Ok(GyroData { x, y, z })
    }

    /// Read acceleration in the configured unit (g or m/s²)
    ///
    /// Each axis is `raw / sensitivity * scale_factor`. No offset is
    /// applied to acceleration.
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn acceleration(&mut self) -> Result<AccelReading, Error<I::Error>> {
        let raw = self.read_accel_raw()?;
        Ok(AccelReading::from_raw(
            raw.x,
            raw.y,
            raw.z,
            self.accel_sensitivity,
            self.accel_unit.scale_factor(),
        ))
    }

    /// Read angular rate in the configured unit (°/s or rad/s)
    ///
    /// Each axis is `raw / sensitivity * scale_factor`, then the stored
    /// bias offset is subtracted. The offset is interpreted in the
    /// configured output unit; see [`GyroOffset`].
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn gyro(&mut self) -> Result<GyroReading, Error<I::Error>> {
        let raw = self.read_gyro_raw()?;
        let reading = GyroReading::from_raw(
            raw.x,
            raw.y,
            raw.z,
            self.gyro_sensitivity,
            self.gyro_unit.scale_factor(),
        );
        Ok(self.gyro_offset.apply(reading))
    }

    /// Read one big-endian 16-bit value from a high/low register pair
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn read_register_short(&mut self, register: u8) -> Result<i16, Error<I::Error>> {
        let mut buffer = [0u8; 2];
        self.device
            .interface
            .read_register(register, 16, &mut buffer)?;
        Ok(i16::from_be_bytes(buffer))
    }

    /// Write one big-endian 16-bit value to a high/low register pair
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn write_register_short(&mut self, register: u8, value: i16) -> Result<(), Error<I::Error>> {
        self.device
            .interface
            .write_register(register, 16, &value.to_be_bytes())?;
        Ok(())
    }

    /// Read the raw temperature value
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn read_temperature(&mut self) -> Result<i16, Error<I::Error>> {
        // Register addresses: TEMP_OUT_H (0x41), TEMP_OUT_L (0x42)
        const TEMP_OUT_H: u8 = 0x41;
        self.read_register_short(TEMP_OUT_H)
    }

    /// Read the die temperature in °C
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn read_temperature_celsius(&mut self) -> Result<f64, Error<I::Error>> {
        let raw = self.read_temperature()?;
        Ok(Self::temperature_to_celsius(raw))
    }

    /// Convert a raw temperature value to °C
    ///
    /// Temperature in °C = `TEMP_OUT` / 340 + 36.53 (datasheet formula).
    #[must_use]
    pub fn temperature_to_celsius(raw: i16) -> f64 {
        f64::from(raw) / 340.0 + 36.53
    }

    /// Read and decode the `INT_STATUS` register
    ///
    /// Status bits clear on read.
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn read_interrupt_status(&mut self) -> Result<InterruptStatus, Error<I::Error>> {
        let status = self.device.int_status().read()?;

        Ok(InterruptStatus {
            data_ready: status.data_rdy_int(),
            i2c_master: status.i_2_c_mst_int(),
            fifo_overflow: status.fifo_oflow_int(),
        })
    }

    /// Check whether a new sample set has been latched
    ///
    /// Reads `INT_STATUS`, which clears the flag.
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn data_ready(&mut self) -> Result<bool, Error<I::Error>> {
        Ok(self.read_interrupt_status()?.data_ready)
    }

    /// Set the sample rate divider
    ///
    /// Sample rate = gyroscope output rate / (1 + `divider`). The
    /// gyroscope output rate is 8 kHz with the DLPF disabled
    /// ([`Dlpf::Hz260`]) and 1 kHz otherwise.
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn set_sample_rate_divider(&mut self, divider: u8) -> Result<(), Error<I::Error>> {
        self.device.smplrt_div().write(|w| {
            w.set_smplrt_div(divider);
        })?;
        Ok(())
    }

    /// Configure the digital low pass filter shared by both sensors
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn set_dlpf(&mut self, dlpf: Dlpf) -> Result<(), Error<I::Error>> {
        self.device.config().write(|w| {
            w.set_dlpf_cfg(dlpf as u8);
        })?;
        Ok(())
    }

    /// Replace the gyroscope bias offset
    ///
    /// The new offset must be expressed in the currently configured
    /// output unit.
    pub const fn set_gyro_offset(&mut self, offset: GyroOffset) {
        self.gyro_offset = offset;
    }

    /// Get the current gyroscope bias offset
    #[must_use]
    pub const fn gyro_offset(&self) -> &GyroOffset {
        &self.gyro_offset
    }

    /// Get the currently configured accelerometer range
    #[must_use]
    pub const fn accel_range(&self) -> AccelFullScale {
        self.accel_range
    }

    /// Get the currently configured gyroscope range
    #[must_use]
    pub const fn gyro_range(&self) -> GyroFullScale {
        self.gyro_range
    }

    /// Get the configured acceleration output unit
    #[must_use]
    pub const fn accel_unit(&self) -> AccelUnit {
        self.accel_unit
    }

    /// Get the configured gyroscope output unit
    #[must_use]
    pub const fn gyro_unit(&self) -> GyroUnit {
        self.gyro_unit
    }

    /// Consume the driver and return the underlying interface
    pub fn release(self) -> I {
        self.device.interface
    }

    /// Get a reference to the underlying register device (for advanced usage)
    pub const fn device(&self) -> &RegisterDevice<I> {
        &self.device
    }

    /// Read three consecutive big-endian i16 values in one transaction
    ///
    /// The 6-byte read is issued as a single transfer; sample coherence
    /// across the block is guaranteed by the device's output latching,
    /// not by software.
    fn read_triplet(&mut self, first_register: u8) -> Result<(i16, i16, i16), Error<I::Error>> {
        let mut buffer = [0u8; 6];
        self.device
            .interface
            .read_register(first_register, 48, &mut buffer)?;

        let x = i16::from_be_bytes([buffer[0], buffer[1]]);
        let y = i16::from_be_bytes([buffer[2], buffer[3]]);
        let z = i16::from_be_bytes([buffer[4], buffer[5]]);

        Ok((x, y, z))
    }
}

#[cfg(feature = "async")]
impl<I> Mpu6050Driver<I>
where
    I: AsyncRegisterInterface<AddressType = u8>,
{
    /// Create a new MPU-6050 driver and configure the device
    ///
    /// Construction has observable side effects on the hardware:
    /// 1. `PWR_MGMT_1` is cleared, waking the sensor out of sleep into
    ///    continuous sampling mode (not reversed on drop);
    /// 2. the data ready interrupt is enabled in `INT_ENABLE`;
    /// 3. both full-scale ranges are written per `config`.
    ///
    /// # Errors
    ///
    /// Returns an error if any of the configuration writes fails. The
    /// device may then be partially configured; discard the interface
    /// and reconstruct.
    pub async fn new(interface: I, config: Mpu6050Config) -> Result<Self, Error<I::Error>> {
        let device = RegisterDevice::new(interface);
        let mut driver = Self {
            device,
            accel_range: config.accel_range,
            gyro_range: config.gyro_range,
            accel_unit: config.accel_unit,
            gyro_unit: config.gyro_unit,
            accel_sensitivity: config.accel_range.sensitivity(),
            gyro_sensitivity: config.gyro_range.sensitivity(),
            gyro_offset: config.gyro_offset,
        };

        // Clear SLEEP (whole register to 0x00)
        driver
            .device
            .pwr_mgmt_1()
            .write_async(|w| {
                w.set_sleep(false);
            })
            .await?;

        // DATA_RDY_EN
        driver
            .device
            .int_enable()
            .write_async(|w| {
                w.set_data_rdy_en(true);
            })
            .await?;

        driver.configure_accel_range(config.accel_range).await?;
        driver.configure_gyro_range(config.gyro_range).await?;

        Ok(driver)
    }

    /// Configure the accelerometer full-scale range
    ///
    /// Writes the range code to `ACCEL_CONFIG` bits \[4:3\] (all other
    /// bits cleared) and returns the matching sensitivity divisor in
    /// LSB/g, which subsequent reads will use.
    ///
    /// # Errors
    ///
    /// Returns an error if the bus write fails. The cached divisor and
    /// the byte on the device may then disagree; the driver must be
    /// treated as unusable until reconstructed.
    pub async fn configure_accel_range(
        &mut self,
        range: AccelFullScale,
    ) -> Result<f64, Error<I::Error>> {
        self.device
            .accel_config()
            .write_async(|w| {
                w.set_afs_sel(range as u8);
            })
            .await?;

        self.accel_range = range;
        self.accel_sensitivity = range.sensitivity();
        Ok(self.accel_sensitivity)
    }

    /// Configure the gyroscope full-scale range
    ///
    /// Writes the range code to `GYRO_CONFIG` bits \[4:3\] (all other
    /// bits cleared) and returns the matching sensitivity divisor in
    /// LSB/(°/s), which subsequent reads will use.
    ///
    /// # Errors
    ///
    /// Returns an error if the bus write fails. The cached divisor and
    /// the byte on the device may then disagree; the driver must be
    /// treated as unusable until reconstructed.
    pub async fn configure_gyro_range(
        &mut self,
        range: GyroFullScale,
    ) -> Result<f64, Error<I::Error>> {
        self.device
            .gyro_config()
            .write_async(|w| {
                w.set_fs_sel(range as u8);
            })
            .await?;

        self.gyro_range = range;
        self.gyro_sensitivity = range.sensitivity();
        Ok(self.gyro_sensitivity)
    }

    /// Read raw accelerometer data
    ///
    /// Returns raw 16-bit values for X, Y, Z axes.
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn read_accel_raw(&mut self) -> Result<AccelData, Error<I::Error>> {
        // Register addresses: ACCEL_XOUT_H (0x3B) through ACCEL_ZOUT_L (0x40)
        const ACCEL_XOUT_H: u8 = 0x3B;
        let (x, y, z) = self.read_triplet(ACCEL_XOUT_H).await?;
        Ok(AccelData { x, y, z })
    }

    /// Read raw gyroscope data
    ///
    /// Returns raw 16-bit values for X, Y, Z axes.
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn read_gyro_raw(&mut self) -> Result<GyroData, Error<I::Error>> {
        // Register addresses: GYRO_XOUT_H (0x43) through GYRO_ZOUT_L (0x48)
        const GYRO_XOUT_H: u8 = 0x43;
        let (x, y, z) = self.read_triplet(GYRO_XOUT_H).await?;
        Ok(GyroData { x, y, z })
    }

    /// Read acceleration in the configured unit (g or m/s²)
    ///
    /// Each axis is `raw / sensitivity * scale_factor`. No offset is
    /// applied to acceleration.
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn acceleration(&mut self) -> Result<AccelReading, Error<I::Error>> {
        let raw = self.read_accel_raw().await?;
        Ok(AccelReading::from_raw(
            raw.x,
            raw.y,
            raw.z,
            self.accel_sensitivity,
            self.accel_unit.scale_factor(),
        ))
    }

    /// Read angular rate in the configured unit (°/s or rad/s)
    ///
    /// Each axis is `raw / sensitivity * scale_factor`, then the stored
    /// bias offset is subtracted. The offset is interpreted in the
    /// configured output unit; see [`GyroOffset`].
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn gyro(&mut self) -> Result<GyroReading, Error<I::Error>> {
        let raw = self.read_gyro_raw().await?;
        let reading = GyroReading::from_raw(
            raw.x,
            raw.y,
            raw.z,
            self.gyro_sensitivity,
            self.gyro_unit.scale_factor(),
        );
        Ok(self.gyro_offset.apply(reading))
    }

    /// Read one big-endian 16-bit value from a high/low register pair
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn read_register_short(&mut self, register: u8) -> Result<i16, Error<I::Error>> {
        let mut buffer = [0u8; 2];
        self.device
            .interface
            .read_register(register, 16, &mut buffer)
            .await?;
        Ok(i16::from_be_bytes(buffer))
    }

    /// Write one big-endian 16-bit value to a high/low register pair
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn write_register_short(
        &mut self,
        register: u8,
        value: i16,
    ) -> Result<(), Error<I::Error>> {
        self.device
            .interface
            .write_register(register, 16, &value.to_be_bytes())
            .await?;
        Ok(())
    }

    /// Read the raw temperature value
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn read_temperature(&mut self) -> Result<i16, Error<I::Error>> {
        // Register addresses: TEMP_OUT_H (0x41), TEMP_OUT_L (0x42)
        const TEMP_OUT_H: u8 = 0x41;
        self.read_register_short(TEMP_OUT_H).await
    }

    /// Read the die temperature in °C
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn read_temperature_celsius(&mut self) -> Result<f64, Error<I::Error>> {
        let raw = self.read_temperature().await?;
        Ok(Self::temperature_to_celsius(raw))
    }

    /// Convert a raw temperature value to °C
    ///
    /// Temperature in °C = `TEMP_OUT` / 340 + 36.53 (datasheet formula).
    #[must_use]
    pub fn temperature_to_celsius(raw: i16) -> f64 {
        f64::from(raw) / 340.0 + 36.53
    }

    /// Read and decode the `INT_STATUS` register
    ///
    /// Status bits clear on read.
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn read_interrupt_status(&mut self) -> Result<InterruptStatus, Error<I::Error>> {
        let status = self.device.int_status().read_async().await?;

        Ok(InterruptStatus {
            data_ready: status.data_rdy_int(),
            i2c_master: status.i_2_c_mst_int(),
            fifo_overflow: status.fifo_oflow_int(),
        })
    }

    /// Check whether a new sample set has been latched
    ///
    /// Reads `INT_STATUS`, which clears the flag.
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn data_ready(&mut self) -> Result<bool, Error<I::Error>> {
        Ok(self.read_interrupt_status().await?.data_ready)
    }

    /// Set the sample rate divider
    ///
    /// Sample rate = gyroscope output rate / (1 + `divider`). The
    /// gyroscope output rate is 8 kHz with the DLPF disabled
    /// ([`Dlpf::Hz260`]) and 1 kHz otherwise.
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn set_sample_rate_divider(&mut self, divider: u8) -> Result<(), Error<I::Error>> {
        self.device
            .smplrt_div()
            .write_async(|w| {
                w.set_smplrt_div(divider);
            })
            .await?;
        Ok(())
    }

    /// Configure the digital low pass filter shared by both sensors
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn set_dlpf(&mut self, dlpf: Dlpf) -> Result<(), Error<I::Error>> {
        self.device
            .config()
            .write_async(|w| {
                w.set_dlpf_cfg(dlpf as u8);
            })
            .await?;
        Ok(())
    }

    /// Replace the gyroscope bias offset
    ///
    /// The new offset must be expressed in the currently configured
    /// output unit.
    pub const fn set_gyro_offset(&mut self, offset: GyroOffset) {
        self.gyro_offset = offset;
    }

    /// Get the current gyroscope bias offset
    #[must_use]
    pub const fn gyro_offset(&self) -> &GyroOffset {
        &self.gyro_offset
    }

    /// Get the currently configured accelerometer range
    #[must_use]
    pub const fn accel_range(&self) -> AccelFullScale {
        self.accel_range
    }

    /// Get the currently configured gyroscope range
    #[must_use]
    pub const fn gyro_range(&self) -> GyroFullScale {
        self.gyro_range
    }

    /// Get the configured acceleration output unit
    #[must_use]
    pub const fn accel_unit(&self) -> AccelUnit {
        self.accel_unit
    }

    /// Get the configured gyroscope output unit
    #[must_use]
    pub const fn gyro_unit(&self) -> GyroUnit {
        self.gyro_unit
    }

    /// Consume the driver and return the underlying interface
    pub fn release(self) -> I {
        self.device.interface
    }

    /// Get a reference to the underlying register device (for advanced usage)
    pub const fn device(&self) -> &RegisterDevice<I> {
        &self.device
    }

    /// Read three consecutive big-endian i16 values in one transaction
    ///
    /// The 6-byte read is issued as a single transfer; sample coherence
    /// across the block is guaranteed by the device's output latching,
    /// not by software.
    async fn read_triplet(&mut self, first_register: u8) -> Result<(i16, i16, i16), Error<I::Error>> {
        let mut buffer = [0u8; 6];
        self.device
            .interface
            .read_register(first_register, 48, &mut buffer)
            .await?;

        let x = i16::from_be_bytes([buffer[0], buffer[1]]);
        let y = i16::from_be_bytes([buffer[2], buffer[3]]);
        let z = i16::from_be_bytes([buffer[4], buffer[5]]);

        Ok((x, y, z))
    }
}
