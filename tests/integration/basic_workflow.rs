//! Integration tests for end-to-end driver workflows

use crate::common::{assert_float_eq, create_mock_driver, create_mock_driver_with};
use mpu6050::sensors::{AccelFullScale, AccelUnit, GyroFullScale, GyroOffset, GyroUnit};
use mpu6050::Mpu6050Config;

#[test]
fn test_complete_initialization_workflow() {
    let config = Mpu6050Config {
        accel_range: AccelFullScale::G4,
        gyro_range: GyroFullScale::Dps500,
        accel_unit: AccelUnit::G,
        gyro_unit: GyroUnit::DegreesPerSecond,
        gyro_offset: GyroOffset::new(0.5, 0.0, 0.0),
    };
    let (mut driver, interface) = create_mock_driver_with(config);

    // Device state after construction
    assert_eq!(interface.get_register(0x6B), 0x00, "PWR_MGMT_1 cleared");
    assert_eq!(interface.get_register(0x38), 0x01, "DATA_RDY_EN set");
    assert_eq!(interface.get_register(0x1C), 0x08, "±4g code");
    assert_eq!(interface.get_register(0x1B), 0x08, "±500°/s code");

    // 8192 LSB at ±4g is 1 g; 131 LSB at ±500°/s is 2°/s
    interface.set_accel_data(8192, 0, -8192);
    interface.set_gyro_data(131, 0, 0);

    let accel = driver.acceleration().unwrap();
    assert_eq!(accel.x, 1.0);
    assert_eq!(accel.z, -1.0);

    let gyro = driver.gyro().unwrap();
    assert_float_eq(gyro.x, 1.5, 1e-9); // 2°/s minus the 0.5°/s bias
    assert_float_eq(gyro.y, 0.0, 1e-9);
}

#[test]
fn test_data_ready_flow() {
    let (mut driver, interface) = create_mock_driver();

    assert!(!driver.data_ready().unwrap());

    interface.set_register(0x3A, 0x01);
    assert!(driver.data_ready().unwrap());

    interface.set_register(0x3A, 0x00);
    interface.set_accel_data(100, 200, 300);
    let raw = driver.read_accel_raw().unwrap();
    assert_eq!(raw.x, 100);
}

#[test]
fn test_interrupt_status_decode() {
    let (mut driver, interface) = create_mock_driver();

    interface.set_register(0x3A, 0b0001_1001);

    let status = driver.read_interrupt_status().unwrap();
    assert!(status.data_ready);
    assert!(status.i2c_master);
    assert!(status.fifo_overflow);
    assert!(status.any());
}

#[test]
fn test_reconfiguration_workflow() {
    let (mut driver, interface) = create_mock_driver_with(Mpu6050Config {
        accel_unit: AccelUnit::G,
        gyro_unit: GyroUnit::DegreesPerSecond,
        ..Default::default()
    });

    interface.set_accel_data(16384, 0, 0);
    let accel = driver.acceleration().unwrap();
    assert_eq!(accel.x, 1.0);

    // Narrow the range; the same count now reads four times larger
    let divisor = driver.configure_accel_range(AccelFullScale::G8).unwrap();
    assert_eq!(divisor, 4096.0);
    assert_eq!(interface.get_register(0x1C), 0x10);

    let accel = driver.acceleration().unwrap();
    assert_eq!(accel.x, 4.0);
}

#[test]
fn test_error_recovery() {
    let (mut driver, interface) = create_mock_driver();

    interface.fail_next_read();
    assert!(driver.acceleration().is_err());

    interface.set_accel_data(100, 200, 300);
    assert!(driver.acceleration().is_ok());
}

#[test]
fn test_release_returns_interface() {
    let (driver, handle) = create_mock_driver();

    let interface = driver.release();
    // The released interface still shares state with the test handle
    interface.set_register(0x19, 42);
    assert_eq!(handle.get_register(0x19), 42);
}
