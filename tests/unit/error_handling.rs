//! Unit tests for error handling: every transport failure must surface
//! as `Error::Bus`, never as a silent default reading.

use crate::common::mock_interface::{MockError, MockInterface};
use crate::common::create_mock_driver;
use mpu6050::{Error, Mpu6050Config, Mpu6050Driver};

#[test]
fn test_construction_failure() {
    let interface = MockInterface::new();
    interface.fail_next_write();

    // The very first wake-up write fails, so construction fails
    let result = Mpu6050Driver::new(interface, Mpu6050Config::default());
    assert!(matches!(result, Err(Error::Bus(MockError::Communication))));
}

#[test]
fn test_configure_accel_range_failure() {
    let (mut driver, interface) = create_mock_driver();

    interface.fail_next_write();
    let result = driver.configure_accel_range(mpu6050::AccelFullScale::G8);
    assert!(matches!(result, Err(Error::Bus(MockError::Communication))));
}

#[test]
fn test_configure_gyro_range_failure() {
    let (mut driver, interface) = create_mock_driver();

    interface.fail_next_write();
    let result = driver.configure_gyro_range(mpu6050::GyroFullScale::Dps1000);
    assert!(result.is_err(), "Write should fail when error is injected");
}

#[test]
fn test_read_failure_surfaces() {
    let (mut driver, interface) = create_mock_driver();

    interface.fail_next_read();

    let result = driver.acceleration();
    assert!(
        result.is_err(),
        "A transport failure must not return a default reading"
    );
}

#[test]
fn test_gyro_read_failure_surfaces() {
    let (mut driver, interface) = create_mock_driver();

    interface.fail_next_read();

    let result = driver.gyro();
    assert!(result.is_err());
}

#[test]
fn test_read_failure_recovery() {
    let (mut driver, interface) = create_mock_driver();

    interface.fail_next_read();
    assert!(driver.acceleration().is_err(), "First read should fail");

    // Subsequent read succeeds (the error was for one operation only)
    interface.set_accel_data(100, 200, 300);
    assert!(
        driver.acceleration().is_ok(),
        "Subsequent read should succeed after single failure"
    );
}

#[test]
fn test_temperature_read_failure() {
    let (mut driver, interface) = create_mock_driver();

    interface.fail_next_read();
    assert!(driver.read_temperature().is_err());
}

#[test]
fn test_interrupt_status_read_failure() {
    let (mut driver, interface) = create_mock_driver();

    interface.fail_next_read();
    assert!(driver.read_interrupt_status().is_err());
}
