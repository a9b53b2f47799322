//! Unit tests for the temperature readout

use crate::common::mock_interface::MockInterface;
use crate::common::{assert_float_eq, create_mock_driver, Operation};
use mpu6050::Mpu6050Driver;

#[test]
fn test_temperature_conversion_formula() {
    // T = raw / 340 + 36.53
    assert_float_eq(Mpu6050Driver::<MockInterface>::temperature_to_celsius(0), 36.53, 1e-9);
    assert_float_eq(
        Mpu6050Driver::<MockInterface>::temperature_to_celsius(340),
        37.53,
        1e-9,
    );
    assert_float_eq(
        Mpu6050Driver::<MockInterface>::temperature_to_celsius(-340),
        35.53,
        1e-9,
    );
}

#[test]
fn test_temperature_read_path() {
    let (mut driver, interface) = create_mock_driver();

    interface.set_temperature_data(340);

    let raw = driver.read_temperature().unwrap();
    assert_eq!(raw, 340);

    let celsius = driver.read_temperature_celsius().unwrap();
    assert_float_eq(celsius, 37.53, 1e-9);
}

#[test]
fn test_temperature_negative_raw() {
    let (mut driver, interface) = create_mock_driver();

    interface.set_temperature_data(-3400);

    let celsius = driver.read_temperature_celsius().unwrap();
    assert_float_eq(celsius, 26.53, 1e-9);
}

#[test]
fn test_temperature_is_one_two_byte_transaction() {
    let (mut driver, interface) = create_mock_driver();

    interface.set_temperature_data(0);
    interface.clear_operations();

    driver.read_temperature().unwrap();

    assert_eq!(
        interface.operations(),
        vec![Operation::ReadRegister {
            address: 0x41,
            len: 2,
        }]
    );
}
