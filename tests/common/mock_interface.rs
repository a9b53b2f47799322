//! Mock interface implementation for testing the MPU-6050 driver

#[cfg(feature = "async")]
use device_driver::AsyncRegisterInterface;
use device_driver::RegisterInterface;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// Records operations performed on the mock interface
///
/// One entry is logged per bus transaction, so tests can assert that a
/// multi-byte block was fetched in a single transfer.
#[derive(Debug, Clone, PartialEq)]
pub enum Operation {
    /// Read transaction: `len` bytes starting at `address`
    ReadRegister {
        /// First register address
        address: u8,
        /// Number of bytes read
        len: usize,
    },
    /// Write transaction: `bytes` written starting at `address`
    WriteRegister {
        /// First register address
        address: u8,
        /// Bytes that were written
        bytes: Vec<u8>,
    },
}

/// Shared state for mock interface (uses interior mutability)
#[derive(Debug, Default)]
struct MockState {
    /// Simulated register values, address -> value
    registers: HashMap<u8, u8>,

    /// Operations log for verification
    operations: Vec<Operation>,

    /// Failure injection flags
    fail_next_read: bool,
    fail_next_write: bool,
}

impl MockState {
    /// Store a big-endian i16 at a high/low register pair
    fn set_short(&mut self, address: u8, value: i16) {
        let [high, low] = value.to_be_bytes();
        self.registers.insert(address, high);
        self.registers.insert(address.wrapping_add(1), low);
    }
}

/// Mock interface for testing
///
/// Clones share the same register store, so a test can keep a handle
/// while the driver owns the interface.
#[derive(Clone, Default)]
pub struct MockInterface {
    state: Rc<RefCell<MockState>>,
}

impl MockInterface {
    /// Create a new mock interface with all registers reading zero
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a register value
    pub fn set_register(&self, address: u8, value: u8) {
        self.state.borrow_mut().registers.insert(address, value);
    }

    /// Get a register value (0 if never written)
    pub fn get_register(&self, address: u8) -> u8 {
        self.state
            .borrow()
            .registers
            .get(&address)
            .copied()
            .unwrap_or(0)
    }

    /// Set accelerometer data (returned on the next read)
    pub fn set_accel_data(&self, x: i16, y: i16, z: i16) {
        let mut state = self.state.borrow_mut();
        state.set_short(0x3B, x);
        state.set_short(0x3D, y);
        state.set_short(0x3F, z);
    }

    /// Set gyroscope data (returned on the next read)
    pub fn set_gyro_data(&self, x: i16, y: i16, z: i16) {
        let mut state = self.state.borrow_mut();
        state.set_short(0x43, x);
        state.set_short(0x45, y);
        state.set_short(0x47, z);
    }

    /// Set temperature data (returned on the next read)
    pub fn set_temperature_data(&self, temp_raw: i16) {
        self.state.borrow_mut().set_short(0x41, temp_raw);
    }

    /// Inject a read failure on the next read operation
    pub fn fail_next_read(&self) {
        self.state.borrow_mut().fail_next_read = true;
    }

    /// Inject a write failure on the next write operation
    pub fn fail_next_write(&self) {
        self.state.borrow_mut().fail_next_write = true;
    }

    /// Get the operations log
    pub fn operations(&self) -> Vec<Operation> {
        self.state.borrow().operations.clone()
    }

    /// Clear the operations log
    pub fn clear_operations(&self) {
        self.state.borrow_mut().operations.clear();
    }

    /// Verify a register holds the expected value
    #[allow(dead_code)]
    pub fn verify_register(&self, address: u8, expected: u8) -> bool {
        self.get_register(address) == expected
    }
}

/// Mock error type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MockError {
    /// Simulated communication error
    Communication,
}

impl RegisterInterface for MockInterface {
    type Error = MockError;
    type AddressType = u8;

    fn read_register(
        &mut self,
        address: Self::AddressType,
        _size_bits: u32,
        read_data: &mut [u8],
    ) -> Result<(), Self::Error> {
        let mut state = self.state.borrow_mut();

        // Check for injected failure
        if state.fail_next_read {
            state.fail_next_read = false;
            return Err(MockError::Communication);
        }

        for (i, byte) in read_data.iter_mut().enumerate() {
            let reg_addr = address.wrapping_add(i as u8);
            *byte = state.registers.get(&reg_addr).copied().unwrap_or(0);
        }

        state.operations.push(Operation::ReadRegister {
            address,
            len: read_data.len(),
        });

        Ok(())
    }

    fn write_register(
        &mut self,
        address: Self::AddressType,
        _size_bits: u32,
        write_data: &[u8],
    ) -> Result<(), Self::Error> {
        let mut state = self.state.borrow_mut();

        // Check for injected failure
        if state.fail_next_write {
            state.fail_next_write = false;
            return Err(MockError::Communication);
        }

        for (i, &byte) in write_data.iter().enumerate() {
            let reg_addr = address.wrapping_add(i as u8);
            state.registers.insert(reg_addr, byte);
        }

        state.operations.push(Operation::WriteRegister {
            address,
            bytes: write_data.to_vec(),
        });

        Ok(())
    }
}

#[cfg(feature = "async")]
impl AsyncRegisterInterface for MockInterface {
    type Error = MockError;
    type AddressType = u8;

    async fn read_register(
        &mut self,
        address: Self::AddressType,
        size_bits: u32,
        read_data: &mut [u8],
    ) -> Result<(), Self::Error> {
        // Delegate to synchronous implementation
        RegisterInterface::read_register(self, address, size_bits, read_data)
    }

    async fn write_register(
        &mut self,
        address: Self::AddressType,
        size_bits: u32,
        write_data: &[u8],
    ) -> Result<(), Self::Error> {
        // Delegate to synchronous implementation
        RegisterInterface::write_register(self, address, size_bits, write_data)
    }
}
