//! Register definitions for the MPU-6050
//!
//! All registers live in a single flat 8-bit address space. Multi-byte
//! sensor output blocks (`ACCEL_XOUT_H`..`ACCEL_ZOUT_L`,
//! `GYRO_XOUT_H`..`GYRO_ZOUT_L`, `TEMP_OUT_H`/`TEMP_OUT_L`) are read
//! through the raw interface in [`crate::device`]; only the single-byte
//! configuration and status registers are defined here.
//!
//! Output data is big-endian: high byte at the lower address.

device_driver::create_device!(
    device_name: Mpu6050,
    dsl: {
        config {
            type RegisterAddressType = u8;
            type DefaultByteOrder = BE;
        }

        /// SMPLRT_DIV - Sample Rate Divider (0x19)
        ///
        /// Sample rate = gyroscope output rate / (1 + SMPLRT_DIV)
        register SmplrtDiv {
            const ADDRESS = 0x19;
            const SIZE_BITS = 8;

            /// Divider applied to the gyroscope output rate
            smplrt_div: uint = 0..8,
        },

        /// CONFIG - Configuration (0x1A)
        register Config {
            const ADDRESS = 0x1A;
            const SIZE_BITS = 8;

            /// Digital low pass filter setting for both sensors
            dlpf_cfg: uint = 0..3,
            /// External frame synchronization (FSYNC) bit location
            ext_sync_set: uint = 3..6,
            reserved_7_6: uint = 6..8,
        },

        /// GYRO_CONFIG - Gyroscope Configuration (0x1B)
        register GyroConfig {
            const ADDRESS = 0x1B;
            const SIZE_BITS = 8;

            reserved_2_0: uint = 0..3,
            /// Gyroscope full-scale range select
            fs_sel: uint = 3..5,
            /// Z-axis gyroscope self-test
            zg_st: bool = 5,
            /// Y-axis gyroscope self-test
            yg_st: bool = 6,
            /// X-axis gyroscope self-test
            xg_st: bool = 7,
        },

        /// ACCEL_CONFIG - Accelerometer Configuration (0x1C)
        register AccelConfig {
            const ADDRESS = 0x1C;
            const SIZE_BITS = 8;

            reserved_2_0: uint = 0..3,
            /// Accelerometer full-scale range select
            afs_sel: uint = 3..5,
            /// Z-axis accelerometer self-test
            za_st: bool = 5,
            /// Y-axis accelerometer self-test
            ya_st: bool = 6,
            /// X-axis accelerometer self-test
            xa_st: bool = 7,
        },

        /// INT_ENABLE - Interrupt Enable (0x38)
        register IntEnable {
            const ADDRESS = 0x38;
            const SIZE_BITS = 8;

            /// Data ready interrupt enable
            data_rdy_en: bool = 0,
            reserved_2_1: uint = 1..3,
            /// Auxiliary I2C master interrupt enable
            i2c_mst_int_en: bool = 3,
            /// FIFO overflow interrupt enable
            fifo_oflow_en: bool = 4,
            reserved_7_5: uint = 5..8,
        },

        /// INT_STATUS - Interrupt Status (0x3A)
        ///
        /// Bits clear on read.
        register IntStatus {
            const ADDRESS = 0x3A;
            const SIZE_BITS = 8;

            /// Data ready interrupt occurred
            data_rdy_int: bool = 0,
            reserved_2_1: uint = 1..3,
            /// Auxiliary I2C master interrupt occurred
            i2c_mst_int: bool = 3,
            /// FIFO overflow interrupt occurred
            fifo_oflow_int: bool = 4,
            reserved_7_5: uint = 5..8,
        },

        /// PWR_MGMT_1 - Power Management 1 (0x6B)
        ///
        /// The device powers up with SLEEP set; clearing the register
        /// wakes it into continuous sampling mode.
        register PwrMgmt1 {
            const ADDRESS = 0x6B;
            const SIZE_BITS = 8;

            /// Clock source select (0 = internal 8 MHz oscillator)
            clksel: uint = 0..3,
            /// Temperature sensor disable
            temp_dis: bool = 3,
            reserved_4: uint = 4..5,
            /// Cycle between sleep and sampling
            cycle: bool = 5,
            /// Sleep mode enable
            sleep: bool = 6,
            /// Device reset
            device_reset: bool = 7,
        }
    }
);
