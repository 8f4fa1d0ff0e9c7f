//! Bus and delay stand-ins for driver tests

use embedded_hal::delay::DelayNs;
use embedded_hal::i2c::{ErrorKind, ErrorType, I2c, NoAcknowledgeSource, Operation};
use heapless::Vec;

/// Records writes and answers reads from a fixed byte queue
#[derive(Default)]
pub struct FakeI2c {
    pub writes: Vec<(u8, Vec<u8, 4>), 16>,
    pub read_data: Vec<u8, 16>,
    pub read_pos: usize,
    pub fail: bool,
}

impl FakeI2c {
    pub fn answering(bytes: &[u8]) -> Self {
        let mut fake = Self::default();
        let _ = fake.read_data.extend_from_slice(bytes);
        fake
    }
}

impl ErrorType for FakeI2c {
    type Error = ErrorKind;
}

impl I2c for FakeI2c {
    fn transaction(
        &mut self,
        address: u8,
        operations: &mut [Operation<'_>],
    ) -> Result<(), Self::Error> {
        if self.fail {
            return Err(ErrorKind::NoAcknowledge(NoAcknowledgeSource::Address));
        }

        for op in operations {
            match op {
                Operation::Write(bytes) => {
                    let mut data = Vec::new();
                    let _ = data.extend_from_slice(bytes);
                    let _ = self.writes.push((address, data));
                }
                Operation::Read(buf) => {
                    for byte in buf.iter_mut() {
                        *byte = self.read_data.get(self.read_pos).copied().unwrap_or(0);
                        self.read_pos += 1;
                    }
                }
            }
        }
        Ok(())
    }
}

/// Adds up requested delays instead of waiting
#[derive(Default)]
pub struct FakeDelay {
    pub total_ns: u64,
}

impl DelayNs for FakeDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.total_ns += u64::from(ns);
    }
}
