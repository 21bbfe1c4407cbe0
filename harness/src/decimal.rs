//! Allocation-free decimal rendering of unsigned integers.

/// Digits in `u64::MAX` (18446744073709551615).
const MAX_DIGITS: usize = 20;

/// Fixed stack buffer for rendering one `u64` as decimal ASCII.
#[derive(Debug, Clone, Copy)]
pub struct DecimalBuf {
    bytes: [u8; MAX_DIGITS],
}

impl DecimalBuf {
    pub const fn new() -> Self {
        Self {
            bytes: [0; MAX_DIGITS],
        }
    }

    /// Render `value` and return the digits, most significant first.
    ///
    /// Digits are filled from the end of the buffer so no reversal pass is
    /// needed. Zero renders as a single `0`; no other value gets a leading zero.
    pub fn format(&mut self, mut value: u64) -> &[u8] {
        let mut start = MAX_DIGITS;
        loop {
            start -= 1;
            self.bytes[start] = b'0' + (value % 10) as u8;
            value /= 10;
            if value == 0 {
                break;
            }
        }
        &self.bytes[start..]
    }
}

impl Default for DecimalBuf {
    fn default() -> Self {
        Self::new()
    }
}
