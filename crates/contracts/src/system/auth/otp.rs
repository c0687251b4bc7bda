//! Six-cell one-time-password entry used by login and GSTIN verification.

pub const OTP_LENGTH: usize = 6;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct OtpEntry {
    cells: [Option<char>; OTP_LENGTH],
}

impl OtpEntry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies the value typed into cell `index`.
    ///
    /// Empty input clears the cell; anything other than a single ASCII digit
    /// is rejected and leaves the entry untouched. Returns the cell that
    /// should receive focus next, if any.
    pub fn input(&mut self, index: usize, value: &str) -> Result<Option<usize>, OtpInputRejected> {
        if index >= OTP_LENGTH {
            return Err(OtpInputRejected);
        }
        let mut chars = value.chars();
        match (chars.next(), chars.next()) {
            (None, _) => {
                self.cells[index] = None;
                Ok(None)
            }
            (Some(c), None) if c.is_ascii_digit() => {
                self.cells[index] = Some(c);
                Ok((index + 1 < OTP_LENGTH).then_some(index + 1))
            }
            _ => Err(OtpInputRejected),
        }
    }

    pub fn cell(&self, index: usize) -> String {
        self.cells
            .get(index)
            .copied()
            .flatten()
            .map(String::from)
            .unwrap_or_default()
    }

    pub fn is_complete(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    pub fn code(&self) -> String {
        self.cells.iter().flatten().collect()
    }

    pub fn clear(&mut self) {
        self.cells = [None; OTP_LENGTH];
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OtpInputRejected;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digits_advance_focus() {
        let mut otp = OtpEntry::new();
        assert_eq!(otp.input(0, "4"), Ok(Some(1)));
        assert_eq!(otp.input(5, "2"), Ok(None));
        assert_eq!(otp.cell(0), "4");
        assert_eq!(otp.code(), "42");
        assert!(!otp.is_complete());
    }

    #[test]
    fn test_non_digits_are_rejected() {
        let mut otp = OtpEntry::new();
        otp.input(0, "7").unwrap();
        assert_eq!(otp.input(0, "a"), Err(OtpInputRejected));
        assert_eq!(otp.input(1, "12"), Err(OtpInputRejected));
        assert_eq!(otp.input(9, "1"), Err(OtpInputRejected));
        assert_eq!(otp.cell(0), "7");
    }

    #[test]
    fn test_complete_and_clear() {
        let mut otp = OtpEntry::new();
        for (i, d) in ["1", "2", "3", "4", "5", "6"].iter().enumerate() {
            otp.input(i, d).unwrap();
        }
        assert!(otp.is_complete());
        assert_eq!(otp.code(), "123456");
        otp.input(2, "").unwrap();
        assert!(!otp.is_complete());
        otp.clear();
        assert_eq!(otp.code(), "");
    }
}
