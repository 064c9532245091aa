use std::fmt;

use super::*;
use crate::validation::is_ten_digits;

/// A phone number that passed the ten digit check.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Phone(String);

impl Phone {
    pub fn new(value: &str) -> Result<Self, AppError> {
        if !is_ten_digits(value) {
            return Err(AppError::PhoneLength);
        }
        Ok(Phone(value.to_string()))
    }

    /// Replaces the number in place. On failure the old number is kept.
    pub fn set(&mut self, value: &str) -> Result<(), AppError> {
        *self = Phone::new(value)?;
        Ok(())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_wrong_length() {
        assert!(matches!(Phone::new("12345"), Err(AppError::PhoneLength)));
        assert!(matches!(Phone::new("abcdefghij"), Err(AppError::PhoneLength)));
    }

    #[test]
    fn failed_set_keeps_old_value() -> Result<(), AppError> {
        let mut phone = Phone::new("0123456789")?;

        assert!(phone.set("99").is_err());
        assert_eq!(phone.as_str(), "0123456789");

        phone.set("9876543210")?;
        assert_eq!(phone.to_string(), "9876543210");
        Ok(())
    }
}
