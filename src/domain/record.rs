use std::fmt;

use super::*;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub name: String,
    phones: Vec<Phone>,
}

impl Record {
    pub fn new(name: &str) -> Self {
        Record {
            name: name.to_string(),
            phones: Vec::new(),
        }
    }

    pub fn with_phones(name: &str, phones: Vec<Phone>) -> Self {
        Record {
            name: name.to_string(),
            phones,
        }
    }

    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    pub fn add_phone(&mut self, phone_number: &str) -> Result<(), AppError> {
        let phone = Phone::new(phone_number)?;
        self.phones.push(phone);
        Ok(())
    }

    pub fn remove_phone(&mut self, phone_number: &str) -> Result<Phone, AppError> {
        let index = self
            .phones
            .iter()
            .position(|p| p.as_str() == phone_number)
            .ok_or(AppError::PhoneNotFound)?;

        Ok(self.phones.remove(index))
    }

    pub fn edit_phone(&mut self, old_number: &str, new_number: &str) -> Result<(), AppError> {
        let phone = self
            .phones
            .iter_mut()
            .find(|p| p.as_str() == old_number)
            .ok_or(AppError::PhoneNotFound)?;

        phone.set(new_number)
    }

    pub fn find_phone(&self, phone_number: &str) -> Option<&Phone> {
        self.phones.iter().find(|p| p.as_str() == phone_number)
    }

    /// Overwrites the first number, or stores it if the record has none.
    pub fn replace_primary(&mut self, phone: Phone) {
        match self.phones.first_mut() {
            Some(primary) => *primary = phone,
            None => self.phones.push(phone),
        }
    }

    pub fn phone_list(&self) -> String {
        if self.phones.is_empty() {
            return "no phone numbers".to_string();
        }

        self.phones
            .iter()
            .map(Phone::as_str)
            .collect::<Vec<&str>>()
            .join(", ")
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.phone_list())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn john() -> Record {
        let mut record = Record::new("John");
        record.add_phone("1234567890").unwrap();
        record.add_phone("5555555555").unwrap();
        record
    }

    #[test]
    fn add_phone_validates_length() {
        let mut record = Record::new("John");

        assert!(matches!(
            record.add_phone("12345"),
            Err(AppError::PhoneLength)
        ));
        assert!(record.phones().is_empty());
    }

    #[test]
    fn remove_phone_only_on_exact_match() {
        let mut record = john();

        assert!(matches!(
            record.remove_phone("123456789"),
            Err(AppError::PhoneNotFound)
        ));
        assert_eq!(record.phones().len(), 2);

        let removed = record.remove_phone("1234567890").unwrap();
        assert_eq!(removed.as_str(), "1234567890");
        assert_eq!(record.phone_list(), "5555555555");
    }

    #[test]
    fn edit_phone_keeps_old_number_on_bad_input() {
        let mut record = john();

        assert!(matches!(
            record.edit_phone("1234567890", "12"),
            Err(AppError::PhoneLength)
        ));
        assert!(record.find_phone("1234567890").is_some());

        record.edit_phone("1234567890", "1112223333").unwrap();
        assert!(record.find_phone("1234567890").is_none());
        assert_eq!(record.to_string(), "John: 1112223333, 5555555555");
    }

    #[test]
    fn edit_phone_unknown_number() {
        let mut record = john();

        assert!(matches!(
            record.edit_phone("0000000000", "1112223333"),
            Err(AppError::PhoneNotFound)
        ));
    }

    #[test]
    fn replace_primary_on_empty_record() {
        let mut record = Record::new("Ann");
        record.replace_primary(Phone::new("0987654321").unwrap());

        assert_eq!(record.phone_list(), "0987654321");
    }
}
