//! One function per prompt command. Every handler checks its argument count
//! first and reports problems through [`AppError`] instead of panicking.

use regex::Regex;

use crate::cli::command::HELP;
use crate::domain::{AddressBook, Phone, Record};
use crate::errors::AppError;
use crate::validation::is_all_digits;

pub type Reply = Result<String, AppError>;

const NAME_AND_PHONE: &str = "Give me name and phone, please.";
const NAME_AND_NEW_PHONE: &str =
    "Invalid command. Please provide both username and new phone number.";
const USERNAME: &str = "Invalid command. Please provide username.";
const SEARCH_TERM: &str =
    "Invalid command. Please provide a name or phone number to search for.";
const NEW_RECORD: &str =
    "Invalid command. Please provide a name and a phone number for the new record.";
const NAME_AND_NUMBER: &str = "Invalid command. Please provide a contact name and a phone number.";
const NAME_OLD_AND_NEW: &str =
    "Invalid command. Please provide a contact name, the old and the new phone number.";

pub fn hello() -> Reply {
    Ok("How can I help you?".to_string())
}

pub fn help() -> Reply {
    Ok(HELP.to_string())
}

pub fn add_contact(args: &[String], book: &mut AddressBook) -> Reply {
    let [name, phone] = args else {
        return Err(AppError::Arity(NAME_AND_PHONE));
    };

    let phone = digits_then_phone(phone, AppError::NotDigits)?;
    book.upsert(Record::with_phones(name, vec![phone]));

    Ok("Contact added.".to_string())
}

pub fn change_contact(args: &[String], book: &mut AddressBook) -> Reply {
    set_primary_phone(args, book)
}

pub fn update_phone(args: &[String], book: &mut AddressBook) -> Reply {
    set_primary_phone(args, book)
}

fn set_primary_phone(args: &[String], book: &mut AddressBook) -> Reply {
    let [name, new_phone] = args else {
        return Err(AppError::Arity(NAME_AND_NEW_PHONE));
    };

    let record = book.get_mut(name)?;
    let phone = digits_then_phone(new_phone, AppError::InvalidPhone)?;
    record.replace_primary(phone);

    Ok("Contact updated.".to_string())
}

pub fn get_phone(args: &[String], book: &AddressBook) -> Reply {
    let [name] = args else {
        return Err(AppError::Arity(USERNAME));
    };

    match book.get(name) {
        Some(record) => Ok(format!("Phone number for {}: {}", name, record.phone_list())),
        None => Err(AppError::ContactNotFound(name.to_string())),
    }
}

pub fn search_records(args: &[String], book: &AddressBook) -> Reply {
    let [term] = args else {
        return Err(AppError::Arity(SEARCH_TERM));
    };

    let pattern = Regex::new(term)?;
    let matches = book.search(&pattern);

    if matches.is_empty() {
        return Ok("No matching contacts found.".to_string());
    }

    Ok(listing("Matching contacts:", matches))
}

pub fn add_record(args: &[String], book: &mut AddressBook) -> Reply {
    book.upsert(record_from_args(args)?);
    Ok("Record added.".to_string())
}

/// Same arguments as `add_record`, but an existing name is left alone.
pub fn new_record(args: &[String], book: &mut AddressBook) -> Reply {
    book.add_record(record_from_args(args)?)?;
    Ok("Record added.".to_string())
}

fn record_from_args(args: &[String]) -> Result<Record, AppError> {
    let [name, phones @ ..] = args else {
        return Err(AppError::Arity(NEW_RECORD));
    };
    if phones.is_empty() {
        return Err(AppError::Arity(NEW_RECORD));
    }

    // All numbers must pass before the book is touched
    let phones = phones
        .iter()
        .map(|p| digits_then_phone(p, AppError::NotDigits))
        .collect::<Result<Vec<Phone>, AppError>>()?;

    Ok(Record::with_phones(name, phones))
}

pub fn get_all_contacts(book: &AddressBook) -> Reply {
    if book.is_empty() {
        return Ok("No contacts found.".to_string());
    }

    Ok(listing("All contacts:", book.iter()))
}

pub fn add_phone(args: &[String], book: &mut AddressBook) -> Reply {
    let [name, phone] = args else {
        return Err(AppError::Arity(NAME_AND_NUMBER));
    };

    book.get_mut(name)?.add_phone(phone)?;
    Ok("Phone number added.".to_string())
}

pub fn remove_phone(args: &[String], book: &mut AddressBook) -> Reply {
    let [name, phone] = args else {
        return Err(AppError::Arity(NAME_AND_NUMBER));
    };

    book.get_mut(name)?.remove_phone(phone)?;
    Ok("Phone number removed.".to_string())
}

pub fn edit_phone(args: &[String], book: &mut AddressBook) -> Reply {
    let [name, old_phone, new_phone] = args else {
        return Err(AppError::Arity(NAME_OLD_AND_NEW));
    };

    book.get_mut(name)?.edit_phone(old_phone, new_phone)?;
    Ok("Phone number updated.".to_string())
}

pub fn find_phone(args: &[String], book: &AddressBook) -> Reply {
    let [name, phone] = args else {
        return Err(AppError::Arity(NAME_AND_NUMBER));
    };

    let record = book
        .get(name)
        .ok_or_else(|| AppError::ContactNotFound(name.to_string()))?;

    match record.find_phone(phone) {
        Some(_) => Ok("Phone number found.".to_string()),
        None => Err(AppError::PhoneNotFound),
    }
}

pub fn find_contact(args: &[String], book: &AddressBook) -> Reply {
    let [name] = args else {
        return Err(AppError::Arity(USERNAME));
    };

    let record = book.find(name)?;
    Ok(format!("Contact found: {}", record))
}

pub fn delete_contact(args: &[String], book: &mut AddressBook) -> Reply {
    let [name] = args else {
        return Err(AppError::Arity(USERNAME));
    };

    book.delete(name)?;
    Ok("Contact deleted.".to_string())
}

/// Handler side check (digits only, any length), then the stored form (exactly ten).
fn digits_then_phone(value: &str, not_digits: AppError) -> Result<Phone, AppError> {
    if !is_all_digits(value) {
        return Err(not_digits);
    }
    Phone::new(value)
}

fn listing<'a>(heading: &str, records: impl IntoIterator<Item = &'a Record>) -> String {
    let mut output = heading.to_string();
    for record in records {
        output.push('\n');
        output.push_str(&record.to_string());
    }
    output
}
