use std::collections::{BTreeMap, btree_map::Values};

use regex::Regex;

use super::*;

/// All records of one session, keyed by contact name.
#[derive(Debug, Default)]
pub struct AddressBook {
    records: BTreeMap<String, Record>,
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> Values<'_, String, Record> {
        self.records.values()
    }

    /// Stores the record, replacing any record with the same name.
    pub fn upsert(&mut self, record: Record) -> Option<Record> {
        self.records.insert(record.name.clone(), record)
    }

    pub fn add_record(&mut self, record: Record) -> Result<(), AppError> {
        if self.records.contains_key(&record.name) {
            return Err(AppError::DuplicateContact);
        }
        self.records.insert(record.name.clone(), record);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&Record> {
        self.records.get(name)
    }

    pub fn get_mut(&mut self, name: &str) -> Result<&mut Record, AppError> {
        self.records
            .get_mut(name)
            .ok_or_else(|| AppError::ContactNotFound(name.to_string()))
    }

    pub fn find(&self, name: &str) -> Result<&Record, AppError> {
        self.records.get(name).ok_or(AppError::NoSuchContact)
    }

    pub fn delete(&mut self, name: &str) -> Result<Record, AppError> {
        self.records.remove(name).ok_or(AppError::NoSuchContact)
    }

    /// Records whose name or any phone contains a match for `pattern`.
    pub fn search(&self, pattern: &Regex) -> Vec<&Record> {
        self.iter()
            .filter(|record| {
                pattern.is_match(&record.name)
                    || record.phones().iter().any(|p| pattern.is_match(p.as_str()))
            })
            .collect()
    }
}
