pub mod book;
pub mod phone;
pub mod record;

use crate::errors::AppError;

pub use book::AddressBook;
pub use phone::Phone;
pub use record::Record;
