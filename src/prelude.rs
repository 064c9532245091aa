pub use crate::cli::{
    command::{Cli, Command},
    handlers::{self, Reply},
    parse_input, run_app,
    run::{Outcome, dispatch, handle_line, run_loop},
};
pub use crate::domain::{AddressBook, Phone, Record};
pub use crate::errors::AppError;
pub use crate::logging::init_subscriber;
