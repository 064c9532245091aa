use std::io::{self, BufRead, Write};

use tracing::{debug, info};

use crate::{
    cli::{
        command::Command,
        handlers::{self, Reply},
        parse_input,
    },
    domain::AddressBook,
    errors::AppError,
};

pub const PROMPT: &str = "Enter a command: ";

/// What the loop does after one line.
#[derive(Debug)]
pub enum Outcome {
    Reply(Reply),
    Exit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LoopState {
    Running,
    Terminated,
}

pub fn dispatch(command: Command, args: &[String], book: &mut AddressBook) -> Outcome {
    debug!(?command, argc = args.len(), "dispatching");

    let reply = match command {
        Command::Exit => return Outcome::Exit,
        Command::Hello => handlers::hello(),
        Command::Help => handlers::help(),
        Command::Add => handlers::add_contact(args, book),
        Command::Change => handlers::change_contact(args, book),
        Command::Update => handlers::update_phone(args, book),
        Command::Phone => handlers::get_phone(args, book),
        Command::AllContacts => handlers::get_all_contacts(book),
        Command::SearchRecords => handlers::search_records(args, book),
        Command::AddRecord => handlers::add_record(args, book),
        Command::NewRecord => handlers::new_record(args, book),
        Command::AddPhone => handlers::add_phone(args, book),
        Command::RemovePhone => handlers::remove_phone(args, book),
        Command::EditPhone => handlers::edit_phone(args, book),
        Command::FindPhone => handlers::find_phone(args, book),
        Command::Find => handlers::find_contact(args, book),
        Command::Delete => handlers::delete_contact(args, book),
    };
    Outcome::Reply(reply)
}

pub fn handle_line(line: &str, book: &mut AddressBook) -> Outcome {
    let (token, args) = match parse_input(line) {
        Ok(parsed) => parsed,
        Err(e) => return Outcome::Reply(Err(e)),
    };

    match token.parse::<Command>() {
        Ok(command) => dispatch(command, &args, book),
        Err(e) => Outcome::Reply(Err(e)),
    }
}

/// Prompt, read, dispatch, print; until `close`/`exit` or end of input.
pub fn run_loop<R, W>(mut input: R, mut output: W, book: &mut AddressBook) -> Result<(), AppError>
where
    R: BufRead,
    W: Write,
{
    writeln!(output, "Welcome to the assistant bot!")?;

    let mut state = LoopState::Running;
    while state == LoopState::Running {
        write!(output, "{PROMPT}")?;
        output.flush()?;

        let mut raw = Vec::new();
        if input.read_until(b'\n', &mut raw)? == 0 {
            info!("input closed, leaving");
            writeln!(output)?;
            state = LoopState::Terminated;
            continue;
        }

        // A line that is not UTF-8 is bad input, not a terminal failure
        let outcome = match String::from_utf8(raw) {
            Ok(line) => handle_line(&line, book),
            Err(_) => Outcome::Reply(Err(AppError::InvalidInput)),
        };

        state = match outcome {
            Outcome::Exit => {
                writeln!(output, "Good bye!")?;
                LoopState::Terminated
            }
            Outcome::Reply(Ok(message)) => {
                writeln!(output, "{message}")?;
                LoopState::Running
            }
            Outcome::Reply(Err(e)) => {
                debug!(error = ?e, "command rejected");
                writeln!(output, "{e}")?;
                LoopState::Running
            }
        };
    }

    Ok(())
}

pub fn run_app() -> Result<(), AppError> {
    let mut book = AddressBook::new();
    let stdin = io::stdin();
    let stdout = io::stdout();

    run_loop(stdin.lock(), stdout.lock(), &mut book)
}
