use std::str::FromStr;

use clap::Parser;

use crate::errors::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "assistant-bot",
    version,
    about = "Interactive contact book. Type `help` at the prompt for commands"
)]
pub struct Cli {
    /// Log level for diagnostics written to stderr (error, warn, info, debug, trace)
    #[arg(long, env = "BOT_LOG_LEVEL", default_value_t = String::from("warn"))]
    pub log_level: String,
}

/// Commands understood at the prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Hello,
    Add,
    Change,
    Update,
    Phone,
    AllContacts,
    Help,
    SearchRecords,
    AddRecord,
    NewRecord,
    AddPhone,
    RemovePhone,
    EditPhone,
    FindPhone,
    Find,
    Delete,
    Exit,
}

impl FromStr for Command {
    type Err = AppError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        match token {
            "hello" => Ok(Command::Hello),
            "add" => Ok(Command::Add),
            "change" => Ok(Command::Change),
            "update" => Ok(Command::Update),
            "phone" => Ok(Command::Phone),
            "all_contacts" => Ok(Command::AllContacts),
            "help" => Ok(Command::Help),
            "search_records" => Ok(Command::SearchRecords),
            "add_record" => Ok(Command::AddRecord),
            "new_record" => Ok(Command::NewRecord),
            "add_phone" => Ok(Command::AddPhone),
            "remove_phone" => Ok(Command::RemovePhone),
            "edit_phone" => Ok(Command::EditPhone),
            "find_phone" => Ok(Command::FindPhone),
            "find" => Ok(Command::Find),
            "delete" => Ok(Command::Delete),
            "close" | "exit" => Ok(Command::Exit),
            _ => Err(AppError::UnknownCommand(token.to_string())),
        }
    }
}

pub const HELP: &str = "Available commands:\n\
    hello - Greet the bot\n\
    add <name> <phone> - Add a new contact\n\
    change <name> <phone> - Change the phone number of an existing contact\n\
    update <name> <phone> - Same as change\n\
    phone <name> - Get the phone number of a contact\n\
    all_contacts - Show all saved contacts\n\
    search_records <pattern> - Search contacts by name or phone\n\
    add_record <name> <phone> [phone...] - Add a contact with one or more phones\n\
    new_record <name> <phone> [phone...] - Like add_record, but never replaces an existing contact\n\
    add_phone <name> <phone> - Add another phone to a contact\n\
    remove_phone <name> <phone> - Remove a phone from a contact\n\
    edit_phone <name> <old> <new> - Replace one phone of a contact\n\
    find_phone <name> <phone> - Check whether a contact has a phone\n\
    find <name> - Show a contact\n\
    delete <name> - Delete a contact\n\
    help - Show this list\n\
    close/exit - Close the bot";
