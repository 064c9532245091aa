use assert_cmd::Command;
use predicates::str::contains;

#[test]
fn edit_search() -> Result<(), Box<dyn std::error::Error>> {
    let script = "\
        add Alice 0803123456\n\
        add Bob 0912345678\n\
        search_records lic\n\
        change Alice 1111111111\n\
        search_records ^1+$\n\
        change Carol 1111111111\n\
        update Alice phone\n\
        exit\n";

    Command::cargo_bin(env!("CARGO_PKG_NAME"))?
        .env("BOT_LOG_LEVEL", "error")
        .write_stdin(script)
        .assert()
        .success()
        .stdout(contains("Matching contacts:\nAlice: 0803123456\n"))
        .stdout(contains("Contact updated."))
        .stdout(contains("Matching contacts:\nAlice: 1111111111\n"))
        .stdout(contains("Contact 'Carol' not found."))
        .stdout(contains(
            "Invalid phone number. Please provide a valid phone number for the contact.",
        ));

    Ok(())
}

#[test]
fn search_without_hits_or_with_bad_pattern() -> Result<(), Box<dyn std::error::Error>> {
    Command::cargo_bin(env!("CARGO_PKG_NAME"))?
        .env("BOT_LOG_LEVEL", "error")
        .write_stdin("add Alice 0803123456\nsearch_records Zed\nsearch_records (\nsearch_records\nexit\n")
        .assert()
        .success()
        .stdout(contains("No matching contacts found."))
        .stdout(contains("Invalid search pattern:"))
        .stdout(contains(
            "Invalid command. Please provide a name or phone number to search for.",
        ));

    Ok(())
}
