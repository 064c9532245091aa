pub const PHONE_LEN: usize = 10;

pub fn is_ten_digits(phone: &str) -> bool {
    // Exactly 10 characters, every one an ASCII digit
    phone.len() == PHONE_LEN && phone.chars().all(|c| c.is_ascii_digit())
}

pub fn is_all_digits(phone: &str) -> bool {
    // Any length, but non-empty and digits only
    !phone.is_empty() && phone.chars().all(|c| c.is_ascii_digit())
}
