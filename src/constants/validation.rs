use lazy_static::lazy_static;
use regex::Regex;

// Word characters follow the ASCII definition: letters, digits and underscore.
lazy_static! {
    /// A word character followed by at least one word or whitespace character.
    pub static ref CAT_NAME_REGEX: Regex =
        Regex::new(r"^[A-Za-z0-9_][A-Za-z0-9_ \t\n\x0B\x0C\r]+$").unwrap();
    /// Zero or more word or whitespace characters.
    pub static ref CAT_OWNER_REGEX: Regex = Regex::new(r"^[A-Za-z0-9_ \t\n\x0B\x0C\r]*$").unwrap();
}
