use std::sync::LazyLock;

use regex::Regex;

use crate::error::RegistrationError;

static CAPITAL: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[A-Z]").expect("static regex"));
static DIGIT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d").expect("static regex"));
static SPECIAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[!@#$%^&*()_+\-=\[\]{};']").expect("static regex"));
static CELL_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+27\d{9}$").expect("static regex"));

/// A set of registration credentials.
///
/// Holds the raw values as supplied; each `check_*` method applies one
/// format rule, and [`Account::register`] reports the first rule that
/// fails. Note the registration-side cell number rule is strict `+27`
/// E.164, unlike the looser recipient check used for message addressing.
#[derive(Clone, Debug)]
pub struct Account {
    username: String,
    password: String,
    cell_phone: String,
}

impl Account {
    pub fn new(
        username: impl Into<String>,
        password: impl Into<String>,
        cell_phone: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            cell_phone: cell_phone.into(),
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    /// Username rule: contains an underscore, at most five characters.
    pub fn check_username(&self) -> bool {
        self.username.contains('_') && self.username.chars().count() <= 5
    }

    /// Password rule: at least eight characters with a capital letter, a
    /// digit, and a special character.
    pub fn check_password_complexity(&self) -> bool {
        self.password.chars().count() >= 8
            && CAPITAL.is_match(&self.password)
            && DIGIT.is_match(&self.password)
            && SPECIAL.is_match(&self.password)
    }

    /// Cell number rule: `+27` followed by exactly nine digits.
    pub fn check_cell_number(&self) -> bool {
        CELL_NUMBER.is_match(&self.cell_phone)
    }

    /// Apply all rules in order and report the first failure.
    pub fn register(&self) -> Result<(), RegistrationError> {
        if !self.check_username() {
            return Err(RegistrationError::MalformedUsername);
        }
        if !self.check_password_complexity() {
            return Err(RegistrationError::WeakPassword);
        }
        if !self.check_cell_number() {
            return Err(RegistrationError::MalformedCellNumber);
        }
        Ok(())
    }

    /// Exact credential match.
    pub fn login(&self, username: &str, password: &str) -> bool {
        self.username == username && self.password == password
    }

    /// Login result as a user-facing status line.
    pub fn login_status(
        &self,
        username: &str,
        password: &str,
        first_name: &str,
        last_name: &str,
    ) -> String {
        if self.login(username, password) {
            format!("Welcome {first_name}, {last_name} it is great to see you again")
        } else {
            "Username or password incorrect, please try again".to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_account() -> Account {
        Account::new("kyl_1", "Ch&&sec@ke99!", "+27838968976")
    }

    #[test]
    fn valid_credentials_register() {
        assert_eq!(valid_account().register(), Ok(()));
    }

    #[test]
    fn username_needs_an_underscore() {
        let account = Account::new("kyle", "Ch&&sec@ke99!", "+27838968976");
        assert!(!account.check_username());
        assert_eq!(account.register(), Err(RegistrationError::MalformedUsername));
    }

    #[test]
    fn username_longer_than_five_characters_fails() {
        let account = Account::new("kyle_long", "Ch&&sec@ke99!", "+27838968976");
        assert!(!account.check_username());
    }

    #[test]
    fn password_without_capital_fails() {
        let account = Account::new("kyl_1", "ch&&sec@ke99!", "+27838968976");
        assert!(!account.check_password_complexity());
        assert_eq!(account.register(), Err(RegistrationError::WeakPassword));
    }

    #[test]
    fn password_without_digit_fails() {
        let account = Account::new("kyl_1", "Ch&&sec@ke!", "+27838968976");
        assert!(!account.check_password_complexity());
    }

    #[test]
    fn password_without_special_character_fails() {
        let account = Account::new("kyl_1", "Cheesecake99", "+27838968976");
        assert!(!account.check_password_complexity());
    }

    #[test]
    fn short_password_fails() {
        let account = Account::new("kyl_1", "C@9a", "+27838968976");
        assert!(!account.check_password_complexity());
    }

    #[test]
    fn cell_number_without_country_code_fails() {
        let account = Account::new("kyl_1", "Ch&&sec@ke99!", "0838968976");
        assert!(!account.check_cell_number());
        assert_eq!(
            account.register(),
            Err(RegistrationError::MalformedCellNumber)
        );
    }

    #[test]
    fn cell_number_with_wrong_digit_count_fails() {
        let account = Account::new("kyl_1", "Ch&&sec@ke99!", "+2783896897");
        assert!(!account.check_cell_number());
    }

    #[test]
    fn login_matches_exact_credentials() {
        let account = valid_account();
        assert!(account.login("kyl_1", "Ch&&sec@ke99!"));
        assert!(!account.login("kyl_1", "wrong"));
        assert!(!account.login("other", "Ch&&sec@ke99!"));
    }

    #[test]
    fn login_status_greets_on_success() {
        let account = valid_account();
        let status = account.login_status("kyl_1", "Ch&&sec@ke99!", "Kyle", "Smith");
        assert_eq!(status, "Welcome Kyle, Smith it is great to see you again");
    }

    #[test]
    fn login_status_prompts_retry_on_failure() {
        let account = valid_account();
        let status = account.login_status("kyl_1", "wrong", "Kyle", "Smith");
        assert_eq!(status, "Username or password incorrect, please try again");
    }
}
