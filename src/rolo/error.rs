use thiserror::Error;

#[derive(Error, Debug)]
pub enum RoloError {
    #[error("Name cannot be empty")]
    InvalidName,

    #[error("Invalid phone number '{0}': expected exactly 10 digits")]
    InvalidPhone(String),

    #[error("Invalid birthday '{0}': expected DD.MM.YYYY")]
    InvalidBirthday(String),

    #[error("Phone {0} is already on this contact")]
    DuplicatePhone(String),

    #[error("A contact can hold at most {0} phone numbers")]
    PhoneLimit(usize),

    #[error("This contact already has a birthday")]
    BirthdayTaken,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, RoloError>;
