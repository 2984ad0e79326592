mod account;

pub use account::{
    Account, AccountData, ValidationError, ADDRESS_MAX_LEN, EMAIL_MAX_LEN, NAME_MAX_LEN,
    PHONE_NUMBER_MAX_LEN,
};
