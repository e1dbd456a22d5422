//! Command implementations

mod check_digit;
mod extract;
mod init;
mod validate;

pub use check_digit::check_digit;
pub use extract::extract;
pub use init::init;
pub use validate::validate;
