pub mod dashboard;
pub mod feature;
pub mod forgot_password;
pub mod login;
pub mod not_found;
pub mod reset_password;
