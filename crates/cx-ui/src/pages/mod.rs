pub mod cx_users;
pub mod dashboard;
pub mod login;
