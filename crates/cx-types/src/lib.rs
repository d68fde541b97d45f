#![allow(non_snake_case)]

pub mod credentials;
pub mod dashboard;
pub mod messages;
pub mod session;
pub mod user;
pub mod validation;

pub use credentials::*;
pub use dashboard::*;
pub use session::*;
pub use user::*;
