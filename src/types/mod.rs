pub mod error;
pub mod quote;
pub mod response;
pub mod td_quote;
pub mod token;
pub mod user;
