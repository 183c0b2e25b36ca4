pub mod quote;
pub mod td_quote;
pub mod user;
