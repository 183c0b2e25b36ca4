pub mod service;

mod quote;
mod td_quote;
mod user;
