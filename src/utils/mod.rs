pub mod csv;
pub mod token;
pub mod webutils;
