pub mod authors;
pub mod list;
pub mod upload;
