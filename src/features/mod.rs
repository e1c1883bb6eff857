pub mod catalog;
pub mod tours;
