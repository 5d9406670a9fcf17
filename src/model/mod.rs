pub mod entry;
pub mod index;
pub mod options;
pub mod term;
