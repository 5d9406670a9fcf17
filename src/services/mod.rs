pub mod download;
pub mod input;
pub mod package;
pub mod pipeline;
pub mod policy;
pub mod script;
pub mod term_bank;
