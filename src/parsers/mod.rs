pub mod bkrs;
pub mod markup;
