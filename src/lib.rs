//! Converts BKRS (Chinese-Russian) and BRuKS (Russian-Chinese) dictionary
//! dumps into Yomichan dictionary archives.

pub mod error;
pub mod model;
pub mod parsers;
pub mod services;

pub use error::{Error, Result};
pub use model::options::{ConversionMode, ExportOptions, Layout};
pub use services::pipeline::{convert_lines, export_dict, ConvertReport};
pub use services::script::{IdentityConverter, OpenCcTable, ScriptConverter, ZhconvConverter};
