use std::io::{self, BufRead};
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::model::index::{DictionaryTitle, YomiIndex};
use crate::model::options::ExportOptions;
use crate::model::term::YomiTerm;
use crate::parsers::bkrs::{Parsed, RecordParser};
use crate::services::input;
use crate::services::package::{self, Staging};
use crate::services::policy::ConversionPolicy;
use crate::services::script::ScriptConverter;
use crate::services::term_bank::TermBankWriter;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConvertReport {
    /// Terms written across all term banks.
    pub total: usize,
    pub banks: usize,
    /// Complete entries removed by the conversion policy.
    pub dropped: usize,
}

/// Runs parser → policy → term banks over a line source.
pub fn convert_lines<R: BufRead>(
    reader: R,
    options: &ExportOptions,
    converter: &dyn ScriptConverter,
    mut writer: TermBankWriter,
) -> Result<ConvertReport> {
    let mut parser = RecordParser::new(options.layout);
    let policy = ConversionPolicy::new(options.mode, options.extended, converter);
    let mut dropped = 0usize;

    for line in reader.lines() {
        let line = line.map_err(Error::InputRead)?;

        let entry = match parser.feed(&line) {
            None => continue,
            Some(Parsed::Immediate(entry)) => entry,
            Some(Parsed::Complete(entry)) => match policy.apply(entry) {
                Some(entry) => entry,
                None => {
                    dropped += 1;
                    continue;
                }
            },
        };

        writer.push(YomiTerm::from(entry))?;
    }

    let (total, banks) = writer.finish()?;
    tracing::info!("Wrote {} terms in {} term banks, {} dropped", total, banks, dropped);

    Ok(ConvertReport {
        total,
        banks,
        dropped,
    })
}

/// Converts the dump at `input` into a Yomichan archive.
///
/// Returns the report and the path of the written archive.
pub fn export_dict(
    input: &Path,
    options: &ExportOptions,
    converter: &dyn ScriptConverter,
) -> Result<(ConvertReport, PathBuf)> {
    let title = DictionaryTitle::for_options(options);
    let archive = options
        .output
        .clone()
        .unwrap_or_else(|| PathBuf::from(title.archive_name()));

    // Both would be deleted along with the staging dir
    for path in [input, archive.as_path()] {
        if is_inside(path, &options.staging_dir)? {
            return Err(Error::InsideStaging {
                path: path.to_path_buf(),
                staging: options.staging_dir.clone(),
            });
        }
    }

    let staging = Staging::create(&options.staging_dir)?;
    tracing::info!("Converting {} via {}", input.display(), staging.path().display());

    let reader = input::open_lines(input)?;
    let writer = TermBankWriter::new(staging.path());

    let report = convert_lines(reader, options, converter, writer).map_err(|e| match e {
        // InvalidData is bad UTF-8 in an intact stream
        Error::InputRead(source)
            if input::is_gzip(input) && source.kind() != io::ErrorKind::InvalidData =>
        {
            Error::Decompression {
                path: input.to_path_buf(),
                source,
            }
        }
        other => other,
    })?;

    let revision = input
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let index = YomiIndex::new(revision, title);
    package::assemble(staging, &index, &archive)?;

    Ok((report, archive))
}

fn is_inside(path: &Path, dir: &Path) -> Result<bool> {
    Ok(std::path::absolute(path)?.starts_with(std::path::absolute(dir)?))
}
