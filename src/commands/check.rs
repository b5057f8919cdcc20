//! Check a document against the rules

use std::fs;
use std::path::Path;
use std::process::ExitCode;

use anyhow::Context;

use regimed::api::{self, UploadRequest};
use regimed::config::Config;
use regimed::output::{OutputMode, format_report};

/// Exit status for a document with missing rules
const EXIT_NOT_COMPLIANT: u8 = 2;

/// Check one document and print the report
///
/// Exits with status 2 when the document is not compliant, unless
/// `no_fail` is set.
pub fn check(
    file: &Path,
    config: &Config,
    no_fail: bool,
    mode: OutputMode,
) -> anyhow::Result<ExitCode> {
    let bytes = fs::read(file).with_context(|| format!("could not read {}", file.display()))?;
    let filename = file
        .file_name()
        .map_or_else(|| file.display().to_string(), |n| n.to_string_lossy().into_owned());

    let upload = UploadRequest::new(filename, bytes);
    let report = api::check_upload(&config.rule_source(), config.threshold, &upload)?;

    print!("{}", format_report(&report, mode));

    if report.compliant || no_fail {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::from(EXIT_NOT_COMPLIANT))
    }
}
