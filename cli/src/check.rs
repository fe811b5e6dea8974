//! `tagscan check`: decode a whole collection and tally what goes wrong
use std::collections::HashMap;
use std::fmt::{Display, Formatter, Result as FmtResult};
use std::io::{Read, Seek, SeekFrom};
use std::path::{Path, PathBuf};

use tagscanlib::{identify, read_from_with, sum, ReadOptions};
use walkdir::{DirEntry, WalkDir};

use crate::config::CheckSettings;

const OPEN_ERROR: &str = "error opening file";

/// Results of a `check` run
#[derive(Debug, Default)]
pub struct Report {
    pub files: usize,
    /// Read failures by error message
    pub decoding_errors: HashMap<String, usize>,
    /// Checksum failures by error message
    pub hash_errors: HashMap<String, usize>,
    /// Files by the checksum of their audio data
    pub hashes: HashMap<String, Vec<PathBuf>>,
}

impl Report {
    /// Identify, read and optionally checksum one stream
    pub fn check_stream<R>(
        &mut self,
        path: &Path,
        reader: &mut R,
        options: &ReadOptions,
        with_sum: bool,
    ) where
        R: Read + Seek,
    {
        self.files += 1;

        if let Err(e) = identify(reader) {
            println!("IDENTIFY: {} {e}", path.display());
        }

        if let Err(e) = read_from_with(reader, options) {
            println!("READ: {} {e}", path.display());
            *self.decoding_errors.entry(e.to_string()).or_default() += 1;
        }

        if !with_sum {
            return;
        }

        if let Err(e) = reader.seek(SeekFrom::Start(0)) {
            println!("DIED: {} error seeking back to 0: {e}", path.display());
            return;
        }
        match sum(reader) {
            Ok(digest) => self
                .hashes
                .entry(digest)
                .or_default()
                .push(path.to_path_buf()),
            Err(e) => {
                println!("SUM: {} {e}", path.display());
                *self.hash_errors.entry(e.to_string()).or_default() += 1;
            }
        }
    }

    /// Checksums shared by more than one file
    pub fn duplicates(&self) -> Vec<(&str, &[PathBuf])> {
        let mut duplicates: Vec<_> = self
            .hashes
            .iter()
            .filter(|(_, paths)| paths.len() > 1)
            .map(|(digest, paths)| (digest.as_str(), paths.as_slice()))
            .collect();
        duplicates.sort_unstable();
        duplicates
    }
}

/// Sorted by count, most frequent first
fn sorted_counts(counts: &HashMap<String, usize>) -> Vec<(&str, usize)> {
    let mut counts: Vec<_> = counts.iter().map(|(k, v)| (k.as_str(), *v)).collect();
    counts.sort_unstable_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(b.0)));
    counts
}

impl Display for Report {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        writeln!(f, "Checked {} files", self.files)?;

        for (error, count) in sorted_counts(&self.decoding_errors) {
            writeln!(f, "{error} : {count}")?;
        }
        for (error, count) in sorted_counts(&self.hash_errors) {
            writeln!(f, "{error} : {count}")?;
        }
        for (digest, paths) in self.duplicates() {
            writeln!(f, "{digest} : {}", paths.len())?;
            for path in paths {
                writeln!(f, "    {}", path.display())?;
            }
        }

        Ok(())
    }
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry.depth() > 0
        && entry
            .file_name()
            .to_str()
            .map_or(false, |name| name.starts_with('.'))
}

/// Walk `root` and check every file below it
pub fn run(root: &Path, settings: &CheckSettings, options: &ReadOptions, with_sum: bool) -> Report {
    let mut report = Report::default();

    let walker = WalkDir::new(root)
        .follow_links(settings.follow_links)
        .max_depth(settings.max_depth)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| !(settings.skip_hidden && is_hidden(entry)));

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!("Skipping entry: {e}");
                continue;
            }
        };
        if entry.file_type().is_dir() {
            continue;
        }

        let path = entry.path();
        debug!("Checking {}", path.display());
        match crate::open(path) {
            Ok(mut reader) => report.check_stream(path, &mut reader, options, with_sum),
            Err(e) => {
                warn!("{e:#}");
                report.files += 1;
                *report
                    .decoding_errors
                    .entry(OPEN_ERROR.to_string())
                    .or_default() += 1;
            }
        }
    }

    report
}
