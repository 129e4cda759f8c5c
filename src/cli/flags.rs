use std::path::PathBuf;

#[derive(Debug, Default, PartialEq, Eq)]
pub struct CliFlags {
    pub help: bool,
    pub version: bool,
    pub verbose: u8,
    pub log_file: Option<PathBuf>,
    pub seed: Option<u64>,
}
