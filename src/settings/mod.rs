//! Runtime settings, built from command-line flags.
//!
//! Nothing is persisted: every run starts from the form defaults.

use crate::cli::CliFlags;
use crate::logging::LogConfig;

#[derive(Debug, Clone, Default)]
pub struct Settings {
    pub log: LogConfig,
    /// Fixed seed for reproducible passwords.
    pub seed: Option<u64>,
}

impl Settings {
    pub fn from_flags(flags: &CliFlags) -> Self {
        Self {
            log: LogConfig::from_verbosity(flags.verbose).with_log_file(flags.log_file.clone()),
            seed: flags.seed,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use tracing::Level;

    use super::*;

    #[test]
    fn defaults_disable_file_logging() {
        let settings = Settings::from_flags(&CliFlags::default());
        assert!(settings.log.log_file.is_none());
        assert_eq!(settings.log.level, Level::INFO);
        assert!(settings.seed.is_none());
    }

    #[test]
    fn flags_carry_over() {
        let flags = CliFlags {
            verbose: 1,
            log_file: Some(PathBuf::from("pw.log")),
            seed: Some(9),
            ..CliFlags::default()
        };
        let settings = Settings::from_flags(&flags);
        assert_eq!(settings.log.level, Level::DEBUG);
        assert_eq!(settings.log.log_file, Some(PathBuf::from("pw.log")));
        assert_eq!(settings.seed, Some(9));
    }
}
