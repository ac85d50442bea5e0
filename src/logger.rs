use std::error::Error;
use std::io::Write;

use log::LevelFilter;

fn timestamp() -> String {
    chrono::Local::now().format("%H:%M:%S").to_string()
}

/// Map `-v` count / `--quiet` to a level filter.
pub fn level_for(verbosity: u8, quiet: bool) -> LevelFilter {
    if quiet {
        return LevelFilter::Error;
    }
    match verbosity {
        0 => LevelFilter::Info,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Install the global logger. `RUST_LOG` still wins for module filters.
pub fn init(level: LevelFilter) {
    let _ = env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format(|buf, record| writeln!(buf, "[{}] {}: {}", timestamp(), record.level(), record.args()))
        .try_init();
}

/// Render an error and its whole `source()` chain, one cause per line.
pub fn error_chain(e: &dyn Error) -> String {
    let mut out = e.to_string();
    let mut source = e.source();
    while let Some(cause) = source {
        out.push_str(&format!("\n  caused by: {}", cause));
        source = cause.source();
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::IconError;
    use std::io;
    use std::path::PathBuf;

    #[test]
    fn test_level_mapping() {
        assert_eq!(level_for(0, false), LevelFilter::Info);
        assert_eq!(level_for(1, false), LevelFilter::Debug);
        assert_eq!(level_for(5, false), LevelFilter::Trace);
        assert_eq!(level_for(3, true), LevelFilter::Error);
    }

    #[test]
    fn test_error_chain_names_each_cause_once() {
        let err = IconError::CreateDir {
            path: PathBuf::from("/blocked/res"),
            source: io::Error::new(io::ErrorKind::Other, "Not a directory"),
        };
        let chain = error_chain(&err);
        assert_eq!(chain, "failed to create directory /blocked/res\n  caused by: Not a directory");
        assert_eq!(chain.matches("Not a directory").count(), 1);
    }
}
