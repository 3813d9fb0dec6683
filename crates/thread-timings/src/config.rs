// File: crates/thread-timings/src/config.rs
// Summary: Command-line arguments and the run configuration they resolve to.

use std::path::PathBuf;

use clap::{ArgAction, Parser};

pub const DEFAULT_SINGLE_PATH: &str = "single_threaded_output.txt";
pub const DEFAULT_MULTI_PATH: &str = "multithreaded_output.txt";
pub const DEFAULT_OUTPUT_PATH: &str = "execution_time_vs_threads.png";

#[derive(Parser, Debug)]
#[command(name = "thread-timings", version)]
#[command(about = "Plot single- vs multithreaded execution time against thread count")]
pub struct Args {
    /// Single-threaded measurements, one `<threads> <seconds>` pair per line
    #[arg(long, default_value = DEFAULT_SINGLE_PATH)]
    pub single: PathBuf,

    /// Multithreaded measurements, one `<threads> <seconds>` pair per line
    #[arg(long, default_value = DEFAULT_MULTI_PATH)]
    pub multi: PathBuf,

    /// PNG file to write (overwritten if present)
    #[arg(short, long, default_value = DEFAULT_OUTPUT_PATH)]
    pub output: PathBuf,

    /// Only write the PNG; do not open a window
    #[arg(long)]
    pub no_show: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

/// Everything a run needs, independent of how it was specified.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlotConfig {
    pub single_path: PathBuf,
    pub multi_path: PathBuf,
    pub output_path: PathBuf,
    pub show: bool,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            single_path: PathBuf::from(DEFAULT_SINGLE_PATH),
            multi_path: PathBuf::from(DEFAULT_MULTI_PATH),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            show: true,
        }
    }
}

impl From<&Args> for PlotConfig {
    fn from(args: &Args) -> Self {
        Self {
            single_path: args.single.clone(),
            multi_path: args.multi.clone(),
            output_path: args.output.clone(),
            show: !args.no_show,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_fixed_file_names() {
        let args = Args::try_parse_from(["thread-timings"]).unwrap();
        assert_eq!(PlotConfig::from(&args), PlotConfig::default());
        assert_eq!(args.verbose, 0);
    }

    #[test]
    fn flags_override_paths_and_display() {
        let args = Args::try_parse_from([
            "thread-timings",
            "--single",
            "a.txt",
            "--multi",
            "b.txt",
            "-o",
            "out/c.png",
            "--no-show",
            "-vv",
        ])
        .unwrap();
        let cfg = PlotConfig::from(&args);
        assert_eq!(cfg.single_path, PathBuf::from("a.txt"));
        assert_eq!(cfg.multi_path, PathBuf::from("b.txt"));
        assert_eq!(cfg.output_path, PathBuf::from("out/c.png"));
        assert!(!cfg.show);
        assert_eq!(args.verbose, 2);
    }

    #[test]
    fn positional_arguments_are_rejected() {
        assert!(Args::try_parse_from(["thread-timings", "extra.txt"]).is_err());
    }
}
