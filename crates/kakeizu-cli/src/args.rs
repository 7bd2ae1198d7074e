//! Command-line argument definitions for the kakeizu CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments control input/output paths, configuration file
//! selection, font selection, and logging verbosity.

use clap::Parser;

/// Command-line arguments for the kakeizu chart tool
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the input chart text file
    #[arg(help = "Path to the input file")]
    pub input: String,

    /// Base path for the output SVG pages (pages are numbered from it)
    #[arg(short, long, default_value = "kakeizu.svg")]
    pub output: String,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Path to the font file providing the configured family
    #[arg(long)]
    pub font: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["kakeizu", "input.txt"]).unwrap();
        assert_eq!(args.input, "input.txt");
        assert_eq!(args.output, "kakeizu.svg");
        assert_eq!(args.config, None);
        assert_eq!(args.font, None);
        assert_eq!(args.log_level, "info");
    }

    #[test]
    fn test_all_flags() {
        let args = Args::try_parse_from([
            "kakeizu",
            "chart.txt",
            "-o",
            "out.svg",
            "-c",
            "conf.toml",
            "--font",
            "mincho.ttf",
            "--log-level",
            "debug",
        ])
        .unwrap();
        assert_eq!(args.output, "out.svg");
        assert_eq!(args.config.as_deref(), Some("conf.toml"));
        assert_eq!(args.font.as_deref(), Some("mincho.ttf"));
        assert_eq!(args.log_level, "debug");
    }

    #[test]
    fn test_input_is_required() {
        assert!(Args::try_parse_from(["kakeizu"]).is_err());
    }
}
