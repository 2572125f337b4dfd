// ABOUTME: CLI argument definitions for the imgsearch application
// ABOUTME: Defines the command-line interface structure using clap derive macros

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "imgsearch")]
#[command(about = "Reverse image search and true file type detection", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable verbose output for debugging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Detect each file's real format from its leading bytes
    Classify {
        /// Files to classify
        #[arg(required = true, value_name = "FILE")]
        files: Vec<PathBuf>,

        /// Output as JSON
        #[arg(long)]
        json: bool,

        /// Pretty print JSON output
        #[arg(long, requires = "json")]
        pretty: bool,
    },
    /// Upload images to the reverse image search and open the results
    Search {
        /// Image files to search for
        #[arg(required = true, value_name = "FILE")]
        files: Vec<PathBuf>,

        /// Print result URLs without opening a browser
        #[arg(long)]
        no_open: bool,

        /// Upload files even when they are not recognized as images
        #[arg(long)]
        force: bool,

        /// Request timeout in seconds
        #[arg(long, value_parser = clap::value_parser!(u64).range(1..=600))]
        timeout: Option<u64>,

        /// Upload endpoint (overrides config and IMGSEARCH_UPLOAD_URL)
        #[arg(long, value_name = "URL")]
        upload_url: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,

        /// Pretty print JSON output
        #[arg(long, requires = "json")]
        pretty: bool,
    },
    /// List known file signatures, including ones added in config
    Signatures {
        /// Output as JSON
        #[arg(long)]
        json: bool,

        /// Pretty print JSON output
        #[arg(long, requires = "json")]
        pretty: bool,
    },
    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: crate::completions::Shell,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_structure() {
        let cli = Cli::command();
        assert_eq!(cli.get_name(), "imgsearch");

        for name in ["classify", "search", "signatures", "completions"] {
            assert!(cli.find_subcommand(name).is_some(), "{} should exist", name);
        }
        cli.debug_assert();
    }

    #[test]
    fn test_parse_search_command() {
        let cli = Cli::try_parse_from(["imgsearch", "search", "a.jpg", "b.png"]).unwrap();
        match cli.command {
            Commands::Search {
                files,
                no_open,
                force,
                timeout,
                upload_url,
                json,
                pretty,
            } => {
                assert_eq!(files, vec![PathBuf::from("a.jpg"), PathBuf::from("b.png")]);
                assert!(!no_open);
                assert!(!force);
                assert_eq!(timeout, None);
                assert_eq!(upload_url, None);
                assert!(!json);
                assert!(!pretty);
            }
            _ => panic!("Expected search command"),
        }

        let cli = Cli::try_parse_from([
            "imgsearch",
            "search",
            "--no-open",
            "--force",
            "--timeout",
            "10",
            "a.jpg",
        ])
        .unwrap();
        match cli.command {
            Commands::Search {
                no_open,
                force,
                timeout,
                ..
            } => {
                assert!(no_open);
                assert!(force);
                assert_eq!(timeout, Some(10));
            }
            _ => panic!("Expected search command"),
        }
    }

    #[test]
    fn test_search_requires_files_and_sane_timeout() {
        assert!(Cli::try_parse_from(["imgsearch", "search"]).is_err());
        assert!(Cli::try_parse_from(["imgsearch", "search", "--timeout", "0", "a.jpg"]).is_err());
    }

    #[test]
    fn test_pretty_requires_json() {
        assert!(Cli::try_parse_from(["imgsearch", "classify", "--pretty", "a.bin"]).is_err());
        assert!(Cli::try_parse_from(["imgsearch", "classify", "--json", "--pretty", "a.bin"]).is_ok());
    }

    #[test]
    fn test_global_flags() {
        let cli = Cli::try_parse_from(["imgsearch", "signatures", "--no-color", "-v"]).unwrap();
        assert!(cli.no_color);
        assert!(cli.verbose);
    }
}
