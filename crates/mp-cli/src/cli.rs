use clap::{ArgAction, Parser};
use std::path::PathBuf;

use mp_pipeline::{MatrixPaths, PipelineConfig};

/// Compute E = (A + B) * C over n x n integer matrices and reduce E to its sum.
#[derive(Parser, Debug)]
#[command(name = "matpipe")]
#[command(author, version, about)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug); RUST_LOG takes precedence
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Worker threads per compute stage
    #[arg(value_parser = positive)]
    pub threads: usize,

    /// Matrix dimension n
    #[arg(value_parser = positive)]
    pub dim: usize,

    /// Input matrix A
    pub file_a: PathBuf,

    /// Input matrix B
    pub file_b: PathBuf,

    /// Input matrix C
    pub file_c: PathBuf,

    /// Output matrix D = A + B
    pub file_d: PathBuf,

    /// Output matrix E = D * C
    pub file_e: PathBuf,
}

impl Cli {
    pub fn into_config(self) -> PipelineConfig {
        PipelineConfig::new(
            self.threads,
            self.dim,
            MatrixPaths {
                a: self.file_a,
                b: self.file_b,
                c: self.file_c,
                d: self.file_d,
                e: self.file_e,
            },
        )
    }
}

fn positive(s: &str) -> Result<usize, String> {
    let v: usize = s.parse().map_err(|e| format!("{}", e))?;
    if v == 0 {
        return Err("must be at least 1".to_string());
    }
    Ok(v)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ARGS: [&str; 8] = ["matpipe", "4", "16", "a", "b", "c", "d", "e"];

    #[test]
    fn test_parse_positionals() {
        let cli = Cli::try_parse_from(ARGS).unwrap();
        assert_eq!(cli.verbose, 0);
        let config = cli.into_config();
        assert_eq!(config.threads, 4);
        assert_eq!(config.dim, 16);
        assert_eq!(config.paths.c, PathBuf::from("c"));
        assert_eq!(config.paths.e, PathBuf::from("e"));
    }

    #[test]
    fn test_verbose_count() {
        let mut args = vec!["matpipe", "-vv"];
        args.extend_from_slice(&ARGS[1..]);
        let cli = Cli::try_parse_from(args).unwrap();
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_zero_rejected() {
        assert!(Cli::try_parse_from(["matpipe", "0", "4", "a", "b", "c", "d", "e"]).is_err());
        assert!(Cli::try_parse_from(["matpipe", "2", "0", "a", "b", "c", "d", "e"]).is_err());
        assert!(Cli::try_parse_from(["matpipe", "x", "4", "a", "b", "c", "d", "e"]).is_err());
    }

    #[test]
    fn test_missing_arguments() {
        assert!(Cli::try_parse_from(["matpipe", "2", "4", "a", "b"]).is_err());
    }

    #[test]
    fn test_verify_cli() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
