//! Command line options. With no flags the program behaves as a plain
//! interactive menu on stdin/stdout.

use clap::Parser;

#[derive(Debug, Parser)]
#[command(name = "school-registry", version, about)]
pub struct Cli {
    /// Tracing filter for diagnostics written to stderr (e.g. `info`, `school_registry=debug`).
    #[arg(long, env = "SCHOOL_REGISTRY_LOG", default_value = "warn")]
    pub log_level: String,

    /// Disable colored output.
    #[arg(long)]
    pub no_color: bool,

    /// Start with empty collections instead of the sample records.
    #[arg(long)]
    pub no_seed: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_without_flags() {
        let cli = Cli::try_parse_from(["school-registry"]).unwrap();
        assert!(!cli.no_color);
        assert!(!cli.no_seed);
    }

    #[test]
    fn flags_parse() {
        let cli = Cli::try_parse_from([
            "school-registry",
            "--no-color",
            "--no-seed",
            "--log-level",
            "debug",
        ])
        .unwrap();
        assert!(cli.no_color);
        assert!(cli.no_seed);
        assert_eq!(cli.log_level, "debug");
    }

    #[test]
    fn unknown_flag_is_rejected() {
        assert!(Cli::try_parse_from(["school-registry", "--persist"]).is_err());
    }
}
