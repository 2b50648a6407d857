use clap::Parser;
use denv_config::Config;
use denv_core::{RedactMode, RedactOptions};
use std::path::PathBuf;

const WHITESPACE_NOTE: &str = "\
Whitespace is preserved: spacing around '=', after 'export' and before an \
inline comment is copied from the input. When a value has no space before \
its '#' comment, one space is inserted after the redacted value.";

#[derive(Parser, Debug)]
#[command(name = "denv")]
#[command(
    about = "Redact .env files (filter). Reads stdin or files; writes to stdout by default.",
    long_about = None,
    after_help = WHITESPACE_NOTE
)]
#[command(version)]
pub struct Cli {
    /// Input .env files (default: stdin)
    pub files: Vec<PathBuf>,

    /// What to redact: values, keys or both (default: values)
    #[arg(long, value_name = "values|keys|both")]
    pub mode: Option<RedactMode>,

    /// Replacement text when not using --keep-length (default: REDACTED)
    #[arg(long)]
    pub placeholder: Option<String>,

    /// Preserve original value length with '*'s (keeps quote style)
    #[arg(long, overrides_with = "no_keep_length")]
    pub keep_length: bool,

    /// Use the placeholder even if the config enables keep_length
    #[arg(long, overrides_with = "keep_length")]
    pub no_keep_length: bool,

    /// Remove lines whose keys look like secrets entirely
    #[arg(long, overrides_with = "no_strip_secrets")]
    pub strip_secrets: bool,

    /// Keep secret-looking lines even if the config enables strip_secrets
    #[arg(long, overrides_with = "strip_secrets")]
    pub no_strip_secrets: bool,

    /// Output file (default: stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Config file with default options
    #[arg(long, env = "DENV_CONFIG")]
    pub config: Option<PathBuf>,
}

impl Cli {
    /// Command-line flags layered over the config file
    pub fn redact_options(&self, config: &Config) -> RedactOptions {
        RedactOptions {
            mode: self.mode.unwrap_or(config.mode),
            placeholder: self
                .placeholder
                .clone()
                .unwrap_or_else(|| config.placeholder.clone()),
            keep_length: toggle(self.keep_length, self.no_keep_length, config.keep_length),
            strip_secrets: toggle(
                self.strip_secrets,
                self.no_strip_secrets,
                config.strip_secrets,
            ),
        }
    }
}

/// `--flag` / `--no-flag` pair over a config default; the last one given wins
fn toggle(on: bool, off: bool, default: bool) -> bool {
    match (on, off) {
        (true, _) => true,
        (_, true) => false,
        _ => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["denv"]).unwrap();
        assert!(cli.files.is_empty());
        assert_eq!(cli.redact_options(&Config::default()), RedactOptions::default());
    }

    #[test]
    fn test_all_flags() {
        let cli = Cli::try_parse_from([
            "denv",
            "--mode",
            "both",
            "--placeholder",
            "XXX",
            "--keep-length",
            "--strip-secrets",
            "-o",
            "out.env",
            "a.env",
            "b.env",
        ])
        .unwrap();

        assert_eq!(cli.files, vec![PathBuf::from("a.env"), PathBuf::from("b.env")]);
        assert_eq!(cli.output, Some(PathBuf::from("out.env")));

        let options = cli.redact_options(&Config::default());
        assert_eq!(options.mode, RedactMode::Both);
        assert_eq!(options.placeholder, "XXX");
        assert!(options.keep_length);
        assert!(options.strip_secrets);
    }

    #[test]
    fn test_invalid_mode_rejected() {
        assert!(Cli::try_parse_from(["denv", "--mode", "everything"]).is_err());
    }

    #[test]
    fn test_invalid_mode_error_lists_choices() {
        let err = Cli::try_parse_from(["denv", "--mode", "all"]).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("all"));
        assert!(msg.contains("values, keys, both"));
    }

    #[test]
    fn test_negated_flags_override_config() {
        let config = Config {
            keep_length: true,
            strip_secrets: true,
            ..Config::default()
        };

        let cli = Cli::try_parse_from(["denv", "--no-keep-length", "--no-strip-secrets"]).unwrap();
        let options = cli.redact_options(&config);
        assert!(!options.keep_length);
        assert!(!options.strip_secrets);

        let cli = Cli::try_parse_from(["denv"]).unwrap();
        let options = cli.redact_options(&config);
        assert!(options.keep_length);
        assert!(options.strip_secrets);
    }

    #[test]
    fn test_last_of_flag_pair_wins() {
        let cli = Cli::try_parse_from(["denv", "--keep-length", "--no-keep-length"]).unwrap();
        assert!(!cli.redact_options(&Config::default()).keep_length);

        let cli = Cli::try_parse_from(["denv", "--no-keep-length", "--keep-length"]).unwrap();
        assert!(cli.redact_options(&Config::default()).keep_length);
    }

    #[test]
    fn test_help_mentions_whitespace() {
        let help = Cli::command().render_help().to_string();
        assert!(help.contains("Whitespace is preserved"));
        assert!(help.contains("--no-strip-secrets"));
    }

    #[test]
    fn test_flags_override_config() {
        let config = Config {
            mode: RedactMode::Keys,
            placeholder: "FROM_CONFIG".to_string(),
            keep_length: true,
            strip_secrets: false,
        };

        let cli = Cli::try_parse_from(["denv"]).unwrap();
        let options = cli.redact_options(&config);
        assert_eq!(options.mode, RedactMode::Keys);
        assert_eq!(options.placeholder, "FROM_CONFIG");
        assert!(options.keep_length);

        let cli = Cli::try_parse_from(["denv", "--mode", "values", "--placeholder", "CLI"]).unwrap();
        let options = cli.redact_options(&config);
        assert_eq!(options.mode, RedactMode::Values);
        assert_eq!(options.placeholder, "CLI");
    }
}
