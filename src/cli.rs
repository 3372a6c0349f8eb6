use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::ConfigOverrides;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Parser)]
#[command(name = "pagescan", version, about = "Fetch a web page and analyse its text")]
pub struct Cli {
    /// Config file to use instead of the default location
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Override the page to fetch
    #[arg(long, value_name = "URL")]
    pub url: Option<String>,

    /// Load once, print a report and exit
    #[arg(long)]
    pub once: bool,

    /// Report format for --once
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Number of most frequent words to list
    #[arg(long, value_name = "N")]
    pub top: Option<usize>,

    /// Report fetch failures instead of analysing empty content
    #[arg(long)]
    pub strict: bool,
}

impl Cli {
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            url: self.url.clone(),
            strict: self.strict,
            top_words: self.top,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_interactive_text() {
        let cli = Cli::try_parse_from(["pagescan"]).unwrap();
        assert!(!cli.once);
        assert!(!cli.strict);
        assert_eq!(cli.format, OutputFormat::Text);
        assert!(cli.url.is_none());
    }

    #[test]
    fn parses_one_shot_flags() {
        let cli = Cli::try_parse_from([
            "pagescan",
            "--once",
            "--format",
            "json",
            "--top",
            "5",
            "--strict",
            "--url",
            "http://localhost:8000/page",
        ])
        .unwrap();
        assert!(cli.once);
        assert_eq!(cli.format, OutputFormat::Json);

        let overrides = cli.overrides();
        assert_eq!(overrides.top_words, Some(5));
        assert!(overrides.strict);
        assert_eq!(overrides.url.as_deref(), Some("http://localhost:8000/page"));
    }

    #[test]
    fn rejects_unknown_format() {
        assert!(Cli::try_parse_from(["pagescan", "--format", "xml"]).is_err());
    }
}
