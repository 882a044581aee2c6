use clap::{ArgAction, Parser};

use crate::translation::Selection;

#[derive(Parser, Debug)]
#[command(name = "mozhi")]
#[command(about = "Translate text through Mozhi translation mirrors")]
#[command(version)]
#[command(arg_required_else_help = true)]
pub struct Args {
    /// Translation engine (default: google)
    #[arg(short = 'e', long)]
    pub engine: Option<String>,

    /// Source language code, or "auto" to detect it (default: auto)
    #[arg(short = 's', long)]
    pub source: Option<String>,

    /// Target language code
    #[arg(short = 't', long)]
    pub target: Option<String>,

    /// Text to translate
    #[arg(long, visible_alias = "txt")]
    pub text: Option<String>,

    /// List languages supported by the engine
    #[arg(short = 'l', long = "list-languages", visible_alias = "ll")]
    pub list_languages: bool,

    /// File to translate ("-" reads stdin)
    #[arg(short = 'f', long)]
    pub file: Option<String>,

    /// Write the translation to this file instead of stdout
    #[arg(short = 'o', long)]
    pub output: Option<String>,

    /// Mirror base URL (repeatable, replaces the configured mirrors)
    #[arg(short = 'm', long = "mirror", value_name = "URL")]
    pub mirrors: Vec<String>,

    /// How to pick a mirror for each request
    #[arg(long, value_enum)]
    pub selection: Option<Selection>,

    /// Request timeout in seconds, 0 disables it (default: 30)
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Suppress status messages
    #[arg(short = 'q', long)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short = 'v', long, action = ArgAction::Count)]
    pub verbose: u8,
}

/// The single action an invocation performs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    ListLanguages,
    TranslateFile { path: String },
    TranslateText { text: String },
}

impl Args {
    /// Picks the action by flag priority: list languages, then file, then text.
    pub fn action(&self) -> Option<Action> {
        if self.list_languages {
            Some(Action::ListLanguages)
        } else if let Some(path) = self.file.as_ref().filter(|p| !p.is_empty()) {
            Some(Action::TranslateFile { path: path.clone() })
        } else {
            self.text
                .as_ref()
                .filter(|t| !t.is_empty())
                .map(|text| Action::TranslateText { text: text.clone() })
        }
    }
}
