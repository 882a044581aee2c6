use anyhow::{Context, Result};

use crate::error::MozhiError;
use crate::fs::atomic_write;
use crate::input::InputReader;
use crate::translation::{TranslationClient, TranslationRequest};
use crate::ui::{Spinner, Style};

/// Where the text to translate comes from.
#[derive(Debug, Clone)]
pub enum TranslateInput {
    File(String),
    Text(String),
}

pub struct TranslateOptions {
    pub input: TranslateInput,
    pub source: String,
    pub target: Option<String>,
    pub output: Option<String>,
}

pub async fn run_translate(client: &TranslationClient, options: TranslateOptions) -> Result<()> {
    let target = options.target.ok_or_else(|| {
        MozhiError::Config(
            "Missing required target language\n\n\
             Please provide it via:\n  \
             - CLI option: mozhi --target <lang>\n  \
             - Config file: target = \"<lang>\" in ~/.config/mozhi/config.toml"
                .to_string(),
        )
    })?;

    let text = match options.input {
        TranslateInput::File(path) => InputReader::read(&path)?,
        TranslateInput::Text(text) => text,
    };

    let request = TranslationRequest::new(options.source, target, text)?;

    let spinner = Spinner::new("Translating...");
    let result = client.translate(&request).await;
    spinner.stop();

    let translated = result.with_context(|| {
        format!(
            "Failed to translate from '{}' to '{}'",
            request.source, request.target
        )
    })?;

    match options.output {
        Some(path) => {
            atomic_write(&path, &translated)?;
            crate::status!(
                "{} {}",
                Style::success("Translation saved to"),
                Style::path(&path)
            );
        }
        None => println!("{translated}"),
    }

    Ok(())
}
