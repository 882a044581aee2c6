use anyhow::{Context, Result};

use crate::translation::{TranslationClient, print_languages};
use crate::ui::Spinner;

/// Fetches and prints the source languages of the configured engine.
pub async fn run_languages(client: &TranslationClient) -> Result<()> {
    let spinner = Spinner::new("Fetching languages...");
    let languages = client.list_languages().await;
    spinner.stop();

    let languages = languages.with_context(|| {
        format!(
            "Failed to list languages for engine '{}'",
            client.config().engine()
        )
    })?;

    print_languages(&languages);
    Ok(())
}
