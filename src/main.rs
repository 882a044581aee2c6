use anyhow::Result;
use clap::Parser;

use mozhi_cli::MozhiError;
use mozhi_cli::cli::commands::languages;
use mozhi_cli::cli::commands::translate::{self, TranslateInput, TranslateOptions};
use mozhi_cli::cli::{Action, Args};
use mozhi_cli::config::{ConfigManager, ResolveOptions, resolve_config};
use mozhi_cli::output::{self, OutputConfig};
use mozhi_cli::translation::TranslationClient;
use mozhi_cli::ui::Style;

#[tokio::main]
async fn main() {
    let args = Args::parse();

    output::init(OutputConfig {
        quiet: args.quiet,
        no_color: args.no_color || OutputConfig::default().no_color,
    });
    output::init_tracing(args.verbose);

    if let Err(err) = run(args).await {
        let failure = err.downcast_ref::<MozhiError>();
        let label = failure.map_or_else(
            || "Error:".to_string(),
            |e| format!("Error ({}):", e.stage()),
        );
        eprintln!("{} {err:#}", Style::error(&label));
        std::process::exit(failure.map_or(exitcode::SOFTWARE, MozhiError::exit_code));
    }
}

async fn run(args: Args) -> Result<()> {
    let Some(action) = args.action() else {
        return Err(MozhiError::Config(format!(
            "Nothing to do: pass --text, --file or --list-languages\n\n{}",
            Style::hint("Run 'mozhi --help' for usage.")
        ))
        .into());
    };

    let config_file = ConfigManager::new()?.load_or_default()?;
    let options = ResolveOptions {
        engine: args.engine,
        source: args.source,
        target: args.target,
        selection: args.selection,
        timeout_secs: args.timeout,
        mirrors: args.mirrors,
    };
    let resolved = resolve_config(&options, &config_file)?;

    let client = TranslationClient::builder(resolved.client)
        .selector(resolved.selection.selector())
        .timeout(resolved.timeout)
        .build()?;

    let input = match action {
        Action::ListLanguages => return languages::run_languages(&client).await,
        Action::TranslateFile { path } => TranslateInput::File(path),
        Action::TranslateText { text } => TranslateInput::Text(text),
    };

    translate::run_translate(
        &client,
        TranslateOptions {
            input,
            source: resolved.source,
            target: resolved.target,
            output: args.output,
        },
    )
    .await
}
