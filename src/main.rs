//! packstrap's main application entry point.
//! Parses arguments, sets up logging and dispatches to the commands.

use packstrap::{
    cli::{get_args, Args, Command},
    commands::{create, list_plugins, set_defaults},
    defaults::JsonFileSettings,
    error::{default_error_handler, Result},
    library::TemplateLibrary,
    logger::init_logger,
    renderer::MiniJinjaRenderer,
};

/// Main application entry point.
fn main() {
    let args = get_args();

    init_logger(args.verbose);

    if let Err(err) = run(args) {
        default_error_handler(err);
    }
}

/// Main application logic execution.
fn run(args: Args) -> Result<()> {
    let library = TemplateLibrary::locate(args.skeletons_dir, args.plugins_dir)?;
    let settings = JsonFileSettings::in_home_dir()?;

    match args.command {
        Command::Create(create_args) => {
            let renderer = MiniJinjaRenderer::new();
            let summary = create(&create_args, &library, &settings, &renderer)?;
            log::debug!(
                "{} files written, {} skipped",
                summary.copied,
                summary.skipped
            );
        }
        Command::Defaults(config_args) => {
            let stored = set_defaults(&config_args, &library, &settings)?;
            println!("{}", serde_json::to_string_pretty(&stored)?);
        }
        Command::Plugins => {
            println!("{}", list_plugins(&library)?.join("\n"));
        }
    }

    Ok(())
}
