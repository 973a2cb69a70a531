//! Command-line interface implementation for packstrap.
//! Provides argument parsing and help text formatting using clap.

use clap::{error::ErrorKind, Args as ClapArgs, CommandFactory, Parser, Subcommand};
use serde_json::Value;
use std::path::PathBuf;

use crate::defaults::Settings;

/// Command-line arguments structure for packstrap.
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "packstrap: bootstrap new projects from skeletons and plugins",
    long_about = None
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose logging output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Directory containing the available skeletons
    #[arg(long, global = true, env = "PACKSTRAP_SKELETONS_DIR", value_name = "DIR")]
    pub skeletons_dir: Option<PathBuf>,

    /// Directory containing the available plugins
    #[arg(long, global = true, env = "PACKSTRAP_PLUGINS_DIR", value_name = "DIR")]
    pub plugins_dir: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create a new project
    Create(CreateArgs),
    /// Set project defaults for new projects
    Defaults(ConfigArgs),
    /// List available plugins
    Plugins,
}

/// Options that can be persisted with `packstrap defaults`.
#[derive(ClapArgs, Debug, Default)]
pub struct ConfigArgs {
    /// Name of the author of this project
    #[arg(short, long)]
    pub author: Option<String>,

    /// Email of the author of this project
    #[arg(short = 'e', long)]
    pub author_email: Option<String>,

    /// Version of this project [default: 0.7.0]
    #[arg(short, long)]
    pub version: Option<String>,

    /// The skeleton to base the project on [default: default]
    #[arg(short, long)]
    pub skeleton: Option<String>,

    /// Plugins to include in this project (repeatable)
    #[arg(short = 'p', long = "plugin", value_name = "PLUGIN")]
    pub plugins: Vec<String>,
}

impl ConfigArgs {
    /// The options given on the command line, keyed like the defaults file.
    /// Empty values count as not given.
    pub fn supplied(&self) -> Settings {
        let mut supplied = Settings::new();
        let strings = [
            ("author", &self.author),
            ("author_email", &self.author_email),
            ("version", &self.version),
            ("skeleton", &self.skeleton),
        ];
        for (key, value) in strings {
            if let Some(value) = value.as_deref().filter(|v| !v.is_empty()) {
                supplied.insert(key.to_string(), Value::from(value));
            }
        }

        let plugins: Vec<&str> = self
            .plugins
            .iter()
            .map(String::as_str)
            .filter(|p| !p.is_empty())
            .collect();
        if !plugins.is_empty() {
            supplied.insert("plugins".to_string(), Value::from(plugins));
        }
        supplied
    }
}

#[derive(ClapArgs, Debug)]
pub struct CreateArgs {
    /// Name of the project
    #[arg(value_name = "NAME")]
    pub name: String,

    /// Directory to create project in
    #[arg(value_name = "DIRECTORY", default_value = ".")]
    pub dir: PathBuf,

    /// Copyright year [default: current year]
    #[arg(short = 'y', long, value_name = "YEAR")]
    pub copyright_year: Option<i32>,

    /// Force overwriting existing files
    #[arg(long)]
    pub force: bool,

    /// Name of the module if different from project name
    #[arg(long)]
    pub modname: Option<String>,

    /// Project description
    #[arg(long)]
    pub description: Option<String>,

    #[command(flatten)]
    pub config: ConfigArgs,
}

/// Parses command line arguments and returns the Args structure.
///
/// # Exits
/// * With status code 1 and the help text if required arguments are missing
/// * With clap's default error handling for other argument errors
pub fn get_args() -> Args {
    match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            if e.kind() == ErrorKind::MissingRequiredArgument {
                let _ = Args::command()
                    .help_template(
                        r#"{about-section}
{usage-heading} {usage}

{all-args}
{after-help}
"#,
                    )
                    .print_help();
                std::process::exit(1);
            } else {
                e.exit();
            }
        }
    }
}
