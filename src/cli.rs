//! Command-line interface implementation for chainsmith.
//! Provides argument parsing and help text formatting using clap.

use clap::{error::ErrorKind, CommandFactory, Parser};
use std::path::PathBuf;

/// Command-line arguments structure for chainsmith.
#[derive(Parser, Debug)]
#[command(author, version, about = "chainsmith: generate files through template chains encoded in their names", long_about = None)]
pub struct Args {
    /// Target files, e.g. app/views/index.html._layout._content
    #[arg(value_name = "TARGET", required_unless_present = "list")]
    pub targets: Vec<String>,

    /// Template applied to targets that carry no template chain
    #[arg(short, long, value_name = "NAME")]
    pub template: Option<String>,

    /// Templates root directory (overrides the configuration file)
    #[arg(short = 'd', long, value_name = "DIR")]
    pub templates_dir: Option<PathBuf>,

    /// JSON or YAML file with context variables
    #[arg(short, long, value_name = "FILE")]
    pub context: Option<PathBuf>,

    /// Read context variables as JSON from stdin
    #[arg(short, long)]
    pub stdin: bool,

    /// Extra context variable, may be repeated
    #[arg(long = "set", value_name = "KEY=VALUE")]
    pub assignments: Vec<String>,

    /// Replace existing files without asking for confirmation.
    #[arg(long)]
    pub skip_overwrite_check: bool,

    /// List the templates available under the templates root and exit
    #[arg(short, long)]
    pub list: bool,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Parses command line arguments and returns the Args structure.
///
/// # Exits
/// * With status code 1 if required arguments are missing
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
