//! chainsmith's main application entry point.
//! Handles command-line argument parsing, context assembly and the per-target
//! generation loop.

use chainsmith::{
    cli::{get_args, Args},
    config::get_config,
    context::{load_from_file, load_from_stdin, merge, parse_assignment},
    error::{default_error_handler, Error, Result},
    generator::Generator,
    loader::TemplateLibrary,
    processor::{Context, LocalFileSystem},
    prompt::DialoguerPrompter,
};

/// Main application entry point.
fn main() {
    let args = get_args();

    // Logger configuration
    env_logger::Builder::new()
        .filter_level(if args.verbose {
            log::LevelFilter::Trace
        } else {
            log::LevelFilter::Info
        })
        .init();

    if let Err(err) = run(args) {
        default_error_handler(err);
    }
}

/// Builds the context: configuration, then context file, stdin and assignments.
fn build_context(args: &Args, base: Context) -> Result<Context> {
    let mut context = base;
    if let Some(path) = &args.context {
        context = merge(context, load_from_file(path)?);
    }
    if args.stdin {
        context = merge(context, load_from_stdin()?);
    }
    for assignment in &args.assignments {
        let (key, value) = parse_assignment(assignment)?;
        context.insert(key, value);
    }
    Ok(context)
}

/// Main application logic execution.
///
/// # Flow
/// 1. Loads the configuration of the working directory
/// 2. Assembles the template context
/// 3. Opens the templates root, listing it when asked to
/// 4. Generates every target, reporting failures without stopping
fn run(args: Args) -> Result<()> {
    let project_dir = std::env::current_dir()?;
    let mut config = get_config(&project_dir)?;
    if let Some(dir) = &args.templates_dir {
        config.templates_dir = dir.clone();
    }

    let context = build_context(&args, std::mem::take(&mut config.context))?;
    let library = TemplateLibrary::new(&config.templates_dir)?;
    if args.list {
        println!("Templates in {}:", library.root().display());
        for name in library.available_templates()? {
            println!("  {name}");
        }
        return Ok(());
    }

    let writer = LocalFileSystem;
    let prompt = DialoguerPrompter::new();

    let generator = Generator::new(
        library.renderer(),
        &library,
        &writer,
        &prompt,
        args.skip_overwrite_check,
    );

    let mut failed = 0;
    for target in &args.targets {
        match generator.create(target, args.template.as_deref(), &context) {
            Ok(path) => println!("create: '{}'", path.display()),
            Err(e) => {
                failed += 1;
                match e {
                    Error::ProcessError { .. } | Error::TargetExistsError { .. } => {
                        log::warn!("{}", e)
                    }
                    _ => log::error!("{}", e),
                }
            }
        }
    }

    if failed > 0 {
        return Err(Error::GenerationFailed { failed, total: args.targets.len() });
    }
    Ok(())
}
