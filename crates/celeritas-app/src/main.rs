//! The binary entry point for the Celeritas application.
//!
//! Startup order: CLI parsing, home-directory resolution, application
//! directory creation (best effort), configuration restore with CLI
//! overrides, logging, the configuration dialog, resource groups, then the
//! event loop.

use celeritas_app::app::App;
use celeritas_app::dialog;
use celeritas_config::{AppPaths, CliArgs};
use celeritas_log::init_logging;
use celeritas_render::{EnginePaths, EngineRoot};
use clap::Parser;
use winit::event_loop::EventLoop;

fn main() {
    let args = CliArgs::parse();

    let paths = match args.home.as_deref() {
        Some(home) => AppPaths::with_home(home),
        None => match AppPaths::resolve() {
            Ok(paths) => paths,
            Err(e) => {
                eprintln!("celeritas: {e}");
                std::process::exit(1);
            }
        },
    };

    // Best effort: a directory that cannot be created is reported and
    // startup continues.
    for failure in paths.ensure_dirs() {
        eprintln!("celeritas: {failure}");
    }

    let mut root = EngineRoot::new(EnginePaths::from(&paths));
    if let Err(e) = root.restore_config() {
        eprintln!("celeritas: {e}");
        std::process::exit(1);
    }
    root.config_mut().apply_cli_overrides(&args);

    init_logging(Some(&paths.engine_log_file()), Some(root.config()));

    if !args.no_dialog {
        let render_systems = root.plugins().names().to_vec();
        let stdin = std::io::stdin();
        let stdout = std::io::stdout();
        if let Err(e) = dialog::show(
            root.config_mut(),
            &render_systems,
            &mut stdin.lock(),
            &mut stdout.lock(),
        ) {
            eprintln!("celeritas: configuration dialog failed: {e}");
            std::process::exit(1);
        }
        if let Err(e) = root.save_config() {
            tracing::warn!("Accepted configuration was not saved: {e}");
        }
    }

    root.declare_resource_location(celeritas_render::DEFAULT_RESOURCE_GROUP, paths.root.clone());
    root.initialise_resource_groups();

    let event_loop = EventLoop::new().expect("Failed to create event loop");
    let mut app = App::new(root);
    event_loop.run_app(&mut app).expect("Event loop failed");
    // Dropping the app drops the engine root, which persists the
    // configuration on the way out.
}
