//! Tomeforge - command line entry point.

use std::path::Path;
use std::sync::Arc;

use tomeforge_domain::ContentKind;
use tomeforge_engine::{
    cli,
    infrastructure::{
        app_settings::AppSettings,
        clock::{SeededRandom, SystemClock},
        telemetry,
    },
    App,
};

fn main() -> anyhow::Result<()> {
    load_dotenv_from_repo_root();

    let settings = AppSettings::from_env()?;
    telemetry::init_tracing(settings.log_filter.as_deref());

    let args: Vec<String> = std::env::args().skip(1).collect();
    let args: Vec<&str> = args.iter().map(String::as_str).collect();

    match args.as_slice() {
        ["validate", kind, path] => {
            let kind: ContentKind = kind.parse()?;
            let result = cli::validate_file(kind, Path::new(path))?;
            println!("{}", cli::format_validation(&result));
            if !result.is_valid {
                anyhow::bail!("{} failed validation", path);
            }
        }
        ["roll"] => {
            let generator = App::new(settings)
                .roll_ability_scores()
                .execute_in_sheet_order()?;
            print!("{}", cli::format_roll(&generator));
        }
        ["roll", seed] => {
            let seed: u64 = seed.parse()?;
            tracing::info!(seed, "Rolling with fixed seed");
            let app = App::with_ports(
                settings,
                Arc::new(SystemClock::new()),
                Arc::new(SeededRandom::new(seed)),
            );
            let generator = app.roll_ability_scores().execute_in_sheet_order()?;
            print!("{}", cli::format_roll(&generator));
        }
        _ => anyhow::bail!("{}", cli::USAGE),
    }
    Ok(())
}

fn load_dotenv_from_repo_root() {
    let repo_root = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..");

    // Prefer local overrides.
    for filename in [".env.local", ".env"] {
        let path = repo_root.join(filename);
        if path.exists() {
            let _ = dotenvy::from_path(path);
        }
    }
}
