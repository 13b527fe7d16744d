#[cfg(target_arch = "wasm32")]
fn main() {
    radicalquiz::web::start();
}

#[cfg(not(target_arch = "wasm32"))]
fn run() -> Result<(), Box<dyn std::error::Error>> {
    use radicalquiz::{QuizConfig, QuizSession, RadicalCatalog};
    use std::io;

    let config = QuizConfig::from_env()?;

    // An optional path argument replaces the bundled dataset.
    let loaded;
    let catalog = match std::env::args().nth(1) {
        Some(path) => {
            loaded = RadicalCatalog::from_path(path)?;
            &loaded
        }
        None => RadicalCatalog::builtin(),
    };

    let mut session = QuizSession::from_config(catalog, &config);
    radicalquiz::terminal::run(
        &mut session,
        io::BufReader::new(io::stdin()),
        io::stdout().lock(),
    )?;
    Ok(())
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    dotenv::dotenv().ok();
    pretty_env_logger::init();
    log::info!("starting radical quiz");

    if let Err(error) = run() {
        log::error!("{error}");
        eprintln!("error: {error}");
        std::process::exit(1);
    }
}
