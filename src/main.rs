use anyhow::Result;
use clap::{Arg, Command};
use tracing::info;
use tracing_subscriber::EnvFilter;

use py2go::loader;
use py2go::renderer::ModuleRenderer;

fn main() -> Result<()> {
    // Logs go to stderr so stdout stays clean for the generated Go.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let matches = Command::new("py2go")
        .about("Convert Python source files to Go skeletons")
        .arg(
            Arg::new("input")
                .help("Python source files to translate")
                .required(true)
                .num_args(1..),
        )
        .get_matches();

    let renderer = ModuleRenderer;

    // A parse failure is fatal and halts the remaining files.
    for path in matches.get_many::<String>("input").expect("input is required") {
        info!(path = %path, "translating");
        let module = loader::load(path)?;
        print!("{}", renderer.render(path, &module));
    }

    Ok(())
}
