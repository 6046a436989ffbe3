use std::path::PathBuf;

use clap::Parser;
use madlibs::AppError;

#[derive(Parser)]
#[command(name = "madlibs")]
#[command(version)]
#[command(about = "Allows user to input mad libs to the console", long_about = None)]
struct Cli {
    /// Path to the mad-libs data file
    #[arg(short, long, default_value = madlibs::DEFAULT_DATA_FILE)]
    file: PathBuf,
}

fn main() {
    let cli = Cli::parse();

    let result: Result<(), AppError> = madlibs::play(&cli.file);

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
