use clap::Parser;
use rand::rngs::OsRng;
use tracing::info;

use hexkey::{Key, DEFAULT_KEY_LENGTH};

#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Length of the key in bytes, e.g. 16 for a 128-bit key.
    #[arg(short = 'n', long, default_value_t = DEFAULT_KEY_LENGTH)]
    length: usize,
}

fn main() -> anyhow::Result<()> {
    // keep stdout for the key itself, logs go to stderr
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .try_init()
        .expect("cannot init logger");

    let cli = Cli::parse();

    info!("generating a {}-byte key", cli.length);
    let key = Key::random(cli.length, &mut OsRng)?;

    println!("{}", key);

    Ok(())
}
