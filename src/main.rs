use std::io::{self, Read};
use std::process;

use clap::Parser;
use substcrack::{Ciphertext, Config, Cracker, References, Result};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn run(config: Config) -> Result<()> {
    let references = References::load(&config.frequencies)?;

    let mut input = String::new();
    io::stdin().read_to_string(&mut input)?;
    let ciphertext = Ciphertext::from(input);

    let mut cracker = Cracker::new(config.cipher, &references);
    if let Some(language) = &config.language {
        cracker = cracker.with_language(language.as_str());
    }

    let guess = cracker.crack(&ciphertext)?;
    if guess.inconclusive {
        eprintln!("warning: empty ciphertext, the guess below is meaningless");
    }

    println!("cipher:   {}", guess.cipher);
    println!("language: {}", guess.language);
    println!("distance: {:.4}", guess.distance);
    println!();
    print!("{}", guess.decrypt(&ciphertext)?);

    Ok(())
}

fn main() {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(EnvFilter::from_default_env())
        .init();

    let config = Config::parse();
    if let Err(err) = run(config) {
        eprintln!("error: {}", err);
        process::exit(1);
    }
}
