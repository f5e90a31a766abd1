use chance_core::{Chance, ChanceOptions, Count, CpfFormat, FirstNameOptions, WordOptions};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let options = match std::env::args().nth(1) {
        Some(path) => ChanceOptions::load(std::path::Path::new(&path))?,
        None => ChanceOptions::default(),
    };
    let mut chance = Chance::with_options(options);

    println!("seed: {}", chance.seed());
    println!("name: {}", chance.first_name(FirstNameOptions::default()));
    println!("cpf: {}", chance.cpf_as_text(CpfFormat::Masked));
    println!("word: {}", chance.word(WordOptions::default().capitalized()));
    println!("paragraph: {}", chance.paragraph(Count::Random));
    Ok(())
}
