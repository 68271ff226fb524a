use std::process;

use clap::Parser;
use log::info;

use genesis_loader::Genesis;

/// Load a genesis file and print the parsed document
#[derive(Debug, Parser)]
struct Opts {
    /// the genesis file path, default is `genesis.json`
    #[arg(default_value_t = String::from("genesis.json"))]
    genesis_file: String,
}

fn main() {
    pretty_env_logger::init();
    let opts = Opts::parse();

    let genesis = match Genesis::load(&opts.genesis_file) {
        Ok(genesis) => genesis,
        Err(err) => {
            eprintln!("Error: {}", err);
            process::exit(1);
        }
    };
    info!("📣 Genesis chain id: {}", genesis.config.chain_id);

    println!("{:#?}", genesis);
}
