use clap::Parser;

use invoice_icons::config::{Cli, GeneratorConfig};
use invoice_icons::logger::{self, error_chain};
use invoice_icons::generate_all;

fn main() {
    let cli = Cli::parse();
    logger::init(logger::level_for(cli.verbose, cli.quiet));
    let config = GeneratorConfig::from_cli(&cli);

    match generate_all(&config) {
        Ok(report) => {
            println!();
            println!("All app icons generated successfully! ({} files)", report.written.len());
            println!("Android icons: {}", config.res_dir().display());
            println!("Play Store icon: {}", config.store_icon_path().display());
        }
        Err(e) => {
            // not routed through the logger: RUST_LOG=off must not hide it
            eprintln!("error: icon generation failed: {}", error_chain(&e));
            std::process::exit(1);
        }
    }
}
