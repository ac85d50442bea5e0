use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use invoice_icons::icon;
use invoice_icons::logger;

/// Render a single preview icon at any size.
#[derive(Debug, Parser)]
#[command(name = "genicon")]
struct Args {
    /// Edge length in pixels
    #[arg(long, default_value_t = 512)]
    size: u32,

    /// Output PNG (defaults to assets/icon_<size>.png)
    #[arg(long)]
    out: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    logger::init(log::LevelFilter::Info);

    let out = args
        .out
        .unwrap_or_else(|| PathBuf::from("assets").join(format!("icon_{}.png", args.size)));
    if let Some(dir) = out.parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(dir).with_context(|| format!("create {}", dir.display()))?;
    }
    icon::create_icon(args.size, &out).with_context(|| format!("render {}px icon", args.size))?;
    println!("Wrote {}", out.display());
    Ok(())
}
