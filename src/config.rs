use std::path::{Path, PathBuf};

use clap::{ArgAction, Parser};

/// Android resource tree below the project root.
const RES_SUBDIR: [&str; 5] = ["android", "app", "src", "main", "res"];
const STORE_ICON_FILE: &str = "play_store_icon.png";

/// Generate launcher icons for the Android app and the Play Store listing.
#[derive(Debug, Parser)]
#[command(name = "invoice-icons", version)]
pub struct Cli {
    /// Project root that holds the `android/` tree
    ///
    /// Defaults to the directory above this crate's checkout. That path is
    /// fixed when the binary is built, so pass this flag when running an
    /// installed copy.
    #[arg(long, value_name = "DIR")]
    pub project_root: Option<PathBuf>,

    /// More log output (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, conflicts_with = "quiet")]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long)]
    pub quiet: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    pub project_root: PathBuf,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self { project_root: default_project_root() }
    }
}

impl GeneratorConfig {
    pub fn new(project_root: impl Into<PathBuf>) -> Self {
        Self { project_root: project_root.into() }
    }

    pub fn from_cli(cli: &Cli) -> Self {
        match &cli.project_root {
            Some(root) => Self::new(root),
            None => Self::default(),
        }
    }

    pub fn res_dir(&self) -> PathBuf {
        RES_SUBDIR.iter().fold(self.project_root.clone(), |p, part| p.join(part))
    }

    pub fn bucket_dir(&self, bucket: &str) -> PathBuf {
        self.res_dir().join(format!("mipmap-{}", bucket))
    }

    pub fn store_icon_path(&self) -> PathBuf {
        self.project_root.join(STORE_ICON_FILE)
    }
}

/// The generator sits one level below the app project, like a `tools/` script.
pub fn default_project_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("..")
}
