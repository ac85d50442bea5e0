use std::path::PathBuf;

use crate::config::GeneratorConfig;

/// Android density buckets and their launcher icon edge length.
pub const DENSITY_BUCKETS: [(&str, u32); 5] = [
    ("mdpi", 48),
    ("hdpi", 72),
    ("xhdpi", 96),
    ("xxhdpi", 144),
    ("xxxhdpi", 192),
];

/// Play Store listing icon edge length.
pub const STORE_ICON_SIZE: u32 = 512;
pub const STORE_BUCKET: &str = "play-store";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconVariant {
    Launcher,
    /// Same pixels as `Launcher`; only the file name differs.
    RoundLauncher,
    StoreListing,
}

impl IconVariant {
    pub fn file_name(&self) -> &'static str {
        match self {
            IconVariant::Launcher => "ic_launcher.png",
            IconVariant::RoundLauncher => "ic_launcher_round.png",
            IconVariant::StoreListing => "play_store_icon.png",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputTarget {
    pub bucket_name: &'static str,
    pub size: u32,
    pub variant: IconVariant,
    pub path: PathBuf,
}

/// All files one run produces, in generation order.
pub fn plan_targets(config: &GeneratorConfig) -> Vec<OutputTarget> {
    let mut targets = Vec::with_capacity(DENSITY_BUCKETS.len() * 2 + 1);
    for (bucket, size) in DENSITY_BUCKETS {
        let dir = config.bucket_dir(bucket);
        for variant in [IconVariant::Launcher, IconVariant::RoundLauncher] {
            targets.push(OutputTarget {
                bucket_name: bucket,
                size,
                variant,
                path: dir.join(variant.file_name()),
            });
        }
    }
    targets.push(OutputTarget {
        bucket_name: STORE_BUCKET,
        size: STORE_ICON_SIZE,
        variant: IconVariant::StoreListing,
        path: config.store_icon_path(),
    });
    targets
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plan_has_eleven_targets() {
        let targets = plan_targets(&GeneratorConfig::new("/p"));
        assert_eq!(targets.len(), 11);
        assert_eq!(targets[0].path, PathBuf::from("/p/android/app/src/main/res/mipmap-mdpi/ic_launcher.png"));
        assert_eq!(targets[1].path, PathBuf::from("/p/android/app/src/main/res/mipmap-mdpi/ic_launcher_round.png"));
        assert_eq!(targets[9].bucket_name, "xxxhdpi");
        assert_eq!(targets[9].size, 192);
        let last = targets.last().unwrap();
        assert_eq!(last.variant, IconVariant::StoreListing);
        assert_eq!(last.size, 512);
        assert_eq!(last.path, PathBuf::from("/p/play_store_icon.png"));
    }

    #[test]
    fn test_plan_paths_are_unique() {
        let targets = plan_targets(&GeneratorConfig::new("/p"));
        let mut paths: Vec<_> = targets.iter().map(|t| t.path.clone()).collect();
        paths.sort();
        paths.dedup();
        assert_eq!(paths.len(), targets.len());
    }
}
