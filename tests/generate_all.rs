use std::fs;
use std::path::{Path, PathBuf};

use invoice_icons::config::GeneratorConfig;
use invoice_icons::{generate_all, IconError};

fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("invoice-icons-{}-{}", name, std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).expect("create scratch dir");
    dir
}

fn list_files(root: &Path) -> Vec<PathBuf> {
    let mut out = Vec::new();
    let mut stack = vec![root.to_path_buf()];
    while let Some(dir) = stack.pop() {
        for entry in fs::read_dir(&dir).expect("read dir") {
            let path = entry.expect("dir entry").path();
            if path.is_dir() {
                stack.push(path);
            } else {
                out.push(path.strip_prefix(root).unwrap().to_path_buf());
            }
        }
    }
    out.sort();
    out
}

#[test]
fn fresh_root_gets_eleven_icons() {
    let root = scratch_dir("fresh");
    let config = GeneratorConfig::new(&root);

    let report = generate_all(&config).expect("generate");
    assert_eq!(report.written.len(), 11);

    let res = config.res_dir();
    let mut buckets: Vec<String> = fs::read_dir(&res)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    buckets.sort();
    assert_eq!(
        buckets,
        vec!["mipmap-hdpi", "mipmap-mdpi", "mipmap-xhdpi", "mipmap-xxhdpi", "mipmap-xxxhdpi"]
    );

    let files = list_files(&root);
    assert_eq!(files.len(), 11);
    assert!(files.contains(&PathBuf::from("play_store_icon.png")));

    for (bucket, size) in [("mdpi", 48), ("hdpi", 72), ("xhdpi", 96), ("xxhdpi", 144), ("xxxhdpi", 192)] {
        for name in ["ic_launcher.png", "ic_launcher_round.png"] {
            let img = image::open(config.bucket_dir(bucket).join(name)).expect("decode icon");
            assert_eq!((img.width(), img.height()), (size, size));
            assert_eq!(img.color(), image::ColorType::Rgba8);
        }
    }
    let store = image::open(config.store_icon_path()).unwrap();
    assert_eq!((store.width(), store.height()), (512, 512));

    fs::remove_dir_all(&root).ok();
}

#[test]
fn round_variant_matches_launcher() {
    let root = scratch_dir("round");
    let config = GeneratorConfig::new(&root);
    generate_all(&config).unwrap();

    let dir = config.bucket_dir("xhdpi");
    let launcher = fs::read(dir.join("ic_launcher.png")).unwrap();
    let round = fs::read(dir.join("ic_launcher_round.png")).unwrap();
    assert_eq!(launcher, round);

    fs::remove_dir_all(&root).ok();
}

#[test]
fn second_run_rewrites_the_same_files() {
    let root = scratch_dir("rerun");
    let config = GeneratorConfig::new(&root);

    generate_all(&config).unwrap();
    let first = list_files(&root);
    let store_before = fs::read(config.store_icon_path()).unwrap();

    generate_all(&config).unwrap();
    assert_eq!(list_files(&root), first);
    assert_eq!(fs::read(config.store_icon_path()).unwrap(), store_before);
    assert!(first.iter().all(|p| p.extension().is_some_and(|e| e == "png")));

    fs::remove_dir_all(&root).ok();
}

#[test]
fn unusable_root_aborts_without_writing() {
    let root = scratch_dir("blocked");
    let blocker = root.join("not-a-dir");
    fs::write(&blocker, b"plain file").unwrap();

    let err = generate_all(&GeneratorConfig::new(&blocker)).unwrap_err();
    assert!(matches!(err, IconError::CreateDir { .. }), "unexpected error: {err}");
    assert_eq!(list_files(&root), vec![PathBuf::from("not-a-dir")]);

    fs::remove_dir_all(&root).ok();
}

#[test]
fn failed_write_leaves_no_partial_file() {
    let root = scratch_dir("occupied");
    let config = GeneratorConfig::new(&root);
    // a directory squatting on the first icon's name makes the rename fail
    let squatter = config.bucket_dir("mdpi").join("ic_launcher.png");
    fs::create_dir_all(&squatter).unwrap();

    let err = generate_all(&config).unwrap_err();
    match err {
        IconError::Write { path, .. } => assert_eq!(path, squatter),
        other => panic!("unexpected error: {other}"),
    }
    assert!(list_files(&root).is_empty());
    assert!(!config.store_icon_path().exists());

    fs::remove_dir_all(&root).ok();
}
