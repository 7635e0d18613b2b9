use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Once;

static INIT: Once = Once::new();

pub fn init_test_logging() {
    INIT.call_once(|| {
        let _ = env_logger::builder().is_test(true).try_init();
    });
}

/// Write one file under `root`, creating parent directories as needed.
pub fn write_file(root: &Path, relative_path: &str, content: &[u8]) -> PathBuf {
    let path = root.join(relative_path);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("Failed to create parent dirs");
    }
    fs::write(&path, content).expect("Failed to write fixture file");
    path
}

/// Create an add-on folder with a descriptor and a couple of content
/// files, returning its path.
pub fn write_addon(root: &Path, name: &str) -> PathBuf {
    let folder = root.join(name);
    fs::create_dir_all(&folder).expect("Failed to create addon folder");

    write_file(
        &folder,
        &format!("{name}.toc"),
        format!("## Title: {name}\n## Version: 1.0.0\n{name}.lua\n").as_bytes(),
    );
    write_file(
        &folder,
        &format!("{name}.lua"),
        b"local frame = CreateFrame(\"Frame\")\nframe:Hide()\n",
    );

    folder
}
