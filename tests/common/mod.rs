use assert_fs::{prelude::*, TempDir};
use sales_summary::Config;

/// Creates an isolated working directory and the config rooted at it.
pub fn setup_test_env() -> (TempDir, Config) {
    let temp = TempDir::new().expect("create temp dir");
    let config = Config::in_dir(temp.path());
    (temp, config)
}

/// Writes `contents` to `stores/<relative>`, creating parent folders.
pub fn write_store_file(temp: &TempDir, relative: &str, contents: &str) {
    temp.child("stores")
        .child(relative)
        .write_str(contents)
        .expect("write store file");
}
