use std::{
    env,
    fs::File,
    io::{Read, Write},
    path::Path,
};

use eyre::{eyre, Result};

/// Convert a long path to a short path.
///
/// ```no_run
/// use tronex_common::utils::io::file::short_path;
///
/// let path = "/some/long/path/that/is/cwd/export.csv";
/// let short_path = short_path(path);
/// assert_eq!(short_path, "./export.csv");
/// ```
pub fn short_path(path: &str) -> String {
    match env::current_dir() {
        Ok(dir) => path.replace(&dir.into_os_string().into_string().unwrap_or_default(), "."),
        Err(_) => path.to_owned(),
    }
}

/// Write contents to a file on the disc, creating parent directories as needed.
///
/// ```no_run
/// use tronex_common::utils::io::file::write_file;
///
/// let result = write_file("/tmp/tronex/test.txt", "Hello, World!");
/// ```
pub fn write_file(path_str: &str, contents: &str) -> Result<()> {
    let path = Path::new(path_str);

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }

    let mut file = File::create(path)?;
    file.write_all(contents.as_bytes())?;

    Ok(())
}

/// Write lines to a file on the disc, each terminated by a newline.
///
/// ```no_run
/// use tronex_common::utils::io::file::write_lines_to_file;
///
/// let lines = vec!["Wallet,Hash".to_string(), "T...,abc".to_string()];
/// let result = write_lines_to_file("/tmp/tronex/export.csv", lines);
/// ```
pub fn write_lines_to_file(path: &str, lines: Vec<String>) -> Result<()> {
    let mut contents = lines.join("\n");
    contents.push('\n');
    write_file(path, &contents)
}

/// Read contents from a file on the disc
///
/// ```no_run
/// use tronex_common::utils::io::file::read_file;
///
/// let contents = read_file("/tmp/tronex/test.txt");
/// ```
pub fn read_file(path: &str) -> Result<String> {
    let mut file = File::open(Path::new(path)).map_err(|e| eyre!("failed to open {}: {}", path, e))?;
    let mut contents = String::new();
    file.read_to_string(&mut contents)?;
    Ok(contents)
}

/// Delete a file from the disc, returning whether anything was removed.
pub fn delete_path(path: &str) -> bool {
    let path = Path::new(path);
    if path.is_dir() {
        std::fs::remove_dir_all(path).is_ok()
    } else {
        std::fs::remove_file(path).is_ok()
    }
}
