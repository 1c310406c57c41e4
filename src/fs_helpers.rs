use std::{fs::File, io::Read, path::Path};

use log::{debug, error};

use crate::error::{Error, Result};

/// Reads a whole UTF-8 text file. Any failure to open or read it,
/// invalid UTF-8 included, is reported as a file access error.
pub fn read_text_file(path: &Path) -> Result<String> {
    let mut file_handle = File::open(path).map_err(|err| {
        error!("error opening {:?}: {}", path, err);
        Error::file_access(path, err)
    })?;

    let mut text = String::new();
    file_handle.read_to_string(&mut text).map_err(|err| {
        error!("error reading {:?}: {}", path, err);
        Error::file_access(path, err)
    })?;

    debug!("read {} bytes from {:?}", text.len(), path);
    Ok(text)
}
