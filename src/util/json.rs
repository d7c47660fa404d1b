use std::fs;
use std::path::Path;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::ser::PrettyFormatter;

use crate::error::{RegistryError, RegistryResult};

const INDENT: &[u8] = b"    ";

pub fn read_json<T: DeserializeOwned>(path: &Path) -> RegistryResult<T> {
    let bytes = fs::read(path).map_err(|err| RegistryError::io(path, err))?;
    serde_json::from_slice(&bytes).map_err(|err| RegistryError::json(path, err))
}

/// Renders `value` with four-space indentation and no trailing newline.
pub fn to_pretty_bytes<T: Serialize + ?Sized>(value: &T, path: &Path) -> RegistryResult<Vec<u8>> {
    let mut buf = Vec::new();
    let mut ser =
        serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(INDENT));
    value
        .serialize(&mut ser)
        .map_err(|err| RegistryError::json(path, err))?;
    Ok(buf)
}

pub fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> RegistryResult<()> {
    let bytes = to_pretty_bytes(value, path)?;
    fs::write(path, bytes).map_err(|err| RegistryError::io(path, err))
}
