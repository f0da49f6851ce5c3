use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::path::Path;

use bincode;
use bincode::Options;

use crate::error::Result;

fn options() -> impl Options {
    bincode::DefaultOptions::new().with_no_limit()
}

pub fn serialize_bytes<T: Serialize>(data: &T) -> Result<Vec<u8>> {
    Ok(options().serialize(data)?)
}

pub fn deserialize_bytes<T: DeserializeOwned>(bytes: &[u8]) -> Result<T> {
    Ok(options().deserialize(bytes)?)
}

pub fn save_to_disk<T: Serialize, TPath: AsRef<Path>>(data: &T, path: TPath) -> Result<()> {
    // Write all bytes to the target file
    fs::write(path, serialize_bytes(data)?)?;
    Ok(())
}

pub fn load_from_disk<T: DeserializeOwned, TPath: AsRef<Path>>(path: TPath) -> Result<T> {
    deserialize_bytes(&fs::read(path)?)
}
