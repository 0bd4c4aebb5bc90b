use std::{
    fs::{create_dir_all, File},
    path::Path,
};

use serde::Serialize;

pub mod log_refresh;

pub fn dump_json<T>(path: impl AsRef<Path>, value: &T) -> anyhow::Result<()>
where
    T: ?Sized + Serialize,
{
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        create_dir_all(parent)?;
    }

    let file = File::create(path)?;
    serde_json::to_writer_pretty(file, value)?;
    Ok(())
}
