use std::path::Path;

use serde::de::DeserializeOwned;

pub mod bin;
pub mod vehicle;
pub mod worker;

fn read_csv<T>(path: impl AsRef<Path>) -> anyhow::Result<Vec<T>>
where
    T: DeserializeOwned,
{
    let mut reader = csv::Reader::from_path(path)?;
    let records: csv::Result<Vec<T>> = reader.deserialize().collect();
    Ok(records?)
}
