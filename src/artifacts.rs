//! Typed read/write contracts for the files handed between stages.
//!
//! Categories travel as CSV (`Country,Link`), recipe references and enriched
//! chunks as pretty-printed JSON arrays.

use crate::error::Result;
use crate::results::{CategoryEntry, RecipeDetail, RecipeRef};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::ser::PrettyFormatter;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

/// Write the category table with its `Country,Link` header
pub fn write_categories(path: &Path, categories: &[CategoryEntry]) -> Result<()> {
    ensure_parent(path)?;
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(path)?;

    // Written explicitly so an empty table still carries its header
    writer.write_record(["Country", "Link"])?;
    for entry in categories {
        writer.serialize(entry)?;
    }
    writer.flush()?;

    ::log::debug!("Wrote {} categories to {}", categories.len(), path.display());
    Ok(())
}

pub fn read_categories(path: &Path) -> Result<Vec<CategoryEntry>> {
    let mut reader = csv::ReaderBuilder::new().from_path(path)?;
    let mut categories = Vec::new();
    for row in reader.deserialize() {
        categories.push(row?);
    }
    Ok(categories)
}

pub fn write_recipe_refs(path: &Path, recipes: &[RecipeRef]) -> Result<()> {
    write_json(path, recipes)
}

pub fn read_recipe_refs(path: &Path) -> Result<Vec<RecipeRef>> {
    read_json(path)
}

pub fn write_chunk(path: &Path, details: &[RecipeDetail]) -> Result<()> {
    write_json(path, details)
}

pub fn read_chunk(path: &Path) -> Result<Vec<RecipeDetail>> {
    read_json(path)
}

fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    ensure_parent(path)?;
    let mut writer = BufWriter::new(File::create(path)?);
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut writer, PrettyFormatter::with_indent(b"    "));
    value.serialize(&mut serializer)?;
    writer.flush()?;
    Ok(())
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let reader = BufReader::new(File::open(path)?);
    Ok(serde_json::from_reader(reader)?)
}

fn ensure_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}
