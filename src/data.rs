// src/data.rs

use crate::error::CatalogError;
use crate::model::{Catalog, Chapter};

/// Carga y valida el banco de preguntas desde el YAML embebido
pub fn read_catalog_embedded() -> Result<Catalog, CatalogError> {
    let file_content = include_str!("data/catalog.yaml");
    parse_catalog(file_content)
}

pub fn parse_catalog(yaml: &str) -> Result<Catalog, CatalogError> {
    let chapters: Vec<Chapter> = serde_yaml::from_str(yaml)?;
    let catalog = Catalog::new(chapters)?;
    log::debug!(
        "Catálogo cargado: {} capítulos, {} preguntas",
        catalog.chapters().len(),
        catalog.question_count()
    );
    Ok(catalog)
}
