use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use super::{ProductCatalog, QuoteProduct};

/// Errors raised while hydrating a catalog from a CSV export.
#[derive(Debug, thiserror::Error)]
pub enum CatalogImportError {
    #[error("failed to read catalog export: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid catalog CSV data: {0}")]
    Csv(#[from] csv::Error),
    #[error("unknown product slug '{0}'")]
    UnknownProduct(String),
    #[error("row for {product}/{field} is missing an option value")]
    EmptyOption { product: String, field: String },
}

/// Extends the standard vocabularies from a `Product,Field,Option` CSV
/// export, one option per row.
pub struct CatalogImporter;

impl CatalogImporter {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<ProductCatalog, CatalogImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<ProductCatalog, CatalogImportError> {
        let mut catalog = ProductCatalog::standard();
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        for row in csv_reader.deserialize::<VocabularyRow>() {
            let row = row?;
            let product = QuoteProduct::from_slug(&row.product)
                .ok_or_else(|| CatalogImportError::UnknownProduct(row.product.clone()))?;

            if row.option.is_empty() {
                return Err(CatalogImportError::EmptyOption {
                    product: row.product,
                    field: row.field,
                });
            }

            catalog.push_option(product, &row.field, row.option);
        }

        Ok(catalog)
    }
}

#[derive(Debug, Deserialize)]
struct VocabularyRow {
    #[serde(rename = "Product")]
    product: String,
    #[serde(rename = "Field")]
    field: String,
    #[serde(rename = "Option")]
    option: String,
}
