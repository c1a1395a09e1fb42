use crate::store::StoreError;

/// Failure of a catalog operation.
///
/// Every backend failure collapses into [`CatalogError::Remote`]; callers get
/// a single "remote operation failed" signal and the underlying
/// [`StoreError`] for logging.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Remote operation failed: {0}")]
    Remote(#[from] StoreError),
}
