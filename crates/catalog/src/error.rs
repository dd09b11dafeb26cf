use redb::{CommitError, DatabaseError, StorageError, TableError, TransactionError};

#[derive(Debug)]
pub enum CatalogError {
    NotFound(&'static str),
    Validation { field: String, message: String },
    IndexInconsistency(String),
    Io(std::io::Error),
    Storage(redb::Error),
    Encoding(Box<bincode::ErrorKind>),
    KeyParse(String),
}

impl CatalogError {
    pub fn validation(field: &str, message: impl Into<String>) -> Self {
        CatalogError::Validation {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for CatalogError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CatalogError::NotFound(entity) => write!(f, "{} not found", entity),
            CatalogError::Validation { field, message } => {
                write!(f, "invalid {}: {}", field, message)
            }
            CatalogError::IndexInconsistency(detail) => {
                write!(f, "index inconsistency: {}", detail)
            }
            CatalogError::Io(err) => write!(f, "io error: {}", err),
            CatalogError::Storage(err) => write!(f, "storage error: {}", err),
            CatalogError::Encoding(err) => write!(f, "encoding error: {}", err),
            CatalogError::KeyParse(value) => write!(f, "key parse error: {}", value),
        }
    }
}

impl std::error::Error for CatalogError {}

impl From<std::io::Error> for CatalogError {
    fn from(err: std::io::Error) -> Self {
        CatalogError::Io(err)
    }
}

impl From<redb::Error> for CatalogError {
    fn from(err: redb::Error) -> Self {
        CatalogError::Storage(err)
    }
}

impl From<DatabaseError> for CatalogError {
    fn from(err: DatabaseError) -> Self {
        CatalogError::Storage(err.into())
    }
}

impl From<TableError> for CatalogError {
    fn from(err: TableError) -> Self {
        CatalogError::Storage(err.into())
    }
}

impl From<TransactionError> for CatalogError {
    fn from(err: TransactionError) -> Self {
        CatalogError::Storage(err.into())
    }
}

impl From<StorageError> for CatalogError {
    fn from(err: StorageError) -> Self {
        CatalogError::Storage(err.into())
    }
}

impl From<CommitError> for CatalogError {
    fn from(err: CommitError) -> Self {
        CatalogError::Storage(err.into())
    }
}

impl From<Box<bincode::ErrorKind>> for CatalogError {
    fn from(err: Box<bincode::ErrorKind>) -> Self {
        CatalogError::Encoding(err)
    }
}
