use weathernow_core::{AppError, StorageError};
use weathernow_store::StorageError as StoreError;

use super::IntoAppError;

impl IntoAppError for StoreError {
    fn into_app_error(self) -> AppError {
        let key = self.key().to_string();
        match self {
            StoreError::Io { source, .. } => AppError::Storage(StorageError::Unavailable {
                key,
                message: source.to_string(),
            }),
            StoreError::Serialize { source, .. } => AppError::Storage(StorageError::Encoding {
                key,
                message: source.to_string(),
            }),
        }
    }
}
