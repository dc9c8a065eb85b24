//! DynamoDB error mapping.
//!
//! Every SDK failure collapses into a single [`StoreError`] carrying the
//! provider's message.

use std::fmt::Debug;

use aws_sdk_dynamodb::error::{DisplayErrorContext, ProvideErrorMetadata, SdkError};

use crate::store::{StoreError, Table};

/// Map any SDK error for `operation` on `table` to a [`StoreError`].
pub fn map_sdk_error<E, R>(operation: &'static str, table: Table, err: SdkError<E, R>) -> StoreError
where
    E: ProvideErrorMetadata + std::error::Error + Send + Sync + 'static,
    R: Debug + Send + Sync + 'static,
{
    let detail = match err.message() {
        Some(message) => message.to_string(),
        None => DisplayErrorContext(&err).to_string(),
    };

    StoreError::new(format!("{} on {} failed: {}", operation, table, detail))
}
