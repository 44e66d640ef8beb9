//! The append-only invoice log.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs::OpenOptions;
use tokio::io::AsyncWriteExt;
use tracing::{error, info};

use super::{InvoiceError, InvoiceRecord};
use crate::framework::ActorService;

/// Appends rendered invoices to a text file.
///
/// The file is opened per record and closed before the reply is sent, on
/// success and on failure alike.
#[derive(Debug, Clone, PartialEq)]
pub struct InvoiceLog {
    path: PathBuf,
}

impl InvoiceLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Appends one record. Returns the number of bytes written.
    pub async fn append(&self, record: &InvoiceRecord) -> Result<usize, InvoiceError> {
        let text = record.render();

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await
            .map_err(|source| {
                error!(path = %self.path.display(), error = %source, "Failed to open invoice log");
                InvoiceError::Open {
                    path: self.path.clone(),
                    source,
                }
            })?;

        let written = match file.write_all(text.as_bytes()).await {
            Ok(()) => file.flush().await,
            Err(e) => Err(e),
        };

        written.map_err(|source| {
            error!(path = %self.path.display(), error = %source, "Failed to write invoice");
            InvoiceError::Write {
                path: self.path.clone(),
                source,
            }
        })?;

        info!(
            path = %self.path.display(),
            order_number = record.order_number(),
            bytes = text.len(),
            "Invoice appended"
        );
        Ok(text.len())
    }
}

#[async_trait]
impl ActorService for InvoiceLog {
    type Request = InvoiceRecord;
    type Reply = usize;
    type Error = InvoiceError;

    async fn handle(&mut self, record: InvoiceRecord) -> Result<usize, InvoiceError> {
        self.append(&record).await
    }
}
