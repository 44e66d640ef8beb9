use tracing::{debug, instrument};
use crate::framework::ServiceClient;
use crate::invoice_actor::{InvoiceError, InvoiceLog, InvoiceRecord};

/// Client for interacting with the invoice log actor.
#[derive(Clone)]
pub struct InvoiceClient {
    inner: ServiceClient<InvoiceLog>,
}

impl InvoiceClient {
    pub fn new(inner: ServiceClient<InvoiceLog>) -> Self {
        Self { inner }
    }

    /// Appends a record to the log. Returns the number of bytes written.
    #[instrument(skip(self, record), fields(order_number = record.order_number()))]
    pub async fn append(&self, record: InvoiceRecord) -> Result<usize, InvoiceError> {
        debug!(?record, "append called");
        self.inner.call(record).await
    }
}
