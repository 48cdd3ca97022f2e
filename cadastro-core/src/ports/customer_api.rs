//! Customer API port - the remote clientes collection

use async_trait::async_trait;

use crate::domain::result::Result;
use crate::domain::{Customer, NewCustomer};

/// Remote customer collection
///
/// Implementations talk to the clientes resource (HTTP, demo data, test
/// fakes). There is no delete operation: deletion only hides records locally.
#[async_trait]
pub trait CustomerApi: Send + Sync {
    /// Short name of the backend (e.g., "http", "demo")
    fn name(&self) -> &str;

    /// Fetch the whole collection
    async fn list(&self) -> Result<Vec<Customer>>;

    /// Create a customer; returns the stored record with its assigned id
    async fn create(&self, customer: &NewCustomer) -> Result<Customer>;

    /// Replace the customer with `customer.id`
    async fn update(&self, customer: &Customer) -> Result<()>;
}
