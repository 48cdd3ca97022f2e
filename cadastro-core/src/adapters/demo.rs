//! Demo customer API
//!
//! Keeps the collection in memory and assigns UUID ids on create. Used in
//! demo mode so the form can be tried without a running API server.

use std::sync::Mutex;

use async_trait::async_trait;
use tracing::debug;
use uuid::Uuid;

use crate::domain::result::{Error, Result};
use crate::domain::{Customer, NewCustomer};
use crate::ports::CustomerApi;

/// Generate demo customers
pub fn generate_demo_customers() -> Vec<Customer> {
    vec![
        Customer::new(
            "11111111-1111-1111-1111-111111111111",
            "Ana Souza",
            "ana.souza@example.com",
            "11987654321",
            "São Paulo",
        ),
        Customer::new(
            "22222222-2222-2222-2222-222222222222",
            "Bruno Lima",
            "bruno.lima@example.com",
            "21998765432",
            "Rio de Janeiro",
        ),
        Customer::new(
            "33333333-3333-3333-3333-333333333333",
            "Carla Mendes",
            "carla.mendes@example.com",
            "31976543210",
            "Belo Horizonte",
        ),
    ]
}

/// In-memory customer API
pub struct DemoCustomerApi {
    customers: Mutex<Vec<Customer>>,
}

impl DemoCustomerApi {
    /// Demo API seeded with sample customers
    pub fn new() -> Self {
        Self::with_customers(generate_demo_customers())
    }

    /// Demo API holding exactly `customers`
    pub fn with_customers(customers: Vec<Customer>) -> Self {
        Self {
            customers: Mutex::new(customers),
        }
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, Vec<Customer>>> {
        self.customers
            .lock()
            .map_err(|_| Error::Other("demo store poisoned".to_string()))
    }
}

impl Default for DemoCustomerApi {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CustomerApi for DemoCustomerApi {
    fn name(&self) -> &str {
        "demo"
    }

    async fn list(&self) -> Result<Vec<Customer>> {
        Ok(self.lock()?.clone())
    }

    async fn create(&self, customer: &NewCustomer) -> Result<Customer> {
        let created = Customer::from_new(Uuid::new_v4().to_string(), customer.clone());
        debug!(id = %created.id, "demo create");
        self.lock()?.push(created.clone());
        Ok(created)
    }

    async fn update(&self, customer: &Customer) -> Result<()> {
        let mut customers = self.lock()?;
        let existing = customers
            .iter_mut()
            .find(|c| c.id == customer.id)
            .ok_or_else(|| Error::not_found(format!("customer {}", customer.id)))?;
        *existing = customer.clone();
        existing.deleted = false;
        Ok(())
    }
}
