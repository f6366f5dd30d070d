//! Typed calls for the sample employee CRUD feature.

use serde::{Deserialize, Serialize};

use crate::{Client, RequestConfig, Result};

#[cfg(test)]
mod tests;

pub const EMPLOYEES_PATH: &str = "/employees";

pub const DEFAULT_PAGE_LIMIT: usize = 10;

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Employee {
    pub id: String,
    pub name: String,
    pub image: String,
    pub age: u32,
    /// Decimal amount kept as text, e.g. `"1250.50"`.
    pub salary: String,
}

/// An employee that has not been stored yet and so has no id.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct NewEmployee {
    pub name: String,
    pub image: String,
    pub age: u32,
    pub salary: String,
}

impl NewEmployee {
    pub fn with_id(self, id: impl Into<String>) -> Employee {
        Employee {
            id: id.into(),
            name: self.name,
            image: self.image,
            age: self.age,
            salary: self.salary,
        }
    }
}

pub struct EmployeesApi<'a> {
    client: &'a Client,
}

impl<'a> EmployeesApi<'a> {
    pub fn new(client: &'a Client) -> EmployeesApi<'a> {
        EmployeesApi { client }
    }

    pub async fn list(&self) -> Result<Vec<Employee>> {
        self.client.get(EMPLOYEES_PATH, RequestConfig::default()).await
    }

    pub async fn create(&self, employee: &NewEmployee) -> Result<Employee> {
        self.client
            .post(EMPLOYEES_PATH, employee, RequestConfig::default())
            .await
    }

    pub async fn update(&self, employee: &Employee) -> Result<Employee> {
        self.client
            .put(EMPLOYEES_PATH, employee, RequestConfig::default())
            .await
    }

    pub async fn delete(&self, id: &str) -> Result<()> {
        let path = format!("{}/{}", EMPLOYEES_PATH, id);
        self.client
            .delete::<serde_json::Value>(&path, RequestConfig::default())
            .await?;
        Ok(())
    }
}

/// Pages needed to show `total` rows, `limit` at a time.
pub fn total_pages(total: usize, limit: usize) -> usize {
    if total == 0 || limit == 0 {
        return 0;
    }
    total.div_ceil(limit)
}
