use uuid::Uuid;
use validator::Validate;

use crate::client::{ApiClient, ClientError, ClientResult, ListData};
use crate::dto::suppliers::SaveSupplierRequest;
use crate::models::Supplier;

/// Supplier admin screen state, same contract as the driver store.
pub struct SupplierStore {
    client: ApiClient,
    pub suppliers: Vec<Supplier>,
}

impl SupplierStore {
    pub fn new(client: ApiClient) -> Self {
        Self {
            client,
            suppliers: Vec::new(),
        }
    }

    pub async fn refresh(&mut self) -> ClientResult<()> {
        let data: ListData<Supplier> = self.client.get("/api/admin/suppliers").await?;
        self.suppliers = data.items;
        Ok(())
    }

    pub async fn add(&mut self, request: SaveSupplierRequest) -> ClientResult<Supplier> {
        request.validate()?;
        if self.name_taken(&request.name, None) {
            return Err(ClientError::DuplicateName(request.name));
        }
        let supplier: Supplier = self.client.post("/api/admin/suppliers", &request).await?;
        self.suppliers.push(supplier.clone());
        Ok(supplier)
    }

    pub async fn update(&mut self, id: Uuid, request: SaveSupplierRequest) -> ClientResult<Supplier> {
        request.validate()?;
        if self.name_taken(&request.name, Some(id)) {
            return Err(ClientError::DuplicateName(request.name));
        }
        let supplier: Supplier = self
            .client
            .put(&format!("/api/admin/suppliers/{id}"), &request)
            .await?;
        if let Some(existing) = self.suppliers.iter_mut().find(|s| s.id == supplier.id) {
            *existing = supplier.clone();
        }
        Ok(supplier)
    }

    pub async fn delete(&mut self, id: Uuid) -> ClientResult<()> {
        let _: serde_json::Value = self
            .client
            .delete(&format!("/api/admin/suppliers/{id}"))
            .await?;
        self.suppliers.retain(|supplier| supplier.id != id);
        Ok(())
    }

    fn name_taken(&self, name: &str, exclude: Option<Uuid>) -> bool {
        self.suppliers.iter().any(|supplier| {
            supplier.name.eq_ignore_ascii_case(name) && Some(supplier.id) != exclude
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(name: &str) -> SaveSupplierRequest {
        SaveSupplierRequest {
            name: name.into(),
            address: "3, Market Lane, Colombo".into(),
            mobile: "0771234601".into(),
            item_id: "ITM-001".into(),
            email: "sales@freshfarms.lk".into(),
            company: "Fresh Farms Ltd".into(),
        }
    }

    fn store() -> SupplierStore {
        SupplierStore::new(ApiClient::new("http://127.0.0.1:1"))
    }

    #[tokio::test]
    async fn add_rejects_email_without_leading_letter() {
        let mut store = store();
        let mut bad = request("Fresh Farms");
        bad.email = "@domain.com".into();
        let result = store.add(bad).await;
        assert!(matches!(result, Err(ClientError::Validation(_))));
    }

    #[tokio::test]
    async fn add_rejects_bad_mobile() {
        let mut store = store();
        let mut bad = request("Fresh Farms");
        bad.mobile = "123456789".into();
        let result = store.add(bad).await;
        assert!(matches!(result, Err(ClientError::Validation(_))));
        assert!(store.suppliers.is_empty());
    }
}
