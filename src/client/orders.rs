use uuid::Uuid;
use validator::Validate;

use crate::client::{ApiClient, ClientResult, ListData};
use crate::dto::orders::{AssignDriverRequest, PlaceOrderRequest, UpdateOrderStatusRequest};
use crate::models::Order;

/// Admin order screen state. Mutations patch the loaded list in place
/// after the server confirms; on failure the list is left unchanged.
pub struct OrderStore {
    client: ApiClient,
    pub orders: Vec<Order>,
}

impl OrderStore {
    pub fn new(client: ApiClient) -> Self {
        Self {
            client,
            orders: Vec::new(),
        }
    }

    pub async fn refresh(&mut self) -> ClientResult<()> {
        let data: ListData<Order> = self.client.get("/api/admin/orders").await?;
        self.orders = data.items;
        Ok(())
    }

    /// Checkout. Field rules run before any request is issued.
    pub async fn place(&mut self, request: PlaceOrderRequest) -> ClientResult<Order> {
        request.validate()?;
        let order: Order = self.client.post("/api/orders", &request).await?;
        self.orders.push(order.clone());
        Ok(order)
    }

    pub async fn update_status(&mut self, id: Uuid, status: String) -> ClientResult<Order> {
        let request = UpdateOrderStatusRequest { status };
        request.validate()?;
        let order: Order = self
            .client
            .patch(&format!("/api/admin/orders/{id}/status"), &request)
            .await?;
        self.replace(order.clone());
        Ok(order)
    }

    pub async fn assign_driver(&mut self, id: Uuid, driver_id: Uuid) -> ClientResult<Order> {
        let request = AssignDriverRequest { driver_id };
        let order: Order = self
            .client
            .patch(&format!("/api/admin/orders/{id}/driver"), &request)
            .await?;
        self.replace(order.clone());
        Ok(order)
    }

    pub async fn delete(&mut self, id: Uuid) -> ClientResult<()> {
        let _: serde_json::Value = self
            .client
            .delete(&format!("/api/admin/orders/{id}"))
            .await?;
        self.orders.retain(|order| order.id != id);
        Ok(())
    }

    fn replace(&mut self, updated: Order) {
        if let Some(existing) = self.orders.iter_mut().find(|o| o.id == updated.id) {
            *existing = updated;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::ClientError;

    fn store() -> OrderStore {
        // Unroutable address: any request that does get issued fails as a
        // network error, so a Validation error proves nothing was sent.
        OrderStore::new(ApiClient::new("http://127.0.0.1:1"))
    }

    #[tokio::test]
    async fn place_rejects_bad_address_before_any_request() {
        let mut store = store();
        let result = store
            .place(PlaceOrderRequest {
                name: "John Doe".into(),
                address: "Main Street".into(),
                mobile: "0771234567".into(),
                total_amount: 1500,
                items: vec!["Rice and Curry".into()],
            })
            .await;
        assert!(matches!(result, Err(ClientError::Validation(_))));
        assert!(store.orders.is_empty());
    }

    #[tokio::test]
    async fn place_rejects_empty_items() {
        let mut store = store();
        let result = store
            .place(PlaceOrderRequest {
                name: "John Doe".into(),
                address: "12, Main Street, Springfield".into(),
                mobile: "0771234567".into(),
                total_amount: 1500,
                items: vec![],
            })
            .await;
        assert!(matches!(result, Err(ClientError::Validation(_))));
    }

    #[tokio::test]
    async fn update_status_rejects_unknown_status() {
        let mut store = store();
        let result = store
            .update_status(Uuid::new_v4(), "paid".into())
            .await;
        assert!(matches!(result, Err(ClientError::Validation(_))));
    }
}
