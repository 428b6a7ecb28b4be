use uuid::Uuid;
use validator::Validate;

use crate::client::{ApiClient, ClientError, ClientResult, ListData};
use crate::dto::deliveries::SaveDeliveryRequest;
use crate::models::Delivery;

/// Driver admin screen state. The name pre-check runs against the loaded
/// list; the store's unique index remains the source of truth when two
/// admins race.
pub struct DeliveryStore {
    client: ApiClient,
    pub deliveries: Vec<Delivery>,
}

impl DeliveryStore {
    pub fn new(client: ApiClient) -> Self {
        Self {
            client,
            deliveries: Vec::new(),
        }
    }

    pub async fn refresh(&mut self) -> ClientResult<()> {
        let data: ListData<Delivery> = self.client.get("/api/admin/deliveries").await?;
        self.deliveries = data.items;
        Ok(())
    }

    pub async fn add(&mut self, request: SaveDeliveryRequest) -> ClientResult<Delivery> {
        request.validate()?;
        if self.name_taken(&request.name, None) {
            return Err(ClientError::DuplicateName(request.name));
        }
        let delivery: Delivery = self.client.post("/api/admin/deliveries", &request).await?;
        self.deliveries.push(delivery.clone());
        Ok(delivery)
    }

    pub async fn update(&mut self, id: Uuid, request: SaveDeliveryRequest) -> ClientResult<Delivery> {
        request.validate()?;
        if self.name_taken(&request.name, Some(id)) {
            return Err(ClientError::DuplicateName(request.name));
        }
        let delivery: Delivery = self
            .client
            .put(&format!("/api/admin/deliveries/{id}"), &request)
            .await?;
        if let Some(existing) = self.deliveries.iter_mut().find(|d| d.id == delivery.id) {
            *existing = delivery.clone();
        }
        Ok(delivery)
    }

    pub async fn delete(&mut self, id: Uuid) -> ClientResult<()> {
        let _: serde_json::Value = self
            .client
            .delete(&format!("/api/admin/deliveries/{id}"))
            .await?;
        self.deliveries.retain(|delivery| delivery.id != id);
        Ok(())
    }

    fn name_taken(&self, name: &str, exclude: Option<Uuid>) -> bool {
        self.deliveries.iter().any(|delivery| {
            delivery.name.eq_ignore_ascii_case(name) && Some(delivery.id) != exclude
        })
    }
}
