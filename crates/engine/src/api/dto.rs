//! Request payloads for the REST surface.

use serde::Deserialize;
use uuid::Uuid;

#[derive(Debug, Deserialize)]
pub struct CreateFranchiseRequest {
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct UpdateNameRequest {
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct CreateBranchRequest {
    pub franchise_id: Uuid,
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct CreateProductRequest {
    pub branch_id: Uuid,
    pub name: String,
    pub stock: i32,
}

#[derive(Debug, Deserialize)]
pub struct UpdateStockRequest {
    pub stock: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_product_payload_parses() {
        let req: CreateProductRequest = serde_json::from_value(serde_json::json!({
            "branch_id": "67e55044-10b1-426f-9247-bb680e5fe0c8",
            "name": "Espresso",
            "stock": 10,
        }))
        .expect("valid payload");
        assert_eq!(req.name, "Espresso");
        assert_eq!(req.stock, 10);
    }

    #[test]
    fn malformed_branch_id_is_rejected_at_decode_time() {
        let result = serde_json::from_value::<CreateBranchRequest>(serde_json::json!({
            "franchise_id": "not-a-uuid",
            "name": "Downtown",
        }));
        assert!(result.is_err());
    }
}
