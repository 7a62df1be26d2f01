//! Product use cases.

use std::sync::Arc;

use franchise_domain::{
    validate_stock, BranchId, DomainError, FranchiseId, NewProduct, Product, ProductId,
    TopStockProduct,
};
use tracing::{debug, info};

use crate::infrastructure::ports::{BranchRepo, FranchiseRepo, ProductRepo};

/// Container for product use cases.
pub struct ProductUseCases {
    pub create: CreateProduct,
    pub rename: UpdateProductName,
    pub restock: UpdateProductStock,
    pub delete: DeleteProduct,
    pub top_stock_by_franchise: GetTopStockByFranchise,
}

impl ProductUseCases {
    pub fn new(
        products: Arc<dyn ProductRepo>,
        branches: Arc<dyn BranchRepo>,
        franchises: Arc<dyn FranchiseRepo>,
    ) -> Self {
        Self {
            create: CreateProduct::new(products.clone(), branches),
            rename: UpdateProductName::new(products.clone()),
            restock: UpdateProductStock::new(products.clone()),
            delete: DeleteProduct::new(products.clone()),
            top_stock_by_franchise: GetTopStockByFranchise::new(products, franchises),
        }
    }
}

/// Create a product under an existing branch.
///
/// Product names are unique across all products, not per branch. A
/// negative initial stock is an invalid argument, not a conflict, and
/// never reaches storage.
pub struct CreateProduct {
    products: Arc<dyn ProductRepo>,
    branches: Arc<dyn BranchRepo>,
}

impl CreateProduct {
    pub fn new(products: Arc<dyn ProductRepo>, branches: Arc<dyn BranchRepo>) -> Self {
        Self { products, branches }
    }

    pub async fn execute(
        &self,
        branch_id: BranchId,
        name: &str,
        stock: i32,
    ) -> Result<Product, DomainError> {
        self.branches
            .find_by_id(branch_id)
            .await?
            .ok_or_else(|| DomainError::not_found(format!("branch not found: {branch_id}")))?;

        if self.products.find_by_name(name).await?.is_some() {
            return Err(DomainError::conflict(format!(
                "product name '{name}' already exists"
            )));
        }

        validate_stock(stock)?;

        let product = self
            .products
            .save(&NewProduct::new(branch_id, name, stock))
            .await?;
        info!(product_id = %product.id, branch_id = %branch_id, "Created product: {}", product.name);
        Ok(product)
    }
}

/// Rename a product, with the same three-way policy as franchises.
pub struct UpdateProductName {
    products: Arc<dyn ProductRepo>,
}

impl UpdateProductName {
    pub fn new(products: Arc<dyn ProductRepo>) -> Self {
        Self { products }
    }

    pub async fn execute(&self, id: ProductId, new_name: &str) -> Result<Product, DomainError> {
        self.products
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found(format!("product not found: {id}")))?;

        if let Some(holder) = self.products.find_by_name(new_name).await? {
            if holder.id != id {
                return Err(DomainError::conflict(format!(
                    "product name '{new_name}' is already in use"
                )));
            }
            return Err(DomainError::conflict(format!(
                "product name '{new_name}' is already assigned to this product"
            )));
        }

        let renamed = self
            .products
            .update_name(id, new_name)
            .await?
            .ok_or_else(|| DomainError::not_found(format!("product not found: {id}")))?;
        info!(product_id = %id, "Renamed product to: {new_name}");
        Ok(renamed)
    }
}

/// Overwrite a product's stock. Negative values never reach storage.
pub struct UpdateProductStock {
    products: Arc<dyn ProductRepo>,
}

impl UpdateProductStock {
    pub fn new(products: Arc<dyn ProductRepo>) -> Self {
        Self { products }
    }

    pub async fn execute(&self, id: ProductId, new_stock: i32) -> Result<Product, DomainError> {
        self.products
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found(format!("product not found: {id}")))?;

        validate_stock(new_stock)?;

        let updated = self
            .products
            .update_stock(id, new_stock)
            .await?
            .ok_or_else(|| DomainError::not_found(format!("product not found: {id}")))?;
        info!(product_id = %id, "Updated product stock to: {new_stock}");
        Ok(updated)
    }
}

/// Delete a product; success carries no payload.
pub struct DeleteProduct {
    products: Arc<dyn ProductRepo>,
}

impl DeleteProduct {
    pub fn new(products: Arc<dyn ProductRepo>) -> Self {
        Self { products }
    }

    pub async fn execute(&self, id: ProductId) -> Result<(), DomainError> {
        self.products
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found(format!("product not found: {id}")))?;

        self.products.delete_by_id(id).await?;
        info!(product_id = %id, "Deleted product");
        Ok(())
    }
}

/// Per-branch highest-stock rows for one franchise.
///
/// The aggregation lives in storage; this use case only gates on the
/// franchise existing.
pub struct GetTopStockByFranchise {
    products: Arc<dyn ProductRepo>,
    franchises: Arc<dyn FranchiseRepo>,
}

impl GetTopStockByFranchise {
    pub fn new(products: Arc<dyn ProductRepo>, franchises: Arc<dyn FranchiseRepo>) -> Self {
        Self {
            products,
            franchises,
        }
    }

    pub async fn execute(
        &self,
        franchise_id: FranchiseId,
    ) -> Result<Vec<TopStockProduct>, DomainError> {
        self.franchises
            .find_by_id(franchise_id)
            .await?
            .ok_or_else(|| {
                DomainError::not_found(format!("franchise not found: {franchise_id}"))
            })?;

        debug!(franchise_id = %franchise_id, "Computing top-stock products");
        Ok(self
            .products
            .find_top_stock_by_franchise(franchise_id)
            .await?)
    }
}
