//! The catalog source contract.

use std::sync::Arc;

use async_trait::async_trait;
use handloom_commerce::catalog::Product;

use crate::error::CatalogError;

/// Supplies the product catalog asynchronously.
///
/// One operation, no arguments. Implementations may hit the network; the
/// store only ever sees the resolved product list or a [`CatalogError`].
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Fetch the full, ordered catalog.
    async fn fetch_products(&self) -> Result<Vec<Product>, CatalogError>;

    /// Name used in logs.
    fn name(&self) -> &str {
        "catalog"
    }
}

#[async_trait]
impl<S: CatalogSource + ?Sized> CatalogSource for Arc<S> {
    async fn fetch_products(&self) -> Result<Vec<Product>, CatalogError> {
        (**self).fetch_products().await
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

/// Decode and validate a JSON product list.
pub fn decode_products(bytes: &[u8]) -> Result<Vec<Product>, CatalogError> {
    let products: Vec<Product> = serde_json::from_slice(bytes)?;
    for product in &products {
        product.validate()?;
    }
    Ok(products)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_products() {
        let json = br#"[
            {"id":"1","name":"Saree","category":"SAREES","price":12500,
             "originalPrice":15000,"image":"/s.jpg","rating":4.5,"reviews":124,"handmade":true}
        ]"#;
        let products = decode_products(json).unwrap();
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].id.as_str(), "1");
    }

    #[test]
    fn test_decode_rejects_malformed_payload() {
        let result = decode_products(b"{\"not\":\"a list\"}");
        assert!(matches!(result, Err(CatalogError::Decode(_))));
    }

    #[test]
    fn test_decode_rejects_invalid_rating() {
        let json = br#"[
            {"id":"1","name":"Saree","category":"SAREES","price":1,
             "image":"","rating":7.0,"reviews":0,"handmade":false}
        ]"#;
        let result = decode_products(json);
        assert!(matches!(result, Err(CatalogError::Invalid(_))));
    }
}
