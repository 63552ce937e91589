//! The fixed storefront collection served by the mock source.

use handloom_commerce::catalog::{Category, Product};
use handloom_commerce::{Money, ProductId};

/// The three-product Handloom Heritage collection, in listing order.
pub fn handloom_collection() -> Vec<Product> {
    vec![
        Product {
            id: ProductId::new("1"),
            name: "Traditional Kanchipuram Silk Saree".to_string(),
            category: Category::new("SAREES"),
            price: Money::new(12500),
            original_price: Some(Money::new(15000)),
            image: "/images/saree-kanchipuram.jpg".to_string(),
            rating: 4.5,
            reviews: 124,
            handmade: true,
        },
        Product {
            id: ProductId::new("2"),
            name: "Traditional White Cotton Kurta".to_string(),
            category: Category::new("MEN'S KURTAS"),
            price: Money::new(3500),
            original_price: Some(Money::new(4200)),
            image: "/images/men-kurta-white.jpg".to_string(),
            rating: 5.0,
            reviews: 89,
            handmade: false,
        },
        Product {
            id: ProductId::new("3"),
            name: "Handwoven Silk Dupatta".to_string(),
            category: Category::new("DUPATTAS"),
            price: Money::new(2200),
            original_price: Some(Money::new(2800)),
            image: "/images/silk-dupatta.jpg".to_string(),
            rating: 4.2,
            reviews: 112,
            handmade: true,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collection_is_valid_and_ordered() {
        let products = handloom_collection();
        let ids: Vec<&str> = products.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3"]);
        assert!(products.iter().all(|p| p.validate().is_ok()));
    }
}
