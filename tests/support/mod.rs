// Shared across the test binaries; not every binary uses every helper.
#![allow(dead_code)]

use bookstall::{Book, BookId, Category, ContactInfo, ShippingInfo};

pub fn book(id: u32, title: &str, price: f64) -> Book {
    Book {
        id: BookId::new(id),
        title: title.to_string(),
        author: "Test Author".to_string(),
        category: Category::Fiction,
        price,
        description: String::new(),
        cover: "📕".to_string(),
        featured: false,
        rating: 4.0,
    }
}

pub fn contact() -> ContactInfo {
    ContactInfo {
        first_name: "Avery".to_string(),
        last_name: "Quill".to_string(),
        email: "avery@example.com".to_string(),
        phone: Some("555-0100".to_string()),
    }
}

pub fn shipping() -> ShippingInfo {
    ShippingInfo {
        address: "7 Chapter Lane".to_string(),
        apartment: Some("2B".to_string()),
        city: "Portland".to_string(),
        state: "OR".to_string(),
        zip: "97201".to_string(),
        country: "United States".to_string(),
    }
}
