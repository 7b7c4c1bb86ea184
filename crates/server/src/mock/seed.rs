//! Fixture data for the mock store.
//!
//! A small, realistic catalog so the dashboard renders something useful while
//! the database is unreachable. Orders reference the seeded products by name.

use chrono::{Duration, Utc};
use rust_decimal::Decimal;

use storeroom_core::{OrderId, OrderStatus, PaymentMethod, ProductId};

use crate::models::{Customer, Order, OrderItem, Product};

fn product(
    id: &str,
    name: &str,
    description: &str,
    price: i64,
    stock: i32,
    category: &str,
    image: &str,
) -> Product {
    let now = Utc::now();
    Product {
        id: ProductId::new(id),
        name: name.to_owned(),
        description: description.to_owned(),
        price: Decimal::from(price),
        stock,
        category: category.to_owned(),
        images: vec![image.to_owned()],
        created_at: now,
        updated_at: now,
    }
}

/// The seeded product catalog, most recent first.
pub fn products() -> Vec<Product> {
    vec![
        product(
            "prd-001",
            "Nike Air Max 270",
            "Premium sports shoes with maximum cushioning and style.",
            12_900,
            15,
            "Footwear",
            "https://images.unsplash.com/photo-1542291026-7eec264c27ff",
        ),
        product(
            "prd-002",
            "Apple Watch Series 9",
            "The ultimate device for a healthy life is now even more powerful.",
            45_900,
            8,
            "Wearables",
            "https://images.unsplash.com/photo-1546868871-70c122469d8b",
        ),
        product(
            "prd-003",
            "ASUS VivoBook 15",
            "Powerful and stylish laptop for everyday computing.",
            107_190,
            5,
            "Computer and Accessories",
            "https://images.unsplash.com/photo-1593642702821-c8da6771f0c6",
        ),
        product(
            "prd-004",
            "Bose Smart Speaker 500",
            "Fill any room with wall-to-wall stereo sound.",
            44_900,
            12,
            "Smart Home and Gadgets",
            "https://images.unsplash.com/photo-1589003077984-894e133dabab",
        ),
        product(
            "prd-005",
            "Logitech G502 Hero",
            "High performance wired gaming mouse with 25K DPI sensor.",
            5_495,
            25,
            "Computer and Accessories",
            "https://images.unsplash.com/photo-1527443224154-c4a3942d3acf",
        ),
    ]
}

struct OrderSeed<'a> {
    id: &'a str,
    number: &'a str,
    customer_name: &'a str,
    customer_email: &'a str,
    avatar: &'a str,
    items: Vec<(&'a str, u32, i64)>,
    total: i64,
    status: OrderStatus,
    payment: PaymentMethod,
    days_ago: i64,
}

fn order(seed: OrderSeed<'_>) -> Order {
    let created = Utc::now() - Duration::days(seed.days_ago);
    Order {
        id: OrderId::new(seed.id),
        order_number: seed.number.to_owned(),
        customer: Customer {
            name: seed.customer_name.to_owned(),
            email: seed.customer_email.to_owned(),
            avatar: Some(seed.avatar.to_owned()),
        },
        items: seed
            .items
            .into_iter()
            .map(|(name, quantity, price)| OrderItem {
                product_id: None,
                name: name.to_owned(),
                quantity,
                price: Decimal::from(price),
            })
            .collect(),
        total_amount: Decimal::from(seed.total),
        status: seed.status,
        payment_method: Some(seed.payment),
        shipping_address: None,
        created_at: created,
        updated_at: created,
    }
}

/// The seeded order history, most recent first.
pub fn orders() -> Vec<Order> {
    vec![
        order(OrderSeed {
            id: "ord-001",
            number: "ORD-1767757582476-925",
            customer_name: "Anjali Mehra",
            customer_email: "anjali.mehra@example.com",
            avatar: "https://i.pravatar.cc/100?img=1",
            items: vec![("Nike Air Max 270", 1, 12_900)],
            total: 12_989,
            status: OrderStatus::Completed,
            payment: PaymentMethod::Upi,
            days_ago: 0,
        }),
        order(OrderSeed {
            id: "ord-002",
            number: "ORD-1767756912579-706",
            customer_name: "Riya Jain",
            customer_email: "riya.jain@example.com",
            avatar: "https://i.pravatar.cc/100?img=5",
            items: vec![
                ("Apple Watch Series 9", 1, 45_900),
                ("Logitech G502 Hero", 1, 5_495),
            ],
            total: 13_389,
            status: OrderStatus::Cancelled,
            payment: PaymentMethod::CreditCard,
            days_ago: 0,
        }),
        order(OrderSeed {
            id: "ord-003",
            number: "ORD-1767754951538-266",
            customer_name: "Nina Malik",
            customer_email: "nina.malik@example.com",
            avatar: "https://i.pravatar.cc/100?img=9",
            items: vec![
                ("ASUS VivoBook 15", 1, 107_190),
                ("Logitech G502 Hero", 2, 5_495),
            ],
            total: 126_400,
            status: OrderStatus::Completed,
            payment: PaymentMethod::NetBanking,
            days_ago: 0,
        }),
        order(OrderSeed {
            id: "ord-004",
            number: "ORD-1767754783910-959",
            customer_name: "Meher Gupta",
            customer_email: "meher.gupta@example.com",
            avatar: "https://i.pravatar.cc/100?img=16",
            items: vec![("Bose Smart Speaker 500", 2, 44_900)],
            total: 89_800,
            status: OrderStatus::Completed,
            payment: PaymentMethod::Upi,
            days_ago: 0,
        }),
        order(OrderSeed {
            id: "ord-005",
            number: "ORD-1767683986849-106",
            customer_name: "Vikram Nair",
            customer_email: "vikram.nair@example.com",
            avatar: "https://i.pravatar.cc/100?img=12",
            items: vec![
                ("Nike Air Max 270", 2, 12_900),
                ("Apple Watch Series 9", 1, 45_900),
            ],
            total: 71_700,
            status: OrderStatus::Completed,
            payment: PaymentMethod::DebitCard,
            days_ago: 1,
        }),
        order(OrderSeed {
            id: "ord-006",
            number: "ORD-1767682156234-442",
            customer_name: "Priya Sharma",
            customer_email: "priya.sharma@example.com",
            avatar: "https://i.pravatar.cc/100?img=24",
            items: vec![("Bose Smart Speaker 500", 1, 44_900)],
            total: 44_900,
            status: OrderStatus::Shipped,
            payment: PaymentMethod::CreditCard,
            days_ago: 1,
        }),
        order(OrderSeed {
            id: "ord-007",
            number: "ORD-1767598234567-123",
            customer_name: "Arjun Patel",
            customer_email: "arjun.patel@example.com",
            avatar: "https://i.pravatar.cc/100?img=33",
            items: vec![("ASUS VivoBook 15", 1, 107_190)],
            total: 107_190,
            status: OrderStatus::Processing,
            payment: PaymentMethod::Upi,
            days_ago: 2,
        }),
        order(OrderSeed {
            id: "ord-008",
            number: "ORD-1767512345678-890",
            customer_name: "Kavya Reddy",
            customer_email: "kavya.reddy@example.com",
            avatar: "https://i.pravatar.cc/100?img=47",
            items: vec![("Logitech G502 Hero", 3, 5_495)],
            total: 16_485,
            status: OrderStatus::Delivered,
            payment: PaymentMethod::CashOnDelivery,
            days_ago: 3,
        }),
    ]
}
