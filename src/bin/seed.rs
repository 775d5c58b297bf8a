//! Catalog seeder
//!
//! Wipes the product table and re-imports the fixture catalog. Pass `-d` to
//! only delete.

use anyhow::Result;
use cucumber_commerce::domain::product::Category;
use rust_decimal::Decimal;
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use uuid::Uuid;

struct Fixture {
    name: &'static str,
    description: &'static str,
    price: i64,
    category: Category,
    sizes: &'static [&'static str],
    colors: &'static [&'static str],
    image: &'static str,
    stock: i32,
    rating: f64,
    num_reviews: i32,
    featured: bool,
}

const CATALOG: &[Fixture] = &[
    Fixture {
        name: "Floral Summer Dress",
        description: "Beautiful floral print dress perfect for summer occasions. Lightweight and comfortable fabric.",
        price: 1299,
        category: Category::Clothing,
        sizes: &["S", "M", "L", "XL"],
        colors: &["Blue", "Pink", "White"],
        image: "https://images.unsplash.com/photo-1595777457583-95e059d581b8?w=500",
        stock: 50,
        rating: 4.5,
        num_reviews: 24,
        featured: true,
    },
    Fixture {
        name: "Elegant Leather Handbag",
        description: "Stylish premium leather handbag for everyday use. Multiple compartments.",
        price: 2499,
        category: Category::Bags,
        sizes: &["Free Size"],
        colors: &["Black", "Brown", "Tan"],
        image: "https://images.unsplash.com/photo-1584917865442-de89df76afd3?w=500",
        stock: 30,
        rating: 4.7,
        num_reviews: 18,
        featured: true,
    },
    Fixture {
        name: "High Heel Sandals",
        description: "Comfortable and stylish high heel sandals. Perfect for parties and events.",
        price: 1899,
        category: Category::Footwear,
        sizes: &["5", "6", "7", "8", "9"],
        colors: &["Black", "Red", "Nude"],
        image: "https://images.unsplash.com/photo-1543163521-1bf539c55dd2?w=500",
        stock: 40,
        rating: 4.3,
        num_reviews: 31,
        featured: true,
    },
    Fixture {
        name: "Gold Plated Necklace",
        description: "Elegant gold plated necklace with premium finish. Hypoallergenic material.",
        price: 999,
        category: Category::Jewelry,
        sizes: &["Free Size"],
        colors: &["Gold"],
        image: "https://images.unsplash.com/photo-1599643478518-a784e5dc4c8f?w=500",
        stock: 25,
        rating: 4.8,
        num_reviews: 15,
        featured: true,
    },
    Fixture {
        name: "Designer Sunglasses",
        description: "Trendy UV protection sunglasses. Polarized lenses for eye protection.",
        price: 799,
        category: Category::Accessories,
        sizes: &["Free Size"],
        colors: &["Black", "Brown", "Pink"],
        image: "https://images.unsplash.com/photo-1511499767150-a48a237f0083?w=500",
        stock: 60,
        rating: 4.4,
        num_reviews: 22,
        featured: true,
    },
    Fixture {
        name: "Matte Lipstick Set",
        description: "Long-lasting matte lipstick in vibrant shades. Moisturizing formula.",
        price: 599,
        category: Category::Beauty,
        sizes: &["Free Size"],
        colors: &["Red", "Pink", "Nude", "Coral"],
        image: "https://images.unsplash.com/photo-1586495777744-4413f21062fa?w=500",
        stock: 100,
        rating: 4.6,
        num_reviews: 45,
        featured: false,
    },
    Fixture {
        name: "Casual Cotton T-Shirt",
        description: "Comfortable 100% cotton t-shirt for casual wear. Breathable fabric.",
        price: 499,
        category: Category::Clothing,
        sizes: &["XS", "S", "M", "L", "XL"],
        colors: &["White", "Black", "Grey", "Pink"],
        image: "https://images.unsplash.com/photo-1521572163474-6864f9cf17ab?w=500",
        stock: 80,
        rating: 4.2,
        num_reviews: 38,
        featured: false,
    },
    Fixture {
        name: "Designer Leather Wallet",
        description: "Compact leather wallet with multiple card slots. RFID protection.",
        price: 899,
        category: Category::Accessories,
        sizes: &["Free Size"],
        colors: &["Black", "Brown", "Red"],
        image: "https://images.unsplash.com/photo-1627123424574-724758594e93?w=500",
        stock: 45,
        rating: 4.5,
        num_reviews: 27,
        featured: false,
    },
    Fixture {
        name: "Silk Saree",
        description: "Traditional silk saree with beautiful embroidery work. Premium quality.",
        price: 3999,
        category: Category::Clothing,
        sizes: &["Free Size"],
        colors: &["Red", "Blue", "Green", "Pink"],
        image: "https://images.unsplash.com/photo-1610030469983-98e550d6193c?w=500",
        stock: 20,
        rating: 4.9,
        num_reviews: 52,
        featured: true,
    },
    Fixture {
        name: "Sneakers Sports Shoes",
        description: "Lightweight sports sneakers for running and gym. Excellent grip.",
        price: 1599,
        category: Category::Footwear,
        sizes: &["5", "6", "7", "8", "9", "10"],
        colors: &["White", "Black", "Pink"],
        image: "https://images.unsplash.com/photo-1549298916-b41d501d3772?w=500",
        stock: 55,
        rating: 4.4,
        num_reviews: 41,
        featured: false,
    },
    Fixture {
        name: "Pearl Earrings",
        description: "Classic pearl drop earrings. Perfect for formal occasions.",
        price: 1299,
        category: Category::Jewelry,
        sizes: &["Free Size"],
        colors: &["White", "Pink"],
        image: "https://images.unsplash.com/photo-1535632066927-ab7c9ab60908?w=500",
        stock: 35,
        rating: 4.6,
        num_reviews: 29,
        featured: false,
    },
    Fixture {
        name: "Denim Jacket",
        description: "Trendy denim jacket for casual styling. Multiple pockets.",
        price: 1799,
        category: Category::Clothing,
        sizes: &["S", "M", "L", "XL"],
        colors: &["Blue", "Black"],
        image: "https://images.unsplash.com/photo-1551028719-00167b16eac5?w=500",
        stock: 40,
        rating: 4.3,
        num_reviews: 33,
        featured: false,
    },
    Fixture {
        name: "Face Serum Vitamin C",
        description: "Brightening vitamin C face serum. Anti-aging formula.",
        price: 799,
        category: Category::Beauty,
        sizes: &["30ml", "50ml"],
        colors: &["Clear"],
        image: "https://images.unsplash.com/photo-1620916566398-39f1143ab7be?w=500",
        stock: 70,
        rating: 4.7,
        num_reviews: 58,
        featured: true,
    },
    Fixture {
        name: "Leather Belt",
        description: "Genuine leather belt with metal buckle. Adjustable size.",
        price: 599,
        category: Category::Accessories,
        sizes: &["S", "M", "L"],
        colors: &["Black", "Brown", "Tan"],
        image: "https://images.unsplash.com/photo-1624222247344-5537b6d27e8d?w=500",
        stock: 60,
        rating: 4.1,
        num_reviews: 19,
        featured: false,
    },
    Fixture {
        name: "Yoga Pants",
        description: "Stretchable yoga pants with high waist. Moisture-wicking fabric.",
        price: 899,
        category: Category::Clothing,
        sizes: &["S", "M", "L", "XL"],
        colors: &["Black", "Grey", "Navy"],
        image: "https://images.unsplash.com/photo-1506629082955-511b1aa562c8?w=500",
        stock: 65,
        rating: 4.5,
        num_reviews: 47,
        featured: false,
    },
    Fixture {
        name: "Crossbody Sling Bag",
        description: "Compact crossbody bag perfect for outings. Adjustable strap.",
        price: 1199,
        category: Category::Bags,
        sizes: &["Free Size"],
        colors: &["Black", "Red", "Beige"],
        image: "https://images.unsplash.com/photo-1548036328-c9fa89d128fa?w=500",
        stock: 48,
        rating: 4.4,
        num_reviews: 36,
        featured: false,
    },
    Fixture {
        name: "Ankle Boots",
        description: "Stylish ankle boots with block heel. Easy zip closure.",
        price: 2199,
        category: Category::Footwear,
        sizes: &["5", "6", "7", "8", "9"],
        colors: &["Black", "Brown"],
        image: "https://images.unsplash.com/photo-1543163521-1bf539c55dd2?w=500",
        stock: 30,
        rating: 4.6,
        num_reviews: 28,
        featured: false,
    },
    Fixture {
        name: "Silver Bracelet",
        description: "Elegant silver charm bracelet. Adjustable clasp.",
        price: 699,
        category: Category::Jewelry,
        sizes: &["Free Size"],
        colors: &["Silver"],
        image: "https://images.unsplash.com/photo-1611591437281-460bfbe1220a?w=500",
        stock: 40,
        rating: 4.3,
        num_reviews: 22,
        featured: false,
    },
    Fixture {
        name: "Perfume Eau De Parfum",
        description: "Long-lasting floral fragrance. Premium quality perfume.",
        price: 1499,
        category: Category::Beauty,
        sizes: &["50ml", "100ml"],
        colors: &["Pink"],
        image: "https://images.unsplash.com/photo-1541643600914-78b084683601?w=500",
        stock: 55,
        rating: 4.8,
        num_reviews: 67,
        featured: true,
    },
    Fixture {
        name: "Wrist Watch Rose Gold",
        description: "Elegant rose gold wrist watch. Water-resistant.",
        price: 1999,
        category: Category::Accessories,
        sizes: &["Free Size"],
        colors: &["Rose Gold"],
        image: "https://images.unsplash.com/photo-1523170335258-f5ed11844a49?w=500",
        stock: 25,
        rating: 4.7,
        num_reviews: 43,
        featured: true,
    },
];

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let db = PgPoolOptions::new()
        .max_connections(5)
        .connect(&std::env::var("DATABASE_URL")?)
        .await?;
    sqlx::migrate!("./migrations").run(&db).await?;

    sqlx::query("DELETE FROM products").execute(&db).await?;
    tracing::info!("existing products deleted");

    if std::env::args().nth(1).as_deref() == Some("-d") {
        return Ok(());
    }

    for f in CATALOG {
        sqlx::query(
            "INSERT INTO products (id, name, description, price, category, sizes, colors, image, \
                                   stock, rating, num_reviews, featured, created_at, updated_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, NOW(), NOW())",
        )
        .bind(Uuid::now_v7())
        .bind(f.name)
        .bind(f.description)
        .bind(Decimal::new(f.price, 0))
        .bind(f.category)
        .bind(f.sizes.iter().map(|s| s.to_string()).collect::<Vec<_>>())
        .bind(f.colors.iter().map(|c| c.to_string()).collect::<Vec<_>>())
        .bind(f.image)
        .bind(f.stock)
        .bind(f.rating)
        .bind(f.num_reviews)
        .bind(f.featured)
        .execute(&db)
        .await?;
    }
    tracing::info!("{} products imported", CATALOG.len());
    Ok(())
}
