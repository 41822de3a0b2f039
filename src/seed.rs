//! Demo catalog seeded at startup. The store is in-memory, so without
//! this the service boots empty.

use chrono::NaiveDate;

use crate::domain::DomainError;
use crate::infrastructure::AppState;
use crate::models::{Condition, Item, Rental, RentalStatus};

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).expect("valid seed date")
}

pub async fn seed_demo_data(state: &AppState) -> Result<(), DomainError> {
    let items = vec![
        Item {
            id: "item1".to_string(),
            name: "Bosch Power Drill Set".to_string(),
            description: "Professional-grade power drill set with multiple drill bits and accessories. Perfect for DIY projects and home renovations.".to_string(),
            daily_price: 250,
            replacement_value: 5000,
            category: "Tools".to_string(),
            condition: Condition::LikeNew,
            location: "Koramangala, Bangalore".to_string(),
            images: vec![
                "https://images.pexels.com/photos/957024/drill-milling-milling-machine-drilling-957024.jpeg".to_string(),
                "https://images.pexels.com/photos/5691622/pexels-photo-5691622.jpeg".to_string(),
            ],
            owner: "Vikram Mehta".to_string(),
            rating: Some(4.8),
        },
        Item {
            id: "item2".to_string(),
            name: "Canon EOS DSLR Camera".to_string(),
            description: "Professional DSLR camera with 24MP sensor, great for photography enthusiasts. Includes standard lens and camera bag.".to_string(),
            daily_price: 500,
            replacement_value: 45000,
            category: "Electronics".to_string(),
            condition: Condition::Good,
            location: "Indiranagar, Bangalore".to_string(),
            images: vec![
                "https://images.pexels.com/photos/51383/photo-camera-subject-photographer-51383.jpeg".to_string(),
                "https://images.pexels.com/photos/1203803/pexels-photo-1203803.jpeg".to_string(),
            ],
            owner: "Ananya Singh".to_string(),
            rating: Some(4.9),
        },
        Item {
            id: "item3".to_string(),
            name: "4-Person Camping Tent".to_string(),
            description: "Waterproof 4-person camping tent, easy to set up and pack away. Perfect for weekend getaways and adventures.".to_string(),
            daily_price: 300,
            replacement_value: 8000,
            category: "Outdoor".to_string(),
            condition: Condition::Good,
            location: "Whitefield, Bangalore".to_string(),
            images: vec![
                "https://images.pexels.com/photos/2582818/pexels-photo-2582818.jpeg".to_string(),
                "https://images.pexels.com/photos/6271625/pexels-photo-6271625.jpeg".to_string(),
            ],
            owner: "Priya Patel".to_string(),
            rating: Some(4.7),
        },
        Item {
            id: "item4".to_string(),
            name: "DJI Drone with 4K Camera".to_string(),
            description: "High-quality drone with 4K camera for aerial photography and videography. Includes controller and extra batteries.".to_string(),
            daily_price: 800,
            replacement_value: 80000,
            category: "Electronics".to_string(),
            condition: Condition::LikeNew,
            location: "HSR Layout, Bangalore".to_string(),
            images: vec![
                "https://images.pexels.com/photos/336232/pexels-photo-336232.jpeg".to_string(),
                "https://images.pexels.com/photos/1071188/pexels-photo-1071188.jpeg".to_string(),
            ],
            owner: "Arjun Nair".to_string(),
            rating: Some(4.9),
        },
        Item {
            id: "item5".to_string(),
            name: "Designer Party Dress".to_string(),
            description: "Elegant designer party dress, size M, worn only once. Perfect for weddings and formal events.".to_string(),
            daily_price: 400,
            replacement_value: 15000,
            category: "Party".to_string(),
            condition: Condition::LikeNew,
            location: "Jayanagar, Bangalore".to_string(),
            images: vec![
                "https://images.pexels.com/photos/291759/pexels-photo-291759.jpeg".to_string(),
                "https://images.pexels.com/photos/1755428/pexels-photo-1755428.jpeg".to_string(),
            ],
            owner: "Neha Sharma".to_string(),
            rating: Some(4.6),
        },
        Item {
            id: "item6".to_string(),
            name: "Mountain Bike - Trek".to_string(),
            description: "Trek mountain bike in excellent condition. Perfect for trail rides and adventures in the outdoors.".to_string(),
            daily_price: 350,
            replacement_value: 35000,
            category: "Sports".to_string(),
            condition: Condition::Good,
            location: "Malleshwaram, Bangalore".to_string(),
            images: vec![
                "https://images.pexels.com/photos/100582/pexels-photo-100582.jpeg".to_string(),
                "https://images.pexels.com/photos/1149601/pexels-photo-1149601.jpeg".to_string(),
            ],
            owner: "Rohit Kumar".to_string(),
            rating: Some(4.7),
        },
        Item {
            id: "item7".to_string(),
            name: "Professional Mixer Grinder".to_string(),
            description: "High-power mixer grinder for all your kitchen needs. Multiple attachments included.".to_string(),
            daily_price: 150,
            replacement_value: 5000,
            category: "Kitchen".to_string(),
            condition: Condition::Good,
            location: "JP Nagar, Bangalore".to_string(),
            images: vec![
                "https://images.pexels.com/photos/3746517/pexels-photo-3746517.jpeg".to_string(),
                "https://images.pexels.com/photos/4871113/pexels-photo-4871113.jpeg".to_string(),
            ],
            owner: "Meera Iyer".to_string(),
            rating: Some(4.5),
        },
        Item {
            id: "item8".to_string(),
            name: "PlayStation 5 Console".to_string(),
            description: "Latest PS5 console with two controllers and three games. Perfect for gaming weekends.".to_string(),
            daily_price: 600,
            replacement_value: 50000,
            category: "Electronics".to_string(),
            condition: Condition::LikeNew,
            location: "Electronic City, Bangalore".to_string(),
            images: vec![
                "https://images.pexels.com/photos/442576/pexels-photo-442576.jpeg".to_string(),
                "https://images.pexels.com/photos/4219883/pexels-photo-4219883.jpeg".to_string(),
            ],
            owner: "Karan Malhotra".to_string(),
            rating: Some(4.9),
        },
    ];

    for item in items {
        state.item_repo.insert(item).await?;
    }

    let camera = state
        .item_repo
        .find_by_id("item2")
        .await?
        .ok_or(DomainError::NotFound)?;
    let console = state
        .item_repo
        .find_by_id("item8")
        .await?
        .ok_or(DomainError::NotFound)?;
    let drill = state
        .item_repo
        .find_by_id("item1")
        .await?
        .ok_or(DomainError::NotFound)?;
    let tent = state
        .item_repo
        .find_by_id("item3")
        .await?
        .ok_or(DomainError::NotFound)?;

    let rentals = vec![
        Rental {
            id: "rental1".to_string(),
            owner: camera.owner.clone(),
            pickup_location: camera.location.clone(),
            item: camera,
            start_date: d(2025, 6, 15),
            end_date: d(2025, 6, 18),
            duration: 3,
            status: RentalStatus::Active,
            total_amount: 1500,
            security_deposit: 10000,
            booking_date: d(2025, 6, 10),
            pickup_instructions: "Call 30 minutes before pickup. Bring ID proof.".to_string(),
        },
        Rental {
            id: "rental2".to_string(),
            owner: console.owner.clone(),
            pickup_location: console.location.clone(),
            item: console,
            start_date: d(2025, 6, 20),
            end_date: d(2025, 6, 22),
            duration: 2,
            status: RentalStatus::Upcoming,
            total_amount: 1200,
            security_deposit: 15000,
            booking_date: d(2025, 6, 12),
            pickup_instructions: "Building A, Apartment 304. Ring the doorbell.".to_string(),
        },
        Rental {
            id: "rental3".to_string(),
            owner: drill.owner.clone(),
            pickup_location: drill.location.clone(),
            item: drill,
            start_date: d(2025, 6, 1),
            end_date: d(2025, 6, 3),
            duration: 2,
            status: RentalStatus::Past,
            total_amount: 500,
            security_deposit: 2500,
            booking_date: d(2025, 5, 28),
            pickup_instructions: "Meet at Coffee Day next to the building.".to_string(),
        },
        Rental {
            id: "rental4".to_string(),
            owner: tent.owner.clone(),
            pickup_location: tent.location.clone(),
            item: tent,
            start_date: d(2025, 6, 18),
            end_date: d(2025, 6, 22),
            duration: 4,
            status: RentalStatus::Upcoming,
            total_amount: 1200,
            security_deposit: 4000,
            booking_date: d(2025, 6, 10),
            pickup_instructions: "Available for pickup between 10 AM and 7 PM.".to_string(),
        },
    ];

    for rental in rentals {
        state.rental_repo.create(rental).await?;
    }

    tracing::info!("Seeded demo catalog: 8 items, 4 rentals");
    Ok(())
}
