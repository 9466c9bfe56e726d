//! # Seed Content Generator
//!
//! Populates the content store with sample events and signature brews for
//! development.
//!
//! ## Usage
//! ```bash
//! # Seed the default development database
//! cargo run -p taproom-db --bin seed
//!
//! # Specify database path
//! cargo run -p taproom-db --bin seed -- --db ./data/taproom.db
//! ```

use chrono::{Duration, NaiveTime, Utc};
use std::env;
use taproom_core::{Event, SignatureBrew};
use taproom_db::{generate_content_id, Database, DbConfig};

/// (name, style, flavor)
const BREWS: &[(&str, &str, &str)] = &[
    (
        "Golden Hour Hefeweizen",
        "Hefeweizen",
        "Banana and clove on a soft wheat body, hazy and refreshing",
    ),
    (
        "Monsoon Pale Ale",
        "American Pale Ale",
        "Citrus-forward hops with a clean biscuit malt finish",
    ),
    (
        "Midnight Oat Stout",
        "Oatmeal Stout",
        "Roasted coffee and dark chocolate with a silky oat mouthfeel",
    ),
    (
        "Mango Wit",
        "Witbier",
        "Alphonso mango over coriander and orange peel",
    ),
    (
        "Cask Amber",
        "Amber Ale",
        "Caramel malt and gentle bitterness, served on the hand pump",
    ),
];

/// (name, description, days from today, hour, happy hour, cta)
const EVENTS: &[(&str, &str, i64, u32, bool, Option<&str>)] = &[
    (
        "Happy Hour",
        "Half-price pints on every house brew",
        1,
        17,
        true,
        None,
    ),
    (
        "Quiz Night",
        "Teams of up to six, prizes for the top three",
        3,
        20,
        false,
        Some("Register Team"),
    ),
    (
        "Live Acoustic Sessions",
        "Local artists on the brewhouse stage",
        5,
        21,
        false,
        None,
    ),
    (
        "Brewer's Table",
        "A five-course pairing dinner with our head brewer",
        9,
        19,
        false,
        Some("Book a Seat"),
    ),
    (
        "Sunday Brunch & Brews",
        "Bottomless brunch with a tasting flight",
        6,
        11,
        false,
        None,
    ),
    (
        "Weekday Happy Hour",
        "Two-for-one on pitchers before seven",
        2,
        16,
        true,
        None,
    ),
    (
        "Oktoberfest Preview",
        "First tapping of the seasonal Märzen",
        14,
        18,
        false,
        Some("Learn More"),
    ),
];

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();

    let mut db_path = String::from("./taproom_dev.db");

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--db" | "-d" => {
                if i + 1 < args.len() {
                    db_path = args[i + 1].clone();
                    i += 1;
                }
            }
            "--help" | "-h" => {
                println!("Taproom Seed Content Generator");
                println!();
                println!("Usage: seed [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -d, --db <PATH>    Database file path (default: ./taproom_dev.db)");
                println!("  -h, --help         Show this help message");
                return Ok(());
            }
            _ => {}
        }
        i += 1;
    }

    println!("🌱 Taproom Seed Content Generator");
    println!("=================================");
    println!("Database: {}", db_path);
    println!();

    let db = Database::new(DbConfig::new(&db_path)).await?;

    println!("✓ Connected to database");
    println!("✓ Migrations applied");

    let existing = db.events().count().await? + db.signature_brews().count().await?;
    if existing > 0 {
        println!("⚠ Database already has {} content records", existing);
        println!("  Skipping seed to avoid duplicates.");
        println!("  Delete the database file to regenerate.");
        return Ok(());
    }

    let now = Utc::now();

    for (name, style, flavor) in BREWS {
        let brew = SignatureBrew {
            id: generate_content_id(),
            created_at: now,
            updated_at: now,
            name: Some(name.to_string()),
            beer_image: None,
            flavor_description: Some(flavor.to_string()),
            details_url: None,
            beer_style: Some(style.to_string()),
        };
        db.signature_brews().insert(&brew).await?;
    }
    println!("✓ Inserted {} signature brews", BREWS.len());

    for (name, description, days, hour, happy_hour, cta) in EVENTS {
        let event = Event {
            id: generate_content_id(),
            created_at: now,
            updated_at: now,
            event_name: Some(name.to_string()),
            event_date: Some((now + Duration::days(*days)).date_naive()),
            event_time: NaiveTime::from_hms_opt(*hour, 0, 0),
            description: Some(description.to_string()),
            event_image: None,
            is_happy_hour: Some(*happy_hour),
            cta_text: cta.map(str::to_string),
            cta_link: None,
        };
        db.events().insert(&event).await?;
    }
    println!("✓ Inserted {} events", EVENTS.len());

    println!();
    println!("✓ Seed complete!");

    db.close().await;
    Ok(())
}
