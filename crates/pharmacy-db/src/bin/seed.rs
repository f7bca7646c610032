//! # Seed Data Generator
//!
//! Populates a database with sample medicines for development.
//!
//! ## Usage
//! ```bash
//! # Generate 200 medicines (default)
//! cargo run -p pharmacy-db --bin seed
//!
//! # Generate custom amount
//! cargo run -p pharmacy-db --bin seed -- --count 1000
//!
//! # Specify database path
//! cargo run -p pharmacy-db --bin seed -- --db ./data/pharmacy.db
//! ```
//!
//! Each medicine gets a name built from a base drug and a strength/form,
//! a quantity between 0 and 250 and a price between 0.50 and 40.49.

use std::env;

use pharmacy_core::MedicineDraft;
use pharmacy_db::{Database, DbConfig};

/// Base drug names
const DRUGS: &[&str] = &[
    "Paracetamol",
    "Ibuprofen",
    "Aspirin",
    "Amoxicillin",
    "Azithromycin",
    "Cetirizine",
    "Loratadine",
    "Metformin",
    "Amlodipine",
    "Atorvastatin",
    "Omeprazole",
    "Pantoprazole",
    "Ranitidine",
    "Salbutamol",
    "Montelukast",
    "Diclofenac",
    "Naproxen",
    "Ciprofloxacin",
    "Doxycycline",
    "Losartan",
];

/// Strength / dosage form variants
const FORMS: &[&str] = &[
    "250mg Tablet",
    "500mg Tablet",
    "650mg Tablet",
    "100mg Capsule",
    "200mg Capsule",
    "5ml Syrup",
    "10ml Drops",
    "Gel 30g",
    "Injection 2ml",
    "Inhaler",
];

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();

    let mut count: usize = 200;
    let mut db_path = String::from("./pharmacy_dev.db");

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--count" | "-c" => {
                if i + 1 < args.len() {
                    count = args[i + 1].parse().unwrap_or(200);
                    i += 1;
                }
            }
            "--db" | "-d" => {
                if i + 1 < args.len() {
                    db_path = args[i + 1].clone();
                    i += 1;
                }
            }
            "--help" | "-h" => {
                println!("Pharmacy Seed Data Generator");
                println!();
                println!("Usage: seed [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -c, --count <N>    Number of medicines to generate (default: 200)");
                println!("  -d, --db <PATH>    Database file path (default: ./pharmacy_dev.db)");
                println!("  -h, --help         Show this help message");
                return Ok(());
            }
            _ => {}
        }
        i += 1;
    }

    let count = count.min(DRUGS.len() * FORMS.len());

    println!("Pharmacy Seed Data Generator");
    println!("============================");
    println!("Database:  {}", db_path);
    println!("Medicines: {}", count);
    println!();

    let db = Database::new(DbConfig::new(&db_path)).await?;
    println!("✓ Connected to database");

    let existing = db.medicines().count().await?;
    if existing > 0 {
        println!("⚠ Database already has {} medicines", existing);
        println!("  Skipping seed to avoid duplicates.");
        println!("  Delete the database file to regenerate.");
        return Ok(());
    }

    let start = std::time::Instant::now();
    let mut generated = 0;

    for seed in 0..count {
        let draft = generate_medicine(seed)?;
        if let Err(e) = db.medicines().create(&draft).await {
            eprintln!("Failed to insert {}: {}", draft.name(), e);
            continue;
        }

        generated += 1;
        if generated % 50 == 0 {
            println!("  Generated {} medicines...", generated);
        }
    }

    println!();
    println!("✓ Generated {} medicines in {:?}", generated, start.elapsed());
    println!(
        "  Total stock value: {:.2}",
        db.medicines().total_value().await?
    );

    let hits = db.medicines().search("para").await?;
    println!("  Search 'para': {} results", hits.len());

    db.close().await;
    println!();
    println!("✓ Seed complete!");

    Ok(())
}

/// Builds one deterministic sample medicine.
fn generate_medicine(seed: usize) -> Result<MedicineDraft, pharmacy_core::ValidationError> {
    let drug = DRUGS[seed % DRUGS.len()];
    let form = FORMS[(seed / DRUGS.len()) % FORMS.len()];

    let quantity = ((seed * 37) % 251) as i64;
    let price_cents = 50 + ((seed * 173) % 4000) as i64;

    MedicineDraft::new(
        &format!("{} {}", drug, form),
        quantity,
        price_cents as f64 / 100.0,
    )
}
