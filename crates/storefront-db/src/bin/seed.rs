//! # Seed Data Generator
//!
//! Registers sample digital books for one partner, printing each derived SKU.
//!
//! ## Usage
//! ```bash
//! cargo run -p storefront-db --bin seed
//!
//! # Specify database path and partner
//! cargo run -p storefront-db --bin seed -- --db ./data/storefront.db \
//!     --partner cae1c9f5-f312-4ed7-8fce-729ba9b64244
//! ```
//!
//! Books that already exist for the partner are reported and skipped, so
//! running the seed twice is harmless.

use std::env;
use std::process;

use storefront_core::{BookKey, PartnerId};
use storefront_db::{Database, DbConfig, DbError, NewDigitalBook};

const DEFAULT_PARTNER: &str = "cae1c9f5-f312-4ed7-8fce-729ba9b64244";

/// (book key, title, price in cents)
const SAMPLE_BOOKS: &[(&str, &str, i64)] = &[
    ("digital-book-test-1", "Demo Course Companion", 4900),
    ("course-v1:edX+DemoX+Demo_Course", "DemoX: Course Textbook", 0),
    ("course-v1:MITx+6.00x+2T2024", "Introduction to Computer Science", 7900),
    ("course-v1:HarvardX+CS50+X", "CS50 Notes", 2500),
    ("course-v1:BerkeleyX+Data8x+1T2025", "Foundations of Data Science", 5900),
    ("course-v1:DelftX+TW3421x+3T2024", "Credit Risk Management", 3900),
];

/// What the command line asked for.
#[derive(Debug, PartialEq, Eq)]
enum Invocation {
    Seed { db_path: String, partner: String },
    Help,
}

fn usage() -> String {
    format!(
        "Usage: seed [OPTIONS]\n\n\
         Options:\n  \
         -d, --db <PATH>        Database file path (default: ./storefront_dev.db)\n  \
         -p, --partner <ID>     Partner identifier (default: {DEFAULT_PARTNER})\n  \
         -h, --help             Show this help message"
    )
}

/// Parses the arguments after the program name.
fn parse_args(args: &[String]) -> Result<Invocation, String> {
    let mut db_path = String::from("./storefront_dev.db");
    let mut partner = String::from(DEFAULT_PARTNER);

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--db" | "-d" => {
                db_path = iter
                    .next()
                    .ok_or_else(|| format!("{arg} requires a value"))?
                    .clone();
            }
            "--partner" | "-p" => {
                partner = iter
                    .next()
                    .ok_or_else(|| format!("{arg} requires a value"))?
                    .clone();
            }
            "--help" | "-h" => return Ok(Invocation::Help),
            other => return Err(format!("unknown argument '{other}'")),
        }
    }

    Ok(Invocation::Seed { db_path, partner })
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().skip(1).collect();

    let (db_path, partner) = match parse_args(&args) {
        Ok(Invocation::Seed { db_path, partner }) => (db_path, partner),
        Ok(Invocation::Help) => {
            println!("Storefront Seed Data Generator");
            println!();
            println!("{}", usage());
            return Ok(());
        }
        Err(message) => {
            eprintln!("error: {message}");
            eprintln!();
            eprintln!("{}", usage());
            process::exit(2);
        }
    };

    println!("Storefront Seed Data Generator");
    println!("==============================");
    println!("Database: {}", db_path);
    println!("Partner:  {}", partner);
    println!();

    let db = Database::new(DbConfig::new(&db_path)).await?;
    println!("✓ Connected to database, migrations applied");
    println!();

    let books = db.digital_books();
    let partner_id = PartnerId::new(partner);
    let mut registered = 0;

    for (key, title, price_cents) in SAMPLE_BOOKS {
        let new = NewDigitalBook {
            partner_id: partner_id.clone(),
            book_key: BookKey::new(*key),
            title: title.to_string(),
            price_cents: *price_cents,
            currency: "usd".to_string(),
        };

        match books.register(new).await {
            Ok(book) => {
                println!("  {}  {}", book.sku, book.book_key);
                registered += 1;
            }
            Err(DbError::UniqueViolation { value, .. }) => {
                println!("  {}  {} (already registered)", value, key);
            }
            Err(e) => return Err(e.into()),
        }
    }

    println!();
    println!("✓ Registered {} of {} books", registered, SAMPLE_BOOKS.len());

    db.close().await;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|a| a.to_string()).collect()
    }

    #[test]
    fn test_defaults() {
        assert_eq!(
            parse_args(&[]).unwrap(),
            Invocation::Seed {
                db_path: "./storefront_dev.db".to_string(),
                partner: DEFAULT_PARTNER.to_string(),
            }
        );
    }

    #[test]
    fn test_options() {
        assert_eq!(
            parse_args(&args(&["-d", "/tmp/s.db", "--partner", "edx"])).unwrap(),
            Invocation::Seed {
                db_path: "/tmp/s.db".to_string(),
                partner: "edx".to_string(),
            }
        );
        assert_eq!(parse_args(&args(&["--help"])).unwrap(), Invocation::Help);
    }

    #[test]
    fn test_rejects_bad_arguments() {
        assert_eq!(
            parse_args(&args(&["--db"])).unwrap_err(),
            "--db requires a value"
        );
        assert_eq!(
            parse_args(&args(&["--verbose"])).unwrap_err(),
            "unknown argument '--verbose'"
        );
    }
}
