//! Rust client for extracting e-commerce product data via the Firecrawl API.
//!
//! Firecrawl is a scraping/extraction service that fetches a web page and
//! uses LLM content understanding to produce structured data matching a
//! supplied schema. This crate ships a fixed product schema (title, price,
//! reviews, availability, seller details and more) and a client that sends
//! a product page URL to the `/v2/scrape` endpoint, issuing exactly one
//! request per call.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use firecrawl_product::Client;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), firecrawl_product::Error> {
//!     let client = Client::builder("your-api-key").build()?;
//!
//!     let product = client
//!         .extract_product("https://example.com/product")
//!         .await?;
//!
//!     println!("{}", serde_json::to_string_pretty(&product)?);
//!     Ok(())
//! }
//! ```

mod client;
mod error;
pub mod schema;
mod types;
mod version;

pub use client::{Client, ClientBuilder};
pub use error::{Error, ErrorKind, Result};
pub use types::{Format, ScrapeData, ScrapeRequest, ScrapeResponse};
pub use version::{build_user_agent, CLIENT_VERSION};
