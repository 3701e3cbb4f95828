//! The product extraction schema and prompt.
//!
//! The schema is plain data: a JSON Schema document handed to the API so its
//! LLM extraction can populate the fields from unstructured page content. It
//! is built once per process and never mutated.

use serde_json::{json, Value};
use std::sync::LazyLock;

/// Instruction passed alongside the schema to guide the extraction.
pub const EXTRACTION_PROMPT: &str = "Extract the product details from the page content. \
     Focus on the main product information, pricing, reviews, and other requested fields. \
     If a field is not found, omit it or use null. For reviews, extract a sample if many are present.";

/// JSON Schema describing the product fields to extract.
///
/// `title` and `price` are required; everything else is optional and may be
/// omitted by the service if absent on the page.
pub static PRODUCT_SCHEMA: LazyLock<Value> = LazyLock::new(|| {
    json!({
        "type": "object",
        "properties": {
            "title": {"type": "string", "description": "The product title."},
            "description": {"type": "string", "description": "The product description."},
            "sku": {"type": "string", "description": "The product SKU or identifier."},
            "price": {"type": "number", "description": "The current price of the product."},
            "discount": {
                "type": "number",
                "description": "Discount amount or percentage if applicable."
            },
            "averageRating": {"type": "number", "description": "Average customer rating."},
            "reviewCount": {"type": "integer", "description": "Number of customer reviews."},
            "reviews": {
                "type": "array",
                "description": "List of customer reviews (limit to top 5-10 if many).",
                "items": {
                    "type": "object",
                    "properties": {
                        "text": {"type": "string"},
                        "rating": {"type": "number"}
                    }
                }
            },
            "availability": {
                "type": "string",
                "description": "Availability status (e.g., 'In Stock', 'Out of Stock')."
            },
            "stockLevel": {"type": "integer", "description": "Stock quantity if available."},
            "category": {"type": "string", "description": "Product category."},
            "taxonomy": {
                "type": "array",
                "description": "Product taxonomy or breadcrumb hierarchy.",
                "items": {"type": "string"}
            },
            "seller": {
                "type": "object",
                "description": "Seller information for marketplaces.",
                "properties": {
                    "name": {"type": "string"},
                    "rating": {"type": "number"},
                    "other": {"type": "string"}
                }
            },
            "productDetails": {
                "type": "object",
                "description": "Additional product details.",
                "properties": {
                    "asin": {"type": "string", "description": "ASIN code."},
                    "manufacturer": {"type": "string", "description": "Manufacturer name."},
                    "itemModelNumber": {"type": "string", "description": "Item model number."},
                    "packageDimensions": {
                        "type": "string",
                        "description": "Package dimensions and weight."
                    }
                }
            }
        },
        "required": ["title", "price"]
    })
});
