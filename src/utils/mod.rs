pub mod pricing;

pub use pricing::{round_two_decimals, ticket_price_cents};
