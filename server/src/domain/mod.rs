//! Transport-agnostic record types, payload mappers, and ports.
//!
//! Inbound adapters map HTTP requests onto these types; outbound adapters
//! implement the port traits against the store.

mod dates;
mod error;
mod offer;
mod order;
pub mod ports;
mod user;

pub use dates::{API_DATE_FORMAT, ApiDate, ApiDateParseError};
pub use error::{DomainError, DomainErrorValidationError, ErrorCode};
pub use offer::{NewOffer, Offer, OfferChanges};
pub use order::{NewOrder, Order, OrderChanges};
pub use user::{NewUser, User, UserChanges};
