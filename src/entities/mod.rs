mod booking;
mod location;
mod quote;
mod session;
mod tier;

pub use booking::Booking;
pub use location::Coordinates;
pub use quote::FareQuote;
pub use session::{Endpoint, Session, Status};
pub use tier::{catalog, find_tier, Tier};
