//! Card system: catalog, deck, hands, and recruited collections.
//!
//! ## Catalog
//!
//! `CardType` is the static definition of the eight agent types: their
//! movement tables and how many copies exist.
//!
//! ## Runtime containers
//!
//! - `Deck`: shared draw pile, shuffled once per match
//! - `Hand`: a seat's private cards
//! - `Collection`: a seat's recruited cards; drives movement lookups

pub mod card;
pub mod catalog;
pub mod collection;
pub mod deck;
pub mod hand;

pub use card::{Card, CardId};
pub use catalog::{validate_catalog, CardType, CatalogError, Movement, DECK_SIZE};
pub use collection::{Acquisition, Collection};
pub use deck::{fisher_yates, Deck};
pub use hand::Hand;
