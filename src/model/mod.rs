//! Pure data structures. [`Product`] and [`Order`] implement the
//! [`Entity`](crate::framework::Entity) trait; [`CartItem`] lives only inside a cart.

pub mod cart_item;
pub mod order;
pub mod product;

pub use cart_item::*;
pub use order::*;
pub use product::*;
