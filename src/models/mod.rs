pub mod author;
pub mod common;
pub mod genre;
pub mod hall;
pub mod performance;
pub mod seat;
pub mod ticket;

pub use author::*;
pub use common::*;
pub use genre::*;
pub use hall::*;
pub use performance::*;
pub use seat::*;
pub use ticket::*;
