pub mod author_service;
pub mod genre_service;
pub mod hall_service;
pub mod performance_service;
pub mod seat_service;
pub mod ticket_service;

pub use author_service::*;
pub use genre_service::*;
pub use hall_service::*;
pub use performance_service::*;
pub use seat_service::*;
pub use ticket_service::*;
