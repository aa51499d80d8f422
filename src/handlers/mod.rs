pub mod author;
pub mod genre;
pub mod hall;
pub mod performance;
pub mod seat;
pub mod ticket;

pub use author::author_config;
pub use genre::genre_config;
pub use hall::hall_config;
pub use performance::performance_config;
pub use seat::seat_config;
pub use ticket::ticket_config;
