pub mod authors;
pub mod genres;
pub mod halls;
pub mod performances;
pub mod seats;
pub mod tickets;

pub use authors as author_entity;
pub use genres as genre_entity;
pub use halls as hall_entity;
pub use performances as performance_entity;
pub use seats as seat_entity;
pub use tickets as ticket_entity;
