//! Persistence access: one repository per table, each borrowing whatever
//! connection or transaction the caller is working in.

pub mod character;
pub mod favorite;
pub mod planet;
pub mod user;

pub use character::CharacterRepository;
pub use favorite::FavoriteRepository;
pub use planet::PlanetRepository;
pub use user::UserRepository;
