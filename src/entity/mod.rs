pub mod character;
pub mod favorite;
pub mod planet;
pub mod user;

pub use character::Entity as Characters;
pub use favorite::Entity as Favorites;
pub use planet::Entity as Planets;
pub use user::Entity as Users;
