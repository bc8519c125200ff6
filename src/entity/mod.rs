pub mod characters;
pub mod favorites;
pub mod films;
pub mod planets;
pub mod users;

pub use characters::Entity as Characters;
pub use favorites::Entity as Favorites;
pub use films::Entity as Films;
pub use planets::Entity as Planets;
pub use users::Entity as Users;
