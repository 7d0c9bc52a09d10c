pub mod assets;
pub mod contracts;
pub mod health;
pub mod licenses;
pub mod users;
