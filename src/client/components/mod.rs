#![allow(non_snake_case)]
mod directory_view;
mod icon;
mod user_card;

pub use directory_view::DirectoryView;
pub use icon::Icon;
pub use user_card::UserCard;
