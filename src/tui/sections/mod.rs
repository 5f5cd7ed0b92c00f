pub mod about;
pub mod contact;
