pub mod asteroid;
pub mod star;
pub mod trail;
