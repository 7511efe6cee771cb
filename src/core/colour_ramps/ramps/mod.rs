pub mod palette;
pub mod rainbow;
