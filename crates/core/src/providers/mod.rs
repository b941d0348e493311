pub mod traits;

// Random source implementations
pub mod random;
