pub mod monadic;

pub use monadic::Monadic;
