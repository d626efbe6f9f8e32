pub mod letter;
pub mod number;
pub mod whitespace;

pub use letter::{Identifier, letter};
pub use number::{Number, digit};
pub use whitespace::WhiteSpace;
