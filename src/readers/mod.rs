pub mod input;
pub mod line_scanner;

pub use input::InputBuffer;
pub use line_scanner::{LineScanner, NumberToken, ScannedLine};
