//! Style declarations and the helpers shared by component style functions.

mod declaration;
pub use declaration::*;

mod reset;
pub use reset::*;

mod units;
pub use units::*;
