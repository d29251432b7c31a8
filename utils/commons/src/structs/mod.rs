pub use token::*;

use super::*;

mod token;
