//! Password generation and output.

pub mod charset;
mod generate;
pub mod output;
mod request;

pub use charset::{CharClass, ClassSet};
pub use generate::{GeneratedPassword, SamplingPolicy, generate};
pub use request::{GenerationRequest, MAX_LENGTH, MIN_LENGTH, ValidationError};
