pub mod args;
pub mod batch;
pub mod codec;
pub mod config;
pub mod domain;
pub mod input;
pub mod pipeline;
pub mod prompt;
pub mod reporters;

pub use args::parse_args;
pub use codec::{correct, encode};
pub use config::CodecConfig;
pub use domain::{BitRow, CodewordRow, MessageRow, Mode};
pub use input::InputError;
pub use pipeline::CodecOutput;
