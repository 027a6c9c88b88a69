mod engine;
mod error;
mod generator;
mod preload;
mod transcriber;

pub use engine::{assemble_prompt, ChatEngine, ChatReply};
pub use error::{ChatError, GeneratorError, TranscribeError};
pub use generator::Generator;
pub use preload::{default_characters, DefaultCharacter};
pub use transcriber::{Transcriber, Transcript};
