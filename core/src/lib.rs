//! # Pingscript Core
//!
//! The file side of the pipeline.
//!
//! * **[`reader`]**: reads words from an input file into an address collection.
//! * **[`script`]**: writes the collection out as a shell script.
//! * **[`collector`]**: runs the reader over every input, then the script writer.

pub mod collector;
pub mod reader;
pub mod script;
