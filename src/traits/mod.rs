pub mod processor;

pub use processor::{Processor, ProcessorFamily, ProcessorType};
