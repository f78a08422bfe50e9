pub mod renderer;
pub mod sink;

pub use sink::{AfplaySink, AudioSink, PlaybackRequest, PrintSink};
