/*!
    The playback loop: select the video stream, pump packets through the
    decoder, and pace decoded frames.
*/

mod driver;
mod pacer;
mod report;
mod selector;

#[cfg(test)]
pub(crate) mod testing;

pub use driver::PlaybackLoop;
pub use report::PlaybackReport;
