//! End-to-end checks that drive range lists through the streamer and into real files.

mod pipeline;
