//! Embedded gallows illustrations
//!
//! Default stage art compiled into the binary at build time.

// Include generated stage list from build script
include!(concat!(env!("OUT_DIR"), "/stages.rs"));
