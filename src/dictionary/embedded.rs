//! Embedded dictionary entries
//!
//! Entry table compiled into the binary at build time.

// Include generated entries from build script
include!(concat!(env!("OUT_DIR"), "/entries.rs"));
