//! Integration tests: a headless Bevy app with `ReplayPlugin`, driven by a
//! manual clock so tick timing is deterministic.
