//! Generated shell types live in `generated/`; this crate only drives the build script.
