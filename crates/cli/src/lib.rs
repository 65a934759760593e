//! Interactive client for the voicecart assistant: transcript capture,
//! command handling, and debounced best-effort sync with the
//! persistence service. The binary in `main.rs` is a thin shell over
//! these modules.

pub mod app;
pub mod capture;
pub mod debounce;
pub mod remote;
