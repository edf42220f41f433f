//! Application core: pure visit logic, zero I/O.
//!
//! The visit script and the run loop live here.  All interaction with
//! devices happens through the **port traits** defined in [`ports`],
//! keeping this layer fully testable without a camera, speaker or sensor.

pub mod outcome;
pub mod ports;
pub mod service;
