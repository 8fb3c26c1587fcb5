//! Contract checker for the basket-item REST API.
//!
//! The library exposes the HTTP client ([`api`]), the scenario catalogue and
//! runner ([`checks`]), and the run report ([`report`]). The `basket-check`
//! binary wires them to a CLI; `basket-fixture-server` provides an in-memory
//! server honouring the same contract for local runs and tests.

pub mod api;
pub mod checks;
pub mod model;
pub mod report;
