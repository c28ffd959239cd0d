//! Public cycle models.
//!
//! Models are the primary public interface of this crate.
//!
//! # Organization
//!
//! Models are organized into domain-specific submodules; [`power`] holds
//! the steady-state power cycles. This taxonomy may grow as more cycle
//! families (refrigeration, heat pumps) are added.
//!
//! # Model structure
//!
//! Each cycle validates its boundary conditions at construction and
//! computes its metrics in [`PowerCycle::run`](power::PowerCycle::run).
//! Framework integration (e.g. parameter sweeps through
//! [`twine_core::Model`]) is provided by thin adapters over the cycles
//! rather than by the cycles themselves.

pub mod power;
