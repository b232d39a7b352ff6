//! # floor_core - Flooring Cost Model
//!
//! `floor_core` is the computational heart of Floorwise. It holds the data
//! for a hardwood flooring job (rooms with their obstacles, the crew, the
//! schedule, and pricing) and derives usable floor area and a cost
//! breakdown from it. All types are JSON-serializable.
//!
//! ## Design Philosophy
//!
//! - **Pure queries**: breakdowns are recomputed on every call, never cached
//! - **No validation in the model**: collectors parse and validate raw input
//!   (see [`input`]) before anything reaches a [`Job`]
//! - **Full precision**: rounding happens only when rendering a [`report`]
//!
//! ## Quick Start
//!
//! ```rust
//! use floor_core::{Employee, Job, Obstacle, Room};
//!
//! let mut job = Job::new();
//! job.add_room(Room::new("Living Room", 500.0).with_obstacle(Obstacle::new("Fireplace", 50.0)));
//! job.add_employee(Employee::new("Alice", 25.0));
//! job.add_employee(Employee::new("Bob", 30.0));
//! job.set_days_required(5);
//! job.set_sanding_cost_per_sqft(2.0);
//!
//! let breakdown = job.breakdown();
//! assert_eq!(breakdown.labor_cost, 2200.0);
//! assert_eq!(breakdown.total_cost, 3100.0);
//! ```
//!
//! ## Modules
//!
//! - [`job`] - Job aggregate, rooms, obstacles, employees
//! - [`estimate`] - Cost rules and the breakdown record
//! - [`input`] - Parsing raw text into validated values
//! - [`report`] - Plain-text review and cost reports
//! - [`units`] - Feet and square-feet wrappers
//! - [`errors`] - Structured error types

pub mod errors;
pub mod estimate;
pub mod input;
pub mod job;
pub mod report;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use errors::{EstimateError, EstimateResult};
pub use estimate::{CostBreakdown, HOURS_PER_WORKDAY, MATERIAL_WASTE_FACTOR};
pub use job::{Employee, Job, Obstacle, Room};
