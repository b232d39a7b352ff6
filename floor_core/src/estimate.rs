//! # Cost Estimate
//!
//! Turns a [`Job`] into material, labor, and sanding costs. Every function
//! here is a pure query over the job's current state; nothing is cached, so
//! a breakdown taken after a mutation always reflects that mutation.
//!
//! ## Rules
//!
//! - Sanding: usable floor space × sanding rate
//! - Labor: days × 8 hours × sum of hourly rates (whole crew, whole schedule)
//! - Material: zero when the customer supplies it; otherwise usable space
//!   plus 10% waste × material rate, plus the pickup fee
//! - Total: the sum of the three, unrounded
//!
//! ## Example
//!
//! ```rust
//! use floor_core::estimate::breakdown;
//! use floor_core::job::{Job, Obstacle, Room};
//!
//! let mut job = Job::new();
//! job.add_room(Room::new("Living Room", 500.0).with_obstacle(Obstacle::new("Fireplace", 50.0)));
//! job.set_sanding_cost_per_sqft(2.0);
//!
//! let result = breakdown(&job);
//! assert_eq!(result.sanding_cost, 900.0);
//! assert_eq!(result.total_cost, 900.0);
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::job::Job;

/// Length of a workday in hours.
pub const HOURS_PER_WORKDAY: u64 = 8;

/// Material ordered per square foot of usable floor (10% for cutoffs and mistakes).
pub const MATERIAL_WASTE_FACTOR: f64 = 1.10;

/// Snapshot of a job's costs.
///
/// This is the one record reporters consume. Values are full precision;
/// rounding to cents is a presentation concern.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostBreakdown {
    /// Usable floor space across all rooms
    pub total_floor_space_sqft: f64,

    /// Material to order including waste (0 when customer supplies it)
    pub material_needed_sqft: f64,

    pub material_cost: f64,
    pub labor_cost: f64,
    pub sanding_cost: f64,
    pub total_cost: f64,

    pub customer_provides_material: bool,
    pub sanding_cost_per_sqft: f64,
}

/// Square footage of material to order.
pub fn material_needed(job: &Job) -> f64 {
    if job.customer_provides_material {
        0.0
    } else {
        job.total_floor_space() * MATERIAL_WASTE_FACTOR
    }
}

/// Usable floor space × sanding rate.
pub fn sanding_cost(job: &Job) -> f64 {
    job.total_floor_space() * job.sanding_cost_per_sqft
}

/// Scheduled hours × combined crew rate.
pub fn labor_cost(job: &Job) -> f64 {
    job.total_hours() as f64 * job.combined_hourly_rate()
}

/// Material plus pickup fee, or zero when the customer supplies material.
///
/// The pickup fee is charged whenever the company supplies material, even
/// if the floor space works out to zero or less.
pub fn material_cost(job: &Job) -> f64 {
    if job.customer_provides_material {
        return 0.0;
    }
    material_needed(job) * job.material_cost_per_sqft + job.pickup_fee
}

pub fn total_cost(job: &Job) -> f64 {
    material_cost(job) + labor_cost(job) + sanding_cost(job)
}

/// Compute a fresh breakdown of the job.
pub fn breakdown(job: &Job) -> CostBreakdown {
    let material = material_cost(job);
    let labor = labor_cost(job);
    let sanding = sanding_cost(job);

    let result = CostBreakdown {
        total_floor_space_sqft: job.total_floor_space(),
        material_needed_sqft: material_needed(job),
        material_cost: material,
        labor_cost: labor,
        sanding_cost: sanding,
        total_cost: material + labor + sanding,
        customer_provides_material: job.customer_provides_material,
        sanding_cost_per_sqft: job.sanding_cost_per_sqft,
    };

    debug!(
        rooms = job.rooms.len(),
        employees = job.employees.len(),
        total_cost = result.total_cost,
        "computed cost breakdown"
    );
    result
}

impl Job {
    pub fn sanding_cost(&self) -> f64 {
        sanding_cost(self)
    }

    pub fn labor_cost(&self) -> f64 {
        labor_cost(self)
    }

    pub fn material_cost(&self) -> f64 {
        material_cost(self)
    }

    pub fn total_cost(&self) -> f64 {
        total_cost(self)
    }

    pub fn breakdown(&self) -> CostBreakdown {
        breakdown(self)
    }
}
