//! # Job Data Structures
//!
//! The `Job` struct is the aggregate root for one flooring estimate. A
//! collector builds it up incrementally, then asks for a breakdown as often
//! as it likes (see [`crate::estimate`]).
//!
//! ## Structure
//!
//! ```text
//! Job
//! ├── rooms: Vec<Room>
//! │   └── obstacles: Vec<Obstacle>   (fireplaces, closets, islands...)
//! ├── employees: Vec<Employee>       (each works the full schedule)
//! ├── days_required
//! └── pricing: sanding rate, material source, material rate, pickup fee
//! ```
//!
//! ## Example
//!
//! ```rust
//! use floor_core::job::{Employee, Job, Obstacle, Room};
//!
//! let mut job = Job::new();
//! job.add_room(Room::new("Living Room", 500.0).with_obstacle(Obstacle::new("Fireplace", 50.0)));
//! job.add_employee(Employee::new("Alice", 25.0));
//! job.set_days_required(5);
//!
//! assert_eq!(job.total_floor_space(), 450.0);
//! assert_eq!(job.total_hours(), 40);
//! ```

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::errors::{EstimateError, EstimateResult};
use crate::estimate::HOURS_PER_WORKDAY;
use crate::units::SquareFeet;

/// A fixed feature whose footprint is excluded from a room's floor area.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    /// Label, e.g. "Fireplace"
    pub name: String,

    /// Footprint in square feet
    pub area_sqft: f64,
}

impl Obstacle {
    pub fn new(name: impl Into<String>, area_sqft: f64) -> Self {
        Obstacle {
            name: name.into(),
            area_sqft,
        }
    }
}

/// A room to be floored, with the obstacles inside it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Room {
    /// Label, e.g. "Master Bedroom"
    pub name: String,

    /// Gross floor area in square feet
    pub total_area_sqft: f64,

    /// Obstacles, in entry order
    #[serde(default)]
    pub obstacles: Vec<Obstacle>,
}

impl Room {
    /// Create a room with no obstacles.
    pub fn new(name: impl Into<String>, total_area_sqft: f64) -> Self {
        Room {
            name: name.into(),
            total_area_sqft,
            obstacles: Vec::new(),
        }
    }

    /// Builder-style obstacle append.
    pub fn with_obstacle(mut self, obstacle: Obstacle) -> Self {
        self.obstacles.push(obstacle);
        self
    }

    /// Sum of all obstacle footprints.
    pub fn obstacle_area(&self) -> f64 {
        self.obstacles
            .iter()
            .map(|o| SquareFeet(o.area_sqft))
            .sum::<SquareFeet>()
            .into()
    }

    /// Total area minus obstacle area.
    ///
    /// Not clamped: obstacles larger than the room give a negative result.
    ///
    /// ```rust
    /// use floor_core::job::{Obstacle, Room};
    ///
    /// let room = Room::new("Closet", 100.0).with_obstacle(Obstacle::new("Shelving", 150.0));
    /// assert_eq!(room.usable_area(), -50.0);
    /// ```
    pub fn usable_area(&self) -> f64 {
        (SquareFeet(self.total_area_sqft) - SquareFeet(self.obstacle_area())).value()
    }
}

/// A crew member assigned to the job for its full duration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    pub name: String,

    /// Pay per hour
    pub hourly_rate: f64,
}

impl Employee {
    pub fn new(name: impl Into<String>, hourly_rate: f64) -> Self {
        Employee {
            name: name.into(),
            hourly_rate,
        }
    }
}

/// Aggregate root for a flooring estimate.
///
/// The model performs no validation: values are expected to arrive already
/// parsed and non-negative (see [`crate::input`]).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Job {
    #[serde(default)]
    pub rooms: Vec<Room>,

    #[serde(default)]
    pub employees: Vec<Employee>,

    /// Number of 8-hour workdays
    #[serde(default)]
    pub days_required: u32,

    #[serde(default)]
    pub sanding_cost_per_sqft: f64,

    /// When true, material rate and pickup fee are ignored
    #[serde(default = "default_customer_provides_material")]
    pub customer_provides_material: bool,

    #[serde(default)]
    pub material_cost_per_sqft: f64,

    /// Flat fee for collecting company-supplied material
    #[serde(default)]
    pub pickup_fee: f64,
}

fn default_customer_provides_material() -> bool {
    true
}

impl Default for Job {
    fn default() -> Self {
        Job {
            rooms: Vec::new(),
            employees: Vec::new(),
            days_required: 0,
            sanding_cost_per_sqft: 0.0,
            customer_provides_material: default_customer_provides_material(),
            material_cost_per_sqft: 0.0,
            pickup_fee: 0.0,
        }
    }
}

impl Job {
    /// Create an empty job (customer provides material, everything else zero).
    pub fn new() -> Self {
        Job::default()
    }

    /// Append a room. Returns its index.
    pub fn add_room(&mut self, room: Room) -> usize {
        trace!(room = %room.name, total_area_sqft = room.total_area_sqft, "room added");
        self.rooms.push(room);
        self.rooms.len() - 1
    }

    /// Append an obstacle to the room at `room_index`.
    ///
    /// Returns the obstacle's index within the room, or `None` if there is
    /// no such room.
    pub fn add_obstacle(&mut self, room_index: usize, obstacle: Obstacle) -> Option<usize> {
        let room = self.rooms.get_mut(room_index)?;
        trace!(room = %room.name, obstacle = %obstacle.name, "obstacle added");
        room.obstacles.push(obstacle);
        Some(room.obstacles.len() - 1)
    }

    /// Remove a room by index.
    pub fn remove_room(&mut self, index: usize) -> Option<Room> {
        if index < self.rooms.len() {
            Some(self.rooms.remove(index))
        } else {
            None
        }
    }

    /// Replace the room at `index`, keeping its position. Returns the old room.
    pub fn replace_room(&mut self, index: usize, room: Room) -> Option<Room> {
        let slot = self.rooms.get_mut(index)?;
        Some(std::mem::replace(slot, room))
    }

    /// Append an employee. Returns its index.
    pub fn add_employee(&mut self, employee: Employee) -> usize {
        trace!(employee = %employee.name, hourly_rate = employee.hourly_rate, "employee added");
        self.employees.push(employee);
        self.employees.len() - 1
    }

    /// Remove an employee by index.
    pub fn remove_employee(&mut self, index: usize) -> Option<Employee> {
        if index < self.employees.len() {
            Some(self.employees.remove(index))
        } else {
            None
        }
    }

    /// Replace the employee at `index`, keeping its position.
    pub fn replace_employee(&mut self, index: usize, employee: Employee) -> Option<Employee> {
        let slot = self.employees.get_mut(index)?;
        Some(std::mem::replace(slot, employee))
    }

    pub fn set_days_required(&mut self, days: u32) {
        self.days_required = days;
    }

    pub fn set_sanding_cost_per_sqft(&mut self, rate: f64) {
        self.sanding_cost_per_sqft = rate;
    }

    pub fn set_customer_provides_material(&mut self, provides: bool) {
        self.customer_provides_material = provides;
    }

    pub fn set_material_cost_per_sqft(&mut self, rate: f64) {
        self.material_cost_per_sqft = rate;
    }

    pub fn set_pickup_fee(&mut self, fee: f64) {
        self.pickup_fee = fee;
    }

    /// Reset to an empty job.
    pub fn clear(&mut self) {
        *self = Job::default();
    }

    /// Sum of every room's usable area (negative rooms included).
    pub fn total_floor_space(&self) -> f64 {
        self.rooms.iter().map(Room::usable_area).sum()
    }

    /// Scheduled hours per employee.
    pub fn total_hours(&self) -> u64 {
        u64::from(self.days_required) * HOURS_PER_WORKDAY
    }

    /// Sum of every employee's hourly rate.
    pub fn combined_hourly_rate(&self) -> f64 {
        self.employees.iter().map(|e| e.hourly_rate).sum()
    }

    /// Check that there is something to estimate.
    ///
    /// Breakdowns of an empty job are valid (all zeros); collectors use this
    /// to warn the user before calculating.
    pub fn check_ready(&self) -> EstimateResult<()> {
        if self.rooms.is_empty() {
            return Err(EstimateError::missing_data("rooms"));
        }
        if self.employees.is_empty() {
            return Err(EstimateError::missing_data("employees"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn living_room() -> Room {
        Room::new("Living Room", 500.0).with_obstacle(Obstacle::new("Fireplace", 50.0))
    }

    #[test]
    fn test_job_defaults() {
        let job = Job::new();
        assert!(job.rooms.is_empty());
        assert!(job.employees.is_empty());
        assert_eq!(job.days_required, 0);
        assert!(job.customer_provides_material);
        assert_eq!(job.sanding_cost_per_sqft, 0.0);
        assert_eq!(job.material_cost_per_sqft, 0.0);
        assert_eq!(job.pickup_fee, 0.0);
    }

    #[test]
    fn test_usable_area() {
        let room = living_room()
            .with_obstacle(Obstacle::new("Closet", 20.0))
            .with_obstacle(Obstacle::new("Island", 12.5));
        assert!((room.obstacle_area() - 82.5).abs() < 1e-9);
        assert!((room.usable_area() - 417.5).abs() < 1e-9);
    }

    #[test]
    fn test_negative_usable_area_not_clamped() {
        let mut job = Job::new();
        job.add_room(Room::new("Alcove", 100.0).with_obstacle(Obstacle::new("Built-in", 150.0)));
        assert_eq!(job.total_floor_space(), -50.0);

        job.add_room(Room::new("Hall", 80.0));
        assert_eq!(job.total_floor_space(), 30.0);
    }

    #[test]
    fn test_floor_space_order_independent() {
        let mut forward = Job::new();
        let mut reverse = Job::new();
        let rooms = vec![
            living_room(),
            Room::new("Den", 180.25),
            Room::new("Hall", 64.0).with_obstacle(Obstacle::new("Radiator", 3.5)),
        ];
        for room in rooms.iter().cloned() {
            forward.add_room(room);
        }
        for room in rooms.into_iter().rev() {
            reverse.add_room(room);
        }
        assert!((forward.total_floor_space() - reverse.total_floor_space()).abs() < 1e-9);
    }

    #[test]
    fn test_add_obstacle_by_index() {
        let mut job = Job::new();
        let idx = job.add_room(Room::new("Kitchen", 200.0));
        assert_eq!(job.add_obstacle(idx, Obstacle::new("Island", 24.0)), Some(0));
        assert_eq!(job.rooms[idx].usable_area(), 176.0);
        assert_eq!(job.add_obstacle(7, Obstacle::new("Ghost", 1.0)), None);
    }

    #[test]
    fn test_remove_and_replace() {
        let mut job = Job::new();
        job.add_room(living_room());
        job.add_room(Room::new("Den", 150.0));
        job.add_employee(Employee::new("Alice", 25.0));
        job.add_employee(Employee::new("Bob", 30.0));

        let old = job.replace_room(1, Room::new("Study", 120.0)).unwrap();
        assert_eq!(old.name, "Den");
        assert_eq!(job.rooms[1].name, "Study");

        let removed = job.remove_room(0).unwrap();
        assert_eq!(removed.name, "Living Room");
        assert_eq!(job.rooms.len(), 1);
        assert!(job.remove_room(5).is_none());

        job.replace_employee(0, Employee::new("Carol", 28.0));
        assert_eq!(job.remove_employee(1).unwrap().name, "Bob");
        assert_eq!(job.employees[0].name, "Carol");
        assert!(job.replace_employee(3, Employee::new("Dan", 1.0)).is_none());
    }

    #[test]
    fn test_hours_and_rates() {
        let mut job = Job::new();
        job.add_employee(Employee::new("Alice", 25.0));
        job.add_employee(Employee::new("Bob", 30.0));
        job.set_days_required(5);
        assert_eq!(job.total_hours(), 40);
        assert_eq!(job.combined_hourly_rate(), 55.0);
    }

    #[test]
    fn test_check_ready() {
        let mut job = Job::new();
        assert_eq!(job.check_ready(), Err(EstimateError::missing_data("rooms")));
        job.add_room(living_room());
        assert_eq!(job.check_ready(), Err(EstimateError::missing_data("employees")));
        job.add_employee(Employee::new("Alice", 25.0));
        assert!(job.check_ready().is_ok());
    }

    #[test]
    fn test_clear() {
        let mut job = Job::new();
        job.add_room(living_room());
        job.set_customer_provides_material(false);
        job.set_pickup_fee(75.0);
        job.clear();
        assert_eq!(job, Job::default());
    }

    #[test]
    fn test_job_serialization() {
        let mut job = Job::new();
        job.add_room(living_room());
        job.add_employee(Employee::new("Alice", 25.0));
        let json = serde_json::to_string_pretty(&job).unwrap();
        assert!(json.contains("total_area_sqft"));
        assert!(json.contains("Fireplace"));

        let roundtrip: Job = serde_json::from_str(&json).unwrap();
        assert_eq!(roundtrip, job);
    }

    #[test]
    fn test_sparse_json_uses_defaults() {
        let job: Job = serde_json::from_str(r#"{"days_required": 3}"#).unwrap();
        assert_eq!(job.days_required, 3);
        assert!(job.customer_provides_material);
        assert!(job.rooms.is_empty());
    }
}
