//! # Text Reports
//!
//! Plain-text renderings of a job: the review screen shown before
//! calculating, and the final cost report. Money is shown to the cent with
//! thousands separators; the underlying numbers are never rounded.
//!
//! ## Example
//!
//! ```rust
//! use floor_core::job::{Job, Room};
//! use floor_core::report::{format_currency, render_cost_report};
//!
//! let mut job = Job::new();
//! job.add_room(Room::new("Den", 200.0));
//! job.set_sanding_cost_per_sqft(1.5);
//!
//! let text = render_cost_report(&job);
//! assert!(text.contains("TOTAL PROJECT COST:  $300.00"));
//! assert_eq!(format_currency(1234567.891), "$1,234,567.89");
//! ```

use std::fmt;

use crate::estimate::HOURS_PER_WORKDAY;
use crate::job::Job;
use crate::units::SquareFeet;

const RULE_WIDTH: usize = 60;

/// Format as dollars: `$1,234.56`, negatives as `-$50.00`.
pub fn format_currency(value: f64) -> String {
    let fixed = format!("{:.2}", value.abs());
    let (whole, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if value < 0.0 && fixed != "0.00" { "-" } else { "" };
    format!("{sign}${grouped}.{cents}")
}

/// Cost report for a job.
pub struct CostReport<'a>(pub &'a Job);

/// Pre-calculation review of a job's inputs.
pub struct Review<'a>(pub &'a Job);

pub fn render_cost_report(job: &Job) -> String {
    CostReport(job).to_string()
}

pub fn render_review(job: &Job) -> String {
    Review(job).to_string()
}

fn banner(f: &mut fmt::Formatter<'_>, title: &str) -> fmt::Result {
    writeln!(f, "{}", "=".repeat(RULE_WIDTH))?;
    writeln!(f, "{title:^width$}", width = RULE_WIDTH)?;
    writeln!(f, "{}", "=".repeat(RULE_WIDTH))
}

impl fmt::Display for CostReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let job = self.0;
        let b = job.breakdown();

        banner(f, "FLOORING PROJECT COST ESTIMATE")?;

        writeln!(f)?;
        writeln!(f, "FLOOR SPACE:")?;
        writeln!(f, "   Total Usable Area: {}", SquareFeet(b.total_floor_space_sqft))?;

        if !job.rooms.is_empty() {
            writeln!(f)?;
            writeln!(f, "   Room Breakdown:")?;
            for room in &job.rooms {
                writeln!(f, "   {}: {} usable", room.name, SquareFeet(room.usable_area()))?;
                let excluded = SquareFeet(room.obstacle_area());
                if excluded.value() > 0.0 {
                    writeln!(f, "     (Excluding {excluded} of obstacles)")?;
                }
            }
        }

        writeln!(f)?;
        writeln!(f, "COST BREAKDOWN:")?;
        writeln!(f, "   Sanding Cost:        {}", format_currency(b.sanding_cost))?;
        writeln!(
            f,
            "     ({} × {}/sq ft)",
            SquareFeet(b.total_floor_space_sqft),
            format_currency(b.sanding_cost_per_sqft)
        )?;
        writeln!(f, "   Labor Cost:          {}", format_currency(b.labor_cost))?;
        writeln!(
            f,
            "     ({} hours × {}/hour crew rate)",
            job.total_hours(),
            format_currency(job.combined_hourly_rate())
        )?;
        if b.customer_provides_material {
            writeln!(f, "   Material Cost:       $0.00 (Customer provides material)")?;
        } else {
            writeln!(f, "   Material Cost:       {}", format_currency(b.material_cost))?;
            writeln!(
                f,
                "     ({} incl. waste × {}/sq ft + {} pickup)",
                SquareFeet(b.material_needed_sqft),
                format_currency(job.material_cost_per_sqft),
                format_currency(job.pickup_fee)
            )?;
        }

        writeln!(f)?;
        writeln!(f, "{}", "─".repeat(RULE_WIDTH))?;
        writeln!(f, "   TOTAL PROJECT COST:  {}", format_currency(b.total_cost))?;
        writeln!(f, "{}", "=".repeat(RULE_WIDTH))
    }
}

impl fmt::Display for Review<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let job = self.0;

        banner(f, "REVIEW BEFORE CALCULATION")?;

        writeln!(f)?;
        writeln!(f, "FLOORS ({} rooms):", job.rooms.len())?;
        for (i, room) in job.rooms.iter().enumerate() {
            let obstacles = match room.obstacles.len() {
                0 => "no obstacles".to_string(),
                1 => "1 obstacle".to_string(),
                n => format!("{n} obstacles"),
            };
            writeln!(
                f,
                "   {}. {}: {} ({})",
                i + 1,
                room.name,
                SquareFeet(room.usable_area()),
                obstacles
            )?;
        }

        writeln!(f)?;
        writeln!(f, "EMPLOYEES ({}):", job.employees.len())?;
        for employee in &job.employees {
            writeln!(
                f,
                "   {}: {}/hour",
                employee.name,
                format_currency(employee.hourly_rate)
            )?;
        }

        writeln!(f)?;
        writeln!(f, "SCHEDULE:")?;
        writeln!(
            f,
            "   {} days × {} hours = {} total hours",
            job.days_required,
            HOURS_PER_WORKDAY,
            job.total_hours()
        )?;

        writeln!(f)?;
        writeln!(f, "COSTS:")?;
        writeln!(f, "   Sanding: {}/sq ft", format_currency(job.sanding_cost_per_sqft))?;
        if job.customer_provides_material {
            writeln!(f, "   Material: Customer provides")?;
        } else {
            writeln!(
                f,
                "   Material: {}/sq ft",
                format_currency(job.material_cost_per_sqft)
            )?;
            writeln!(f, "   Pickup Fee: {}", format_currency(job.pickup_fee))?;
        }

        writeln!(f)?;
        writeln!(f, "{}", "─".repeat(RULE_WIDTH))
    }
}
