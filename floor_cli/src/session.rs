//! Interactive estimate session: collect a job, review it, print the report.

use std::io::{BufRead, Write};

use anyhow::Result;
use floor_core::input::{parse_area, parse_days, parse_name, parse_non_negative};
use floor_core::report::{render_cost_report, render_review};
use floor_core::units::SquareFeet;
use floor_core::{Employee, EstimateError, Job, Obstacle, Room};
use tracing::{info, warn};

use crate::prompt::Prompter;

const RULE: &str = "============================================================";

/// Session behavior chosen on the command line.
#[derive(Debug, Clone, Copy)]
pub struct SessionOptions {
    /// Show the review screen and ask for confirmation before calculating
    pub review: bool,
    /// Print the breakdown as JSON after the report
    pub json: bool,
}

impl Default for SessionOptions {
    fn default() -> Self {
        SessionOptions {
            review: true,
            json: false,
        }
    }
}

/// Run estimates until the user is done or input ends.
pub fn run<R: BufRead, W: Write>(p: &mut Prompter<R, W>, options: SessionOptions) -> Result<()> {
    p.say(RULE)?;
    p.say("                FLOORING COST CALCULATOR")?;
    p.say(RULE)?;
    p.say("\nEnter project information to calculate total cost.")?;

    loop {
        let Some(job) = collect_job(p)? else {
            break;
        };

        if let Err(e) = job.check_ready() {
            warn!(error = %e, "job incomplete, skipping calculation");
            p.say(format!("\n{}", incomplete_message(&e)))?;
        } else if confirm(p, &job, options)? {
            p.say("")?;
            p.say(render_cost_report(&job))?;
            if options.json {
                p.say("JSON Output:")?;
                p.say(serde_json::to_string_pretty(&job.breakdown())?)?;
            }
            info!(total_cost = job.total_cost(), "estimate complete");
        } else {
            p.say("\nEstimate discarded.")?;
        }

        match p.ask_yes_no("\nWould you like to calculate another job? (yes/no): ")? {
            Some(true) => p.say(format!("\n{RULE}"))?,
            _ => break,
        }
    }

    p.say("\nThank you.")?;
    Ok(())
}

fn incomplete_message(error: &EstimateError) -> String {
    match error {
        EstimateError::MissingData { what } => format!("No {what} added. Skipping calculation."),
        other => other.to_string(),
    }
}

fn confirm<R: BufRead, W: Write>(
    p: &mut Prompter<R, W>,
    job: &Job,
    options: SessionOptions,
) -> Result<bool> {
    if !options.review {
        return Ok(true);
    }
    p.say("")?;
    p.say(render_review(job))?;
    let answer = p.ask_yes_no("\nDoes this look correct? (yes/no): ")?;
    Ok(answer.unwrap_or(false))
}

/// Collect one job. `None` means input ended mid-way.
///
/// Stops early (returning the partial job) when no rooms or no employees
/// were entered, so the caller can report what is missing.
pub fn collect_job<R: BufRead, W: Write>(p: &mut Prompter<R, W>) -> Result<Option<Job>> {
    let mut job = Job::new();

    if !collect_rooms(p, &mut job)? {
        return Ok(None);
    }
    if job.rooms.is_empty() {
        return Ok(Some(job));
    }

    if !collect_employees(p, &mut job)? {
        return Ok(None);
    }
    if job.employees.is_empty() {
        return Ok(Some(job));
    }

    if !collect_parameters(p, &mut job)? {
        return Ok(None);
    }
    Ok(Some(job))
}

fn is_keyword(answer: &str, keyword: &str) -> bool {
    answer.trim().eq_ignore_ascii_case(keyword)
}

fn collect_rooms<R: BufRead, W: Write>(p: &mut Prompter<R, W>, job: &mut Job) -> Result<bool> {
    p.say(format!("\n{RULE}\nROOM INFORMATION\n{RULE}"))?;

    loop {
        let Some(answer) = p.ask("\nEnter room name (or 'done' to finish): ")? else {
            return Ok(false);
        };
        if is_keyword(&answer, "done") {
            return Ok(true);
        }
        let Ok(name) = parse_name("room_name", &answer) else {
            p.say("Please enter a room name.")?;
            continue;
        };

        let prompt = format!("Enter area for {name} (sq ft, or length x width in ft): ");
        let Some(area) = p.ask_parsed(&prompt, |t| parse_area("room_area", t))? else {
            return Ok(false);
        };
        let index = job.add_room(Room::new(name.clone(), area.area()));

        p.say(format!("\nAdd obstacles for {name}:"))?;
        loop {
            let Some(answer) = p.ask("Enter obstacle name (or 'none' to finish): ")? else {
                return Ok(false);
            };
            if is_keyword(&answer, "none") {
                break;
            }
            let Ok(obstacle_name) = parse_name("obstacle_name", &answer) else {
                continue;
            };

            let prompt = format!("Enter area for {obstacle_name} (sq ft, or length x width in ft): ");
            let Some(area) = p.ask_parsed(&prompt, |t| parse_area("obstacle_area", t))? else {
                return Ok(false);
            };
            job.add_obstacle(index, Obstacle::new(obstacle_name.clone(), area.area()));
            p.say(format!("Added {obstacle_name} ({})", SquareFeet(area.area())))?;
        }

        let usable = SquareFeet(job.rooms[index].usable_area());
        p.say(format!("\nAdded {name}: {usable} usable area"))?;
    }
}

fn collect_employees<R: BufRead, W: Write>(p: &mut Prompter<R, W>, job: &mut Job) -> Result<bool> {
    p.say(format!("\n{RULE}\nEMPLOYEE INFORMATION\n{RULE}"))?;

    loop {
        let Some(answer) = p.ask("\nEnter employee name (or 'done' to finish): ")? else {
            return Ok(false);
        };
        if is_keyword(&answer, "done") {
            return Ok(true);
        }
        let Ok(name) = parse_name("employee_name", &answer) else {
            p.say("Please enter a name.")?;
            continue;
        };

        let prompt = format!("Enter hourly rate for {name} ($): ");
        let Some(rate) = p.ask_parsed(&prompt, |t| parse_non_negative("hourly_rate", t))? else {
            return Ok(false);
        };
        job.add_employee(Employee::new(name.clone(), rate));
        p.say(format!("Added {name}: ${rate:.2}/hour"))?;
    }
}

fn collect_parameters<R: BufRead, W: Write>(p: &mut Prompter<R, W>, job: &mut Job) -> Result<bool> {
    p.say(format!("\n{RULE}\nJOB PARAMETERS\n{RULE}"))?;

    let Some(days) = p.ask_parsed("\nHow many 8-hour days will the job take? ", |t| {
        parse_days("days_required", t)
    })?
    else {
        return Ok(false);
    };
    job.set_days_required(days);

    let Some(sanding) = p.ask_parsed("Enter sanding cost per sq ft ($): ", |t| {
        parse_non_negative("sanding_cost_per_sqft", t)
    })?
    else {
        return Ok(false);
    };
    job.set_sanding_cost_per_sqft(sanding);

    p.say("\nMaterial Information:")?;
    let Some(customer_provides) = p.ask_yes_no("Will the customer provide the wood? (yes/no): ")?
    else {
        return Ok(false);
    };
    job.set_customer_provides_material(customer_provides);
    if customer_provides {
        return Ok(true);
    }

    let Some(rate) = p.ask_parsed("Enter material cost per sq ft ($): ", |t| {
        parse_non_negative("material_cost_per_sqft", t)
    })?
    else {
        return Ok(false);
    };
    job.set_material_cost_per_sqft(rate);

    let Some(fee) = p.ask_parsed("Enter pickup/delivery fee ($): ", |t| {
        parse_non_negative("pickup_fee", t)
    })?
    else {
        return Ok(false);
    };
    job.set_pickup_fee(fee);

    Ok(true)
}
