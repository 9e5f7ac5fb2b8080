//! Interactive menu around the thermostat facade.
//!
//! Thin glue only: prompts for crisp inputs, re-prompting until they parse
//! and fall inside the sensor ranges, then delegates to
//! [`Thermostat::run_once`] or [`GridScan::export`]. Generic over
//! `BufRead`/`Write` so whole menu sessions run against in-memory buffers
//! in tests.

use std::io::{BufRead, Write};
use std::path::PathBuf;

use anyhow::{bail, Result};
use tracing::info;

use crate::config::Config;
use crate::thermostat::grid::{GridScan, SweepAxis};
use crate::thermostat::{
    ClimateReading, Thermostat, HUMIDITY_RANGE, TEMP_INSIDE_RANGE, TEMP_OUTSIDE_RANGE,
};

/// Runs one pass through the menu.
pub fn run<R: BufRead, W: Write>(
    thermostat: &Thermostat,
    config: &Config,
    input: &mut R,
    output: &mut W,
) -> Result<()> {
    writeln!(output, "Menu")?;
    writeln!(output, "1. Run a single simulation")?;
    writeln!(output, "2. Export a CSV grid of results")?;
    let choice = prompt_line(input, output, "Select an option: ")?;

    match choice.as_str() {
        "1" => run_single(thermostat, input, output),
        "2" => run_grid(thermostat, config, input, output),
        other => {
            writeln!(output, "Unknown option '{other}'. Run the program again.")?;
            Ok(())
        }
    }
}

fn run_single<R: BufRead, W: Write>(
    thermostat: &Thermostat,
    input: &mut R,
    output: &mut W,
) -> Result<()> {
    let temp_inside = prompt_number(
        input,
        output,
        "Inside temperature [C] (0/40): ",
        TEMP_INSIDE_RANGE,
    )?;
    let temp_outside = prompt_number(
        input,
        output,
        "Outside temperature [C] (-10/40): ",
        TEMP_OUTSIDE_RANGE,
    )?;
    let humidity = prompt_number(input, output, "Humidity [%] (0/100): ", HUMIDITY_RANGE)?;

    let levels = thermostat.run_once(ClimateReading {
        temp_inside,
        temp_outside,
        humidity,
    });
    info!(
        temp_inside,
        temp_outside,
        humidity,
        ac_power = levels.ac_power,
        heater_power = levels.heater_power,
        "single simulation"
    );

    writeln!(output, "Simulation results:")?;
    writeln!(output, "AC power: {:.2} %", levels.ac_power)?;
    writeln!(output, "Heater power: {:.2} %", levels.heater_power)?;
    Ok(())
}

fn run_grid<R: BufRead, W: Write>(
    thermostat: &Thermostat,
    config: &Config,
    input: &mut R,
    output: &mut W,
) -> Result<()> {
    writeln!(output, "Menu")?;
    writeln!(output, "1. Sweep with a fixed outside temperature")?;
    writeln!(output, "2. Sweep with a fixed inside temperature")?;
    let choice = prompt_line(input, output, "Select an option: ")?;

    let axis = match choice.as_str() {
        "1" => SweepAxis::FixedOutside {
            temp_outside: prompt_number(
                input,
                output,
                "Fixed outside temperature [C] (-10/40): ",
                TEMP_OUTSIDE_RANGE,
            )?,
        },
        "2" => SweepAxis::FixedInside {
            temp_inside: prompt_number(
                input,
                output,
                "Fixed inside temperature [C] (0/40): ",
                TEMP_INSIDE_RANGE,
            )?,
        },
        other => {
            writeln!(output, "Unknown option '{other}'. Run the program again.")?;
            return Ok(());
        }
    };

    let default_path = config.grid.default_output.display().to_string();
    let filename = prompt_line(
        input,
        output,
        &format!("Output file (default {default_path}): "),
    )?;
    let path = if filename.is_empty() {
        config.grid.default_output.clone()
    } else {
        PathBuf::from(filename)
    };

    let rows = GridScan::new(thermostat, axis).export(&path)?;
    writeln!(output, "Wrote {} rows to {}", rows, path.display())?;
    Ok(())
}

/// Prompts until the user enters a finite number inside `range`.
fn prompt_number<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
    range: (f64, f64),
) -> Result<f64> {
    let (min, max) = range;
    loop {
        let line = prompt_line(input, output, prompt)?;
        match line.parse::<f64>() {
            Ok(value) if value.is_finite() && (min..=max).contains(&value) => return Ok(value),
            Ok(_) => writeln!(output, "Value out of range ({min}/{max}). Try again.")?,
            Err(_) => writeln!(output, "Invalid value. Enter a number.")?,
        }
    }
}

/// Writes a prompt and reads one trimmed line; EOF is an error, not a hang.
fn prompt_line<R: BufRead, W: Write>(input: &mut R, output: &mut W, prompt: &str) -> Result<String> {
    write!(output, "{prompt}")?;
    output.flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        bail!("input ended unexpectedly");
    }
    Ok(line.trim().to_string())
}
