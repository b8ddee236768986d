use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use countyprice::{Artifacts, Config, Dashboard, OceanProximity};

use crate::cli::DashboardArgs;

const HELP: &str = "commands: select <county> | age <n> | income <x> | ocean <category|auto> | submit | show | counties | quit";

#[derive(Debug, PartialEq)]
enum Command {
    Select(String),
    Age(f64),
    Income(f64),
    Ocean(Option<OceanProximity>),
    Submit,
    Show,
    Counties,
    Help,
    Quit,
}

fn parse_number(what: &str, arg: &str) -> Result<f64, String> {
    arg.parse::<f64>().map_err(|_| format!("{what} expects a number, got {arg:?}"))
}

fn parse_line(line: &str) -> Result<Option<Command>, String> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }
    let (word, arg) = match line.split_once(char::is_whitespace) {
        Some((word, arg)) => (word, arg.trim()),
        None => (line, ""),
    };

    let command = match word.to_ascii_lowercase().as_str() {
        "select" if !arg.is_empty() => Command::Select(arg.to_string()),
        "age" => Command::Age(parse_number("age", arg)?),
        "income" => Command::Income(parse_number("income", arg)?),
        "ocean" if arg.eq_ignore_ascii_case("auto") => Command::Ocean(None),
        "ocean" => Command::Ocean(Some(arg.parse().map_err(|e| format!("{e}"))?)),
        "submit" => Command::Submit,
        "show" => Command::Show,
        "counties" => Command::Counties,
        "help" => Command::Help,
        "quit" | "exit" => Command::Quit,
        _ => return Err(format!("unrecognized command {line:?}")),
    };
    Ok(Some(command))
}

fn show(dashboard: &Dashboard) -> Result<()> {
    let input = dashboard.input();
    let view = dashboard.view();
    let ocean = match input.ocean_proximity {
        Some(p) => p.to_string(),
        None => format!("auto ({})", dashboard.selected().stats.ocean_proximity),
    };

    println!("county: {} ({:.4}, {:.4}) zoom {}", dashboard.selected().name, view.longitude, view.latitude, view.zoom);
    println!("age: {}  income: {}  ocean proximity: {ocean}", input.housing_median_age, input.income);
    println!("record: {}", dashboard.sample().to_json()?);
    Ok(())
}

fn refresh_map(dashboard: &Dashboard, args: &DashboardArgs) -> Result<()> {
    if let Some(path) = &args.map {
        dashboard.write_map(path)?;
    }
    Ok(())
}

pub fn run(config: &Config, args: &DashboardArgs) -> Result<()> {
    let artifacts = Artifacts::cached(config)?;
    let mut dashboard = Dashboard::new(artifacts, config);
    refresh_map(&dashboard, args)?;

    println!("{HELP}");
    println!("selected: {}", dashboard.selected().name);

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    for line in stdin.lock().lines() {
        let line = line.context("[dashboard] Failed to read stdin")?;

        let command = match parse_line(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(message) => {
                eprintln!("error: {message}");
                continue;
            }
        };

        // input errors are reported and the session goes on
        let outcome = match command {
            Command::Select(name) => dashboard.select(&name).map(|view| {
                println!("selected: {name} ({:.4}, {:.4})", view.longitude, view.latitude);
            }),
            Command::Age(age) => dashboard.set_age(age),
            Command::Income(income) => dashboard.set_income(income),
            Command::Ocean(ocean) => {
                dashboard.set_ocean_proximity(ocean);
                Ok(())
            }
            Command::Submit => {
                let price = dashboard.submit()?;
                println!("Predicted price: ${price:.2}");
                Ok(())
            }
            Command::Show => {
                show(&dashboard)?;
                Ok(())
            }
            Command::Counties => {
                dashboard.counties().for_each(|name| println!("{name}"));
                Ok(())
            }
            Command::Help => {
                println!("{HELP}");
                Ok(())
            }
            Command::Quit => break,
        };

        match outcome {
            Ok(()) => refresh_map(&dashboard, args)?,
            Err(err) => eprintln!("error: {err}"),
        }
        stdout.flush()?;
    }

    Ok(())
}
