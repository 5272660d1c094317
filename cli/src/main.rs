//! City Simulator CLI - interactive console front-end.
//!
//! Runs a console menu in a loop: advance the simulation one day per
//! command, grow infrastructure, and print city and budget reports. All
//! simulation logic lives in the core crate; this binary only reads input,
//! calls a method, and prints output.

use std::io::{self, BufRead, Write};

use clap::Parser;

use city_simulator_core_rs::{CityBudget, DayResult, Orchestrator, OrchestratorConfig};

/// City Simulator - a settlement's daily life, one day per command
#[derive(Parser, Debug)]
#[command(name = "city-sim")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Random seed for the simulation
    #[arg(short, long, default_value = "12345")]
    seed: u64,

    /// Citizens present at the start
    #[arg(short, long, default_value = "50")]
    population: usize,

    /// Starting water facilities
    #[arg(long, default_value = "2")]
    water: usize,

    /// Starting electricity facilities
    #[arg(long, default_value = "2")]
    electricity: usize,

    /// Starting housing units
    #[arg(long, default_value = "30")]
    housing: usize,
}

fn main() {
    let args = Args::parse();

    let config = OrchestratorConfig {
        rng_seed: args.seed,
        initial_population: args.population,
        water_facilities: args.water,
        electricity_facilities: args.electricity,
        housing_units: args.housing,
        ..OrchestratorConfig::default()
    };

    let mut orchestrator = match Orchestrator::new(config) {
        Ok(orchestrator) => orchestrator,
        Err(err) => {
            eprintln!("failed to start simulation: {}", err);
            std::process::exit(1);
        }
    };
    let mut budget = CityBudget::new();

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print_menu();
        let Some(Ok(line)) = lines.next() else {
            break;
        };

        match line.trim().to_lowercase().as_str() {
            "1" => {
                let result = orchestrator.advance_day();
                budget.update(orchestrator.city());
                print_day_notices(&result);
                print_city_report(&orchestrator);
            }
            "2" => {
                if let Some(amount) = prompt_amount(&mut lines) {
                    report(orchestrator.add_electricity_facilities(amount));
                }
            }
            "3" => {
                if let Some(amount) = prompt_amount(&mut lines) {
                    report(orchestrator.add_water_facilities(amount));
                }
            }
            "4" => {
                if let Some(amount) = prompt_amount(&mut lines) {
                    report(orchestrator.add_housing_units(amount));
                }
            }
            "5" => print_budget_report(&budget),
            "x" => break,
            _ => println!("Invalid input"),
        }
    }
}

fn print_menu() {
    println!("Options:");
    println!("1: Advance Day");
    println!("2: Add Electrical Facilities");
    println!("3: Add Water Facilities");
    println!("4: Add Housing Units");
    println!("5: Budget Report");
    println!("X: Exit");
    print!("Choose an option: ");
    let _ = io::stdout().flush();
}

/// Read one number from the input; None means "no action" (bad input or
/// end of input, which the main loop detects on its next read)
fn prompt_amount(lines: &mut impl Iterator<Item = io::Result<String>>) -> Option<i64> {
    print!("How many? ");
    let _ = io::stdout().flush();
    let line = lines.next()?.ok()?;
    match line.trim().parse() {
        Ok(amount) => Some(amount),
        Err(_) => {
            println!("Not a number, ignoring");
            None
        }
    }
}

fn report(result: Result<(), city_simulator_core_rs::CityError>) {
    if let Err(err) = result {
        println!("Rejected: {}", err);
    }
}

fn print_day_notices(result: &DayResult) {
    if result.newcomers > 0 {
        println!(
            "{} new individuals have moved into the city!",
            result.newcomers
        );
    }
    for _ in 0..result.leavers {
        println!("A citizen has left the city.");
    }
    if result.disaster_struck {
        println!("A disaster has struck the city!");
    }
}

fn print_city_report(orchestrator: &Orchestrator) {
    let city = orchestrator.city();
    let citizens = city.population().citizens();

    let sick = citizens.iter().filter(|c| c.is_sick()).count();
    let without_water = citizens.iter().filter(|c| !c.has_water()).count();
    let without_electricity = citizens.iter().filter(|c| !c.has_electricity()).count();
    let without_home = citizens.iter().filter(|c| !c.has_home()).count();

    println!("\n--- City Stats (day {}) ---", orchestrator.current_day());
    println!("Total Population: {}", citizens.len());
    println!("Average Happiness: {:.2}", city.average_happiness());
    println!("Sick Individuals: {}", sick);
    println!("Without Water: {}", without_water);
    println!("Without Electricity: {}", without_electricity);
    println!("Without Home: {}", without_home);
    println!("---------------------\n");
}

fn print_budget_report(budget: &CityBudget) {
    println!("\n--- City Budget ---");
    println!("Income:      ${:>12.2}", budget.income() as f64 / 100.0);
    println!("Expenditure: ${:>12.2}", budget.expenditure() as f64 / 100.0);
    println!("Balance:     ${:>12.2}", budget.balance() as f64 / 100.0);
    println!("-------------------\n");
}
