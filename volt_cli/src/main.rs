//! # Voltcalc CLI Application
//!
//! Terminal-based interface for field electrical calculations.
//! Built with Ratatui for a rich TUI experience.
//!
//! ## Status
//!
//! This is a placeholder. The TUI will be implemented after
//! volt_core and a front end are functional.

use std::io::{self, BufRead, Write};

use volt_core::calculations::voltage_drop::{calculate, VoltageDropInput};
use volt_core::calculations::Phase;
use volt_core::materials::{ConductorMaterial, WireSize};
use volt_core::network::{default_tree, diagram, format_ohms, reduce};

fn prompt_f64(prompt: &str, default: f64) -> f64 {
    print!("{}", prompt);
    if io::stdout().flush().is_err() {
        return default;
    }

    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input).is_err() {
        return default;
    }

    input.trim().parse().unwrap_or(default)
}

fn main() {
    println!("Voltcalc CLI - Field Electrical Calculator");
    println!("==========================================");
    println!();
    println!("TUI not yet implemented. Running simple CLI demo...");
    println!();

    let source_volts = prompt_f64("Enter source voltage (V) [480.0]: ", 480.0);
    let load_amps = prompt_f64("Enter load current (A) [40.0]: ", 40.0);
    let length_ft = prompt_f64("Enter one-way length (ft) [150.0]: ", 150.0);

    println!();
    println!("Calculating 6 AWG copper, three-phase at 75°C...");
    println!();

    let input = VoltageDropInput {
        label: "CLI-Demo".to_string(),
        phase: Phase::ThreePhase,
        material: ConductorMaterial::Copper,
        size: WireSize::Awg6,
        source_volts,
        load_amps,
        one_way_length_ft: length_ft,
        conductor_temp_c: 75.0,
    };

    match calculate(&input) {
        Ok(result) => {
            println!("═══════════════════════════════════════");
            println!("  VOLTAGE DROP RESULTS");
            println!("═══════════════════════════════════════");
            println!();
            println!("Input:");
            println!("  Source:   {:.1} V (3φ)", input.source_volts);
            println!("  Load:     {:.1} A", input.load_amps);
            println!("  Run:      {:.0} ft one-way, 6 AWG Cu", input.one_way_length_ft);
            println!();
            println!("Results:");
            println!("  R used:   {:.4} Ω / 1000 ft", result.ohms_per_1000_ft);
            println!("  Drop:     {:.3} V ({:.2}%)", result.drop_volts, result.drop_percent);
            println!("  At load:  {:.3} V", result.load_volts);
            println!();
            println!("═══════════════════════════════════════");
            println!("  RESULT: {} (3% limit)",
                if result.within_limit(3.0) { "PASS" } else { "FAIL" }
            );
            println!("═══════════════════════════════════════");

            println!();
            println!("JSON Output (for LLM/API use):");
            if let Ok(json) = serde_json::to_string_pretty(&result) {
                println!("{}", json);
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            if let Ok(json) = serde_json::to_string_pretty(&e) {
                eprintln!();
                eprintln!("Error JSON:");
                eprintln!("{}", json);
            }
        }
    }

    // Resistance network demo: the default example tree
    println!();
    println!("Resistance network demo:");
    let tree = default_tree();
    for line in diagram(&tree) {
        println!("  {}", line);
    }
    match reduce(&tree) {
        Ok(total) => println!("  Total R = {}", format_ohms(total.0)),
        Err(e) => eprintln!("  Error: {}", e),
    }
}
