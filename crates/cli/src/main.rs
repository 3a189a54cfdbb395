use std::io::Read;

use clap::{Parser, Subcommand};
use stroke_risk_core::{
    constants::TIMEFRAME_MONTHS, educational_content, recommend, risk_factors, AssessmentError,
    RiskInput, RiskService, SymptomType,
};

#[derive(Parser)]
#[command(name = "stroke-risk")]
#[command(about = "Six-month stroke risk estimator CLI")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Assess one set of answers
    Assess {
        /// JSON file with the answers, or `-` for stdin
        #[arg(long)]
        input: String,
        /// Print the full outcome and recommendations as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show stroke symptoms and emergency contacts
    Education {
        /// Symptom group (typical or atypical)
        #[arg(long)]
        category: Option<SymptomType>,
    },
    /// List the modifiable risk factors
    Factors,
}

fn read_input(path: &str) -> Result<RiskInput, Box<dyn std::error::Error>> {
    let raw = if path == "-" {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        std::fs::read_to_string(path)?
    };
    Ok(serde_json::from_str(&raw)?)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Assess { input, json }) => {
            let input = read_input(&input)?;
            let outcome = match RiskService::new().assess_checked(&input) {
                Ok(outcome) => outcome,
                Err(AssessmentError::InvalidInput(violations)) => {
                    for violation in violations {
                        eprintln!("Invalid input: {}", violation);
                    }
                    std::process::exit(1);
                }
                Err(e) => return Err(e.into()),
            };
            let recommendations = recommend(outcome.risk_category, &input);

            if json {
                let doc = serde_json::json!({
                    "risk_category": outcome.risk_category,
                    "risk_percentage": outcome.reported_percentage(),
                    "risk_description": outcome.risk_description,
                    "components": outcome.components,
                    "timeframe_months": TIMEFRAME_MONTHS,
                    "bmi": input.bmi(),
                    "recommendations": recommendations,
                });
                println!("{}", serde_json::to_string_pretty(&doc)?);
            } else {
                println!(
                    "{}: {:.1}% over {} months",
                    outcome.risk_description,
                    outcome.reported_percentage(),
                    TIMEFRAME_MONTHS
                );
                println!(
                    "Baseline 10-year: {:.1}%, acute x{:.3}, chronic x{:.3}, BMI {:.1}",
                    outcome.components.base_ten_year,
                    outcome.components.acute_adjustment,
                    outcome.components.chronic_correction,
                    input.bmi()
                );
                println!();
                println!("{}", recommendations.general);
                for action in &recommendations.actions {
                    println!(
                        "  {}. {} ({}): {}",
                        action.priority, action.title, action.frequency, action.description
                    );
                }
                println!();
                println!("{}", recommendations.emergency_advice);
            }
        }
        Some(Commands::Education { category }) => {
            let content = educational_content(category);
            for (heading, symptoms) in [
                ("Typical symptoms", &content.typical_symptoms),
                ("Atypical symptoms", &content.atypical_symptoms),
            ] {
                if symptoms.is_empty() {
                    continue;
                }
                println!("{}:", heading);
                for s in symptoms {
                    println!("  {} {}: {}", s.icon, s.title, s.description);
                }
            }
            println!("Emergency contacts:");
            for c in &content.emergency_contacts {
                println!("  {} {} ({})", c.number, c.name, c.description);
            }
        }
        Some(Commands::Factors) => {
            for factor in risk_factors() {
                println!("{} [{} impact]: {}", factor.name, factor.impact, factor.description);
                for tip in &factor.control_tips {
                    println!("  - {}", tip);
                }
            }
        }
        None => {
            println!("Use 'stroke-risk --help' for commands");
        }
    }

    Ok(())
}
