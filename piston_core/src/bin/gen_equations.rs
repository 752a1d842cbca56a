//! Generate EQUATIONS.md from the piston equation registry.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin gen-equations
//! ```
//!
//! Run from the workspace root. The file is written to
//! `piston_core/src/equations/EQUATIONS.md`.

use std::fs;
use std::path::Path;

use piston_core::equations::registry::{Equation, ALL_EQUATIONS};
use piston_core::equations::generate_equations_markdown;

fn main() {
    println!("Generating EQUATIONS.md...");

    let markdown = generate_equations_markdown();
    let output_path = Path::new("piston_core/src/equations/EQUATIONS.md");

    match fs::write(output_path, &markdown) {
        Ok(()) => {
            println!(
                "Wrote {} equations in {} categories ({} bytes) to {}",
                ALL_EQUATIONS.len(),
                Equation::all_categories().len(),
                markdown.len(),
                output_path.display()
            );
        }
        Err(e) => {
            eprintln!("Error writing {}: {}", output_path.display(), e);
            std::process::exit(1);
        }
    }
}
