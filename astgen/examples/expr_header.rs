//! Prints the Dargon expression header with visitor scaffolding.
//!
//! Run with: `cargo run --example expr_header`

use astgen::dargon;
use astgen::prelude::*;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let table = dargon::expr_table()?;
    let options = dargon::expr_options()
        .visitor(VisitorOptions::new("Register&"))
        .include("\"../runtime/Register.h\"")
        .build()?;

    let document = Generator::new(&table, &options).generate()?;
    print!("{document}");

    Ok(())
}
