// Copyright 2015 The Rust Project Developers. See the COPYRIGHT
// file at the top-level directory of this distribution and at
// http://rust-lang.org/COPYRIGHT.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

mod catalog;
mod cli;
mod console;
mod statement;
mod types;
mod ui;

use std::process;

fn main() {
    env_logger::init();

    // Parse CLI arguments
    let args = cli::CliArgs::parse_args();

    // Validate arguments
    if let Err(e) = args.validate() {
        ui::print_error(&e);
        process::exit(1);
    }

    // Set console width override if specified (for testing)
    if let Some(width) = args.console_width {
        console::set_console_width(width);
    }

    // Load the visible catalog (hidden rows dropped, newest first)
    let records = match catalog::load_catalog(&args.catalog) {
        Ok(records) => records,
        Err(e) => {
            ui::print_error(&e);
            process::exit(1);
        }
    };

    // --list prints the numbered catalog and stops; the numbers are what
    // --select refers to.
    if args.list {
        console::print_catalog_listing(&records);
        return;
    }

    // Resolve the selection against the catalog
    let selected = match catalog::resolve_selection(&records, &args) {
        Ok(selected) => selected,
        Err(e) => {
            ui::print_error(&e);
            process::exit(1);
        }
    };

    // Compile the statement
    let stmt = statement::compile(&selected);

    // Primary output
    if args.html {
        println!("{}", stmt.to_html());
    } else if args.text {
        println!("{}", stmt.to_text());
    } else {
        console::print_statement(&stmt, !args.no_color);
    }

    // Report files
    if let Some(ref path) = args.output_html {
        match statement::export_html_page(&stmt, path) {
            Ok(_) => ui::status(&format!("HTML page saved to: {}", path.display())),
            Err(e) => eprintln!("Warning: Failed to save HTML page: {}", e),
        }
    }

    if let Some(ref path) = args.output_json {
        match statement::export_json_report(&stmt, path, selected.len()) {
            Ok(_) => ui::status(&format!("JSON report saved to: {}", path.display())),
            Err(e) => eprintln!("Warning: Failed to save JSON report: {}", e),
        }
    }
}
