//! Basic PAN inspection example.
//!
//! Run with: `cargo run --example basic`

use pan_info::{from_dashed, from_fragments, from_masked, from_raw, Pan, PanError};

fn show(label: &str, result: Result<Pan, PanError>) {
    println!("{}", label);
    match result {
        Ok(pan) => {
            println!("  Card Type:  {}", pan.card_type());
            println!("  PAN:        {}", pan.pan());
            println!("  Masked:     {}", pan.masked());
            println!("  First 6:    {}", pan.first6());
            println!("  Last 4:     {}", pan.last4());
            println!("  Validation: {}", pan.validate());
        }
        Err(e) => println!("  Error: {}", e),
    }
    println!();
}

fn main() {
    println!("=== PAN Inspection ===\n");

    show("Raw Visa number", from_raw("4000000000000002"));
    show("Dashed MasterCard number", from_dashed("2221-0000-0000-0009"));
    show("Partial fragments", from_fragments(&["3530", "11"]));
    show("First six and last four", from_masked("620000", "0004"));

    println!("=== Rejected Input ===\n");

    show("Too short", from_raw("4000"));
    show("Letter in a section", from_dashed("4000-00a0-0000-0002"));
    show("Five fragments", from_fragments(&["1", "2", "3", "4", "5"]));
    show("Short first six", from_masked("12345", "6789"));
}
