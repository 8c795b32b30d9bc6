//! Find a route across an ASCII layout.
//!
//! Run: cargo run --bin route -- demos/maps/rooms.txt --budget 12

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use waypath_core::Layout;
use waypath_demos::{overlay, plan};
use waypath_search::SearchState;

/// Budget-bounded route search over an ASCII map (`#` wall, `.` floor,
/// `S` start, `G` goal).
#[derive(Debug, Parser)]
#[command(name = "route")]
struct Args {
    /// Layout file.
    layout: PathBuf,
    /// Traversal budget.
    #[arg(long, default_value_t = 16)]
    budget: i32,
    /// Stop after this many search steps.
    #[arg(long)]
    steps: Option<usize>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let text = std::fs::read_to_string(&args.layout)
        .with_context(|| format!("reading {}", args.layout.display()))?;
    let layout = Layout::parse(&text).with_context(|| format!("parsing {}", args.layout.display()))?;

    let plan = plan(&layout, args.budget, args.steps)?;
    print!("{}", overlay(&layout.map, &plan));
    match plan.state {
        SearchState::Completed => {
            let len = plan.route.as_ref().map_or(0, Vec::len);
            println!("route of {} moves found in {} steps", len.saturating_sub(1), plan.steps);
        }
        SearchState::Searching => println!("still searching after {} steps", plan.steps),
        state => println!("no route within budget {} ({state:?} after {} steps)", args.budget, plan.steps),
    }
    Ok(())
}
