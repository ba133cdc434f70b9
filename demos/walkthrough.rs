//! Prints the closure and first-class function walkthrough.
//!
//! ```sh
//! cargo run --example walkthrough -- closures --log-level debug
//! ```

use clap::Parser;
use hofkit::logging::{self, LogLevel};
use hofkit::prelude::*;

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    /// Which part of the walkthrough to run.
    #[clap(value_enum, default_value_t = Demo::All)]
    demo: Demo,
    /// Logging verbosity. `RUST_LOG` overrides it.
    #[clap(long, short, value_enum, default_value_t = LogLevel::Info)]
    log_level: LogLevel,
}

#[derive(clap::ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum Demo {
    All,
    Filters,
    Closures,
    Formatters,
    Decorators,
}

fn filters() -> Result<()> {
    let input: [i64; 6] = [1, 2, 3, 4, 5, 6];
    println!("even: {:?}", input.filter(&even()));
    println!("greater than 3: {:?}", input.filter(&greater_than(3)));
    println!("multiples of 3: {:?}", input.filter(&multiple_of(3)?));
    Ok(())
}

fn closures() {
    let hi = message("Hi");
    let hello = message("Hello");
    println!("{}", hi());
    println!("{}", hello());
    println!("{}", logger("Hi!")());

    let nums = [1_i64, 2, 3, 4, 5];
    println!("squares: {:?}", map_with(&nums, |x| x * x));
    println!("cubes: {:?}", map_with(&nums, |x| x * x * x));
}

fn formatters() -> Result<()> {
    let print_h1 = tag_wrapper("h1")?;
    for line in ["Test Headline", "Another Headline"].map_all(&print_h1) {
        println!("{line}");
    }
    let print_p = tag_wrapper("p")?;
    println!("{}", print_p.apply("Test Paragraph"));
    Ok(())
}

fn decorators() {
    let display = decorate("display", |()| println!("display function ran"));
    let display_info = decorate("display_info", |(name, age): (&str, u32)| {
        println!("display info ran with arguments ({name}, {age})");
    });
    display_info.call(("MD", 36));
    display.call(());
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init(cli.log_level)?;
    tracing::debug!(demo = ?cli.demo, "starting walkthrough");

    let all = cli.demo == Demo::All;
    if all || cli.demo == Demo::Filters {
        filters()?;
    }
    if all || cli.demo == Demo::Closures {
        closures();
    }
    if all || cli.demo == Demo::Formatters {
        formatters()?;
    }
    if all || cli.demo == Demo::Decorators {
        decorators();
    }
    Ok(())
}
