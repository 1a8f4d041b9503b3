use anyhow::{Context, Result};
use colored::Colorize;
use std::path::Path;
use tracing::{debug, info, warn};

use snippets::basics::{
    concatenate_arrays, day_type, filter_by_rating, format_string, format_string_default,
    most_expensive, process_value, Book, Car, Day, Product,
};
use snippets::{logging, Config, DelayedSquare};

const CONFIG_FILE: &str = "snippets.toml";

/* ============================================================
 * Synchronous snippets
 * ============================================================
 */

fn run_basics() -> Result<()> {
    debug!("casing");
    println!("{}", format_string_default("Hello"));
    println!("{}", format_string("Hello", true));
    println!("{}", format_string("Hello", false));

    debug!("filtering");
    let books = vec![
        Book::new("Book A", 4.5),
        Book::new("Book B", 3.2),
        Book::new("Book C", 5.0),
    ];
    let high_rated = filter_by_rating(&books);
    println!("{}", serde_json::to_string_pretty(&high_rated)?);

    debug!("concatenation");
    println!("{:?}", concatenate_arrays(vec![vec!["a", "b"], vec!["c"]]));
    println!("{:?}", concatenate_arrays(vec![vec![1, 2], vec![3, 4], vec![5]]));

    debug!("hierarchy");
    let my_car = Car::new("Toyota", 2020, "Corolla");
    println!("{}", my_car.info());
    println!("{}", my_car.model());

    debug!("dispatcher");
    println!("{}", process_value("hello"));
    println!("{}", process_value(10));

    debug!("reduce-max");
    let products = vec![
        Product::new("Pen", 10.0),
        Product::new("Notebook", 25.0),
        Product::new("Bag", 50.0),
    ];
    match most_expensive(&products) {
        Some(product) => println!("{}", serde_json::to_string_pretty(product)?),
        None => println!("null"),
    }

    debug!("classifier");
    println!("{}", day_type(Day::Friday));
    println!("{}", day_type(Day::Sunday));

    Ok(())
}

/* ============================================================
 * Delayed square: two independent requests
 * ============================================================
 */

async fn run_squares(squarer: DelayedSquare) -> Result<()> {
    info!(delay = ?squarer.delay(), "issuing square requests for 4 and -3");

    let handles = [4, -3].map(|n| {
        squarer.square(n).on_complete(
            |value| println!("{value}"),
            move |message| {
                warn!(input = n, "square request failed");
                eprintln!("{}", message.red());
            },
        )
    });

    for outcome in futures::future::join_all(handles).await {
        outcome.context("square handler task panicked")?;
    }
    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let config = Config::load_or_default(Path::new(CONFIG_FILE))
        .with_context(|| format!("loading {CONFIG_FILE}"))?;
    logging::init(&config.logging).context("setting up logging")?;

    run_basics()?;
    run_squares(DelayedSquare::from_config(&config.square)).await
}
