// ============================================================================
// Basic Usage Example
// ============================================================================

use idle_money::prelude::*;

fn main() -> Result<(), MoneyError> {
    #[cfg(feature = "logging")]
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .init();

    println!("=== Idle Money Example ===\n");

    // Passive income for a few ticks
    let mut wallet = Quantity::zero();
    let income = Quantity::from_tiered_magnitude(2.5, "k")?;
    println!("Income per tick: {}", income);

    for tick in 1..=5 {
        wallet = wallet.checked_add(&income)?;
        println!("  tick {}: wallet = {} ({})", tick, wallet, wallet.reduce());
    }

    // Compounding multiplier until the ladder runs past the fixed symbols
    println!("\n=== Compounding ===");
    for round in 1..=8 {
        wallet = wallet.checked_scale(1000.0)?;
        println!("  round {}: {}", round, wallet);
    }

    // Breakdown by tier
    println!("\n=== Breakdown ===");
    let odd = Quantity::from_magnitude(4_002_000_017.0)?;
    for part in odd.decompose() {
        println!("  {}", part);
    }
    println!("Rounded for display: {}", odd.round());

    // Parsing user input
    println!("\n=== Parsing ===");
    for text in ["9", "1.4k", "3M", "700aa", "1.2.3k", "5x"] {
        match text.parse::<Quantity>() {
            Ok(q) => println!("  {:>7} -> {}", text, q.reduce()),
            Err(e) => println!("  {:>7} -> error: {}", text, e),
        }
    }

    // Spending more than we have
    println!("\n=== Overspending ===");
    let price: Quantity = "1k".parse()?;
    match Quantity::from(10u32).checked_sub(&price) {
        Ok(left) => println!("Left: {}", left),
        Err(e) => println!("Cannot buy: {}", e),
    }

    // Wider display for tooltips
    let tooltip = TextCodec::new(CodecConfig::detailed())?;
    println!("\nTooltip: {}", tooltip.serialize(&odd));

    Ok(())
}
