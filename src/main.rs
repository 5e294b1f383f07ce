// Barbershop binary.
//
// Reads the chair count from stdin, runs the simulation with the reference
// second-scale timings, and shuts down on Enter or Ctrl+C.

use std::io::{self, BufRead, Write};

use barbershop::{BarberShop, EventLog, ShopConfig};

/// Prompt for and parse the waiting-room capacity.
///
/// Returns `None` for non-positive or unparsable input; that is a
/// configuration error handled by exiting cleanly before any thread starts.
fn read_chair_count() -> io::Result<Option<usize>> {
    print!("Please enter the number of seats in the waiting room: ");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    match line.trim().parse::<i64>() {
        Ok(n) if n > 0 => Ok(Some(n as usize)),
        _ => Ok(None),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let Some(chairs) = read_chair_count()? else {
        println!("The number of chairs should be a positive integer!");
        return Ok(());
    };

    let config = ShopConfig {
        chairs,
        ..ShopConfig::default()
    };
    let shop = BarberShop::new(config, EventLog::stdout())?;
    shop.start()?;

    // Ctrl+C triggers the same coordinated shutdown as pressing Enter.
    let coordinator = shop.coordinator();
    ctrlc::set_handler(move || coordinator.request())?;

    println!("Press Enter to close the shop...");
    let mut line = String::new();
    let _ = io::stdin().lock().read_line(&mut line);

    shop.shutdown();
    shop.join();

    Ok(())
}
