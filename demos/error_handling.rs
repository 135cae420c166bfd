//! Error handling example for tzfind
//!
//! This example demonstrates the not-found outcomes and loader errors.

use tzfind_core::prelude::*;

fn main() -> Result<()> {
    println!("=== tzfind Error Handling Example ===\n");

    let index = LocationIndex::global()?;

    // Example 1: Unknown names
    println!("--- Example 1: Names that match nothing ---");
    for query in ["Xyz", "Lpndon"] {
        match index.find_city(query) {
            Ok(found) => println!("  Found: {found:?}"),
            Err(e) => println!("  {e}"),
        }
    }
    println!();

    // Example 2: Telling not-found apart from other failures
    println!("--- Example 2: Matching on the error ---");
    match index.find_country("Atlantis") {
        Err(TzFindError::NotFound { kind, query }) => {
            println!("  no {kind:?} called {query:?}")
        }
        Err(e) => return Err(e),
        Ok(found) => println!("  Found: {found:?}"),
    }
    println!();

    // Example 3: Unknown zone abbreviations
    println!("--- Example 3: Zone abbreviations ---");
    for zone in ["pst", "qqq"] {
        match resolve_zone(index.vocabulary(), zone) {
            Ok(info) => println!("  {zone} -> {}", info.timezone),
            Err(e) => println!("  {e}"),
        }
    }
    println!();

    // Example 4: Loading a missing vocabulary file
    println!("--- Example 4: Loader errors ---");
    match Vocabulary::load_from_path("does-not-exist.json") {
        Ok(_) => println!("  unexpectedly loaded"),
        Err(e) => println!("  {e}"),
    }

    Ok(())
}
