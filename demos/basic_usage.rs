//! Basic usage example for tzfind
//!
//! This example demonstrates how to:
//! - Build a trie by hand and search it
//! - Use the process-wide index over the bundled vocabulary
//! - Resolve matches to timezone identifiers

use tzfind_core::prelude::*;

fn main() -> Result<()> {
    println!("=== tzfind Basic Usage Example ===\n");

    // Example 1: A hand-built trie
    println!("--- Example 1: Searching a small trie ---");
    let trie: Trie = ["London", "Los Angeles", "Berlin"]
        .into_iter()
        .map(|name| (name, name))
        .collect();
    for query in ["london", "Lo", "Paris"] {
        let (found, matches) = trie.search_prefix(query).into_parts();
        println!("{query:>8} -> found={found} {matches:?}");
    }
    println!();

    // Example 2: The bundled vocabulary
    println!("--- Example 2: Cities and countries ---");
    let index = LocationIndex::global()?;
    println!("Cities starting with 'San': {:?}", index.find_city("San")?);
    println!("Country for 'NPL': {:?}", index.find_country("NPL")?);
    println!("Countries starting with 'United': {:?}", index.find_country("United")?);
    println!();

    // Example 3: From name to timezone
    println!("--- Example 3: Resolving timezones ---");
    match index.lookup_city("new york")? {
        Resolution::City { city, timezone, .. } => println!("{city}: {timezone}"),
        other => println!("{other:?}"),
    }
    let zone = resolve_zone(index.vocabulary(), "npt")?;
    println!("NPT: {}", zone.timezone);
    println!();

    // Example 4: The ranking primitives on their own
    println!("--- Example 4: Edit distance ---");
    println!("kitten -> sitting: {}", edit_distance("kitten", "sitting"));
    let words = ["test", "testing", "tested", "tent", "kritib"];
    println!("closest to 'test': {:?}", rank_closest("test", &words, 3));

    Ok(())
}
