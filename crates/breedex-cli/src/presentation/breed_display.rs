//! Breed table and detail rendering.

use breedex_core::BreedRecord;

use super::tables::{print_separator, truncate_string};

const FAVORITE_MARK: &str = "★";

/// Format an average lifespan for display.
pub fn format_lifespan(years: f64) -> String {
    if years > 0.0 {
        format!("{years:.1} years")
    } else {
        "--".to_string()
    }
}

fn or_dash(value: &str) -> &str {
    if value.trim().is_empty() { "--" } else { value }
}

/// Print breeds as a table, one row per breed.
pub fn print_breed_table(breeds: &[BreedRecord]) {
    println!(
        "{:<2} {:<8} {:<28} {:<18} {:<14} Temperament",
        "", "ID", "Name", "Origin", "Lifespan"
    );
    print_separator(100);

    for breed in breeds {
        let mark = if breed.is_favorite { FAVORITE_MARK } else { "" };
        println!(
            "{:<2} {:<8} {:<28} {:<18} {:<14} {}",
            mark,
            truncate_string(&breed.id, 8),
            truncate_string(&breed.name, 27),
            truncate_string(or_dash(&breed.origin), 17),
            truncate_string(or_dash(&breed.life_span), 13),
            truncate_string(or_dash(&breed.temperament), 30),
        );
    }
}

/// Print the full detail view of a breed followed by its gallery.
pub fn display_breed_details(breed: &BreedRecord, gallery: &[String]) {
    let favorite = if breed.is_favorite {
        format!(" {FAVORITE_MARK}")
    } else {
        String::new()
    };

    println!("{}{favorite}", breed.name);
    print_separator(60);
    println!("  ID:          {} ({})", breed.id, breed.species);
    println!("  Origin:      {}", or_dash(&breed.origin));
    println!("  Lifespan:    {}", or_dash(&breed.life_span));

    let traits: Vec<&str> = breed.traits().collect();
    if traits.is_empty() {
        println!("  Temperament: --");
    } else {
        println!("  Temperament: {}", traits.join(", "));
    }

    if let Some(url) = &breed.image_url {
        println!("  Image:       {url}");
    }

    if !breed.description.trim().is_empty() {
        println!();
        println!("{}", breed.description.trim());
    }

    println!();
    if gallery.is_empty() {
        println!("No gallery images available.");
    } else {
        println!("Gallery ({} image(s)):", gallery.len());
        for url in gallery {
            println!("  {url}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_lifespan() {
        assert_eq!(format_lifespan(12.5), "12.5 years");
        assert_eq!(format_lifespan(11.0), "11.0 years");
        assert_eq!(format_lifespan(0.0), "--");
    }

    #[test]
    fn test_or_dash() {
        assert_eq!(or_dash("  "), "--");
        assert_eq!(or_dash("Egypt"), "Egypt");
    }
}
