// Colored terminal output for attribution results.
//
// main.rs delegates all table formatting here.

use colored::Colorize;

use crate::matching::dataset::ReferenceSet;
use crate::matching::distance::Match;
use crate::matching::weights::FeatureWeights;
use crate::signature::features::{FeatureType, Signature};

/// Display the attributed author and, if more than one entry is given, the
/// ranking below it.
pub fn display_ranking(ranked: &[Match], top: usize) {
    let Some(best) = ranked.first() else {
        println!("No reference authors loaded.");
        return;
    };

    println!(
        "\n{} {} {}",
        "Most likely author:".bold(),
        best.author.bright_green().bold(),
        format!("(distance {:.4})", best.distance).dimmed()
    );

    if top <= 1 {
        return;
    }

    println!();
    println!(
        "  {:>4}  {:<32} {:>10}",
        "Rank".dimmed(),
        "Author".dimmed(),
        "Distance".dimmed()
    );
    println!("  {}", "-".repeat(50).dimmed());

    for (i, m) in ranked.iter().take(top).enumerate() {
        let name = super::truncate_chars(&m.author, 30);
        let distance = format!("{:>10.4}", m.distance);
        let colored_distance = if i == 0 {
            distance.bright_green()
        } else {
            distance.normal()
        };
        println!("  {:>4}. {:<32} {}", i + 1, name, colored_distance);
    }
    println!();
}

/// Display two signatures side by side with the weight applied to each
/// feature and the resulting weighted distance.
pub fn display_comparison(
    first: &Signature,
    second: &Signature,
    weights: &FeatureWeights,
    distance: f64,
) {
    println!("\n{}", "=== Signature Comparison ===".bold());
    println!();
    println!(
        "  {:<30} {:>10} {:>10} {:>8}",
        "Feature".dimmed(),
        "First".dimmed(),
        "Second".dimmed(),
        "Weight".dimmed()
    );
    for (feature, weight) in FeatureType::ALL.into_iter().zip(weights.values()) {
        println!(
            "  {:<30} {:>10.4} {:>10.4} {:>8.2}",
            feature.label(),
            first.get(feature),
            second.get(feature),
            weight
        );
    }
    println!();
    println!("  Weighted distance: {}", format!("{distance:.4}").bold());
}

/// List the reference authors and their signatures.
pub fn display_references(references: &ReferenceSet) {
    if references.is_empty() {
        println!("Reference dataset is empty.");
        return;
    }

    println!(
        "\n{}",
        format!("=== Reference Dataset ({} authors) ===", references.len()).bold()
    );
    println!();

    for entry in references {
        let values: Vec<String> = entry
            .signature
            .values()
            .iter()
            .map(|v| format!("{v:.3}"))
            .collect();
        println!(
            "  {:<32} {}",
            super::truncate_chars(&entry.author, 30),
            values.join("  ").dimmed()
        );
    }
    println!();
}
