use clap::Args;

use crate::error::Result;
use crate::output::Printer;
use crate::types::{pick_entry, PaletteColour};

/// List the background palette
#[derive(Args, Debug)]
pub struct PaletteArgs {
    /// Mark the entry this seed selects
    #[arg(long)]
    pub seed: Option<String>,
}

pub fn run(args: PaletteArgs, printer: &Printer) -> Result<()> {
    let picked = args.seed.as_deref().map(|seed| pick_entry(Some(seed)));

    if let (Some(seed), Some(entry)) = (&args.seed, picked) {
        printer.info("Picked", &format!("{} for seed {:?}", entry, seed));
    }

    // Palette lines go to stdout
    println!("{}", format_palette(picked));

    Ok(())
}

/// One line per palette entry: index, name, hex, and a marker on `picked`.
pub fn format_palette(picked: Option<PaletteColour>) -> String {
    PaletteColour::ALL
        .iter()
        .map(|&entry| {
            let line = format!("{} {:<6} {}", entry.index(), entry.name(), entry.colour());
            if picked == Some(entry) {
                format!("{} <", line)
            } else {
                line
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_palette() {
        insta::assert_snapshot!(format_palette(None), @r"
        0 blue   #3498DB
        1 red    #E74C3C
        2 green  #2ECC71
        3 yellow #F1C40F
        4 purple #9B59B6
        5 teal   #1ABC9C
        6 pink   #E91E63
        ");
    }

    #[test]
    fn test_format_palette_marks_pick() {
        let text = format_palette(Some(pick_entry(Some("John Doe"))));
        let marked: Vec<&str> = text.lines().filter(|l| l.ends_with(" <")).collect();
        assert_eq!(marked, vec!["6 pink   #E91E63 <"]);
    }
}
