use eyre::{bail, ensure, eyre, Result, WrapErr};
use seqweave_core_rs::alphabet::MoleculeType;

use super::{Kind, SimilarityMatrix};

const DELIMITERS: [char; 3] = [' ', '\t', ','];

fn tokens(line: &str) -> impl Iterator<Item = &str> {
    line.split(DELIMITERS).filter(|x| !x.is_empty())
}

/// Parses the text exchange format:
///
/// ```text
/// # comments and blank lines are skipped
/// NAME
/// DNA | RNA | Protein
/// A C G T
/// A  5 -4 -4 -4
/// ...
/// ```
///
/// Rows may start with their symbol. Separators are spaces, tabs or commas.
pub fn parse(text: &str) -> Result<SimilarityMatrix> {
    let mut lines = text
        .lines()
        .enumerate()
        .map(|(ind, line)| (ind + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty() && !line.starts_with('#'));

    let name = match lines.next() {
        Some((_, line)) => line.to_string(),
        None => bail!("Similarity matrix name is missing"),
    };

    let (lineno, molecule) = lines
        .next()
        .ok_or_else(|| eyre!("Molecule type of the similarity matrix {name} is missing"))?;
    let molecule: MoleculeType = molecule
        .parse()
        .wrap_err_with(|| format!("Invalid molecule type at line {lineno}"))?;

    let (lineno, header) = lines
        .next()
        .ok_or_else(|| eyre!("Symbols of the similarity matrix {name} are missing"))?;
    let mut symbols = Vec::new();
    for token in tokens(header) {
        let mut chars = token.chars();
        match (chars.next(), chars.next()) {
            (Some(symbol), None) => symbols.push(symbol),
            _ => bail!("Line {lineno}: expected a single-character symbol, got '{token}'"),
        }
    }
    ensure!(!symbols.is_empty(), "Line {lineno}: the symbol list is empty");

    let size = symbols.len();
    let mut scores = Vec::with_capacity(size * size);
    for row in 0..size {
        let (lineno, line) = lines.next().ok_or_else(|| {
            eyre!("Similarity matrix {name} has {row} rows, expected {size}")
        })?;

        let mut fields: Vec<&str> = tokens(line).collect();
        if fields.len() == size + 1 {
            let label = fields.remove(0);
            ensure!(
                label.eq_ignore_ascii_case(&symbols[row].to_string()),
                "Line {lineno}: row is labelled '{label}', expected '{}'",
                symbols[row]
            );
        }
        ensure!(
            fields.len() == size,
            "Line {lineno}: expected {size} scores, got {}",
            fields.len()
        );
        for field in fields {
            let score: i32 = field
                .parse()
                .wrap_err_with(|| format!("Line {lineno}: invalid score '{field}'"))?;
            scores.push(score);
        }
    }
    if let Some((lineno, _)) = lines.next() {
        bail!("Line {lineno}: unexpected content after the last row of {name}");
    }

    SimilarityMatrix::new(name, molecule, &symbols, Kind::Table(scores))
}
