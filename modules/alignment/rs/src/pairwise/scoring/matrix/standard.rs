use std::fmt::{Display, Formatter};
use std::str::FromStr;

use eyre::{eyre, Report};

/// Published substitution matrices shipped with the crate
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum StandardMatrix {
    Blosum30,
    Blosum45,
    Blosum62,
    Blosum80,
    Pam40,
    Pam250,
}

impl StandardMatrix {
    pub const ALL: [StandardMatrix; 6] = [
        StandardMatrix::Blosum30,
        StandardMatrix::Blosum45,
        StandardMatrix::Blosum62,
        StandardMatrix::Blosum80,
        StandardMatrix::Pam40,
        StandardMatrix::Pam250,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            StandardMatrix::Blosum30 => "BLOSUM30",
            StandardMatrix::Blosum45 => "BLOSUM45",
            StandardMatrix::Blosum62 => "BLOSUM62",
            StandardMatrix::Blosum80 => "BLOSUM80",
            StandardMatrix::Pam40 => "PAM40",
            StandardMatrix::Pam250 => "PAM250",
        }
    }

    /// The matrix in the text exchange format
    pub fn text(&self) -> &'static str {
        match self {
            StandardMatrix::Blosum30 => include_str!("tables/blosum30.txt"),
            StandardMatrix::Blosum45 => include_str!("tables/blosum45.txt"),
            StandardMatrix::Blosum62 => include_str!("tables/blosum62.txt"),
            StandardMatrix::Blosum80 => include_str!("tables/blosum80.txt"),
            StandardMatrix::Pam40 => include_str!("tables/pam40.txt"),
            StandardMatrix::Pam250 => include_str!("tables/pam250.txt"),
        }
    }
}

impl Display for StandardMatrix {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for StandardMatrix {
    type Err = Report;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        StandardMatrix::ALL
            .into_iter()
            .find(|x| x.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| eyre!("Unknown similarity matrix: {s}"))
    }
}
