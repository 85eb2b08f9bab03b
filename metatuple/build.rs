use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::{env, error::Error};

/// The largest arity for which every combination of kinds gets its own test case.
const MAX_ENUMERATED_ARITY: usize = 10;

fn main() -> Result<(), Box<dyn Error>> {
    // We auto-generate a test case for every assignment of leaf/group kinds to the positions of
    // every tuple up to a fixed size. Each case is checked by the `check_combination!` macro in
    // `tests/combinations.rs`, which includes the generated file.
    println!("cargo:rerun-if-changed=build.rs");

    let out_dir = env::var("OUT_DIR")?;
    let dest_path = Path::new(&out_dir).join("combinations.rs");
    let mut f = BufWriter::new(File::create(&dest_path)?);

    for arity in 1..=MAX_ENUMERATED_ARITY {
        writeln!(f, "#[test]")?;
        writeln!(f, "fn every_combination_of_arity_{}() {{", arity)?;
        for combination in Combinations::new(arity) {
            writeln!(f, "    check_combination!({});", combination)?;
        }
        writeln!(f, "}}")?;
        writeln!(f)?;
    }

    f.flush()?;
    Ok(())
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Kind {
    Leaf,
    Group,
}

/// One assignment of kinds to positions, rendered as the `check_combination!` argument list:
/// `leaf 0, group 1, leaf 2`.
#[derive(Clone, Debug)]
struct Combination(Vec<Kind>);

impl std::fmt::Display for Combination {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for (position, kind) in self.0.iter().enumerate() {
            if position > 0 {
                write!(f, ", ")?;
            }
            match kind {
                Kind::Leaf => write!(f, "leaf {}", position)?,
                Kind::Group => write!(f, "group {}", position)?,
            }
        }
        Ok(())
    }
}

/// Iterate over all `2^arity` kind assignments, counting in binary with `Leaf` as 0 and `Group`
/// as 1, most significant position first.
#[derive(Clone, Debug)]
struct Combinations {
    arity: usize,
    next: Option<u32>,
}

impl Combinations {
    fn new(arity: usize) -> Self {
        Combinations {
            arity,
            next: Some(0),
        }
    }
}

impl Iterator for Combinations {
    type Item = Combination;

    fn next(&mut self) -> Option<Combination> {
        let bits = self.next?;
        let kinds = (0..self.arity)
            .rev()
            .map(|shift| {
                if bits >> shift & 1 == 1 {
                    Kind::Group
                } else {
                    Kind::Leaf
                }
            })
            .collect();
        self.next = if bits + 1 < 1 << self.arity {
            Some(bits + 1)
        } else {
            None
        };
        Some(Combination(kinds))
    }
}
