// Domain value objects representing core business concepts

use std::fmt;

/// One of the four consumable inputs to a production run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resource {
    Water,
    Sugar,
    LemonJuice,
    FruitPuree,
}

impl Resource {
    /// Fixed positional order: water, sugar, lemon juice, fruit puree.
    pub const ORDER: [Resource; 4] = [
        Resource::Water,
        Resource::Sugar,
        Resource::LemonJuice,
        Resource::FruitPuree,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Resource::Water => "water",
            Resource::Sugar => "sugar",
            Resource::LemonJuice => "lemon_juice",
            Resource::FruitPuree => "fruit_puree",
        }
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Terminal state of a solve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolutionStatus {
    /// Found optimal solution
    Optimal,
    /// Problem has no feasible solution
    Infeasible,
    /// Objective can be improved infinitely
    Unbounded,
}

impl fmt::Display for SolutionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SolutionStatus::Optimal => write!(f, "Optimal"),
            SolutionStatus::Infeasible => write!(f, "Infeasible"),
            SolutionStatus::Unbounded => write!(f, "Unbounded"),
        }
    }
}
