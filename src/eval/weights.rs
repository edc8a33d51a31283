//! Evaluation term toggles

/// One of the three heuristic terms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EvalTerm {
    /// Live fours already on the board
    ExactScore,
    /// Threes with both ends open
    OpenThree,
    /// Four-cell windows the opponent has not entered
    LatentFour,
}

impl EvalTerm {
    pub const ALL: [EvalTerm; 3] = [EvalTerm::ExactScore, EvalTerm::OpenThree, EvalTerm::LatentFour];

    pub fn label(self) -> &'static str {
        match self {
            EvalTerm::ExactScore => "Score",
            EvalTerm::OpenThree => "3 in a Row",
            EvalTerm::LatentFour => "Poss 4 in a Row",
        }
    }
}

/// Which terms the utility function sums.
///
/// With every term disabled the engine stops searching and plays a uniformly
/// random empty cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EvalWeights {
    pub exact_score: bool,
    pub open_three: bool,
    pub latent_four: bool,
}

impl EvalWeights {
    pub const ALL: EvalWeights = EvalWeights {
        exact_score: true,
        open_three: true,
        latent_four: true,
    };

    pub const NONE: EvalWeights = EvalWeights {
        exact_score: false,
        open_three: false,
        latent_four: false,
    };

    #[inline]
    pub fn is_enabled(&self, term: EvalTerm) -> bool {
        match term {
            EvalTerm::ExactScore => self.exact_score,
            EvalTerm::OpenThree => self.open_three,
            EvalTerm::LatentFour => self.latent_four,
        }
    }

    pub fn set(&mut self, term: EvalTerm, enabled: bool) {
        match term {
            EvalTerm::ExactScore => self.exact_score = enabled,
            EvalTerm::OpenThree => self.open_three = enabled,
            EvalTerm::LatentFour => self.latent_four = enabled,
        }
    }

    pub fn toggle(&mut self, term: EvalTerm) {
        self.set(term, !self.is_enabled(term));
    }

    /// True when no term is enabled (random-move fallback)
    #[inline]
    pub fn is_disabled(&self) -> bool {
        !self.exact_score && !self.open_three && !self.latent_four
    }
}

impl Default for EvalWeights {
    fn default() -> Self {
        Self::ALL
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle() {
        let mut weights = EvalWeights::ALL;
        weights.toggle(EvalTerm::OpenThree);
        assert!(!weights.open_three);
        assert!(weights.exact_score && weights.latent_four);
        weights.toggle(EvalTerm::OpenThree);
        assert_eq!(weights, EvalWeights::ALL);
    }

    #[test]
    fn test_disabled() {
        assert!(EvalWeights::NONE.is_disabled());
        assert!(!EvalWeights::ALL.is_disabled());

        let mut weights = EvalWeights::NONE;
        weights.set(EvalTerm::LatentFour, true);
        assert!(!weights.is_disabled());
    }
}
