use std::fmt;

/// The kind of question a round asks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameMode {
    /// Count the pictograms and pick the matching number.
    Numbers,
    /// Find the displayed letter among four.
    Letters,
    /// Three items share a category, one does not.
    OddOneOut,
    /// Name the displayed shape.
    ShapeMatch,
}

impl GameMode {
    pub const ALL: [GameMode; 4] = [
        GameMode::Numbers,
        GameMode::Letters,
        GameMode::OddOneOut,
        GameMode::ShapeMatch,
    ];

    /// The screen this mode is played on.
    #[must_use]
    pub fn topic(self) -> Topic {
        match self {
            GameMode::Numbers => Topic::Numbers,
            GameMode::Letters => Topic::Letters,
            GameMode::OddOneOut | GameMode::ShapeMatch => Topic::Logic,
        }
    }
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            GameMode::Numbers => "numbers",
            GameMode::Letters => "letters",
            GameMode::OddOneOut => "odd-one-out",
            GameMode::ShapeMatch => "shape-match",
        };
        f.write_str(label)
    }
}

/// A game screen. The logic screen alternates between two modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Topic {
    Numbers,
    Letters,
    Logic,
}

impl Topic {
    pub const ALL: [Topic; 3] = [Topic::Numbers, Topic::Letters, Topic::Logic];

    /// Modes a round on this screen is drawn from (uniformly).
    #[must_use]
    pub fn modes(self) -> &'static [GameMode] {
        match self {
            Topic::Numbers => &[GameMode::Numbers],
            Topic::Letters => &[GameMode::Letters],
            Topic::Logic => &[GameMode::OddOneOut, GameMode::ShapeMatch],
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Topic::Numbers => "Numbers",
            Topic::Letters => "Letters",
            Topic::Logic => "Logic",
        }
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
