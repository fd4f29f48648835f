use std::fmt;

/// A single emoji picture shown to the child.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pictogram(&'static str);

impl Pictogram {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for Pictogram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

const FRUITS: [Pictogram; 6] = [
    Pictogram("🍎"),
    Pictogram("🍌"),
    Pictogram("🍐"),
    Pictogram("🍇"),
    Pictogram("🍓"),
    Pictogram("🍊"),
];

const ANIMALS: [Pictogram; 6] = [
    Pictogram("🐶"),
    Pictogram("🐱"),
    Pictogram("🐭"),
    Pictogram("🐰"),
    Pictogram("🐻"),
    Pictogram("🦊"),
];

const MISC: [Pictogram; 7] = [
    Pictogram("⭐"),
    Pictogram("🚗"),
    Pictogram("⚽"),
    Pictogram("🎈"),
    Pictogram("🧸"),
    Pictogram("🪁"),
    Pictogram("🌸"),
];

/// Fixed pictogram groups used by counting and odd-one-out rounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Fruits,
    Animals,
    Misc,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Fruits, Category::Animals, Category::Misc];

    /// Members of the category. Never empty.
    #[must_use]
    pub fn items(self) -> &'static [Pictogram] {
        match self {
            Category::Fruits => &FRUITS,
            Category::Animals => &ANIMALS,
            Category::Misc => &MISC,
        }
    }

    #[must_use]
    pub fn contains(self, pictogram: Pictogram) -> bool {
        self.items().contains(&pictogram)
    }

    /// Every pictogram across all categories.
    #[must_use]
    pub fn pooled() -> Vec<Pictogram> {
        Self::ALL
            .iter()
            .flat_map(|category| category.items().iter().copied())
            .collect()
    }
}
