use crate::engine::Chance;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum HourFormat {
    /// `0..=23`
    #[default]
    TwentyFour,
    /// `1..=12`
    Twelve,
}

impl HourFormat {
    pub fn min(self) -> u32 {
        match self {
            Self::TwentyFour => 0,
            Self::Twelve => 1,
        }
    }

    pub fn max(self) -> u32 {
        match self {
            Self::TwentyFour => 23,
            Self::Twelve => 12,
        }
    }
}

impl Chance {
    pub fn hour(&mut self, format: HourFormat) -> u32 {
        self.source.uniform_int(format.min(), format.max())
    }

    pub fn minute(&mut self) -> u32 {
        self.source.uniform_int(0, 59)
    }

    pub fn second(&mut self) -> u32 {
        self.source.uniform_int(0, 59)
    }
}
