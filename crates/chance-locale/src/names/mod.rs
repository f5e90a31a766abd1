use std::fmt;

use serde::{Deserialize, Serialize};

mod br;
mod en;
mod it;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub const ALL: [Gender; 2] = [Gender::Male, Gender::Female];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Nationality {
    Brazilian,
    English,
    Italian,
}

impl Nationality {
    pub const ALL: [Nationality; 3] = [
        Nationality::Brazilian,
        Nationality::English,
        Nationality::Italian,
    ];

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "brazilian" | "pt_BR" => Some(Self::Brazilian),
            "english" | "en_US" => Some(Self::English),
            "italian" | "it_IT" => Some(Self::Italian),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Brazilian => "brazilian",
            Self::English => "english",
            Self::Italian => "italian",
        }
    }
}

impl fmt::Display for Nationality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// First names for a gender and nationality. Every table is non-empty.
pub fn first_names(gender: Gender, nationality: Nationality) -> &'static [&'static str] {
    match (nationality, gender) {
        (Nationality::Brazilian, Gender::Female) => br::FEMALE,
        (Nationality::Brazilian, Gender::Male) => br::MALE,
        (Nationality::English, Gender::Female) => en::FEMALE,
        (Nationality::English, Gender::Male) => en::MALE,
        (Nationality::Italian, Gender::Female) => it::FEMALE,
        (Nationality::Italian, Gender::Male) => it::MALE,
    }
}
