use chance_locale::{Gender, Nationality, PrefixStyle, first_names, name_prefixes};

use crate::engine::Chance;

/// Filters for [`Chance::first_name`]. Open fields are drawn at random,
/// except that a configured default nationality wins over a random one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FirstNameOptions {
    pub gender: Option<Gender>,
    pub nationality: Option<Nationality>,
}

impl FirstNameOptions {
    pub fn gender(gender: Gender) -> Self {
        Self {
            gender: Some(gender),
            nationality: None,
        }
    }

    pub fn nationality(nationality: Nationality) -> Self {
        Self {
            gender: None,
            nationality: Some(nationality),
        }
    }
}

impl Chance {
    pub fn gender(&mut self) -> Gender {
        self.pick(&Gender::ALL)
    }

    pub fn nationality(&mut self) -> Nationality {
        self.pick(&Nationality::ALL)
    }

    pub fn first_name(&mut self, options: FirstNameOptions) -> &'static str {
        let gender = options.gender.unwrap_or_else(|| self.gender());
        let nationality = match options.nationality.or(self.options.default_nationality) {
            Some(nationality) => nationality,
            None => self.nationality(),
        };
        self.pick(first_names(gender, nationality))
    }

    /// Honorific such as `Mrs.` or `Doctor`; a missing gender reads the male
    /// table.
    pub fn name_prefix(&mut self, gender: Option<Gender>, style: PrefixStyle) -> &'static str {
        self.pick(name_prefixes(gender, style))
    }

    /// `values` must not be empty.
    fn pick<T: Copy>(&mut self, values: &[T]) -> T {
        debug_assert!(!values.is_empty(), "pick called with no values");
        values[self.source.uniform_int(0, values.len() - 1)]
    }
}
