use std::fmt;

use bevy::prelude::*;
use rand::seq::SliceRandom;
use rand::Rng;

/// Registered player names in registration order.
#[derive(Resource, Debug, Clone, Default, PartialEq)]
pub struct Roster {
    names: Vec<String>,
    max_name_len: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RosterError {
    Empty,
    TooLong { len: usize, max: usize },
    Duplicate(String),
}

impl fmt::Display for RosterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "player name is empty"),
            Self::TooLong { len, max } => {
                write!(f, "player name has {len} characters (max {max})")
            }
            Self::Duplicate(name) => write!(f, "player '{name}' is already registered"),
        }
    }
}

impl std::error::Error for RosterError {}

impl Roster {
    pub fn new(max_name_len: usize) -> Self {
        Self {
            names: Vec::new(),
            max_name_len,
        }
    }

    /// Register a name (trimmed). Returns the stored form.
    pub fn add(&mut self, name: &str) -> Result<&str, RosterError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(RosterError::Empty);
        }
        let len = name.chars().count();
        if len > self.max_name_len {
            return Err(RosterError::TooLong {
                len,
                max: self.max_name_len,
            });
        }
        if self.contains(name) {
            return Err(RosterError::Duplicate(name.to_string()));
        }
        self.names.push(name.to_string());
        Ok(self.names.last().map(String::as_str).unwrap_or_default())
    }

    pub fn remove(&mut self, name: &str) -> bool {
        let before = self.names.len();
        self.names.retain(|n| n != name);
        self.names.len() != before
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Spawn order for a round: a uniform permutation (Fisher-Yates) of the registered names.
    /// The roster itself keeps registration order.
    pub fn shuffled(&self, rng: &mut impl Rng) -> Vec<String> {
        let mut order = self.names.clone();
        order.shuffle(rng);
        order
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn add_trims_and_rejects_bad_names() {
        let mut r = Roster::new(6);
        assert_eq!(r.add("  Mikl "), Ok("Mikl"));
        assert_eq!(r.add("   "), Err(RosterError::Empty));
        assert_eq!(r.add("Alipanter"), Err(RosterError::TooLong { len: 9, max: 6 }));
        assert_eq!(r.add("Mikl"), Err(RosterError::Duplicate("Mikl".into())));
        assert_eq!(r.names(), &["Mikl".to_string()]);
    }

    #[test]
    fn length_counts_characters_not_bytes() {
        let mut r = Roster::new(4);
        assert!(r.add("Åsa").is_ok());
        assert!(r.add("Øyvin").is_err());
    }

    #[test]
    fn remove_reports_change() {
        let mut r = Roster::new(24);
        r.add("Emma").unwrap();
        r.add("Victor").unwrap();
        assert!(r.remove("Emma"));
        assert!(!r.remove("Emma"));
        assert_eq!(r.len(), 1);
        assert!(!r.contains("Emma"));
    }

    #[test]
    fn shuffle_is_permutation() {
        let mut r = Roster::new(24);
        for n in ["Mikl", "Victor", "aioli", "NIls", "MOa", "Alipanter", "Emma"] {
            r.add(n).unwrap();
        }
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..50 {
            let mut order = r.shuffled(&mut rng);
            assert_eq!(order.len(), r.len());
            order.sort();
            let mut expected = r.names().to_vec();
            expected.sort();
            assert_eq!(order, expected);
        }
        // registration order untouched
        assert_eq!(r.names()[0], "Mikl");
    }

    #[test]
    fn shuffle_of_empty_roster_is_empty() {
        let r = Roster::new(24);
        assert!(r.shuffled(&mut StdRng::seed_from_u64(0)).is_empty());
    }
}
