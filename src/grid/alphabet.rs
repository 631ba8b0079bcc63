//! Color alphabet
//!
//! Maps every distinct sampled color to a lowercase letter. Letters are
//! handed out in ascending color order (component-wise), so the mapping
//! depends only on the set of colors and never on where they appear.

use std::collections::BTreeSet;
use crate::errors::{FlowError, FlowResult};
use crate::grid::sampler::Rgb;

/// Number of letters available for colors
pub const MAX_COLORS: usize = 26;

/// Sorted set of distinct colors, each standing for one letter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorAlphabet {
    colors: Vec<Rgb>,
}

impl ColorAlphabet {
    /// Build the alphabet from sampled colors
    ///
    /// Duplicates are allowed and ignored.
    ///
    /// # Returns
    /// The alphabet, or `TooManyColors` with the distinct count if there
    /// are more than 26 colors
    pub fn from_colors<I>(colors: I) -> FlowResult<Self>
    where
        I: IntoIterator<Item = Rgb>,
    {
        let distinct: BTreeSet<Rgb> = colors.into_iter().collect();
        if distinct.len() > MAX_COLORS {
            return Err(FlowError::TooManyColors(distinct.len()));
        }

        Ok(ColorAlphabet {
            colors: distinct.into_iter().collect(),
        })
    }

    /// Zero-based letter index of a color
    pub fn index_of(&self, color: Rgb) -> Option<u8> {
        self.colors.binary_search(&color).ok().map(|i| i as u8)
    }

    /// Lowercase letter assigned to a color
    pub fn letter_for(&self, color: Rgb) -> Option<char> {
        self.index_of(color).map(|i| (b'a' + i) as char)
    }

    /// Colors in letter order
    pub fn colors(&self) -> &[Rgb] {
        &self.colors
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}
