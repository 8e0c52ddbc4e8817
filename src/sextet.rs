/*
 * Copyright (C) 2026 The basemoji developers
 *
 * This file is part of basemoji.
 *
 * basemoji is free software: you can redistribute it and/or modify
 * it under the terms of the GNU Affero General Public License as published
 * by the Free Software Foundation, either version 3 of the License, or
 * (at your option) any later version.
 *
 * basemoji is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
 * GNU Affero General Public License for more details.
 *
 * You should have received a copy of the GNU Affero General Public License
 * along with basemoji. If not, see <https://www.gnu.org/licenses/>.
 */

use super::{ALPHABET_LEN, SEXTET_MASK};

/// A 6-bit value, i.e., the position of a symbol in an alphabet.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Sextet(u8);

impl Sextet {
    pub const ZERO: Self = Self(0);

    /// Returns `None` if `x` is 64 or greater.
    pub const fn new(x: u8) -> Option<Self> {
        if (x as usize) < ALPHABET_LEN {
            Some(Self(x))
        } else {
            None
        }
    }

    /// Keeps only the low six bits of `x`.
    pub const fn from_low_bits(x: u32) -> Self {
        Self((x & SEXTET_MASK) as u8)
    }

    pub const fn get(self) -> u8 {
        self.0
    }

    pub(crate) const fn index(self) -> usize {
        self.0 as usize
    }
}

impl From<Sextet> for u8 {
    fn from(s: Sextet) -> u8 {
        s.0
    }
}

impl From<Sextet> for u32 {
    fn from(s: Sextet) -> u32 {
        u32::from(s.0)
    }
}
