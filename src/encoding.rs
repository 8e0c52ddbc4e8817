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

//! Alphabets and the symbol tables built from them.

use super::sextet::Sextet;
use super::ALPHABET_LEN;

use core::fmt::{self, Debug, Formatter};

/// The standard alphabet: the 64 codepoints U+1F600 through U+1F63F, in
/// order.
pub const STD_ALPHABET: &str = "\
    😀😁😂😃😄😅😆😇😈😉😊😋😌😍😎😏\
    😐😑😒😓😔😕😖😗😘😙😚😛😜😝😞😟\
    😠😡😢😣😤😥😦😧😨😩😪😫😬😭😮😯\
    😰😱😲😳😴😵😶😷😸😹😺😻😼😽😾😿";

const STD_FIRST_SYMBOL: u32 = 0x1f600;

/// The encoding built from [`STD_ALPHABET`].
pub static STD_ENCODING: Encoding = Encoding::standard();

/// An error encountered while building an [`Encoding`] from an alphabet.
#[non_exhaustive]
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum AlphabetError {
    /// The alphabet did not contain exactly 64 symbols.
    #[error("alphabet has {len} symbols, expected 64")]
    WrongLength {
        /// Number of codepoints in the alphabet.
        len: usize,
    },
    /// The same symbol appeared more than once.
    #[error("symbol {symbol:?} appears at positions {first} and {second}")]
    DuplicateSymbol {
        /// The repeated codepoint.
        symbol: char,
        /// Position of its first occurrence.
        first: usize,
        /// Position of its second occurrence.
        second: usize,
    },
}

/// A radix-64 encoding scheme defined by a 64-symbol alphabet.
///
/// An `Encoding` maps each 6-bit value to one symbol and back. It is
/// immutable once built and can be shared freely between threads.
#[derive(Clone, PartialEq, Eq)]
pub struct Encoding {
    /// Indexed by value.
    symbols: [char; ALPHABET_LEN],
    /// Sorted by symbol.
    values: [(char, Sextet); ALPHABET_LEN],
}

impl Encoding {
    /// Builds an encoding from the codepoints of `alphabet`, which must be
    /// exactly 64 distinct codepoints.
    pub fn new(alphabet: &str) -> Result<Self, AlphabetError> {
        let mut symbols = ['\0'; ALPHABET_LEN];
        let mut len = 0;
        alphabet.chars().for_each(|c| {
            if let Some(slot) = symbols.get_mut(len) {
                *slot = c;
            }
            len += 1;
        });
        if len != ALPHABET_LEN {
            return Err(AlphabetError::WrongLength {
                len,
            });
        }
        Self::from_symbols(symbols)
    }

    /// Builds an encoding from 64 symbols, where `symbols[v]` represents the
    /// value `v`.
    pub fn from_symbols(
        symbols: [char; ALPHABET_LEN],
    ) -> Result<Self, AlphabetError> {
        let mut values = [('\0', Sextet::ZERO); ALPHABET_LEN];
        values.iter_mut().zip(symbols.iter()).enumerate().for_each(
            |(i, (slot, &c))| {
                *slot = (c, Sextet::from_low_bits(i as u32));
            },
        );
        values.sort_unstable_by_key(|&(c, _)| c);

        if let Some(pair) = values.windows(2).find(|w| w[0].0 == w[1].0) {
            let (a, b) = (pair[0].1.index(), pair[1].1.index());
            return Err(AlphabetError::DuplicateSymbol {
                symbol: pair[0].0,
                first: a.min(b),
                second: a.max(b),
            });
        }

        log::trace!(
            "built encoding {:?}..{:?}",
            symbols[0],
            symbols[ALPHABET_LEN - 1],
        );
        Ok(Self {
            symbols,
            values,
        })
    }

    /// Returns the encoding for [`STD_ALPHABET`].
    ///
    /// This is the same as [`STD_ENCODING`], but by value.
    pub const fn standard() -> Self {
        let mut symbols = ['\0'; ALPHABET_LEN];
        let mut values = [('\0', Sextet::ZERO); ALPHABET_LEN];
        let mut i = 0;
        while i < ALPHABET_LEN {
            let c = match char::from_u32(STD_FIRST_SYMBOL + i as u32) {
                Some(c) => c,
                None => panic!("standard alphabet is not valid unicode"),
            };
            symbols[i] = c;
            // The standard symbols are ascending, so this is already sorted.
            values[i] = (c, Sextet::from_low_bits(i as u32));
            i += 1;
        }
        Self {
            symbols,
            values,
        }
    }

    /// The symbol that represents `value`.
    pub fn symbol(&self, value: Sextet) -> char {
        self.symbols[value.index()]
    }

    /// The value `symbol` represents, or `None` if it isn't in the alphabet.
    pub fn value(&self, symbol: char) -> Option<Sextet> {
        self.values
            .binary_search_by_key(&symbol, |&(c, _)| c)
            .ok()
            .map(|i| self.values[i].1)
    }

    pub fn contains(&self, symbol: char) -> bool {
        self.value(symbol).is_some()
    }

    /// All 64 symbols, indexed by value.
    pub fn symbols(&self) -> &[char; ALPHABET_LEN] {
        &self.symbols
    }
}

impl Default for Encoding {
    fn default() -> Self {
        Self::standard()
    }
}

impl Debug for Encoding {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Encoding").field(&Alphabet(&self.symbols)).finish()
    }
}

struct Alphabet<'a>(&'a [char; ALPHABET_LEN]);

impl Debug for Alphabet<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        use fmt::Write;
        f.write_char('"')?;
        self.0.iter().try_for_each(|&c| f.write_char(c))?;
        f.write_char('"')
    }
}
