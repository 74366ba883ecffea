use crate::error::{MotifMarkError, Result};

const DNA_BITMASK_A: u8 = 1;
const DNA_BITMASK_C: u8 = 2;
const DNA_BITMASK_G: u8 = 4;
const DNA_BITMASK_T: u8 = 8;
const DNA_BITMASK_N: u8 = DNA_BITMASK_A | DNA_BITMASK_C | DNA_BITMASK_G | DNA_BITMASK_T;

/// The set of literal bases one motif position accepts, as a bitmask
/// (eg DNA_BITMASK_C|DNA_BITMASK_T for `y`).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct IupacCode(u8);

impl IupacCode {
    /// Maps a motif symbol to its accepted bases. `None` if the symbol is not
    /// one of the IUPAC nucleotide codes.
    #[inline(always)]
    pub fn from_letter(letter: u8) -> Option<Self> {
        let mask = match letter.to_ascii_lowercase() {
            b'a' => DNA_BITMASK_A,
            b'c' => DNA_BITMASK_C,
            b'g' => DNA_BITMASK_G,
            b't' => DNA_BITMASK_T,
            b'u' => DNA_BITMASK_T,
            b'w' => DNA_BITMASK_A | DNA_BITMASK_T,
            b's' => DNA_BITMASK_C | DNA_BITMASK_G,
            b'm' => DNA_BITMASK_A | DNA_BITMASK_C,
            b'k' => DNA_BITMASK_G | DNA_BITMASK_T,
            b'r' => DNA_BITMASK_A | DNA_BITMASK_G,
            b'y' => DNA_BITMASK_C | DNA_BITMASK_T,
            b'b' => DNA_BITMASK_C | DNA_BITMASK_G | DNA_BITMASK_T,
            b'd' => DNA_BITMASK_A | DNA_BITMASK_G | DNA_BITMASK_T,
            b'h' => DNA_BITMASK_A | DNA_BITMASK_C | DNA_BITMASK_T,
            b'v' => DNA_BITMASK_A | DNA_BITMASK_C | DNA_BITMASK_G,
            b'n' => DNA_BITMASK_N,
            _ => return None,
        };
        Some(Self(mask))
    }

    /// Bitmask of a literal sequence base. Anything other than a/c/g/t
    /// (including `n` in the sequence itself) maps to the empty set.
    #[inline(always)]
    fn base_mask(base: u8) -> u8 {
        match base.to_ascii_lowercase() {
            b'a' => DNA_BITMASK_A,
            b'c' => DNA_BITMASK_C,
            b'g' => DNA_BITMASK_G,
            b't' => DNA_BITMASK_T,
            _ => 0,
        }
    }

    #[inline(always)]
    pub fn accepts(self, base: u8) -> bool {
        self.0 & Self::base_mask(base) != 0
    }

    /// Accepted literal bases in a/c/g/t order.
    #[inline(always)]
    pub fn to_vec(&self) -> Vec<u8> {
        let mut ret = Vec::with_capacity(4);
        if self.0 & DNA_BITMASK_A != 0 {
            ret.push(b'a');
        }
        if self.0 & DNA_BITMASK_C != 0 {
            ret.push(b'c');
        }
        if self.0 & DNA_BITMASK_G != 0 {
            ret.push(b'g');
        }
        if self.0 & DNA_BITMASK_T != 0 {
            ret.push(b't');
        }
        ret
    }
}

/// Expands a motif into one accepted-base set per position.
///
/// Fails on the first symbol outside the IUPAC nucleotide alphabet, so a bad
/// motif never reaches the scanner.
pub fn expand_motif(motif: &str) -> Result<Vec<IupacCode>> {
    motif
        .chars()
        .enumerate()
        .map(|(position, symbol)| {
            u8::try_from(symbol)
                .ok()
                .and_then(IupacCode::from_letter)
                .ok_or_else(|| MotifMarkError::InvalidMotifSymbol {
                    motif: motif.to_string(),
                    symbol,
                    position,
                })
        })
        .collect()
}
