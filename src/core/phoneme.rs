//! ARPAbet phoneme model.
//!
//! A phoneme is either a consonant or a vowel; vowels carry a stress
//! marker encoded as a trailing digit in ARPAbet text (`AE1`, `ER0`).
//! The symbol sets are closed: parsing rejects anything outside them,
//! which is how malformed dictionary entries are detected.

use std::fmt;
use std::str::FromStr;

use super::error::EntryError;

/// Stress marker carried by vowel phonemes.
///
/// ARPAbet digits: 0 = unstressed, 1 = primary, 2 = secondary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stress {
    Unstressed,
    Secondary,
    Primary,
}

impl Stress {
    fn from_digit(digit: char) -> Option<Self> {
        match digit {
            '0' => Some(Stress::Unstressed),
            '1' => Some(Stress::Primary),
            '2' => Some(Stress::Secondary),
            _ => None,
        }
    }

    fn digit(self) -> char {
        match self {
            Stress::Unstressed => '0',
            Stress::Primary => '1',
            Stress::Secondary => '2',
        }
    }
}

/// The 24 ARPAbet consonants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Consonant {
    B, Ch, D, Dh, F, G, Hh, Jh, K, L, M, N, Ng, P, R, S, Sh, T, Th, V, W, Y, Z, Zh,
}

impl Consonant {
    fn parse(token: &str) -> Option<Self> {
        use Consonant::*;
        Some(match token {
            "B" => B, "CH" => Ch, "D" => D, "DH" => Dh, "F" => F, "G" => G,
            "HH" => Hh, "JH" => Jh, "K" => K, "L" => L, "M" => M, "N" => N,
            "NG" => Ng, "P" => P, "R" => R, "S" => S, "SH" => Sh, "T" => T,
            "TH" => Th, "V" => V, "W" => W, "Y" => Y, "Z" => Z, "ZH" => Zh,
            _ => return None,
        })
    }

    fn as_str(self) -> &'static str {
        use Consonant::*;
        match self {
            B => "B", Ch => "CH", D => "D", Dh => "DH", F => "F", G => "G",
            Hh => "HH", Jh => "JH", K => "K", L => "L", M => "M", N => "N",
            Ng => "NG", P => "P", R => "R", S => "S", Sh => "SH", T => "T",
            Th => "TH", V => "V", W => "W", Y => "Y", Z => "Z", Zh => "ZH",
        }
    }
}

/// The 15 ARPAbet vowels (stress digit not included).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Vowel {
    Aa, Ae, Ah, Ao, Aw, Ay, Eh, Er, Ey, Ih, Iy, Ow, Oy, Uh, Uw,
}

impl Vowel {
    fn parse(token: &str) -> Option<Self> {
        use Vowel::*;
        Some(match token {
            "AA" => Aa, "AE" => Ae, "AH" => Ah, "AO" => Ao, "AW" => Aw,
            "AY" => Ay, "EH" => Eh, "ER" => Er, "EY" => Ey, "IH" => Ih,
            "IY" => Iy, "OW" => Ow, "OY" => Oy, "UH" => Uh, "UW" => Uw,
            _ => return None,
        })
    }

    fn as_str(self) -> &'static str {
        use Vowel::*;
        match self {
            Aa => "AA", Ae => "AE", Ah => "AH", Ao => "AO", Aw => "AW",
            Ay => "AY", Eh => "EH", Er => "ER", Ey => "EY", Ih => "IH",
            Iy => "IY", Ow => "OW", Oy => "OY", Uh => "UH", Uw => "UW",
        }
    }
}

/// An atomic unit of pronunciation.
///
/// Equality and hashing are structural, stress marker included, which is
/// what makes rhyme units valid grouping keys across words.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phoneme {
    Consonant(Consonant),
    Vowel { kind: Vowel, stress: Stress },
}

impl Phoneme {
    pub fn is_vowel(&self) -> bool {
        matches!(self, Phoneme::Vowel { .. })
    }

    /// The stress marker, for vowels.
    pub fn stress(&self) -> Option<Stress> {
        match self {
            Phoneme::Vowel { stress, .. } => Some(*stress),
            Phoneme::Consonant(_) => None,
        }
    }

    pub fn has_primary_stress(&self) -> bool {
        self.stress() == Some(Stress::Primary)
    }
}

impl FromStr for Phoneme {
    type Err = EntryError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        let unknown = || EntryError::UnknownPhoneme {
            token: token.to_string(),
        };

        // Vowel tokens end in a stress digit; everything else must be a
        // bare consonant symbol.
        if let Some(stress) = token.chars().last().and_then(Stress::from_digit) {
            let kind = Vowel::parse(&token[..token.len() - 1]).ok_or_else(unknown)?;
            Ok(Phoneme::Vowel { kind, stress })
        } else {
            let kind = Consonant::parse(token).ok_or_else(unknown)?;
            Ok(Phoneme::Consonant(kind))
        }
    }
}

impl fmt::Display for Phoneme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Phoneme::Consonant(kind) => f.write_str(kind.as_str()),
            Phoneme::Vowel { kind, stress } => {
                write!(f, "{}{}", kind.as_str(), stress.digit())
            }
        }
    }
}
