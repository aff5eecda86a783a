//! Ending records and the final-happiness rank lookup.

use std::fmt;

use serde::Serialize;

/// Ending rank, best to worst.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum Rank {
    /// Final happiness 96 or above.
    A,
    /// Final happiness 91–95.
    B,
    /// Final happiness 86–90.
    C,
    /// Final happiness 81–85.
    D,
    /// Final happiness 80 or below, and the collapse record.
    E,
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Rank::A => "A",
            Rank::B => "B",
            Rank::C => "C",
            Rank::D => "D",
            Rank::E => "E",
        };
        write!(f, "{s}")
    }
}

/// A fixed textual ending record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Ending {
    /// Rank shown on the summary screen.
    pub rank: Rank,
    /// Headline of the ending.
    pub title: &'static str,
    /// Narrative verdict on the player's reign.
    pub description: &'static str,
}

impl Ending {
    /// Look up the ending for a final happiness value.
    ///
    /// Pure threshold table: ≥96 → A, ≥91 → B, ≥86 → C, ≥81 → D, else E.
    /// Values above the ceiling never reach this path; they terminate
    /// through [`Ending::collapse`] instead.
    #[must_use]
    pub const fn for_happiness(happiness: u32) -> Self {
        if happiness >= 96 {
            Ending {
                rank: Rank::A,
                title: "Living God",
                description: "A miraculous balancing act. Your lies have outgrown the truth \
                    itself. Citizens weep at the sight of your portrait, and it is widely \
                    believed that the laws of physics defer to your speeches. History books \
                    will record you not as a man but as a mythological event.",
            }
        } else if happiness >= 91 {
            Ending {
                rank: Rank::B,
                title: "Charismatic Leader",
                description: "One step short of godhood. You reigned to thunderous applause \
                    and fanatical devotion, but at the very end you let a flicker of \
                    humanity show. History will remember you as a rare specimen of \
                    dictator, spoken of with respect and a little fear.",
            }
        } else if happiness >= 86 {
            Ending {
                rank: Rank::C,
                title: "Unremarkable Dictator",
                description: "Moderate support, moderate grumbling. You handled purges and \
                    reforms alike with the diligence of a civil servant seeing out his \
                    pension. Your page in the textbook will serve students chiefly as a \
                    sleep aid.",
            }
        } else if happiness >= 81 {
            Ending {
                rank: Rank::D,
                title: "Small-Time Despot",
                description: "You clung to the chair while your aides rolled their eyes \
                    behind your back. No coup ever came, because you were judged too \
                    harmless to be worth the ammunition. No statue will be raised; your \
                    name survives only as a difficult quiz question.",
            }
        } else {
            Ending {
                rank: Rank::E,
                title: "Coward",
                description: "So afraid of riots that you governed by flattering everyone \
                    at once. You kept your life, but none of a dictator's dignity. \
                    Historians filed you not under \"General\" but under \"tedious \
                    undersecretary\".",
            }
        }
    }

    /// The fixed collapse record, independent of the threshold table.
    ///
    /// Reached when happiness overflows the ceiling: the propaganda became
    /// so implausible that the population snapped.
    #[must_use]
    pub const fn collapse() -> Self {
        Ending {
            rank: Rank::E,
            title: "REGIME COLLAPSED",
            description: "Happiness overflow. The intensity of the propaganda passed its \
                breaking point: the people saw through the \"paradise on earth\", went \
                mad, and stormed the palace as a mob. The arithmetic, it seems, was \
                careless. The one perfect fiction you built contained no escape route \
                for its author.",
        }
    }
}
