use super::MediaInfo;
use std::io::{self, Write};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Disc {
    has_bonus_track: bool,
    is_digipack: bool,
}

impl Disc {
    pub fn new(has_bonus_track: bool, is_digipack: bool) -> Disc {
        Disc {
            has_bonus_track,
            is_digipack,
        }
    }

    pub fn has_bonus_track(&self) -> bool {
        self.has_bonus_track
    }

    pub fn is_digipack(&self) -> bool {
        self.is_digipack
    }

    pub(super) fn describe(&self) -> String {
        format!(
            "CompactDisc [bonusTrack={}, digipack={}]",
            self.has_bonus_track, self.is_digipack
        )
    }

    pub(super) fn play<W: Write>(&self, info: &MediaInfo, out: &mut W) -> io::Result<()> {
        writeln!(
            out,
            "You selected the CD {} by {}.",
            info.title(),
            info.artist()
        )?;
        writeln!(
            out,
            "This is Compact Disc from the year {}.",
            info.release_year()
        )
    }
}
