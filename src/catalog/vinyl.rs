use super::{MediaInfo, ValidationError};
use std::io::{self, Write};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RecordSize {
    Seven,
    Ten,
    Twelve,
}

impl RecordSize {
    pub fn inches(self) -> f64 {
        match self {
            RecordSize::Seven => 7.0,
            RecordSize::Ten => 10.0,
            RecordSize::Twelve => 12.0,
        }
    }
}

impl TryFrom<f64> for RecordSize {
    type Error = ValidationError;

    fn try_from(inches: f64) -> Result<Self, Self::Error> {
        [RecordSize::Seven, RecordSize::Ten, RecordSize::Twelve]
            .into_iter()
            .find(|size| size.inches() == inches)
            .ok_or(ValidationError::InvalidRecordSize(inches))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Speed {
    ThirtyThree,
    FortyFive,
    SeventyEight,
}

impl Speed {
    pub fn rpm(self) -> f64 {
        match self {
            Speed::ThirtyThree => 33.3,
            Speed::FortyFive => 45.0,
            Speed::SeventyEight => 78.0,
        }
    }
}

impl TryFrom<f64> for Speed {
    type Error = ValidationError;

    /// Exact comparison, 33.33 is not 33.3.
    fn try_from(rpm: f64) -> Result<Self, Self::Error> {
        [Speed::ThirtyThree, Speed::FortyFive, Speed::SeventyEight]
            .into_iter()
            .find(|speed| speed.rpm() == rpm)
            .ok_or(ValidationError::InvalidRpm(rpm))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Vinyl {
    size: RecordSize,
    speed: Speed,
}

impl Vinyl {
    pub fn new(diameter_inches: f64, rpm: f64) -> Result<Vinyl, ValidationError> {
        Ok(Vinyl {
            size: RecordSize::try_from(diameter_inches)?,
            speed: Speed::try_from(rpm)?,
        })
    }

    pub fn size(&self) -> RecordSize {
        self.size
    }

    pub fn speed(&self) -> Speed {
        self.speed
    }

    pub(super) fn describe(&self) -> String {
        format!(
            "Record [size={:?}, rpm={:?}]",
            self.size.inches(),
            self.speed.rpm()
        )
    }

    pub(super) fn play<W: Write>(&self, info: &MediaInfo, out: &mut W) -> io::Result<()> {
        writeln!(
            out,
            "You selected the record {} by {}.",
            info.title(),
            info.artist()
        )?;
        writeln!(
            out,
            "This is a {:?} inch record from {}, playing at {:?} rpm.",
            self.size.inches(),
            info.release_year(),
            self.speed.rpm()
        )
    }
}
