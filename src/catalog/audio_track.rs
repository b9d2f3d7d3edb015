use super::{MediaInfo, ValidationError};
use std::fmt;
use std::io::{self, Write};
use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AudioFormat {
    Mp3,
    M4a,
    Wav,
}

impl AudioFormat {
    pub fn extension(self) -> &'static str {
        match self {
            AudioFormat::Mp3 => "mp3",
            AudioFormat::M4a => "m4a",
            AudioFormat::Wav => "wav",
        }
    }
}

impl FromStr for AudioFormat {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        [AudioFormat::Mp3, AudioFormat::M4a, AudioFormat::Wav]
            .into_iter()
            .find(|format| format.extension().eq_ignore_ascii_case(s))
            .ok_or_else(|| ValidationError::InvalidFileType(s.to_owned()))
    }
}

impl fmt::Display for AudioFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// A digital audio file. The file type keeps the casing it was given with.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AudioTrack {
    file_type: String,
    format: AudioFormat,
}

impl AudioTrack {
    pub fn new(file_type: impl Into<String>) -> Result<AudioTrack, ValidationError> {
        let file_type = file_type.into();
        let format: AudioFormat = file_type.parse()?;
        Ok(AudioTrack { file_type, format })
    }

    pub fn file_type(&self) -> &str {
        &self.file_type
    }

    pub fn format(&self) -> AudioFormat {
        self.format
    }

    pub(super) fn describe(&self) -> String {
        format!("AudioFile [fileType={}]", self.file_type)
    }

    pub(super) fn play<W: Write>(&self, info: &MediaInfo, out: &mut W) -> io::Result<()> {
        // The artist really is printed twice.
        writeln!(
            out,
            "You selected the Audio File {} by {} and the {}.",
            info.title(),
            info.artist(),
            info.artist()
        )?;
        writeln!(
            out,
            "This file is in {} format, from the year {}.",
            self.file_type,
            info.release_year()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_type_is_case_insensitive() {
        for file_type in ["MP3", "Mp3", "mp3", "mP3"] {
            let track = AudioTrack::new(file_type).unwrap();
            assert_eq!(track.format(), AudioFormat::Mp3);
            assert_eq!(track.file_type(), file_type);
        }
        assert_eq!(AudioTrack::new("WAV").unwrap().format(), AudioFormat::Wav);
        assert_eq!(AudioTrack::new("m4A").unwrap().format(), AudioFormat::M4a);
    }

    #[test]
    fn rejects_unknown_file_types() {
        for file_type in ["flac", "xyz", "", " mp3", "mp3 "] {
            assert_eq!(
                AudioTrack::new(file_type),
                Err(ValidationError::InvalidFileType(file_type.to_owned()))
            );
        }
    }

    #[test]
    fn describes_file_type_as_given() {
        assert_eq!(
            AudioTrack::new("WAV").unwrap().describe(),
            "AudioFile [fileType=WAV]"
        );
    }

    #[test]
    fn plays_audio_file_lines() {
        let info = MediaInfo::new("Donnie Iris and the Cruisers", "Ah Leah!", 1, 4.0, 1980).unwrap();
        let mut out = Vec::new();
        AudioTrack::new("wav")
            .unwrap()
            .play(&info, &mut out)
            .unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "You selected the Audio File Ah Leah! by Donnie Iris and the Cruisers and the Donnie Iris and the Cruisers.\n\
             This file is in wav format, from the year 1980.\n"
        );
    }
}
