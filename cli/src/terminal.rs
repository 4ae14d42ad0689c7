//! Inline car images.
//!
//! Car images arrive as base64 JPEG. Two terminal graphics protocols are
//! supported:
//! - Kitty graphics protocol (kitty, WezTerm), which needs PNG
//! - iTerm2 inline images protocol, which takes the JPEG as is

use std::io::{self, Cursor, Write};

use anyhow::{Context as _, Result};
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use image::ImageFormat;

use crate::cli::ImageMode;

/// Terminal graphics protocol
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Protocol {
    Kitty,
    ITerm,
    /// No graphics support; images are skipped.
    None,
}

/// Detect the graphics protocol supported by the current terminal.
///
/// Detection is based on environment variables:
/// - `TERM_PROGRAM` for iTerm2
/// - `KITTY_WINDOW_ID` or `TERM` containing "kitty" for Kitty
/// - `WEZTERM_EXECUTABLE` for WezTerm (supports kitty protocol)
pub fn detect_protocol() -> Protocol {
    if let Ok(term_program) = std::env::var("TERM_PROGRAM")
        && term_program.contains("iTerm")
    {
        return Protocol::ITerm;
    }

    if std::env::var("KITTY_WINDOW_ID").is_ok() {
        return Protocol::Kitty;
    }

    if let Ok(term) = std::env::var("TERM")
        && term.contains("kitty")
    {
        return Protocol::Kitty;
    }

    if std::env::var("WEZTERM_EXECUTABLE").is_ok() {
        return Protocol::Kitty;
    }

    Protocol::None
}

impl From<ImageMode> for Protocol {
    fn from(mode: ImageMode) -> Self {
        match mode {
            ImageMode::Auto => detect_protocol(),
            ImageMode::Kitty => Self::Kitty,
            ImageMode::Iterm => Self::ITerm,
            ImageMode::None => Self::None,
        }
    }
}

/// Kitty escape sequences for a PNG, chunked to 4096 base64 bytes each.
///
/// Format: `ESC _ G <control data> ; <payload> ESC \` where `a=T` transmits
/// and displays, `f=100` marks PNG and `m=1` means more chunks follow.
pub fn kitty_sequence(png_data: &[u8]) -> String {
    const CHUNK_SIZE: usize = 4096;

    let encoded = STANDARD.encode(png_data);
    let chunks: Vec<&str> = encoded
        .as_bytes()
        .chunks(CHUNK_SIZE)
        .filter_map(|chunk| std::str::from_utf8(chunk).ok())
        .collect();

    let mut out = String::new();
    for (i, chunk) in chunks.iter().enumerate() {
        let more = u8::from(i + 1 < chunks.len());
        if i == 0 {
            out.push_str(&format!("\x1b_Ga=T,f=100,m={more};{chunk}\x1b\\"));
        } else {
            out.push_str(&format!("\x1b_Gm={more};{chunk}\x1b\\"));
        }
    }
    out
}

/// iTerm2 `OSC 1337` inline image sequence.
pub fn iterm_sequence(data: &[u8]) -> String {
    format!(
        "\x1b]1337;File=inline=1;size={}:{}\x07",
        data.len(),
        STANDARD.encode(data)
    )
}

fn to_png(data: &[u8]) -> Result<Vec<u8>> {
    let img = image::load_from_memory(data).context("Failed to decode car image")?;
    let mut png = Vec::new();
    img.write_to(&mut Cursor::new(&mut png), ImageFormat::Png)
        .context("Failed to encode car image as PNG")?;
    Ok(png)
}

/// Print a base64 image inline using `protocol`.
pub fn display_base64(protocol: Protocol, encoded: &str) -> Result<()> {
    let sequence = match protocol {
        Protocol::None => return Ok(()),
        Protocol::ITerm => {
            let data = STANDARD
                .decode(encoded.trim())
                .context("Car image is not valid base64")?;
            iterm_sequence(&data)
        }
        Protocol::Kitty => {
            let data = STANDARD
                .decode(encoded.trim())
                .context("Car image is not valid base64")?;
            kitty_sequence(&to_png(&data)?)
        }
    };

    let mut stdout = io::stdout().lock();
    write!(stdout, "{sequence}")?;
    writeln!(stdout)?;
    stdout.flush()?;

    Ok(())
}
